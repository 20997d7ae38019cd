use super::*;

fn assert_close(actual: EvalResult<Value>, expected: Value) {
    match actual {
        Ok(v) => assert!(
            (v - expected).abs() < 1e-12,
            "expected {expected}, got {v}"
        ),
        Err(e) => panic!("expected {expected}, got error: {e}"),
    }
}

mod sqrt {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn perfect_square() {
        assert_eq!(evaluate_unary(9.0, UnaryOp::Sqrt), Ok(3.0));
        assert_eq!(evaluate_unary(0.0, UnaryOp::Sqrt), Ok(0.0));
    }

    #[test]
    fn irrational_root() {
        assert_close(evaluate_unary(2.0, UnaryOp::Sqrt), std::f64::consts::SQRT_2);
    }

    #[test]
    fn negative_fails() {
        assert_eq!(
            evaluate_unary(-1.0, UnaryOp::Sqrt),
            Err(EvalError::NegativeOperand)
        );
        assert_eq!(
            evaluate_unary(-1e-300, UnaryOp::Sqrt),
            Err(EvalError::NegativeOperand)
        );
    }
}

mod trig {
    use super::*;

    #[test]
    fn sine_in_degrees() {
        assert_close(evaluate_unary(30.0, UnaryOp::Sin), 0.5);
        assert_close(evaluate_unary(90.0, UnaryOp::Sin), 1.0);
        assert_close(evaluate_unary(180.0, UnaryOp::Sin), 0.0);
        assert_close(evaluate_unary(-90.0, UnaryOp::Sin), -1.0);
    }

    #[test]
    fn cosine_in_degrees() {
        assert_close(evaluate_unary(0.0, UnaryOp::Cos), 1.0);
        assert_close(evaluate_unary(60.0, UnaryOp::Cos), 0.5);
        assert_close(evaluate_unary(180.0, UnaryOp::Cos), -1.0);
    }

    #[test]
    fn tangent_in_degrees() {
        assert_close(evaluate_unary(45.0, UnaryOp::Tan), 1.0);
        assert_close(evaluate_unary(0.0, UnaryOp::Tan), 0.0);
    }
}

mod fib {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn base_cases() {
        assert_eq!(fibonacci(0.0), Ok(0.0));
        assert_eq!(fibonacci(1.0), Ok(1.0));
    }

    #[test]
    fn small_values() {
        let expected = [0.0, 1.0, 1.0, 2.0, 3.0, 5.0, 8.0, 13.0, 21.0, 34.0, 55.0];
        for (n, want) in (0u8..).zip(expected) {
            let n = f64::from(n);
            assert_eq!(evaluate_unary(n, UnaryOp::Fib), Ok(want), "fib({n})");
        }
    }

    #[test]
    fn follows_the_recurrence() {
        for n in 2..80 {
            let n = f64::from(n);
            let (Ok(a), Ok(b), Ok(c)) = (fibonacci(n - 2.0), fibonacci(n - 1.0), fibonacci(n))
            else {
                panic!("fib failed near {n}");
            };
            assert_eq!(a + b, c, "fib({n})");
        }
    }

    #[test]
    fn fib_50() {
        assert_eq!(fibonacci(50.0), Ok(12_586_269_025.0));
    }

    #[test]
    fn huge_input_saturates_quickly() {
        assert_eq!(fibonacci(1e15), Ok(f64::INFINITY));
        assert!(matches!(fibonacci(1476.0), Ok(v) if v.is_finite()));
        assert_eq!(fibonacci(1477.0), Ok(f64::INFINITY));
    }

    #[test]
    fn negative_fails() {
        assert_eq!(fibonacci(-1.0), Err(EvalError::InvalidFibonacciInput));
    }

    #[test]
    fn fractional_fails() {
        assert_eq!(fibonacci(3.5), Err(EvalError::InvalidFibonacciInput));
        assert_eq!(fibonacci(0.1), Err(EvalError::InvalidFibonacciInput));
    }

    #[test]
    fn non_finite_fails() {
        assert_eq!(fibonacci(f64::NAN), Err(EvalError::InvalidFibonacciInput));
        assert_eq!(
            fibonacci(f64::INFINITY),
            Err(EvalError::InvalidFibonacciInput)
        );
    }
}
