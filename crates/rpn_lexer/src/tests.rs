use super::*;
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rpn_ir::BinaryOp;

#[test]
fn integers_and_decimals_are_numbers() {
    assert_eq!(classify("5"), Token::Number(5.0));
    assert_eq!(classify("42"), Token::Number(42.0));
    assert_eq!(classify("3.5"), Token::Number(3.5));
    assert_eq!(classify("0"), Token::Number(0.0));
}

#[test]
fn leading_minus_is_part_of_the_literal() {
    assert_eq!(classify("-1"), Token::Number(-1.0));
    assert_eq!(classify("-2.25"), Token::Number(-2.25));
}

#[test]
fn dot_may_lead_or_trail() {
    assert_eq!(classify("5."), Token::Number(5.0));
    assert_eq!(classify(".5"), Token::Number(0.5));
    assert_eq!(classify("-.5"), Token::Number(-0.5));
}

#[test]
fn malformed_numbers_are_unrecognized() {
    for word in ["1.2.3", "--5", "+5", "5e3", "1_000", "5foo", "0x10", ".", "-."] {
        assert_eq!(classify(word), Token::Unrecognized(word), "{word}");
    }
}

#[test]
fn bare_minus_is_subtraction() {
    assert_eq!(classify("-"), Token::Operator(Operator::Binary(BinaryOp::Sub)));
}

#[test]
fn every_operator_symbol_classifies() {
    for op in Operator::ALL {
        assert_eq!(classify(op.as_symbol()), Token::Operator(op));
    }
}

#[test]
fn every_command_classifies() {
    for cmd in Command::ALL {
        assert_eq!(classify(cmd.as_str()), Token::Command(cmd));
    }
}

#[test]
fn near_misses_are_unrecognized() {
    for word in ["foo", "sqrtx", "Sqrt", "++", "quit", "exit", "clears", ""] {
        assert_eq!(classify(word), Token::Unrecognized(word), "{word}");
    }
}

#[test]
fn tokenize_reports_spans() {
    let words: Vec<_> = tokenize("  5 3\t+ ").collect();
    assert_eq!(
        words,
        vec![
            (Span::new(2, 3), "5"),
            (Span::new(4, 5), "3"),
            (Span::new(6, 7), "+"),
        ]
    );
}

#[test]
fn tokenize_empty_and_blank_lines() {
    assert_eq!(tokenize("").count(), 0);
    assert_eq!(tokenize(" \t  ").count(), 0);
}

#[test]
fn tokenize_multibyte_whitespace() {
    let line = "1\u{3000}2";
    let words: Vec<_> = tokenize(line).map(|(_, w)| w).collect();
    assert_eq!(words, vec!["1", "2"]);
}

proptest! {
    #[test]
    fn decimal_literals_parse_to_their_value(int in 0u32..1_000_000, frac in 0u32..1000, neg in any::<bool>()) {
        let word = format!("{}{int}.{frac}", if neg { "-" } else { "" });
        let expected: f64 = word.parse().unwrap_or_default();
        prop_assert_eq!(classify(&word), Token::Number(expected));
    }

    #[test]
    fn words_never_contain_whitespace(line in "[ a-z0-9.+\\-\t]{0,40}") {
        for (span, word) in tokenize(&line) {
            prop_assert!(!word.is_empty());
            prop_assert!(!word.contains(char::is_whitespace));
            prop_assert_eq!(&line[span.start..span.end], word);
        }
    }
}
