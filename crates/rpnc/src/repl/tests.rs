use super::*;
use crate::config::SessionConfig;
use crate::output::buffer_handler;
use pretty_assertions::assert_eq;

const BANNER: &str = "=== RPN Calculator ===\nType 'help' for usage\nType 'quit' to exit\n\n";

fn run(input: &str) -> (Session, usize) {
    let mut session = Session::new(SessionConfig::default(), buffer_handler());
    let evaluated = match run_repl(&mut session, input.as_bytes()) {
        Ok(n) => n,
        Err(e) => panic!("repl failed: {e}"),
    };
    (session, evaluated)
}

#[test]
fn exit_words() {
    assert!(is_exit_command("quit"));
    assert!(is_exit_command("exit"));
    assert!(!is_exit_command("clear"));
    assert!(!is_exit_command("quit now"));
}

#[test]
fn evaluates_until_quit() {
    let (session, evaluated) = run("5 3 +\n\nquit\n9 sqrt\n");
    assert_eq!(evaluated, 1);
    assert_eq!(session.state().top(), Some(8.0));
    assert_eq!(
        session.output().get_output(),
        format!("{BANNER}> Result: 8.000000\n> > Goodbye!\n")
    );
}

#[test]
fn exit_also_ends_session() {
    let (_, evaluated) = run("  exit  \n1\n");
    assert_eq!(evaluated, 0);
}

#[test]
fn end_of_input_ends_session() {
    let (session, evaluated) = run("1 2\n+");
    assert_eq!(evaluated, 2);
    assert_eq!(session.state().top(), Some(3.0));
    assert!(session.output().get_output().ends_with("> \nGoodbye!\n"));
}

#[test]
fn failures_do_not_end_session() {
    let (session, evaluated) = run("+\n4 0 /\n2 2 *\n");
    assert_eq!(evaluated, 3);
    assert_eq!(session.state().top(), Some(4.0));
    let output = session.output().get_output();
    assert!(output.contains("error: stack underflow: need 2 operands, have 0"));
    assert!(output.contains("error: division by zero"));
}

#[test]
fn invalid_utf8_line_does_not_end_session() {
    let mut session = Session::new(SessionConfig::default(), buffer_handler());
    let evaluated = match run_repl(&mut session, &b"5 3 +\n\xff\xfe foo\n2 *\n"[..]) {
        Ok(n) => n,
        Err(e) => panic!("repl failed: {e}"),
    };
    assert_eq!(evaluated, 3);
    assert_eq!(session.state().top(), Some(16.0));
    let output = session.output().get_output();
    assert!(output.contains("error: unknown operator '\u{fffd}\u{fffd}'"));
    assert!(output.contains("error: unknown operator 'foo'"));
    assert!(output.ends_with("Goodbye!\n"));
}
