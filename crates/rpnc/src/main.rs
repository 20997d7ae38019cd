//! RPN Calculator CLI

use std::path::Path;
use std::process::ExitCode;

use rpnc::{commands, init_tracing, stdout_handler, SessionConfig};

fn main() -> ExitCode {
    init_tracing();

    let loaded = SessionConfig::load(std::env::args().skip(1), |key| std::env::var(key).ok());
    let (config, args) = match loaded {
        Ok(parsed) => parsed,
        Err(e) => {
            eprintln!("error: {e}");
            eprintln!();
            print_usage();
            return ExitCode::FAILURE;
        }
    };

    let out = stdout_handler();
    let command = args.first().map_or("repl", String::as_str);

    match command {
        "repl" => match commands::repl(config, out) {
            Ok(_) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("error: {e}");
                ExitCode::FAILURE
            }
        },
        "eval" => {
            if args.len() < 2 {
                eprintln!("Usage: rpn eval <expression>...");
                eprintln!("Example: rpn eval \"5 3 +\" \"2 *\"");
                return ExitCode::FAILURE;
            }
            let summary = commands::eval_expressions(&args[1..], config, out);
            exit_code(summary.failed_expressions)
        }
        "batch" => {
            let Some(path) = args.get(1) else {
                eprintln!("Usage: rpn batch <file>");
                return ExitCode::FAILURE;
            };
            match commands::batch_file(Path::new(path), config, out) {
                Ok(summary) => exit_code(summary.failed_expressions),
                Err(e) => {
                    eprintln!("{e}");
                    ExitCode::FAILURE
                }
            }
        }
        "help" | "--help" | "-h" => {
            print_usage();
            ExitCode::SUCCESS
        }
        "version" | "--version" | "-V" => {
            println!("rpn {}", env!("CARGO_PKG_VERSION"));
            ExitCode::SUCCESS
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            ExitCode::FAILURE
        }
    }
}

/// Non-interactive runs exit non-zero when any expression had a failing token.
fn exit_code(failed_expressions: usize) -> ExitCode {
    if failed_expressions == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn print_usage() {
    println!("RPN Calculator");
    println!();
    println!("Usage: rpn [command] [options]");
    println!();
    println!("Commands:");
    println!("  repl                 Interactive calculator (default)");
    println!("  eval <expr>...       Evaluate each expression in turn, sharing one stack");
    println!("  batch <file>         Evaluate a file, one expression per line ('#' comments)");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Options:");
    println!("  --precision=<n>       Fractional digits in output (default: 6, max: 17)");
    println!("  --restore-on-failure  Put operands back when an operator fails");
    println!("  --stop-on-error       Skip the rest of a line after a failing token");
    println!();
    println!("Environment:");
    println!("  RPN_PRECISION         Same as --precision");
    println!("  RUST_LOG              Enable tracing (e.g. RUST_LOG=rpn_eval=debug)");
    println!();
    println!("Examples:");
    println!("  rpn");
    println!("  rpn eval \"5 3 +\" \"2 *\"        # 8, then 16");
    println!("  rpn eval \"4 0 /\" --restore-on-failure");
    println!("  rpn batch expressions.rpn");
}
