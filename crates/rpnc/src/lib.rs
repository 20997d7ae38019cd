//! rpnc - the calculator shell.
//!
//! Everything around the engine: configuration, output sinks, display
//! formatting, the line-oriented session, the interactive loop, and batch
//! evaluation. The `rpn` binary in `main.rs` is a thin dispatcher over the
//! functions in [`commands`].

pub mod commands;
pub mod config;
pub mod display;
mod error;
pub mod output;
pub mod repl;
pub mod session;

pub use config::{ErrorPolicy, SessionConfig};
pub use error::ShellError;
pub use output::{buffer_handler, stdout_handler, PrintHandler, SharedPrintHandler};
pub use session::{BatchSummary, LineSummary, Session};

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Call this once at startup. Safe to call multiple times.
/// Enable with `RUST_LOG=rpn_eval=debug` or `RUST_LOG=rpnc=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_level(true),
                )
                .with(filter)
                .init();
        }
    });
}
