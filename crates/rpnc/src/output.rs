//! Output sinks for the shell.
//!
//! Output can be directed to different destinations:
//! - Terminal: stdout for results, stderr for failures (default)
//! - Buffer: everything captured in order, for tests
//!
//! Uses enum dispatch rather than trait objects; there are only two sinks.

use std::io::Write;

use parking_lot::Mutex;

/// Output handler that captures everything to a buffer.
pub struct BufferPrintHandler {
    buffer: Mutex<String>,
}

impl BufferPrintHandler {
    pub fn new() -> Self {
        BufferPrintHandler {
            buffer: Mutex::new(String::new()),
        }
    }

    fn push(&self, msg: &str, newline: bool) {
        let mut buf = self.buffer.lock();
        buf.push_str(msg);
        if newline {
            buf.push('\n');
        }
    }

    /// Get all captured output.
    pub fn get_output(&self) -> String {
        self.buffer.lock().clone()
    }

    /// Clear captured output.
    pub fn clear(&self) {
        self.buffer.lock().clear();
    }
}

impl Default for BufferPrintHandler {
    fn default() -> Self {
        Self::new()
    }
}

/// Where the shell writes.
pub enum PrintHandler {
    /// Results to stdout, failures to stderr.
    Terminal,
    /// Captures both streams, interleaved, in one buffer.
    Buffer(BufferPrintHandler),
}

impl PrintHandler {
    /// Print a line (with newline).
    pub fn println(&self, msg: &str) {
        match self {
            Self::Terminal => println!("{msg}"),
            Self::Buffer(h) => h.push(msg, true),
        }
    }

    /// Print without newline, flushing so prompts appear before input.
    pub fn print(&self, msg: &str) {
        match self {
            Self::Terminal => {
                let mut stdout = std::io::stdout().lock();
                // A closed stdout is not worth aborting the session for.
                let _ = stdout.write_all(msg.as_bytes());
                let _ = stdout.flush();
            }
            Self::Buffer(h) => h.push(msg, false),
        }
    }

    /// Print a failure report line.
    pub fn eprintln(&self, msg: &str) {
        match self {
            Self::Terminal => eprintln!("{msg}"),
            Self::Buffer(h) => h.push(msg, true),
        }
    }

    /// Captured output; empty for the terminal.
    pub fn get_output(&self) -> String {
        match self {
            Self::Terminal => String::new(),
            Self::Buffer(h) => h.get_output(),
        }
    }

    /// Clear captured output. No-op for the terminal.
    pub fn clear(&self) {
        match self {
            Self::Terminal => {}
            Self::Buffer(h) => h.clear(),
        }
    }
}

/// Output handler shared between a session and whoever inspects it.
pub type SharedPrintHandler = std::sync::Arc<PrintHandler>;

/// Create the default terminal handler.
pub fn stdout_handler() -> SharedPrintHandler {
    std::sync::Arc::new(PrintHandler::Terminal)
}

/// Create a buffer handler for capturing output.
pub fn buffer_handler() -> SharedPrintHandler {
    std::sync::Arc::new(PrintHandler::Buffer(BufferPrintHandler::new()))
}
