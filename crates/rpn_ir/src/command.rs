//! Stack-management commands understood by the engine.
//!
//! `quit` and `exit` are not here: they end the session and are handled by
//! the shell before a line ever reaches the engine.

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Command {
    /// Empty the operand stack.
    Clear,
    /// Snapshot the stack, bottom to top.
    Show,
    /// Copy of the history log.
    History,
    /// Static help text.
    Help,
}

impl Command {
    pub const ALL: [Command; 4] = [Self::Clear, Self::Show, Self::History, Self::Help];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Clear => "clear",
            Self::Show => "show",
            Self::History => "history",
            Self::Help => "help",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::Clear => "clear the stack",
            Self::Show => "show the current stack",
            Self::History => "show the calculation history",
            Self::Help => "show this help",
        }
    }

    /// Only `clear` mutates engine state.
    pub const fn is_read_only(self) -> bool {
        !matches!(self, Self::Clear)
    }
}

impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
