//! Session configuration.
//!
//! Built from command-line flags, then environment overrides. Flags may
//! appear anywhere on the command line; everything that is not a flag is
//! returned to the caller as a positional argument.

use crate::error::ShellError;

/// Environment variable overriding the display precision.
pub const PRECISION_ENV: &str = "RPN_PRECISION";

/// Largest accepted display precision.
pub const MAX_PRECISION: usize = 17;

/// What the shell does with the rest of a line after a token fails.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ErrorPolicy {
    /// Report the failure and go on with the next token.
    #[default]
    Continue,
    /// Report the failure and drop the remaining tokens of the line.
    StopLine,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionConfig {
    /// Push operands back when an operator's computation fails.
    pub restore_on_failure: bool,
    /// Fractional digits when displaying values.
    pub precision: usize,
    pub error_policy: ErrorPolicy,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            restore_on_failure: false,
            precision: 6,
            error_policy: ErrorPolicy::Continue,
        }
    }
}

impl SessionConfig {
    /// Split `args` into a default config plus flags, and the remaining
    /// positional arguments.
    pub fn from_args<I, S>(args: I) -> Result<(Self, Vec<String>), ShellError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::default().with_args(args)
    }

    /// Build the full config: defaults, then the environment, then flags.
    ///
    /// The environment is consulted only for settings the flags leave
    /// unset, so a bad `RPN_PRECISION` does not matter when `--precision`
    /// is given.
    pub fn load<I, S, F>(args: I, lookup: F) -> Result<(Self, Vec<String>), ShellError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
        F: Fn(&str) -> Option<String>,
    {
        let args: Vec<String> = args.into_iter().map(Into::into).collect();
        let precision_flag = args.iter().any(|arg| arg.starts_with("--precision="));
        let mut config = Self::default();
        if !precision_flag {
            config.apply_env(lookup)?;
        }
        config.with_args(args)
    }

    /// Apply the flags in `args` on top of `self`, returning the positional
    /// arguments. Flags win over anything already set, including the
    /// environment.
    pub fn with_args<I, S>(mut self, args: I) -> Result<(Self, Vec<String>), ShellError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut positional = Vec::new();
        for arg in args {
            let arg = arg.into();
            if !self.apply_flag(&arg)? {
                positional.push(arg);
            }
        }
        Ok((self, positional))
    }

    /// Apply one flag. Returns `false` when `arg` is not a flag at all.
    ///
    /// A lone `-` followed by digits is a negative number, not a flag, so
    /// `rpn eval -3 4 +` keeps working. `--help` and `--version` are left
    /// for the command dispatcher.
    pub fn apply_flag(&mut self, arg: &str) -> Result<bool, ShellError> {
        if arg == "--restore-on-failure" {
            self.restore_on_failure = true;
        } else if arg == "--stop-on-error" {
            self.error_policy = ErrorPolicy::StopLine;
        } else if let Some(value) = arg.strip_prefix("--precision=") {
            self.precision = parse_precision("--precision", value)?;
        } else if arg.starts_with("--") && !matches!(arg, "--help" | "--version") {
            return Err(ShellError::UnknownFlag(arg.to_string()));
        } else {
            return Ok(false);
        }
        Ok(true)
    }

    /// Apply environment overrides through `lookup`.
    ///
    /// Takes a lookup function instead of reading the process environment
    /// directly, so tests need not mutate global state.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), ShellError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup(PRECISION_ENV) {
            self.precision = parse_precision(PRECISION_ENV, &value)?;
        }
        Ok(())
    }
}

fn parse_precision(flag: &'static str, value: &str) -> Result<usize, ShellError> {
    value
        .trim()
        .parse::<usize>()
        .ok()
        .filter(|p| *p <= MAX_PRECISION)
        .ok_or_else(|| ShellError::InvalidFlagValue {
            flag,
            value: value.to_string(),
        })
}
