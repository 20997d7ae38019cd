//! A calculator session: one engine state plus the shell around it.
//!
//! The session splits each line into tokens, feeds them to the evaluator
//! one at a time, and reports outcomes and failures through its
//! [`SharedPrintHandler`]. No failure ends the session.

use rpn_eval::{EngineState, Evaluator, Outcome, Value};
use rpn_lexer::tokenize;

use crate::config::{ErrorPolicy, SessionConfig};
use crate::display::{format_failure, format_history, format_result, format_stack};
use crate::output::SharedPrintHandler;

/// What a single line did.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LineSummary {
    /// Tokens that failed.
    pub failures: usize,
    /// Tokens never evaluated because of [`ErrorPolicy::StopLine`].
    pub skipped: usize,
    /// Top of stack after the line, if any.
    pub top: Option<Value>,
}

/// What a batch run did.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub expressions: usize,
    /// Expressions with at least one failing token.
    pub failed_expressions: usize,
}

pub struct Session {
    evaluator: Evaluator,
    state: EngineState,
    config: SessionConfig,
    out: SharedPrintHandler,
}

impl Session {
    pub fn new(config: SessionConfig, out: SharedPrintHandler) -> Self {
        let evaluator = Evaluator::builder()
            .restore_on_failure(config.restore_on_failure)
            .build();
        Self {
            evaluator,
            state: EngineState::new(),
            config,
            out,
        }
    }

    pub fn state(&self) -> &EngineState {
        &self.state
    }

    pub fn output(&self) -> &SharedPrintHandler {
        &self.out
    }

    /// Evaluate every token of `line`, then print the top of stack.
    pub fn run_line(&mut self, line: &str) -> LineSummary {
        let mut summary = LineSummary::default();
        let mut tokens = tokenize(line);
        while let Some((span, token)) = tokens.next() {
            match self.evaluator.process_token(&mut self.state, token) {
                Ok(outcome) => self.report(outcome),
                Err(error) => {
                    tracing::debug!(token, %error, "token failed");
                    self.out.eprintln(&format_failure(line, span, &error));
                    summary.failures += 1;
                    if self.config.error_policy == ErrorPolicy::StopLine {
                        summary.skipped = tokens.by_ref().count();
                        break;
                    }
                }
            }
        }

        summary.top = self.state.top();
        if let Some(top) = summary.top {
            self.out.println(&format_result(top, self.config.precision));
        }
        summary
    }

    /// Evaluate each expression against this session's shared state.
    ///
    /// Every expression is echoed, followed by its result or failures and a
    /// `---` separator.
    pub fn run_batch<I, S>(&mut self, expressions: I) -> BatchSummary
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut summary = BatchSummary::default();
        for expression in expressions {
            let expression = expression.as_ref();
            self.out.println(&format!("Evaluating: {expression}"));
            let line = self.run_line(expression);
            self.out.println("---");

            summary.expressions += 1;
            if line.failures > 0 {
                summary.failed_expressions += 1;
            }
        }
        tracing::debug!(?summary, "batch finished");
        summary
    }

    fn report(&self, outcome: Outcome) {
        match outcome {
            Outcome::Pushed(_) | Outcome::Applied { .. } => {}
            Outcome::Cleared => self.out.println("Stack cleared"),
            Outcome::Show(values) => self
                .out
                .println(&format_stack(&values, self.config.precision)),
            Outcome::History(entries) => self.out.println(&format_history(&entries)),
            Outcome::Help(text) => self.out.println(text),
        }
    }
}
