//! RPN Lexer - token classification for calculator input.
//!
//! Input is whitespace-delimited. Each word is classified on its own as a
//! numeric literal, an operator, a command, or nothing we recognize. The
//! logos-derived [`RawToken`] does the matching; a word only counts as a
//! token when a single raw token covers all of it, so `5foo` or `1.2.3`
//! are rejected as a whole rather than split.

use logos::Logos;
use rpn_ir::{Command, Operator, Span, Value};

mod raw_token;

use raw_token::RawToken;

/// A classified word.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Token<'a> {
    /// Optional leading `-`, digits, at most one `.`.
    Number(Value),
    Operator(Operator),
    Command(Command),
    /// Matches nothing above. Evaluating it is an error.
    Unrecognized(&'a str),
}

impl Token<'_> {
    /// Short category name, used in trace output.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Token::Number(_) => "number",
            Token::Operator(_) => "operator",
            Token::Command(_) => "command",
            Token::Unrecognized(_) => "unrecognized",
        }
    }
}

/// Classify a single whitespace-free word.
pub fn classify(word: &str) -> Token<'_> {
    let mut lexer = RawToken::lexer(word);
    let Some(Ok(raw)) = lexer.next() else {
        return Token::Unrecognized(word);
    };
    if lexer.span() != (0..word.len()) || lexer.next().is_some() {
        return Token::Unrecognized(word);
    }
    match raw {
        RawToken::Number(value) => Token::Number(value),
        RawToken::Operator(op) => Token::Operator(op),
        RawToken::Clear => Token::Command(Command::Clear),
        RawToken::Show => Token::Command(Command::Show),
        RawToken::History => Token::Command(Command::History),
        RawToken::Help => Token::Command(Command::Help),
    }
}

/// Split a line into whitespace-delimited words with their byte spans.
pub fn tokenize(line: &str) -> Words<'_> {
    Words { line, offset: 0 }
}

/// Iterator over the words of a line. See [`tokenize`].
#[derive(Clone, Debug)]
pub struct Words<'a> {
    line: &'a str,
    offset: usize,
}

impl<'a> Iterator for Words<'a> {
    type Item = (Span, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        let rest = &self.line[self.offset..];
        let start = self.offset + rest.find(|c: char| !c.is_whitespace())?;
        let end = self.line[start..]
            .find(char::is_whitespace)
            .map_or(self.line.len(), |len| start + len);
        self.offset = end;
        Some((Span::new(start, end), &self.line[start..end]))
    }
}

#[cfg(test)]
mod tests;
