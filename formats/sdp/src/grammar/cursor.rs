use std::str::FromStr;

use super::{chars::SP, rules};
use crate::errors::{SDPError, SDPResult};

/// A read position inside one record or attribute value.
///
/// Rules are applied through the cursor; a rule that does not match leaves the
/// position untouched, so after a failure [`Cursor::position`] is the column the
/// failure happened at.
#[derive(Debug, Clone, Copy)]
pub struct Cursor<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(src: &'a str) -> Self {
        Self { src, pos: 0 }
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn source(&self) -> &'a str {
        self.src
    }

    pub fn is_at_end(&self) -> bool {
        self.pos >= self.src.len()
    }

    pub fn peek(&self) -> Option<u8> {
        self.src.as_bytes().get(self.pos).copied()
    }

    pub fn peek_is(&self, c: u8) -> bool {
        self.peek() == Some(c)
    }

    pub fn starts_with(&self, lit: &str) -> bool {
        self.remaining().starts_with(lit)
    }

    pub fn remaining(&self) -> &'a str {
        self.src.get(self.pos..).unwrap_or_default()
    }

    fn error(&self, what: &str) -> SDPError {
        SDPError::SyntaxError(format!(
            "expect {} at {}, got: \"{}\"",
            what,
            self.pos,
            self.remaining()
        ))
    }

    fn advance_to(&mut self, end: usize) -> Option<&'a str> {
        let taken = self.src.get(self.pos..end)?;
        self.pos = end;
        Some(taken)
    }

    /// Applies `rule` and advances past the match, `None` when the rule is absent here.
    pub fn try_rule(&mut self, rule: impl Fn(&[u8], usize) -> Option<usize>) -> Option<&'a str> {
        let end = rule(self.src.as_bytes(), self.pos)?;
        self.advance_to(end)
    }

    /// Applies a mandatory `rule`.
    pub fn rule(
        &mut self,
        rule: impl Fn(&[u8], usize) -> Option<usize>,
        what: &str,
    ) -> SDPResult<&'a str> {
        self.try_rule(rule).ok_or_else(|| self.error(what))
    }

    pub fn one_or_more(&mut self, pred: impl Fn(u8) -> bool, what: &str) -> SDPResult<&'a str> {
        self.rule(|bytes, pos| rules::one_or_more(bytes, pos, &pred), what)
    }

    pub fn bounded(
        &mut self,
        pred: impl Fn(u8) -> bool,
        min: usize,
        max: usize,
        what: &str,
    ) -> SDPResult<&'a str> {
        self.rule(|bytes, pos| rules::bounded(bytes, pos, &pred, min, max), what)
    }

    pub fn space(&mut self) -> SDPResult<()> {
        self.rule(rules::space, "space").map(|_| ())
    }

    pub fn try_space(&mut self) -> bool {
        self.try_rule(rules::space).is_some()
    }

    pub fn literal(&mut self, lit: &str) -> SDPResult<()> {
        self.rule(|bytes, pos| rules::literal(bytes, pos, lit), &format!("\"{}\"", lit))
            .map(|_| ())
    }

    pub fn try_literal(&mut self, lit: &str) -> bool {
        self.try_rule(|bytes, pos| rules::literal(bytes, pos, lit))
            .is_some()
    }

    /// Everything up to the next `stop` byte (or the end), possibly empty.
    pub fn till(&mut self, stop: u8) -> &'a str {
        self.try_rule(|bytes, pos| Some(rules::till(bytes, pos, stop)))
            .unwrap_or_default()
    }

    /// Everything up to the next space, at least one byte.
    pub fn word(&mut self, what: &str) -> SDPResult<&'a str> {
        self.rule(
            |bytes, pos| {
                let end = rules::till(bytes, pos, SP);
                (end > pos).then_some(end)
            },
            what,
        )
    }

    pub fn take_rest(&mut self) -> &'a str {
        let rest = self.remaining();
        self.pos = self.src.len();
        rest
    }

    /// A `1*DIGIT` run converted to `T`.
    pub fn number<T: FromStr>(&mut self, what: &str) -> SDPResult<T> {
        let digits = self.rule(rules::digits, what)?;
        parse_number(digits, what)
    }

    /// A `1*DIGIT` run of at most `max_digits` converted to `T`.
    pub fn bounded_number<T: FromStr>(&mut self, max_digits: usize, what: &str) -> SDPResult<T> {
        let digits = self.bounded(|c| c.is_ascii_digit(), 1, max_digits, what)?;
        parse_number(digits, what)
    }

    pub fn expect_end(&self) -> SDPResult<()> {
        if self.is_at_end() {
            Ok(())
        } else {
            Err(self.error("end of value"))
        }
    }
}

/// Converts a run of digits, a run that does not fit is an overflow.
pub fn parse_number<T: FromStr>(digits: &str, what: &str) -> SDPResult<T> {
    digits.parse().map_err(|_| {
        SDPError::IntegerOverflow(format!("{} out of range: {}", what, digits))
    })
}
