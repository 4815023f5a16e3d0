//! Directive attribute parsing.
//!
//! Parses the part of a directive between `%` and the conversion character:
//! `[index$ | flags width] [.precision]`.

use crate::attribute::{Flags, FormatAttribute, Precision};
use crate::error::FormatError;

/// Scan position within a template.
///
/// Every method leaves the cursor on the next unconsumed character.
/// Positions are byte offsets into the template.
#[derive(Debug)]
pub(crate) struct Cursor<'a> {
    template: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(template: &'a str) -> Self {
        Self { template, pos: 0 }
    }

    pub(crate) fn position(&self) -> usize {
        self.pos
    }

    pub(crate) fn is_at_end(&self) -> bool {
        self.pos >= self.template.len()
    }

    pub(crate) fn peek(&self) -> Option<char> {
        self.template[self.pos..].chars().next()
    }

    /// Peek, treating end of template as a malformed directive.
    pub(crate) fn expect_peek(&self) -> Result<char, FormatError> {
        self.peek()
            .ok_or(FormatError::UnexpectedEnd { position: self.pos })
    }

    pub(crate) fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    /// Consume the literal text up to the next `%` or the end.
    pub(crate) fn take_literal(&mut self) -> &'a str {
        let rest = &self.template[self.pos..];
        let end = rest.find('%').unwrap_or(rest.len());
        self.pos += end;
        &rest[..end]
    }

    /// Read a decimal integer.
    ///
    /// Only starts on `1`-`9`, so a leading `0` is never part of a number;
    /// it is left for the flag parser (or rejected as a conversion).
    pub(crate) fn read_int(&mut self) -> Option<usize> {
        let first = self.peek().filter(|c| ('1'..='9').contains(c))?;
        self.bump();
        let mut value = digit(first);
        while let Some(c) = self.peek().filter(char::is_ascii_digit) {
            self.bump();
            value = value.saturating_mul(10).saturating_add(digit(c));
        }
        Some(value)
    }

    /// Parse attributes, stopping on the conversion character.
    pub(crate) fn parse_attribute(&mut self) -> Result<FormatAttribute, FormatError> {
        let mut attr = FormatAttribute::default();
        self.parse_index_flags_width(&mut attr)?;

        if self.expect_peek()? == '.' {
            self.bump();
            attr.precision = Precision::Exact(self.read_int().unwrap_or(0));
        }

        Ok(attr)
    }

    /// A leading integer is an argument index when followed by `$`.
    /// Otherwise it is the minimum width and flags are not read.
    fn parse_index_flags_width(&mut self, attr: &mut FormatAttribute) -> Result<(), FormatError> {
        if let Some(v) = self.read_int() {
            if self.expect_peek()? != '$' {
                attr.min_width = v;
                return Ok(());
            }
            self.bump();
            // 1-origin in templates; read_int never yields 0
            attr.arg_index = Some(v - 1);
        }

        while let Some(flag) = self.peek().and_then(Flags::from_char) {
            attr.flags |= flag;
            self.bump();
        }

        if let Some(v) = self.read_int() {
            attr.min_width = v;
        }

        Ok(())
    }
}

fn digit(c: char) -> usize {
    c.to_digit(10).map_or(0, |d| d as usize)
}
