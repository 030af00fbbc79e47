//! Code point cursor over the input.

use crate::error::{Error, Result};

/// Cursor that walks a string one code point at a time.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a cursor at the start of `input`.
    #[must_use]
    pub const fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    /// Peeks at the current code point without consuming it.
    #[must_use]
    pub fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    /// Advances by one code point and returns it.
    pub fn advance(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.pos += ch.len_utf8();
        Some(ch)
    }

    /// Discards everything up to and including the next `)`.
    ///
    /// `open` is the offset of the `(` that was just consumed. Comments do
    /// not nest: the first `)` closes.
    pub fn skip_comment(&mut self, open: usize) -> Result<()> {
        while let Some(ch) = self.advance() {
            if ch == ')' {
                return Ok(());
            }
        }
        Err(Error::UnterminatedComment { offset: open })
    }

    /// Reads up to and including the next `]`, returning the text between.
    ///
    /// Call after consuming the `[`. If the input ends first, everything
    /// after the `[` is returned.
    pub fn read_domain_literal(&mut self) -> &'a str {
        let start = self.pos;
        while let Some(ch) = self.advance() {
            if ch == ']' {
                return &self.input[start..self.pos - 1];
            }
        }
        &self.input[start..]
    }
}

impl Iterator for Cursor<'_> {
    type Item = (usize, char);

    fn next(&mut self) -> Option<Self::Item> {
        let offset = self.pos;
        self.advance().map(|ch| (offset, ch))
    }
}
