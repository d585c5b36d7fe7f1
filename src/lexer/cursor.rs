use std::{iter::Peekable, str::Chars};

use crate::span::Bytes;

/// A non-destructive read cursor over the source string.
///
/// The source itself is never modified; the cursor only advances a peekable
/// char iterator and tracks the byte position it has reached, so the original
/// text stays available for error reporting.
pub struct CharCursor<'a> {
    chars: Peekable<Chars<'a>>,
    byte_position: Bytes,
}

impl<'a> CharCursor<'a> {
    /// Constructs a new [`CharCursor`] for the given source string,
    /// starting at position `0`.
    pub fn new(source: &'a str) -> Self {
        Self {
            chars: source.chars().peekable(),
            byte_position: Bytes::new(0),
        }
    }

    /// Reads the next character.
    /// Panics if the cursor cannot advance any further.
    pub fn next(&mut self) -> char {
        self.try_next().expect("Unable to advance the cursor")
    }

    /// Tries to advance the cursor by one character.
    /// Returns the character wrapped in an [`Option`] if it was successful,
    /// or [`None`] if the cursor cannot advance any further.
    pub fn try_next(&mut self) -> Option<char> {
        let next = self.chars.next();
        if let Some(ch) = next {
            self.byte_position += ch.len_utf8();
        }
        next
    }

    /// Returns the next character without consuming it.
    /// Returns [`None`] if the cursor cannot advance any further.
    pub fn peek(&mut self) -> Option<char> {
        self.chars.peek().copied()
    }

    /// Retrieves the byte position of the cursor.
    pub fn byte_position(&self) -> Bytes {
        self.byte_position
    }

    /// Consumes characters while `P(char)` evaluates to `true`.
    /// Returns a [`String`] containing the consumed characters.
    pub fn eat_while<P>(&mut self, mut predicate: P) -> String
    where
        P: FnMut(&char) -> bool,
    {
        let mut matches = String::new();
        while let Some(ch) = self.chars.peek() {
            if predicate(ch) {
                matches.push(*ch);
                self.next();
            } else {
                break;
            }
        }
        matches
    }
}
