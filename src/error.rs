// Copyright (c) 2019 Georg Brandl.  Licensed under the Apache License,
// Version 2.0 <LICENSE-APACHE or http://www.apache.org/licenses/LICENSE-2.0>
// or the MIT license <LICENSE-MIT or http://opensource.org/licenses/MIT>, at
// your option. This file may not be copied, modified, or distributed except
// according to those terms.

use std::fmt;

/// Ways a single word can fail to classify.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ErrKind {
    /// The value suffix of an axis word is not a valid numeric expression.
    /// The owning register is left unchanged.
    MalformedNumericWord,
    /// A comment word is missing its closing parenthesis on the line.
    UnterminatedComment,
}

/// An error raised while classifying one word.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct WordError {
    pub word: String,
    pub kind: ErrKind,
}

impl WordError {
    pub(crate) fn new(word: &str, kind: ErrKind) -> Self {
        WordError { word: word.into(), kind }
    }
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.kind {
            ErrKind::MalformedNumericWord =>
                write!(f, "word {:?} does not carry a valid numeric value", self.word),
            ErrKind::UnterminatedComment =>
                write!(f, "comment {:?} is missing its closing parenthesis", self.word),
        }
    }
}

/// A word error located on a program line.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct LineError {
    pub lineno: usize,
    pub error: WordError,
}

impl fmt::Display for LineError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Error in line {}: {}", self.lineno, self.error)
    }
}
