// Copyright (c) 2019 Georg Brandl.  Licensed under the Apache License,
// Version 2.0 <LICENSE-APACHE or http://www.apache.org/licenses/LICENSE-2.0>
// or the MIT license <LICENSE-MIT or http://opensource.org/licenses/MIT>, at
// your option. This file may not be copied, modified, or distributed except
// according to those terms.

use crate::classify::{classify, ClassifiedToken, TokenCategory};
use crate::error::{ErrKind, LineError, WordError};
use crate::lex;
use crate::state::RegisterBank;

/// The tool position after a motion-bearing line, in millimeters.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct ToolpathPoint {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// Receives tokens and points from an interpreter run.
///
/// The begin/end hooks bracket the token stream of one line and the point
/// emission of one line, so that a consumer can batch its markup or path
/// storage per line.  They default to no-ops.
pub trait Sink {
    /// One classified word, in textual order within the line.
    fn token(&mut self, text: &str, category: TokenCategory);
    /// One new toolpath point.
    fn point(&mut self, point: ToolpathPoint);

    fn begin_block(&mut self, _lineno: usize) {}
    fn end_block(&mut self, _lineno: usize) {}
    fn begin_lines(&mut self) {}
    fn end_lines(&mut self) {}
}

/// Everything one line of input produced.
///
/// On error, `tokens` holds the words that classified successfully before
/// the failing one, and register updates up to that word remain applied
/// (modal state is not transactional across a line).
#[derive(Debug)]
pub struct LineResult<'a> {
    pub tokens: Vec<ClassifiedToken<'a>>,
    pub point: Option<ToolpathPoint>,
    pub error: Option<WordError>,
}

/// Process one line against `bank`: split it into words, classify each in
/// order, and take a position snapshot if any axis word was seen.
///
/// Processing stops at the first word error.  A point is still emitted in
/// that case, unless the failing word was itself axis-affecting (a
/// malformed axis value must not fabricate a position).
pub fn process_line<'a>(line: &'a str, bank: &mut RegisterBank) -> LineResult<'a> {
    let mut tokens = Vec::new();
    let mut motion = false;
    let mut error = None;
    for word in lex::split(line) {
        match classify(word, bank) {
            Ok(category) => {
                motion |= category == TokenCategory::Axis;
                tokens.push(ClassifiedToken { text: word, category });
            }
            Err(err) => {
                error = Some(err);
                break;
            }
        }
    }
    let fabricated = matches!(&error,
                              Some(err) if err.kind == ErrKind::MalformedNumericWord);
    let point = if motion && !fabricated {
        Some(ToolpathPoint { x: bank.x, y: bank.y, z: bank.z })
    } else {
        None
    };
    LineResult { tokens, point, error }
}

/// Drives one parse session: owns the register bank and feeds program
/// lines through [`process_line`], relaying tokens and points to a
/// [`Sink`].
///
/// A session's modal state is never reset; parse independent programs with
/// independent interpreters.
pub struct Interpreter {
    bank: RegisterBank,
}

impl Interpreter {
    pub fn new() -> Self {
        Interpreter { bank: RegisterBank::new() }
    }

    /// The current modal state.
    pub fn bank(&self) -> &RegisterBank {
        &self.bank
    }

    /// Run all lines of `input` through the sink.
    ///
    /// Word errors never abort the run; they are collected with 1-based
    /// line numbers and the affected line contributes whatever prefix of
    /// tokens classified successfully.
    pub fn run<S: Sink>(&mut self, input: &str, sink: &mut S) -> Vec<LineError> {
        let mut errors = Vec::new();
        for (n, line) in input.lines().enumerate() {
            let lineno = n + 1;
            sink.begin_block(lineno);
            let result = process_line(line, &mut self.bank);
            for token in &result.tokens {
                sink.token(token.text, token.category);
            }
            if let Some(error) = result.error {
                errors.push(LineError { lineno, error });
            }
            if let Some(point) = result.point {
                sink.begin_lines();
                sink.point(point);
                sink.end_lines();
            }
            sink.end_block(lineno);
        }
        errors
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}
