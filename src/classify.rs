// Copyright (c) 2019 Georg Brandl.  Licensed under the Apache License,
// Version 2.0 <LICENSE-APACHE or http://www.apache.org/licenses/LICENSE-2.0>
// or the MIT license <LICENSE-MIT or http://opensource.org/licenses/MIT>, at
// your option. This file may not be copied, modified, or distributed except
// according to those terms.

use strum_macros::Display;

use crate::error::{ErrKind, WordError};
use crate::expr;
use crate::state::{Register, RegisterBank};

/// The markup category of a word.  Every word gets exactly one; the
/// lowercase display form is the name used by markup consumers.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Display)]
#[strum(serialize_all = "lowercase")]
pub enum TokenCategory {
    Axis,
    Rapid,
    Feed,
    Prep,
    Misc,
    BlockNum,
    Program,
    Tool,
    Comment,
    Variable,
    Plain,
}

/// One word of a line together with its category.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct ClassifiedToken<'a> {
    pub text: &'a str,
    pub category: TokenCategory,
}

const RAPID_WORDS: [&str; 2] = ["G0", "G00"];
const FEED_WORDS: [&str; 6] = ["G1", "G01", "G2", "G02", "G3", "G03"];

/// Classify one word and apply its register effect, if any.
///
/// The rules are ordered and the first match wins; the order is load
/// bearing (G20/G21 before the generic G rule, axis letters before all
/// prefix rules).  Axis letters and the rapid/feed words match in both
/// cases; the G/M/N/O/T prefix rules match uppercase only, as in the
/// source grammar.
///
/// An axis word updates its register completely or not at all: the suffix
/// is evaluated before the store, and a malformed suffix leaves the bank
/// untouched.
pub fn classify(word: &str, bank: &mut RegisterBank) -> Result<TokenCategory, WordError> {
    let first = match word.chars().next() {
        Some(ch) => ch,
        None => return Ok(TokenCategory::Plain),
    };
    if let Some(reg) = Register::from_letter(first) {
        match expr::eval_suffix(&word[1..]) {
            Some(value) => bank.set(reg, value),
            None => return Err(WordError::new(word, ErrKind::MalformedNumericWord)),
        }
        return Ok(TokenCategory::Axis);
    }
    if RAPID_WORDS.iter().any(|w| word.eq_ignore_ascii_case(w)) {
        return Ok(TokenCategory::Rapid);
    }
    if FEED_WORDS.iter().any(|w| word.eq_ignore_ascii_case(w)) {
        return Ok(TokenCategory::Feed);
    }
    Ok(match word {
        "G20" => {
            bank.unit_mul = 25.4;
            TokenCategory::Prep
        }
        "G21" => {
            bank.unit_mul = 1.0;
            TokenCategory::Prep
        }
        _ => match first {
            'G' => TokenCategory::Prep,
            'M' => TokenCategory::Misc,
            'N' => TokenCategory::BlockNum,
            'O' => TokenCategory::Program,
            'T' => TokenCategory::Tool,
            '(' => {
                if !word.ends_with(')') {
                    return Err(WordError::new(word, ErrKind::UnterminatedComment));
                }
                TokenCategory::Comment
            }
            '#' => TokenCategory::Variable,
            _ => TokenCategory::Plain,
        },
    })
}
