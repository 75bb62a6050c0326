// Copyright (c) 2019 Georg Brandl.  Licensed under the Apache License,
// Version 2.0 <LICENSE-APACHE or http://www.apache.org/licenses/LICENSE-2.0>
// or the MIT license <LICENSE-MIT or http://opensource.org/licenses/MIT>, at
// your option. This file may not be copied, modified, or distributed except
// according to those terms.

use pest::Parser;
use pest_derive::Parser;

#[derive(Parser)]
#[grammar = "isoline.pest"]
pub struct IsoLexer;

/// Split one line of NC text into its raw words.
///
/// Words are returned in textual order and include whitespace runs, which
/// classify as plain and carry no modal effect.  The grammar is total, so
/// splitting never fails: characters that belong to no multi-character word
/// come out as one-character words.
pub fn split(line: &str) -> impl Iterator<Item = &str> {
    IsoLexer::parse(Rule::line, line)
        .expect("line grammar is total")
        .next()
        .expect("one line pair")
        .into_inner()
        .filter(|pair| pair.as_rule() != Rule::EOI)
        .map(|pair| pair.as_str())
}
