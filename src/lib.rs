// Copyright (c) 2019 Georg Brandl.  Licensed under the Apache License,
// Version 2.0 <LICENSE-APACHE or http://www.apache.org/licenses/LICENSE-2.0>
// or the MIT license <LICENSE-MIT or http://opensource.org/licenses/MIT>, at
// your option. This file may not be copied, modified, or distributed except
// according to those terms.

//! A library for reading ISO dialect NC code, as emitted by CAM
//! postprocessors, for backplotting and display purposes.
//!
//! Each program line is split into words, every word is classified into a
//! markup category (axis word, rapid move, preparatory code, comment, ...),
//! and a bank of modal registers is updated along the way.  A line that
//! contains at least one axis word yields one toolpath point, taken from
//! the register bank after the whole line has been applied.  The registers
//! are modal in the G-code sense: a value persists across lines until an
//! owning word overwrites it.
//!
//! This is a *reader*, not a controller: codes are classified but not
//! executed, arcs are not interpolated, and nothing is validated against
//! machine limits.
//!
//! ## Basic usage
//!
//! Feed the program text to an [`interp::Interpreter`] together with a
//! [`interp::Sink`] that receives tokens and points.  The following code
//! (the same as the "iso-trace" demo binary) prints the toolpath of a file
//! given as an argument:
//!
//! ```rust,no_run
//! use std::{env, fs};
//! use isoread::classify::TokenCategory;
//! use isoread::interp::{Interpreter, Sink, ToolpathPoint};
//!
//! struct Trace;
//!
//! impl Sink for Trace {
//!     fn token(&mut self, _text: &str, _category: TokenCategory) {}
//!     fn point(&mut self, p: ToolpathPoint) {
//!         println!("{} {} {}", p.x, p.y, p.z);
//!     }
//! }
//!
//! fn main() {
//!     let filename = env::args().nth(1).unwrap();
//!     let input = fs::read_to_string(&filename).unwrap();
//!
//!     for err in Interpreter::new().run(&input, &mut Trace) {
//!         eprintln!("{}", err);
//!     }
//! }
//! ```
//!
//! For finer control, [`interp::process_line`] processes a single line
//! against a caller-owned [`state::RegisterBank`], and [`classify::classify`]
//! handles one word at a time.

pub mod classify;
pub mod error;
pub mod expr;
pub mod interp;
pub mod lex;
pub mod state;
