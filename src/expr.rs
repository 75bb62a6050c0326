// Copyright (c) 2019 Georg Brandl.  Licensed under the Apache License,
// Version 2.0 <LICENSE-APACHE or http://www.apache.org/licenses/LICENSE-2.0>
// or the MIT license <LICENSE-MIT or http://opensource.org/licenses/MIT>, at
// your option. This file may not be copied, modified, or distributed except
// according to those terms.

use itertools::Itertools;
use pest::Parser;
use pest::iterators::Pair;

use crate::lex::{IsoLexer, Rule};

/// A numeric expression from the value suffix of a word.
///
/// Deliberately restricted: decimal literals, unary sign, the four basic
/// operators and bracket groups.  Parameter references and function calls
/// do not parse, so a suffix like `#1` is rejected instead of being looked
/// up or executed.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Num(f64),
    Neg(Box<Expr>),
    BinOp(Op, Box<Expr>, Box<Expr>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Add,
    Sub,
    Mul,
    Div,
}

impl Expr {
    /// Evaluate with plain f64 arithmetic.
    pub fn eval(&self) -> f64 {
        match self {
            Expr::Num(n) => *n,
            Expr::Neg(arg) => -arg.eval(),
            Expr::BinOp(op, lhs, rhs) => {
                let (lhs, rhs) = (lhs.eval(), rhs.eval());
                match op {
                    Op::Add => lhs + rhs,
                    Op::Sub => lhs - rhs,
                    Op::Mul => lhs * rhs,
                    Op::Div => lhs / rhs,
                }
            }
        }
    }
}

/// Parse the numeric suffix of a word, or `None` if it is not a valid
/// restricted expression (this includes the empty suffix of a bare letter).
pub fn parse_suffix(input: &str) -> Option<Expr> {
    let mut pairs = IsoLexer::parse(Rule::suffix, input).ok()?;
    let expr = pairs.next().expect("suffix pair")
        .into_inner().next().expect("expr pair");
    Some(make_expr(expr))
}

/// Parse and evaluate a numeric suffix in one step.
pub fn eval_suffix(input: &str) -> Option<f64> {
    parse_suffix(input).map(|expr| expr.eval())
}

fn make_expr(pair: Pair<Rule>) -> Expr {
    match pair.as_rule() {
        // left-associative binop chains: operand (op operand)*
        Rule::expr | Rule::term => {
            let mut inner = pair.into_inner();
            let first = make_expr(inner.next().expect("first operand"));
            inner.tuples().fold(first, |lhs, (op, rhs)| {
                let op = match op.as_str() {
                    "+" => Op::Add,
                    "-" => Op::Sub,
                    "*" => Op::Mul,
                    _ => Op::Div,
                };
                Expr::BinOp(op, Box::new(lhs), Box::new(make_expr(rhs)))
            })
        }
        Rule::factor => {
            let mut negate = false;
            let mut operand = None;
            for pair in pair.into_inner() {
                match pair.as_rule() {
                    Rule::sign => negate = pair.as_str() == "-",
                    _ => operand = Some(make_expr(pair)),
                }
            }
            let expr = operand.expect("operand in factor");
            if negate { Expr::Neg(Box::new(expr)) } else { expr }
        }
        Rule::num => Expr::Num(pair.as_str().parse().expect("valid number")),
        _ => unreachable!()
    }
}
