// Copyright (c) 2019 Georg Brandl.  Licensed under the Apache License,
// Version 2.0 <LICENSE-APACHE or http://www.apache.org/licenses/LICENSE-2.0>
// or the MIT license <LICENSE-MIT or http://opensource.org/licenses/MIT>, at
// your option. This file may not be copied, modified, or distributed except
// according to those terms.

use strum_macros::Display;

/// A modal register, named after the word letter that owns it.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Display)]
pub enum Register {
    A, B, C,
    F,
    I, J, K,
    P, Q, R,
    S,
    X, Y, Z,
}

impl Register {
    /// The register owned by `letter`, matched in both cases.
    pub fn from_letter(letter: char) -> Option<Self> {
        Some(match letter.to_ascii_lowercase() {
            'a' => Register::A,
            'b' => Register::B,
            'c' => Register::C,
            'f' => Register::F,
            'i' => Register::I,
            'j' => Register::J,
            'k' => Register::K,
            'p' => Register::P,
            'q' => Register::Q,
            'r' => Register::R,
            's' => Register::S,
            'x' => Register::X,
            'y' => Register::Y,
            'z' => Register::Z,
            _ => return None,
        })
    }

    /// Whether values for this register are converted by the unit
    /// multiplier.  P and Q carry dwell/index parameters and pass through
    /// raw; downstream consumers depend on that.
    pub fn is_scaled(&self) -> bool {
        !matches!(self, Register::P | Register::Q)
    }
}

/// The modal state of the virtual machine between lines.
///
/// Every register holds the last value an owning word stored into it; a
/// register never resets implicitly.  Length values are in millimeters
/// once `unit_mul` has been applied.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct RegisterBank {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub f: f64,
    pub i: f64,
    pub j: f64,
    pub k: f64,
    pub p: f64,
    pub q: f64,
    pub r: f64,
    pub s: f64,
    pub x: f64,
    pub y: f64,
    pub z: f64,
    /// 1.0 for millimeter input (G21, the default), 25.4 for inch input (G20).
    pub unit_mul: f64,
}

impl RegisterBank {
    /// A fresh bank: all registers zero, except Z at the conventional
    /// park height of 500, in millimeter mode.
    pub fn new() -> Self {
        RegisterBank {
            a: 0., b: 0., c: 0.,
            f: 0.,
            i: 0., j: 0., k: 0.,
            p: 0., q: 0., r: 0.,
            s: 0.,
            x: 0., y: 0.,
            z: 500.,
            unit_mul: 1.0,
        }
    }

    /// Store `value` into `reg`, applying the unit multiplier in effect
    /// right now for scaled registers.
    pub fn set(&mut self, reg: Register, value: f64) {
        let value = if reg.is_scaled() { self.unit_mul * value } else { value };
        *self.slot(reg) = value;
    }

    pub fn get(&self, reg: Register) -> f64 {
        match reg {
            Register::A => self.a,
            Register::B => self.b,
            Register::C => self.c,
            Register::F => self.f,
            Register::I => self.i,
            Register::J => self.j,
            Register::K => self.k,
            Register::P => self.p,
            Register::Q => self.q,
            Register::R => self.r,
            Register::S => self.s,
            Register::X => self.x,
            Register::Y => self.y,
            Register::Z => self.z,
        }
    }

    fn slot(&mut self, reg: Register) -> &mut f64 {
        match reg {
            Register::A => &mut self.a,
            Register::B => &mut self.b,
            Register::C => &mut self.c,
            Register::F => &mut self.f,
            Register::I => &mut self.i,
            Register::J => &mut self.j,
            Register::K => &mut self.k,
            Register::P => &mut self.p,
            Register::Q => &mut self.q,
            Register::R => &mut self.r,
            Register::S => &mut self.s,
            Register::X => &mut self.x,
            Register::Y => &mut self.y,
            Register::Z => &mut self.z,
        }
    }
}

impl Default for RegisterBank {
    fn default() -> Self {
        Self::new()
    }
}
