//! One side of a divider: one or two resistors wired in series or parallel.

use itertools::Itertools;

use std::fmt;

use crate::error::{DividerError, Result};

/// How the members of an arm are wired together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Combination {
    /// Resistances add.
    Series,
    /// Conductances add.
    Parallel,
}

impl Combination {
    fn joiner(self) -> &'static str {
        match self {
            Combination::Series => "+",
            Combination::Parallel => "||",
        }
    }
}

impl fmt::Display for Combination {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Combination::Series => f.write_str("series"),
            Combination::Parallel => f.write_str("parallel"),
        }
    }
}

/// An ordered set of one or two resistor values plus their combination mode.
///
/// Single member arms are always stored as `Series`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arm {
    members: [f64; 2],
    len: usize,
    mode: Combination,
}

impl Arm {
    /// Builds a checked arm. Every member must be finite and above zero.
    ///
    /// # Examples
    /// ```
    ///     # use divider_calc::{Arm, Combination};
    ///     let arm = Arm::new(&[2000.0, 2000.0], Combination::Parallel).unwrap();
    ///     assert_eq!(arm.resistance().unwrap(), 1000.0);
    /// ```
    pub fn new(members: &[f64], mode: Combination) -> Result<Self> {
        if members.is_empty() || members.len() > 2 {
            return Err(DividerError::InvalidArm { len: members.len() });
        }
        if members.iter().any(|r| !r.is_finite() || *r <= 0.0) {
            return Err(DividerError::DegenerateArm { members: members.to_vec() });
        }
        Ok(Self::unchecked(members, mode))
    }

    /// A single resistor.
    pub fn single(r: f64) -> Result<Self> {
        Self::new(&[r], Combination::Series)
    }

    /// Two resistors summed.
    pub fn series(a: f64, b: f64) -> Result<Self> {
        Self::new(&[a, b], Combination::Series)
    }

    /// Two resistors in parallel.
    pub fn parallel(a: f64, b: f64) -> Result<Self> {
        Self::new(&[a, b], Combination::Parallel)
    }

    /// Catalog values are already known to be positive. `members` holds one or two values.
    pub(crate) fn unchecked(members: &[f64], mode: Combination) -> Self {
        let mut slots = [0.0; 2];
        slots[..members.len()].copy_from_slice(members);
        let mode = if members.len() == 1 { Combination::Series } else { mode };
        Arm { members: slots, len: members.len(), mode }
    }

    pub fn members(&self) -> &[f64] {
        &self.members[..self.len]
    }

    pub fn mode(&self) -> Combination {
        self.mode
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Effective resistance of the arm in ohms.
    pub fn resistance(&self) -> Result<f64> {
        match self.mode {
            Combination::Series => Ok(self.members().iter().sum()),
            Combination::Parallel => {
                if self.members().iter().any(|r| *r == 0.0) {
                    return Err(self.degenerate());
                }
                let conductance: f64 = self.members().iter().map(|r| 1.0 / r).sum();
                let r = 1.0 / conductance;
                if conductance == 0.0 || !r.is_finite() {
                    Err(self.degenerate())
                } else {
                    Ok(r)
                }
            }
        }
    }

    fn degenerate(&self) -> DividerError {
        DividerError::DegenerateArm { members: self.members().to_vec() }
    }
}

fn _format_rval(r: f64, unit: &str) -> String {
    let mut val = format!("{}", (r * 1e6).round() / 1e6);
    if val.contains('.') {
        val.replace('.', unit)
    } else {
        val.push_str(unit);
        val
    }
}

/// Compact engineering notation, `4K7`, `470R`, `1M`.
pub fn short_value(r: f64) -> String {
    if r < 1000.0 {
        _format_rval(r, "R")
    } else if r < 1_000_000.0 {
        _format_rval(r / 1000.0, "K")
    } else {
        _format_rval(r / 1_000_000.0, "M")
    }
}

/// Human readable resistance with fixed decimals, `4.70 kΩ`.
pub fn format_resistance(r: f64) -> String {
    if r >= 1_000_000.0 {
        format!("{:.2} MΩ", r / 1_000_000.0)
    } else if r >= 1000.0 {
        format!("{:.2} kΩ", r / 1000.0)
    } else {
        format!("{:.1} Ω", r)
    }
}

impl fmt::Display for Arm {
    /// `[1000.0, 2000.0]` by default, `1K+2K` in the alternate form.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if f.alternate() {
            write!(
                f,
                "{}",
                self.members().iter().map(|r| short_value(*r)).join(self.mode.joiner())
            )
        } else {
            write!(f, "{:?}", self.members())
        }
    }
}
