//! Scored divider candidates.

use std::fmt;

use crate::arm::{format_resistance, Arm};
use crate::error::{DividerError, Result};
use crate::topology::Network;

/// A candidate network evaluated against a supply and a target voltage.
///
/// Effective resistances are computed once at construction and every field is
/// read-only afterwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Solution {
    top: Arm,
    bottom: Arm,
    top_ohms: f64,
    bottom_ohms: f64,
    vout: f64,
    error: f64,
    power: f64,
}

/// Checks that `target` can be used as the denominator of the error percentage.
pub fn check_target(target: f64) -> Result<()> {
    if target == 0.0 || !target.is_finite() {
        Err(DividerError::InvalidTarget { target })
    } else {
        Ok(())
    }
}

impl Solution {
    /// Scores `network` for a divider fed from `vin` aiming at `target` volts.
    ///
    /// # Examples
    /// ```
    ///     # use divider_calc::{Arm, Network, Solution};
    ///     let net = Network { top: Arm::single(1000.0).unwrap(), bottom: Arm::single(1000.0).unwrap() };
    ///     let sol = Solution::score(&net, 10.0, 5.0).unwrap();
    ///     assert_eq!(sol.vout(), 5.0);
    ///     assert_eq!(sol.error_percent(), 0.0);
    ///     assert_eq!(sol.power(), 0.05);
    /// ```
    pub fn score(network: &Network, vin: f64, target: f64) -> Result<Self> {
        check_target(target)?;
        let top_ohms = network.top.resistance()?;
        let bottom_ohms = network.bottom.resistance()?;
        let total = top_ohms + bottom_ohms;
        let vout = vin * bottom_ohms / total;
        Ok(Solution {
            top: network.top,
            bottom: network.bottom,
            top_ohms,
            bottom_ohms,
            vout,
            error: ((vout - target) / target * 100.0).abs(),
            power: vin * vin / total,
        })
    }

    /// Arm between the supply and the output tap (R1).
    pub fn top(&self) -> &Arm {
        &self.top
    }

    /// Arm between the output tap and ground (R2).
    pub fn bottom(&self) -> &Arm {
        &self.bottom
    }

    pub fn top_ohms(&self) -> f64 {
        self.top_ohms
    }

    pub fn bottom_ohms(&self) -> f64 {
        self.bottom_ohms
    }

    /// Output voltage in volts.
    pub fn vout(&self) -> f64 {
        self.vout
    }

    /// Absolute deviation from the target, in percent.
    pub fn error_percent(&self) -> f64 {
        self.error
    }

    /// Power dissipated by the whole divider, in watts.
    pub fn power(&self) -> f64 {
        self.power
    }

    /// Total resistor count over both arms.
    pub fn components(&self) -> usize {
        self.top.len() + self.bottom.len()
    }

    /// Multi-line summary using human readable units.
    pub fn describe(&self) -> String {
        format!(
            "R1: {:#} ({}, {})\nR2: {:#} ({}, {})\nVout: {:.3} V\nError: {:.2}%\nPower: {:.3} mW",
            self.top,
            self.top.mode(),
            format_resistance(self.top_ohms),
            self.bottom,
            self.bottom.mode(),
            format_resistance(self.bottom_ohms),
            self.vout,
            self.error,
            self.power * 1000.0
        )
    }
}

impl fmt::Display for Solution {
    /// The default form is the single line stored as history text. The
    /// alternate form swaps member lists for compact notation.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if f.alternate() {
            write!(
                f,
                "R1={:#} ({:.2} Ω), R2={:#} ({:.2} Ω), Vout={:.3} V, Error={:.2}%, Power={:.3} mW",
                self.top,
                self.top_ohms,
                self.bottom,
                self.bottom_ohms,
                self.vout,
                self.error,
                self.power * 1000.0
            )
        } else {
            write!(
                f,
                "R1={} ({:.2} Ω), R2={} ({:.2} Ω), Vout={:.3} V, Error={:.2}%, Power={:.3} mW",
                self.top,
                self.top_ohms,
                self.bottom,
                self.bottom_ohms,
                self.vout,
                self.error,
                self.power * 1000.0
            )
        }
    }
}
