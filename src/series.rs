//! Standard decade series and the catalog of usable values drawn from them.

use itertools::Itertools;

use std::fmt;
use std::str::FromStr;

use crate::error::{DividerError, Result};

/// Decade multipliers applied to every base value, 10mΩ through the 10MΩ decade.
const POWERS: &[f64] = &[1e-2, 1e-1, 1e0, 1e1, 1e2, 1e3, 1e4, 1e5, 1e6, 1e7];

const E6_BASE: &[f64] = &[1.0, 1.5, 2.2, 3.3, 4.7, 6.8];
const E12_BASE: &[f64] = &[1.0, 1.2, 1.5, 1.8, 2.2, 2.7, 3.3, 3.9, 4.7, 5.6, 6.8, 8.2];
const E24_BASE: &[f64] = &[
    1.0, 1.1, 1.2, 1.3, 1.5, 1.6, 1.8, 2.0, 2.2, 2.4, 2.7, 3.0, 3.3, 3.6, 3.9, 4.3, 4.7, 5.1,
    5.6, 6.2, 6.8, 7.5, 8.2, 9.1,
];

lazy_static! {
    /// RSeries constant for the E6 standard series
    pub static ref E6: RSeries = RSeries::new(SeriesName::E6, E6_BASE);
    /// RSeries constant for the E12 standard series
    pub static ref E12: RSeries = RSeries::new(SeriesName::E12, E12_BASE);
    /// RSeries constant for the E24 standard series
    pub static ref E24: RSeries = RSeries::new(SeriesName::E24, E24_BASE);
}

/// Names of the recognised decade series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SeriesName {
    E6,
    E12,
    E24,
}

impl SeriesName {
    /// The expanded series table for this name.
    pub fn series(self) -> &'static RSeries {
        match self {
            SeriesName::E6 => &E6,
            SeriesName::E12 => &E12,
            SeriesName::E24 => &E24,
        }
    }
}

impl FromStr for SeriesName {
    type Err = DividerError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "E6" => Ok(SeriesName::E6),
            "E12" => Ok(SeriesName::E12),
            "E24" => Ok(SeriesName::E24),
            _ => Err(DividerError::UnknownSeries { name: s.to_string() }),
        }
    }
}

impl fmt::Display for SeriesName {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            SeriesName::E6 => "E6",
            SeriesName::E12 => "E12",
            SeriesName::E24 => "E24",
        };
        f.write_str(name)
    }
}

/// A series of resistor values spread over every supported decade.
///
/// Values are held decade by decade, each decade in base-table order, so the
/// whole table is ascending.
#[derive(Debug)]
pub struct RSeries {
    name: SeriesName,
    values: Box<[f64]>,
}

impl RSeries {
    fn new(name: SeriesName, base: &[f64]) -> Self {
        RSeries {
            name,
            values: POWERS
                .iter()
                .cartesian_product(base.iter())
                .map(|(pow, val)| val * pow)
                .collect::<Vec<f64>>()
                .into_boxed_slice(),
        }
    }

    pub fn name(&self) -> SeriesName {
        self.name
    }

    pub fn iter(&self) -> impl Iterator<Item = &f64> + Clone {
        self.values.iter()
    }

    /// Values within the inclusive range `[r_min, r_max]`, ascending.
    ///
    /// An inverted range yields an empty catalog rather than an error.
    pub fn catalog(&self, r_min: f64, r_max: f64) -> Vec<f64> {
        self.iter()
            .cloned()
            .filter(|r| *r >= r_min && *r <= r_max)
            .collect()
    }
}

/// Looks up `series` by name and clips it to `[r_min, r_max]`.
///
/// # Examples
/// ```
///     # use divider_calc::generate;
///     let values = generate("E6", 1000.0, 10_000.0).unwrap();
///     assert_eq!(values.len(), 7);
///     assert!(generate("E48", 1000.0, 10_000.0).is_err());
/// ```
pub fn generate(series: &str, r_min: f64, r_max: f64) -> Result<Vec<f64>> {
    let name: SeriesName = series.parse()?;
    Ok(name.series().catalog(r_min, r_max))
}
