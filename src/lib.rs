//! A voltage divider designer for standard resistor series.
//!
//! Given a supply voltage, a wanted output voltage and an error tolerance, it searches networks
//! of two to four resistors drawn from an E6, E12 or E24 series and presents the best ten in
//! order of increasing error.
//!
//! Each arm of the divider holds one resistor, or two in series or in parallel. Only a fixed set
//! of topologies is searched:
//!
//! | Resistors | Top arm       | Bottom arm    |
//! |-----------|---------------|---------------|
//! | 2         | `a`           | `b`           |
//! | 3         | `a`           | `b + c`       |
//! | 3         | `a`           | `b \|\| c`    |
//! | 3         | `a + b`       | `c`           |
//! | 3         | `a \|\| b`    | `c`           |
//! | 4         | `a + b`       | `c + d`       |
//! | 4         | `a \|\| b`    | `c \|\| d`    |
//! | 4         | `a + b`       | `c \|\| d`    |
//!
//! Three and four resistor networks only draw from the lowest 50 and 30 values of the catalog.
//!
//! # Example
//! ```rust
//! extern crate divider_calc;
//!
//! use divider_calc::*;
//!
//! fn main() {
//!     let res = find_solutions(10.0, 5.0, 5.0, "E12", 100.0, 10_000.0)
//!         .expect("Error: bad search parameters");
//!
//!     for (idx, sol) in res.iter().enumerate() {
//!         println!("Match {}: {}", idx + 1, sol);
//!     }
//!     assert!((res[0].vout() - 5.0).abs() < 0.25);
//! }
//! ```

extern crate itertools;
#[macro_use]
extern crate lazy_static;

pub mod arm;
pub mod error;
pub mod rank;
pub mod series;
pub mod solution;
pub mod topology;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

pub use arm::{format_resistance, short_value, Arm, Combination};
pub use error::{DividerError, Result};
pub use rank::{rank, Ranking, RESULT_LIMIT};
pub use series::{generate, RSeries, SeriesName, E12, E24, E6};
pub use solution::Solution;
pub use topology::{enumerate, shard, Network, NetworkSize, FOUR_CAP, THREE_CAP};

use solution::check_target;

/// Bounds on how much of the catalog is searched and how many results are kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchLimits {
    /// Catalog prefix for three resistor networks.
    pub three_cap: usize,
    /// Catalog prefix for four resistor networks.
    pub four_cap: usize,
    /// Maximum number of solutions returned.
    pub results: usize,
}

impl Default for SearchLimits {
    fn default() -> Self {
        SearchLimits {
            three_cap: THREE_CAP,
            four_cap: FOUR_CAP,
            results: RESULT_LIMIT,
        }
    }
}

impl SearchLimits {
    fn cap(&self, size: NetworkSize, catalog: usize) -> usize {
        match size {
            NetworkSize::Two => catalog,
            NetworkSize::Three => self.three_cap.min(catalog),
            NetworkSize::Four => self.four_cap.min(catalog),
        }
    }
}

/// Main search struct. Built up with the consuming setters, then run with `search`.
///
/// # Examples
/// ```
///     # use divider_calc::*;
///     let res = DividerSearch::new(SeriesName::E6)
///         .range(1000.0, 100_000.0)
///         .sizes(&[NetworkSize::Two])
///         .search(12.0, 4.0, 10.0)
///         .unwrap();
///     assert!(res.iter().all(|s| s.components() == 2));
/// ```
#[derive(Debug, Clone)]
pub struct DividerSearch {
    series: SeriesName,
    r_min: f64,
    r_max: f64,
    limits: SearchLimits,
    sizes: Vec<NetworkSize>,
}

impl DividerSearch {
    /// A search over the whole of `series` using every network size.
    pub fn new(series: SeriesName) -> Self {
        DividerSearch {
            series,
            r_min: 0.0,
            r_max: f64::INFINITY,
            limits: SearchLimits::default(),
            sizes: NetworkSize::ALL.to_vec(),
        }
    }

    /// Restricts the catalog to `[r_min, r_max]` ohms, inclusive.
    pub fn range(mut self, r_min: f64, r_max: f64) -> Self {
        self.r_min = r_min;
        self.r_max = r_max;
        self
    }

    /// Replaces the catalog caps and the result limit. `results: usize::MAX` keeps every match.
    pub fn limits(mut self, limits: SearchLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Network sizes to search. Order does not affect the result.
    pub fn sizes(mut self, sizes: &[NetworkSize]) -> Self {
        let mut sizes = sizes.to_vec();
        sizes.sort();
        sizes.dedup();
        self.sizes = sizes;
        self
    }

    /// The values candidates are drawn from.
    pub fn catalog(&self) -> Vec<f64> {
        self.series.series().catalog(self.r_min, self.r_max)
    }

    /// Number of networks that `search` will score.
    pub fn combinations(&self) -> u128 {
        let n = self.catalog().len();
        self.sizes
            .iter()
            .map(|size| size.combinations(self.limits.cap(*size, n)))
            .sum()
    }

    /// Runs the search, returning at most `limits.results` solutions within `tolerance` percent
    /// of `target`, best first.
    pub fn search(&self, vin: f64, target: f64, tolerance: f64) -> Result<Vec<Solution>> {
        check_target(target)?;

        let _span = tracing::info_span!(
            "divider_search",
            series = %self.series,
            vin,
            target,
            tolerance
        )
        .entered();

        let catalog = self.catalog();
        if catalog.is_empty() {
            tracing::warn!(r_min = self.r_min, r_max = self.r_max, "no catalog values in range");
            return Ok(Vec::new());
        }
        tracing::debug!(values = catalog.len(), "catalog generated");

        let mut ranking = Ranking::new(tolerance, self.limits.results);
        for size in &self.sizes {
            let cap = self.limits.cap(*size, catalog.len());
            let found = self.search_size(&catalog[..cap], *size, vin, target, tolerance)?;
            tracing::debug!(
                size = %size,
                candidates = %size.combinations(cap),
                kept = found.len(),
                "network size searched"
            );
            if !found.is_empty() {
                ranking.merge(found);
            }
        }

        let res = ranking.into_vec();
        tracing::debug!(solutions = res.len(), "search finished");
        Ok(res)
    }

    #[cfg(not(feature = "parallel"))]
    fn search_size(
        &self,
        values: &[f64],
        size: NetworkSize,
        vin: f64,
        target: f64,
        tolerance: f64,
    ) -> Result<Ranking> {
        let mut ranking = Ranking::new(tolerance, self.limits.results);
        for net in enumerate(values, size, values.len()) {
            ranking.offer(Solution::score(&net, vin, target)?);
        }
        Ok(ranking)
    }

    /// One shard per first value; shards are merged back in index order.
    #[cfg(feature = "parallel")]
    fn search_size(
        &self,
        values: &[f64],
        size: NetworkSize,
        vin: f64,
        target: f64,
        tolerance: f64,
    ) -> Result<Ranking> {
        let shards = (0..values.len())
            .into_par_iter()
            .map(|first| -> Result<Ranking> {
                let mut ranking = Ranking::new(tolerance, self.limits.results);
                for net in shard(values, size, first) {
                    ranking.offer(Solution::score(&net, vin, target)?);
                }
                Ok(ranking)
            })
            .collect::<Result<Vec<Ranking>>>()?;

        let mut ranking = Ranking::new(tolerance, self.limits.results);
        for found in shards {
            ranking.merge(found);
        }
        Ok(ranking)
    }
}

/// Finds up to ten resistor networks dividing `vin` down to within `tolerance` percent of
/// `target`, drawing values from the named series (`"E6"`, `"E12"` or `"E24"`) between `r_min`
/// and `r_max` ohms inclusive.
///
/// Solutions are ordered by error, then by component count, then by dissipated power. An
/// unreachable target or an empty range gives an empty list.
pub fn find_solutions(
    vin: f64,
    target: f64,
    tolerance: f64,
    series: &str,
    r_min: f64,
    r_max: f64,
) -> Result<Vec<Solution>> {
    let series: SeriesName = series.parse()?;
    DividerSearch::new(series)
        .range(r_min, r_max)
        .search(vin, target, tolerance)
}
