//! Filtering and ordering of scored candidates.

use std::cmp::Ordering;

use crate::solution::Solution;

/// Number of solutions kept by default.
pub const RESULT_LIMIT: usize = 10;

/// Orders by error, then component count, then dissipated power.
pub fn compare(a: &Solution, b: &Solution) -> Ordering {
    a.error_percent()
        .total_cmp(&b.error_percent())
        .then_with(|| a.components().cmp(&b.components()))
        .then_with(|| a.power().total_cmp(&b.power()))
}

/// Running best-`limit` list of solutions within a tolerance.
///
/// Offering candidates one at a time gives the same list as a stable sort of
/// every passing candidate followed by truncation, without holding them all.
#[derive(Debug, Clone)]
pub struct Ranking {
    tolerance: f64,
    limit: usize,
    best: Vec<Solution>,
}

impl Ranking {
    pub fn new(tolerance: f64, limit: usize) -> Self {
        Ranking {
            tolerance,
            limit,
            best: Vec::new(),
        }
    }

    /// Considers `sol`, returning whether it passed the tolerance filter.
    pub fn offer(&mut self, sol: Solution) -> bool {
        if !(sol.error_percent() <= self.tolerance) {
            return false;
        }
        // After every equal entry, so earlier candidates win ties.
        let pos = self
            .best
            .partition_point(|kept| compare(kept, &sol) != Ordering::Greater);
        if pos < self.limit {
            self.best.insert(pos, sol);
            self.best.truncate(self.limit);
        }
        true
    }

    /// Folds in a ranking built over candidates that came after this one's.
    pub fn merge(&mut self, later: Ranking) {
        for sol in later.best {
            self.offer(sol);
        }
    }

    pub fn len(&self) -> usize {
        self.best.len()
    }

    pub fn is_empty(&self) -> bool {
        self.best.is_empty()
    }

    pub fn into_vec(self) -> Vec<Solution> {
        self.best
    }
}

/// Keeps candidates with `error_percent <= tolerance`, stable-sorts them by
/// [`compare`] and returns at most [`RESULT_LIMIT`] of them.
pub fn rank(candidates: impl IntoIterator<Item = Solution>, tolerance: f64) -> Vec<Solution> {
    let mut ranking = Ranking::new(tolerance, RESULT_LIMIT);
    for sol in candidates {
        ranking.offer(sol);
    }
    ranking.into_vec()
}
