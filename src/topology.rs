//! Divider topologies and the enumeration of candidate networks.
//!
//! Only a fixed, documented subset of all partitions is searched: one shape for
//! two resistors, four for three and three for four. Larger networks are also
//! restricted to a prefix of the (ascending) catalog so the search stays bounded.

use itertools::Itertools;

use std::fmt;

use crate::arm::{Arm, Combination};

/// Catalog prefix searched for three resistor networks.
pub const THREE_CAP: usize = 50;
/// Catalog prefix searched for four resistor networks.
pub const FOUR_CAP: usize = 30;

/// How many resistors sit in an arm and how they are wired.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArmShape {
    pub len: usize,
    pub mode: Combination,
}

/// A topology: picked values fill the top arm first, then the bottom arm.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shape {
    pub top: ArmShape,
    pub bottom: ArmShape,
}

const fn arm(len: usize, mode: Combination) -> ArmShape {
    ArmShape { len, mode }
}

const fn shape(top: ArmShape, bottom: ArmShape) -> Shape {
    Shape { top, bottom }
}

const ONE: ArmShape = arm(1, Combination::Series);
const SUM: ArmShape = arm(2, Combination::Series);
const PAR: ArmShape = arm(2, Combination::Parallel);

pub const TWO_SHAPES: &[Shape] = &[shape(ONE, ONE)];

pub const THREE_SHAPES: &[Shape] = &[
    shape(ONE, SUM),
    shape(ONE, PAR),
    shape(SUM, ONE),
    shape(PAR, ONE),
];

pub const FOUR_SHAPES: &[Shape] = &[shape(SUM, SUM), shape(PAR, PAR), shape(SUM, PAR)];

impl Shape {
    pub fn size(&self) -> usize {
        self.top.len + self.bottom.len
    }

    /// Splits `picks` into the two arms. `picks.len()` must equal `self.size()`.
    fn assemble(&self, picks: &[f64]) -> Network {
        let (top, bottom) = picks.split_at(self.top.len);
        Network {
            top: Arm::unchecked(top, self.top.mode),
            bottom: Arm::unchecked(bottom, self.bottom.mode),
        }
    }
}

/// Number of resistors in a candidate network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum NetworkSize {
    Two,
    Three,
    Four,
}

impl NetworkSize {
    pub const ALL: [NetworkSize; 3] = [NetworkSize::Two, NetworkSize::Three, NetworkSize::Four];

    pub fn from_count(count: usize) -> Option<Self> {
        match count {
            2 => Some(NetworkSize::Two),
            3 => Some(NetworkSize::Three),
            4 => Some(NetworkSize::Four),
            _ => None,
        }
    }

    pub fn resistors(self) -> usize {
        match self {
            NetworkSize::Two => 2,
            NetworkSize::Three => 3,
            NetworkSize::Four => 4,
        }
    }

    pub fn shapes(self) -> &'static [Shape] {
        match self {
            NetworkSize::Two => TWO_SHAPES,
            NetworkSize::Three => THREE_SHAPES,
            NetworkSize::Four => FOUR_SHAPES,
        }
    }

    /// Number of networks `enumerate` yields for a catalog prefix of `n` values.
    pub fn combinations(self, n: usize) -> u128 {
        (n as u128).pow(self.resistors() as u32) * self.shapes().len() as u128
    }
}

impl fmt::Display for NetworkSize {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.resistors())
    }
}

/// A two terminal divider: supply, top arm, tap, bottom arm, ground.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Network {
    pub top: Arm,
    pub bottom: Arm,
}

/// Every network of `size` drawn from the first `cap` values of `values`.
///
/// Index tuples are walked like nested loops, last position fastest, and every
/// shape of `size` is produced for each tuple before moving on.
///
/// # Examples
/// ```
///     # use divider_calc::{enumerate, NetworkSize};
///     let values = [100.0, 220.0, 470.0];
///     assert_eq!(enumerate(&values, NetworkSize::Two, 3).count(), 9);
///     assert_eq!(enumerate(&values, NetworkSize::Three, 2).count(), 8 * 4);
/// ```
pub fn enumerate(values: &[f64], size: NetworkSize, cap: usize) -> impl Iterator<Item = Network> + '_ {
    let values = &values[..cap.min(values.len())];
    (0..values.len()).flat_map(move |first| shard(values, size, first))
}

/// The networks of `size` whose first picked value is `values[first]`.
///
/// Concatenating the shards for `0..values.len()` in order gives exactly the
/// sequence `enumerate` yields with an uncapped `values`. An out of range
/// `first` gives an empty shard.
pub fn shard(values: &[f64], size: NetworkSize, first: usize) -> impl Iterator<Item = Network> + '_ {
    values.get(first).into_iter().flat_map(move |&head| {
        (1..size.resistors())
            .map(move |_| values.iter().cloned())
            .multi_cartesian_product()
            .flat_map(move |tail| {
                let mut picks = Vec::with_capacity(tail.len() + 1);
                picks.push(head);
                picks.extend(tail);
                size.shapes().iter().map(move |s| s.assemble(&picks))
            })
    })
}
