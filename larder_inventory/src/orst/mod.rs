//! Hand written sorting algorithms, driven by a comparator instead of [`Ord`] so the same records
//! can be sorted on any [`SortField`].
//!
//! # Example
//!
//! ```
//! use larder_inventory::orst::BubbleSorter;
//! use larder_inventory::orst::Sorter;
//!
//! let mut items = vec![1, 3, 2, 5, 4];
//! BubbleSorter.sort(&mut items);
//! assert_eq!(vec![1, 2, 3, 4, 5], items);
//! ```
//!
//! Each call through [`sort`] works on a copy of the input and reports how long the sorting took:
//!
//! ```
//! use larder_inventory::orst::{sort, Algorithm};
//!
//! let shelf = ["flour", "basil", "yeast"];
//! let sorted = sort(&shelf, Algorithm::Quick, |a, b| a.cmp(b));
//!
//! assert_eq!(sorted.records, ["basil", "flour", "yeast"]);
//! assert_eq!(shelf, ["flour", "basil", "yeast"]);
//! ```

pub mod benchmark;
mod sorters;

pub use sorters::bubble_sorter::BubbleSorter;
pub use sorters::merge_sorter::MergeSorter;
pub use sorters::quick_sorter::QuickSorter;

use std::cmp::Ordering;
use std::fmt::{self, Display};
use std::str::FromStr;
use std::time::{Duration, Instant};

use clap::ValueEnum;

use crate::compare::{Direction, SortField};
use crate::error::InvalidArgument;
use crate::ingredient::Ingredient;

/// A sorting algorithm must implement the trait `Sorter`.
pub trait Sorter<T> {
    /// Sorts `items` in place so that `compare` never returns [`Ordering::Greater`] for a pair of
    /// neighbours.
    fn sort_by<F>(&self, items: &mut Vec<T>, compare: F)
    where
        F: FnMut(&T, &T) -> Ordering;

    /// Sorts `items` by their natural order.
    fn sort(&self, items: &mut Vec<T>)
    where
        T: Ord,
    {
        self.sort_by(items, Ord::cmp)
    }
}

/// The algorithms a caller can pick from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, ValueEnum)]
pub enum Algorithm {
    /// O(n log n), stable
    #[default]
    Merge,

    /// O(n log n) on average, O(n²) on sorted input, not stable
    Quick,

    /// O(n²), O(n) on sorted input
    Bubble,
}

impl Algorithm {
    pub const ALL: [Algorithm; 3] = [Algorithm::Merge, Algorithm::Quick, Algorithm::Bubble];

    /// Whether records that compare equal always keep their relative order.
    pub fn is_stable(self) -> bool {
        matches!(self, Algorithm::Merge)
    }

    pub fn complexity(self) -> &'static str {
        match self {
            Algorithm::Merge => "O(n log n)",
            Algorithm::Quick => "O(n log n) average",
            Algorithm::Bubble => "O(n²)",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Algorithm::Merge => "Merge Sort",
            Algorithm::Quick => "Quick Sort",
            Algorithm::Bubble => "Bubble Sort",
        }
    }

    /// Sorts `items` in place with this algorithm.
    pub fn sort_by<T, F>(self, items: &mut Vec<T>, compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        match self {
            Algorithm::Merge => MergeSorter.sort_by(items, compare),
            Algorithm::Quick => QuickSorter.sort_by(items, compare),
            Algorithm::Bubble => BubbleSorter.sort_by(items, compare),
        }
    }
}

impl Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Algorithm {
    type Err = InvalidArgument;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_lowercase();
        let name = name
            .strip_suffix("sort")
            .map(|n| n.trim_end_matches([' ', '-', '_']))
            .unwrap_or(name.as_str());

        match name {
            "merge" => Ok(Algorithm::Merge),
            "quick" => Ok(Algorithm::Quick),
            "bubble" => Ok(Algorithm::Bubble),
            _ => Err(InvalidArgument(format!("unknown sorting algorithm `{s}`"))),
        }
    }
}

/// A sorted copy of some records, and the wall clock time the sort itself took.
///
/// `elapsed` is for display and benchmarking. Nothing depends on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sorted<T> {
    pub records: Vec<T>,
    pub elapsed: Duration,
}

/// Sorts a copy of `items` with `algorithm`. The caller's slice is left alone.
pub fn sort<T, F>(items: &[T], algorithm: Algorithm, compare: F) -> Sorted<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    let mut records = items.to_vec();

    let now = Instant::now();
    algorithm.sort_by(&mut records, compare);
    let elapsed = now.elapsed();

    tracing::debug!(%algorithm, len = records.len(), ?elapsed, "sorted records");
    Sorted { records, elapsed }
}

/// Sorts a copy of `records` ascending on `field` with `algorithm`.
pub fn sort_by_field<T>(records: &[T], field: SortField, algorithm: Algorithm) -> Sorted<T>
where
    T: AsRef<Ingredient> + Clone,
{
    sort(records, algorithm, field.comparator::<T>(Direction::Ascending))
}

/// What one algorithm did on one set of records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlgorithmRun {
    pub algorithm: Algorithm,
    pub elapsed: Duration,
    pub comparisons: usize,
}

/// Sorts a copy of `records` on `field` with `algorithm`, counting the comparisons it makes.
pub fn run_algorithm<T>(records: &[T], field: SortField, algorithm: Algorithm) -> AlgorithmRun
where
    T: AsRef<Ingredient> + Clone,
{
    let compare = field.comparator::<T>(Direction::Ascending);
    let mut comparisons = 0;

    let sorted = sort(records, algorithm, |a: &T, b: &T| {
        comparisons += 1;
        compare(a, b)
    });

    AlgorithmRun {
        algorithm,
        elapsed: sorted.elapsed,
        comparisons,
    }
}

/// Fewest records [`compare_algorithms`] will work on.
pub const MIN_RECORDS_TO_COMPARE: usize = 3;

/// Runs every [`Algorithm`] on its own copy of `records` and reports how each one did.
///
/// Fails with [`InvalidArgument`] for fewer than [`MIN_RECORDS_TO_COMPARE`] records, where there
/// is nothing worth comparing.
pub fn compare_algorithms<T>(
    records: &[T],
    field: SortField,
) -> Result<Vec<AlgorithmRun>, InvalidArgument>
where
    T: AsRef<Ingredient> + Clone,
{
    if records.len() < MIN_RECORDS_TO_COMPARE {
        return Err(InvalidArgument(format!(
            "need at least {MIN_RECORDS_TO_COMPARE} records to compare algorithms, got {}",
            records.len()
        )));
    }

    Ok(Algorithm::ALL
        .into_iter()
        .map(|algorithm| run_algorithm(records, field, algorithm))
        .collect())
}
