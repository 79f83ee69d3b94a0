//! Convenience functions mirroring the classic `fuzzystrmatch` entry points.
//!
//! Each one builds an [`EditDistance`] for a single call, so input lengths
//! are checked against [`crate::MAX_LENGTH`].

use crate::cost::{CostModel, Distance};
use crate::error::Result;
use crate::strategy::{EditDistance, Strategy};

/// Computes the Levenshtein (edit) distance between two string slices with
/// unit costs.
///
/// The Levenshtein distance is defined as the minimum number of
/// single-character edits (insertions, deletions, substitutions) required to
/// change `a` into `b`.
///
/// # Examples
///
/// ```
/// use fuzzystr::levenshtein;
///
/// assert_eq!(levenshtein("", "").unwrap(), 0);
/// assert_eq!(levenshtein("kitten", "sitting").unwrap(), 3);
/// assert_eq!(levenshtein("gumbo", "gambol").unwrap(), 2);
/// ```
pub fn levenshtein(a: &str, b: &str) -> Result<Distance> {
    levenshtein_with_costs(a, b, 1, 1, 1)
}

/// Levenshtein distance with explicit insertion, deletion and substitution
/// costs.
pub fn levenshtein_with_costs(a: &str, b: &str, ins: u32, del: u32, sub: u32) -> Result<Distance> {
    EditDistance::new()
        .with_strategy(Strategy::Unbounded)
        .with_costs(CostModel::new(ins, del, sub, 0))
        .distance(a, b)
}

/// Unit-cost Levenshtein distance if it is at most `max_d`, otherwise
/// `max_d + 1`.
///
/// # Examples
///
/// ```
/// use fuzzystr::levenshtein_less_equal;
///
/// assert_eq!(levenshtein_less_equal("extensive", "exhaustive", 2).unwrap(), 3);
/// assert_eq!(levenshtein_less_equal("extensive", "exhaustive", 4).unwrap(), 4);
/// ```
pub fn levenshtein_less_equal(a: &str, b: &str, max_d: Distance) -> Result<Distance> {
    levenshtein_less_equal_with_costs(a, b, 1, 1, 1, max_d)
}

/// Bounded Levenshtein distance with explicit costs.
pub fn levenshtein_less_equal_with_costs(
    a: &str,
    b: &str,
    ins: u32,
    del: u32,
    sub: u32,
    max_d: Distance,
) -> Result<Distance> {
    EditDistance::new()
        .with_strategy(Strategy::Bounded)
        .with_costs(CostModel::new(ins, del, sub, 0))
        .distance_bounded(a, b, max_d)
}

/// Unit-cost Damerau-Levenshtein distance, counting a swap of two adjacent
/// characters as one edit.
///
/// # Examples
///
/// ```
/// use fuzzystr::damerau_levenshtein;
///
/// assert_eq!(damerau_levenshtein("ab", "ba").unwrap(), 1);
/// assert_eq!(damerau_levenshtein("recieve", "receive").unwrap(), 1);
/// ```
pub fn damerau_levenshtein(a: &str, b: &str) -> Result<Distance> {
    damerau_levenshtein_with_costs(a, b, 1, 1, 1, 1)
}

/// Damerau-Levenshtein distance with explicit costs.
///
/// Only a metric when `ins == del`.
pub fn damerau_levenshtein_with_costs(
    a: &str,
    b: &str,
    ins: u32,
    del: u32,
    sub: u32,
    trans: u32,
) -> Result<Distance> {
    EditDistance::new()
        .with_strategy(Strategy::UnboundedWithTransposition)
        .with_costs(CostModel::new(ins, del, sub, trans))
        .distance(a, b)
}
