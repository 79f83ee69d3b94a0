//! Engine selection and the length-checked public entry points.

use log::debug;

use crate::cost::{CostModel, Distance};
use crate::dynamic::{three_row, two_row};
use crate::error::{Error, Result};
use crate::text::CharSequence;

/// Default maximum number of characters accepted per input.
///
/// The engines use O(m) memory and O(mn) time, so inputs are capped to
/// keep a single call cheap.
pub const MAX_LENGTH: usize = 255;

/// Which engine computes the distance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Strategy {
    /// Two-row Levenshtein engine, never windowed.
    Unbounded,
    /// Two-row Levenshtein engine, windowed when a bound is supplied.
    #[default]
    Bounded,
    /// Three-row Damerau-Levenshtein engine with adjacent transpositions.
    UnboundedWithTransposition,
}

/// A configured edit distance: costs, engine and length limit.
///
/// # Examples
///
/// ```
/// use fuzzystr::{CostModel, EditDistance, Strategy};
///
/// let metric = EditDistance::new();
/// assert_eq!(metric.distance("kitten", "sitting").unwrap(), 3);
/// assert_eq!(metric.distance_bounded("kitten", "sitting", 1).unwrap(), 2);
///
/// let metric = EditDistance::new()
///     .with_strategy(Strategy::UnboundedWithTransposition)
///     .with_costs(CostModel::unit().with_transpose(1));
/// assert_eq!(metric.distance("ab", "ba").unwrap(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditDistance {
    costs: CostModel,
    strategy: Strategy,
    max_length: usize,
}

impl Default for EditDistance {
    fn default() -> Self {
        Self {
            costs: CostModel::default(),
            strategy: Strategy::default(),
            max_length: MAX_LENGTH,
        }
    }
}

impl EditDistance {
    /// Unit costs, [`Strategy::Bounded`], and a limit of [`MAX_LENGTH`].
    pub fn new() -> Self {
        Default::default()
    }

    /// Sets the per-operation costs.
    pub fn with_costs(mut self, costs: CostModel) -> Self {
        self.costs = costs;
        self
    }

    /// Sets the engine.
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Sets the maximum number of characters accepted per input.
    pub fn with_max_length(mut self, max_length: usize) -> Self {
        self.max_length = max_length;
        self
    }

    pub fn costs(&self) -> &CostModel {
        &self.costs
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    pub fn max_length(&self) -> usize {
        self.max_length
    }

    /// Exact distance from `source` to `target`.
    pub fn distance(&self, source: &str, target: &str) -> Result<Distance> {
        self.distance_seq(&CharSequence::new(source), &CharSequence::new(target))
    }

    /// Distance from `source` to `target`, or `max_d + 1` if it exceeds `max_d`.
    pub fn distance_bounded(&self, source: &str, target: &str, max_d: Distance) -> Result<Distance> {
        self.distance_seq_bounded(&CharSequence::new(source), &CharSequence::new(target), max_d)
    }

    /// Exact distance between two single-byte encoded buffers.
    pub fn distance_bytes(&self, source: &[u8], target: &[u8]) -> Result<Distance> {
        self.distance_seq(&CharSequence::from_bytes(source), &CharSequence::from_bytes(target))
    }

    /// Bounded distance between two single-byte encoded buffers.
    pub fn distance_bytes_bounded(
        &self,
        source: &[u8],
        target: &[u8],
        max_d: Distance,
    ) -> Result<Distance> {
        self.distance_seq_bounded(
            &CharSequence::from_bytes(source),
            &CharSequence::from_bytes(target),
            max_d,
        )
    }

    /// Exact distance between two prepared sequences.
    pub fn distance_seq(&self, source: &CharSequence<'_>, target: &CharSequence<'_>) -> Result<Distance> {
        self.check(source, target)?;
        debug!(
            "{:?} distance over {}x{} characters",
            self.strategy,
            source.char_count(),
            target.char_count()
        );
        Ok(match self.strategy {
            Strategy::Unbounded | Strategy::Bounded => {
                two_row::levenshtein(source, target, &self.costs, None)
            }
            Strategy::UnboundedWithTransposition => {
                three_row::damerau_levenshtein(source, target, &self.costs)
            }
        })
    }

    /// Bounded distance between two prepared sequences.
    ///
    /// Every strategy returns `min(distance, max_d + 1)`; only
    /// [`Strategy::Bounded`] uses the bound to skip work.
    pub fn distance_seq_bounded(
        &self,
        source: &CharSequence<'_>,
        target: &CharSequence<'_>,
        max_d: Distance,
    ) -> Result<Distance> {
        self.check(source, target)?;
        debug!(
            "{:?} distance over {}x{} characters, max_d {max_d}",
            self.strategy,
            source.char_count(),
            target.char_count()
        );
        let exceeded = max_d.saturating_add(1);
        Ok(match self.strategy {
            Strategy::Bounded => two_row::levenshtein(source, target, &self.costs, Some(max_d)),
            Strategy::Unbounded => {
                two_row::levenshtein(source, target, &self.costs, None).min(exceeded)
            }
            Strategy::UnboundedWithTransposition => {
                three_row::damerau_levenshtein(source, target, &self.costs).min(exceeded)
            }
        })
    }

    fn check(&self, source: &CharSequence<'_>, target: &CharSequence<'_>) -> Result<()> {
        Error::check_length(source.char_count(), self.max_length)?;
        Error::check_length(target.char_count(), self.max_length)
    }
}

/// Exact Levenshtein distance with the given costs.
///
/// # Examples
///
/// ```
/// use fuzzystr::{distance, CostModel};
///
/// assert_eq!(distance("flaw", "lawn", &CostModel::unit()).unwrap(), 2);
/// ```
pub fn distance(source: &str, target: &str, costs: &CostModel) -> Result<Distance> {
    EditDistance::new().with_costs(*costs).distance(source, target)
}

/// Levenshtein distance with the given costs if it is at most `max_d`,
/// otherwise exactly `max_d + 1`.
///
/// # Examples
///
/// ```
/// use fuzzystr::{distance_bounded, CostModel};
///
/// let costs = CostModel::unit();
/// assert_eq!(distance_bounded("kitten", "sitting", &costs, 5).unwrap(), 3);
/// assert_eq!(distance_bounded("kitten", "sitting", &costs, 2).unwrap(), 3);
/// assert_eq!(distance_bounded("kitten", "sitting", &costs, 0).unwrap(), 1);
/// ```
pub fn distance_bounded(
    source: &str,
    target: &str,
    costs: &CostModel,
    max_d: Distance,
) -> Result<Distance> {
    EditDistance::new()
        .with_costs(*costs)
        .distance_bounded(source, target, max_d)
}
