//! Configurable-cost Levenshtein and Damerau-Levenshtein distances for
//! ranking and filtering fuzzy string matches.
//!
//! Two engines are available, chosen with [`Strategy`]:
//!
//! - a two-row Levenshtein engine (insert, delete, substitute) that accepts
//!   an optional bound and skips the parts of the matrix that cannot bring
//!   the answer under it;
//! - a three-row Damerau-Levenshtein engine that also scores swaps of
//!   adjacent characters, without a bound.
//!
//! ```
//! use fuzzystr::{CostModel, EditDistance, Strategy};
//!
//! let metric = EditDistance::new().with_costs(CostModel::new(1, 1, 2, 1));
//! assert_eq!(metric.distance("flaw", "lawn").unwrap(), 2);
//! assert_eq!(metric.distance_bounded("flaw", "lawn", 1).unwrap(), 2);
//! ```

pub mod cost;
pub mod dynamic;
pub mod error;
pub mod search;
pub mod strategy;
pub mod text;

pub use cost::{CostModel, Distance};
pub use dynamic::{
    damerau_levenshtein, damerau_levenshtein_with_costs, levenshtein, levenshtein_less_equal,
    levenshtein_less_equal_with_costs, levenshtein_with_costs,
};
pub use error::{Error, Result};
pub use search::{closest, rank, Match};
pub use strategy::{distance, distance_bounded, EditDistance, Strategy, MAX_LENGTH};
pub use text::{CharSequence, WidthCache};
