//! Damerau-Levenshtein distance (optimal string alignment) with configurable
//! costs, including adjacent transpositions.
//!
//! Keeps three rows of the matrix: `row0` two rows back, `row1` the previous
//! row and `row2` the row being filled. There is no bound and no window.
//!
//! Characters are compared with the same [`same_char`] contract as the
//! two-row engine, so multi-byte UTF-8 characters are swapped and matched as
//! whole characters rather than as individual bytes.
//!
//! The result is a true metric only when `insert == delete`; asymmetric
//! insertion and deletion costs break symmetry of the transposition term.
//! This is not enforced.

use crate::cost::{CostModel, Distance};
use crate::text::{same_char, CharSequence};

/// Computes the Damerau-Levenshtein distance from `source` to `target`.
///
/// Input lengths are not checked here; see [`crate::EditDistance`].
///
/// # Examples
///
/// ```
/// use fuzzystr::{CharSequence, CostModel};
/// use fuzzystr::dynamic::three_row::damerau_levenshtein;
///
/// let costs = CostModel::unit();
/// let d = damerau_levenshtein(&CharSequence::new("ab"), &CharSequence::new("ba"), &costs);
/// assert_eq!(d, 1);
/// ```
pub fn damerau_levenshtein(
    source: &CharSequence<'_>,
    target: &CharSequence<'_>,
    costs: &CostModel,
) -> Distance {
    let a: Vec<&[u8]> = source.spans().collect();
    let b: Vec<&[u8]> = target.spans().collect();
    let n = b.len();
    let (ins_c, del_c, sub_c, trans_c) = (costs.ins(), costs.del(), costs.sub(), costs.trans());

    let mut row0: Vec<Distance> = vec![0; n + 1];
    let mut row1: Vec<Distance> = (0..=n).map(|j| j as Distance * ins_c).collect();
    let mut row2: Vec<Distance> = vec![0; n + 1];

    for i in 0..a.len() {
        row2[0] = (i + 1) as Distance * del_c;
        for j in 0..n {
            let mut best = if same_char(a[i], b[j]) {
                row1[j]
            } else {
                row1[j] + sub_c
            };
            if i > 0 && j > 0 && same_char(a[i - 1], b[j]) && same_char(a[i], b[j - 1]) {
                best = best.min(row0[j - 1] + trans_c);
            }
            best = best.min(row1[j + 1] + del_c);
            best = best.min(row2[j] + ins_c);
            row2[j + 1] = best;
        }

        // row0 <- row1 <- row2, and the oldest row is reused for the next one.
        std::mem::swap(&mut row0, &mut row1);
        std::mem::swap(&mut row1, &mut row2);
    }

    row1[n]
}
