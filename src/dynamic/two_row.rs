//! Levenshtein distance with configurable costs, computed over two rows of
//! the notional (m+1)x(n+1) matrix, with an optional bound that narrows the
//! columns computed per row.
//!
//! Row `j` holds the cost of turning each source prefix into the first `j`
//! target characters; column `i` is the source prefix of length `i`. Moving
//! down a row consumes a target character (insertion), moving right a source
//! character (deletion).
//!
//! This engine does not score transpositions even though [`CostModel`]
//! carries a `transpose` cost. The window derivation in [`super::window`]
//! assumes only insert, delete and substitute, and would no longer bound the
//! result if swaps were allowed. Use [`super::three_row`] for transpositions.

use log::trace;

use super::window::{self, Window, WindowPlan};
use crate::cost::{CostModel, Distance};
use crate::text::{same_char, CharSequence, WidthCache};

/// Computes the Levenshtein distance from `source` to `target`.
///
/// With `bound = Some(max_d)` the result is exact when it is at most
/// `max_d`, and exactly `max_d + 1` otherwise. With `None` it is always
/// exact.
///
/// Input lengths are not checked here; see [`crate::EditDistance`].
///
/// # Examples
///
/// ```
/// use fuzzystr::{CharSequence, CostModel};
/// use fuzzystr::dynamic::two_row::levenshtein;
///
/// let costs = CostModel::unit();
/// let (s, t) = (CharSequence::new("kitten"), CharSequence::new("sitting"));
/// assert_eq!(levenshtein(&s, &t, &costs, None), 3);
/// assert_eq!(levenshtein(&s, &t, &costs, Some(1)), 2);
/// ```
pub fn levenshtein(
    source: &CharSequence<'_>,
    target: &CharSequence<'_>,
    costs: &CostModel,
    bound: Option<Distance>,
) -> Distance {
    let distance = compute(source, target, costs, bound);
    match bound {
        Some(max_d) => distance.min(max_d.saturating_add(1)),
        None => distance,
    }
}

fn compute(
    source: &CharSequence<'_>,
    target: &CharSequence<'_>,
    costs: &CostModel,
    bound: Option<Distance>,
) -> Distance {
    let m = source.char_count();
    let n = target.char_count();

    if m == 0 {
        return n as Distance * costs.ins();
    }
    if n == 0 {
        return m as Distance * costs.del();
    }

    let mut window = match bound {
        None => None,
        Some(max_d) => match window::plan(m, n, costs, max_d) {
            WindowPlan::Exceeded => {
                trace!("length difference alone exceeds bound {max_d}");
                return max_d.saturating_add(1);
            }
            WindowPlan::Unbounded => None,
            WindowPlan::Bounded(window) => Some(window),
        },
    };

    let widths = WidthCache::build(source, target);
    let columns = m + 1;
    let (ins_c, del_c, sub_c) = (costs.ins(), costs.del(), costs.sub());

    let mut prev: Vec<Distance> = vec![0; columns];
    let mut curr: Vec<Distance> = vec![0; columns];

    let (start, stop) = active_columns(window.as_ref(), columns);
    for (i, cell) in prev.iter_mut().enumerate().take(stop).skip(start) {
        *cell = i as Distance * del_c;
    }

    let s = source.as_bytes();
    let t = target.as_bytes();
    // Byte offset of the next target character.
    let mut y_offset = 0;
    // Byte offset of the source character read by the first computed column.
    let mut x_origin = 0;

    for j in 1..=n {
        let y_width = match widths {
            Some(_) => target.char_width_at(y_offset),
            None => 1,
        };
        let y = &t[y_offset..y_offset + y_width];

        if let Some(window) = window.as_mut() {
            window.open_column(&mut prev);
        }

        let (start, stop) = active_columns(window.as_ref(), columns);
        let first = if start == 0 {
            curr[0] = j as Distance * ins_c;
            1
        } else {
            start
        };

        match &widths {
            Some(widths) => {
                let mut x_offset = x_origin;
                for i in first..stop {
                    let x_width = widths.width(i - 1);
                    let x = &s[x_offset..x_offset + x_width];
                    let sub = if same_char(x, y) {
                        prev[i - 1]
                    } else {
                        prev[i - 1] + sub_c
                    };
                    curr[i] = (prev[i] + ins_c).min(curr[i - 1] + del_c).min(sub);
                    x_offset += x_width;
                }
            }
            None => {
                let y = y[0];
                for i in first..stop {
                    let sub = prev[i - 1] + if s[i - 1] == y { 0 } else { sub_c };
                    curr[i] = (prev[i] + ins_c).min(curr[i - 1] + del_c).min(sub);
                }
            }
        }

        std::mem::swap(&mut prev, &mut curr);
        y_offset += y_width;

        if let Some(window) = window.as_mut() {
            let zero_point = j as i64 - (n as i64 - m as i64);
            let dropped = window.slide(zero_point, &mut prev, &mut curr, costs);
            if let Some(widths) = &widths {
                // Column 0 reads no source character.
                for column in dropped.filter(|&column| column != 0) {
                    x_origin += widths.width(column - 1);
                }
            }
            if window.is_collapsed() {
                trace!("window collapsed at row {j} of {n}");
                return window.exceeded();
            }
        }
    }

    // The last row was swapped into `prev`.
    prev[m]
}

fn active_columns(window: Option<&Window>, columns: usize) -> (usize, usize) {
    window.map_or((0, columns), |window| (window.start(), window.stop()))
}
