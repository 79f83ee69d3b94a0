//! Compute-window bookkeeping for the bounded two-row engine.
//!
//! From any cell of the notional (m+1)x(n+1) matrix there is a minimum
//! residual cost to reach the bottom-right corner: zero when the unprocessed
//! suffixes have equal length, otherwise the cheapest run of insertions or
//! deletions that evens them out. Once a cell's value plus that residual
//! exceeds `max_d` it can no longer affect an answer within the bound, so
//! each row only needs the columns between `start` and `stop`.

use std::ops::Range;

use crate::cost::{CostModel, Distance};

/// Outcome of checking a bound against the input lengths before any row is
/// computed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WindowPlan {
    /// The length difference alone costs more than `max_d`.
    Exceeded,
    /// The bound can never bind, so compute every column.
    Unbounded,
    /// Compute only the columns inside this window.
    Bounded(Window),
}

/// Decides how a bound of `max_d` limits a comparison of a source of `m`
/// characters against a target of `n` characters.
///
/// # Examples
///
/// ```
/// use fuzzystr::CostModel;
/// use fuzzystr::dynamic::window::{plan, WindowPlan};
///
/// let costs = CostModel::unit();
/// assert_eq!(plan(3, 8, &costs, 2), WindowPlan::Exceeded);
/// assert_eq!(plan(3, 3, &costs, 3), WindowPlan::Unbounded);
/// assert!(matches!(plan(10, 10, &costs, 1), WindowPlan::Bounded(_)));
/// ```
pub fn plan(m: usize, n: usize, costs: &CostModel, max_d: Distance) -> WindowPlan {
    let net_inserts = n as i64 - m as i64;
    let min_theoretical = costs.length_penalty(net_inserts);
    if min_theoretical > max_d {
        return WindowPlan::Exceeded;
    }

    let max_theoretical = min_theoretical + costs.effective_substitute() * m.min(n) as Distance;
    if max_d >= max_theoretical {
        return WindowPlan::Unbounded;
    }

    let columns = m + 1;
    let mut stop = columns;
    let step = costs.ins() + costs.del();
    if step > 0 {
        // Starting right of the best column costs one extra deletion plus
        // one extra insertion per step.
        let slack = max_d - min_theoretical;
        let best_column = if net_inserts < 0 {
            net_inserts.unsigned_abs()
        } else {
            0
        };
        let reach = best_column + slack / step + 1;
        if reach <= m as u64 {
            stop = reach as usize;
        }
    }

    WindowPlan::Bounded(Window {
        start: 0,
        stop,
        columns,
        max_d,
    })
}

/// The half-open range of columns `start..stop` that can still influence an
/// answer within `max_d`.
///
/// Invariant: `0 <= start <= stop <= columns`, where `columns` is the source
/// length plus one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Window {
    start: usize,
    stop: usize,
    columns: usize,
    max_d: Distance,
}

impl Window {
    pub fn start(&self) -> usize {
        self.start
    }

    pub fn stop(&self) -> usize {
        self.stop
    }

    pub fn max_d(&self) -> Distance {
        self.max_d
    }

    /// Value returned, and written into dead cells, once the bound is exceeded.
    pub fn exceeded(&self) -> Distance {
        self.max_d.saturating_add(1)
    }

    /// No column is left; the distance is provably above `max_d`.
    pub fn is_collapsed(&self) -> bool {
        self.start >= self.stop
    }

    /// Grows the window one column to the right before a row is filled.
    ///
    /// At best, values move down the diagonal unchanged, so the next row may
    /// reach one column further. The new column is read from `prev` by the
    /// row loop, so it is seeded with the exceeded value.
    pub fn open_column(&mut self, prev: &mut [Distance]) {
        if self.stop < self.columns {
            prev[self.stop] = self.exceeded();
            self.stop += 1;
        }
    }

    /// Shrinks the window after a row has been swapped into `prev`.
    ///
    /// `zero_point` is the column at which the remaining source and target
    /// suffixes have equal length. Columns dropped from the left are
    /// overwritten in both rows so no later row can read a stale value from
    /// them. Returns the range of columns dropped from the left.
    pub fn slide(
        &mut self,
        zero_point: i64,
        prev: &mut [Distance],
        curr: &mut [Distance],
        costs: &CostModel,
    ) -> Range<usize> {
        while self.stop > 0 {
            let column = self.stop - 1;
            if !self.is_hopeless(column, zero_point, prev, costs) {
                break;
            }
            self.stop -= 1;
        }

        let first_dropped = self.start;
        while self.start < self.stop {
            if !self.is_hopeless(self.start, zero_point, prev, costs) {
                break;
            }
            prev[self.start] = self.exceeded();
            curr[self.start] = self.exceeded();
            self.start += 1;
        }
        first_dropped..self.start
    }

    fn is_hopeless(
        &self,
        column: usize,
        zero_point: i64,
        row: &[Distance],
        costs: &CostModel,
    ) -> bool {
        let residual = costs.length_penalty(column as i64 - zero_point);
        row[column].saturating_add(residual) > self.max_d
    }
}
