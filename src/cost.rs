//! Per-operation penalties for the edit distance engines.

/// Accumulated edit distance. Wide enough that 510 operations at `u32::MAX`
/// each cannot overflow.
pub type Distance = u64;

/// Four nonnegative penalties, one per edit operation.
///
/// The two-row engines ignore `transpose`; only the transposition-aware
/// engine reads it.
///
/// # Examples
///
/// ```
/// use fuzzystr::CostModel;
///
/// let costs = CostModel::unit().with_substitute(2);
/// assert_eq!(costs.effective_substitute(), 2);
/// assert_eq!(CostModel::new(1, 1, 5, 1).effective_substitute(), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CostModel {
    /// Cost of inserting one character of the target.
    pub insert: u32,
    /// Cost of deleting one character of the source.
    pub delete: u32,
    /// Cost of replacing one source character with a different target character.
    pub substitute: u32,
    /// Cost of swapping two adjacent characters.
    pub transpose: u32,
}

impl Default for CostModel {
    fn default() -> Self {
        Self::unit()
    }
}

impl CostModel {
    /// Creates a cost model from explicit penalties.
    pub const fn new(insert: u32, delete: u32, substitute: u32, transpose: u32) -> Self {
        Self {
            insert,
            delete,
            substitute,
            transpose,
        }
    }

    /// All four operations cost 1.
    pub const fn unit() -> Self {
        Self::new(1, 1, 1, 1)
    }

    /// Sets the insertion cost.
    pub fn with_insert(mut self, insert: u32) -> Self {
        self.insert = insert;
        self
    }

    /// Sets the deletion cost.
    pub fn with_delete(mut self, delete: u32) -> Self {
        self.delete = delete;
        self
    }

    /// Sets the substitution cost.
    pub fn with_substitute(mut self, substitute: u32) -> Self {
        self.substitute = substitute;
        self
    }

    /// Sets the transposition cost.
    pub fn with_transpose(mut self, transpose: u32) -> Self {
        self.transpose = transpose;
        self
    }

    pub(crate) fn ins(&self) -> Distance {
        Distance::from(self.insert)
    }

    pub(crate) fn del(&self) -> Distance {
        Distance::from(self.delete)
    }

    pub(crate) fn sub(&self) -> Distance {
        Distance::from(self.substitute)
    }

    pub(crate) fn trans(&self) -> Distance {
        Distance::from(self.transpose)
    }

    /// Substitution cost capped at `insert + delete`.
    ///
    /// A substitution is never worth more than deleting and re-inserting, so
    /// this is the largest per-character cost any optimal alignment pays.
    pub fn effective_substitute(&self) -> Distance {
        self.sub().min(self.ins() + self.del())
    }

    /// Whether `insert == delete`. The transposition-aware engine is only a
    /// true metric when this holds.
    pub fn is_symmetric(&self) -> bool {
        self.insert == self.delete
    }

    /// Cheapest way to cover a length difference of `net_inserts` characters
    /// (positive: target is longer).
    pub(crate) fn length_penalty(&self, net_inserts: i64) -> Distance {
        if net_inserts < 0 {
            net_inserts.unsigned_abs() * self.del()
        } else {
            net_inserts.unsigned_abs() * self.ins()
        }
    }
}
