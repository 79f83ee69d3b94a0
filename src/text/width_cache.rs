use super::CharSequence;

/// Byte width of every character in a source sequence.
///
/// Built once per computation so the inner loop never has to decode a
/// source character twice. Only needed when at least one input has
/// multi-byte characters; otherwise the engines index bytes directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidthCache {
    widths: Vec<usize>,
}

impl WidthCache {
    /// Builds the cache for `source` unless both `source` and `target` are
    /// single-byte throughout.
    ///
    /// The cache is built even when only `target` is multi-byte, so the
    /// byte-indexed fast path can assume both inputs are single-byte.
    ///
    /// # Examples
    ///
    /// ```
    /// use fuzzystr::{CharSequence, WidthCache};
    ///
    /// let ascii = CharSequence::new("abc");
    /// assert!(WidthCache::build(&ascii, &ascii).is_none());
    ///
    /// let cache = WidthCache::build(&ascii, &CharSequence::new("äbc")).unwrap();
    /// assert_eq!(cache.width(0), 1);
    /// ```
    pub fn build(source: &CharSequence<'_>, target: &CharSequence<'_>) -> Option<Self> {
        if source.is_single_byte() && target.is_single_byte() {
            return None;
        }
        Some(Self::for_sequence(source))
    }

    /// Builds the cache for `seq` unconditionally.
    pub fn for_sequence(seq: &CharSequence<'_>) -> Self {
        Self {
            widths: seq.spans().map(<[u8]>::len).collect(),
        }
    }

    /// Byte width of the character at `index`.
    #[inline]
    pub fn width(&self, index: usize) -> usize {
        self.widths[index]
    }

    pub fn len(&self) -> usize {
        self.widths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.widths.is_empty()
    }
}
