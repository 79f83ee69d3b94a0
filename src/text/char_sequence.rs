use std::iter::FusedIterator;

/// How characters are laid out in the byte buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Layout {
    /// Every byte is one character.
    SingleByte,
    /// UTF-8; a character's width is read from its leading byte.
    Utf8,
}

/// An immutable, borrowed sequence of characters with known byte and
/// character lengths.
///
/// # Examples
///
/// ```
/// use fuzzystr::CharSequence;
///
/// let seq = CharSequence::new("naïve");
/// assert_eq!(seq.char_count(), 5);
/// assert_eq!(seq.byte_len(), 6);
/// assert!(!seq.is_single_byte());
///
/// let raw = CharSequence::from_bytes(b"caf\xe9");
/// assert_eq!(raw.char_count(), 4);
/// assert!(raw.is_single_byte());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharSequence<'a> {
    bytes: &'a [u8],
    char_count: usize,
    layout: Layout,
}

impl<'a> CharSequence<'a> {
    /// Wraps UTF-8 text.
    pub fn new(text: &'a str) -> Self {
        Self {
            bytes: text.as_bytes(),
            char_count: text.chars().count(),
            layout: Layout::Utf8,
        }
    }

    /// Wraps text in a single-byte encoding, one character per byte.
    pub fn from_bytes(bytes: &'a [u8]) -> Self {
        Self {
            bytes,
            char_count: bytes.len(),
            layout: Layout::SingleByte,
        }
    }

    /// Number of characters.
    pub fn char_count(&self) -> usize {
        self.char_count
    }

    /// Number of bytes.
    pub fn byte_len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.char_count == 0
    }

    /// True when every character is exactly one byte wide.
    pub fn is_single_byte(&self) -> bool {
        self.bytes.len() == self.char_count
    }

    /// The underlying bytes.
    pub fn as_bytes(&self) -> &'a [u8] {
        self.bytes
    }

    /// Byte width of the character starting at `offset`.
    ///
    /// `offset` must be a character boundary.
    pub fn char_width_at(&self, offset: usize) -> usize {
        match self.layout {
            Layout::SingleByte => 1,
            Layout::Utf8 => utf8_width(self.bytes[offset]),
        }
    }

    /// The bytes of the character starting at `offset`.
    pub fn char_at(&self, offset: usize) -> &'a [u8] {
        let width = self.char_width_at(offset);
        &self.bytes[offset..offset + width]
    }

    /// Iterates over the byte span of each character.
    pub fn spans(&self) -> Spans<'a> {
        Spans {
            seq: *self,
            offset: 0,
        }
    }
}

impl<'a> From<&'a str> for CharSequence<'a> {
    fn from(text: &'a str) -> Self {
        Self::new(text)
    }
}

/// Iterator over the per-character byte spans of a [`CharSequence`].
#[derive(Debug, Clone)]
pub struct Spans<'a> {
    seq: CharSequence<'a>,
    offset: usize,
}

impl<'a> Iterator for Spans<'a> {
    type Item = &'a [u8];

    fn next(&mut self) -> Option<Self::Item> {
        if self.offset >= self.seq.bytes.len() {
            return None;
        }
        let span = self.seq.char_at(self.offset);
        self.offset += span.len();
        Some(span)
    }
}

impl FusedIterator for Spans<'_> {}

/// Width of a UTF-8 character from its leading byte.
fn utf8_width(lead: u8) -> usize {
    match lead {
        0x00..=0x7f => 1,
        0xc0..=0xdf => 2,
        0xe0..=0xef => 3,
        _ => 4,
    }
}

/// Compares two characters given as byte spans.
///
/// The last byte is checked first since it rules out most mismatches; widths
/// and the remaining bytes are only compared when it matches.
#[inline]
pub fn same_char(x: &[u8], y: &[u8]) -> bool {
    match (x.last(), y.last()) {
        (Some(a), Some(b)) if a == b => {
            x.len() == y.len() && (x.len() == 1 || x[..x.len() - 1] == y[..y.len() - 1])
        }
        _ => false,
    }
}
