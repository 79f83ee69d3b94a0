//! Character sequences and the per-character width cache used by the engines.
//!
//! Inputs are either UTF-8 (`&str`, characters of one to four bytes) or a
//! single-byte encoding (`&[u8]`, one byte per character). Converting other
//! host encodings into one of these is the caller's job.

pub mod char_sequence;
pub mod width_cache;

pub use char_sequence::{same_char, CharSequence, Spans};
pub use width_cache::WidthCache;
