//! Value types for Yijing figures and their canonical string codecs.
//!
//! Everything here is an immutable in-memory value with a compact,
//! loss-free string form:
//!
//! - [`Symbol`]: one line of a figure, yin or yang, written '0' or '1'.
//! - [`Figure`]: an ordered sequence of symbols, written one character
//!   per line (`"111"` is the trigram Qian).
//! - [`FigureLines`]: a figure plus a same-length mask selecting some of
//!   its lines, written as the two encodings concatenated.
//! - [`Target`]: what an annotation is about — nothing, a whole figure,
//!   or one line of a figure — written as space-joined fields.
//!
//! All parsing is strict and returns [`ModelError`]; no codec performs
//! I/O or panics on malformed input. The one deliberate leniency sits
//! on the encode side: a [`Target::Line`] with an out-of-range index is
//! demoted to a whole-figure target when written out.

pub mod error;
pub mod figure;
pub mod lines;
pub mod symbol;
pub mod target;

pub use error::{ModelError, Result};
pub use figure::Figure;
pub use lines::FigureLines;
pub use symbol::Symbol;
pub use target::Target;
