//! The two-valued line symbol of a figure.

use std::fmt;

use crate::error::ModelError;

/// A single line of a figure: yin (low, broken) or yang (high, solid).
///
/// Ordering puts `Low` before `High`, so figure comparison follows the
/// usual convention that a solid line outranks a broken one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Symbol {
    /// A yin line, written as '0'.
    Low,
    /// A yang line, written as '1'.
    High,
}

impl Symbol {
    /// Returns the single-character encoding of this symbol.
    pub fn as_char(self) -> char {
        match self {
            Symbol::Low => '0',
            Symbol::High => '1',
        }
    }

    /// Parses one character of a figure string.
    ///
    /// `position` is only used to report where in the string the bad
    /// character sat.
    pub fn from_char(c: char, position: usize) -> Result<Self, ModelError> {
        match c {
            '0' => Ok(Symbol::Low),
            '1' => Ok(Symbol::High),
            found => Err(ModelError::InvalidSymbol { found, position }),
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Symbol::Low => "0",
            Symbol::High => "1",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn char_codec() {
        assert_eq!(Symbol::from_char('0', 0), Ok(Symbol::Low));
        assert_eq!(Symbol::from_char('1', 0), Ok(Symbol::High));
        assert_eq!(Symbol::Low.as_char(), '0');
        assert_eq!(Symbol::High.as_char(), '1');
    }

    #[test]
    fn rejects_other_chars() {
        let err = Symbol::from_char('2', 4).unwrap_err();
        assert_eq!(
            err,
            ModelError::InvalidSymbol {
                found: '2',
                position: 4
            }
        );
    }

    #[test]
    fn high_outranks_low() {
        assert!(Symbol::High > Symbol::Low);
    }
}
