//! An immutable figure: an ordered sequence of line symbols.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;
use crate::symbol::Symbol;

/// A figure: an ordered, immutable sequence of [`Symbol`]s.
///
/// A six-line figure is a hexagram, a three-line figure a trigram, but
/// any length (including zero) is allowed. The canonical string form is
/// one character per line ('1' for [`Symbol::High`], '0' for
/// [`Symbol::Low`]) with no delimiters, e.g. `"111"` for the trigram
/// Qian.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Figure(Vec<Symbol>);

impl Figure {
    /// Creates a figure from its lines. The length is whatever the
    /// caller supplies; there is no padding.
    pub fn new(symbols: impl Into<Vec<Symbol>>) -> Self {
        Self(symbols.into())
    }

    /// Number of lines.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True for the zero-line figure.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Line at `index`, or `None` past the end.
    pub fn get(&self, index: usize) -> Option<Symbol> {
        self.0.get(index).copied()
    }

    /// The lines in order.
    pub fn symbols(&self) -> &[Symbol] {
        &self.0
    }

    /// Iterates over the lines in order.
    pub fn iter(&self) -> impl Iterator<Item = Symbol> + '_ {
        self.0.iter().copied()
    }
}

impl fmt::Display for Figure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for symbol in &self.0 {
            write!(f, "{symbol}")?;
        }
        Ok(())
    }
}

impl FromStr for Figure {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let symbols = s
            .chars()
            .enumerate()
            .map(|(position, c)| Symbol::from_char(c, position))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self(symbols))
    }
}

impl Ord for Figure {
    /// Total order: shorter figures first, equal lengths compared line
    /// by line with `High > Low`. Equal-length comparison is the only
    /// case the annotation domain exercises; the length-first rule
    /// makes the order total for everything else.
    fn cmp(&self, other: &Self) -> Ordering {
        self.len()
            .cmp(&other.len())
            .then_with(|| self.0.cmp(&other.0))
    }
}

impl PartialOrd for Figure {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl From<Vec<Symbol>> for Figure {
    fn from(symbols: Vec<Symbol>) -> Self {
        Self(symbols)
    }
}
