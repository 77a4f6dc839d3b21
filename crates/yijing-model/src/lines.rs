//! A selection of lines within one figure.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;
use crate::figure::Figure;
use crate::symbol::Symbol;

/// Some lines of a figure: a base [`Figure`] paired with a same-length
/// marks figure. A [`Symbol::High`] at position `i` of the marks selects
/// line `i` of the base.
///
/// The canonical string form is the base encoding immediately followed
/// by the marks encoding, so `"110010"` selects the second line of the
/// trigram `"110"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FigureLines {
    figure: Figure,
    marks: Figure,
}

impl FigureLines {
    /// Pairs a figure with its marks.
    ///
    /// Fails with [`ModelError::LengthMismatch`] unless both have the
    /// same number of lines.
    pub fn new(figure: Figure, marks: Figure) -> Result<Self, ModelError> {
        if marks.len() != figure.len() {
            return Err(ModelError::LengthMismatch {
                figure: figure.len(),
                marks: marks.len(),
            });
        }
        Ok(Self { figure, marks })
    }

    /// Builds the marks from a list of line indices.
    ///
    /// Each index has `index_base` subtracted before use (pass 0 for
    /// zero-based input, 1 for the traditional one-based line count).
    /// Fails with [`ModelError::LineOutOfRange`] if any adjusted index
    /// is negative or past the end of the figure. Repeating an index
    /// selects the same line again, which is a no-op.
    pub fn from_indices(
        figure: Figure,
        indices: impl IntoIterator<Item = usize>,
        index_base: usize,
    ) -> Result<Self, ModelError> {
        let len = figure.len();
        let mut marks = vec![Symbol::Low; len];
        for index in indices {
            let line = index
                .checked_sub(index_base)
                .filter(|&line| line < len)
                .ok_or(ModelError::LineOutOfRange {
                    index,
                    index_base,
                    len,
                })?;
            marks[line] = Symbol::High;
        }
        Ok(Self {
            figure,
            marks: Figure::new(marks),
        })
    }

    /// The base figure.
    pub fn figure(&self) -> &Figure {
        &self.figure
    }

    /// The marks figure, always the same length as the base.
    pub fn marks(&self) -> &Figure {
        &self.marks
    }

    /// True if line `index` of the base is selected.
    pub fn is_selected(&self, index: usize) -> bool {
        self.marks.get(index) == Some(Symbol::High)
    }

    /// Zero-based indices of the selected lines, in order.
    pub fn selected_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.marks
            .iter()
            .enumerate()
            .filter(|&(_, symbol)| symbol == Symbol::High)
            .map(|(index, _)| index)
    }
}

impl fmt::Display for FigureLines {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.figure, self.marks)
    }
}

impl FromStr for FigureLines {
    type Err = ModelError;

    /// Splits the string at its midpoint and parses each half as a
    /// figure. Both halves end up with equal length by construction, so
    /// the final pairing cannot fail.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Reject foreign characters up front so the midpoint split below
        // can safely slice by byte.
        if let Some((position, found)) = s.char_indices().find(|&(_, c)| c != '0' && c != '1') {
            return Err(ModelError::InvalidSymbol { found, position });
        }
        if s.len() % 2 != 0 {
            return Err(ModelError::OddLength { len: s.len() });
        }
        let half = s.len() / 2;
        let figure = s[..half].parse::<Figure>()?;
        let marks = s[half..].parse::<Figure>()?;
        Ok(Self { figure, marks })
    }
}

impl Ord for FigureLines {
    /// Structural order on the pair, base figure first.
    fn cmp(&self, other: &Self) -> Ordering {
        self.figure
            .cmp(&other.figure)
            .then_with(|| self.marks.cmp(&other.marks))
    }
}

impl PartialOrd for FigureLines {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fig(s: &str) -> Figure {
        s.parse().unwrap()
    }

    #[test]
    fn display_concatenates_both_halves() {
        let lines = FigureLines::new(fig("110"), fig("010")).unwrap();
        assert_eq!(lines.to_string(), "110010");
    }

    #[test]
    fn parse_splits_at_midpoint() {
        let lines: FigureLines = "110010".parse().unwrap();
        assert_eq!(lines.figure(), &fig("110"));
        assert_eq!(lines.marks(), &fig("010"));
    }

    #[test]
    fn parse_rejects_odd_length() {
        let err = "11001".parse::<FigureLines>().unwrap_err();
        assert_eq!(err, ModelError::OddLength { len: 5 });
    }

    #[test]
    fn parse_propagates_symbol_errors() {
        assert!(matches!(
            "1a0010".parse::<FigureLines>(),
            Err(ModelError::InvalidSymbol { found: 'a', .. })
        ));
    }

    #[test]
    fn new_rejects_length_mismatch() {
        let err = FigureLines::new(fig("110"), fig("0100")).unwrap_err();
        assert_eq!(err, ModelError::LengthMismatch { figure: 3, marks: 4 });
    }

    #[test]
    fn from_indices_marks_selected_lines() {
        let lines = FigureLines::from_indices(fig("111000"), [0, 2, 5], 0).unwrap();
        assert_eq!(lines.marks(), &fig("101001"));
        assert!(lines.is_selected(0));
        assert!(!lines.is_selected(1));
        assert_eq!(lines.selected_indices().collect::<Vec<_>>(), vec![0, 2, 5]);
    }

    #[test]
    fn from_indices_honors_index_base() {
        let one_based = FigureLines::from_indices(fig("111"), [1, 3], 1).unwrap();
        assert_eq!(one_based.marks(), &fig("101"));
    }

    #[test]
    fn from_indices_rejects_out_of_range() {
        let err = FigureLines::from_indices(fig("111"), [3], 0).unwrap_err();
        assert_eq!(
            err,
            ModelError::LineOutOfRange {
                index: 3,
                index_base: 0,
                len: 3
            }
        );
        // Below the base counts as negative after adjustment.
        assert!(FigureLines::from_indices(fig("111"), [0], 1).is_err());
    }

    #[test]
    fn repeated_indices_are_a_no_op() {
        let lines = FigureLines::from_indices(fig("111"), [1, 1, 1], 0).unwrap();
        assert_eq!(lines.marks(), &fig("010"));
    }

    #[test]
    fn order_is_base_first() {
        let a = FigureLines::new(fig("01"), fig("11")).unwrap();
        let b = FigureLines::new(fig("10"), fig("00")).unwrap();
        assert!(a < b);
    }
}
