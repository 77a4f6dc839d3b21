//! The addressed subject of an annotation.

use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;
use crate::figure::Figure;

/// What an annotation is about: nothing in particular, a whole figure,
/// or one numbered line of a figure.
///
/// The canonical string form joins the fields with a single space:
/// `" "` (zero tokens) for [`Target::Any`], the figure encoding for
/// [`Target::Figure`], and `"<figure> <index>"` for [`Target::Line`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Target {
    /// No particular target; the annotation applies to anything.
    Any,
    /// A whole figure.
    Figure(Figure),
    /// One line of a figure, counted from zero.
    ///
    /// An `index` at or past the end of the figure is representable in
    /// memory; it is normalized away the next time the target is
    /// encoded (see [`Target::fmt`]).
    Line { figure: Figure, index: usize },
}

impl fmt::Display for Target {
    /// Encodes the target for the wire.
    ///
    /// A [`Target::Line`] whose index is out of range is demoted: only
    /// the figure is emitted, identical to the [`Target::Figure`]
    /// encoding. An entry written against a figure that has since lost
    /// lines degrades to a whole-figure target instead of becoming
    /// unparseable.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Target::Any => f.write_str(" "),
            Target::Figure(figure) => write!(f, "{figure}"),
            Target::Line { figure, index } => {
                if *index >= figure.len() {
                    write!(f, "{figure}")
                } else {
                    write!(f, "{figure} {index}")
                }
            }
        }
    }
}

impl FromStr for Target {
    type Err = ModelError;

    /// Decodes by splitting on ASCII whitespace: zero tokens is
    /// [`Target::Any`], one token a figure, two tokens a figure and a
    /// line number. The line number's range is not re-checked here.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tokens: Vec<&str> = s.split_ascii_whitespace().collect();
        match tokens.as_slice() {
            [] => Ok(Target::Any),
            [figure] => Ok(Target::Figure(figure.parse()?)),
            [figure, index] => {
                let figure = figure.parse()?;
                let index =
                    index
                        .parse::<usize>()
                        .map_err(|_| ModelError::InvalidLineNumber {
                            token: (*index).to_string(),
                        })?;
                Ok(Target::Line { figure, index })
            }
            tokens => Err(ModelError::ExtraTokens {
                count: tokens.len(),
            }),
        }
    }
}
