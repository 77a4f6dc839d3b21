//! The JSON wire shape of a store document.
//!
//! The store itself never touches serde directly. Serialization goes
//! through raw structs that carry the exact document shape — short,
//! frozen keys, absent-not-null optionals — and an explicit conversion
//! layer that encodes and decodes target strings. Keeping the target
//! codecs out of serde means a bad target string fails with the channel
//! key plus group and entry indices instead of a bare JSON error.
//!
//! Keys of this schema revision:
//!
//! | key  | field                        |
//! |------|------------------------------|
//! | `n`  | store title                  |
//! | `t`  | store tags                   |
//! | `g`  | string-target groups         |
//! | `gf` | figure-target groups         |
//! | `gl` | figure-lines-target groups   |
//! | `gt` | tagged-target groups         |
//!
//! Within a group: `t` title, `e` entries, `c` comment. Within an
//! entry: `t` target, `c` content. Keys are never renamed within a
//! revision; stores written earlier must stay readable.

use serde::{Deserialize, Serialize};

use yijing_model::{Figure, FigureLines, ModelError, Target};

use crate::entry::AnnotationEntry;
use crate::error::StoreError;
use crate::group::AnnotationGroup;

/// A target type with a canonical string form.
///
/// Implementors promise that `decode(t.encode()) == t` for every value
/// `encode` does not normalize; the one exception in this crate is
/// [`Target`]'s out-of-range line demotion.
pub trait TargetCodec: Sized {
    /// The canonical string written to the wire. Total and
    /// deterministic.
    fn encode(&self) -> String;

    /// Parses a wire string back into a target value.
    fn decode(s: &str) -> Result<Self, ModelError>;
}

/// Plain strings are their own wire form; decoding cannot fail.
impl TargetCodec for String {
    fn encode(&self) -> String {
        self.clone()
    }

    fn decode(s: &str) -> Result<Self, ModelError> {
        Ok(s.to_string())
    }
}

impl TargetCodec for Figure {
    fn encode(&self) -> String {
        self.to_string()
    }

    fn decode(s: &str) -> Result<Self, ModelError> {
        s.parse()
    }
}

impl TargetCodec for FigureLines {
    fn encode(&self) -> String {
        self.to_string()
    }

    fn decode(s: &str) -> Result<Self, ModelError> {
        s.parse()
    }
}

impl TargetCodec for Target {
    fn encode(&self) -> String {
        self.to_string()
    }

    fn decode(s: &str) -> Result<Self, ModelError> {
        s.parse()
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub(crate) struct RawStore {
    #[serde(rename = "n", default, skip_serializing_if = "Option::is_none")]
    pub(crate) title: Option<String>,
    #[serde(rename = "t", default, skip_serializing_if = "Vec::is_empty")]
    pub(crate) tags: Vec<String>,
    #[serde(rename = "g", default, skip_serializing_if = "Vec::is_empty")]
    pub(crate) string_groups: Vec<RawGroup>,
    #[serde(rename = "gf", default, skip_serializing_if = "Vec::is_empty")]
    pub(crate) figure_groups: Vec<RawGroup>,
    #[serde(rename = "gl", default, skip_serializing_if = "Vec::is_empty")]
    pub(crate) line_groups: Vec<RawGroup>,
    #[serde(rename = "gt", default, skip_serializing_if = "Vec::is_empty")]
    pub(crate) target_groups: Vec<RawGroup>,
}

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct RawGroup {
    #[serde(rename = "t", default, skip_serializing_if = "Option::is_none")]
    pub(crate) title: Option<String>,
    #[serde(rename = "e", default)]
    pub(crate) entries: Vec<RawEntry>,
    #[serde(rename = "c", default, skip_serializing_if = "Option::is_none")]
    pub(crate) comment: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct RawEntry {
    #[serde(rename = "t")]
    pub(crate) target: String,
    #[serde(rename = "c")]
    pub(crate) content: String,
}

pub(crate) fn encode_groups<T: TargetCodec>(groups: &[AnnotationGroup<T>]) -> Vec<RawGroup> {
    groups
        .iter()
        .map(|group| RawGroup {
            title: group.title.clone(),
            entries: group
                .entries
                .iter()
                .map(|entry| RawEntry {
                    target: entry.target.encode(),
                    content: entry.content.clone(),
                })
                .collect(),
            comment: group.comment.clone(),
        })
        .collect()
}

pub(crate) fn decode_groups<T: TargetCodec>(
    channel: &'static str,
    raw: Vec<RawGroup>,
) -> Result<Vec<AnnotationGroup<T>>, StoreError> {
    raw.into_iter()
        .enumerate()
        .map(|(group_index, group)| {
            let entries = group
                .entries
                .into_iter()
                .enumerate()
                .map(|(entry_index, entry)| {
                    let target =
                        T::decode(&entry.target).map_err(|source| StoreError::Target {
                            channel,
                            group: group_index,
                            entry: entry_index,
                            source,
                        })?;
                    Ok(AnnotationEntry {
                        target,
                        content: entry.content,
                    })
                })
                .collect::<Result<Vec<_>, StoreError>>()?;
            Ok(AnnotationGroup {
                title: group.title,
                comment: group.comment,
                entries,
            })
        })
        .collect()
}
