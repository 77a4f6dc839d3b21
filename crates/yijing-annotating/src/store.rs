//! The top-level annotation store.

use yijing_model::{Figure, FigureLines, Target};

use crate::error::Result;
use crate::group::AnnotationGroup;
use crate::wire::{RawStore, decode_groups, encode_groups};

/// An annotation store, usually corresponding to one JSON document.
///
/// Groups live in four parallel channels, one per target type. The
/// channels are independent: adding a figure group never touches the
/// figure-lines list. Tags keep their insertion order and may repeat.
///
/// A store is built incrementally through the `add_*_group` methods (or
/// in one shot by [`AnnotationStore::from_json`]) and holds no external
/// resources.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnnotationStore {
    /// Optional store title.
    pub title: Option<String>,
    /// Free-form tags, in insertion order.
    pub tags: Vec<String>,
    /// Groups whose targets are plain strings (often the string form of
    /// something richer the caller does not want to type).
    pub string_groups: Vec<AnnotationGroup<String>>,
    /// Groups whose targets are whole figures.
    pub figure_groups: Vec<AnnotationGroup<Figure>>,
    /// Groups whose targets are line selections within a figure.
    pub line_groups: Vec<AnnotationGroup<FigureLines>>,
    /// Groups whose targets are [`Target`] values (anything, a whole
    /// figure, or one line).
    pub target_groups: Vec<AnnotationGroup<Target>>,
}

impl AnnotationStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an empty string-target group and returns it.
    pub fn add_string_group(
        &mut self,
        title: Option<String>,
        comment: Option<String>,
    ) -> &mut AnnotationGroup<String> {
        Self::push_group(&mut self.string_groups, title, comment)
    }

    /// Appends an empty figure-target group and returns it.
    pub fn add_figure_group(
        &mut self,
        title: Option<String>,
        comment: Option<String>,
    ) -> &mut AnnotationGroup<Figure> {
        Self::push_group(&mut self.figure_groups, title, comment)
    }

    /// Appends an empty figure-lines-target group and returns it.
    pub fn add_line_group(
        &mut self,
        title: Option<String>,
        comment: Option<String>,
    ) -> &mut AnnotationGroup<FigureLines> {
        Self::push_group(&mut self.line_groups, title, comment)
    }

    /// Appends an empty tagged-target group and returns it.
    pub fn add_target_group(
        &mut self,
        title: Option<String>,
        comment: Option<String>,
    ) -> &mut AnnotationGroup<Target> {
        Self::push_group(&mut self.target_groups, title, comment)
    }

    fn push_group<T>(
        groups: &mut Vec<AnnotationGroup<T>>,
        title: Option<String>,
        comment: Option<String>,
    ) -> &mut AnnotationGroup<T> {
        groups.push(AnnotationGroup::new(title, comment));
        let index = groups.len() - 1;
        &mut groups[index]
    }

    /// Serializes the store to its compact JSON document.
    ///
    /// Absent title and comments are omitted entirely (never written as
    /// null), as are empty tag lists and unpopulated channels. Targets
    /// are written in their canonical string form, which demotes any
    /// out-of-range line target to a whole-figure target — the one
    /// lossy transformation in the format.
    pub fn to_json(&self) -> Result<String> {
        let raw = RawStore {
            title: self.title.clone(),
            tags: self.tags.clone(),
            string_groups: encode_groups(&self.string_groups),
            figure_groups: encode_groups(&self.figure_groups),
            line_groups: encode_groups(&self.line_groups),
            target_groups: encode_groups(&self.target_groups),
        };
        Ok(serde_json::to_string(&raw)?)
    }

    /// Deserializes a store from its JSON document.
    ///
    /// Unknown keys are ignored and missing keys take their defaults,
    /// so documents written by later revisions that only add keys stay
    /// readable. Fails with [`crate::StoreError::Json`] when the
    /// document is not the expected shape, or
    /// [`crate::StoreError::Target`] naming the channel, group, and
    /// entry of the first target string that does not decode.
    pub fn from_json(s: &str) -> Result<Self> {
        let raw: RawStore = serde_json::from_str(s)?;
        Ok(Self {
            title: raw.title,
            tags: raw.tags,
            string_groups: decode_groups("g", raw.string_groups)?,
            figure_groups: decode_groups("gf", raw.figure_groups)?,
            line_groups: decode_groups("gl", raw.line_groups)?,
            target_groups: decode_groups("gt", raw.target_groups)?,
        })
    }
}
