//! A named, ordered collection of annotations over one target type.

use crate::entry::AnnotationEntry;

/// An ordered group of [`AnnotationEntry`]s sharing one target type.
///
/// Entries keep their insertion order and may repeat a target; nothing
/// here deduplicates or reorders. Title and comment are free-form
/// metadata with no uniqueness constraints across groups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotationGroup<T> {
    /// Optional group title.
    pub title: Option<String>,
    /// Optional free text about the group as a whole.
    pub comment: Option<String>,
    /// The annotations, in insertion order.
    pub entries: Vec<AnnotationEntry<T>>,
}

impl<T> AnnotationGroup<T> {
    /// Creates an empty group.
    pub fn new(title: Option<String>, comment: Option<String>) -> Self {
        Self {
            title,
            comment,
            entries: Vec::new(),
        }
    }

    /// Constructs an entry, appends it at the end, and returns it.
    pub fn add_entry(&mut self, target: T, content: impl Into<String>) -> &mut AnnotationEntry<T> {
        self.entries.push(AnnotationEntry::new(target, content));
        let index = self.entries.len() - 1;
        &mut self.entries[index]
    }

    /// First entry whose target equals `target`, if any.
    ///
    /// Groups stay small (one entry per structural position at most),
    /// so this is a plain linear scan.
    pub fn get_entry(&self, target: &T) -> Option<&AnnotationEntry<T>>
    where
        T: PartialEq,
    {
        self.entries.iter().find(|entry| &entry.target == target)
    }

    /// Mutable variant of [`AnnotationGroup::get_entry`], for editing an
    /// annotation in place.
    pub fn get_entry_mut(&mut self, target: &T) -> Option<&mut AnnotationEntry<T>>
    where
        T: PartialEq,
    {
        self.entries
            .iter_mut()
            .find(|entry| &entry.target == target)
    }
}

impl<T> Default for AnnotationGroup<T> {
    fn default() -> Self {
        Self::new(None, None)
    }
}
