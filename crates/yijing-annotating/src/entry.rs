//! A single annotation.

/// One annotation: a target and the text written about it.
///
/// Both fields are required at construction; an entry without a target
/// or content is unrepresentable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotationEntry<T> {
    /// What the annotation is about.
    pub target: T,
    /// The annotation text.
    pub content: String,
}

impl<T> AnnotationEntry<T> {
    /// Creates an entry from its two fields.
    pub fn new(target: T, content: impl Into<String>) -> Self {
        Self {
            target,
            content: content.into(),
        }
    }
}
