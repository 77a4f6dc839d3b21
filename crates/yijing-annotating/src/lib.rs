//! An annotation store for Yijing figures, persisted as compact JSON.
//!
//! A store holds free-form textual annotations keyed by typed targets:
//! plain strings, whole figures, line selections within a figure, or
//! the tagged [`Target`](yijing_model::Target) union. Groups of entries
//! live in one ordered channel per target type, and the whole store
//! serializes to a short-keyed JSON document that round-trips without
//! loss (the single documented exception being out-of-range line
//! targets, which demote to whole-figure targets on the way out).
//!
//! # Example
//!
//! ```
//! use yijing_annotating::AnnotationStore;
//!
//! let mut store = AnnotationStore::new();
//! store.title = Some("Sample Store".to_string());
//! let names = store.add_string_group(Some("Gua Name".to_string()), None);
//! names.add_entry("111".to_string(), "Qian");
//! names.add_entry("000".to_string(), "Kun");
//!
//! let json = store.to_json().unwrap();
//! let read_back = AnnotationStore::from_json(&json).unwrap();
//! assert_eq!(read_back, store);
//! ```
//!
//! Reading and writing the JSON text to a file or stream is the
//! caller's job; nothing in this crate performs I/O.

pub mod entry;
pub mod error;
pub mod group;
pub mod store;
mod wire;

pub use entry::AnnotationEntry;
pub use error::{Result, StoreError};
pub use group::AnnotationGroup;
pub use store::AnnotationStore;
pub use wire::TargetCodec;
