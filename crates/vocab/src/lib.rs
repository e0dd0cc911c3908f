//! dombind-vocab: vocabulary schema types and deserialization.
//!
//! A vocabulary describes one document-element system: the elements it
//! defines, their attributes (with a recursive value-specification
//! grammar), their events, and the host interface each element maps to.
//!
//! The main entry point is [`from_value`], which takes an in-memory
//! `serde_json::Value` tree (produced by whichever structured-data
//! reader loaded the schema file) and produces a typed [`Vocabulary`].
//! This crate never parses raw bytes itself.

pub mod deserialize;
pub mod types;

pub use deserialize::{from_value, VocabError};
pub use types::{
    AttributeDef, Element, EventDef, InterfaceEntries, TypedValue, ValueSpec, Version, Vocabulary,
};
