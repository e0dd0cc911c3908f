//! Typed structs representing the vocabulary schema.
//!
//! These types cover everything the code generator consumes. Attribute
//! and event maps use `BTreeMap` so iteration is lexicographic by name,
//! which the generator's determinism contract relies on. Elements keep
//! their declaration order in a `Vec`.

use serde::Deserialize;
use std::collections::BTreeMap;

/// Version metadata for a vocabulary release. Fields absent from the
/// schema default to empty strings.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Version {
    /// Reference URL for the vocabulary revision.
    #[serde(rename = "ref", default)]
    pub ref_: String,
    /// Publication date of the revision.
    #[serde(default)]
    pub pubdate: String,
}

/// A complete element vocabulary: namespace, version, and all elements
/// in declaration order.
#[derive(Debug, Clone, PartialEq)]
pub struct Vocabulary {
    pub namespace: String,
    pub version: Version,
    pub elements: Vec<Element>,
}

/// One element definition from the vocabulary.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub name: String,
    pub description: String,
    pub ref_: String,
    /// Host interface the element's factory constructs (e.g. a DOM
    /// interface name).
    pub interface: String,
    pub entries: InterfaceEntries,
}

/// The attribute and event tables of one interface, keyed by name.
///
/// Also used standalone for the common interface the extractor factors
/// out of every element.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InterfaceEntries {
    pub attributes: BTreeMap<String, AttributeDef>,
    pub events: BTreeMap<String, EventDef>,
}

impl InterfaceEntries {
    /// True when neither table has entries.
    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty() && self.events.is_empty()
    }
}

/// One attribute definition: documentation plus the value grammar.
#[derive(Debug, Clone, PartialEq)]
pub struct AttributeDef {
    pub description: String,
    pub ref_: String,
    pub values: ValueSpec,
}

/// One event definition. Events have no value grammar; their type is
/// always a handler parameterized by the host and event interfaces.
#[derive(Debug, Clone, PartialEq)]
pub struct EventDef {
    pub description: String,
    pub ref_: String,
    pub interface: String,
}

/// The recursive value-specification grammar for attribute values.
///
/// `PartialEq` here is genuine deep structural equality; the common
/// interface extractor depends on that when deciding whether two
/// elements share an attribute verbatim.
#[derive(Debug, Clone, PartialEq)]
pub enum ValueSpec {
    /// An exact string token, or a regex pattern when delimited by
    /// `/.../`.
    Literal(String),
    /// A typed leaf: `string`, `boolean`, `integer`, `real`, or `list`.
    Typed(TypedValue),
    /// A guarded sub-spec. The condition is never evaluated by the
    /// generator; only `values` contributes to type inference.
    Conditional {
        when: String,
        values: Box<ValueSpec>,
    },
    /// An ordered choice between any of the above.
    Union(Vec<ValueSpec>),
}

/// A typed leaf of the value grammar.
///
/// `kind` stays an open string rather than a closed enum: the evaluator
/// dispatches on it and rejects unknown kinds itself, so a vocabulary
/// using a newer kind fails at generation time with a precise error
/// instead of at deserialization.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TypedValue {
    pub kind: String,
    /// `integer` only: whether negative values are permitted.
    pub signed: Option<bool>,
    /// `list` only.
    pub separator: Option<String>,
    pub ordered: Option<bool>,
    pub unique: Option<bool>,
    pub member_values: Option<Box<ValueSpec>>,
}
