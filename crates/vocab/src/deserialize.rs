//! Deserialization from an in-memory schema tree into typed structs.
//!
//! The main entry point is [`from_value`], which takes a
//! `&serde_json::Value` and produces a [`Vocabulary`]. YAML input works
//! the same way: the caller parses it into a `serde_json::Value` first,
//! so this module only ever sees one tree shape.

use crate::types::*;
use serde::Deserialize;
use std::fmt;

/// Errors during vocabulary deserialization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VocabError {
    /// The schema is missing a required top-level field.
    MissingField { field: String },
    /// The version metadata is not a mapping of the expected shape.
    InvalidVersion(String),
    /// An element definition is missing a required field or is
    /// otherwise malformed.
    ElementError { name: String, message: String },
    /// A value spec node matches none of the recognized shapes
    /// (string / sequence / conditional / typed leaf).
    InvalidValueSpec(String),
}

impl fmt::Display for VocabError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VocabError::MissingField { field } => {
                write!(f, "vocabulary missing required field: '{}'", field)
            }
            VocabError::InvalidVersion(msg) => {
                write!(f, "invalid version metadata: {}", msg)
            }
            VocabError::ElementError { name, message } => {
                write!(f, "element '{}': {}", name, message)
            }
            VocabError::InvalidValueSpec(msg) => {
                write!(f, "invalid value spec: {}", msg)
            }
        }
    }
}

impl std::error::Error for VocabError {}

/// Deserialize a vocabulary schema tree into typed structs.
///
/// Elements are kept in the order they appear in the schema mapping;
/// attribute and event tables are re-keyed into `BTreeMap`s.
pub fn from_value(schema: &serde_json::Value) -> Result<Vocabulary, VocabError> {
    let namespace = schema
        .get("namespace")
        .and_then(|v| v.as_str())
        .ok_or_else(|| VocabError::MissingField {
            field: "namespace".to_string(),
        })?
        .to_string();

    let version_obj = schema
        .get("version")
        .ok_or_else(|| VocabError::MissingField {
            field: "version".to_string(),
        })?;
    let version =
        Version::deserialize(version_obj).map_err(|e| VocabError::InvalidVersion(e.to_string()))?;

    let elements_obj = schema
        .get("elements")
        .and_then(|e| e.as_object())
        .ok_or_else(|| VocabError::MissingField {
            field: "elements".to_string(),
        })?;

    let mut elements = Vec::with_capacity(elements_obj.len());
    for (name, def) in elements_obj {
        if name.is_empty() {
            return Err(VocabError::ElementError {
                name: name.clone(),
                message: "element name must be non-empty".to_string(),
            });
        }
        elements.push(parse_element(name, def)?);
    }

    Ok(Vocabulary {
        namespace,
        version,
        elements,
    })
}

// ── Parsing helpers ─────────────────────────────────────────────────

fn opt_str(obj: &serde_json::Value, field: &str) -> String {
    obj.get(field)
        .and_then(|v| v.as_str())
        .unwrap_or("")
        .to_string()
}

fn parse_element(name: &str, obj: &serde_json::Value) -> Result<Element, VocabError> {
    let interface = obj
        .get("interface")
        .and_then(|v| v.as_str())
        .ok_or_else(|| VocabError::ElementError {
            name: name.to_string(),
            message: "missing 'interface' field".to_string(),
        })?
        .to_string();

    let mut entries = InterfaceEntries::default();

    if let Some(attrs) = obj.get("attributes").and_then(|a| a.as_object()) {
        for (attr_name, attr_def) in attrs {
            entries
                .attributes
                .insert(attr_name.clone(), parse_attribute(name, attr_name, attr_def)?);
        }
    }

    if let Some(events) = obj.get("events").and_then(|e| e.as_object()) {
        for (event_name, event_def) in events {
            entries
                .events
                .insert(event_name.clone(), parse_event(name, event_name, event_def)?);
        }
    }

    Ok(Element {
        name: name.to_string(),
        description: opt_str(obj, "description"),
        ref_: opt_str(obj, "ref"),
        interface,
        entries,
    })
}

fn parse_attribute(
    elem: &str,
    attr: &str,
    obj: &serde_json::Value,
) -> Result<AttributeDef, VocabError> {
    let values_val = obj.get("values").ok_or_else(|| VocabError::ElementError {
        name: elem.to_string(),
        message: format!("attribute '{}' missing 'values' field", attr),
    })?;

    Ok(AttributeDef {
        description: opt_str(obj, "description"),
        ref_: opt_str(obj, "ref"),
        values: parse_value_spec(values_val)?,
    })
}

fn parse_event(elem: &str, event: &str, obj: &serde_json::Value) -> Result<EventDef, VocabError> {
    let interface = obj
        .get("interface")
        .and_then(|v| v.as_str())
        .ok_or_else(|| VocabError::ElementError {
            name: elem.to_string(),
            message: format!("event '{}' missing 'interface' field", event),
        })?
        .to_string();

    Ok(EventDef {
        description: opt_str(obj, "description"),
        ref_: opt_str(obj, "ref"),
        interface,
    })
}

/// Parse one node of the recursive value grammar.
///
/// Shape dispatch: a string is a literal, a sequence is a union, an
/// object with `when` is a conditional, an object with `type` is a
/// typed leaf. Anything else is fatal.
fn parse_value_spec(v: &serde_json::Value) -> Result<ValueSpec, VocabError> {
    match v {
        serde_json::Value::String(s) => Ok(ValueSpec::Literal(s.clone())),
        serde_json::Value::Array(members) => {
            let mut parsed = Vec::with_capacity(members.len());
            for m in members {
                parsed.push(parse_value_spec(m)?);
            }
            Ok(ValueSpec::Union(parsed))
        }
        serde_json::Value::Object(obj) => {
            if let Some(when) = obj.get("when").and_then(|w| w.as_str()) {
                let values = obj.get("values").ok_or_else(|| {
                    VocabError::InvalidValueSpec(format!(
                        "conditional (when: {}) missing 'values'",
                        when
                    ))
                })?;
                return Ok(ValueSpec::Conditional {
                    when: when.to_string(),
                    values: Box::new(parse_value_spec(values)?),
                });
            }
            if let Some(kind) = obj.get("type").and_then(|t| t.as_str()) {
                let member_values = match obj.get("member-values") {
                    Some(mv) => Some(Box::new(parse_value_spec(mv)?)),
                    None => None,
                };
                return Ok(ValueSpec::Typed(TypedValue {
                    kind: kind.to_string(),
                    signed: obj.get("signed").and_then(|s| s.as_bool()),
                    separator: obj
                        .get("separator")
                        .and_then(|s| s.as_str())
                        .map(|s| s.to_string()),
                    ordered: obj.get("ordered").and_then(|o| o.as_bool()),
                    unique: obj.get("unique").and_then(|u| u.as_bool()),
                    member_values,
                }));
            }
            Err(VocabError::InvalidValueSpec(format!(
                "object with neither 'when' nor 'type': {}",
                serde_json::Value::Object(obj.clone())
            )))
        }
        other => Err(VocabError::InvalidValueSpec(format!(
            "unrecognized node: {}",
            other
        ))),
    }
}
