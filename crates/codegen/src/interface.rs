//! Interface table building: one TypeScript object-type body per
//! element (or for the global common interface).
//!
//! Attribute and event names are emitted in lexicographic order, which
//! the `BTreeMap`-backed tables provide directly, so output is stable
//! regardless of source ordering.

use crate::error::CodegenError;
use crate::values::evaluate;
use dombind_vocab::InterfaceEntries;

/// Build the `{ ... }` type body for one interface's attributes and
/// events.
///
/// Attributes become optional properties typed via value-spec
/// evaluation; events become optional `on<name>` handler properties
/// parameterized by the host interface and the event's own interface.
/// An attribute whose name starts with `on` is fatal: it would be
/// indistinguishable from a synthesized event-handler property.
pub fn build_interface_body(
    entries: &InterfaceEntries,
    host_interface: &str,
) -> Result<String, CodegenError> {
    let mut body = String::from("{\n");

    for (name, attr) in &entries.attributes {
        if name.starts_with("on") {
            return Err(CodegenError::EventPrefixedAttribute(name.clone()));
        }
        body.push_str(&doc_comment(&attr.description, &attr.ref_));
        body.push_str(&format!(
            "  \"{}\"?: {};\n\n",
            name,
            evaluate(&attr.values)?
        ));
    }

    for (name, event) in &entries.events {
        body.push_str(&doc_comment(&event.description, &event.ref_));
        body.push_str(&format!(
            "  \"on{}\"?: EventHandler<{}, {}>;\n\n",
            name, host_interface, event.interface
        ));
    }

    body.push('}');
    Ok(body)
}

fn doc_comment(description: &str, ref_: &str) -> String {
    format!("  /** {}\n  *\n  * @see {}\n  */\n", description, ref_)
}
