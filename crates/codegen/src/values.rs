//! Value-spec evaluation: collapse the recursive value grammar into a
//! minimal TypeScript type expression.
//!
//! The traversal is a breadth-first work list over the spec tree, so
//! member order in the source spec decides member order in the output.
//! The result is a union of primitive kinds (`"boolean"`, `"number"`),
//! quoted literal tokens, and optionally a trailing `({} & string)`
//! widening marker when a wildcard coexists with enumerated members.

use crate::error::CodegenError;
use dombind_vocab::ValueSpec;
use std::collections::VecDeque;

/// Marker appended when an open string coexists with enumerated
/// members. Editors still offer the literals as completions while any
/// string remains assignable.
const OPEN_STRING: &str = "({} & string)";

/// Reduce a value spec to its type expression.
///
/// Pure: equal specs always produce the identical string. Ordering is
/// a stable contract -- kinds before literals, each in first-seen
/// order, wildcard marker last.
pub fn evaluate(spec: &ValueSpec) -> Result<String, CodegenError> {
    let mut use_wildcard = false;
    let mut kinds: Vec<&'static str> = Vec::new();
    let mut literals: Vec<String> = Vec::new();

    let mut todo: VecDeque<&ValueSpec> = VecDeque::new();
    todo.push_back(spec);

    while let Some(current) = todo.pop_front() {
        match current {
            ValueSpec::Literal(token) => {
                if token.starts_with('/') && token.ends_with('/') {
                    // A pattern constraint degrades to an open string;
                    // regexes are not translated into refined types.
                    use_wildcard = true;
                } else {
                    let quoted = format!("\"{}\"", token);
                    if !literals.contains(&quoted) {
                        literals.push(quoted);
                    }
                }
            }
            ValueSpec::Union(members) => {
                for m in members {
                    todo.push_back(m);
                }
            }
            ValueSpec::Conditional { values, .. } => {
                // The condition is not type-discriminating; only the
                // guarded values contribute.
                todo.push_back(values.as_ref());
            }
            ValueSpec::Typed(typed) => match typed.kind.as_str() {
                "string" => use_wildcard = true,
                "boolean" => {
                    if !kinds.contains(&"boolean") {
                        kinds.push("boolean");
                    }
                }
                "integer" | "real" => {
                    if !kinds.contains(&"number") {
                        kinds.push("number");
                    }
                }
                // Lists always widen to a general string; member types
                // are not inlined.
                "list" => use_wildcard = true,
                other => {
                    return Err(CodegenError::UnknownValueType(other.to_string()));
                }
            },
        }
    }

    let mut members: Vec<String> = kinds.iter().map(|k| k.to_string()).collect();
    members.extend(literals);

    if use_wildcard {
        if members.is_empty() {
            return Ok("string".to_string());
        }
        members.push(OPEN_STRING.to_string());
    }

    Ok(members.join(" | "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use dombind_vocab::TypedValue;

    fn typed(kind: &str) -> ValueSpec {
        ValueSpec::Typed(TypedValue {
            kind: kind.to_string(),
            ..TypedValue::default()
        })
    }

    fn lit(token: &str) -> ValueSpec {
        ValueSpec::Literal(token.to_string())
    }

    #[test]
    fn test_kinds_before_literals_first_seen_order() {
        let spec = ValueSpec::Union(vec![lit("a"), typed("boolean"), typed("integer"), lit("b")]);
        assert_eq!(evaluate(&spec).unwrap(), "boolean | number | \"a\" | \"b\"");
    }

    #[test]
    fn test_wildcard_only_collapses_to_string() {
        assert_eq!(evaluate(&typed("string")).unwrap(), "string");
    }

    #[test]
    fn test_wildcard_plus_literal_appends_marker() {
        let spec = ValueSpec::Union(vec![lit("x"), typed("string")]);
        assert_eq!(evaluate(&spec).unwrap(), "\"x\" | ({} & string)");
    }

    #[test]
    fn test_list_widens_to_string() {
        let spec = ValueSpec::Typed(TypedValue {
            kind: "list".to_string(),
            separator: Some(" ".to_string()),
            member_values: Some(Box::new(lit("a"))),
            ..TypedValue::default()
        });
        assert_eq!(evaluate(&spec).unwrap(), "string");
    }

    #[test]
    fn test_regex_literal_widens_to_string() {
        assert_eq!(evaluate(&lit("/[0-9]+/")).unwrap(), "string");
    }

    #[test]
    fn test_conditional_condition_is_erased() {
        let spec = ValueSpec::Conditional {
            when: "type=submit".to_string(),
            values: Box::new(lit("yes")),
        };
        assert_eq!(evaluate(&spec).unwrap(), "\"yes\"");
    }

    #[test]
    fn test_duplicates_collapse() {
        let spec = ValueSpec::Union(vec![lit("a"), lit("a"), typed("integer"), typed("real")]);
        assert_eq!(evaluate(&spec).unwrap(), "number | \"a\"");
    }

    #[test]
    fn test_nested_union_breadth_first_order() {
        let spec = ValueSpec::Union(vec![
            ValueSpec::Union(vec![lit("inner")]),
            lit("outer"),
        ]);
        // Breadth-first: the sibling literal is reached before the
        // nested union's member.
        assert_eq!(evaluate(&spec).unwrap(), "\"outer\" | \"inner\"");
    }

    #[test]
    fn test_unknown_kind_is_fatal() {
        let err = evaluate(&typed("quaternion")).unwrap_err();
        assert!(matches!(err, CodegenError::UnknownValueType(k) if k == "quaternion"));
    }

    #[test]
    fn test_evaluation_is_idempotent() {
        let spec = ValueSpec::Union(vec![typed("boolean"), lit("a"), typed("string")]);
        let first = evaluate(&spec).unwrap();
        let second = evaluate(&spec).unwrap();
        assert_eq!(first, second);
    }
}
