//! dombind-codegen: TypeScript binding generation for an element
//! vocabulary.
//!
//! The generator is a single synchronous pass: deserialize the schema
//! tree, factor out the interface entries every element shares, then
//! emit one declarations module containing a global attribute type,
//! per-element attribute types, lookup tables, and one factory binding
//! per element. The vocabulary is mutated exactly once (by the
//! extractor) and treated as immutable afterwards.
//!
//! # Public API
//!
//! - [`generate_typescript()`] -- full pipeline, writes the output file
//! - [`emit_module()`] -- pure emitter over an already-extracted vocabulary
//! - [`extract_common()`] -- common-interface extraction
//! - [`evaluate()`] -- value-spec to type-expression inference
//! - [`build_interface_body()`] -- one interface's attribute/event table

pub mod common;
pub mod emit;
pub mod error;
pub mod interface;
pub mod values;

pub use common::extract_common;
pub use emit::{emit_module, generate_typescript, TypeScriptConfig};
pub use error::CodegenError;
pub use interface::build_interface_body;
pub use values::evaluate;
