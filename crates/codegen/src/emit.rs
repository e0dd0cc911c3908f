//! Module emission: assemble the full TypeScript declarations document
//! and write it to disk.
//!
//! The emitted text is syntactically valid but unformatted; formatting
//! is the consumer's concern. Declaration order is fixed: global
//! attribute type, per-element types, the two lookup tables, the
//! generic `create` wrapper, then one factory per element in
//! vocabulary declaration order.

use crate::common::extract_common;
use crate::error::CodegenError;
use crate::interface::build_interface_body;
use dombind_vocab::{Element, InterfaceEntries, Vocabulary};
use std::fs;
use std::path::PathBuf;

/// Configuration for TypeScript generation.
#[derive(Debug, Clone)]
pub struct TypeScriptConfig {
    /// Path of the module to write.
    pub out_file: PathBuf,
    /// Module specifier for the runtime import (`EventHandler`,
    /// `create`).
    pub runtime_import: String,
}

/// ECMAScript reserved words. An element whose name collides with one
/// gets a `_` suffix on its factory binding.
const RESERVED_WORDS: &[&str] = &[
    "break", "case", "catch", "class", "const", "continue", "debugger", "default", "delete", "do",
    "else", "enum", "export", "extends", "false", "finally", "for", "function", "if", "import",
    "in", "instanceof", "new", "null", "return", "super", "switch", "this", "throw", "true",
    "try", "typeof", "var", "void", "while", "with",
];

/// Suffix a name that collides with a reserved word.
fn dereserve(name: &str) -> String {
    if RESERVED_WORDS.contains(&name) {
        format!("{}_", name)
    } else {
        name.to_string()
    }
}

/// The type naming an element's attributes: its own named type when it
/// has element-specific entries, otherwise the global type
/// instantiated with its host interface.
fn attribs_type_name(elem: &Element) -> String {
    if elem.entries.is_empty() {
        format!("GlobalAttributes<{}>", elem.interface)
    } else {
        format!("{}Attribs", elem.name)
    }
}

/// Emit the full declarations module. Pure: the vocabulary must
/// already have had its common interface extracted.
pub fn emit_module(
    vocab: &Vocabulary,
    common: &InterfaceEntries,
    runtime_import: &str,
) -> Result<String, CodegenError> {
    let mut out = String::new();

    out.push_str(&format!(
        "// Bindings for {} ({}, published {})\n\n",
        vocab.namespace, vocab.version.ref_, vocab.version.pubdate
    ));
    out.push_str(&format!(
        "import {{ EventHandler, create as domCreate }} from '{}';\n\n",
        runtime_import
    ));
    out.push_str(&format!(
        "export const domNamespace = \"{}\";\n\n",
        vocab.namespace
    ));

    out.push_str(&format!(
        "type GlobalAttributes<IFace extends Element> = {};\n\n",
        build_interface_body(common, "IFace")?
    ));

    for elem in &vocab.elements {
        if elem.entries.is_empty() {
            continue;
        }
        out.push_str(&format!("/** Attributes for the {} element */\n", elem.name));
        out.push_str(&format!(
            "export type {}Attribs = GlobalAttributes<{}> & {};\n\n",
            elem.name,
            elem.interface,
            build_interface_body(&elem.entries, &elem.interface)?
        ));
    }

    out.push_str("export type ElementAttribsMap = {\n");
    for elem in &vocab.elements {
        out.push_str(&format!("  \"{}\": {};\n", elem.name, attribs_type_name(elem)));
    }
    out.push_str("};\n\n");

    out.push_str("export type ElementInterfaceMap = {\n");
    for elem in &vocab.elements {
        out.push_str(&format!("  \"{}\": {};\n", elem.name, elem.interface));
    }
    out.push_str("};\n\n");

    out.push_str("export type Child = string | Element;\n\n");

    out.push_str(
        "export const create = <Name extends keyof ElementInterfaceMap>(\n  \
         elemName: Name,\n  \
         attribs: ElementAttribsMap[Name],\n  \
         ...childs: Child[]): ElementInterfaceMap[Name] => \
         domCreate(domNamespace, elemName, attribs, ...childs);\n\n",
    );

    for elem in &vocab.elements {
        out.push_str(&format!(
            "/** {}\n* @see {}\n*/\n",
            elem.description, elem.ref_
        ));
        out.push_str(&format!(
            "export const {} = (attribs: ElementAttribsMap['{}'], ...childs: Child[]) => \
             create('{}', attribs, ...childs);\n\n",
            dereserve(&elem.name),
            elem.name,
            elem.name
        ));
    }

    Ok(out)
}

/// Run the full generation pipeline: deserialize the schema tree,
/// extract the common interface, emit the module, and write it.
///
/// All-or-nothing: any error before the final write leaves no partial
/// output on disk. Returns the path of the written file.
pub fn generate_typescript(
    schema: &serde_json::Value,
    config: &TypeScriptConfig,
) -> Result<PathBuf, CodegenError> {
    let mut vocab = dombind_vocab::from_value(schema)?;
    let common = extract_common(&mut vocab);
    let module = emit_module(&vocab, &common, &config.runtime_import)?;

    if let Some(parent) = config.out_file.parent() {
        fs::create_dir_all(parent).map_err(|e| CodegenError::IoError(e.to_string()))?;
    }
    fs::write(&config.out_file, module).map_err(|e| CodegenError::IoError(e.to_string()))?;

    Ok(config.out_file.clone())
}
