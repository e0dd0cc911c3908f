//! Error type for code generation. All variants are fatal: the
//! generation pass aborts and no partial output is written.

use std::fmt;

/// Error type for code generation operations.
#[derive(Debug, Clone)]
pub enum CodegenError {
    /// The schema tree is invalid or missing required fields.
    InvalidVocabulary(String),
    /// The evaluator met a typed leaf with an unrecognized kind.
    UnknownValueType(String),
    /// An attribute name begins with the reserved `on` prefix, which
    /// would collide with synthesized event-handler properties.
    EventPrefixedAttribute(String),
    /// An I/O error occurred while writing the generated file.
    IoError(String),
}

impl fmt::Display for CodegenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CodegenError::InvalidVocabulary(msg) => write!(f, "invalid vocabulary: {}", msg),
            CodegenError::UnknownValueType(kind) => write!(f, "unknown value type: {}", kind),
            CodegenError::EventPrefixedAttribute(name) => write!(
                f,
                "attribute '{}' starts with the reserved 'on' prefix",
                name
            ),
            CodegenError::IoError(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl std::error::Error for CodegenError {}

impl From<dombind_vocab::VocabError> for CodegenError {
    fn from(e: dombind_vocab::VocabError) -> Self {
        CodegenError::InvalidVocabulary(e.to_string())
    }
}
