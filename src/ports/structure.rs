//! Structural smoke test for graph documents.
//!
//! A cheap pre-parse check: the required `"nodes"` and `"edges"` substrings
//! are present and every opening brace/bracket is matched by a closer. It
//! does not verify token syntax, brace-vs-bracket pairing, or per-object
//! fields; use [`JsonGraphCodec::decode`](crate::ports::JsonGraphCodec) for
//! the real thing.

use thiserror::Error;

/// First structural violation found in a document.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StructureViolation {
    #[error("missing required \"nodes\" field")]
    MissingNodes,
    #[error("missing required \"edges\" field")]
    MissingEdges,
    #[error("unmatched closing brace or bracket at byte offset {offset}")]
    UnmatchedCloser { offset: usize },
    #[error("{open} unclosed brace(s) or bracket(s) at end of document")]
    Unclosed { open: usize },
}

/// Scan a document and report the first structural violation, if any.
pub fn check_structure(text: &str) -> Result<(), StructureViolation> {
    if !text.contains("\"nodes\"") {
        return Err(StructureViolation::MissingNodes);
    }
    if !text.contains("\"edges\"") {
        return Err(StructureViolation::MissingEdges);
    }

    let mut open: usize = 0;
    for (offset, byte) in text.bytes().enumerate() {
        match byte {
            b'{' | b'[' => open += 1,
            b'}' | b']' => {
                if open == 0 {
                    return Err(StructureViolation::UnmatchedCloser { offset });
                }
                open -= 1;
            }
            _ => {}
        }
    }
    if open != 0 {
        return Err(StructureViolation::Unclosed { open });
    }
    Ok(())
}

/// Boolean convenience wrapper over [`check_structure`].
pub fn is_valid_structure(text: &str) -> bool {
    check_structure(text).is_ok()
}
