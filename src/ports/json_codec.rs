//! Graph JSON Codec
//!
//! Serializes a FunctionGraph to the fixed-layout JSON interchange document
//! consumed by the visualization frontend, and parses such documents back
//! into graphs.

use crate::domain::graph::{FunctionGraph, FunctionNode};
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

/// Errors produced when reading or writing a graph document.
#[derive(Debug, Error)]
pub enum CodecError {
    /// Not a well-formed graph document. serde_json's message carries the
    /// line and column of the first offending token.
    #[error("malformed graph document: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

// Wire shape of the document. Field names follow the interchange format,
// not Rust convention; unknown or missing fields are a parse error.

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct NodeRecord {
    name: String,
    file: String,
    line: u32,
    #[serde(rename = "isStub")]
    is_stub: bool,
    #[serde(rename = "isMissing")]
    is_missing: bool,
    #[serde(rename = "isExternal")]
    is_external: bool,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct EdgeRecord {
    from: usize,
    to: usize,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct GraphDocument {
    nodes: Vec<NodeRecord>,
    edges: Vec<EdgeRecord>,
}

/// Escape a string for embedding in a graph document.
///
/// Only `"`, `\`, newline, carriage-return, and tab get their two-character
/// escape form; every other character, non-ASCII included, passes through
/// unchanged.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            _ => out.push(c),
        }
    }
    out
}

pub struct JsonGraphCodec;

impl JsonGraphCodec {
    /// Encode a graph as a pretty-printed JSON document.
    ///
    /// The layout is fixed: `nodes` then `edges`, fields in declaration
    /// order, two-space indentation per level, empty arrays collapsed to
    /// `[]`. Identical graphs produce byte-identical text. Never fails,
    /// even for graphs whose edge indices are out of range; encode does
    /// not validate cross-references.
    pub fn encode(graph: &FunctionGraph) -> String {
        let mut out = String::new();
        out.push_str("{\n");

        out.push_str("  \"nodes\": [");
        for (i, node) in graph.nodes.iter().enumerate() {
            if i > 0 {
                out.push(',');
            }
            out.push_str("\n    {\n");
            out.push_str(&format!("      \"name\": \"{}\",\n", escape(&node.name)));
            out.push_str(&format!("      \"file\": \"{}\",\n", escape(&node.file)));
            out.push_str(&format!("      \"line\": {},\n", node.line));
            out.push_str(&format!("      \"isStub\": {},\n", node.is_stub));
            out.push_str(&format!("      \"isMissing\": {},\n", node.is_missing));
            out.push_str(&format!("      \"isExternal\": {}\n", node.is_external));
            out.push_str("    }");
        }
        if !graph.nodes.is_empty() {
            out.push_str("\n  ");
        }
        out.push_str("],\n");

        out.push_str("  \"edges\": [");
        for (i, &(from, to)) in graph.edges.iter().enumerate() {
            if i > 0 {
                out.push(',');
            }
            out.push_str("\n    {\n");
            out.push_str(&format!("      \"from\": {},\n", from));
            out.push_str(&format!("      \"to\": {}\n", to));
            out.push_str("    }");
        }
        if !graph.edges.is_empty() {
            out.push_str("\n  ");
        }
        out.push_str("]\n}");

        out
    }

    /// Parse a graph document and reconstruct the graph: the inverse of
    /// [`encode`](Self::encode).
    ///
    /// Layout is not significant on the way in (whitespace, field order
    /// within an object, and standard JSON escapes are all accepted), but
    /// the shape is strict: both arrays present, every node with all six
    /// fields, no unknown fields anywhere. Malformed input is an error,
    /// never an empty graph.
    pub fn decode(text: &str) -> Result<FunctionGraph, CodecError> {
        let doc: GraphDocument = serde_json::from_str(text)?;

        let mut graph = FunctionGraph::new();
        for rec in doc.nodes {
            graph.add_node(FunctionNode {
                name: rec.name,
                file: rec.file,
                line: rec.line,
                is_stub: rec.is_stub,
                is_missing: rec.is_missing,
                is_external: rec.is_external,
            });
        }
        for rec in doc.edges {
            graph.add_edge(rec.from, rec.to);
        }

        debug!(
            nodes = graph.nodes.len(),
            edges = graph.edges.len(),
            "decoded graph document"
        );
        Ok(graph)
    }

    /// Encode a graph and write it to a file.
    pub fn export(graph: &FunctionGraph, path: &Path) -> Result<(), CodecError> {
        std::fs::write(path, Self::encode(graph))?;
        Ok(())
    }

    /// Read a file and decode it as a graph document.
    pub fn import(path: &Path) -> Result<FunctionGraph, CodecError> {
        let text = std::fs::read_to_string(path)?;
        Self::decode(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_node_graph() -> FunctionGraph {
        let mut graph = FunctionGraph::new();
        graph.add_node(FunctionNode::new("main", "src/main.rs", 10));
        let callee = FunctionNode {
            name: "helper".to_string(),
            file: "src/util.rs".to_string(),
            line: 42,
            is_stub: true,
            is_missing: false,
            is_external: true,
        };
        graph.add_node(callee);
        graph.add_edge(0, 1);
        graph
    }

    #[test]
    fn escape_replaces_all_five_specials() {
        assert_eq!(escape("a\"b"), "a\\\"b");
        assert_eq!(escape("a\\b"), "a\\\\b");
        assert_eq!(escape("a\nb\rc\td"), "a\\nb\\rc\\td");
    }

    #[test]
    fn escape_passes_other_characters_through() {
        assert_eq!(escape("héllo, 世界"), "héllo, 世界");
        assert_eq!(escape(""), "");
    }

    #[test]
    fn escape_grows_by_one_per_escaped_character() {
        let input = "x\"\\\n\r\ty";
        assert_eq!(escape(input).chars().count(), input.chars().count() + 5);
    }

    #[test]
    fn encode_fixed_layout() {
        let text = JsonGraphCodec::encode(&two_node_graph());
        let expected = concat!(
            "{\n",
            "  \"nodes\": [\n",
            "    {\n",
            "      \"name\": \"main\",\n",
            "      \"file\": \"src/main.rs\",\n",
            "      \"line\": 10,\n",
            "      \"isStub\": false,\n",
            "      \"isMissing\": false,\n",
            "      \"isExternal\": false\n",
            "    },\n",
            "    {\n",
            "      \"name\": \"helper\",\n",
            "      \"file\": \"src/util.rs\",\n",
            "      \"line\": 42,\n",
            "      \"isStub\": true,\n",
            "      \"isMissing\": false,\n",
            "      \"isExternal\": true\n",
            "    }\n",
            "  ],\n",
            "  \"edges\": [\n",
            "    {\n",
            "      \"from\": 0,\n",
            "      \"to\": 1\n",
            "    }\n",
            "  ]\n",
            "}",
        );
        assert_eq!(text, expected);
    }

    #[test]
    fn encode_empty_graph() {
        let text = JsonGraphCodec::encode(&FunctionGraph::new());
        assert_eq!(text, "{\n  \"nodes\": [],\n  \"edges\": []\n}");
    }

    #[test]
    fn encode_is_deterministic() {
        let graph = two_node_graph();
        assert_eq!(JsonGraphCodec::encode(&graph), JsonGraphCodec::encode(&graph));
    }

    #[test]
    fn encode_does_not_check_edge_bounds() {
        let mut graph = FunctionGraph::new();
        graph.add_node(FunctionNode::new("only", "a.rs", 1));
        graph.add_edge(0, 99);
        let text = JsonGraphCodec::encode(&graph);
        assert!(text.contains("\"to\": 99"));
    }

    #[test]
    fn encode_escapes_name_and_file() {
        let mut graph = FunctionGraph::new();
        graph.add_node(FunctionNode::new("He said \"hi\"\n", "a\\b", 0));
        let text = JsonGraphCodec::encode(&graph);
        assert!(text.contains("\"name\": \"He said \\\"hi\\\"\\n\""));
        assert!(text.contains("\"file\": \"a\\\\b\""));
    }

    #[test]
    fn decode_inverts_encode() {
        let graph = two_node_graph();
        let decoded = JsonGraphCodec::decode(&JsonGraphCodec::encode(&graph)).unwrap();
        assert_eq!(decoded, graph);
    }

    #[test]
    fn decode_accepts_compact_layout_and_reordered_fields() {
        let text = r#"{"edges":[{"to":0,"from":0}],"nodes":[{"line":3,"name":"f","file":"f.rs","isExternal":false,"isStub":false,"isMissing":true}]}"#;
        let graph = JsonGraphCodec::decode(text).unwrap();
        assert_eq!(graph.nodes.len(), 1);
        assert!(graph.nodes[0].is_missing);
        assert_eq!(graph.edges, vec![(0, 0)]);
    }

    #[test]
    fn decode_rejects_malformed_input() {
        assert!(JsonGraphCodec::decode("").is_err());
        assert!(JsonGraphCodec::decode("not json").is_err());
        assert!(JsonGraphCodec::decode("{\"nodes\": []}").is_err()); // missing edges
        assert!(JsonGraphCodec::decode("{\"nodes\": [], \"edges\": [], \"extra\": 1}").is_err());
    }

    #[test]
    fn decode_rejects_wrong_field_types() {
        let text = r#"{"nodes":[{"name":"f","file":"f.rs","line":"three","isStub":false,"isMissing":false,"isExternal":false}],"edges":[]}"#;
        assert!(JsonGraphCodec::decode(text).is_err());
    }

    #[test]
    fn decode_rejects_incomplete_node() {
        let text = r#"{"nodes":[{"name":"f","file":"f.rs","line":3}],"edges":[]}"#;
        assert!(JsonGraphCodec::decode(text).is_err());
    }

    #[test]
    fn decode_error_names_the_location() {
        let err = JsonGraphCodec::decode("{\n  \"nodes\": [,]\n}").unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("line 2"), "unexpected message: {}", msg);
    }
}
