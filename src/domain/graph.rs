// Call graph structures for callmap.
// Nodes are functions/symbols; edges are caller -> callee relations.

/// One function or symbol in the analyzed codebase.
/// A node has no identity of its own; it is referenced by its position
/// in the graph's node sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionNode {
    pub name: String,
    pub file: String, // source path as recorded by the analyzer
    pub line: u32,
    pub is_stub: bool,
    pub is_missing: bool,
    pub is_external: bool,
}

impl FunctionNode {
    pub fn new(name: impl Into<String>, file: impl Into<String>, line: u32) -> Self {
        Self {
            name: name.into(),
            file: file.into(),
            line,
            is_stub: false,
            is_missing: false,
            is_external: false,
        }
    }
}

/// The call graph itself: an ordered node sequence (index = implicit
/// 0-based node id, stable for the graph's lifetime) plus ordered
/// (from, to) index pairs.
///
/// Edge indices are not bounds-checked here; keeping them in range is
/// the builder's responsibility.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FunctionGraph {
    pub nodes: Vec<FunctionNode>,
    pub edges: Vec<(usize, usize)>,
}

impl FunctionGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a node and return its index.
    pub fn add_node(&mut self, node: FunctionNode) -> usize {
        self.nodes.push(node);
        self.nodes.len() - 1
    }

    pub fn add_edge(&mut self, from: usize, to: usize) {
        self.edges.push((from, to));
    }
}
