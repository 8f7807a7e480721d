use rustc_hash::FxHashMap;
use serde::Serialize;

/// Shape a node was declared with in the diagram source.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash, Default)]
pub enum NodeShape {
    /// `id[text]`
    #[default]
    Rect,
    /// `id([text])`
    Rounded,
    /// `id((text))`
    DoubleCircle,
    /// `id{text}`
    Diamond,
    /// `id>text]`
    Flag,
    /// `userXxx(text)`, the extension-user shape in the export dialect.
    User,
}

impl NodeShape {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Rect => "rect",
            Self::Rounded => "rounded",
            Self::DoubleCircle => "double-circle",
            Self::Diamond => "diamond",
            Self::Flag => "flag",
            Self::User => "user",
        }
    }
}

/// A labeled vertex in the call-flow graph.
///
/// The label is already normalized: line-break markers collapsed to a
/// single space, surrounding whitespace trimmed. Empty means the node was
/// declared (or referenced) without any text.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct FlowNode {
    pub id: String,
    pub label: String,
    pub shape: NodeShape,
}

/// A directed, optionally labeled connection between two node identifiers.
///
/// Endpoints are raw identifiers; they are not required to reference
/// declared nodes.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct FlowEdge {
    pub from: String,
    pub label: String,
    pub to: String,
}

/// Node table plus edge list for one diagram. Built once, immutable after.
#[derive(Debug, Clone, Serialize)]
pub struct FlowGraph {
    /// Nodes in declaration order.
    pub nodes: Vec<FlowNode>,
    /// Edges in declaration order.
    pub edges: Vec<FlowEdge>,
    #[serde(skip)]
    node_index: FxHashMap<String, usize>,
    #[serde(skip)]
    adjacency: FxHashMap<String, Vec<usize>>,
}

impl FlowGraph {
    #[must_use]
    pub fn new(nodes: Vec<FlowNode>, edges: Vec<FlowEdge>) -> Self {
        let mut node_index = FxHashMap::default();
        for (index, node) in nodes.iter().enumerate() {
            node_index.insert(node.id.clone(), index);
        }

        let mut adjacency: FxHashMap<String, Vec<usize>> = FxHashMap::default();
        for (index, edge) in edges.iter().enumerate() {
            adjacency.entry(edge.from.clone()).or_default().push(index);
        }

        Self {
            nodes,
            edges,
            node_index,
            adjacency,
        }
    }

    #[must_use]
    pub fn node(&self, id: &str) -> Option<&FlowNode> {
        self.node_index.get(id).map(|&index| &self.nodes[index])
    }

    /// Label of `id`, falling back to the identifier text itself when the
    /// node was never declared: unknown but still nameable.
    #[must_use]
    pub fn label<'a>(&'a self, id: &'a str) -> &'a str {
        match self.node(id) {
            Some(node) => &node.label,
            None => id,
        }
    }

    /// Outgoing edges of `id` in declaration order; empty if none.
    #[must_use]
    pub fn outgoing(&self, id: &str) -> Vec<&FlowEdge> {
        self.adjacency
            .get(id)
            .map(|indices| indices.iter().map(|&index| &self.edges[index]).collect())
            .unwrap_or_default()
    }

    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}
