use cf_core::{FlowEdge, FlowGraph, FlowNode, NodeShape};
use rustc_hash::FxHashMap;

/// Accumulates nodes and edges while lowering statements, then freezes
/// into a [`FlowGraph`].
pub(crate) struct GraphBuilder {
    nodes: Vec<FlowNode>,
    node_index: FxHashMap<String, usize>,
    edges: Vec<FlowEdge>,
    diagnostics: Vec<String>,
}

impl GraphBuilder {
    pub(crate) fn new() -> Self {
        Self {
            nodes: Vec::new(),
            node_index: FxHashMap::default(),
            edges: Vec::new(),
            diagnostics: Vec::new(),
        }
    }

    /// Shaped declaration: last write wins, so a node redeclared later in
    /// the source with a fuller label keeps the later text.
    pub(crate) fn declare(&mut self, id: &str, label: String, shape: NodeShape) {
        match self.node_index.get(id) {
            Some(&index) => {
                let node = &mut self.nodes[index];
                node.label = label;
                node.shape = shape;
            }
            None => {
                self.node_index.insert(id.to_string(), self.nodes.len());
                self.nodes.push(FlowNode {
                    id: id.to_string(),
                    label,
                    shape,
                });
            }
        }
    }

    /// Bare identifier reference: registers an empty-label placeholder but
    /// never clobbers an existing declaration.
    pub(crate) fn reference(&mut self, id: &str) {
        if !self.node_index.contains_key(id) {
            self.node_index.insert(id.to_string(), self.nodes.len());
            self.nodes.push(FlowNode {
                id: id.to_string(),
                label: String::new(),
                shape: NodeShape::default(),
            });
        }
    }

    pub(crate) fn push_edge(&mut self, from: &str, label: String, to: &str) {
        self.edges.push(FlowEdge {
            from: from.to_string(),
            label,
            to: to.to_string(),
        });
    }

    pub(crate) fn add_diagnostic(&mut self, diagnostic: String) {
        self.diagnostics.push(diagnostic);
    }

    pub(crate) fn finish(self) -> (FlowGraph, Vec<String>) {
        (FlowGraph::new(self.nodes, self.edges), self.diagnostics)
    }
}
