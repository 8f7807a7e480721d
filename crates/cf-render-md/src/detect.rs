use cf_core::{FlowGraph, FlowKind, looks_like_menu};

/// Decide which renderer applies. Menu vocabulary wins over queue
/// vocabulary; a diagram matching neither is unsupported.
#[must_use]
pub fn detect_flow_kind(graph: &FlowGraph) -> FlowKind {
    if graph.nodes.iter().any(|node| looks_like_menu(&node.label)) {
        return FlowKind::MenuTree;
    }

    let is_queue = graph.nodes.iter().any(|node| {
        let lower = node.label.to_ascii_lowercase();
        lower.contains("call queue") || lower.contains("agent")
    });
    if is_queue {
        FlowKind::Queue
    } else {
        FlowKind::Unsupported
    }
}
