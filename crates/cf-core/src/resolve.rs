//! The two graph-resolution policies.
//!
//! Policy A ([`resolve_final_label`]) answers "what human-meaningful label
//! does this path ultimately lead to?" Policy B ([`resolve_final_target`])
//! answers "which node does this step fall through to when no explicit
//! keypress routes elsewhere?" Both are pure functions of the graph and a
//! starting identifier, deterministic for a given edge declaration order.

use rustc_hash::FxHashSet;

use crate::FlowGraph;
use crate::labels::{is_keypress_label, is_terminal_label};

/// Hop ceiling for continuation resolution. Keeps Policy B bounded on
/// cyclic or malformed graphs.
pub const MAX_CONTINUATION_HOPS: usize = 10;

/// Policy A: depth-first search, in edge declaration order, for the first
/// terminal label reachable from `start` (including `start`'s own label).
///
/// Undeclared identifiers resolve to their raw text, so a dangling edge
/// target still yields a name. Returns `None` when every path dead-ends or
/// cycles without reaching a terminal label.
#[must_use]
pub fn resolve_final_label(graph: &FlowGraph, start: &str) -> Option<String> {
    let mut visited = FxHashSet::default();
    first_terminal_label(graph, start, &mut visited)
}

fn first_terminal_label(
    graph: &FlowGraph,
    id: &str,
    visited: &mut FxHashSet<String>,
) -> Option<String> {
    // A node already visited in this walk contributes nothing; it is
    // skipped, not retried.
    if !visited.insert(id.to_string()) {
        return None;
    }

    let label = graph.label(id);
    if is_terminal_label(label) {
        return Some(label.to_string());
    }

    graph
        .outgoing(id)
        .into_iter()
        .find_map(|edge| first_terminal_label(graph, &edge.to, visited))
}

/// Policy B: from `start`, repeatedly follow the first outgoing edge whose
/// label is not a bare numeric keypress, stopping on a dead end, a repeated
/// node, or [`MAX_CONTINUATION_HOPS`]. Returns the node id reached; callers
/// look up its label separately.
#[must_use]
pub fn resolve_final_target(graph: &FlowGraph, start: &str) -> String {
    let mut current = start.to_string();
    let mut seen = FxHashSet::default();
    seen.insert(current.clone());

    for _ in 0..MAX_CONTINUATION_HOPS {
        let Some(next) = graph
            .outgoing(&current)
            .into_iter()
            .find(|edge| !is_keypress_label(&edge.label))
        else {
            break;
        };
        if !seen.insert(next.to.clone()) {
            break;
        }
        current = next.to.clone();
    }

    current
}

#[cfg(test)]
mod tests {
    use super::{MAX_CONTINUATION_HOPS, resolve_final_label, resolve_final_target};
    use crate::{FlowEdge, FlowGraph, FlowNode, NodeShape};

    fn node(id: &str, label: &str) -> FlowNode {
        FlowNode {
            id: id.to_string(),
            label: label.to_string(),
            shape: NodeShape::Rect,
        }
    }

    fn edge(from: &str, label: &str, to: &str) -> FlowEdge {
        FlowEdge {
            from: from.to_string(),
            label: label.to_string(),
            to: to.to_string(),
        }
    }

    #[test]
    fn own_terminal_label_wins_without_traversal() {
        let graph = FlowGraph::new(
            vec![node("a", "Sales Team"), node("b", "Elsewhere")],
            vec![edge("a", "", "b")],
        );
        assert_eq!(resolve_final_label(&graph, "a").as_deref(), Some("Sales Team"));
    }

    #[test]
    fn non_terminal_labels_are_walked_through() {
        // A phone-number label is not terminal; resolution continues into
        // the destination.
        let graph = FlowGraph::new(
            vec![node("a", "5551234567"), node("b", "Jane Doe")],
            vec![edge("a", "", "b")],
        );
        assert_eq!(resolve_final_label(&graph, "a").as_deref(), Some("Jane Doe"));
    }

    #[test]
    fn destinations_explored_in_declaration_order_depth_first() {
        let graph = FlowGraph::new(
            vec![
                node("start", ""),
                node("mid", ""),
                node("deep", "First Terminal"),
                node("late", "Second Terminal"),
            ],
            vec![
                edge("start", "", "mid"),
                edge("start", "", "late"),
                edge("mid", "", "deep"),
            ],
        );
        // Depth-first through `mid` reaches `deep` before the sibling
        // edge to `late` is considered.
        assert_eq!(
            resolve_final_label(&graph, "start").as_deref(),
            Some("First Terminal")
        );
    }

    #[test]
    fn dangling_reference_resolves_to_raw_identifier() {
        let graph = FlowGraph::new(vec![node("a", "")], vec![edge("a", "", "sales_team")]);
        assert_eq!(
            resolve_final_label(&graph, "a").as_deref(),
            Some("sales_team")
        );
    }

    #[test]
    fn cycle_without_terminal_label_returns_none() {
        let graph = FlowGraph::new(
            vec![node("a", ""), node("b", "")],
            vec![edge("a", "", "b"), edge("b", "", "a")],
        );
        assert_eq!(resolve_final_label(&graph, "a"), None);
    }

    #[test]
    fn dead_end_returns_none() {
        let graph = FlowGraph::new(vec![node("a", "")], vec![]);
        assert_eq!(resolve_final_label(&graph, "a"), None);
    }

    #[test]
    fn continuation_skips_numeric_keypress_branches() {
        let graph = FlowGraph::new(
            vec![],
            vec![
                edge("menu", "1", "sales"),
                edge("menu", "2", "support"),
                edge("menu", "", "timeout_vm"),
            ],
        );
        assert_eq!(resolve_final_target(&graph, "menu"), "timeout_vm");
    }

    #[test]
    fn continuation_halts_on_self_cycle() {
        let graph = FlowGraph::new(vec![], vec![edge("a", "", "a")]);
        assert_eq!(resolve_final_target(&graph, "a"), "a");
    }

    #[test]
    fn continuation_respects_hop_ceiling() {
        // A chain longer than the ceiling: stops after MAX hops.
        let mut edges = Vec::new();
        for i in 0..30 {
            edges.push(edge(&format!("n{i}"), "", &format!("n{}", i + 1)));
        }
        let graph = FlowGraph::new(vec![], edges);
        assert_eq!(
            resolve_final_target(&graph, "n0"),
            format!("n{MAX_CONTINUATION_HOPS}")
        );
    }

    #[test]
    fn continuation_stops_at_dead_end() {
        let graph = FlowGraph::new(vec![], vec![edge("a", "Yes", "b")]);
        assert_eq!(resolve_final_target(&graph, "a"), "b");
    }
}
