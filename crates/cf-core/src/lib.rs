#![forbid(unsafe_code)]

//! Core call-flow graph model: node/edge tables, label heuristics,
//! resolution policies, and destination classification.

mod classify;
mod graph;
mod labels;
mod resolve;

pub use classify::{Category, classify_label};
pub use graph::{FlowEdge, FlowGraph, FlowNode, NodeShape};
pub use labels::{
    is_keypress_label, is_person_name, is_terminal_label, looks_like_menu,
    looks_like_opaque_id, looks_like_phone_number,
};
pub use resolve::{MAX_CONTINUATION_HOPS, resolve_final_label, resolve_final_target};

use serde::Serialize;

/// Which renderer a diagram was routed to.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Default)]
pub enum FlowKind {
    /// Keypress-driven auto-attendant menu.
    MenuTree,
    /// Call-queue configuration (agents, overflow, timeout).
    Queue,
    /// Neither archetype recognized; a placeholder document is produced.
    #[default]
    Unsupported,
}

impl FlowKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::MenuTree => "menu-tree",
            Self::Queue => "queue",
            Self::Unsupported => "unsupported",
        }
    }
}
