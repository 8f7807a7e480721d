#![forbid(unsafe_code)]

//! Markdown renderers for the two supported call-flow archetypes, plus
//! the flow-type detector that routes a graph to one of them.

mod detect;
mod menu;
mod queue;

pub use detect::detect_flow_kind;

use cf_core::{FlowGraph, FlowKind};

/// Placeholder document emitted when a diagram matches neither archetype.
/// This is a defined terminal outcome, not an error.
pub const UNSUPPORTED_PLACEHOLDER: &str = "# 🚧 Unsupported call-flow structure.\n";

/// A rendered summary document plus the renderer that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedDocument {
    pub kind: FlowKind,
    pub markdown: String,
}

/// Detect the flow archetype and render the matching document.
#[must_use]
pub fn render_document(graph: &FlowGraph) -> RenderedDocument {
    let kind = detect_flow_kind(graph);
    let markdown = match kind {
        FlowKind::MenuTree => menu::render(graph),
        FlowKind::Queue => queue::render(graph),
        FlowKind::Unsupported => UNSUPPORTED_PLACEHOLDER.to_string(),
    };
    RenderedDocument { kind, markdown }
}
