#![forbid(unsafe_code)]

//! Line-oriented tokenizer for the call-flow diagram mini-language.
//!
//! Every non-blank line is offered to a chumsky statement parser (edge
//! first, then shaped node declaration). Lines matching neither are
//! checked against the bare 36-character identifier form, and everything
//! else becomes a diagnostic. The tokenizer never fails: malformed input
//! degrades to diagnostics, not errors.

mod builder;
mod statement;

use chumsky::Parser as _;
use serde::Serialize;

use cf_core::{FlowGraph, looks_like_opaque_id};

use crate::builder::GraphBuilder;
use crate::statement::{FlowStmt, NodeToken, statement_parser};

/// Parsed diagram: the immutable graph plus one diagnostic string per
/// unrecognized source line.
#[derive(Debug, Clone, Serialize)]
pub struct ParseResult {
    pub graph: FlowGraph,
    pub diagnostics: Vec<String>,
}

/// Parse diagram text into a [`FlowGraph`]. Total: any input produces a
/// result, with unrecognized lines surfaced in `diagnostics`.
#[must_use]
pub fn parse(input: &str) -> ParseResult {
    let mut builder = GraphBuilder::new();

    for (index, line) in input.lines().enumerate() {
        let line_number = index + 1;
        let trimmed = line.trim();
        if trimmed.is_empty() || is_comment(trimmed) || is_flowchart_header(trimmed) {
            continue;
        }

        let (stmt, errors) = statement_parser().parse(trimmed).into_output_errors();
        if errors.is_empty()
            && let Some(stmt) = stmt
        {
            lower_statement(stmt, &mut builder);
            continue;
        }

        // Cross-reference placeholder: a line that is nothing but a
        // 36-character platform identifier.
        if looks_like_opaque_id(trimmed) {
            builder.reference(trimmed);
            continue;
        }

        builder.add_diagnostic(format!("Line {line_number}: unrecognized statement: {trimmed}"));
    }

    let (graph, diagnostics) = builder.finish();
    ParseResult { graph, diagnostics }
}

fn lower_statement(stmt: FlowStmt, builder: &mut GraphBuilder) {
    match stmt {
        FlowStmt::Node(token) => lower_node(&token, builder),
        FlowStmt::Edge { from, label, to } => {
            // A single line can declare node shapes and an edge at once;
            // both extractions land.
            lower_node(&from, builder);
            lower_node(&to, builder);
            let label = label.as_deref().map(normalize_label).unwrap_or_default();
            builder.push_edge(&from.id, label, &to.id);
        }
    }
}

fn lower_node(token: &NodeToken, builder: &mut GraphBuilder) {
    match &token.decl {
        Some((text, shape)) => builder.declare(&token.id, normalize_label(text), *shape),
        None => builder.reference(&token.id),
    }
}

/// Collapse embedded line-break markers to a single space, then strip
/// wrapping quotes and surrounding whitespace.
fn normalize_label(raw: &str) -> String {
    let text = raw
        .replace("<br />", " ")
        .replace("<br/>", " ")
        .replace("<br>", " ");
    text.trim()
        .trim_matches('"')
        .trim_matches('\'')
        .trim_matches('`')
        .trim()
        .to_string()
}

fn is_comment(line: &str) -> bool {
    line.starts_with("%%")
}

fn is_flowchart_header(line: &str) -> bool {
    let lower = line.to_ascii_lowercase();
    lower.starts_with("flowchart") || lower == "graph" || lower.starts_with("graph ")
}
