//! Chumsky parser for a single diagram statement (one trimmed line).
//!
//! Document structure (blank lines, comments, the `flowchart`/`graph`
//! header, and the bare-identifier cross-reference fallback) is handled
//! by the outer loop in [`crate::parse`].

use chumsky::prelude::*;

use cf_core::NodeShape;

/// One endpoint or standalone declaration. `decl` is `None` for a bare
/// identifier reference (no shape, no label text).
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct NodeToken {
    pub(crate) id: String,
    pub(crate) decl: Option<(String, NodeShape)>,
}

impl NodeToken {
    fn reference(id: &str) -> Self {
        Self {
            id: id.to_string(),
            decl: None,
        }
    }

    fn declared(id: &str, text: &str, shape: NodeShape) -> Self {
        Self {
            id: id.to_string(),
            decl: Some((text.to_string(), shape)),
        }
    }
}

/// Statement-level AST: a shaped node declaration, or a single edge whose
/// endpoints may themselves carry shape declarations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum FlowStmt {
    Node(NodeToken),
    Edge {
        from: NodeToken,
        label: Option<String>,
        to: NodeToken,
    },
}

/// Build the parser for one statement.
pub(crate) fn statement_parser<'a>()
-> impl Parser<'a, &'a str, FlowStmt, extra::Err<Rich<'a, char>>> {
    let ws_char = any().filter(|c: &char| *c == ' ' || *c == '\t');
    let inline_ws = ws_char.repeated().to(());

    let ident = any()
        .filter(|c: &char| c.is_ascii_alphanumeric() || matches!(*c, '_' | '-' | '.' | '/' | '+'))
        .repeated()
        .at_least(1)
        .to_slice();

    // -- Node shapes, multi-char delimiters before single-char ones --------
    let double_circle = just("((")
        .ignore_then(any().and_is(just("))").not()).repeated().to_slice())
        .then_ignore(just("))"))
        .map(|text: &str| (text, NodeShape::DoubleCircle));

    let rounded = just("([")
        .ignore_then(any().and_is(just("])").not()).repeated().to_slice())
        .then_ignore(just("])"))
        .map(|text: &str| (text, NodeShape::Rounded));

    let rect = just('[')
        .ignore_then(any().filter(|c: &char| *c != ']').repeated().to_slice())
        .then_ignore(just(']'))
        .map(|text: &str| (text, NodeShape::Rect));

    let diamond = just('{')
        .ignore_then(any().filter(|c: &char| *c != '}').repeated().to_slice())
        .then_ignore(just('}'))
        .map(|text: &str| (text, NodeShape::Diamond));

    let flag = just('>')
        .ignore_then(any().filter(|c: &char| *c != ']').repeated().to_slice())
        .then_ignore(just(']'))
        .map(|text: &str| (text, NodeShape::Flag));

    let user_parens = just('(')
        .ignore_then(any().filter(|c: &char| *c != ')').repeated().to_slice())
        .then_ignore(just(')'))
        .map(|text: &str| (text, NodeShape::User));

    let shape = choice((double_circle, rounded, rect, diamond, flag, user_parens));

    // Edge endpoints are lenient: plain parentheses on a non-`user`
    // identifier keep the identifier and drop the text, matching how the
    // export writes annotated edge targets.
    let endpoint = ident.then(shape.or_not()).map(
        |(id, shape_opt): (&str, Option<(&str, NodeShape)>)| match shape_opt {
            Some((_, NodeShape::User)) if !id.starts_with("user") => NodeToken::reference(id),
            Some((text, shape)) => NodeToken::declared(id, text, shape),
            None => NodeToken::reference(id),
        },
    );

    // Standalone declarations are strict: a shape is required, and the
    // `user` shape only exists for `user`-prefixed identifiers.
    let node_decl = ident.then(shape).try_map(
        |(id, (text, shape)): (&str, (&str, NodeShape)), span| {
            if shape == NodeShape::User && !id.starts_with("user") {
                return Err(Rich::custom(
                    span,
                    "plain parentheses are not a recognized node shape",
                ));
            }
            Ok(NodeToken::declared(id, text, shape))
        },
    );

    // -- Edge connectors ---------------------------------------------------
    let pipe_label = just('|')
        .ignore_then(any().filter(|c: &char| *c != '|').repeated().to_slice())
        .then_ignore(just('|'))
        .map(|text: &str| text.to_string());

    // `-->` / `--->` / `-.->` / `---`, label (if any) after the connector.
    let plain_arrow = choice((just("-.->"), just("--->"), just("-->"), just("---")))
        .ignore_then(inline_ws)
        .ignore_then(pipe_label.clone().or_not());

    // In-line labeled form: `--|label|-->`.
    let labeled_arrow = just("--")
        .ignore_then(pipe_label)
        .then_ignore(choice((just("-->"), just("->"))))
        .map(Some);

    let arrow = choice((plain_arrow, labeled_arrow));

    let edge = endpoint
        .clone()
        .then_ignore(inline_ws)
        .then(arrow)
        .then_ignore(inline_ws)
        .then(endpoint)
        .then_ignore(inline_ws)
        .then_ignore(end())
        .map(|((from, label), to)| FlowStmt::Edge { from, label, to });

    // Edge first; it is the more specific statement. Node declarations
    // match on the line prefix: a shaped node followed by trailing text
    // (an unrecognized edge chain, say) still registers the node.
    choice((
        edge,
        node_decl
            .then_ignore(any().repeated())
            .then_ignore(end())
            .map(FlowStmt::Node),
    ))
}
