//! Menu-tree (auto-attendant) renderer.

use cf_core::{Category, FlowGraph, classify_label, looks_like_menu, resolve_final_label};

pub(crate) fn render(graph: &FlowGraph) -> String {
    let mut md = vec!["# ☎️ Auto-Attendant Call Flow".to_string()];

    push_entry_points(&mut md, graph);
    push_conditional_branches(&mut md, graph);
    push_menu_options(&mut md, graph);
    push_message_destinations(&mut md, graph);

    md.join("\n") + "\n"
}

fn push_entry_points(md: &mut Vec<String>, graph: &FlowGraph) {
    let entries: Vec<&str> = graph
        .nodes
        .iter()
        .map(|node| node.label.as_str())
        .filter(|label| label.contains("Incoming Call"))
        .collect();
    if entries.is_empty() {
        return;
    }
    md.push(String::new());
    md.push("## 📞 Entry Points".to_string());
    for label in entries {
        md.push(format!("- {label}"));
    }
}

/// Every node with two or more labeled outgoing edges is a decision point.
/// Branches that resolve nowhere are omitted; a branch landing on another
/// menu gets that sub-menu's own labeled branches one level deep.
fn push_conditional_branches(md: &mut Vec<String>, graph: &FlowGraph) {
    let mut section = Vec::new();

    for node in &graph.nodes {
        let labeled: Vec<_> = graph
            .outgoing(&node.id)
            .into_iter()
            .filter(|edge| !edge.label.is_empty())
            .collect();
        if labeled.len() < 2 {
            continue;
        }

        let heading = if node.label.is_empty() {
            node.id.as_str()
        } else {
            node.label.as_str()
        };
        section.push(format!("### {heading}"));

        for edge in labeled {
            let Some(resolved) = resolve_final_label(graph, &edge.to) else {
                continue;
            };
            let category = classify_label(&resolved);
            section.push(format!(
                "- **{}** → {} _({})_",
                edge.label,
                resolved,
                category.as_str()
            ));

            if looks_like_menu(graph.label(&edge.to)) {
                push_sub_menu(&mut section, graph, &edge.to);
            }
        }
    }

    if !section.is_empty() {
        md.push(String::new());
        md.push("## 🔀 Conditional Branches".to_string());
        md.append(&mut section);
    }
}

fn push_sub_menu(section: &mut Vec<String>, graph: &FlowGraph, menu_id: &str) {
    for edge in graph.outgoing(menu_id) {
        if edge.label.is_empty() {
            continue;
        }
        let Some(resolved) = resolve_final_label(graph, &edge.to) else {
            continue;
        };
        let category = classify_label(&resolved);
        section.push(format!(
            "  - **{}** → {} _({})_",
            edge.label,
            resolved,
            category.as_str()
        ));
    }
}

/// Flat fallback: every menu-looking node with its keypress destinations.
fn push_menu_options(md: &mut Vec<String>, graph: &FlowGraph) {
    let mut section = Vec::new();

    for node in &graph.nodes {
        if !looks_like_menu(&node.label) {
            continue;
        }

        let mut keyed: Vec<(&str, String)> = Vec::new();
        for edge in graph.outgoing(&node.id) {
            if edge.label.is_empty() {
                continue;
            }
            if let Some(resolved) = resolve_final_label(graph, &edge.to) {
                keyed.push((edge.label.as_str(), resolved));
            }
        }
        if keyed.is_empty() {
            continue;
        }

        sort_keypresses(&mut keyed);
        section.push(format!("### {}", node.label));
        for (key, destination) in keyed {
            let category = classify_label(&destination);
            section.push(format!(
                "- Press `{key}` → {destination} _({})_",
                category.as_str()
            ));
        }
    }

    if !section.is_empty() {
        md.push(String::new());
        md.push("## 🔢 Menu Options".to_string());
        md.append(&mut section);
    }
}

/// Ascending numeric order when every key is numeric; lexicographic
/// otherwise (mixed keypads with `*`/`#` keys).
fn sort_keypresses(keyed: &mut [(&str, String)]) {
    let all_numeric = keyed.iter().all(|(key, _)| key.parse::<u64>().is_ok());
    if all_numeric {
        keyed.sort_by_key(|(key, _)| key.parse::<u64>().unwrap_or(u64::MAX));
    } else {
        keyed.sort_by(|a, b| a.0.cmp(b.0));
    }
}

fn push_message_destinations(md: &mut Vec<String>, graph: &FlowGraph) {
    let destinations: Vec<&str> = graph
        .nodes
        .iter()
        .map(|node| node.label.as_str())
        .filter(|label| {
            matches!(
                classify_label(label),
                Category::Voicemail | Category::Greeting
            )
        })
        .collect();
    if destinations.is_empty() {
        return;
    }
    md.push(String::new());
    md.push("## 📬 Voicemail & Greetings".to_string());
    for label in destinations {
        md.push(format!("- {label}"));
    }
}
