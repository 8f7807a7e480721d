//! Call-queue renderer.

use cf_core::{FlowGraph, is_person_name, resolve_final_target};

pub(crate) fn render(graph: &FlowGraph) -> String {
    let name = graph
        .nodes
        .iter()
        .map(|node| node.label.as_str())
        .find(|label| label.contains("Call Queue"))
        .unwrap_or("Call Queue");
    let mut md = vec![format!("# 📞 {name}")];

    push_overflow(&mut md, graph);
    push_labeled_section(&mut md, graph, "Routing Method", "## 🧭 Routing Method");
    push_labeled_section(&mut md, graph, "Timeout", "## ⏱ Timeout");
    push_labeled_section(&mut md, graph, "Music On Hold", "## ⚙️ Queue Settings");
    push_agent_list(&mut md, graph);
    push_result_logic(&mut md, graph);

    md.join("\n") + "\n"
}

/// Overflow is keyed off the first "Active Calls?" check node. The Yes
/// branch is followed through fall-through continuations to the node
/// routing actually lands on; the No branch keeps ringing the queue.
fn push_overflow(md: &mut Vec<String>, graph: &FlowGraph) {
    let Some(check) = graph
        .nodes
        .iter()
        .find(|node| node.label.contains("Active Calls?"))
    else {
        return;
    };

    md.push(String::new());
    md.push("## 🔁 Overflow Condition".to_string());
    md.push(format!("- **Check**: {}", check.label));

    let outgoing = graph.outgoing(&check.id);
    if let Some(yes) = outgoing.iter().find(|edge| edge.label == "Yes") {
        let target = resolve_final_target(graph, &yes.to);
        md.push(format!("- **Yes** → {}", display_label(graph, &target)));
    }
    if outgoing.iter().any(|edge| edge.label == "No") {
        md.push("- **No** → Routing continues".to_string());
    }
}

fn push_labeled_section(md: &mut Vec<String>, graph: &FlowGraph, keyword: &str, heading: &str) {
    let Some(label) = graph
        .nodes
        .iter()
        .map(|node| node.label.as_str())
        .find(|label| label.contains(keyword))
    else {
        return;
    };
    md.push(String::new());
    md.push(heading.to_string());
    md.push(format!("- {label}"));
}

fn push_agent_list(md: &mut Vec<String>, graph: &FlowGraph) {
    let Some(list_type) = graph
        .nodes
        .iter()
        .map(|node| node.label.as_str())
        .find(|label| label.contains("Agent List Type"))
    else {
        return;
    };

    md.push(String::new());
    md.push("## 👥 Agent List".to_string());
    md.push(format!("- {list_type}"));
    for node in &graph.nodes {
        if is_person_name(&node.label) && !node.label.contains("Voicemail") {
            md.push(format!("  - {}", node.label));
        }
    }
}

fn push_result_logic(md: &mut Vec<String>, graph: &FlowGraph) {
    md.push(String::new());
    md.push("## 🔄 Agent Result Logic".to_string());
    let has_label = |needle: &str| graph.nodes.iter().any(|node| node.label.contains(needle));

    if has_label("Agent Answered?") {
        md.push("- If agent answers → Call connected".to_string());
        md.push("- If not answered → Timeout transfer to voicemail".to_string());
    }
    if has_label("Agent Available?") {
        md.push("- If no agent available → Transfer to voicemail".to_string());
    }
}

fn display_label<'a>(graph: &'a FlowGraph, id: &'a str) -> &'a str {
    let label = graph.label(id);
    if label.is_empty() { id } else { label }
}
