use crate::tree::{Node, Tree};

/// Render the tree as indented text, one node per line, depth-first
/// pre-order. Two spaces of indent per nesting depth.
pub fn render(tree: &Tree) -> Vec<String> {
    let mut out = Vec::new();
    for node in &tree.nodes {
        render_node(node, 0, &mut out);
    }
    out
}

fn render_node(node: &Node, depth: usize, out: &mut Vec<String>) {
    let indent = "  ".repeat(depth);
    match node {
        Node::Heading {
            level,
            text,
            line,
            children,
        } => {
            out.push(format!("{}- h{}: {} @ {}", indent, level, text, line));
            for child in children {
                render_node(child, depth + 1, out);
            }
        }
        Node::CodeBlock { language, line } => {
            out.push(format!("{}- code: {} @ {}", indent, language, line));
        }
        Node::List {
            ordered,
            item_count,
            line,
        } => {
            let style = if *ordered { "ordered" } else { "unordered" };
            out.push(format!(
                "{}- list: {} ({} items) @ {}",
                indent, style, item_count, line
            ));
        }
    }
}
