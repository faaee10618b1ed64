use crate::tree::{Node, Tree};
use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Stats {
    pub total_h1: usize,
    pub total_h2: usize,
    pub total_h3: usize,
    pub total_h4: usize,
    pub total_h5: usize,
    pub total_code_blocks: usize,
    pub total_lists: usize,
}

/// Count headings per level plus code blocks and lists across the whole
/// tree, nested children included.
pub fn collect(tree: &Tree) -> Stats {
    let mut stats = Stats::default();
    count(&tree.nodes, &mut stats);
    stats
}

fn count(nodes: &[Node], stats: &mut Stats) {
    for node in nodes {
        match node {
            Node::Heading {
                level, children, ..
            } => {
                match level {
                    1 => stats.total_h1 += 1,
                    2 => stats.total_h2 += 1,
                    3 => stats.total_h3 += 1,
                    4 => stats.total_h4 += 1,
                    5 => stats.total_h5 += 1,
                    _ => {}
                }
                count(children, stats);
            }
            Node::CodeBlock { .. } => stats.total_code_blocks += 1,
            Node::List { .. } => stats.total_lists += 1,
        }
    }
}

impl Stats {
    /// One `name: value` line per counter, in fixed order.
    pub fn lines(&self) -> Vec<String> {
        vec![
            format!("total_h1: {}", self.total_h1),
            format!("total_h2: {}", self.total_h2),
            format!("total_h3: {}", self.total_h3),
            format!("total_h4: {}", self.total_h4),
            format!("total_h5: {}", self.total_h5),
            format!("total_code_blocks: {}", self.total_code_blocks),
            format!("total_lists: {}", self.total_lists),
        ]
    }
}
