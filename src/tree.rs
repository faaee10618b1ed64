use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Node {
    Heading {
        level: usize,
        text: String,
        line: usize,
        children: Vec<Node>,
    },
    CodeBlock {
        language: String,
        line: usize,
    },
    List {
        ordered: bool,
        item_count: usize,
        line: usize,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Tree {
    pub nodes: Vec<Node>,
}

impl Tree {
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
