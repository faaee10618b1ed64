use crate::tree::{Node, Tree};
use pulldown_cmark::{CodeBlockKind, Event, Options, Parser, Tag, TagEnd};
use std::ops::Range;

/// Extract the structural skeleton (headings, code blocks, lists) of a
/// markdown document. Best-effort: never fails, empty input yields an
/// empty tree.
pub fn extract(text: &str) -> Tree {
    let lines = LineTable::new(text);
    let mut builder = TreeBuilder::default();
    let mut events = Parser::new_ext(text, Options::empty()).into_offset_iter();

    // Depth of open block containers we are not capturing (blockquotes,
    // paragraphs, ...). Only top-level blocks become nodes, matching the
    // flat token stream of the original tool.
    let mut depth = 0usize;

    while let Some((event, range)) = events.next() {
        match event {
            Event::Start(Tag::Heading { level, .. }) if depth == 0 => {
                let title = heading_text(&mut events);
                builder.open_heading(level as usize, title, lines.line_of(range.start));
            }
            Event::Start(Tag::CodeBlock(kind)) if depth == 0 => {
                let language = language_tag(&kind);
                skip_code_block(&mut events);
                builder.push(Node::CodeBlock {
                    language,
                    line: lines.line_of(range.start),
                });
            }
            Event::Start(Tag::List(start)) if depth == 0 => {
                let item_count = count_items(&mut events);
                builder.push(Node::List {
                    ordered: start.is_some(),
                    item_count,
                    line: lines.line_of(range.start),
                });
            }
            Event::Start(_) => depth += 1,
            Event::End(_) => depth = depth.saturating_sub(1),
            _ => {}
        }
    }

    builder.finish()
}

/// Byte offsets of line starts, for mapping token spans back to
/// 1-indexed source lines.
struct LineTable {
    starts: Vec<usize>,
}

impl LineTable {
    fn new(text: &str) -> Self {
        let mut starts = vec![0];
        for (i, b) in text.bytes().enumerate() {
            if b == b'\n' {
                starts.push(i + 1);
            }
        }
        LineTable { starts }
    }

    fn line_of(&self, offset: usize) -> usize {
        self.starts.partition_point(|&s| s <= offset)
    }
}

/// Open-heading stack. Headings stay on the stack while their section is
/// open and are attached to their parent when closed.
#[derive(Default)]
struct TreeBuilder {
    root: Vec<Node>,
    open: Vec<(usize, Node)>,
}

impl TreeBuilder {
    fn open_heading(&mut self, level: usize, text: String, line: usize) {
        // A heading closes same-level and deeper siblings.
        self.close_down_to(level);
        self.open.push((
            level,
            Node::Heading {
                level,
                text,
                line,
                children: Vec::new(),
            },
        ));
    }

    fn push(&mut self, node: Node) {
        match self.open.last_mut() {
            Some((_, Node::Heading { children, .. })) => children.push(node),
            _ => self.root.push(node),
        }
    }

    fn close_down_to(&mut self, level: usize) {
        while matches!(self.open.last(), Some((l, _)) if *l >= level) {
            if let Some((_, node)) = self.open.pop() {
                self.push(node);
            }
        }
    }

    fn finish(mut self) -> Tree {
        while let Some((_, node)) = self.open.pop() {
            self.push(node);
        }
        Tree { nodes: self.root }
    }
}

/// Concatenate the inline text fragments of a heading, consuming events
/// up to and including the heading end tag.
fn heading_text<'a>(events: &mut impl Iterator<Item = (Event<'a>, Range<usize>)>) -> String {
    let mut text = String::new();
    for (event, _) in events.by_ref() {
        match event {
            Event::End(TagEnd::Heading(_)) => break,
            Event::Text(t) | Event::Code(t) => text.push_str(&t),
            Event::SoftBreak | Event::HardBreak => text.push(' '),
            _ => {}
        }
    }
    text.trim().to_string()
}

fn skip_code_block<'a>(events: &mut impl Iterator<Item = (Event<'a>, Range<usize>)>) {
    for (event, _) in events.by_ref() {
        if matches!(event, Event::End(TagEnd::CodeBlock)) {
            break;
        }
    }
}

/// Count the immediate items of a list, consuming events up to and
/// including the list end tag. Items of nested sublists are not counted.
fn count_items<'a>(events: &mut impl Iterator<Item = (Event<'a>, Range<usize>)>) -> usize {
    let mut count = 0;
    let mut nested = 0usize;
    for (event, _) in events.by_ref() {
        match event {
            Event::Start(Tag::Item) if nested == 0 => count += 1,
            Event::Start(Tag::List(_)) => nested += 1,
            Event::End(TagEnd::List(_)) => {
                if nested == 0 {
                    break;
                }
                nested -= 1;
            }
            _ => {}
        }
    }
    count
}

fn language_tag(kind: &CodeBlockKind<'_>) -> String {
    match kind {
        CodeBlockKind::Fenced(info) if !info.trim().is_empty() => info.trim().to_string(),
        _ => "text".to_string(),
    }
}
