//! Pagination: splits a document into pages at explicit break markers

use serde_json::{Map, Value};

use crate::document::{ContentNode, Document, Node};

/// A contiguous run of content nodes between two breaks (or document edges)
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Page {
    nodes: Vec<ContentNode>,
}

impl Page {
    /// Create an empty page
    pub fn new() -> Self {
        Self::default()
    }

    /// Content nodes on this page
    pub fn nodes(&self) -> &[ContentNode] {
        &self.nodes
    }

    /// Number of top-level nodes on this page
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if the page holds no nodes
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Take the nodes out of the page
    pub fn into_nodes(self) -> Vec<ContentNode> {
        self.nodes
    }

    /// The page as a standalone editor document, ready to render
    pub fn to_value(&self) -> Value {
        let mut obj = Map::new();
        obj.insert("type".to_string(), Value::from("doc"));
        obj.insert(
            "content".to_string(),
            Value::Array(self.nodes.iter().map(ContentNode::to_value).collect()),
        );
        Value::Object(obj)
    }
}

/// Split a document into pages.
///
/// A document with `k` breaks yields exactly `k + 1` pages. Leading, trailing
/// and adjacent breaks produce empty pages; an empty document yields one
/// empty page.
pub fn split(document: &Document) -> Vec<Page> {
    let mut pages = Vec::with_capacity(document.break_count() + 1);
    let mut current = Page::new();

    for node in document.nodes() {
        match node {
            Node::Break => pages.push(std::mem::take(&mut current)),
            Node::Content(content) => current.nodes.push(content.clone()),
        }
    }
    pages.push(current);

    pages
}

/// Split the editor's JSON document. Never fails.
///
/// Every top-level break in a `content` array splits, even when sibling
/// records are malformed. A payload whose `content` is missing or not an
/// array becomes a single page.
pub fn split_value(value: &Value) -> Vec<Page> {
    split(&Document::from_value_lossy(value))
}

/// Split a JSON document string. Never fails; unparseable input yields one
/// empty page.
pub fn split_json(json: &str) -> Vec<Page> {
    match serde_json::from_str::<Value>(json) {
        Ok(value) => split_value(&value),
        Err(err) => {
            log::warn!("Document JSON did not parse, rendering one empty page: {}", err);
            vec![Page::new()]
        }
    }
}
