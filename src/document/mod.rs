//! Document model: an ordered sequence of block nodes with page-break markers

mod block;
mod text;

pub use block::{BlockKind, ContentNode};
pub use text::{flatten_text, plain_text, PLAIN_TEXT_SEPARATOR, WORD_SEPARATOR};

use std::hash::{Hash, Hasher};

use rustc_hash::FxHasher;
use serde_json::{Map, Value};

use crate::error::{Error, Result};
use block::kind_name;

/// Type tag of the distinguished page-break node
pub const PAGE_BREAK_TAG: &str = "pageBreak";

/// A top-level node: content, or an atomic page-break marker
#[derive(Debug, Clone, PartialEq, Hash)]
pub enum Node {
    Content(ContentNode),
    Break,
}

impl Node {
    /// Check if this is a page break
    pub fn is_break(&self) -> bool {
        matches!(self, Node::Break)
    }

    /// The content node, if this is not a break
    pub fn as_content(&self) -> Option<&ContentNode> {
        match self {
            Node::Content(node) => Some(node),
            Node::Break => None,
        }
    }

    fn to_value(&self) -> Value {
        match self {
            Node::Content(node) => node.to_value(),
            Node::Break => {
                let mut obj = Map::new();
                obj.insert("type".to_string(), Value::from(PAGE_BREAK_TAG));
                Value::Object(obj)
            }
        }
    }
}

impl From<ContentNode> for Node {
    fn from(node: ContentNode) -> Self {
        Node::Content(node)
    }
}

/// The document snapshot handed over by the editing surface
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Document {
    nodes: Vec<Node>,
    /// Monotonic version counter, bumped by mutations made through this type
    version: u64,
}

impl Document {
    /// Create a new empty document
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a document from a node sequence
    pub fn from_nodes(nodes: impl IntoIterator<Item = Node>) -> Self {
        Self {
            nodes: nodes.into_iter().collect(),
            version: 0,
        }
    }

    /// Parse the editor's JSON document string
    pub fn from_json(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_value(&value)
    }

    /// Parse a `{ "content": [...] }` record.
    ///
    /// Fails if the payload is not a traversable node sequence.
    pub fn from_value(value: &Value) -> Result<Self> {
        let content = value
            .get("content")
            .ok_or_else(|| Error::MalformedDocument("missing content field".to_string()))?;
        let items = content.as_array().ok_or_else(|| {
            Error::MalformedDocument(format!("content must be an array, found {}", kind_name(content)))
        })?;

        let nodes = items
            .iter()
            .enumerate()
            .map(|(index, item)| parse_top_level(item, index))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { nodes, version: 0 })
    }

    /// Parse, never failing.
    ///
    /// A traversable `content` array keeps every top-level break; a record
    /// whose sub-tree is malformed becomes an opaque leaf and scalars are
    /// dropped. A missing or non-array `content` degrades to a break-free
    /// document.
    pub fn from_value_lossy(value: &Value) -> Self {
        match value.get("content") {
            Some(Value::Array(items)) => {
                let nodes = items
                    .iter()
                    .enumerate()
                    .filter_map(|(index, item)| parse_top_level_lossy(item, index))
                    .collect();
                Self { nodes, version: 0 }
            }
            content => {
                log::warn!(
                    "Document content is {}, treating as a single page",
                    content.map_or("missing", kind_name)
                );
                Self::salvage(content)
            }
        }
    }

    fn salvage(content: Option<&Value>) -> Self {
        let nodes = match content {
            Some(single @ Value::Object(_)) if !is_break_record(single) => {
                parse_top_level_lossy(single, 0).into_iter().collect()
            }
            _ => Vec::new(),
        };

        Self { nodes, version: 0 }
    }

    /// Serialize to the editor's JSON document shape
    pub fn to_value(&self) -> Value {
        let mut obj = Map::new();
        obj.insert("type".to_string(), Value::from("doc"));
        obj.insert(
            "content".to_string(),
            Value::Array(self.nodes.iter().map(Node::to_value).collect()),
        );
        Value::Object(obj)
    }

    /// Get the document version
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Top-level nodes in order
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Number of top-level nodes
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if the document has no nodes
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of page-break markers
    pub fn break_count(&self) -> usize {
        self.nodes.iter().filter(|n| n.is_break()).count()
    }

    /// Content nodes in order, breaks skipped
    pub fn content_nodes(&self) -> impl Iterator<Item = &ContentNode> + '_ {
        self.nodes.iter().filter_map(Node::as_content)
    }

    /// Append a node
    pub fn push(&mut self, node: impl Into<Node>) {
        self.nodes.push(node.into());
        self.version += 1;
    }

    /// Insert one page break at top-level index `at` (clamped to the end)
    pub fn insert_page_break(&mut self, at: usize) {
        let at = at.min(self.nodes.len());
        self.nodes.insert(at, Node::Break);
        self.version += 1;
    }

    /// Remove the node at `index`, if any
    pub fn remove(&mut self, index: usize) -> Option<Node> {
        if index >= self.nodes.len() {
            return None;
        }
        self.version += 1;
        Some(self.nodes.remove(index))
    }

    /// Structural hash of the node sequence, ignoring `version`
    pub fn fingerprint(&self) -> u64 {
        let mut hasher = FxHasher::default();
        self.nodes.hash(&mut hasher);
        hasher.finish()
    }
}

fn is_break_record(value: &Value) -> bool {
    value.get("type").and_then(Value::as_str) == Some(PAGE_BREAK_TAG)
}

fn parse_top_level(item: &Value, index: usize) -> Result<Node> {
    if !item.is_object() {
        return Err(Error::MalformedNode {
            index,
            reason: format!("expected node object, found {}", kind_name(item)),
        });
    }
    if is_break_record(item) {
        return Ok(Node::Break);
    }
    ContentNode::from_value(item, &format!("content[{}]", index)).map(Node::Content)
}

fn parse_top_level_lossy(item: &Value, index: usize) -> Option<Node> {
    match parse_top_level(item, index) {
        Ok(node) => Some(node),
        Err(err) => {
            log::warn!("Keeping malformed node as an opaque leaf: {}", err);
            shallow_node(item).map(Node::Content)
        }
    }
}

/// Keep an object record whose sub-tree is malformed as an opaque leaf
fn shallow_node(item: &Value) -> Option<ContentNode> {
    let obj = item.as_object()?;
    let attrs = obj.get("attrs").filter(|v| !v.is_null()).cloned();
    let tag = obj.get("type").and_then(Value::as_str).unwrap_or("");
    Some(ContentNode {
        kind: BlockKind::from_tag(tag, attrs.as_ref()),
        attrs,
        ..ContentNode::default()
    })
}
