//! Block-level content nodes

use std::hash::{Hash, Hasher};

use serde_json::{Map, Value};

use crate::error::{Error, Result};

/// The kind of content node, keyed by the editor's `type` tag
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum BlockKind {
    /// Regular paragraph
    Paragraph,
    /// Heading with level (1-6)
    Heading { level: u8 },
    BulletList,
    OrderedList,
    ListItem,
    Blockquote,
    CodeBlock,
    Table,
    TableRow,
    TableHeader,
    TableCell,
    Image,
    HorizontalRule,
    /// Inline line break inside a textblock
    HardBreak,
    /// Inline text run
    Text,
    /// Any tag this crate has no special handling for, kept verbatim.
    /// An empty tag means the node carried no `type` at all.
    Other(String),
}

impl Default for BlockKind {
    fn default() -> Self {
        BlockKind::Paragraph
    }
}

impl BlockKind {
    /// Map an editor type tag to a kind. Heading level comes from `attrs.level`.
    pub fn from_tag(tag: &str, attrs: Option<&Value>) -> Self {
        match tag {
            "paragraph" => BlockKind::Paragraph,
            "heading" => {
                let level = attrs
                    .and_then(|a| a.get("level"))
                    .and_then(Value::as_u64)
                    .unwrap_or(1);
                BlockKind::Heading {
                    level: level.clamp(1, 6) as u8,
                }
            }
            "bulletList" => BlockKind::BulletList,
            "orderedList" => BlockKind::OrderedList,
            "listItem" => BlockKind::ListItem,
            "blockquote" => BlockKind::Blockquote,
            "codeBlock" => BlockKind::CodeBlock,
            "table" => BlockKind::Table,
            "tableRow" => BlockKind::TableRow,
            "tableHeader" => BlockKind::TableHeader,
            "tableCell" => BlockKind::TableCell,
            "image" => BlockKind::Image,
            "horizontalRule" => BlockKind::HorizontalRule,
            "hardBreak" => BlockKind::HardBreak,
            "text" => BlockKind::Text,
            other => BlockKind::Other(other.to_string()),
        }
    }

    /// The editor type tag for this kind
    pub fn tag(&self) -> &str {
        match self {
            BlockKind::Paragraph => "paragraph",
            BlockKind::Heading { .. } => "heading",
            BlockKind::BulletList => "bulletList",
            BlockKind::OrderedList => "orderedList",
            BlockKind::ListItem => "listItem",
            BlockKind::Blockquote => "blockquote",
            BlockKind::CodeBlock => "codeBlock",
            BlockKind::Table => "table",
            BlockKind::TableRow => "tableRow",
            BlockKind::TableHeader => "tableHeader",
            BlockKind::TableCell => "tableCell",
            BlockKind::Image => "image",
            BlockKind::HorizontalRule => "horizontalRule",
            BlockKind::HardBreak => "hardBreak",
            BlockKind::Text => "text",
            BlockKind::Other(tag) => tag,
        }
    }

    /// Check if this is a heading
    pub fn is_heading(&self) -> bool {
        matches!(self, BlockKind::Heading { .. })
    }

    /// Check if this kind is an inline node
    pub fn is_inline(&self) -> bool {
        matches!(self, BlockKind::Text | BlockKind::HardBreak)
    }
}

/// A non-break node: a type tag plus an arbitrary nested sub-tree.
///
/// `attrs` and `marks` are opaque to pagination and are carried through so a
/// page can be handed back to the renderer unchanged.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ContentNode {
    pub kind: BlockKind,
    pub text: Option<String>,
    pub attrs: Option<Value>,
    pub marks: Option<Value>,
    pub children: Vec<ContentNode>,
}

impl ContentNode {
    /// Create an empty node of the given kind
    pub fn new(kind: BlockKind) -> Self {
        Self {
            kind,
            ..Self::default()
        }
    }

    /// Create a text run
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            kind: BlockKind::Text,
            text: Some(text.into()),
            ..Self::default()
        }
    }

    /// Create a paragraph holding a single text run (or nothing, for "")
    pub fn paragraph(text: &str) -> Self {
        Self::new(BlockKind::Paragraph).with_text_run(text)
    }

    /// Create a heading holding a single text run
    pub fn heading(level: u8, text: &str) -> Self {
        let level = level.clamp(1, 6);
        let mut attrs = Map::new();
        attrs.insert("level".to_string(), Value::from(level));
        Self {
            kind: BlockKind::Heading { level },
            attrs: Some(Value::Object(attrs)),
            ..Self::default()
        }
        .with_text_run(text)
    }

    /// Append children
    pub fn with_children(mut self, children: impl IntoIterator<Item = ContentNode>) -> Self {
        self.children.extend(children);
        self
    }

    fn with_text_run(mut self, text: &str) -> Self {
        // The editor never stores empty text nodes
        if !text.is_empty() {
            self.children.push(ContentNode::text(text));
        }
        self
    }

    /// A block whose content is inline: text runs are flattened into it
    pub fn is_textblock(&self) -> bool {
        match self.kind {
            BlockKind::Paragraph | BlockKind::Heading { .. } | BlockKind::CodeBlock => true,
            _ if self.kind.is_inline() => false,
            _ => self.children.iter().any(|c| c.kind.is_inline()),
        }
    }

    /// Parse a node record. `path` names the node in error messages.
    pub(crate) fn from_value(value: &Value, path: &str) -> Result<Self> {
        let obj = value.as_object().ok_or_else(|| {
            Error::MalformedDocument(format!("{}: expected node object, found {}", path, kind_name(value)))
        })?;

        let attrs = obj.get("attrs").filter(|v| !v.is_null()).cloned();
        let tag = obj.get("type").and_then(Value::as_str).unwrap_or("");
        let kind = BlockKind::from_tag(tag, attrs.as_ref());

        let text = match obj.get("text") {
            None | Some(Value::Null) => None,
            Some(Value::String(s)) => Some(s.clone()),
            Some(other) => {
                return Err(Error::MalformedDocument(format!(
                    "{}: text must be a string, found {}",
                    path,
                    kind_name(other)
                )))
            }
        };

        let children = match obj.get("content") {
            None | Some(Value::Null) => Vec::new(),
            Some(Value::Array(items)) => items
                .iter()
                .enumerate()
                .map(|(i, child)| Self::from_value(child, &format!("{}.content[{}]", path, i)))
                .collect::<Result<Vec<_>>>()?,
            Some(other) => {
                return Err(Error::MalformedDocument(format!(
                    "{}: content must be an array, found {}",
                    path,
                    kind_name(other)
                )))
            }
        };

        Ok(Self {
            kind,
            text,
            attrs,
            marks: obj.get("marks").filter(|v| !v.is_null()).cloned(),
            children,
        })
    }

    /// Serialize back to the editor's node record shape
    pub fn to_value(&self) -> Value {
        let mut obj = Map::new();
        if !self.kind.tag().is_empty() {
            obj.insert("type".to_string(), Value::from(self.kind.tag()));
        }
        if let Some(ref attrs) = self.attrs {
            obj.insert("attrs".to_string(), attrs.clone());
        }
        if !self.children.is_empty() {
            obj.insert(
                "content".to_string(),
                Value::Array(self.children.iter().map(ContentNode::to_value).collect()),
            );
        }
        if let Some(ref text) = self.text {
            obj.insert("text".to_string(), Value::from(text.as_str()));
        }
        if let Some(ref marks) = self.marks {
            obj.insert("marks".to_string(), marks.clone());
        }
        Value::Object(obj)
    }
}

impl Hash for ContentNode {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.kind.hash(state);
        self.text.hash(state);
        // serde_json::Value has no Hash impl; its canonical string does
        self.attrs.as_ref().map(Value::to_string).hash(state);
        self.marks.as_ref().map(Value::to_string).hash(state);
        self.children.hash(state);
    }
}

/// JSON type name for error messages
pub(crate) fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_block_kind_tags() {
        assert_eq!(BlockKind::from_tag("paragraph", None), BlockKind::Paragraph);
        assert_eq!(BlockKind::from_tag("bulletList", None).tag(), "bulletList");
        assert_eq!(
            BlockKind::from_tag("callout", None),
            BlockKind::Other("callout".to_string())
        );

        let heading = BlockKind::from_tag("heading", Some(&json!({ "level": 9 })));
        assert_eq!(heading, BlockKind::Heading { level: 6 });
        assert!(heading.is_heading());
    }

    #[test]
    fn test_parse_nested_node() {
        let value = json!({
            "type": "bulletList",
            "content": [{
                "type": "listItem",
                "content": [{
                    "type": "paragraph",
                    "content": [{ "type": "text", "text": "item", "marks": [{ "type": "bold" }] }]
                }]
            }]
        });

        let node = ContentNode::from_value(&value, "content[0]").unwrap();
        assert_eq!(node.kind, BlockKind::BulletList);
        assert!(!node.is_textblock());

        let para = &node.children[0].children[0];
        assert!(para.is_textblock());
        assert_eq!(para.children[0].text.as_deref(), Some("item"));
        assert!(para.children[0].marks.is_some());

        assert_eq!(node.to_value(), value);
    }

    #[test]
    fn test_missing_type_is_unknown_content() {
        let node = ContentNode::from_value(&json!({ "content": [] }), "content[0]").unwrap();
        assert_eq!(node.kind, BlockKind::Other(String::new()));
    }

    #[test]
    fn test_malformed_children_rejected() {
        let err = ContentNode::from_value(&json!({ "type": "paragraph", "content": 5 }), "content[2]")
            .unwrap_err();
        assert!(err.to_string().contains("content[2]: content must be an array"));

        let err = ContentNode::from_value(&json!(null), "content[0]").unwrap_err();
        assert!(err.to_string().contains("found null"));
    }

    #[test]
    fn test_unknown_block_with_text_is_textblock() {
        let node = ContentNode::new(BlockKind::Other("callout".to_string()))
            .with_children([ContentNode::text("note")]);
        assert!(node.is_textblock());
        assert!(!ContentNode::new(BlockKind::Image).is_textblock());
    }
}
