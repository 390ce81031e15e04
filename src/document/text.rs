//! Plain-text flattening of the content tree

use super::{ContentNode, Document};
use crate::document::BlockKind;

/// Separator used for character and word counting
pub const WORD_SEPARATOR: &str = " ";

/// Separator used by the plain-text export (and paragraph counting)
pub const PLAIN_TEXT_SEPARATOR: &str = "\n\n";

/// Concatenate all text runs in document order.
///
/// `block_separator` goes before every textblock except the first, so words
/// on either side of a block edge never run together. Leaf blocks without
/// text (breaks, images, rules) contribute nothing; hard breaks contribute
/// a newline.
pub fn flatten_text(document: &Document, block_separator: &str) -> String {
    let mut flattener = Flattener {
        out: String::new(),
        separator: block_separator,
        seen_block: false,
    };
    for node in document.content_nodes() {
        flattener.visit(node);
    }
    flattener.out
}

/// Plain-text export: blocks separated by a blank line
pub fn plain_text(document: &Document) -> String {
    flatten_text(document, PLAIN_TEXT_SEPARATOR)
}

struct Flattener<'a> {
    out: String,
    separator: &'a str,
    seen_block: bool,
}

impl Flattener<'_> {
    fn visit(&mut self, node: &ContentNode) {
        if node.is_textblock() {
            if self.seen_block {
                self.out.push_str(self.separator);
            }
            self.seen_block = true;
        }

        if node.kind == BlockKind::HardBreak {
            self.out.push('\n');
        } else if let Some(ref text) = node.text {
            self.out.push_str(text);
        }

        for child in &node.children {
            self.visit(child);
        }
    }
}
