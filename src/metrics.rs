//! Document statistics derived from the flattened text

use serde::Serialize;
use unicode_segmentation::UnicodeSegmentation;

use crate::document::{flatten_text, plain_text, Document, WORD_SEPARATOR};

/// Reading speed used for the reading-time estimate
pub const WORDS_PER_MINUTE: usize = 200;

/// Counts shown in the footer and the statistics view.
///
/// Characters are grapheme clusters, not the UTF-16 code units a browser's
/// `String.length` reports: `"a 😀 e\u{301}"` counts 5 here and 7 there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentMetrics {
    /// Grapheme clusters, spaces included
    pub char_count: usize,
    pub chars_without_spaces: usize,
    pub word_count: usize,
    pub paragraph_count: usize,
    pub reading_time_minutes: usize,
}

/// Compute all statistics for a document snapshot
pub fn compute_metrics(document: &Document) -> DocumentMetrics {
    let text = flatten_text(document, WORD_SEPARATOR);
    let mut metrics = metrics_for_text(&text);
    metrics.paragraph_count = paragraph_count(&plain_text(document));
    metrics
}

/// Character, word and reading-time counts for already-flattened text.
///
/// Paragraphs are counted as newline-separated segments of `text`.
pub fn metrics_for_text(text: &str) -> DocumentMetrics {
    let char_count = text.graphemes(true).count();
    let word_count = text.split_whitespace().count();
    let space_boundaries = text.split(' ').count() - 1;

    DocumentMetrics {
        char_count,
        chars_without_spaces: char_count.saturating_sub(space_boundaries),
        word_count,
        paragraph_count: paragraph_count(text),
        reading_time_minutes: reading_time_minutes(word_count),
    }
}

/// Whole minutes needed to read `word_count` words, rounded up
pub fn reading_time_minutes(word_count: usize) -> usize {
    word_count.div_ceil(WORDS_PER_MINUTE)
}

fn paragraph_count(text: &str) -> usize {
    text.split('\n').filter(|segment| !segment.is_empty()).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{BlockKind, ContentNode, Node};

    #[test]
    fn test_hello_world() {
        let metrics = metrics_for_text("Hello world");
        assert_eq!(metrics.char_count, 11);
        assert_eq!(metrics.word_count, 2);
        assert_eq!(metrics.chars_without_spaces, 10);
        assert_eq!(metrics.paragraph_count, 1);
        assert_eq!(metrics.reading_time_minutes, 1);
    }

    #[test]
    fn test_empty_document() {
        let metrics = compute_metrics(&Document::new());
        assert_eq!(metrics, DocumentMetrics::default());
    }

    #[test]
    fn test_reading_time_rounds_up() {
        assert_eq!(reading_time_minutes(0), 0);
        assert_eq!(reading_time_minutes(1), 1);
        assert_eq!(reading_time_minutes(200), 1);
        assert_eq!(reading_time_minutes(201), 2);
    }

    #[test]
    fn test_block_edges_split_words() {
        let doc = Document::from_nodes([
            ContentNode::paragraph("Hello").into(),
            Node::Break,
            ContentNode::heading(1, "world").into(),
            ContentNode::paragraph("again").into(),
        ]);
        let metrics = compute_metrics(&doc);
        assert_eq!(metrics.char_count, "Hello world again".len());
        assert_eq!(metrics.word_count, 3);
        assert_eq!(metrics.chars_without_spaces, 15);
        assert_eq!(metrics.paragraph_count, 3);
    }

    #[test]
    fn test_empty_paragraphs_not_counted() {
        let doc = Document::from_nodes([
            Node::Content(ContentNode::paragraph("one")),
            Node::Content(ContentNode::paragraph("")),
            Node::Content(ContentNode::paragraph("two")),
        ]);
        let metrics = compute_metrics(&doc);
        assert_eq!(metrics.paragraph_count, 2);
        assert_eq!(metrics.word_count, 2);
    }

    #[test]
    fn test_hard_break_starts_paragraph_segment() {
        let para = ContentNode::new(BlockKind::Paragraph).with_children([
            ContentNode::text("first"),
            ContentNode::new(BlockKind::HardBreak),
            ContentNode::text("second"),
        ]);
        let metrics = compute_metrics(&Document::from_nodes([Node::Content(para)]));
        assert_eq!(metrics.paragraph_count, 2);
        assert_eq!(metrics.word_count, 2);
    }

    #[test]
    fn test_graphemes_count_once() {
        let metrics = metrics_for_text("cafe\u{301} ok");
        assert_eq!(metrics.char_count, 7);
        assert_eq!(metrics.word_count, 2);

        let metrics = metrics_for_text("a \u{1F600} e\u{301}");
        assert_eq!(metrics.char_count, 5);
        assert_eq!(metrics.chars_without_spaces, 3);
    }
}
