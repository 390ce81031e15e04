//! Render output: serializable page data for the JS renderer

use serde::Serialize;
use serde_json::Value;

use crate::layout::{Page, PageGeometry};
use crate::metrics::DocumentMetrics;
use crate::navigation::page_label;

/// Everything the renderer needs after a recompute
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderData {
    /// Pager revision the payload was built at
    pub revision: u64,
    pub active_page: usize,
    pub pages: Vec<PageRenderData>,
    pub metrics: DocumentMetrics,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageRenderData {
    /// 1-based
    pub page_index: usize,
    pub label: String,
    pub is_active: bool,
    /// The page's nodes as a standalone editor document
    pub content: Value,
    pub style: PageStyle,
}

/// Inline style applied to each page element
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageStyle {
    pub padding_top: f64,
    pub padding_right: f64,
    pub padding_bottom: f64,
    pub padding_left: f64,
    pub transform: String,
    pub transform_origin: &'static str,
}

impl From<&PageGeometry> for PageStyle {
    fn from(geometry: &PageGeometry) -> Self {
        Self {
            padding_top: geometry.padding.top,
            padding_right: geometry.padding.right,
            padding_bottom: geometry.padding.bottom,
            padding_left: geometry.padding.left,
            transform: geometry.css_transform(),
            transform_origin: geometry.origin.as_css(),
        }
    }
}

impl RenderData {
    pub(crate) fn build(
        revision: u64,
        pages: &[Page],
        active_page: usize,
        geometry: &PageGeometry,
        metrics: DocumentMetrics,
    ) -> Self {
        let style = PageStyle::from(geometry);
        let pages = pages
            .iter()
            .enumerate()
            .map(|(i, page)| PageRenderData {
                page_index: i + 1,
                label: page_label(i + 1),
                is_active: i + 1 == active_page,
                content: page.to_value(),
                style: style.clone(),
            })
            .collect();

        Self {
            revision,
            active_page,
            pages,
            metrics,
        }
    }

    pub fn to_json(&self) -> String {
        // Serializing plain structs and serde_json::Values cannot fail
        serde_json::to_string(self).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{ContentNode, Document, Node};
    use crate::layout::{split, Viewport};
    use serde_json::json;

    #[test]
    fn test_render_data_shape() {
        let doc = Document::from_nodes([ContentNode::paragraph("a").into(), Node::Break]);
        let pages = split(&doc);
        let geometry = Viewport::default().page_geometry();
        let data = RenderData::build(3, &pages, 2, &geometry, DocumentMetrics::default());

        let value = serde_json::to_value(&data).unwrap();
        assert_eq!(value["revision"], json!(3));
        assert_eq!(value["activePage"], json!(2));
        assert_eq!(value["pages"][0]["label"], json!("Page 1"));
        assert_eq!(value["pages"][0]["isActive"], json!(false));
        assert_eq!(value["pages"][1]["isActive"], json!(true));
        assert_eq!(value["pages"][1]["content"], json!({ "type": "doc", "content": [] }));
        assert_eq!(value["pages"][0]["style"]["paddingTop"], json!(96.0));
        assert_eq!(value["pages"][0]["style"]["transform"], json!("scale(1)"));
        assert_eq!(value["pages"][0]["style"]["transformOrigin"], json!("top left"));
        assert_eq!(value["metrics"]["wordCount"], json!(0));
    }
}
