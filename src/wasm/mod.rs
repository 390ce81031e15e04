//! WASM bindings for the pager

use wasm_bindgen::prelude::*;

use crate::layout::MarginSide;
use crate::stats_view::{KeyCode, KeyEvent};
use crate::{Document, Pager, PagerConfig, PageRegistry};

/// Initialize panic hook for better error messages
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// WASM-exposed pager wrapper.
///
/// Documents cross the bridge as the editor's JSON; render data comes back
/// as a JSON string.
#[wasm_bindgen]
pub struct WasmPager {
    pager: Pager,
    /// Page indices the JS side has mounted; the handle is the page index
    /// itself, resolved to a DOM element by the caller
    registry: PageRegistry<u32>,
}

#[wasm_bindgen]
impl WasmPager {
    /// Create a pager with default margins (1in) and 100% zoom
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self::from_config(PagerConfig::default())
    }

    /// Create a pager from a JSON config; invalid config falls back to defaults
    #[wasm_bindgen(js_name = withConfig)]
    pub fn with_config(config_json: &str) -> Self {
        let config = PagerConfig::from_json(config_json).unwrap_or_else(|err| {
            log::warn!("Invalid pager config, using defaults: {}", err);
            PagerConfig::default()
        });
        Self::from_config(config)
    }

    /// Recompute after a document change. Returns the new page count.
    #[wasm_bindgen(js_name = updateDocument)]
    pub fn update_document(&mut self, document_json: &str) -> usize {
        let update = self.pager.on_document_json(document_json);
        self.registry.truncate(update.page_count);
        update.page_count
    }

    /// Insert a page break at top-level index `at`; returns the new document
    /// JSON, or the input unchanged if it does not parse.
    #[wasm_bindgen(js_name = insertPageBreak)]
    pub fn insert_page_break(&mut self, document_json: &str, at: usize) -> String {
        match Document::from_json(document_json) {
            Ok(mut document) => {
                self.pager.insert_page_break(&mut document, at);
                self.registry.truncate(self.pager.page_count());
                document.to_value().to_string()
            }
            Err(err) => {
                log::warn!("Cannot insert page break into malformed document: {}", err);
                document_json.to_string()
            }
        }
    }

    /// Get page count
    #[wasm_bindgen(js_name = getPageCount)]
    pub fn get_page_count(&self) -> usize {
        self.pager.page_count()
    }

    /// Get render data (returns JSON)
    #[wasm_bindgen(js_name = getRenderData)]
    pub fn get_render_data(&self) -> String {
        self.pager.render_data().to_json()
    }

    /// Get document statistics (returns JSON)
    #[wasm_bindgen(js_name = getMetrics)]
    pub fn get_metrics(&self) -> String {
        serde_json::to_string(self.pager.metrics()).unwrap_or_default()
    }

    /// Get the zoom presets offered by the selector
    #[wasm_bindgen(js_name = getZoomPresets)]
    pub fn get_zoom_presets(&self) -> Vec<u32> {
        self.pager.zoom_presets().to_vec()
    }

    /// Set one margin. Returns false (keeping the old value) on bad input.
    #[wasm_bindgen(js_name = setMargin)]
    pub fn set_margin(&mut self, side: &str, value: f64) -> bool {
        MarginSide::parse(side)
            .and_then(|side| self.pager.viewport_mut().set_margin(side, value))
            .is_ok()
    }

    /// Set one margin from raw input text
    #[wasm_bindgen(js_name = setMarginInput)]
    pub fn set_margin_input(&mut self, side: &str, input: &str) -> bool {
        MarginSide::parse(side)
            .and_then(|side| self.pager.viewport_mut().set_margin_input(side, input))
            .is_ok()
    }

    /// Set the margin unit (`in`, `cm`, `px`; anything else is px)
    #[wasm_bindgen(js_name = setMarginUnit)]
    pub fn set_margin_unit(&mut self, unit: &str) {
        self.pager.viewport_mut().set_unit_name(unit);
    }

    /// Pick a zoom percentage; leaves fill mode
    #[wasm_bindgen(js_name = selectZoom)]
    pub fn select_zoom(&mut self, percent: u32) -> bool {
        self.pager.viewport_mut().zoom_mut().select(percent).is_ok()
    }

    /// Toggle fill zoom; returns the resulting percentage
    #[wasm_bindgen(js_name = toggleZoomFill)]
    pub fn toggle_zoom_fill(&mut self) -> u32 {
        let zoom = self.pager.viewport_mut().zoom_mut();
        zoom.toggle_fill();
        zoom.percent()
    }

    /// Report the page container width in CSS pixels
    #[wasm_bindgen(js_name = setContainerWidth)]
    pub fn set_container_width(&mut self, width_px: f64) {
        self.pager.viewport_mut().zoom_mut().set_container_width(width_px);
    }

    /// Get the current zoom percentage
    #[wasm_bindgen(js_name = getZoom)]
    pub fn get_zoom(&self) -> u32 {
        self.pager.viewport().zoom().percent()
    }

    /// Tell the pager a page element is mounted
    #[wasm_bindgen(js_name = registerPage)]
    pub fn register_page(&mut self, page_index: u32) {
        self.registry.register(page_index as usize, page_index);
    }

    /// Select a page (1-based). Returns the page to scroll to, or 0 if that
    /// page is not mounted.
    #[wasm_bindgen(js_name = selectPage)]
    pub fn select_page(&mut self, page_index: u32) -> u32 {
        self.pager
            .select_page(page_index as usize, &self.registry)
            .map(|request| request.region)
            .unwrap_or(0)
    }

    /// Get the active page (1-based)
    #[wasm_bindgen(js_name = getActivePage)]
    pub fn get_active_page(&self) -> usize {
        self.pager.navigator().active_page()
    }

    /// Handle a global keydown. Returns true if the caller should call
    /// `preventDefault`.
    #[wasm_bindgen(js_name = handleKey)]
    pub fn handle_key(&mut self, ctrl: bool, shift: bool, code: &str) -> bool {
        let event = KeyEvent::new(KeyCode::parse(code), ctrl, shift);
        self.pager.handle_key(&event).prevent_default()
    }

    /// Open the statistics view ("Document Stats" button)
    #[wasm_bindgen(js_name = openStats)]
    pub fn open_stats(&mut self) {
        self.pager.stats_panel_mut().open();
    }

    /// Close the statistics view (close button or backdrop)
    #[wasm_bindgen(js_name = closeStats)]
    pub fn close_stats(&mut self) {
        self.pager.stats_panel_mut().dismiss();
    }

    /// Whether the statistics view is showing
    #[wasm_bindgen(js_name = isStatsOpen)]
    pub fn is_stats_open(&self) -> bool {
        self.pager.stats_panel().is_open()
    }

    /// Statistics rows as display strings, in order
    #[wasm_bindgen(js_name = getStatRows)]
    pub fn get_stat_rows(&self) -> Vec<String> {
        self.pager.stat_rows().iter().map(ToString::to_string).collect()
    }
}

impl WasmPager {
    fn from_config(config: PagerConfig) -> Self {
        Self {
            pager: Pager::new(config),
            registry: PageRegistry::new(),
        }
    }
}

impl Default for WasmPager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOC: &str = r#"{"type":"doc","content":[
        {"type":"paragraph","content":[{"type":"text","text":"Hello"}]},
        {"type":"pageBreak"},
        {"type":"paragraph","content":[{"type":"text","text":"world"}]}
    ]}"#;

    #[test]
    fn test_update_and_select() {
        let mut pager = WasmPager::new();
        assert_eq!(pager.update_document(DOC), 2);

        assert_eq!(pager.select_page(2), 0);
        assert_eq!(pager.get_active_page(), 2);

        pager.register_page(1);
        assert_eq!(pager.select_page(1), 1);
    }

    #[test]
    fn test_insert_page_break_returns_document() {
        let mut pager = WasmPager::new();
        let json = pager.insert_page_break(DOC, 0);
        assert_eq!(pager.get_page_count(), 3);
        let doc = Document::from_json(&json).unwrap();
        assert!(doc.nodes()[0].is_break());

        assert_eq!(pager.insert_page_break("{", 0), "{");
    }

    #[test]
    fn test_margin_and_zoom_controls() {
        let mut pager = WasmPager::new();
        assert!(pager.set_margin("top", 0.5));
        assert!(!pager.set_margin("middle", 0.5));
        assert!(!pager.set_margin_input("left", "x"));
        pager.set_margin_unit("furlong");

        pager.set_container_width(1200.0);
        assert_eq!(pager.toggle_zoom_fill(), 150);
        assert!(pager.select_zoom(75));
        assert_eq!(pager.get_zoom(), 75);
        assert!(!pager.select_zoom(0));

        let render: serde_json::Value = serde_json::from_str(&pager.get_render_data()).unwrap();
        assert_eq!(render["pages"][0]["style"]["paddingTop"], serde_json::json!(0.5));
        assert_eq!(render["pages"][0]["style"]["paddingLeft"], serde_json::json!(1.0));
    }

    #[test]
    fn test_keyboard_stats() {
        let mut pager = WasmPager::new();
        pager.update_document(DOC);
        assert!(pager.handle_key(true, true, "KeyC"));
        assert!(pager.is_stats_open());
        assert!(!pager.handle_key(false, false, "Escape"));
        assert!(!pager.is_stats_open());
        assert_eq!(pager.get_stat_rows()[2], "Words: 2");
    }
}
