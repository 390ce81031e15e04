//! Mini-Pager: pagination core for a rich-text document editor
//!
//! This crate provides:
//! - Splitting a document into pages at explicit page-break nodes
//! - Character, word, paragraph and reading-time statistics
//! - Margin and zoom geometry for rendered pages
//! - Active-page tracking with scroll-into-view requests
//!
//! The editing surface owns the document. After each mutation it hands a
//! snapshot to [`Pager::on_document_change`], which recomputes pages and
//! statistics from scratch and keeps nothing but the derived state.

pub mod config;
pub mod document;
pub mod error;
pub mod layout;
pub mod metrics;
pub mod navigation;
pub mod render;
pub mod stats_view;
pub mod wasm;

// Re-export WASM types for direct use
pub use wasm::WasmPager;

// Re-export primary types
pub use config::PagerConfig;
pub use document::{BlockKind, ContentNode, Document, Node, PAGE_BREAK_TAG};
pub use error::{Error, Result};
pub use layout::{
    margin_to_pixels, resolve_zoom_scale, split, split_json, split_value, MarginSide, Margins,
    Page, PageGeometry, Unit, Viewport, ZoomSpec, ZoomState,
};
pub use metrics::{compute_metrics, DocumentMetrics, WORDS_PER_MINUTE};
pub use navigation::{Navigator, PageRegistry, ScrollRequest};
pub use render::{PageRenderData, PageStyle, RenderData};
pub use stats_view::{stat_rows, KeyCode, KeyEvent, KeyOutcome, StatRow, StatsPanel};

/// Summary of one recompute
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationUpdate {
    /// Pager revision after this update
    pub revision: u64,
    pub page_count: usize,
    pub previous_page_count: usize,
    pub active_page: usize,
    /// False when the snapshot matched the previous one and nothing was rebuilt
    pub recomputed: bool,
}

/// Derived state for one editing session
pub struct Pager {
    config: PagerConfig,
    pages: Vec<Page>,
    metrics: DocumentMetrics,
    navigator: Navigator,
    viewport: Viewport,
    stats_panel: StatsPanel,
    revision: u64,
    last_snapshot: Option<Snapshot>,
}

/// The last document the pager computed from, kept by value
struct Snapshot {
    fingerprint: u64,
    nodes: Vec<Node>,
}

impl Snapshot {
    fn matches(&self, fingerprint: u64, document: &Document) -> bool {
        self.fingerprint == fingerprint && self.nodes == document.nodes()
    }
}

impl Default for Pager {
    fn default() -> Self {
        Self::new(PagerConfig::default())
    }
}

impl Pager {
    /// Create a pager showing one empty page
    pub fn new(config: PagerConfig) -> Self {
        Self {
            viewport: config.viewport(),
            config,
            pages: vec![Page::new()],
            metrics: DocumentMetrics::default(),
            navigator: Navigator::new(),
            stats_panel: StatsPanel::default(),
            revision: 0,
            last_snapshot: None,
        }
    }

    /// Recompute pages then statistics for a new document snapshot.
    ///
    /// A snapshot equal to the previous one is skipped. The fingerprint only
    /// short-cuts the comparison; a hit is confirmed node by node.
    pub fn on_document_change(&mut self, document: &Document) -> PaginationUpdate {
        let previous_page_count = self.pages.len();
        let fingerprint = document.fingerprint();

        let unchanged = self
            .last_snapshot
            .as_ref()
            .is_some_and(|last| last.matches(fingerprint, document));
        if unchanged {
            log::trace!("Document unchanged, skipping recompute");
            return self.update(previous_page_count, false);
        }

        self.pages = layout::split(document);
        self.metrics = metrics::compute_metrics(document);
        self.navigator.sync(self.pages.len());
        self.last_snapshot = Some(Snapshot {
            fingerprint,
            nodes: document.nodes().to_vec(),
        });
        self.revision += 1;

        log::debug!(
            "Revision {}: {} pages, {} words",
            self.revision,
            self.pages.len(),
            self.metrics.word_count
        );

        self.update(previous_page_count, true)
    }

    /// Recompute from the editor's JSON document. Malformed input renders as
    /// a single page.
    pub fn on_document_value(&mut self, value: &serde_json::Value) -> PaginationUpdate {
        self.on_document_change(&Document::from_value_lossy(value))
    }

    /// Recompute from a JSON document string. Unparseable input renders as
    /// one empty page.
    pub fn on_document_json(&mut self, json: &str) -> PaginationUpdate {
        match serde_json::from_str::<serde_json::Value>(json) {
            Ok(value) => self.on_document_value(&value),
            Err(err) => {
                log::warn!("Document JSON did not parse, rendering one empty page: {}", err);
                self.on_document_change(&Document::new())
            }
        }
    }

    /// Insert a page break at top-level index `at` and recompute
    pub fn insert_page_break(&mut self, document: &mut Document, at: usize) -> PaginationUpdate {
        document.insert_page_break(at);
        self.on_document_change(document)
    }

    fn update(&self, previous_page_count: usize, recomputed: bool) -> PaginationUpdate {
        PaginationUpdate {
            revision: self.revision,
            page_count: self.pages.len(),
            previous_page_count,
            active_page: self.navigator.active_page(),
            recomputed,
        }
    }

    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn metrics(&self) -> &DocumentMetrics {
        &self.metrics
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    /// Thumbnail or page-button click
    pub fn select_page<H: Clone>(
        &mut self,
        page_index: usize,
        registry: &PageRegistry<H>,
    ) -> Option<ScrollRequest<H>> {
        self.navigator.on_page_click(page_index, registry)
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn viewport_mut(&mut self) -> &mut Viewport {
        &mut self.viewport
    }

    pub fn zoom_presets(&self) -> &[u32] {
        &self.config.zoom_presets
    }

    pub fn stats_panel(&self) -> &StatsPanel {
        &self.stats_panel
    }

    pub fn stats_panel_mut(&mut self) -> &mut StatsPanel {
        &mut self.stats_panel
    }

    /// Route a global key event to the statistics view
    pub fn handle_key(&mut self, event: &KeyEvent) -> KeyOutcome {
        self.stats_panel.handle_key(event)
    }

    /// Statistics rows in display order
    pub fn stat_rows(&self) -> [StatRow; 5] {
        stats_view::stat_rows(&self.metrics)
    }

    /// Pages, geometry and statistics for the renderer
    pub fn render_data(&self) -> RenderData {
        RenderData::build(
            self.revision,
            &self.pages,
            self.navigator.active_page(),
            &self.viewport.page_geometry(),
            self.metrics,
        )
    }
}
