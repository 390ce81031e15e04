//! Active-page tracking and scroll-into-view requests
//!
//! Selection is one-directional: clicking a thumbnail or footer page button
//! moves the active page and asks the renderer to scroll. Scrolling by hand
//! does not update the active page.

use rustc_hash::FxHashMap;

/// Page index → opaque handle for the rendered region of that page.
///
/// Maintained by the rendering layer; indices are 1-based like the active page.
#[derive(Debug, Clone)]
pub struct PageRegistry<H> {
    regions: FxHashMap<usize, H>,
}

impl<H> Default for PageRegistry<H> {
    fn default() -> Self {
        Self {
            regions: FxHashMap::default(),
        }
    }
}

impl<H: Clone> PageRegistry<H> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the region rendered for `page_index`, replacing any previous one
    pub fn register(&mut self, page_index: usize, handle: H) {
        self.regions.insert(page_index, handle);
    }

    pub fn unregister(&mut self, page_index: usize) -> Option<H> {
        self.regions.remove(&page_index)
    }

    /// Drop regions for pages past `page_count`
    pub fn truncate(&mut self, page_count: usize) {
        self.regions.retain(|&index, _| index <= page_count);
    }

    pub fn get(&self, page_index: usize) -> Option<&H> {
        self.regions.get(&page_index)
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}

/// "Bring region R into view": a smooth scroll that lines the region's top
/// edge up with the viewport
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrollRequest<H> {
    pub page_index: usize,
    pub region: H,
}

/// Tracks the 1-based active page against the current page count
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigator {
    active_page: usize,
    page_count: usize,
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigator {
    /// Page 1 of a one-page document
    pub fn new() -> Self {
        Self {
            active_page: 1,
            page_count: 1,
        }
    }

    pub fn active_page(&self) -> usize {
        self.active_page
    }

    pub fn page_count(&self) -> usize {
        self.page_count
    }

    pub fn is_active(&self, page_index: usize) -> bool {
        self.active_page == page_index
    }

    /// Adopt a new page count, pulling the active page back into `[1, N]`.
    ///
    /// Returns true if the active page moved.
    pub fn sync(&mut self, page_count: usize) -> bool {
        self.page_count = page_count.max(1);
        let clamped = self.clamp(self.active_page);
        let moved = clamped != self.active_page;
        if moved {
            log::debug!(
                "Active page {} clamped to {} ({} pages)",
                self.active_page,
                clamped,
                self.page_count
            );
        }
        self.active_page = clamped;
        moved
    }

    /// Make `page_index` active and request that its region be scrolled to.
    ///
    /// Out-of-range indices are clamped. Returns `None` when the renderer has
    /// not registered a region for the page yet.
    pub fn select<H: Clone>(
        &mut self,
        page_index: usize,
        registry: &PageRegistry<H>,
    ) -> Option<ScrollRequest<H>> {
        self.active_page = self.clamp(page_index);
        registry.get(self.active_page).map(|region| ScrollRequest {
            page_index: self.active_page,
            region: region.clone(),
        })
    }

    /// Thumbnail / footer page-button entry point
    pub fn on_page_click<H: Clone>(
        &mut self,
        page_index: usize,
        registry: &PageRegistry<H>,
    ) -> Option<ScrollRequest<H>> {
        self.select(page_index, registry)
    }

    /// Footer labels, `Page 1` through `Page N`
    pub fn page_labels(&self) -> impl Iterator<Item = String> {
        (1..=self.page_count).map(page_label)
    }

    fn clamp(&self, page_index: usize) -> usize {
        page_index.clamp(1, self.page_count)
    }
}

/// Footer label for a 1-based page index
pub fn page_label(page_index: usize) -> String {
    format!("Page {}", page_index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn registry(count: usize) -> PageRegistry<String> {
        let mut registry = PageRegistry::new();
        for i in 1..=count {
            registry.register(i, format!("region-{}", i));
        }
        registry
    }

    #[test]
    fn test_select_emits_scroll_request() {
        let mut nav = Navigator::new();
        nav.sync(3);
        let request = nav.select(2, &registry(3)).unwrap();
        assert_eq!(request.page_index, 2);
        assert_eq!(request.region, "region-2");
        assert!(nav.is_active(2));
    }

    #[test]
    fn test_select_clamps_out_of_range() {
        let mut nav = Navigator::new();
        nav.sync(3);
        assert_eq!(nav.on_page_click(9, &registry(3)).unwrap().page_index, 3);
        assert_eq!(nav.on_page_click(0, &registry(3)).unwrap().page_index, 1);
    }

    #[test]
    fn test_select_without_region() {
        let mut nav = Navigator::new();
        nav.sync(2);
        assert!(nav.select(2, &PageRegistry::<String>::new()).is_none());
        assert_eq!(nav.active_page(), 2);
    }

    #[test]
    fn test_sync_clamps_after_pages_shrink() {
        let mut nav = Navigator::new();
        nav.sync(5);
        nav.select(5, &registry(5));
        assert!(nav.sync(2));
        assert_eq!(nav.active_page(), 2);
        assert!(!nav.sync(4));
        assert_eq!(nav.active_page(), 2);
    }

    #[test]
    fn test_registry_truncate() {
        let mut reg = registry(4);
        reg.truncate(2);
        assert_eq!(reg.len(), 2);
        assert!(reg.get(3).is_none());
        assert_eq!(reg.unregister(1).as_deref(), Some("region-1"));
    }

    #[test]
    fn test_page_labels() {
        let mut nav = Navigator::new();
        nav.sync(2);
        let labels: Vec<_> = nav.page_labels().collect();
        assert_eq!(labels, vec!["Page 1", "Page 2"]);
    }

    proptest! {
        #[test]
        fn active_page_stays_in_range(
            before in 1usize..50,
            selected in 0usize..100,
            after in 0usize..50,
        ) {
            let mut nav = Navigator::new();
            nav.sync(before);
            nav.select(selected, &PageRegistry::<u32>::new());
            nav.sync(after);
            let n = after.max(1);
            prop_assert!((1..=n).contains(&nav.active_page()));
        }
    }
}
