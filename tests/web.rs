//! Browser tests for the WASM bridge

#![cfg(target_arch = "wasm32")]

use mini_pager::WasmPager;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

const DOC: &str = r#"{"type":"doc","content":[
    {"type":"paragraph","content":[{"type":"text","text":"Hello"}]},
    {"type":"pageBreak"},
    {"type":"pageBreak"},
    {"type":"paragraph","content":[{"type":"text","text":"world"}]}
]}"#;

#[wasm_bindgen_test]
fn paginates_document_json() {
    let mut pager = WasmPager::new();
    assert_eq!(pager.update_document(DOC), 3);
    assert_eq!(pager.get_page_count(), 3);
}

#[wasm_bindgen_test]
fn malformed_document_is_one_page() {
    let mut pager = WasmPager::new();
    assert_eq!(pager.update_document(r#"{"type":"doc"}"#), 1);
    assert_eq!(pager.update_document("]"), 1);
}

#[wasm_bindgen_test]
fn active_page_clamps_after_shrink() {
    let mut pager = WasmPager::new();
    pager.update_document(DOC);
    pager.register_page(3);
    assert_eq!(pager.select_page(3), 3);

    pager.update_document(r#"{"content":[{"type":"paragraph"}]}"#);
    assert_eq!(pager.get_active_page(), 1);
}

#[wasm_bindgen_test]
fn fill_zoom_follows_container() {
    let mut pager = WasmPager::new();
    pager.set_container_width(1600.0);
    assert_eq!(pager.toggle_zoom_fill(), 200);
    pager.set_container_width(800.0);
    assert_eq!(pager.get_zoom(), 100);
}
