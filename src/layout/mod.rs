//! Page partitioning and page geometry

mod pagination;
mod viewport;

pub use pagination::{split, split_json, split_value, Page};
pub use viewport::{
    fill_percent, margin_to_pixels, resolve_zoom_scale, MarginSide, Margins, Padding,
    PageGeometry, TransformOrigin, Unit, Viewport, ZoomSpec, ZoomState, CM_PER_INCH,
    DEFAULT_ZOOM_PERCENT, MARGIN_STEP, PX_PER_INCH, REFERENCE_PAGE_WIDTH_PX, ZOOM_PRESETS,
};
