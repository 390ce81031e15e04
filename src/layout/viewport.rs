//! Viewport geometry: margin units and zoom resolution

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// CSS pixels per inch
pub const PX_PER_INCH: f64 = 96.0;

/// Centimeters per inch
pub const CM_PER_INCH: f64 = 2.54;

/// Nominal page width used as the fill-zoom denominator
pub const REFERENCE_PAGE_WIDTH_PX: f64 = 800.0;

/// Zoom percentages offered by the selector
pub const ZOOM_PRESETS: [u32; 6] = [50, 75, 100, 125, 150, 200];

pub const DEFAULT_ZOOM_PERCENT: u32 = 100;

/// Granularity of the margin input fields
pub const MARGIN_STEP: f64 = 0.1;

/// Unit the four margin values are expressed in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Unit {
    #[default]
    #[serde(rename = "in")]
    Inch,
    #[serde(rename = "cm")]
    Centimeter,
    /// Also the fallback for unrecognised unit names
    #[serde(rename = "px", other)]
    Pixel,
}

impl Unit {
    /// Parse a unit name. Unknown names are treated as pixels.
    pub fn parse(name: &str) -> Self {
        match name.trim() {
            "in" | "inch" => Unit::Inch,
            "cm" | "centimeter" => Unit::Centimeter,
            _ => Unit::Pixel,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Unit::Inch => "in",
            Unit::Centimeter => "cm",
            Unit::Pixel => "px",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Convert a margin value to CSS pixels
pub fn margin_to_pixels(value: f64, unit: Unit) -> f64 {
    match unit {
        Unit::Pixel => value,
        Unit::Inch => value * PX_PER_INCH,
        Unit::Centimeter => (value / CM_PER_INCH) * PX_PER_INCH,
    }
}

/// One side of the page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarginSide {
    Top,
    Right,
    Bottom,
    Left,
}

impl MarginSide {
    pub const ALL: [MarginSide; 4] = [
        MarginSide::Top,
        MarginSide::Right,
        MarginSide::Bottom,
        MarginSide::Left,
    ];

    /// Parse a side name (`top`, `right`, `bottom`, `left`)
    pub fn parse(name: &str) -> Result<Self> {
        match name.trim() {
            "top" => Ok(MarginSide::Top),
            "right" => Ok(MarginSide::Right),
            "bottom" => Ok(MarginSide::Bottom),
            "left" => Ok(MarginSide::Left),
            other => Err(Error::UnknownSide(other.to_string())),
        }
    }
}

/// Four margin values in the session's unit
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Margins {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Default for Margins {
    fn default() -> Self {
        Self::uniform(1.0)
    }
}

impl Margins {
    /// Same value on every side
    pub fn uniform(value: f64) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    pub fn get(&self, side: MarginSide) -> f64 {
        match side {
            MarginSide::Top => self.top,
            MarginSide::Right => self.right,
            MarginSide::Bottom => self.bottom,
            MarginSide::Left => self.left,
        }
    }

    /// Set one side. Negative or non-finite values are rejected and the
    /// previous value stays.
    pub fn set(&mut self, side: MarginSide, value: f64) -> Result<()> {
        if !value.is_finite() || value < 0.0 {
            return Err(Error::InvalidMargin(value.to_string()));
        }
        let slot = match side {
            MarginSide::Top => &mut self.top,
            MarginSide::Right => &mut self.right,
            MarginSide::Bottom => &mut self.bottom,
            MarginSide::Left => &mut self.left,
        };
        *slot = value;
        Ok(())
    }

    /// Resolve all four sides to pixels
    pub fn to_pixels(&self, unit: Unit) -> Padding {
        Padding {
            top: margin_to_pixels(self.top, unit),
            right: margin_to_pixels(self.right, unit),
            bottom: margin_to_pixels(self.bottom, unit),
            left: margin_to_pixels(self.left, unit),
        }
    }
}

/// Resolved per-side page padding in CSS pixels
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Padding {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

/// Requested zoom
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoomSpec {
    /// Explicit percentage
    Manual(u32),
    /// Derived from the container width
    Fill,
}

/// Fill-mode percentage for a container width, if the width is usable.
///
/// Never below 1%, so a sliver of a container still renders the page.
pub fn fill_percent(container_width_px: f64) -> Option<u32> {
    if !container_width_px.is_finite() || container_width_px <= 0.0 {
        return None;
    }
    let percent = ((container_width_px / REFERENCE_PAGE_WIDTH_PX) * 100.0).round() as u32;
    Some(percent.max(1))
}

/// Resolve a zoom spec to a percentage.
///
/// An unusable container width in fill mode resolves to 100%.
pub fn resolve_zoom_scale(spec: ZoomSpec, container_width_px: f64) -> u32 {
    match spec {
        ZoomSpec::Manual(percent) => percent,
        ZoomSpec::Fill => fill_percent(container_width_px).unwrap_or(DEFAULT_ZOOM_PERCENT),
    }
}

/// Zoom selection plus the last resolved percentage.
///
/// In fill mode the percentage is recomputed only when the container width
/// or fill activation changes; other state changes leave it alone.
#[derive(Debug, Clone)]
pub struct ZoomState {
    fill: bool,
    percent: u32,
    container_width: Option<f64>,
    fill_resolutions: u64,
}

impl Default for ZoomState {
    fn default() -> Self {
        Self::new(DEFAULT_ZOOM_PERCENT)
    }
}

impl ZoomState {
    pub fn new(percent: u32) -> Self {
        Self {
            fill: false,
            percent: percent.max(1),
            container_width: None,
            fill_resolutions: 0,
        }
    }

    /// Current zoom percentage
    pub fn percent(&self) -> u32 {
        self.percent
    }

    pub fn is_fill(&self) -> bool {
        self.fill
    }

    pub fn spec(&self) -> ZoomSpec {
        if self.fill {
            ZoomSpec::Fill
        } else {
            ZoomSpec::Manual(self.percent)
        }
    }

    /// How many times the fill percentage has been recomputed
    pub fn fill_resolutions(&self) -> u64 {
        self.fill_resolutions
    }

    /// Pick a manual percentage (preset or user-entered); exits fill mode
    pub fn select(&mut self, percent: u32) -> Result<()> {
        if percent == 0 {
            return Err(Error::InvalidZoom(percent));
        }
        self.fill = false;
        self.percent = percent;
        Ok(())
    }

    /// Enter or leave fill mode. Leaving keeps the last fill percentage.
    pub fn toggle_fill(&mut self) {
        self.set_fill(!self.fill);
    }

    pub fn set_fill(&mut self, fill: bool) {
        if self.fill == fill {
            return;
        }
        self.fill = fill;
        if fill {
            self.resolve_fill();
        }
    }

    /// Report the container width. Unusable widths are ignored.
    pub fn set_container_width(&mut self, width_px: f64) {
        if fill_percent(width_px).is_none() {
            log::warn!("Ignoring unusable container width {}", width_px);
            return;
        }
        if self.container_width == Some(width_px) {
            return;
        }
        self.container_width = Some(width_px);
        if self.fill {
            self.resolve_fill();
        }
    }

    fn resolve_fill(&mut self) {
        if let Some(percent) = self.container_width.and_then(fill_percent) {
            self.percent = percent;
            self.fill_resolutions += 1;
        }
    }
}

/// Transform origin for the page scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransformOrigin {
    #[default]
    TopLeft,
}

impl TransformOrigin {
    pub fn as_css(&self) -> &'static str {
        match self {
            TransformOrigin::TopLeft => "top left",
        }
    }
}

/// Geometry applied to every rendered page.
///
/// Padding is in unscaled pixels; the padded page is then scaled as a whole
/// about `origin`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageGeometry {
    pub padding: Padding,
    pub scale_percent: u32,
    pub origin: TransformOrigin,
}

impl PageGeometry {
    /// Uniform scale factor (1.0 = 100%)
    pub fn scale(&self) -> f64 {
        self.scale_percent as f64 / 100.0
    }

    /// CSS transform, e.g. `scale(1.25)`
    pub fn css_transform(&self) -> String {
        format!("scale({})", self.scale())
    }
}

/// The user's margin and zoom inputs for the session
#[derive(Debug, Clone, Default)]
pub struct Viewport {
    margins: Margins,
    unit: Unit,
    zoom: ZoomState,
}

impl Viewport {
    pub fn new(margins: Margins, unit: Unit, zoom: ZoomState) -> Self {
        Self {
            margins,
            unit,
            zoom,
        }
    }

    pub fn margins(&self) -> &Margins {
        &self.margins
    }

    pub fn unit(&self) -> Unit {
        self.unit
    }

    pub fn zoom(&self) -> &ZoomState {
        &self.zoom
    }

    pub fn zoom_mut(&mut self) -> &mut ZoomState {
        &mut self.zoom
    }

    pub fn set_margin(&mut self, side: MarginSide, value: f64) -> Result<()> {
        self.margins.set(side, value).inspect_err(|err| {
            log::warn!("Keeping previous {:?} margin: {}", side, err);
        })
    }

    /// Set a margin from raw field text. Non-numeric text keeps the old value.
    pub fn set_margin_input(&mut self, side: MarginSide, input: &str) -> Result<()> {
        let value: f64 = input.trim().parse().map_err(|_| {
            log::warn!("Keeping previous {:?} margin: {:?} is not a number", side, input);
            Error::InvalidMargin(input.to_string())
        })?;
        self.set_margin(side, value)
    }

    /// Nudge a margin by whole `MARGIN_STEP`s, as the field's spinner does.
    ///
    /// The result snaps to the step grid; stepping below zero is rejected.
    pub fn step_margin(&mut self, side: MarginSide, steps: i32) -> Result<f64> {
        let current = (self.margins.get(side) / MARGIN_STEP).round();
        let value = (current + f64::from(steps)) * MARGIN_STEP;
        // Trim float noise such as 0.30000000000000004
        let value = (value * 1e6).round() / 1e6;
        self.set_margin(side, value)?;
        Ok(value)
    }

    /// Change the unit; margin values are kept as typed, not converted
    pub fn set_unit(&mut self, unit: Unit) {
        self.unit = unit;
    }

    pub fn set_unit_name(&mut self, name: &str) {
        self.set_unit(Unit::parse(name));
    }

    /// Per-side padding in pixels
    pub fn padding(&self) -> Padding {
        self.margins.to_pixels(self.unit)
    }

    pub fn page_geometry(&self) -> PageGeometry {
        PageGeometry {
            padding: self.padding(),
            scale_percent: self.zoom.percent(),
            origin: TransformOrigin::TopLeft,
        }
    }
}
