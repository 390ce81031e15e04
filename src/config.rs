//! Session configuration

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::layout::{Margins, Unit, Viewport, ZoomState, DEFAULT_ZOOM_PERCENT, ZOOM_PRESETS};

/// Initial viewport settings for a pager session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PagerConfig {
    pub margins: Margins,
    pub margin_unit: Unit,
    pub zoom_percent: u32,
    pub zoom_fill: bool,
    pub zoom_presets: Vec<u32>,
}

impl Default for PagerConfig {
    fn default() -> Self {
        Self {
            margins: Margins::default(),
            margin_unit: Unit::Inch,
            zoom_percent: DEFAULT_ZOOM_PERCENT,
            zoom_fill: false,
            zoom_presets: ZOOM_PRESETS.to_vec(),
        }
    }
}

impl PagerConfig {
    /// Load from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Build the viewport this config describes
    pub fn viewport(&self) -> Viewport {
        let mut zoom = ZoomState::new(self.zoom_percent);
        zoom.set_fill(self.zoom_fill);
        Viewport::new(self.margins, self.margin_unit, zoom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PagerConfig::default();
        assert_eq!(config.margins, Margins::uniform(1.0));
        assert_eq!(config.margin_unit, Unit::Inch);
        assert_eq!(config.zoom_presets, vec![50, 75, 100, 125, 150, 200]);
    }

    #[test]
    fn test_partial_json() {
        let config = PagerConfig::from_json(r#"{"marginUnit":"cm","zoomPercent":150}"#).unwrap();
        assert_eq!(config.margin_unit, Unit::Centimeter);
        assert_eq!(config.zoom_percent, 150);
        assert_eq!(config.margins, Margins::default());

        let viewport = config.viewport();
        assert_eq!(viewport.zoom().percent(), 150);
    }

    #[test]
    fn test_invalid_json() {
        assert!(PagerConfig::from_json("[").is_err());
    }
}
