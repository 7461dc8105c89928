//! Tuning constants for the pinch-zoom text widget.
//!
//! The host page may embed a JSON object in
//! `<script id="pinch-zoom-config" type="application/json">`; missing fields
//! fall back to the defaults below.

use serde::Deserialize;

use crate::error::ConfigError;

pub const CONFIG_ELEMENT_ID: &str = "pinch-zoom-config";

/// Pixels of finger travel per doubling of the scale ratio.
pub const DEFAULT_STEP: f32 = 200.0;
pub const DEFAULT_BASE_FONT_SIZE: f32 = 13.0;
pub const DEFAULT_MIN_RATIO: f32 = 0.1;
pub const DEFAULT_MAX_RATIO: f32 = 1024.0;

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct ZoomConfig {
    pub step: f32,
    pub base_font_size: f32,
    pub min_ratio: f32,
    pub max_ratio: f32,
    pub zoom_enabled: bool,
}

impl Default for ZoomConfig {
    fn default() -> Self {
        Self {
            step: DEFAULT_STEP,
            base_font_size: DEFAULT_BASE_FONT_SIZE,
            min_ratio: DEFAULT_MIN_RATIO,
            max_ratio: DEFAULT_MAX_RATIO,
            zoom_enabled: true,
        }
    }
}

impl ZoomConfig {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let cfg: ZoomConfig = serde_json::from_str(raw)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.step.is_finite() || self.step <= 0.0 {
            return Err(ConfigError::InvalidStep(self.step));
        }
        if !self.base_font_size.is_finite() || self.base_font_size <= 0.0 {
            return Err(ConfigError::InvalidBaseFontSize(self.base_font_size));
        }
        // NaN fails both comparisons, so check the positive form.
        if !(self.min_ratio > 0.0 && self.min_ratio <= self.max_ratio && self.max_ratio.is_finite())
        {
            return Err(ConfigError::InvalidRatioBounds {
                min: self.min_ratio,
                max: self.max_ratio,
            });
        }
        Ok(())
    }

    /// Reads the embedded config from the current document, if any.
    pub fn load_from_document() -> Self {
        let raw = web_sys::window()
            .and_then(|win| win.document())
            .and_then(|doc| doc.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content());
        let Some(raw) = raw else {
            log::debug!("no #{} element, using default zoom config", CONFIG_ELEMENT_ID);
            return Self::default();
        };
        match Self::from_json(&raw) {
            Ok(cfg) => {
                log::info!("loaded zoom config: {:?}", cfg);
                cfg
            }
            Err(err) => {
                log::warn!("ignoring zoom config: {}", err);
                Self::default()
            }
        }
    }
}
