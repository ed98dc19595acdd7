//! Keyboard configuration.
//!
//! Every option is optional; missing ones take the defaults from
//! `renderer::constants`. Field names follow the camelCase spelling hosts
//! use in JSON (`keyWidth`, `blackKeyHeightRatio`, ...).

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::model::{KeyColorSet, LayoutParams};
use crate::renderer::constants::*;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct KeyboardOptions {
    /// Lowest note name, default "A0"
    pub lowest: Option<String>,
    /// Highest note name, default "C8"
    pub highest: Option<String>,
    pub key_stroke: Option<String>,
    pub white_key_fill: Option<String>,
    pub black_key_fill: Option<String>,
    pub white_key_highlight_fill: Option<String>,
    pub black_key_highlight_fill: Option<String>,
    pub keys_are_rounded: Option<bool>,
    pub key_width: Option<f64>,
    pub black_key_width: Option<f64>,
    pub black_key_height_ratio: Option<f64>,
    pub spacing: Option<f64>,
    pub key_stroke_width: Option<f64>,
}

impl KeyboardOptions {
    /// Decode options from a JSON object.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| Error::InvalidArgument(format!("keyboard options: {e}")))
    }

    /// Lowest bound name; a missing or empty value means the default.
    pub fn lowest(&self) -> &str {
        bound(&self.lowest, DEFAULT_LOWEST)
    }

    pub fn highest(&self) -> &str {
        bound(&self.highest, DEFAULT_HIGHEST)
    }

    pub fn colors(&self) -> KeyColorSet {
        fn or(value: &Option<String>, default: &str) -> String {
            value.clone().unwrap_or_else(|| default.to_string())
        }

        KeyColorSet {
            white_fill: or(&self.white_key_fill, DEFAULT_WHITE_FILL),
            white_highlight_fill: or(&self.white_key_highlight_fill, DEFAULT_WHITE_HIGHLIGHT_FILL),
            black_fill: or(&self.black_key_fill, DEFAULT_BLACK_FILL),
            black_highlight_fill: or(&self.black_key_highlight_fill, DEFAULT_BLACK_HIGHLIGHT_FILL),
            stroke: or(&self.key_stroke, DEFAULT_STROKE),
        }
    }

    /// Numeric layout parameters with defaults applied.
    ///
    /// Widths must be finite and positive; spacing and stroke width finite
    /// and non-negative. Black keys may be at most `keyWidth + spacing`
    /// wide. The black-key height ratio is checked by the layout engine.
    pub fn layout_params(&self) -> Result<LayoutParams> {
        let key_width = self.key_width.unwrap_or(DEFAULT_KEY_WIDTH);
        let black_key_width = self.black_key_width.unwrap_or(DEFAULT_BLACK_KEY_WIDTH);
        let spacing = self.spacing.unwrap_or(DEFAULT_SPACING);
        let stroke_width = self.key_stroke_width.unwrap_or(DEFAULT_STROKE_WIDTH);

        positive("keyWidth", key_width)?;
        positive("blackKeyWidth", black_key_width)?;
        non_negative("spacing", spacing)?;
        non_negative("keyStrokeWidth", stroke_width)?;
        black_keys_fit(black_key_width, key_width, spacing)?;

        let rounded = self.keys_are_rounded.unwrap_or(true);

        Ok(LayoutParams {
            key_width,
            black_key_width,
            key_height: KEY_HEIGHT,
            black_key_height_ratio: self
                .black_key_height_ratio
                .unwrap_or(DEFAULT_BLACK_KEY_HEIGHT_RATIO),
            spacing,
            stroke_width,
            corner_radius: if rounded { ROUNDED_KEY_RADIUS } else { 0.0 },
        })
    }
}

fn bound<'a>(value: &'a Option<String>, default: &'a str) -> &'a str {
    value.as_deref().filter(|name| !name.is_empty()).unwrap_or(default)
}

fn positive(option: &str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(Error::InvalidArgument(format!("{option} must be a positive number, got {value}")))
    }
}

/// Neighbouring black-key centres are `key_width + spacing` apart; wider
/// black keys would overlap each other.
pub(crate) fn black_keys_fit(black_key_width: f64, key_width: f64, spacing: f64) -> Result<()> {
    if black_key_width <= key_width + spacing {
        Ok(())
    } else {
        Err(Error::InvalidArgument(format!(
            "blackKeyWidth {black_key_width} must not exceed keyWidth + spacing ({})",
            key_width + spacing
        )))
    }
}

fn non_negative(option: &str, value: f64) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(Error::InvalidArgument(format!("{option} must not be negative, got {value}")))
    }
}
