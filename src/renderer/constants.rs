//! Shared constants for the keyboard renderer (all in SVG user units).

// ── Key geometry ────────────────────────────────────────────────────
pub(crate) const KEY_HEIGHT: f64 = 140.0;
pub(crate) const ROUNDED_KEY_RADIUS: f64 = 2.0;
pub(crate) const DEFAULT_KEY_WIDTH: f64 = 24.0;
pub(crate) const DEFAULT_BLACK_KEY_WIDTH: f64 = 14.0;
pub(crate) const DEFAULT_BLACK_KEY_HEIGHT_RATIO: f64 = 0.64286; // 90 of 140
pub(crate) const MIN_BLACK_KEY_HEIGHT_RATIO: f64 = 0.05;
pub(crate) const MAX_BLACK_KEY_HEIGHT_RATIO: f64 = 1.0;
pub(crate) const DEFAULT_SPACING: f64 = 0.0;
pub(crate) const DEFAULT_STROKE_WIDTH: f64 = 2.0;

// ── Range ───────────────────────────────────────────────────────────
pub(crate) const DEFAULT_LOWEST: &str = "A0";
pub(crate) const DEFAULT_HIGHEST: &str = "C8";

/// White keys per octave; the layout template repeats every 7 white keys.
pub(crate) const WHITE_KEYS_PER_OCTAVE: f64 = 7.0;

// ── Colors ──────────────────────────────────────────────────────────
pub(crate) const DEFAULT_STROKE: &str = "black";
pub(crate) const DEFAULT_WHITE_FILL: &str = "white";
pub(crate) const DEFAULT_WHITE_HIGHLIGHT_FILL: &str = "#00EA9C";
pub(crate) const DEFAULT_BLACK_FILL: &str = "black";
pub(crate) const DEFAULT_BLACK_HIGHLIGHT_FILL: &str = "#00CC88";
