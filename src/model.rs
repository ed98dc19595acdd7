//! Data model for a rendered keyboard.
//!
//! These structures describe the geometry and colors of every key and
//! the information handed to click callbacks.

use serde::{Deserialize, Serialize};

/// Chromatic note number, 0 = C0.
pub type Note = i32;

/// Natural (white) or accidental (black) key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyKind {
    White,
    Black,
}

impl KeyKind {
    pub fn of(note: Note) -> Self {
        if crate::note::is_black_key(note) {
            KeyKind::Black
        } else {
            KeyKind::White
        }
    }

    /// CSS class put on the rendered `<rect>`.
    pub fn class_name(self) -> &'static str {
        match self {
            KeyKind::White => "white-key",
            KeyKind::Black => "black-key",
        }
    }
}

/// Fill and stroke colors of one keyboard. Fixed once the keyboard is built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyColorSet {
    pub white_fill: String,
    pub white_highlight_fill: String,
    pub black_fill: String,
    pub black_highlight_fill: String,
    /// Stroke color shared by all keys
    pub stroke: String,
}

impl KeyColorSet {
    /// Base (non-highlighted) fill for a key kind.
    pub fn base_fill(&self, kind: KeyKind) -> &str {
        match kind {
            KeyKind::White => &self.white_fill,
            KeyKind::Black => &self.black_fill,
        }
    }

    pub fn highlight_fill(&self, kind: KeyKind) -> &str {
        match kind {
            KeyKind::White => &self.white_highlight_fill,
            KeyKind::Black => &self.black_highlight_fill,
        }
    }
}

/// Numeric layout configuration, all in SVG user units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayoutParams {
    /// Width of a white key
    pub key_width: f64,
    pub black_key_width: f64,
    /// Height of a white key
    pub key_height: f64,
    /// Black key height as a fraction of `key_height`, in [0.05, 1.0]
    pub black_key_height_ratio: f64,
    /// Gap between adjacent white keys
    pub spacing: f64,
    pub stroke_width: f64,
    pub corner_radius: f64,
}

/// One rendered key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyRect {
    pub note: Note,
    pub kind: KeyKind,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub corner_radius: f64,
    pub stroke: String,
    pub stroke_width: f64,
    /// Current fill; the only field that changes after construction
    pub fill: String,
}

impl KeyRect {
    /// Whether a point in viewBox units falls inside the key.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.x && x <= self.x + self.width && y >= self.y && y <= self.y + self.height
    }
}

/// Identity of a clicked key, passed to the click callback.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyClick {
    pub note: Note,
    /// Canonical name, e.g. "Db4"
    pub name: String,
}

/// A pointer click as reported by the host surface.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClickEvent {
    /// `id` of the element that received the click, if the host knows it
    pub target: Option<String>,
    /// Pointer position in viewBox units
    pub x: f64,
    pub y: f64,
}

impl ClickEvent {
    /// Click on a known element (the `id` of a rendered `<rect>`).
    pub fn on_target(target: impl Into<String>) -> Self {
        Self {
            target: Some(target.into()),
            ..Self::default()
        }
    }

    /// Click at a position, to be resolved by hit testing.
    pub fn at(x: f64, y: f64) -> Self {
        Self { target: None, x, y }
    }
}
