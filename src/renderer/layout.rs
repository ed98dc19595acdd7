//! Layout computation: turns a note range into positioned key rectangles.
//!
//! Key x-positions come from a one-octave template that repeats every
//! seven white keys. White keys sit edge to edge (plus `spacing`); each
//! black key is centered on the gap after the white key preceding it.

use serde::Serialize;

use super::constants::*;
use crate::error::{Error, Result};
use crate::model::{KeyColorSet, KeyKind, KeyRect, LayoutParams, Note};
use crate::note::{is_black_key, is_white_key, octave, parse_note_name, pitch_class};
use crate::options::black_keys_fit;

// ═══════════════════════════════════════════════════════════════════════
// Layout structures
// ═══════════════════════════════════════════════════════════════════════

/// Every key of a keyboard, in draw order, plus the drawing surface size.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KeyboardLayout {
    pub lowest: Note,
    pub highest: Note,
    /// White keys first (ascending), then black keys (ascending)
    pub keys: Vec<KeyRect>,
    pub white_key_count: usize,
    pub width: f64,
    pub height: f64,
}

impl KeyboardLayout {
    pub fn white_keys(&self) -> &[KeyRect] {
        &self.keys[..self.white_key_count]
    }

    pub fn black_keys(&self) -> &[KeyRect] {
        &self.keys[self.white_key_count..]
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Range
// ═══════════════════════════════════════════════════════════════════════

/// Parse and normalize the keyboard bounds so both ends are white keys.
///
/// A black lowest note moves down a semitone, a black highest note moves
/// up one. The lowest note is clamped to 0.
pub fn compute_range(lowest: &str, highest: &str) -> Result<(Note, Note)> {
    let mut low = parse_note_name(lowest)?;
    if is_black_key(low) {
        low -= 1;
    }
    low = low.max(0);

    let mut high = parse_note_name(highest)?;
    if is_black_key(high) {
        high += 1;
    }

    if high < low {
        return Err(Error::Range(format!(
            "highest note {highest} must not be lower than lowest note {lowest}"
        )));
    }
    Ok((low, high))
}

// ═══════════════════════════════════════════════════════════════════════
// Octave template
// ═══════════════════════════════════════════════════════════════════════

/// Nearest white pitch class below `pc` within the octave.
fn previous_white(pc: usize) -> usize {
    (0..pc).rev().find(|&k| is_white_key(k as Note)).unwrap_or(0)
}

/// X-offset of each pitch class within one octave.
pub fn compute_key_positions(
    white_key_width: f64,
    black_key_width: f64,
    spacing: f64,
    stroke_width: f64,
) -> [f64; 12] {
    let mut positions = [0.0; 12];
    positions[0] = stroke_width / 2.0;
    for pc in 1..12 {
        let prev = positions[previous_white(pc)];
        positions[pc] = if is_white_key(pc as Note) {
            prev + white_key_width + spacing
        } else {
            prev + white_key_width - black_key_width / 2.0 + spacing / 2.0
        };
    }
    positions
}

/// Width of one octave: seven white keys and their gaps.
fn octave_width(params: &LayoutParams) -> f64 {
    WHITE_KEYS_PER_OCTAVE * (params.key_width + params.spacing)
}

fn absolute_x(note: Note, template: &[f64; 12], params: &LayoutParams) -> f64 {
    octave_width(params) * octave(note) as f64 + template[pitch_class(note) as usize]
}

// ═══════════════════════════════════════════════════════════════════════
// Main layout computation
// ═══════════════════════════════════════════════════════════════════════

/// Position every key in `lowest..=highest`.
///
/// The lowest key's left edge is placed at `stroke_width / 2` so its stroke
/// starts at the surface's left border. Black keys wider than
/// `key_width + spacing` are rejected since neighbours would overlap.
pub fn layout_keys(
    lowest: Note,
    highest: Note,
    params: &LayoutParams,
    colors: &KeyColorSet,
) -> Result<KeyboardLayout> {
    let ratio = params.black_key_height_ratio;
    if !(MIN_BLACK_KEY_HEIGHT_RATIO..=MAX_BLACK_KEY_HEIGHT_RATIO).contains(&ratio) {
        return Err(Error::Range(format!(
            "invalid height ratio for black keys: {ratio} (expected {MIN_BLACK_KEY_HEIGHT_RATIO} to {MAX_BLACK_KEY_HEIGHT_RATIO})"
        )));
    }
    if highest < lowest {
        return Err(Error::Range(format!(
            "highest note {highest} must not be lower than lowest note {lowest}"
        )));
    }
    black_keys_fit(params.black_key_width, params.key_width, params.spacing)?;

    let black_key_height = (params.key_height * ratio).round();
    let template = compute_key_positions(
        params.key_width,
        params.black_key_width,
        params.spacing,
        params.stroke_width,
    );
    let offset = absolute_x(lowest, &template, params) - params.stroke_width / 2.0;
    let top = params.stroke_width / 2.0;

    let mut white = Vec::new();
    let mut black = Vec::new();

    for note in lowest..=highest {
        let kind = KeyKind::of(note);
        let (width, height) = match kind {
            KeyKind::White => (params.key_width, params.key_height),
            KeyKind::Black => (params.black_key_width, black_key_height),
        };
        let key = KeyRect {
            note,
            kind,
            x: absolute_x(note, &template, params) - offset,
            y: top,
            width,
            height,
            corner_radius: params.corner_radius,
            stroke: colors.stroke.clone(),
            stroke_width: params.stroke_width,
            fill: colors.base_fill(kind).to_string(),
        };
        match kind {
            KeyKind::White => white.push(key),
            KeyKind::Black => black.push(key),
        }
    }

    let white_key_count = white.len();
    let width = params.stroke_width + (params.key_width + params.spacing) * white_key_count as f64
        - params.spacing;
    let height = params.stroke_width + params.key_height;

    let mut keys = white;
    keys.append(&mut black);

    Ok(KeyboardLayout {
        lowest,
        highest,
        keys,
        white_key_count,
        width,
        height,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn default_params() -> LayoutParams {
        LayoutParams {
            key_width: 24.0,
            black_key_width: 14.0,
            key_height: 140.0,
            black_key_height_ratio: 0.64286,
            spacing: 0.0,
            stroke_width: 2.0,
            corner_radius: 2.0,
        }
    }

    fn colors() -> KeyColorSet {
        KeyColorSet {
            white_fill: "white".into(),
            white_highlight_fill: "#00EA9C".into(),
            black_fill: "black".into(),
            black_highlight_fill: "#00CC88".into(),
            stroke: "black".into(),
        }
    }

    #[test]
    fn octave_template_for_default_sizes() {
        assert_eq!(
            compute_key_positions(24.0, 14.0, 0.0, 2.0),
            [1.0, 18.0, 25.0, 42.0, 49.0, 73.0, 90.0, 97.0, 114.0, 121.0, 138.0, 145.0]
        );
    }

    #[test]
    fn spacing_widens_gaps_and_recenters_black_keys() {
        let t = compute_key_positions(20.0, 10.0, 4.0, 0.0);
        assert_eq!(t[0], 0.0);
        assert_eq!(t[2], 24.0);
        // centered on the 4-unit gap between C and D: gap midpoint 22
        assert_eq!(t[1] + 5.0, 22.0);
    }

    #[test]
    fn range_normalizes_black_bounds() {
        assert_eq!(compute_range("A0", "C8"), Ok((9, 96)));
        assert_eq!(compute_range("C#4", "F#4"), Ok((48, 55)));
        assert_eq!(compute_range("Cb0", "C1"), Ok((0, 12)));
        assert_eq!(compute_range("C0", "Db0"), Ok((0, 2)));
    }

    #[test]
    fn range_rejects_inverted_bounds() {
        assert!(matches!(compute_range("C4", "B3"), Err(Error::Range(_))));
        assert!(matches!(compute_range("C0", "Cb0"), Err(Error::Range(_))));
    }

    #[test]
    fn single_key_range() {
        let layout = layout_keys(48, 48, &default_params(), &colors()).unwrap();
        assert_eq!(layout.keys.len(), 1);
        assert_eq!(layout.keys[0].x, 1.0);
        assert_eq!(layout.width, 26.0);
        assert_eq!(layout.height, 142.0);
    }

    #[test]
    fn default_keyboard_geometry() {
        let layout = layout_keys(9, 96, &default_params(), &colors()).unwrap();
        assert_eq!(layout.keys.len(), 88);
        assert_eq!(layout.white_key_count, 52);
        assert_eq!(layout.width, 1250.0);
        assert_eq!(layout.height, 142.0);

        let a0 = &layout.white_keys()[0];
        assert_eq!((a0.note, a0.x, a0.y), (9, 1.0, 1.0));

        let bb0 = &layout.black_keys()[0];
        assert_eq!((bb0.note, bb0.x, bb0.height, bb0.width), (10, 18.0, 90.0, 14.0));

        let c1 = layout.white_keys().iter().find(|k| k.note == 12).unwrap();
        assert_eq!(c1.x, 49.0);

        let c8 = layout.white_keys().last().unwrap();
        assert_eq!(c8.note, 96);
        assert_eq!(c8.x + c8.width + c8.stroke_width / 2.0, layout.width);
    }

    #[test]
    fn black_keys_wider_than_their_pitch_are_rejected() {
        let params = LayoutParams { black_key_width: 30.0, ..default_params() };
        assert!(matches!(
            layout_keys(48, 52, &params, &colors()),
            Err(Error::InvalidArgument(_))
        ));

        let params = LayoutParams { black_key_width: 24.0, ..default_params() };
        let layout = layout_keys(48, 52, &params, &colors()).unwrap();
        let (db, eb) = (&layout.black_keys()[0], &layout.black_keys()[1]);
        assert_eq!(db.x + db.width, eb.x);
    }

    #[test]
    fn ratio_out_of_bounds() {
        for ratio in [0.0, 0.049, 1.01, 1.5, f64::NAN] {
            let params = LayoutParams { black_key_height_ratio: ratio, ..default_params() };
            assert!(
                matches!(layout_keys(9, 96, &params, &colors()), Err(Error::Range(_))),
                "ratio {ratio} should be rejected"
            );
        }
        let params = LayoutParams { black_key_height_ratio: 1.0, ..default_params() };
        let layout = layout_keys(0, 2, &params, &colors()).unwrap();
        assert_eq!(layout.black_keys()[0].height, 140.0);
    }
}
