//! Keyboard renderer: converts a key layout into SVG output.
//!
//! The renderer draws white keys before black keys so the black keys
//! appear on top, and produces a self-contained SVG string sized only by
//! its viewBox.

pub(crate) mod constants;
pub mod layout;
mod svg_builder;

use svg_builder::SvgBuilder;

pub use layout::{compute_key_positions, compute_range, layout_keys, KeyboardLayout};

/// Render a computed layout into a complete SVG string.
pub fn render_keyboard_to_svg(layout: &KeyboardLayout) -> String {
    let mut svg = SvgBuilder::new(layout.width, layout.height);
    // `layout.keys` is already white-then-black
    for key in &layout.keys {
        svg.key(key);
    }
    svg.build()
}
