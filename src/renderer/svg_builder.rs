//! SVG builder: accumulates key rectangles and produces the final string.

use crate::model::KeyRect;

// ═══════════════════════════════════════════════════════════════════════
// SvgBuilder
// ═══════════════════════════════════════════════════════════════════════

pub(super) struct SvgBuilder {
    elements: Vec<String>,
    width: f64,
    height: f64,
}

impl SvgBuilder {
    pub(super) fn new(width: f64, height: f64) -> Self {
        Self {
            elements: Vec::new(),
            width,
            height,
        }
    }

    /// Only a viewBox is set, so the host decides the displayed size.
    pub(super) fn build(self) -> String {
        let mut svg = format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {} {}">"#,
            self.width, self.height
        );
        svg.push('\n');
        for el in &self.elements {
            svg.push_str("  ");
            svg.push_str(el);
            svg.push('\n');
        }
        svg.push_str("</svg>\n");
        svg
    }

    pub(super) fn key(&mut self, key: &KeyRect) {
        self.elements.push(format!(
            r#"<rect id="{}" class="{}" x="{}" y="{}" width="{}" height="{}" rx="{}" ry="{}" stroke="{}" stroke-width="{}" fill="{}"/>"#,
            key.note,
            key.kind.class_name(),
            key.x,
            key.y,
            key.width,
            key.height,
            key.corner_radius,
            key.corner_radius,
            escape_attr(&key.stroke),
            key.stroke_width,
            escape_attr(&key.fill),
        ));
    }
}

/// Escape a user-supplied value for use inside a double-quoted attribute.
pub(super) fn escape_attr(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
