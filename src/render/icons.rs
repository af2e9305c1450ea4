//! Inline SVG icons

use crate::theme::Color;

use super::tree::Svg;

/// Calendar glyph stroked in `stroke`
pub fn calendar(stroke: Color) -> Svg {
    Svg {
        src: format!(
            concat!(
                r#"<svg xmlns="http://www.w3.org/2000/svg" width="20" height="20" viewBox="0 0 24 24" "#,
                r#"fill="none" stroke="{}" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">"#,
                r#"<path d="M8 2v4"/><path d="M16 2v4"/><rect width="18" height="18" x="3" y="4" rx="2"/>"#,
                r#"<path d="M3 10h18"/></svg>"#
            ),
            stroke.hex()
        ),
    }
}
