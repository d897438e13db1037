//! Shaped text measurement for Trellis widgets.
//!
//! `ShapedText` runs cosmic-text over a single unwrapped line and reports
//! caret positions on grapheme boundaries, so a field's cursor never lands
//! inside a cluster even when the shaper merges or splits glyphs.

use cosmic_text::{Attrs, Buffer, FontSystem, Metrics, Shaping};
use once_cell::sync::OnceCell;
use std::sync::{Mutex, MutexGuard};
use trellis_core::{TextMeasure, TextMetrics};
use unicode_segmentation::UnicodeSegmentation;

static FONTS: OnceCell<Mutex<FontSystem>> = OnceCell::new();

fn fonts() -> MutexGuard<'static, FontSystem> {
    FONTS
        .get_or_init(|| Mutex::new(FontSystem::new()))
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Measures text with the system fonts at a fixed pixel size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShapedText {
    pub px: f32,
    pub line_height: f32,
}

impl ShapedText {
    pub fn new(px: f32) -> Self {
        Self {
            px,
            line_height: px * 1.3,
        }
    }

    /// (byte end, right edge) of every shaped glyph, in visual order.
    fn glyph_edges(&self, text: &str) -> Vec<(usize, f32)> {
        let mut fs = fonts();
        let mut buf = Buffer::new(&mut fs, Metrics::new(self.px, self.line_height));
        {
            let mut b = buf.borrow_with(&mut fs);
            b.set_size(None, None);
            b.set_text(text, &Attrs::new(), Shaping::Advanced, None);
            b.shape_until_scroll(true);
        }

        let mut edges = Vec::new();
        for run in buf.layout_runs() {
            for g in run.glyphs {
                edges.push((g.end, g.x + g.w));
            }
        }
        edges
    }
}

impl TextMeasure for ShapedText {
    fn measure(&self, text: &str) -> TextMetrics {
        let edges = self.glyph_edges(text);
        snap_to_graphemes(text, &edges)
    }

    fn line_height(&self) -> f32 {
        self.line_height
    }
}

/// Folds glyph edges onto grapheme boundaries: the caret after a cluster sits
/// at the furthest right edge of any glyph that ends inside it.
fn snap_to_graphemes(text: &str, edges: &[(usize, f32)]) -> TextMetrics {
    let mut positions = vec![0.0f32];
    let mut byte_offsets = vec![0usize];
    let mut x = 0.0f32;
    for (i, g) in text.grapheme_indices(true) {
        let end = i + g.len();
        x = edges
            .iter()
            .filter(|(e, _)| *e > i && *e <= end)
            .map(|(_, right)| *right)
            .fold(x, f32::max);
        positions.push(x);
        byte_offsets.push(end);
    }
    TextMetrics {
        positions,
        byte_offsets,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snap_one_glyph_per_grapheme() {
        let m = snap_to_graphemes("ab", &[(1, 7.0), (2, 15.0)]);
        assert_eq!(m.positions, vec![0.0, 7.0, 15.0]);
        assert_eq!(m.byte_offsets, vec![0, 1, 2]);
    }

    #[test]
    fn test_snap_merges_cluster_glyphs() {
        // base + combining mark shaped as two glyphs, one cluster
        let t = "e\u{301}x";
        let m = snap_to_graphemes(t, &[(1, 8.0), (3, 8.5), (4, 16.0)]);
        assert_eq!(m.positions, vec![0.0, 8.5, 16.0]);
        assert_eq!(m.byte_offsets, vec![0, 3, 4]);
    }

    #[test]
    fn test_snap_without_glyphs_keeps_last_x() {
        let m = snap_to_graphemes("a b", &[(1, 6.0), (3, 14.0)]);
        assert_eq!(m.positions, vec![0.0, 6.0, 6.0, 14.0]);
        assert_eq!(m.byte_offsets.last(), Some(&3));
    }
}
