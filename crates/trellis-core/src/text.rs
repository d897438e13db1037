//! Text measurement seam.
//!
//! Widgets never shape text themselves; they ask a [`TextMeasure`] for the
//! caret positions of a string. `Monospace` is enough for tests and bitmap
//! fonts, `trellis_text::ShapedText` does real shaping.

use unicode_segmentation::UnicodeSegmentation;

/// Caret geometry for a single line of text.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TextMetrics {
    /// positions[i] = advance up to the i-th grapheme (len == graphemes + 1)
    pub positions: Vec<f32>,
    /// byte_offsets[i] = byte index of the i-th grapheme (last == text.len())
    pub byte_offsets: Vec<usize>,
}

impl TextMetrics {
    /// Number of grapheme clusters measured.
    pub fn len(&self) -> usize {
        self.positions.len().saturating_sub(1)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn width(&self) -> f32 {
        self.positions.last().copied().unwrap_or(0.0)
    }

    /// Caret x for grapheme index `i`, clamped to the end of the line.
    pub fn x_at(&self, i: usize) -> f32 {
        self.positions
            .get(i)
            .or(self.positions.last())
            .copied()
            .unwrap_or(0.0)
    }

    pub fn byte_at(&self, i: usize) -> usize {
        self.byte_offsets
            .get(i)
            .or(self.byte_offsets.last())
            .copied()
            .unwrap_or(0)
    }
}

pub trait TextMeasure {
    fn measure(&self, text: &str) -> TextMetrics;
    fn line_height(&self) -> f32;
}

/// Fixed advance per grapheme cluster.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Monospace {
    pub advance: f32,
    pub line_height: f32,
}

impl Monospace {
    pub fn new(advance: f32, line_height: f32) -> Self {
        Self {
            advance,
            line_height,
        }
    }
}

impl Default for Monospace {
    fn default() -> Self {
        Self::new(8.0, 16.0)
    }
}

impl TextMeasure for Monospace {
    fn measure(&self, text: &str) -> TextMetrics {
        let mut positions = vec![0.0f32];
        let mut byte_offsets = vec![0usize];
        for (i, g) in text.grapheme_indices(true) {
            positions.push(positions.len() as f32 * self.advance);
            byte_offsets.push(i + g.len());
        }
        TextMetrics {
            positions,
            byte_offsets,
        }
    }

    fn line_height(&self) -> f32 {
        self.line_height
    }
}
