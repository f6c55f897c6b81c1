//! Text measurement for dimension negotiation.
//!
//! Labels and buttons need the bounding box of their text before anything is
//! drawn. The host owns the font, so measurement goes through the
//! [`TextMeasurer`] trait. [`Metrics`] is the cheap, cloneable handle widgets
//! keep around.

use crate::primitives::Size;
use std::fmt;
use std::rc::Rc;

/// Backend-agnostic text measurement.
///
/// Returns the bounding box of a single line of text, matching what the host's
/// text primitive reports after drawing it.
pub trait TextMeasurer {
    fn measure_text(&self, text: &str) -> Size;
}

/// Fixed-advance bitmap font, the kind minimal engines ship with
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Monospace {
    pub glyph_width: i32,
    pub line_height: i32,
}

impl TextMeasurer for Monospace {
    fn measure_text(&self, text: &str) -> Size {
        let glyphs = text.chars().count() as i32;
        Size::new(glyphs * self.glyph_width, self.line_height)
    }
}

/// Shared handle to the active text measurer
#[derive(Clone)]
pub struct Metrics(Rc<dyn TextMeasurer>);

impl Metrics {
    pub fn new(measurer: impl TextMeasurer + 'static) -> Self {
        Self(Rc::new(measurer))
    }

    /// Metrics for a monospace font with the given glyph cell
    pub fn monospace(glyph_width: i32, line_height: i32) -> Self {
        Self::new(Monospace {
            glyph_width,
            line_height,
        })
    }

    pub fn measure(&self, text: &str) -> Size {
        self.0.measure_text(text)
    }
}

impl Default for Metrics {
    /// 8x8 bitmap font
    fn default() -> Self {
        Self::monospace(8, 8)
    }
}

impl fmt::Debug for Metrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Metrics").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_monospace_counts_chars_not_bytes() {
        let metrics = Metrics::monospace(6, 10);
        assert_eq!(metrics.measure("blabla"), Size::new(36, 10));
        assert_eq!(metrics.measure("äö"), Size::new(12, 10));
    }

    #[test]
    fn test_empty_text_keeps_line_height() {
        assert_eq!(Metrics::default().measure(""), Size::new(0, 8));
    }
}
