//! Font-support probe
//!
//! Decides whether the reader's system can render a glyph at all, using the
//! blank-fallback trick: the glyph is measured against a font stack ending
//! in a fully blank font, so an unsupported character comes back with zero
//! advance width. Results are cached per character; the measurement surface
//! is the host's business.

use std::collections::HashMap;

/// Stack the probe measures against; the blank font swallows anything the
/// system cannot render
pub const TEST_FONT_STACK: &str = "sans-serif, AdobeBlank";

/// Host-side measurement of one glyph under the probe font stack
pub trait GlyphMeasure {
    /// Rendered advance width of `ch`; zero means unsupported
    fn advance_width(&mut self, ch: char) -> f64;
}

/// Cached per-character support answers
pub struct SupportProbe<M: GlyphMeasure> {
    measure: M,
    cache: HashMap<char, bool>,
}

impl<M: GlyphMeasure> SupportProbe<M> {
    pub fn new(measure: M) -> Self {
        Self {
            measure,
            cache: HashMap::new(),
        }
    }

    /// Whether any system font covers this character
    pub fn is_supported(&mut self, ch: char) -> bool {
        if let Some(&supported) = self.cache.get(&ch) {
            return supported;
        }
        let supported = self.measure.advance_width(ch) > 0.0;
        self.cache.insert(ch, supported);
        supported
    }

    /// Number of characters measured so far
    pub fn probed(&self) -> usize {
        self.cache.len()
    }
}

#[cfg(test)]
#[path = "probe_tests.rs"]
mod probe_tests;
