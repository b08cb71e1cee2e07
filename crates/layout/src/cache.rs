use crate::LabelError;
use labelforge_style::FontOptions;
use labelforge_traits::ShapeBackend;
use std::collections::HashMap;
use std::sync::RwLock;

/// Process-wide width measurement cache.
///
/// Shaped text does not reliably measure surrounding space, so whitespace
/// width is probed by rendering `"a<ws>a"` against `"aa"` at the target
/// height and taking the difference. Keys are `(text, height bits)`; values
/// are fully determined by their key, so the cache is never invalidated.
pub struct MeasurementCache {
    measurements: RwLock<HashMap<(String, u32), f32>>,
}

impl Default for MeasurementCache {
    fn default() -> Self {
        Self {
            measurements: RwLock::new(HashMap::new()),
        }
    }
}

impl MeasurementCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&self) {
        if let Ok(mut c) = self.measurements.write() {
            c.clear();
        }
    }

    /// Width of a whitespace run at the given line height.
    pub fn whitespace_width(
        &self,
        backend: &dyn ShapeBackend,
        font: &FontOptions,
        whitespace: &str,
        height: f32,
    ) -> Result<f32, LabelError> {
        let key = (whitespace.to_string(), height.to_bits());
        if let Ok(cache) = self.measurements.read()
            && let Some(width) = cache.get(&key)
        {
            return Ok(*width);
        }

        let glyph_height = font.allowed_height(height);
        let padded = backend.render_text(&format!("a{}a", whitespace), glyph_height, font)?;
        let bare = backend.render_text("aa", glyph_height, font)?;
        let width = (padded.size.width - bare.size.width).max(0.0);

        if let Ok(mut cache) = self.measurements.write() {
            cache.insert(key, width);
        }
        Ok(width)
    }
}
