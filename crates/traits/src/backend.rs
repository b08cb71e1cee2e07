//! ShapeBackend trait for abstracting geometry generation.
//!
//! The layout engine never builds geometry itself. Fragments hand the
//! backend a structured request and get back an opaque sketch with a
//! measured bounding box; only that bounding box feeds layout decisions.

use labelforge_style::{BoltFeatures, Drive, FontOptions};
use labelforge_types::Size;
use std::any::Any;
use std::collections::HashMap;
use std::fmt::Debug;
use std::sync::Arc;
use thiserror::Error;

/// Error type for backend rendering operations.
#[derive(Error, Debug, Clone)]
pub enum BackendError {
    #[error("Backend does not know shape '{0}'")]
    UnknownShape(String),

    #[error("Failed to render '{shape}': {message}")]
    RenderFailed { shape: String, message: String },

    #[error("Backend does not support this request: {0}")]
    Unsupported(String),
}

/// Opaque geometry payload produced by a backend (reference-counted so
/// rendered sketches stay cheap to move through the layout tree).
pub type SharedSketchData = Arc<dyn Any + Send + Sync>;

/// A rendered shape: an opaque payload plus its measured bounding box.
#[derive(Clone)]
pub struct Sketch {
    pub size: Size,
    pub data: Option<SharedSketchData>,
}

impl Sketch {
    pub fn new(size: Size, data: SharedSketchData) -> Self {
        Self {
            size,
            data: Some(data),
        }
    }

    /// A sketch that carries a bounding box but no geometry.
    pub fn sized(size: Size) -> Self {
        Self { size, data: None }
    }
}

impl Debug for Sketch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Sketch")
            .field("size", &self.size)
            .field("has_data", &self.data.is_some())
            .finish()
    }
}

/// Structured geometry request built by a fragment.
#[derive(Debug, Clone, PartialEq)]
pub enum ShapeRequest {
    /// A named built-in shape (hexnut, washer, magnet, ...), optionally with
    /// drive recesses cut out of it.
    Named { name: String, drives: Vec<Drive> },
    /// Variable-length bolt in the style of pred-box labels. The thread is
    /// drawn broken when `length` exceeds the available width.
    Bolt {
        length: f32,
        features: BoltFeatures,
        slotted: bool,
        flanged: bool,
    },
    /// Fixed-aspect bolt incorporating its drive recess.
    Webbolt { features: BoltFeatures },
    /// Axis-aligned filled box of explicit dimensions.
    Box { width: f32, height: f32 },
    /// Dimension indicator spanning the full available width.
    Measure,
    /// A catalog symbol resolved to a concrete manifest entry.
    Symbol { id: String, filename: String },
}

impl ShapeRequest {
    /// Short name used in log and error messages.
    pub fn describe(&self) -> String {
        match self {
            ShapeRequest::Named { name, .. } => name.clone(),
            ShapeRequest::Bolt { .. } => "bolt".to_string(),
            ShapeRequest::Webbolt { .. } => "webbolt".to_string(),
            ShapeRequest::Box { .. } => "box".to_string(),
            ShapeRequest::Measure => "measure".to_string(),
            ShapeRequest::Symbol { id, .. } => format!("symbol:{}", id),
        }
    }
}

/// A trait for producing geometry with measured bounding boxes.
///
/// Implementations must be deterministic: identical inputs yield sketches
/// with identical bounding boxes. The layout engine probes whitespace widths
/// by rendering text pairs through this trait and diffing their widths, so
/// nondeterministic metrics would break measurement caching.
pub trait ShapeBackend: Send + Sync + Debug {
    /// Render a text run at the given glyph height.
    fn render_text(
        &self,
        text: &str,
        height_mm: f32,
        font: &FontOptions,
    ) -> Result<Sketch, BackendError>;

    /// Render a structured shape request. `max_width_mm` is the width budget
    /// the fragment was handed; fixed-size shapes may ignore it.
    fn render_shape(
        &self,
        request: &ShapeRequest,
        height_mm: f32,
        max_width_mm: f32,
    ) -> Result<Sketch, BackendError>;
}

/// Deterministic metrics-only backend.
///
/// Produces no geometry, only bounding boxes computed from fixed per-glyph
/// advances. Useful for tests and for dry-run measurement where a real CAD
/// kernel is not available.
#[derive(Debug, Clone)]
pub struct FixedMetrics {
    /// Glyph advance as a fraction of glyph height.
    pub glyph_advance: f32,
    /// Space advance as a fraction of glyph height.
    pub space_advance: f32,
    /// Per-name width/height factors for named shapes, relative to the
    /// requested height. Names absent from the map render as squares.
    symbol_factors: HashMap<String, (f32, f32)>,
}

impl Default for FixedMetrics {
    fn default() -> Self {
        Self {
            glyph_advance: 0.6,
            space_advance: 0.3,
            symbol_factors: HashMap::new(),
        }
    }
}

impl FixedMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the rendered size of a named shape, in multiples of the
    /// requested height.
    pub fn with_symbol_factors(mut self, name: &str, width: f32, height: f32) -> Self {
        self.symbol_factors
            .insert(name.to_string(), (width, height));
        self
    }

    fn text_width(&self, text: &str, height: f32) -> f32 {
        text.chars()
            .map(|c| {
                if c == '\t' {
                    self.space_advance * 4.0
                } else if c.is_whitespace() {
                    self.space_advance
                } else {
                    self.glyph_advance
                }
            })
            .sum::<f32>()
            * height
    }
}

impl ShapeBackend for FixedMetrics {
    fn render_text(
        &self,
        text: &str,
        height_mm: f32,
        _font: &FontOptions,
    ) -> Result<Sketch, BackendError> {
        Ok(Sketch::sized(Size::new(
            self.text_width(text, height_mm),
            height_mm,
        )))
    }

    fn render_shape(
        &self,
        request: &ShapeRequest,
        height_mm: f32,
        max_width_mm: f32,
    ) -> Result<Sketch, BackendError> {
        let size = match request {
            ShapeRequest::Named { name, .. } => {
                let (wf, hf) = self
                    .symbol_factors
                    .get(name.as_str())
                    .copied()
                    .unwrap_or((1.0, 1.0));
                Size::new(height_mm * wf, height_mm * hf)
            }
            ShapeRequest::Bolt { length, .. } => {
                // Head is one line-width wide; a longer thread is broken at
                // the width budget.
                let line_width = height_mm / 2.25;
                Size::new((length + line_width).min(max_width_mm), height_mm)
            }
            ShapeRequest::Webbolt { .. } => Size::new(1.456 * height_mm, height_mm),
            ShapeRequest::Box { width, height } => Size::new(*width, *height),
            ShapeRequest::Measure => Size::new(max_width_mm, height_mm),
            ShapeRequest::Symbol { .. } => Size::new(height_mm, height_mm),
        };
        Ok(Sketch::sized(size))
    }
}
