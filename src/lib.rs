//! Label specification mini-language and constrained layout engine.
//!
//! A label spec is plain text with `{...}` directives (bolts, nuts,
//! electronic symbols, glue, spacers), newlines for multiple lines and
//! `{L|R}` dividers for proportional columns. The engine parses the spec,
//! fits every line into its width budget with a box-and-glue model, and
//! retries the whole layout exactly once at a reduced height when the
//! content overflows. Geometry stays behind the [`ShapeBackend`] seam; only
//! measured bounding boxes feed layout decisions.

pub mod renderer;

pub use renderer::LabelRenderer;

pub use labelforge_layout::{
    Alignment, FragmentDescription, LabelError, LayoutElement, LayoutResult, MeasurementCache,
    PositionedElement, Registry, RenderSession, ShapeElement, SpecError, TextElement,
};
pub use labelforge_style::{
    BoltFeatures, Drive, FontOptions, FontStyle, HeadShape, RenderOptions,
};
pub use labelforge_traits::{
    BackendError, FixedMetrics, InMemoryCatalog, ShapeBackend, ShapeRequest, Sketch,
    SymbolCatalog, SymbolEntry,
};
pub use labelforge_types::{Color, Rect, Size};

use thiserror::Error as ThisError;

/// Top-level error for the integration layer.
#[derive(ThisError, Debug)]
pub enum Error {
    #[error(transparent)]
    Label(#[from] LabelError),

    #[error("Symbol manifest error: {0}")]
    Manifest(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Got {got} labels for {slots} division slot(s)")]
    TooManyLabels { got: usize, slots: usize },
}

/// Load a symbol catalog from a JSON manifest: an array of entries with
/// `id`, `name`, `category`, `standard` and `filename` fields.
pub fn catalog_from_json(json: &str) -> Result<InMemoryCatalog, Error> {
    let entries: Vec<SymbolEntry> = serde_json::from_str(json)?;
    Ok(InMemoryCatalog::new(entries))
}

/// Load a symbol catalog from a JSON manifest file.
pub fn catalog_from_path(path: &std::path::Path) -> Result<InMemoryCatalog, Error> {
    catalog_from_json(&std::fs::read_to_string(path)?)
}

/// Initialize the logging implementation from `RUST_LOG`. Safe to call more
/// than once; later calls are no-ops.
pub fn init_logging() {
    let _ = env_logger::Builder::from_default_env().try_init();
}
