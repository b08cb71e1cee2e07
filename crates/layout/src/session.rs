use crate::LabelError;
use crate::cache::MeasurementCache;
use crate::registry::Registry;
use labelforge_style::RenderOptions;
use labelforge_traits::{ShapeBackend, SymbolCatalog};
use labelforge_types::Color;

/// Mutable per-line style state, adjusted by modifier directives
/// (`{color(...)}`, `{scale(...)}`) and applied to subsequent fragments.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleContext {
    pub color: Color,
    pub scale: f32,
}

impl StyleContext {
    pub fn from_options(options: &RenderOptions) -> Self {
        Self {
            color: options.color.clone(),
            scale: 1.0,
        }
    }
}

/// Everything a render needs, passed by reference through parser, splitter
/// and fitter. There is no global mutable state; the only shared resource is
/// the measurement cache.
pub struct RenderSession<'a> {
    pub backend: &'a dyn ShapeBackend,
    pub catalog: &'a dyn SymbolCatalog,
    pub registry: &'a Registry,
    pub options: &'a RenderOptions,
    pub cache: &'a MeasurementCache,
}

impl<'a> RenderSession<'a> {
    pub fn new(
        backend: &'a dyn ShapeBackend,
        catalog: &'a dyn SymbolCatalog,
        registry: &'a Registry,
        options: &'a RenderOptions,
        cache: &'a MeasurementCache,
    ) -> Self {
        Self {
            backend,
            catalog,
            registry,
            options,
            cache,
        }
    }

    pub fn whitespace_width(&self, whitespace: &str, height: f32) -> Result<f32, LabelError> {
        self.cache
            .whitespace_width(self.backend, &self.options.font, whitespace, height)
    }
}
