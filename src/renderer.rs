//! The integration facade: owns the backend, catalog, registry and options,
//! and drives column splitting plus per-column multiline rendering.

use crate::Error;
use labelforge_layout::{
    FragmentDescription, LayoutResult, MeasurementCache, Registry, RenderSession, Size,
    column_widths, render_area, split_columns,
};
use labelforge_style::RenderOptions;
use labelforge_traits::{ShapeBackend, SymbolCatalog};
use log::debug;

/// Renders label specs into placed elements, relative to the area center.
///
/// The renderer owns the collaborating pieces and lends them out per render
/// call as a [`RenderSession`]; the measurement cache persists across calls
/// so repeated renders of similar labels skip their whitespace probes.
pub struct LabelRenderer<B, C> {
    backend: B,
    catalog: C,
    registry: Registry,
    options: RenderOptions,
    cache: MeasurementCache,
}

impl<B: ShapeBackend, C: SymbolCatalog> LabelRenderer<B, C> {
    pub fn new(backend: B, catalog: C) -> Self {
        Self::with_options(backend, catalog, RenderOptions::default())
    }

    pub fn with_options(backend: B, catalog: C, options: RenderOptions) -> Self {
        Self {
            backend,
            catalog,
            registry: Registry::builtin(),
            options,
            cache: MeasurementCache::new(),
        }
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// The built-in fragment table, for help output and documentation.
    pub fn fragment_descriptions(&self) -> Vec<FragmentDescription> {
        self.registry.description_table()
    }

    fn session(&self) -> RenderSession<'_> {
        RenderSession::new(
            &self.backend,
            &self.catalog,
            &self.registry,
            &self.options,
            &self.cache,
        )
    }

    /// Render one label spec into the given area.
    ///
    /// The spec is split into columns on divider directives; each column
    /// renders its lines independently and is offset to its slot. Element
    /// coordinates in the result are relative to the area center.
    pub fn render(&self, spec: &str, area: Size) -> Result<LayoutResult, Error> {
        let session = self.session();
        let (columns, proportions) = split_columns(spec)?;
        let widths = column_widths(&proportions, area.width, self.options.column_gap_mm);
        debug!(
            "rendering label into {:.2}x{:.2} as {} column(s)",
            area.width,
            area.height,
            columns.len()
        );

        let mut elements = Vec::new();
        let mut rescaled = false;
        let mut x = -area.width / 2.0;
        for (column, width) in columns.iter().zip(&widths) {
            let result = render_area(&column.lines, Size::new(*width, area.height), &session)?;
            rescaled |= result.rescaled;
            let center = x + width / 2.0;
            elements.extend(result.elements.into_iter().map(|mut element| {
                element.x += center;
                element
            }));
            x += width + self.options.column_gap_mm;
        }

        Ok(LayoutResult {
            elements,
            size: area,
            rescaled,
        })
    }

    /// Render several labels into one area divided into equal slots.
    ///
    /// The area is shrunk by the configured margin on all sides, then split
    /// into `divisions` slots left to right; each label renders centered in
    /// its slot. Blank specs yield empty slots, not errors.
    pub fn render_divided(
        &self,
        labels: &[&str],
        area: Size,
        divisions: usize,
    ) -> Result<LayoutResult, Error> {
        let divisions = divisions.max(1);
        if labels.len() > divisions {
            return Err(Error::TooManyLabels {
                got: labels.len(),
                slots: divisions,
            });
        }

        let margin = self.options.margin_mm;
        let inner = Size::new(
            (area.width - 2.0 * margin).max(0.0),
            (area.height - 2.0 * margin).max(0.0),
        );
        let slot_width = inner.width / divisions as f32;

        let mut elements = Vec::new();
        let mut rescaled = false;
        for (slot, label) in labels.iter().enumerate() {
            if label.trim().is_empty() {
                continue;
            }
            let result = self.render(label, Size::new(slot_width, inner.height))?;
            rescaled |= result.rescaled;
            let center = -inner.width / 2.0 + slot_width * (slot as f32 + 0.5);
            elements.extend(result.elements.into_iter().map(|mut element| {
                element.x += center;
                element
            }));
        }

        Ok(LayoutResult {
            elements,
            size: area,
            rescaled,
        })
    }
}
