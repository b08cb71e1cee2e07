use thiserror::Error;

/// Top-level error union for label parsing and layout.
///
/// Syntax and construction errors are fatal and fire before any geometry
/// work; geometric overflow is never an error, only a logged warning.
#[derive(Error, Debug)]
pub enum LabelError {
    #[error("Spec syntax error: {0}")]
    Syntax(#[from] parser::SpecError),

    #[error("Invalid fragment specification: {0}")]
    Fragment(#[from] fragments::FragmentError),

    #[error("Backend error: {0}")]
    Backend(#[from] labelforge_traits::BackendError),
}

pub mod cache;
pub mod columns;
pub mod elements;
pub mod engine;
pub mod fragments;
pub mod line;
pub mod parser;
pub mod registry;
pub mod session;

pub use self::cache::MeasurementCache;
pub use self::columns::{Alignment, ColumnSpec, column_widths, split_columns};
pub use self::elements::{
    LayoutElement, PositionedElement, RenderedFragment, ShapeElement, TextElement,
};
pub use self::engine::{LayoutResult, RenderPass, render_area};
pub use self::fragments::{Fragment, FragmentError};
pub use self::line::{RenderedLine, fit_line};
pub use self::parser::{RawToken, SpecError, parse_line};
pub use self::registry::{FragmentDescription, Registry};
pub use self::session::{RenderSession, StyleContext};

// Re-export geometry types used throughout to prevent type mismatches
pub use labelforge_types::{Rect, Size};

#[cfg(test)]
mod engine_test;
#[cfg(test)]
mod line_test;
#[cfg(test)]
mod test_utils;
