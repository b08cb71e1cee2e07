use crate::font::FontOptions;
use labelforge_types::Color;
use serde::{Deserialize, Serialize};

fn default_line_spacing() -> f32 {
    0.1
}

fn default_margin() -> f32 {
    0.4
}

fn default_column_gap() -> f32 {
    0.4
}

fn default_true() -> bool {
    true
}

/// Configuration consumed by the layout engine. Everything is in mm.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RenderOptions {
    #[serde(default = "default_line_spacing")]
    pub line_spacing_mm: f32,
    #[serde(default = "default_margin")]
    pub margin_mm: f32,
    #[serde(default = "default_column_gap")]
    pub column_gap_mm: f32,
    #[serde(default)]
    pub font: FontOptions,
    /// Overheight fragments cause the whole line's working height to shrink
    /// so their natural render fits. When disabled, each overheight fragment
    /// is individually handed a reduced height instead.
    #[serde(default = "default_true")]
    pub allow_overheight: bool,
    /// Starting color for the per-line style context.
    #[serde(default)]
    pub color: Color,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            line_spacing_mm: default_line_spacing(),
            margin_mm: default_margin(),
            column_gap_mm: default_column_gap(),
            font: FontOptions::default(),
            allow_overheight: true,
            color: Color::default(),
        }
    }
}
