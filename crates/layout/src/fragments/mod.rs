//! The `Fragment` trait and the built-in structural fragments.
//!
//! Fragments are constructed fresh per render call and are the only unit the
//! line fitter knows how to place. Geometry-producing fragments delegate to
//! the session's `ShapeBackend`; only returned bounding boxes feed layout.

use crate::LabelError;
use crate::elements::{LayoutElement, RenderedFragment, ShapeElement, TextElement};
use crate::session::{RenderSession, StyleContext};
use labelforge_style::FastenerParseError;
use labelforge_traits::ShapeRequest;
use labelforge_types::{Color, Size};
use std::fmt::Debug;
use thiserror::Error;

mod bolt;
mod symbol;

pub use bolt::{BoltFragment, HeadFragment, WebbBoltFragment};
pub use symbol::{NamedFragment, SymbolFragment};

/// Fatal construction-time errors, raised with a remediation hint before any
/// geometry work begins.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FragmentError {
    #[error("Wrong number of arguments for '{name}': expected {expected}, got {got}")]
    WrongArity {
        name: String,
        expected: String,
        got: usize,
    },

    #[error("Invalid argument for '{name}': {message}")]
    InvalidArgument { name: String, message: String },

    #[error("{0}")]
    Fastener(#[from] FastenerParseError),

    #[error(
        "Got alignment fragment ({{<}} or {{>}}) not at the start of a label or column; \
         for selective alignment pad with {{...}}, or set alignment in the column division"
    )]
    MisplacedAlignment,

    #[error("Column dividers are consumed during column splitting and cannot appear mid-line")]
    MisplacedDivider,

    #[error("Could find no matches for symbol definition '{0}'")]
    NoSymbolMatch(String),

    #[error(
        "Symbol definition '{spec}' is ambiguous. Possible options:\n{candidates}\n\
         Please specify the symbol more precisely"
    )]
    AmbiguousSymbol { spec: String, candidates: String },

    #[error("Whitespace fragment can only contain whitespace, got '{0}'")]
    NotWhitespace(String),
}

/// One content unit in a label spec.
///
/// The default implementations describe a fixed-width, visible, normal-height
/// fragment; kinds override the capabilities they actually have.
pub trait Fragment: Debug {
    fn render(
        &self,
        session: &RenderSession,
        style: &StyleContext,
        height: f32,
        max_width: f32,
    ) -> Result<RenderedFragment, LabelError>;

    /// Does this fragment negotiate its width from leftover space?
    fn variable_width(&self) -> bool {
        false
    }

    /// Variable fragments with higher priority are rendered first.
    fn priority(&self) -> f32 {
        1.0
    }

    /// The smallest width a variable fragment can be given.
    fn min_width(&self, _height: f32) -> f32 {
        0.0
    }

    /// Permission to exceed nominal line height, compensated by shrinking the
    /// line's working height by this factor.
    fn overheight(&self) -> Option<f32> {
        None
    }

    /// Invisible fragments occupy space but contribute no shape.
    fn visible(&self) -> bool {
        true
    }

    /// Modifier directives adjust the style context for subsequent fragments
    /// in the line and are stripped from placement. Returns true when this
    /// fragment is such a modifier.
    fn apply_modifier(&self, _style: &mut StyleContext) -> bool {
        false
    }
}

// --- Text ---

#[derive(Debug, Clone)]
pub struct TextFragment {
    text: String,
}

impl TextFragment {
    pub fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
        }
    }
}

impl Fragment for TextFragment {
    fn render(
        &self,
        session: &RenderSession,
        style: &StyleContext,
        height: f32,
        _max_width: f32,
    ) -> Result<RenderedFragment, LabelError> {
        let font = &session.options.font;
        let glyph_height = font.allowed_height(height) * style.scale;
        let sketch = session.backend.render_text(&self.text, glyph_height, font)?;
        Ok(RenderedFragment {
            size: sketch.size,
            element: LayoutElement::Text(TextElement {
                content: self.text.clone(),
                color: style.color.clone(),
                font: font.clone(),
            }),
            data: sketch.data,
        })
    }
}

// --- Whitespace ---

/// A measured gap produced from leading/trailing run whitespace.
#[derive(Debug, Clone)]
pub struct WhitespaceFragment {
    whitespace: String,
}

impl WhitespaceFragment {
    pub fn new(whitespace: &str) -> Result<Self, FragmentError> {
        if whitespace.is_empty() || !whitespace.chars().all(char::is_whitespace) {
            return Err(FragmentError::NotWhitespace(whitespace.to_string()));
        }
        Ok(Self {
            whitespace: whitespace.to_string(),
        })
    }
}

impl Fragment for WhitespaceFragment {
    fn render(
        &self,
        session: &RenderSession,
        style: &StyleContext,
        height: f32,
        _max_width: f32,
    ) -> Result<RenderedFragment, LabelError> {
        let width = session.whitespace_width(&self.whitespace, height * style.scale)?;
        Ok(RenderedFragment::gap(Size::new(width, height)))
    }

    fn visible(&self) -> bool {
        false
    }
}

// --- Fixed spacer ---

#[derive(Debug, Clone)]
pub struct SpacerFragment {
    distance: f32,
}

impl SpacerFragment {
    pub fn new(distance: f32) -> Self {
        Self { distance }
    }
}

impl Fragment for SpacerFragment {
    fn render(
        &self,
        _session: &RenderSession,
        _style: &StyleContext,
        height: f32,
        _max_width: f32,
    ) -> Result<RenderedFragment, LabelError> {
        Ok(RenderedFragment::gap(Size::new(self.distance, height)))
    }

    fn visible(&self) -> bool {
        false
    }
}

// --- Expanding glue ---

/// Blank area that always expands to fill available space. Specified
/// multiple times, the leftover is balanced between entries; used to
/// justify and align content.
#[derive(Debug, Clone)]
pub struct ExpandingFragment;

impl Fragment for ExpandingFragment {
    fn render(
        &self,
        _session: &RenderSession,
        _style: &StyleContext,
        height: f32,
        max_width: f32,
    ) -> Result<RenderedFragment, LabelError> {
        Ok(RenderedFragment::gap(Size::new(max_width.max(0.0), height)))
    }

    fn variable_width(&self) -> bool {
        true
    }

    fn priority(&self) -> f32 {
        0.0
    }

    fn visible(&self) -> bool {
        false
    }
}

// --- Box ---

/// Arbitrary width, height centered box. Height defaults to the line height.
#[derive(Debug, Clone)]
pub struct BoxFragment {
    width: f32,
    height: Option<f32>,
}

impl BoxFragment {
    pub fn from_args(args: &[String]) -> Result<Self, FragmentError> {
        if args.is_empty() || args.len() > 2 {
            return Err(FragmentError::WrongArity {
                name: "box".to_string(),
                expected: "1 or 2".to_string(),
                got: args.len(),
            });
        }
        let parse = |arg: &str| {
            arg.parse::<f32>().map_err(|_| FragmentError::InvalidArgument {
                name: "box".to_string(),
                message: format!("'{}' is not a number", arg),
            })
        };
        let width = parse(&args[0])?;
        let height = match args.get(1) {
            Some(h) => Some(parse(h)?),
            None => None,
        };
        Ok(Self { width, height })
    }
}

impl Fragment for BoxFragment {
    fn render(
        &self,
        session: &RenderSession,
        style: &StyleContext,
        height: f32,
        max_width: f32,
    ) -> Result<RenderedFragment, LabelError> {
        let request = ShapeRequest::Box {
            width: self.width,
            height: self.height.unwrap_or(height),
        };
        render_shape(session, style, &request, height, max_width)
    }
}

// --- Measure ---

/// Fills as much area as possible with a dimension line showing the length.
/// Useful for debugging layouts.
#[derive(Debug, Clone)]
pub struct MeasureFragment;

impl Fragment for MeasureFragment {
    fn render(
        &self,
        session: &RenderSession,
        style: &StyleContext,
        height: f32,
        max_width: f32,
    ) -> Result<RenderedFragment, LabelError> {
        render_shape(session, style, &ShapeRequest::Measure, height, max_width)
    }

    fn variable_width(&self) -> bool {
        true
    }

    fn min_width(&self, _height: f32) -> f32 {
        1.0
    }
}

// --- Modifiers ---

/// Sets the color context for subsequent fragments in the line.
#[derive(Debug, Clone)]
pub struct ColorFragment {
    color: Color,
}

impl ColorFragment {
    pub fn from_args(args: &[String]) -> Result<Self, FragmentError> {
        let [arg] = args else {
            return Err(FragmentError::WrongArity {
                name: "color".to_string(),
                expected: "1".to_string(),
                got: args.len(),
            });
        };
        let color = Color::parse(arg).map_err(|message| FragmentError::InvalidArgument {
            name: "color".to_string(),
            message,
        })?;
        Ok(Self { color })
    }
}

impl Fragment for ColorFragment {
    fn render(
        &self,
        _session: &RenderSession,
        _style: &StyleContext,
        _height: f32,
        _max_width: f32,
    ) -> Result<RenderedFragment, LabelError> {
        // Modifiers are stripped before placement and never rendered.
        Ok(RenderedFragment::gap(Size::zero()))
    }

    fn apply_modifier(&self, style: &mut StyleContext) -> bool {
        style.color = self.color.clone();
        true
    }
}

/// Scales subsequent fragments of the line relative to the working height.
#[derive(Debug, Clone)]
pub struct ScaleFragment {
    factor: f32,
}

impl ScaleFragment {
    pub fn from_args(args: &[String]) -> Result<Self, FragmentError> {
        let [arg] = args else {
            return Err(FragmentError::WrongArity {
                name: "scale".to_string(),
                expected: "1".to_string(),
                got: args.len(),
            });
        };
        let factor: f32 = arg.parse().map_err(|_| FragmentError::InvalidArgument {
            name: "scale".to_string(),
            message: format!("'{}' is not a number", arg),
        })?;
        if factor <= 0.0 {
            return Err(FragmentError::InvalidArgument {
                name: "scale".to_string(),
                message: format!("scale factor must be positive, got {}", factor),
            });
        }
        Ok(Self { factor })
    }
}

impl Fragment for ScaleFragment {
    fn render(
        &self,
        _session: &RenderSession,
        _style: &StyleContext,
        _height: f32,
        _max_width: f32,
    ) -> Result<RenderedFragment, LabelError> {
        Ok(RenderedFragment::gap(Size::zero()))
    }

    fn apply_modifier(&self, style: &mut StyleContext) -> bool {
        style.scale = self.factor;
        true
    }
}

/// Shared render path for fragments that hand a structured request to the
/// backend and pass its bounding box through.
pub(crate) fn render_shape(
    session: &RenderSession,
    style: &StyleContext,
    request: &ShapeRequest,
    height: f32,
    max_width: f32,
) -> Result<RenderedFragment, LabelError> {
    let sketch = session
        .backend
        .render_shape(request, height * style.scale, max_width)?;
    Ok(RenderedFragment {
        size: sketch.size,
        element: LayoutElement::Shape(ShapeElement {
            request: request.clone(),
            color: style.color.clone(),
        }),
        data: sketch.data,
    })
}

/// Require an exact argument count for fragments that take none.
pub(crate) fn expect_no_args(name: &str, args: &[String]) -> Result<(), FragmentError> {
    if args.is_empty() {
        Ok(())
    } else {
        Err(FragmentError::WrongArity {
            name: name.to_string(),
            expected: "0".to_string(),
            got: args.len(),
        })
    }
}
