use labelforge_style::FontOptions;
use labelforge_traits::{ShapeRequest, SharedSketchData};
use labelforge_types::{Color, Rect, Size};

#[derive(Debug, Clone, PartialEq)]
pub struct TextElement {
    pub content: String,
    pub color: Color,
    pub font: FontOptions,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ShapeElement {
    pub request: ShapeRequest,
    pub color: Color,
}

/// What a rendered fragment contributes to the output.
///
/// `Gap` elements (whitespace, spacers, glue) occupy space during layout but
/// are never handed to the output assembler.
#[derive(Debug, Clone, PartialEq)]
pub enum LayoutElement {
    Text(TextElement),
    Shape(ShapeElement),
    Gap,
}

/// One fragment after rendering, before placement.
#[derive(Debug, Clone)]
pub struct RenderedFragment {
    pub size: Size,
    pub element: LayoutElement,
    pub data: Option<SharedSketchData>,
}

impl RenderedFragment {
    pub fn gap(size: Size) -> Self {
        Self {
            size,
            element: LayoutElement::Gap,
            data: None,
        }
    }
}

/// A placed element. `x`/`y` locate the element center relative to the
/// center of the area being rendered.
#[derive(Debug, Clone)]
pub struct PositionedElement {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub element: LayoutElement,
    pub data: Option<SharedSketchData>,
}

impl PositionedElement {
    pub fn is_visible(&self) -> bool {
        !matches!(self.element, LayoutElement::Gap)
    }

    pub fn bounds(&self) -> Rect {
        Rect::centered(self.x, self.y, Size::new(self.width, self.height))
    }
}
