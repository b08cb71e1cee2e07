//! Multi-line area rendering with a single constrained rescale pass.

use crate::LabelError;
use crate::elements::PositionedElement;
use crate::line::fit_line;
use crate::parser::{self, RawToken};
use crate::session::RenderSession;
use labelforge_types::{Rect, Size};
use log::{debug, warn};

const RESCALE_THRESHOLD: f32 = 0.99;
const RESCALE_MARGIN: f32 = 0.95;

/// Which attempt this is. Only the initial pass may trigger a rescale;
/// the second pass accepts whatever fits and warns otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderPass {
    Initial,
    Rescaling,
}

impl RenderPass {
    fn may_rescale(self) -> bool {
        matches!(self, RenderPass::Initial)
    }
}

/// A fully laid out area: placed elements with coordinates relative to the
/// area center, plus the area the caller asked for.
#[derive(Debug, Clone)]
pub struct LayoutResult {
    pub elements: Vec<PositionedElement>,
    pub size: Size,
    pub rescaled: bool,
}

impl LayoutResult {
    /// Bounding box over the visible elements. Gaps never contribute.
    pub fn visible_bounds(&self) -> Rect {
        self.elements
            .iter()
            .filter(|e| e.is_visible())
            .fold(Rect::empty(), |acc, e| acc.union(&e.bounds()))
    }
}

/// Lay out one area's lines into the given size.
///
/// Every line gets an equal share of the height after line spacing. If the
/// visible content overflows the area, the whole layout is retried exactly
/// once at a reduced height with a small safety margin; content still
/// overflowing after that is kept as-is with a warning.
pub fn render_area(
    lines: &[Vec<RawToken>],
    area: Size,
    session: &RenderSession,
) -> Result<LayoutResult, LabelError> {
    let result = render_pass(lines, area, session, RenderPass::Initial)?;
    Ok(LayoutResult {
        elements: result.elements,
        size: area,
        rescaled: result.rescaled,
    })
}

fn render_pass(
    lines: &[Vec<RawToken>],
    area: Size,
    session: &RenderSession,
    pass: RenderPass,
) -> Result<LayoutResult, LabelError> {
    let count = lines.len();
    if count == 0 {
        return Ok(LayoutResult {
            elements: Vec::new(),
            size: area,
            rescaled: pass == RenderPass::Rescaling,
        });
    }

    let spacing = session.options.line_spacing_mm;
    let row_height = (area.height - spacing * (count - 1) as f32) / count as f32;
    debug!(
        "rendering {} line(s) into {:.2}x{:.2}, row height {:.2}",
        count, area.width, area.height, row_height
    );

    let mut elements = Vec::new();
    for (n, line) in lines.iter().enumerate() {
        if line.is_empty() {
            continue;
        }
        let fragments = parser::parse_line(line, session)?;
        let fitted = fit_line(&fragments, row_height, area.width, session)?;
        // Rows stack top to bottom; y is positive upwards from the center.
        let render_y = area.height / 2.0 - (row_height + spacing) * n as f32 - row_height / 2.0;
        for mut element in fitted.elements {
            element.y += render_y;
            elements.push(element);
        }
    }

    let result = LayoutResult {
        elements,
        size: area,
        rescaled: pass == RenderPass::Rescaling,
    };

    let bounds = result.visible_bounds();
    if bounds.is_empty() {
        return Ok(result);
    }
    let scale = (area.width / bounds.width())
        .min(area.height / bounds.height())
        .min(1.0);
    if scale < RESCALE_THRESHOLD {
        if pass.may_rescale() {
            let target_height = area.height.min(bounds.height()) * scale * RESCALE_MARGIN;
            debug!(
                "content {:.2}x{:.2} overflows {:.2}x{:.2}, retrying at height {:.2}",
                bounds.width(),
                bounds.height(),
                area.width,
                area.height,
                target_height
            );
            return render_pass(
                lines,
                Size::new(area.width, target_height),
                session,
                RenderPass::Rescaling,
            );
        }
        warn!(
            "label content still overflows after rescaling ({:.2}x{:.2} into {:.2}x{:.2})",
            bounds.width(),
            bounds.height(),
            area.width,
            area.height
        );
    }

    Ok(result)
}
