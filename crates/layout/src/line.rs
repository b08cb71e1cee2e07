//! Fits one line's fragments into a width/height budget.

use crate::LabelError;
use crate::elements::{LayoutElement, PositionedElement, RenderedFragment};
use crate::fragments::Fragment;
use crate::session::{RenderSession, StyleContext};
use log::{debug, warn};

const OVERFULL_EPSILON: f32 = 1e-3;

/// One fitted line: elements placed left-to-right, centered as a group
/// around x = 0, y = 0.
#[derive(Debug, Clone)]
pub struct RenderedLine {
    pub elements: Vec<PositionedElement>,
    pub width: f32,
    pub height: f32,
}

/// Size and position one line of fragments.
///
/// Fixed-width fragments render first; variable fragments then split the
/// leftover in descending priority, each receiving
/// `max(remaining / count_remaining, min_width)` with the actual rendered
/// width subtracted afterwards. The allocation is greedy and
/// order-dependent: an early fragment can render wider than its share and
/// starve later ones. That behavior is intentional and kept for
/// compatibility with existing label specs.
pub fn fit_line(
    fragments: &[Box<dyn Fragment>],
    height: f32,
    max_width: f32,
    session: &RenderSession,
) -> Result<RenderedLine, LabelError> {
    // Sweep modifiers: they adjust the style context for everything after
    // them and drop out of the placement list.
    let mut style = StyleContext::from_options(session.options);
    let mut placed: Vec<(&dyn Fragment, StyleContext)> = Vec::new();
    for fragment in fragments {
        if !fragment.apply_modifier(&mut style) {
            placed.push((fragment.as_ref(), style.clone()));
        }
    }

    // Overheight fragments: shrink the working height so that their natural
    // render still fits the nominal line height. When overheight scaling is
    // off, each such fragment is individually handed a reduced height
    // instead.
    let allow_overheight = session.options.allow_overheight;
    let max_overheight = placed
        .iter()
        .filter_map(|(f, _)| f.overheight())
        .fold(1.0_f32, f32::max);
    let working_height = if allow_overheight && max_overheight > 1.0 {
        debug!(
            "scaling line height for overheight: {:.2} -> {:.2}",
            height,
            height / max_overheight
        );
        height / max_overheight
    } else {
        height
    };
    let fragment_height = |fragment: &dyn Fragment| {
        if allow_overheight {
            working_height
        } else {
            working_height / fragment.overheight().unwrap_or(1.0)
        }
    };

    let mut rendered: Vec<Option<RenderedFragment>> = Vec::with_capacity(placed.len());
    rendered.resize_with(placed.len(), || None);

    // Fixed-width fragments first.
    let mut fixed_width = 0.0;
    for (i, (fragment, style)) in placed.iter().enumerate() {
        if fragment.variable_width() {
            continue;
        }
        let result = fragment.render(session, style, fragment_height(*fragment), max_width)?;
        fixed_width += result.size.width;
        rendered[i] = Some(result);
    }

    // Variable fragments share what is left, highest priority first.
    let mut variable: Vec<usize> = (0..placed.len())
        .filter(|&i| placed[i].0.variable_width())
        .collect();
    variable.sort_by(|&a, &b| {
        placed[b]
            .0
            .priority()
            .partial_cmp(&placed[a].0.priority())
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let mut remaining = max_width - fixed_width;
    let mut count_remaining = variable.len();
    for i in variable {
        let (fragment, style) = &placed[i];
        let budget = (remaining / count_remaining as f32).max(fragment.min_width(height));
        let result = fragment.render(session, style, fragment_height(*fragment), budget)?;
        remaining -= result.size.width;
        count_remaining -= 1;
        rendered[i] = Some(result);
    }

    let total_width: f32 = rendered.iter().flatten().map(|r| r.size.width).sum();
    if total_width > max_width + OVERFULL_EPSILON {
        warn!(
            "Overfull hbox: line is wider than available area ({:.2} > {:.2})",
            total_width, max_width
        );
    }

    // Place in original token order, centered as a group around x = 0.
    // Invisible fragments occupy space but contribute no shape.
    let mut elements = Vec::with_capacity(rendered.len());
    let mut x = -total_width / 2.0;
    for ((fragment, _), result) in placed.iter().zip(rendered) {
        let Some(result) = result else { continue };
        let width = result.size.width;
        let (element, data) = if fragment.visible() {
            (result.element, result.data)
        } else {
            (LayoutElement::Gap, None)
        };
        elements.push(PositionedElement {
            x: x + width / 2.0,
            y: 0.0,
            width,
            height: result.size.height,
            element,
            data,
        });
        x += width;
    }

    Ok(RenderedLine {
        elements,
        width: total_width,
        height,
    })
}
