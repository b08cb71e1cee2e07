//! Column splitting: divider detection, chained proportions and per-column
//! alignment handling.

use crate::LabelError;
use crate::parser::{self, RawToken};
use log::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    Left,
    Right,
}

/// One column's content, split into lines of raw tokens, after divider and
/// alignment directives have been consumed.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnSpec {
    pub alignment: Option<Alignment>,
    pub lines: Vec<Vec<RawToken>>,
}

/// A `{L|R}` column divider. Either ratio may be omitted; a missing side
/// takes the value of the other, and `{|}` means equal columns.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Divider {
    left: f32,
    right: f32,
}

/// Recognize a divider directive body. Only bodies of the shape
/// `float|float` (either side optional) count; anything else is an ordinary
/// directive and is left for the registry to reject or accept.
fn parse_divider(content: &str) -> Option<Divider> {
    let (left, right) = content.split_once('|')?;
    let parse_side = |side: &str| -> Option<Option<f32>> {
        let side = side.trim();
        if side.is_empty() {
            return Some(None);
        }
        side.parse::<f32>().ok().map(Some)
    };
    let left = parse_side(left)?;
    let right = parse_side(right)?;
    Some(Divider {
        left: left.or(right).unwrap_or(1.0),
        right: right.or(left).unwrap_or(1.0),
    })
}

/// Split a label spec into columns on divider directives.
///
/// Returns each column's lines plus the column proportions. The first
/// divider seeds both proportions; each subsequent divider is relative to
/// the previous column: `prop[i] = right / left * prop[i-1]`.
pub fn split_columns(spec: &str) -> Result<(Vec<ColumnSpec>, Vec<f32>), LabelError> {
    let tokens = parser::scan(spec)?;

    let mut groups: Vec<Vec<RawToken>> = vec![Vec::new()];
    let mut proportions: Vec<f32> = Vec::new();

    for token in tokens {
        if let RawToken::Directive(content) = &token
            && let Some(divider) = parse_divider(content)
        {
            if proportions.is_empty() {
                // The first divider defines both columns.
                proportions.push(divider.left);
                proportions.push(divider.right);
            } else {
                // Left is only used to define right in relation to the
                // previous column.
                let prev = *proportions.last().unwrap_or(&1.0);
                proportions.push(divider.right / divider.left * prev);
            }
            groups.push(Vec::new());
            continue;
        }
        groups
            .last_mut()
            .expect("at least one column group")
            .push(token);
    }

    if proportions.is_empty() {
        proportions.push(1.0);
    }
    debug!("column proportions: {:?}", proportions);

    let columns = groups.into_iter().map(column_from_tokens).collect();
    Ok((columns, proportions))
}

/// Distribute an area width over column proportions, subtracting the
/// inter-column gaps first.
pub fn column_widths(proportions: &[f32], area_width: f32, gap: f32) -> Vec<f32> {
    let total: f32 = proportions.iter().sum();
    let usable = area_width - gap * (proportions.len().saturating_sub(1)) as f32;
    proportions.iter().map(|p| p * usable / total).collect()
}

fn column_from_tokens(mut tokens: Vec<RawToken>) -> ColumnSpec {
    // An alignment marker is only recognized as the very first token of the
    // column; anywhere else its construction fails in the registry.
    let alignment = match tokens.first() {
        Some(RawToken::Directive(d)) if d == "<" => Some(Alignment::Left),
        Some(RawToken::Directive(d)) if d == ">" => Some(Alignment::Right),
        _ => None,
    };
    if alignment.is_some() {
        tokens.remove(0);
    }

    let mut lines: Vec<Vec<RawToken>> = vec![Vec::new()];
    for token in tokens {
        match token {
            RawToken::Text(text) => {
                for (i, part) in text.split('\n').enumerate() {
                    if i > 0 {
                        lines.push(Vec::new());
                    }
                    if !part.is_empty() {
                        lines
                            .last_mut()
                            .expect("at least one line")
                            .push(RawToken::Text(part.to_string()));
                    }
                }
            }
            directive => lines
                .last_mut()
                .expect("at least one line")
                .push(directive),
        }
    }

    if let Some(alignment) = alignment {
        inject_alignment(&mut lines, alignment);
    }

    ColumnSpec { alignment, lines }
}

/// Pre-process an aligned column: every line that does not already contain
/// an expander or measure fragment gets glue on the far side.
fn inject_alignment(lines: &mut [Vec<RawToken>], alignment: Alignment) {
    for line in lines.iter_mut() {
        if line.is_empty() || has_flexible_fragment(line) {
            continue;
        }
        let glue = RawToken::Directive("...".to_string());
        match alignment {
            Alignment::Left => line.push(glue),
            Alignment::Right => line.insert(0, glue),
        }
    }
}

fn has_flexible_fragment(line: &[RawToken]) -> bool {
    line.iter()
        .any(|token| matches!(token, RawToken::Directive(d) if d == "..." || d == "measure"))
}
