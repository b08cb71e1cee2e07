//! Named backend shapes and catalog-matched electronic symbols.

use super::{Fragment, FragmentError, expect_no_args, render_shape};
use crate::LabelError;
use crate::elements::RenderedFragment;
use crate::session::{RenderSession, StyleContext};
use labelforge_traits::{ShapeRequest, SymbolCatalog, SymbolEntry};
use log::debug;
use std::collections::BTreeSet;

/// A simple named shape the backend knows how to draw (hexnut, washer,
/// magnet, ...). Takes no arguments.
#[derive(Debug, Clone)]
pub struct NamedFragment {
    name: &'static str,
    overheight: Option<f32>,
}

impl NamedFragment {
    pub fn new(
        name: &'static str,
        overheight: Option<f32>,
        args: &[String],
    ) -> Result<Self, FragmentError> {
        expect_no_args(name, args)?;
        Ok(Self { name, overheight })
    }
}

impl Fragment for NamedFragment {
    fn render(
        &self,
        session: &RenderSession,
        style: &StyleContext,
        height: f32,
        max_width: f32,
    ) -> Result<RenderedFragment, LabelError> {
        let request = ShapeRequest::Named {
            name: self.name.to_string(),
            drives: Vec::new(),
        };
        let natural_height = height * self.overheight.unwrap_or(1.0);
        render_shape(session, style, &request, natural_height, max_width)
    }

    fn overheight(&self) -> Option<f32> {
        self.overheight
    }
}

/// An electronic symbol resolved against the session catalog. Matching
/// happens at construction time so that ambiguous or unknown selectors fail
/// before any rendering.
#[derive(Debug, Clone)]
pub struct SymbolFragment {
    entry: SymbolEntry,
}

impl SymbolFragment {
    pub fn from_args(args: &[String], catalog: &dyn SymbolCatalog) -> Result<Self, FragmentError> {
        let entry = match_symbol(args, catalog)?;
        Ok(Self { entry })
    }

    pub fn entry(&self) -> &SymbolEntry {
        &self.entry
    }
}

impl Fragment for SymbolFragment {
    fn render(
        &self,
        session: &RenderSession,
        style: &StyleContext,
        height: f32,
        max_width: f32,
    ) -> Result<RenderedFragment, LabelError> {
        let request = ShapeRequest::Symbol {
            id: self.entry.id.clone(),
            filename: self.entry.filename.clone(),
        };
        render_shape(session, style, &request, height, max_width)
    }
}

/// Resolve a standard alias to its canonical name, if the token names one.
fn standard_of(token: &str) -> Option<&'static str> {
    match token {
        "common" | "com" => Some("common"),
        "iec" | "euro" | "europe" => Some("iec"),
        "ieee" | "ansi" => Some("ieee"),
        _ => None,
    }
}

/// Match a symbol in the catalog manifest.
///
/// Exact id/name/filename matches win; otherwise fuzzy token matching over
/// the name/id/category soup narrows the field, and a requested (or default)
/// standard order breaks remaining ties within a single category.
fn match_symbol(
    selectors: &[String],
    catalog: &dyn SymbolCatalog,
) -> Result<SymbolEntry, FragmentError> {
    let mut requested: BTreeSet<String> = selectors
        .iter()
        .map(|s| {
            s.trim()
                .to_ascii_lowercase()
                .trim_end_matches(".svg")
                .trim_end_matches(".png")
                .trim_end_matches(".jpg")
                .to_string()
        })
        .filter(|s| !s.is_empty())
        .collect();

    // Work out if a specific standard was requested, and make a preference
    // order to discriminate otherwise-equal matches.
    let standards: BTreeSet<&'static str> = requested
        .iter()
        .filter_map(|t| standard_of(t))
        .collect();
    if standards.len() > 1 {
        return Err(FragmentError::InvalidArgument {
            name: "symbol".to_string(),
            message: format!(
                "got more than one symbol standard selected: '{}'",
                standards.into_iter().collect::<Vec<_>>().join(", ")
            ),
        });
    }
    let mut standards_order = vec!["common", "iec", "ieee"];
    if let Some(&preferred) = standards.iter().next() {
        standards_order.retain(|s| *s != preferred);
        standards_order.insert(0, preferred);
        requested.retain(|t| standard_of(t).is_none());
    }

    let spec = requested.iter().cloned().collect::<Vec<_>>().join(",");
    let manifest = catalog.entries();

    // Firstly, have we been given an exact id, name or filename?
    let mut matches: Vec<&SymbolEntry> = manifest
        .iter()
        .filter(|entry| {
            let name = entry.name.to_ascii_lowercase();
            let bare_name = name
                .replace(" (ieee/ansi)", "")
                .replace(" (common style)", "");
            requested.contains(&entry.id.to_ascii_lowercase())
                || requested.contains(&entry.filename.to_ascii_lowercase())
                || requested.contains(&name)
                || requested.contains(&bare_name)
        })
        .collect();

    if matches.len() == 1 {
        debug!("Found exact symbol match: '{}'", matches[0].id);
        return Ok(matches[0].clone());
    }

    if matches.is_empty() {
        // No exact matches, so do fuzzy matching instead: every requested
        // token must be a substring of some token in the symbol's soup.
        let match_tokens: BTreeSet<&str> = requested
            .iter()
            .flat_map(|s| s.split_whitespace())
            .collect();
        debug!("No exact matches, fuzzy matching on {:?}", match_tokens);
        for entry in manifest {
            let mut soup: BTreeSet<String> = [&entry.category, &entry.name, &entry.id]
                .iter()
                .flat_map(|s| s.split_whitespace())
                .map(|t| t.to_ascii_lowercase())
                .collect();
            if soup.contains("logic") {
                soup.insert("gate".to_string());
            }
            if match_tokens
                .iter()
                .all(|cand| soup.iter().any(|s| s.contains(cand)))
            {
                matches.push(entry);
            }
        }
    }

    if matches.len() == 1 {
        debug!("Found fuzzy symbol match: '{}'", matches[0].id);
        return Ok(matches[0].clone());
    }
    if matches.is_empty() {
        return Err(FragmentError::NoSymbolMatch(spec));
    }

    debug!("Got {} matches, attempting to refine", matches.len());

    // If all matches are in the same category, choose based on standard.
    let first_category = matches[0].category.to_ascii_lowercase();
    if matches
        .iter()
        .all(|m| m.category.eq_ignore_ascii_case(&first_category))
    {
        let rank = |entry: &SymbolEntry| {
            standards_order
                .iter()
                .position(|s| entry.standard.eq_ignore_ascii_case(s))
                .unwrap_or(standards_order.len())
        };
        let best = matches.iter().map(|m| rank(m)).min().unwrap_or(0);
        let preferred: Vec<&SymbolEntry> = matches
            .iter()
            .copied()
            .filter(|m| rank(m) == best)
            .collect();
        if preferred.len() == 1 {
            debug!(
                "Using symbol '{}' because standard {} is preferred",
                preferred[0].id, preferred[0].standard
            );
            return Ok(preferred[0].clone());
        }
        matches = preferred;
    }

    Err(FragmentError::AmbiguousSymbol {
        spec,
        candidates: format_candidates(&matches),
    })
}

fn format_candidates(matches: &[&SymbolEntry]) -> String {
    let mut rows = vec![[
        "ID".to_string(),
        "Category".to_string(),
        "Name".to_string(),
        "Standard".to_string(),
    ]];
    for entry in matches {
        rows.push([
            entry.id.clone(),
            entry.category.clone(),
            entry.name.clone(),
            entry.standard.clone(),
        ]);
    }
    let mut widths = [0usize; 4];
    for row in &rows {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(cell.len());
        }
    }
    rows.iter()
        .map(|row| {
            let cells: Vec<String> = row
                .iter()
                .zip(widths)
                .map(|(cell, w)| format!("{:w$}", cell, w = w))
                .collect();
            format!("    {}", cells.join("  ").trim_end())
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use labelforge_traits::InMemoryCatalog;

    fn catalog() -> InMemoryCatalog {
        InMemoryCatalog::new(vec![
            SymbolEntry {
                id: "resistor-iec".to_string(),
                name: "Resistor".to_string(),
                category: "Resistors".to_string(),
                standard: "IEC".to_string(),
                filename: "resistor-iec".to_string(),
            },
            SymbolEntry {
                id: "resistor-ieee".to_string(),
                name: "Resistor (IEEE/ANSI)".to_string(),
                category: "Resistors".to_string(),
                standard: "IEEE".to_string(),
                filename: "resistor-ieee".to_string(),
            },
            SymbolEntry {
                id: "and-gate".to_string(),
                name: "AND Gate".to_string(),
                category: "Logic".to_string(),
                standard: "Common".to_string(),
                filename: "and-gate".to_string(),
            },
            SymbolEntry {
                id: "led-diode".to_string(),
                name: "LED".to_string(),
                category: "Diodes".to_string(),
                standard: "Common".to_string(),
                filename: "led-diode".to_string(),
            },
            SymbolEntry {
                id: "led-indicator".to_string(),
                name: "LED".to_string(),
                category: "Indicators".to_string(),
                standard: "Common".to_string(),
                filename: "led-indicator".to_string(),
            },
        ])
    }

    #[test]
    fn exact_id_match_wins() {
        let catalog = catalog();
        let entry = match_symbol(&["resistor-iec".to_string()], &catalog).unwrap();
        assert_eq!(entry.id, "resistor-iec");
    }

    #[test]
    fn file_extensions_are_stripped() {
        let catalog = catalog();
        let entry = match_symbol(&["and-gate.svg".to_string()], &catalog).unwrap();
        assert_eq!(entry.id, "and-gate");
    }

    #[test]
    fn standard_preference_breaks_ties() {
        let catalog = catalog();
        // Two resistors; the requested standard resolves the tie, and the
        // default order prefers IEC over IEEE when nothing is requested.
        let entry = match_symbol(&["resistor".to_string(), "euro".to_string()], &catalog).unwrap();
        assert_eq!(entry.standard, "IEC");
        let entry =
            match_symbol(&["resistor".to_string(), "ansi".to_string()], &catalog).unwrap();
        assert_eq!(entry.standard, "IEEE");
        let entry = match_symbol(&["resistor".to_string()], &catalog).unwrap();
        assert_eq!(entry.standard, "IEC");
    }

    #[test]
    fn fuzzy_match_uses_category_soup() {
        let catalog = catalog();
        let entry = match_symbol(&["gate".to_string()], &catalog).unwrap();
        assert_eq!(entry.id, "and-gate");
    }

    #[test]
    fn no_match_is_an_error() {
        let catalog = catalog();
        let err = match_symbol(&["flux-capacitor".to_string()], &catalog).unwrap_err();
        assert!(matches!(err, FragmentError::NoSymbolMatch(_)));
    }

    #[test]
    fn ambiguous_match_lists_candidates() {
        let catalog = catalog();
        // Two LEDs in different categories; standard preference cannot help.
        let err = match_symbol(&["led".to_string()], &catalog).unwrap_err();
        match err {
            FragmentError::AmbiguousSymbol { candidates, .. } => {
                assert!(candidates.contains("led-diode"));
                assert!(candidates.contains("led-indicator"));
            }
            other => panic!("expected AmbiguousSymbol, got {:?}", other),
        }
    }

    #[test]
    fn conflicting_standards_are_rejected() {
        let catalog = catalog();
        let err = match_symbol(
            &["resistor".to_string(), "iec".to_string(), "ansi".to_string()],
            &catalog,
        )
        .unwrap_err();
        assert!(matches!(err, FragmentError::InvalidArgument { .. }));
    }
}
