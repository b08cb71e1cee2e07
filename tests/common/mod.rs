use labelforge::{FixedMetrics, InMemoryCatalog, LabelRenderer, SymbolEntry};

/// A renderer over the deterministic metrics backend and a small symbol
/// catalog, enough for every integration scenario.
pub fn renderer() -> LabelRenderer<FixedMetrics, InMemoryCatalog> {
    LabelRenderer::new(FixedMetrics::new(), catalog())
}

pub fn catalog() -> InMemoryCatalog {
    InMemoryCatalog::new(vec![
        entry("resistor-iec", "Resistor", "Resistors", "IEC"),
        entry("resistor-ieee", "Resistor (IEEE/ANSI)", "Resistors", "IEEE"),
        entry("capacitor", "Capacitor", "Capacitors", "Common"),
    ])
}

fn entry(id: &str, name: &str, category: &str, standard: &str) -> SymbolEntry {
    SymbolEntry {
        id: id.to_string(),
        name: name.to_string(),
        category: category.to_string(),
        standard: standard.to_string(),
        filename: id.to_string(),
    }
}
