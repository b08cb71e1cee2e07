//! Shared fixtures for layout tests: a deterministic metrics backend, a
//! small symbol catalog and an owning bundle to borrow sessions from.

use crate::cache::MeasurementCache;
use crate::registry::Registry;
use crate::session::RenderSession;
use labelforge_style::RenderOptions;
use labelforge_traits::{FixedMetrics, InMemoryCatalog, SymbolEntry};

pub struct TestContext {
    pub backend: FixedMetrics,
    pub catalog: InMemoryCatalog,
    pub registry: Registry,
    pub options: RenderOptions,
    pub cache: MeasurementCache,
}

impl TestContext {
    pub fn new() -> Self {
        Self::with_backend(FixedMetrics::new())
    }

    pub fn with_backend(backend: FixedMetrics) -> Self {
        Self {
            backend,
            catalog: test_catalog(),
            registry: Registry::builtin(),
            options: RenderOptions::default(),
            cache: MeasurementCache::new(),
        }
    }

    pub fn session(&self) -> RenderSession<'_> {
        RenderSession::new(
            &self.backend,
            &self.catalog,
            &self.registry,
            &self.options,
            &self.cache,
        )
    }
}

fn test_catalog() -> InMemoryCatalog {
    InMemoryCatalog::new(vec![
        SymbolEntry {
            id: "resistor-iec".to_string(),
            name: "Resistor".to_string(),
            category: "Resistors".to_string(),
            standard: "IEC".to_string(),
            filename: "resistor-iec".to_string(),
        },
        SymbolEntry {
            id: "capacitor".to_string(),
            name: "Capacitor".to_string(),
            category: "Capacitors".to_string(),
            standard: "Common".to_string(),
            filename: "capacitor".to_string(),
        },
    ])
}
