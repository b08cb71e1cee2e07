pub mod backend;
pub mod catalog;

pub use backend::{
    BackendError, FixedMetrics, ShapeBackend, ShapeRequest, SharedSketchData, Sketch,
};
pub use catalog::{InMemoryCatalog, SymbolCatalog, SymbolEntry};
