pub mod fastener;
pub mod font;
pub mod options;

pub use fastener::{BoltFeatures, Drive, FastenerParseError, HeadShape};
pub use font::{FontOptions, FontStyle};
pub use options::RenderOptions;
