pub mod engine;
pub mod sources;
pub mod tables;

pub use engine::{fallback_url, Resolution, ResolveError, SymbolResolver};
pub use sources::{HttpListSource, ListSource, SourceError};
pub use tables::{custom_image, rewrite_symbol};
