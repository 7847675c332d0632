pub mod loader;
pub mod orphanet;

pub use loader::{CatalogFormat, CatalogLoader};
pub use orphanet::IngestError;
