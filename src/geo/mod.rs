//! Geo enrichment subsystem for Leadatlas.
//!
//! Resolves free-text, multi-language city names from lead forms to a
//! country name, using a normalized index built from a bulk reference
//! dataset plus a curated override table.

pub mod dataset;
pub mod index;
pub mod normalize;
pub mod overrides;
pub mod resolver;
pub mod snapshot;
pub mod types;

pub use dataset::DEFAULT_DATASET_URL;
pub use normalize::normalize;
pub use resolver::{CityCountryResolver, DatasetLoader, ResolverConfig};
pub use snapshot::SnapshotStore;
pub use types::{CountryRecord, DatasetError};
