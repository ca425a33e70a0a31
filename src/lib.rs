//! Leadatlas — city → country resolution for lead geo enrichment.
//!
//! Lead forms arrive with free-text city fields in whatever language
//! and spelling the submitter used. This crate resolves them to a
//! country name: a bulk city/country reference dataset is fetched once,
//! folded into a normalized lookup index (curated overrides first), and
//! queried through a deterministic fallback chain. Resolution is
//! best-effort by design — a miss is `None`, never an error.

pub mod geo;
pub mod server;

pub use geo::{CityCountryResolver, ResolverConfig};
