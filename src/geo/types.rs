//! Core types for the geo subsystem.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One entry of the bulk reference dataset: a country and every city
/// listed under it. The dataset is treated as a flat snapshot; nothing
/// beyond this shape is validated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountryRecord {
    pub name: String,
    pub cities: Vec<String>,
}

/// Dataset loading errors. These never reach lookup callers — the
/// resolver swallows them and degrades to an empty index.
#[derive(Debug)]
pub enum DatasetError {
    Network(String),
    InvalidResponse(String),
}

impl fmt::Display for DatasetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Network(msg) => write!(f, "Network error: {}", msg),
            Self::InvalidResponse(msg) => write!(f, "Invalid dataset: {}", msg),
        }
    }
}

impl std::error::Error for DatasetError {}
