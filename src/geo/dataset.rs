//! Bulk reference dataset fetch.
//!
//! One HTTPS GET of the dr5hn countries+cities export (150k+ cities,
//! districts and towns included). No pagination, no auth, no
//! incremental updates — the document is a flat snapshot.

use super::types::{CountryRecord, DatasetError};

pub const DEFAULT_DATASET_URL: &str =
    "https://raw.githubusercontent.com/dr5hn/countries-states-cities-database/master/json/countries%2Bcities.json";

const USER_AGENT: &str = "Leadatlas/0.3 (city-country-resolver)";

/// Fetch and decode the reference dataset. The caller decides what a
/// failure means — the resolver degrades to an empty index, the CLI
/// reports it.
pub fn fetch_dataset(url: &str) -> Result<Vec<CountryRecord>, DatasetError> {
    let response = ureq::get(url)
        .set("User-Agent", USER_AGENT)
        .call()
        .map_err(|e| DatasetError::Network(e.to_string()))?;

    response
        .into_json()
        .map_err(|e| DatasetError::InvalidResponse(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_shape_decodes() {
        let json = r#"[{"name": "Turkey", "cities": ["İzmir", "Ankara"]}]"#;
        let records: Vec<CountryRecord> = serde_json::from_str(json).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "Turkey");
        assert_eq!(records[0].cities, vec!["İzmir", "Ankara"]);
    }

    #[test]
    fn test_extra_fields_ignored() {
        // The real export carries iso codes, coordinates, etc. — only
        // name and cities matter here.
        let json = r#"[{"name": "Norway", "iso2": "NO", "cities": ["Oslo"]}]"#;
        let records: Vec<CountryRecord> = serde_json::from_str(json).unwrap();
        assert_eq!(records[0].cities, vec!["Oslo"]);
    }

    #[test]
    fn test_malformed_document_rejected() {
        let result: Result<Vec<CountryRecord>, _> =
            serde_json::from_str(r#"{"name": "not an array"}"#);
        assert!(result.is_err());
    }
}
