//! The normalized city → country index.
//!
//! Built once, immutable afterwards. Two-phase build: the curated
//! overrides are seeded first, then the bulk dataset fills the gaps —
//! first writer for a key wins, so overrides are never shadowed and
//! duplicate city names across countries keep their first owner.

use super::normalize::normalize;
use super::overrides::MANUAL_OVERRIDES;
use super::types::CountryRecord;
use std::collections::HashMap;

pub struct CityIndex {
    map: HashMap<String, String>,
}

impl CityIndex {
    /// The always-miss index used when the dataset could not be loaded.
    pub fn empty() -> Self {
        Self { map: HashMap::new() }
    }

    /// Build the index from the bulk dataset, seeding overrides first.
    pub fn build(records: &[CountryRecord]) -> Self {
        let mut map = HashMap::new();

        for (city, country) in MANUAL_OVERRIDES {
            map.insert(normalize(city), (*country).to_string());
        }
        let override_count = map.len();

        for record in records {
            for city in &record.cities {
                let key = normalize(city);
                if key.is_empty() {
                    continue;
                }
                map.entry(key).or_insert_with(|| record.name.clone());
            }
        }

        eprintln!(
            "[geo] indexed {} cities ({} curated, {} from dataset)",
            map.len(),
            override_count,
            map.len() - override_count,
        );

        Self { map }
    }

    /// Exact lookup of an already-normalized key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.map.get(key).map(String::as_str)
    }

    /// Suffix fallback for compound place names: any key ending with
    /// `"-" + query` or `" " + query` (e.g. "ekiti" inside "ado-ekiti").
    /// Full-index scan; first hit wins with no tie-break beyond map
    /// iteration order, so the result is approximate when several
    /// countries share the suffix.
    pub fn suffix_match(&self, key: &str) -> Option<&str> {
        let dashed = format!("-{}", key);
        let spaced = format!(" {}", key);
        self.map
            .iter()
            .find(|(k, _)| k.ends_with(&dashed) || k.ends_with(&spaced))
            .map(|(_, country)| country.as_str())
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, cities: &[&str]) -> CountryRecord {
        CountryRecord {
            name: name.to_string(),
            cities: cities.iter().map(|c| c.to_string()).collect(),
        }
    }

    #[test]
    fn test_round_trip() {
        let index = CityIndex::build(&[record("Turkey", &["İzmir", "Ankara"])]);
        assert_eq!(index.get("ankara"), Some("Turkey"));
        assert_eq!(index.get(&normalize("İzmir")), Some("Turkey"));
    }

    #[test]
    fn test_overrides_seeded_before_bulk() {
        // "gaza" is curated as Palestine; a bulk record claiming it must
        // not shadow the override.
        let index = CityIndex::build(&[record("Elsewhere", &["Gaza"])]);
        assert_eq!(index.get("gaza"), Some("Palestine"));
    }

    #[test]
    fn test_first_writer_wins_within_bulk() {
        let index = CityIndex::build(&[
            record("CountryA", &["Springfield"]),
            record("CountryB", &["Springfield"]),
        ]);
        assert_eq!(index.get("springfield"), Some("CountryA"));
    }

    #[test]
    fn test_diacritic_variants_collapse() {
        let index = CityIndex::build(&[record("Turkey", &["Muğla", "Mugla"])]);
        // One entry, reachable through either spelling's key.
        assert_eq!(index.get("mugla"), Some("Turkey"));
    }

    #[test]
    fn test_blank_city_names_skipped() {
        let index = CityIndex::build(&[record("Nowhere", &["", "   "])]);
        assert_eq!(index.get(""), None);
    }

    #[test]
    fn test_suffix_match_dash_and_space() {
        let index = CityIndex::build(&[
            record("Nigeria", &["Ado-Ekiti"]),
            record("United States", &["Lake Wales"]),
        ]);
        assert_eq!(index.suffix_match("ekiti"), Some("Nigeria"));
        assert_eq!(index.suffix_match("wales"), Some("United States"));
        assert_eq!(index.suffix_match("nomatch"), None);
    }

    #[test]
    fn test_empty_index() {
        let index = CityIndex::empty();
        assert!(index.is_empty());
        assert_eq!(index.get("izmir"), None);
        assert_eq!(index.suffix_match("ekiti"), None);
    }
}
