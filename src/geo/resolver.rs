//! City → country resolver — lifecycle and lookup fallback chain.
//!
//! Lookup flow:  exact match → comma segments → slash/dash segments →
//!               suffix match (5+ chars) → None
//!
//! The index is loaded at most once per resolver. Concurrent
//! `initialize()` callers share one in-flight load (single-flight); a
//! failed load completes with an empty index rather than erroring, so
//! country resolution degrades to always-miss instead of taking the
//! host application down. Lookups never fail — a miss and a not-yet-
//! loaded index both read as `None`; callers that need to tell them
//! apart consult `is_ready()`.

use super::dataset::{fetch_dataset, DEFAULT_DATASET_URL};
use super::index::CityIndex;
use super::normalize::normalize;
use super::snapshot::SnapshotStore;
use super::types::{CountryRecord, DatasetError};
use std::sync::Arc;
use tokio::sync::OnceCell;

/// Produces the raw dataset for the index build. Injectable for tests.
pub type DatasetLoader = Arc<dyn Fn() -> Result<Vec<CountryRecord>, DatasetError> + Send + Sync>;

/// How the resolver sources its dataset.
pub struct ResolverConfig {
    pub dataset_url: String,
    /// None disables the disk snapshot entirely.
    pub snapshot: Option<SnapshotStore>,
    /// Skip the network; use only the disk snapshot.
    pub offline: bool,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            dataset_url: DEFAULT_DATASET_URL.to_string(),
            snapshot: Some(SnapshotStore::open()),
            offline: false,
        }
    }
}

pub struct CityCountryResolver {
    index: OnceCell<CityIndex>,
    loader: DatasetLoader,
}

impl CityCountryResolver {
    pub fn new(config: ResolverConfig) -> Self {
        Self {
            index: OnceCell::new(),
            loader: Arc::new(move || load_records(&config)),
        }
    }

    /// Create a resolver with a custom dataset loader (for testing).
    pub fn with_loader(loader: DatasetLoader) -> Self {
        Self { index: OnceCell::new(), loader }
    }

    /// Create a resolver whose index is built from in-memory records
    /// on first use (for testing).
    pub fn with_records(records: Vec<CountryRecord>) -> Self {
        Self::with_loader(Arc::new(move || Ok(records.clone())))
    }

    /// Load the dataset and build the index, exactly once. Idempotent:
    /// later calls return immediately, concurrent calls await the same
    /// in-flight load. Never fails — a load error leaves an empty,
    /// always-miss index.
    pub async fn initialize(&self) {
        self.index
            .get_or_init(|| async {
                let loader = Arc::clone(&self.loader);
                let loaded = tokio::task::spawn_blocking(move || loader())
                    .await
                    .unwrap_or_else(|e| Err(DatasetError::Network(e.to_string())));

                match loaded {
                    Ok(records) => CityIndex::build(&records),
                    Err(e) => {
                        eprintln!("[geo] failed to load city dataset: {}", e);
                        CityIndex::empty()
                    }
                }
            })
            .await;
    }

    /// Resolve a city name, initializing first if needed.
    pub async fn resolve(&self, city: &str) -> Option<String> {
        if city.trim().is_empty() {
            return None;
        }
        self.initialize().await;
        self.resolve_sync(city)
    }

    /// Non-blocking lookup. Returns None until `initialize()` has
    /// completed — does not trigger loading.
    pub fn resolve_sync(&self, city: &str) -> Option<String> {
        let index = self.index.get()?;
        lookup(index, city).map(str::to_string)
    }

    /// Whether the index has been built and is non-empty. An empty
    /// index (failed load) reads as not ready.
    pub fn is_ready(&self) -> bool {
        self.index.get().is_some_and(|i| !i.is_empty())
    }

    /// Number of indexed city keys (0 until ready).
    pub fn entry_count(&self) -> usize {
        self.index.get().map_or(0, CityIndex::len)
    }
}

/// The fallback chain. Segments are cut from the raw input and
/// normalized individually, so "Fethiye, Muğla" tries "fethiye" then
/// "mugla".
fn lookup<'a>(index: &'a CityIndex, city: &str) -> Option<&'a str> {
    let key = normalize(city);
    if key.is_empty() {
        return None;
    }

    if let Some(country) = index.get(&key) {
        return Some(country);
    }

    // "City, Province" — the more specific segment usually leads.
    if city.contains(',') {
        for part in city.split(',') {
            if let Some(country) = index.get(&normalize(part.trim())) {
                return Some(country);
            }
        }
    }

    // "City/Province" or "City - Province".
    for separator in ["/", " - ", " / "] {
        if city.contains(separator) {
            for part in city.split(separator) {
                if let Some(country) = index.get(&normalize(part.trim())) {
                    return Some(country);
                }
            }
        }
    }

    // Compound names: 5+ chars avoids short-fragment false positives.
    if key.chars().count() >= 5 {
        return index.suffix_match(&key);
    }

    None
}

/// Default production loader: fresh snapshot → network (persisting on
/// success) → any snapshot → error.
fn load_records(config: &ResolverConfig) -> Result<Vec<CountryRecord>, DatasetError> {
    if let Some(ref snapshot) = config.snapshot {
        if let Some(records) = snapshot.load_fresh() {
            return Ok(records);
        }
    }

    if config.offline {
        if let Some(ref snapshot) = config.snapshot {
            if let Some(records) = snapshot.load_any() {
                return Ok(records);
            }
        }
        return Err(DatasetError::Network(
            "offline mode and no usable dataset snapshot".into(),
        ));
    }

    match fetch_dataset(&config.dataset_url) {
        Ok(records) => {
            if let Some(ref snapshot) = config.snapshot {
                snapshot.store(&records);
            }
            Ok(records)
        }
        Err(e) => {
            // A stale snapshot beats an empty index.
            if let Some(ref snapshot) = config.snapshot {
                if let Some(records) = snapshot.load_any() {
                    eprintln!("[geo] dataset fetch failed ({}), using stale snapshot", e);
                    return Ok(records);
                }
            }
            Err(e)
        }
    }
}
