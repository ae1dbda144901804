// Reference data module - the prefecture registry
// Source: JIS X 0401 prefecture codes and Japan Post postal districts
//
// Lookup strategy:
// - Code: exact match on the JIS code after integer coercion
// - Name: exact match on any of the four names, then prefix match;
//   both case-insensitive, ties go to the lowest code
// - Zip: the record whose zip blocks contain the postal code
//
// Nothing here mutates after construction. The global registry is built once,
// on first use or by `setup`, and shared read-only afterwards.

pub mod areas;
pub mod prefectures;
pub mod zips;

use std::collections::HashSet;
use std::sync::OnceLock;

use crate::config::Config;
use crate::error::RegistryError;
use crate::prefecture::Prefecture;
use crate::query::Query;
use prefectures::PREFECTURE_DATA;

/// Number of prefectures a registry must hold
pub const PREFECTURE_COUNT: usize = 47;

/// Process-wide registry, initialized once
static REGISTRY: OnceLock<Registry> = OnceLock::new();

/// Get or initialize the global registry from the built-in tables
fn get_registry() -> &'static Registry {
    REGISTRY.get_or_init(|| {
        let registry = Registry::embedded();
        log::info!("Prefecture registry initialized with {} entries", registry.len());
        registry
    })
}

/// Ordered, validated set of prefectures
#[derive(Debug, Clone)]
pub struct Registry {
    prefectures: Vec<Prefecture>,
}

impl Registry {
    /// Registry over the compiled-in prefecture and zip tables.
    ///
    /// The tables are checked by tests, so this skips validation.
    pub fn embedded() -> Self {
        let prefectures = PREFECTURE_DATA
            .iter()
            .map(|e| {
                Prefecture::build(e.code, e.name, e.name_e, e.name_h, e.name_k, zips::get_zips_for_code(e.code))
            })
            .collect();
        Self { prefectures }
    }

    /// Validate a record set and order it by code
    pub fn new(mut prefectures: Vec<Prefecture>) -> Result<Self, RegistryError> {
        prefectures.sort_by_key(|p| p.code());

        check_unique(&prefectures, "code", |p| p.code().to_string())?;
        check_unique(&prefectures, "name", |p| p.name().to_string())?;
        check_unique(&prefectures, "name_e", |p| p.name_e().to_lowercase())?;
        check_unique(&prefectures, "name_h", |p| p.name_h().to_string())?;
        check_unique(&prefectures, "name_k", |p| p.name_k().to_string())?;

        if prefectures.len() != PREFECTURE_COUNT {
            return Err(RegistryError::Count {
                expected: PREFECTURE_COUNT,
                found: prefectures.len(),
            });
        }
        for (i, pref) in prefectures.iter().enumerate() {
            let expected = (i + 1) as u8;
            if pref.code() != expected {
                return Err(RegistryError::MissingCode(expected));
            }
        }

        check_zips(&prefectures)?;

        Ok(Self { prefectures })
    }

    /// Build from a configuration: built-in tables, replaced by whatever
    /// mapping files the configuration names
    pub fn load(config: &Config) -> Result<Self, RegistryError> {
        if config.is_embedded() {
            return Ok(Self::embedded());
        }
        Self::new(config.load_records()?)
    }

    /// All prefectures, ascending by code
    pub fn all(&self) -> &[Prefecture] {
        &self.prefectures
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Prefecture> {
        self.prefectures.iter()
    }

    pub fn len(&self) -> usize {
        self.prefectures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prefectures.is_empty()
    }

    /// Dispatch a query to the matching strategy
    pub fn find(&self, query: &Query) -> Option<&Prefecture> {
        log::debug!("Looking up prefecture: {:?}", query);
        match query {
            Query::Code(value) => self.find_by_code(value.to_code()?),
            Query::Name(name) => self.find_by_name(name),
            Query::Zip(value) => self.find_by_zip(value.to_zip()?),
        }
    }

    pub fn find_by_code(&self, code: u8) -> Option<&Prefecture> {
        self.prefectures.iter().find(|p| p.code() == code)
    }

    /// Exact match on any name first, then prefix match. Both ignore case;
    /// the lowest code wins when several prefectures match.
    pub fn find_by_name(&self, name: &str) -> Option<&Prefecture> {
        let needle = name.to_lowercase();

        self.prefectures
            .iter()
            .find(|p| p.names().iter().any(|n| n.to_lowercase() == needle))
            .or_else(|| {
                self.prefectures
                    .iter()
                    .find(|p| p.names().iter().any(|n| n.to_lowercase().starts_with(&needle)))
            })
    }

    pub fn find_by_zip(&self, zip: u32) -> Option<&Prefecture> {
        self.prefectures.iter().find(|p| p.contains_zip(zip))
    }
}

impl<'a> IntoIterator for &'a Registry {
    type Item = &'a Prefecture;
    type IntoIter = std::slice::Iter<'a, Prefecture>;

    fn into_iter(self) -> Self::IntoIter {
        self.prefectures.iter()
    }
}

fn check_unique<F>(prefectures: &[Prefecture], field: &'static str, key: F) -> Result<(), RegistryError>
where
    F: Fn(&Prefecture) -> String,
{
    let mut seen = HashSet::with_capacity(prefectures.len());
    for pref in prefectures {
        let value = key(pref);
        if !seen.insert(value.clone()) {
            return Err(RegistryError::Duplicate { field, value });
        }
    }
    Ok(())
}

fn check_zips(prefectures: &[Prefecture]) -> Result<(), RegistryError> {
    let mut blocks = Vec::new();
    for pref in prefectures {
        for range in pref.zips() {
            if range.start() > range.end() {
                return Err(RegistryError::EmptyZipRange {
                    code: pref.code(),
                    start: *range.start(),
                    end: *range.end(),
                });
            }
            blocks.push((*range.start(), *range.end(), pref.code()));
        }
    }

    blocks.sort_unstable();
    for pair in blocks.windows(2) {
        let (_, end, first) = pair[0];
        let (start, _, second) = pair[1];
        if start <= end {
            return Err(RegistryError::OverlappingZips { first, second });
        }
    }
    Ok(())
}

/// Initialize the global registry from a configuration.
///
/// Must run before the first `all`/`find`; afterwards the registry is fixed
/// and this returns `AlreadyInitialized`.
pub fn setup(config: &Config) -> Result<(), RegistryError> {
    if REGISTRY.get().is_some() {
        log::warn!("Prefecture registry already initialized, ignoring setup");
        return Err(RegistryError::AlreadyInitialized);
    }
    let registry = Registry::load(config)?;
    let count = registry.len();
    REGISTRY.set(registry).map_err(|_| {
        log::warn!("Prefecture registry initialized concurrently, ignoring setup");
        RegistryError::AlreadyInitialized
    })?;
    log::info!("Prefecture registry configured with {} entries", count);
    Ok(())
}

/// Get all prefectures, ascending by code
pub fn get_all_prefectures() -> &'static [Prefecture] {
    get_registry().all()
}

/// Find a prefecture by code, name, or zip
pub fn find_prefecture(query: impl Into<Query>) -> Option<&'static Prefecture> {
    get_registry().find(&query.into())
}

/// The global registry itself
pub fn registry() -> &'static Registry {
    get_registry()
}
