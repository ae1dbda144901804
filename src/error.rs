// Registry construction errors
//
// Lookups never fail: a missing prefecture is `None`. Only building a
// registry from replacement mapping data, or configuring the global one,
// can produce a `RegistryError`.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RegistryError {
    /// Mapping file could not be read
    #[error("failed to read mapping data {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Mapping file is not valid JSON for its table
    #[error("invalid mapping data {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("expected {expected} prefectures, found {found}")]
    Count { expected: usize, found: usize },

    /// Codes must cover 1..=47 with no gaps
    #[error("prefecture code {0} is missing")]
    MissingCode(u8),

    #[error("duplicate {field} {value:?}")]
    Duplicate { field: &'static str, value: String },

    #[error("zip range {start}..={end} of prefecture {code} is empty")]
    EmptyZipRange { code: u8, start: u32, end: u32 },

    #[error("zip ranges of prefectures {first} and {second} overlap")]
    OverlappingZips { first: u8, second: u8 },

    #[error("zip mapping references unknown prefecture code {0:?}")]
    UnknownZipCode(String),

    #[error("prefecture registry is already initialized")]
    AlreadyInitialized,
}
