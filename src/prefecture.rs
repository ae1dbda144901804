//! Prefecture record
//!
//! One immutable value per prefecture. Fields are private and exposed through
//! read-only accessors; two records are the same prefecture when their codes
//! match.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::RangeInclusive;

use serde::Serialize;

use crate::reference::areas::{Area, PrefectureKind};

#[derive(Debug, Clone, Serialize)]
pub struct Prefecture {
    /// JIS X 0401 code (1-47)
    code: u8,
    /// Kanji name, e.g. "北海道"
    name: String,
    /// Romanized name, e.g. "Hokkaido"
    name_e: String,
    /// Hiragana reading, e.g. "ほっかいどう"
    name_h: String,
    /// Katakana reading, e.g. "ホッカイドウ"
    name_k: String,
    /// Postal code blocks, inclusive on both ends, leading zeros dropped
    zips: Vec<RangeInclusive<u32>>,
}

impl Prefecture {
    /// Build a record. No validation is done here; `Registry::new` checks
    /// the invariants that span the whole set.
    pub fn build<N, E, H, K, Z>(code: u8, name: N, name_e: E, name_h: H, name_k: K, zips: Z) -> Self
    where
        N: Into<String>,
        E: Into<String>,
        H: Into<String>,
        K: Into<String>,
        Z: IntoIterator<Item = RangeInclusive<u32>>,
    {
        Self {
            code,
            name: name.into(),
            name_e: name_e.into(),
            name_h: name_h.into(),
            name_k: name_k.into(),
            zips: zips.into_iter().collect(),
        }
    }

    pub fn code(&self) -> u8 {
        self.code
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn name_e(&self) -> &str {
        &self.name_e
    }

    pub fn name_h(&self) -> &str {
        &self.name_h
    }

    pub fn name_k(&self) -> &str {
        &self.name_k
    }

    pub fn zips(&self) -> &[RangeInclusive<u32>] {
        &self.zips
    }

    /// All four name fields, kanji first
    pub fn names(&self) -> [&str; 4] {
        [self.name.as_str(), self.name_e.as_str(), self.name_h.as_str(), self.name_k.as_str()]
    }

    pub fn area(&self) -> Option<Area> {
        Area::from_code(self.code)
    }

    pub fn kind(&self) -> Option<PrefectureKind> {
        PrefectureKind::from_name(&self.name)
    }

    pub fn contains_zip(&self, zip: u32) -> bool {
        self.zips.iter().any(|range| range.contains(&zip))
    }
}

impl PartialEq for Prefecture {
    fn eq(&self, other: &Self) -> bool {
        self.code == other.code
    }
}

impl Eq for Prefecture {}

impl Hash for Prefecture {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.code.hash(state);
    }
}

impl PartialOrd for Prefecture {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Prefecture {
    fn cmp(&self, other: &Self) -> Ordering {
        self.code.cmp(&other.code)
    }
}

impl fmt::Display for Prefecture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02} {} ({})", self.code, self.name, self.name_e)
    }
}
