// jp_prefecture library
// Lookup of Japanese prefectures by JIS code, name, or postal code.
//
//     let tokyo = jp_prefecture::find(13);
//     let miyagi = jp_prefecture::find(Query::name("miya"));
//     let sapporo = jp_prefecture::find(Query::zip("060-0000"));

pub mod config;
pub mod error;
pub mod prefecture;
pub mod query;
pub mod reference;

use std::ops::RangeInclusive;

pub use config::Config;
pub use error::RegistryError;
pub use prefecture::Prefecture;
pub use query::{Query, Scalar};
pub use reference::areas::{Area, PrefectureKind};
pub use reference::{setup, Registry, PREFECTURE_COUNT};

/// All 47 prefectures, ascending by code
pub fn all() -> &'static [Prefecture] {
    reference::get_all_prefectures()
}

/// Find a prefecture. Bare integers and strings are codes; use
/// `Query::name` / `Query::zip` for the other lookups.
pub fn find(query: impl Into<Query>) -> Option<&'static Prefecture> {
    reference::find_prefecture(query)
}

/// Build a standalone record (not added to the registry)
pub fn build<Z>(code: u8, name: &str, name_e: &str, name_h: &str, name_k: &str, zips: Z) -> Prefecture
where
    Z: IntoIterator<Item = RangeInclusive<u32>>,
{
    Prefecture::build(code, name, name_e, name_h, name_k, zips)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all() {
        let prefs = all();
        assert_eq!(prefs.len(), 47);
        assert_eq!(prefs.first().map(|p| p.code()), Some(1));
        assert_eq!(prefs.last().map(|p| p.name()), Some("沖縄県"));
    }

    #[test]
    fn test_find_shapes() {
        assert_eq!(find(13).map(|p| p.name_e()), Some("Tokyo"));
        assert_eq!(find(Query::name("osaka")).map(|p| p.code()), Some(27));
        assert_eq!(find(Query::zip("060-0000")).map(|p| p.code()), Some(1));
        assert!(find(Query::zip(70896)).is_none());
    }

    #[test]
    fn test_build() {
        let pref = build(1, "北海道", "Hokkaido", "ほっかいどう", "ホッカイドウ", [10000..=70895, 400000..=996509]);
        assert_eq!(pref.zips(), &[10000..=70895, 400000..=996509]);
        assert_eq!(Some(&pref), find(1));
    }

    #[test]
    fn test_area_of_found_prefecture() {
        assert_eq!(find(47).and_then(|p| p.area()), Some(Area::Kyushu));
        assert_eq!(find(26).and_then(|p| p.kind()), Some(PrefectureKind::Fu));
        assert_eq!(find(13).and_then(|p| p.area()).map(|a| a.name()), Some("関東"));
    }
}
