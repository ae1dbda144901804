// Regional classification of prefectures
// Eight-region scheme (八地方区分); Okinawa is grouped with Kyushu.
//
// Both the region and the administrative kind are derived data: neither is
// stored on a record, they are computed from the code and the kanji name.

use serde::Serialize;

/// Traditional region (地方) a prefecture belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Area {
    Hokkaido,
    Tohoku,
    Kanto,
    Chubu,
    Kinki,
    Chugoku,
    Shikoku,
    Kyushu,
}

impl Area {
    pub const ALL: [Area; 8] = [
        Area::Hokkaido,
        Area::Tohoku,
        Area::Kanto,
        Area::Chubu,
        Area::Kinki,
        Area::Chugoku,
        Area::Shikoku,
        Area::Kyushu,
    ];

    /// Region for a prefecture code, `None` outside 1..=47
    pub fn from_code(code: u8) -> Option<Area> {
        match code {
            1 => Some(Area::Hokkaido),
            2..=7 => Some(Area::Tohoku),
            8..=14 => Some(Area::Kanto),
            15..=23 => Some(Area::Chubu),
            24..=30 => Some(Area::Kinki),
            31..=35 => Some(Area::Chugoku),
            36..=39 => Some(Area::Shikoku),
            40..=47 => Some(Area::Kyushu),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Area::Hokkaido => "北海道",
            Area::Tohoku => "東北",
            Area::Kanto => "関東",
            Area::Chubu => "中部",
            Area::Kinki => "近畿",
            Area::Chugoku => "中国",
            Area::Shikoku => "四国",
            Area::Kyushu => "九州",
        }
    }

    pub fn name_e(&self) -> &'static str {
        match self {
            Area::Hokkaido => "Hokkaido",
            Area::Tohoku => "Tohoku",
            Area::Kanto => "Kanto",
            Area::Chubu => "Chubu",
            Area::Kinki => "Kinki",
            Area::Chugoku => "Chugoku",
            Area::Shikoku => "Shikoku",
            Area::Kyushu => "Kyushu",
        }
    }
}

/// Administrative kind, read off the last character of the kanji name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PrefectureKind {
    /// 都 (Tokyo)
    To,
    /// 道 (Hokkaido)
    Do,
    /// 府 (Kyoto, Osaka)
    Fu,
    /// 県
    Ken,
}

impl PrefectureKind {
    pub fn from_name(name: &str) -> Option<PrefectureKind> {
        match name.chars().last()? {
            '都' => Some(PrefectureKind::To),
            '道' => Some(PrefectureKind::Do),
            '府' => Some(PrefectureKind::Fu),
            '県' => Some(PrefectureKind::Ken),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PrefectureKind::To => "都",
            PrefectureKind::Do => "道",
            PrefectureKind::Fu => "府",
            PrefectureKind::Ken => "県",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_area_boundaries() {
        assert_eq!(Area::from_code(1), Some(Area::Hokkaido));
        assert_eq!(Area::from_code(7), Some(Area::Tohoku));
        assert_eq!(Area::from_code(13), Some(Area::Kanto));
        assert_eq!(Area::from_code(26), Some(Area::Kinki));
        assert_eq!(Area::from_code(47), Some(Area::Kyushu));
        assert_eq!(Area::from_code(0), None);
        assert_eq!(Area::from_code(48), None);
    }

    #[test]
    fn test_every_code_has_an_area() {
        for code in 1..=47 {
            assert!(Area::from_code(code).is_some(), "code {} has no area", code);
        }
    }

    #[test]
    fn test_all_areas_in_order() {
        assert_eq!(Area::ALL.len(), 8);
        assert_eq!(Area::ALL[0], Area::Hokkaido);
        assert_eq!(Area::ALL[7], Area::Kyushu);
        let names: Vec<&str> = Area::ALL.iter().map(|a| a.name_e()).collect();
        assert_eq!(
            names,
            ["Hokkaido", "Tohoku", "Kanto", "Chubu", "Kinki", "Chugoku", "Shikoku", "Kyushu"]
        );
        assert_eq!(Area::Kinki.name(), "近畿");
    }

    #[test]
    fn test_kind_round_trips_suffix() {
        for kind in [PrefectureKind::To, PrefectureKind::Do, PrefectureKind::Fu, PrefectureKind::Ken] {
            let name = format!("試験{}", kind.as_str());
            assert_eq!(PrefectureKind::from_name(&name), Some(kind));
        }
    }

    #[test]
    fn test_kind_from_name() {
        assert_eq!(PrefectureKind::from_name("東京都"), Some(PrefectureKind::To));
        assert_eq!(PrefectureKind::from_name("北海道"), Some(PrefectureKind::Do));
        assert_eq!(PrefectureKind::from_name("大阪府"), Some(PrefectureKind::Fu));
        assert_eq!(PrefectureKind::from_name("沖縄県"), Some(PrefectureKind::Ken));
        assert_eq!(PrefectureKind::from_name("うどん"), None);
        assert_eq!(PrefectureKind::from_name(""), None);
    }
}
