// Postal code blocks per prefecture
// Source: Japan Post postal district allocation (first three digits of the
// 7-digit 郵便番号)
//
// Codes are stored as integers, so leading zeros disappear:
// 001-0000 is 10000 and 099-6509 is 996509.
// A prefecture may own several disjoint blocks (Hokkaido has two).

/// One contiguous block of postal codes owned by a prefecture
#[derive(Debug, Clone)]
pub struct ZipRule {
    /// First postal code in the block (inclusive)
    pub start: u32,
    /// Last postal code in the block (inclusive)
    pub end: u32,
    /// Prefecture code that owns the block
    pub code: u8,
}

/// Zip blocks, grouped by prefecture code; within a code in ascending order
pub const ZIP_RULES: &[ZipRule] = &[
    // Hokkaido (001-007, 040-099)
    ZipRule { start: 10000, end: 70895, code: 1 },
    ZipRule { start: 400000, end: 996509, code: 1 },
    ZipRule { start: 300000, end: 399999, code: 2 },      // Aomori 030-039
    ZipRule { start: 200000, end: 299999, code: 3 },      // Iwate 020-029
    ZipRule { start: 9800000, end: 9899999, code: 4 },    // Miyagi 980-989
    ZipRule { start: 100000, end: 199999, code: 5 },      // Akita 010-019
    ZipRule { start: 9900000, end: 9998531, code: 6 },    // Yamagata 990-999
    ZipRule { start: 9600000, end: 9799999, code: 7 },    // Fukushima 960-979

    ZipRule { start: 3000000, end: 3199999, code: 8 },    // Ibaraki 300-319
    ZipRule { start: 3200000, end: 3299999, code: 9 },    // Tochigi 320-329
    ZipRule { start: 3700000, end: 3799999, code: 10 },   // Gunma 370-379
    ZipRule { start: 3300000, end: 3699999, code: 11 },   // Saitama 330-369
    ZipRule { start: 2600000, end: 2999999, code: 12 },   // Chiba 260-299
    ZipRule { start: 1000000, end: 2089999, code: 13 },   // Tokyo 100-208
    ZipRule { start: 2100000, end: 2599999, code: 14 },   // Kanagawa 210-259

    ZipRule { start: 9400000, end: 9599999, code: 15 },   // Niigata 940-959
    ZipRule { start: 9300000, end: 9399999, code: 16 },   // Toyama 930-939
    ZipRule { start: 9200000, end: 9299999, code: 17 },   // Ishikawa 920-929
    ZipRule { start: 9100000, end: 9199999, code: 18 },   // Fukui 910-919
    ZipRule { start: 4000000, end: 4099999, code: 19 },   // Yamanashi 400-409
    ZipRule { start: 3800000, end: 3999999, code: 20 },   // Nagano 380-399
    ZipRule { start: 5000000, end: 5099999, code: 21 },   // Gifu 500-509
    ZipRule { start: 4100000, end: 4399999, code: 22 },   // Shizuoka 410-439
    ZipRule { start: 4400000, end: 4999999, code: 23 },   // Aichi 440-499

    ZipRule { start: 5100000, end: 5199999, code: 24 },   // Mie 510-519
    ZipRule { start: 5200000, end: 5299999, code: 25 },   // Shiga 520-529
    ZipRule { start: 6000000, end: 6299999, code: 26 },   // Kyoto 600-629
    ZipRule { start: 5300000, end: 5999999, code: 27 },   // Osaka 530-599
    ZipRule { start: 6500000, end: 6799999, code: 28 },   // Hyogo 650-679
    ZipRule { start: 6300000, end: 6399999, code: 29 },   // Nara 630-639
    ZipRule { start: 6400000, end: 6499999, code: 30 },   // Wakayama 640-649

    ZipRule { start: 6800000, end: 6899999, code: 31 },   // Tottori 680-689
    ZipRule { start: 6900000, end: 6999999, code: 32 },   // Shimane 690-699
    ZipRule { start: 7000000, end: 7199999, code: 33 },   // Okayama 700-719
    ZipRule { start: 7200000, end: 7399999, code: 34 },   // Hiroshima 720-739
    ZipRule { start: 7400000, end: 7599999, code: 35 },   // Yamaguchi 740-759

    ZipRule { start: 7700000, end: 7799999, code: 36 },   // Tokushima 770-779
    ZipRule { start: 7600000, end: 7699999, code: 37 },   // Kagawa 760-769
    ZipRule { start: 7900000, end: 7999999, code: 38 },   // Ehime 790-799
    ZipRule { start: 7800000, end: 7899999, code: 39 },   // Kochi 780-789

    ZipRule { start: 8000000, end: 8399999, code: 40 },   // Fukuoka 800-839
    ZipRule { start: 8400000, end: 8499999, code: 41 },   // Saga 840-849
    ZipRule { start: 8500000, end: 8599999, code: 42 },   // Nagasaki 850-859
    ZipRule { start: 8600000, end: 8699999, code: 43 },   // Kumamoto 860-869
    ZipRule { start: 8700000, end: 8799999, code: 44 },   // Oita 870-879
    ZipRule { start: 8800000, end: 8899999, code: 45 },   // Miyazaki 880-889
    ZipRule { start: 8900000, end: 8999999, code: 46 },   // Kagoshima 890-899
    ZipRule { start: 9000000, end: 9099999, code: 47 },   // Okinawa 900-909
];

/// Zip blocks owned by one prefecture, in table order
pub fn get_zips_for_code(code: u8) -> Vec<std::ops::RangeInclusive<u32>> {
    ZIP_RULES
        .iter()
        .filter(|rule| rule.code == code)
        .map(|rule| rule.start..=rule.end)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hokkaido_blocks() {
        assert_eq!(get_zips_for_code(1), vec![10000..=70895, 400000..=996509]);
    }

    #[test]
    fn test_every_prefecture_has_a_block() {
        for code in 1..=47 {
            assert!(!get_zips_for_code(code).is_empty(), "code {} has no zips", code);
        }
    }

    #[test]
    fn test_blocks_do_not_overlap() {
        let mut rules: Vec<&ZipRule> = ZIP_RULES.iter().collect();
        rules.sort_by_key(|rule| rule.start);
        for pair in rules.windows(2) {
            assert!(pair[0].start <= pair[0].end);
            assert!(
                pair[0].end < pair[1].start,
                "{}..={} overlaps {}..={}",
                pair[0].start, pair[0].end, pair[1].start, pair[1].end
            );
        }
    }
}
