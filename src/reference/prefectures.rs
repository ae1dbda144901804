// Japanese prefectures - JIS X 0401 numbering
// Source: JIS X 0401 (都道府県コード) with kana readings as published by
// the Geospatial Information Authority of Japan
//
// Fields:
// - code: JIS prefecture code (1-47), also the table order
// - name: kanji name including the 都/道/府/県 suffix
// - name_e: romanized name without macrons or suffix
// - name_h / name_k: full reading in hiragana / katakana, suffix included
//
// Zip ranges live in zips.rs, keyed by code.

/// Static source row for one prefecture
#[derive(Debug, Clone)]
pub struct PrefectureEntry {
    pub code: u8,
    pub name: &'static str,
    pub name_e: &'static str,
    pub name_h: &'static str,
    pub name_k: &'static str,
}

/// All 47 prefectures, ascending by code
pub const PREFECTURE_DATA: &[PrefectureEntry] = &[
    // =========================================================================
    // HOKKAIDO / TOHOKU
    // =========================================================================
    PrefectureEntry { code: 1, name: "北海道", name_e: "Hokkaido", name_h: "ほっかいどう", name_k: "ホッカイドウ" },
    PrefectureEntry { code: 2, name: "青森県", name_e: "Aomori", name_h: "あおもりけん", name_k: "アオモリケン" },
    PrefectureEntry { code: 3, name: "岩手県", name_e: "Iwate", name_h: "いわてけん", name_k: "イワテケン" },
    PrefectureEntry { code: 4, name: "宮城県", name_e: "Miyagi", name_h: "みやぎけん", name_k: "ミヤギケン" },
    PrefectureEntry { code: 5, name: "秋田県", name_e: "Akita", name_h: "あきたけん", name_k: "アキタケン" },
    PrefectureEntry { code: 6, name: "山形県", name_e: "Yamagata", name_h: "やまがたけん", name_k: "ヤマガタケン" },
    PrefectureEntry { code: 7, name: "福島県", name_e: "Fukushima", name_h: "ふくしまけん", name_k: "フクシマケン" },

    // =========================================================================
    // KANTO
    // =========================================================================
    PrefectureEntry { code: 8, name: "茨城県", name_e: "Ibaraki", name_h: "いばらきけん", name_k: "イバラキケン" },
    PrefectureEntry { code: 9, name: "栃木県", name_e: "Tochigi", name_h: "とちぎけん", name_k: "トチギケン" },
    PrefectureEntry { code: 10, name: "群馬県", name_e: "Gunma", name_h: "ぐんまけん", name_k: "グンマケン" },
    PrefectureEntry { code: 11, name: "埼玉県", name_e: "Saitama", name_h: "さいたまけん", name_k: "サイタマケン" },
    PrefectureEntry { code: 12, name: "千葉県", name_e: "Chiba", name_h: "ちばけん", name_k: "チバケン" },
    PrefectureEntry { code: 13, name: "東京都", name_e: "Tokyo", name_h: "とうきょうと", name_k: "トウキョウト" },
    PrefectureEntry { code: 14, name: "神奈川県", name_e: "Kanagawa", name_h: "かながわけん", name_k: "カナガワケン" },

    // =========================================================================
    // CHUBU
    // =========================================================================
    PrefectureEntry { code: 15, name: "新潟県", name_e: "Niigata", name_h: "にいがたけん", name_k: "ニイガタケン" },
    PrefectureEntry { code: 16, name: "富山県", name_e: "Toyama", name_h: "とやまけん", name_k: "トヤマケン" },
    PrefectureEntry { code: 17, name: "石川県", name_e: "Ishikawa", name_h: "いしかわけん", name_k: "イシカワケン" },
    PrefectureEntry { code: 18, name: "福井県", name_e: "Fukui", name_h: "ふくいけん", name_k: "フクイケン" },
    PrefectureEntry { code: 19, name: "山梨県", name_e: "Yamanashi", name_h: "やまなしけん", name_k: "ヤマナシケン" },
    PrefectureEntry { code: 20, name: "長野県", name_e: "Nagano", name_h: "ながのけん", name_k: "ナガノケン" },
    PrefectureEntry { code: 21, name: "岐阜県", name_e: "Gifu", name_h: "ぎふけん", name_k: "ギフケン" },
    PrefectureEntry { code: 22, name: "静岡県", name_e: "Shizuoka", name_h: "しずおかけん", name_k: "シズオカケン" },
    PrefectureEntry { code: 23, name: "愛知県", name_e: "Aichi", name_h: "あいちけん", name_k: "アイチケン" },

    // =========================================================================
    // KINKI
    // =========================================================================
    PrefectureEntry { code: 24, name: "三重県", name_e: "Mie", name_h: "みえけん", name_k: "ミエケン" },
    PrefectureEntry { code: 25, name: "滋賀県", name_e: "Shiga", name_h: "しがけん", name_k: "シガケン" },
    PrefectureEntry { code: 26, name: "京都府", name_e: "Kyoto", name_h: "きょうとふ", name_k: "キョウトフ" },
    PrefectureEntry { code: 27, name: "大阪府", name_e: "Osaka", name_h: "おおさかふ", name_k: "オオサカフ" },
    PrefectureEntry { code: 28, name: "兵庫県", name_e: "Hyogo", name_h: "ひょうごけん", name_k: "ヒョウゴケン" },
    PrefectureEntry { code: 29, name: "奈良県", name_e: "Nara", name_h: "ならけん", name_k: "ナラケン" },
    PrefectureEntry { code: 30, name: "和歌山県", name_e: "Wakayama", name_h: "わかやまけん", name_k: "ワカヤマケン" },

    // =========================================================================
    // CHUGOKU
    // =========================================================================
    PrefectureEntry { code: 31, name: "鳥取県", name_e: "Tottori", name_h: "とっとりけん", name_k: "トットリケン" },
    PrefectureEntry { code: 32, name: "島根県", name_e: "Shimane", name_h: "しまねけん", name_k: "シマネケン" },
    PrefectureEntry { code: 33, name: "岡山県", name_e: "Okayama", name_h: "おかやまけん", name_k: "オカヤマケン" },
    PrefectureEntry { code: 34, name: "広島県", name_e: "Hiroshima", name_h: "ひろしまけん", name_k: "ヒロシマケン" },
    PrefectureEntry { code: 35, name: "山口県", name_e: "Yamaguchi", name_h: "やまぐちけん", name_k: "ヤマグチケン" },

    // =========================================================================
    // SHIKOKU
    // =========================================================================
    PrefectureEntry { code: 36, name: "徳島県", name_e: "Tokushima", name_h: "とくしまけん", name_k: "トクシマケン" },
    PrefectureEntry { code: 37, name: "香川県", name_e: "Kagawa", name_h: "かがわけん", name_k: "カガワケン" },
    PrefectureEntry { code: 38, name: "愛媛県", name_e: "Ehime", name_h: "えひめけん", name_k: "エヒメケン" },
    PrefectureEntry { code: 39, name: "高知県", name_e: "Kochi", name_h: "こうちけん", name_k: "コウチケン" },

    // =========================================================================
    // KYUSHU / OKINAWA
    // =========================================================================
    PrefectureEntry { code: 40, name: "福岡県", name_e: "Fukuoka", name_h: "ふくおかけん", name_k: "フクオカケン" },
    PrefectureEntry { code: 41, name: "佐賀県", name_e: "Saga", name_h: "さがけん", name_k: "サガケン" },
    PrefectureEntry { code: 42, name: "長崎県", name_e: "Nagasaki", name_h: "ながさきけん", name_k: "ナガサキケン" },
    PrefectureEntry { code: 43, name: "熊本県", name_e: "Kumamoto", name_h: "くまもとけん", name_k: "クマモトケン" },
    PrefectureEntry { code: 44, name: "大分県", name_e: "Oita", name_h: "おおいたけん", name_k: "オオイタケン" },
    PrefectureEntry { code: 45, name: "宮崎県", name_e: "Miyazaki", name_h: "みやざきけん", name_k: "ミヤザキケン" },
    PrefectureEntry { code: 46, name: "鹿児島県", name_e: "Kagoshima", name_h: "かごしまけん", name_k: "カゴシマケン" },
    PrefectureEntry { code: 47, name: "沖縄県", name_e: "Okinawa", name_h: "おきなわけん", name_k: "オキナワケン" },
];
