use dummyforge_core::Locale;

/// Dispatch a `fake` raw faker over the locale data matching a [`Locale`].
///
/// `fake` locales are distinct types, so the match has to be expanded per
/// faker: `localized!(locale, Name, rng)`.
macro_rules! localized {
    ($locale:expr, $faker:ident, $rng:expr) => {
        match $locale {
            dummyforge_core::Locale::En => {
                let value: String = $faker(fake::locales::EN).fake_with_rng(&mut *$rng);
                value
            }
            dummyforge_core::Locale::Ja => {
                let value: String = $faker(fake::locales::JA_JP).fake_with_rng(&mut *$rng);
                value
            }
        }
    };
}

pub(crate) use localized;

/// Separator placed between address components.
pub fn address_separator(locale: Locale) -> &'static str {
    match locale {
        Locale::En => ", ",
        Locale::Ja => "",
    }
}

// Address pools for `ja`.
pub(crate) const JA_PREFECTURES: &[&str] = &[
    "北海道", "青森県", "岩手県", "宮城県", "秋田県", "山形県", "福島県", "茨城県", "栃木県",
    "群馬県", "埼玉県", "千葉県", "東京都", "神奈川県", "新潟県", "富山県", "石川県", "福井県",
    "山梨県", "長野県", "岐阜県", "静岡県", "愛知県", "三重県", "滋賀県", "京都府", "大阪府",
    "兵庫県", "奈良県", "和歌山県", "鳥取県", "島根県", "岡山県", "広島県", "山口県", "徳島県",
    "香川県", "愛媛県", "高知県", "福岡県", "佐賀県", "長崎県", "熊本県", "大分県", "宮崎県",
    "鹿児島県", "沖縄県",
];

pub(crate) const JA_CITIES: &[&str] = &[
    "札幌市", "仙台市", "さいたま市", "千葉市", "横浜市", "川崎市", "相模原市", "新潟市",
    "静岡市", "浜松市", "名古屋市", "京都市", "大阪市", "堺市", "神戸市", "岡山市", "広島市",
    "北九州市", "福岡市", "熊本市", "八王子市", "町田市", "船橋市", "川口市", "姫路市",
    "金沢市", "宇都宮市", "松山市", "鹿児島市", "那覇市",
];

pub(crate) const JA_TOWNS: &[&str] = &[
    "本町", "中央", "栄町", "緑町", "旭町", "桜木町", "幸町", "昭和町", "末広町", "宮前",
    "東町", "西町", "南町", "北町", "新町", "大手町", "元町", "錦町", "寿町", "日吉町",
];
