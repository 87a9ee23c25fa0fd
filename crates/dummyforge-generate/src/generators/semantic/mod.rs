use dummyforge_core::{LatLongKind, Locale};
use rand::{Rng, RngCore};

use crate::faker_rs::FakerProvider;
use crate::faker_rs::locales::address_separator;
use crate::record::GeneratedValue;

// Coordinates carry four decimal places.
const COORDINATE_SCALE: f64 = 10_000.0;
const LATITUDE_BOUND: i64 = 90 * 10_000;
const LONGITUDE_BOUND: i64 = 180 * 10_000;

const DEPARTMENTS_EN: &[&str] = &[
    "Books",
    "Movies",
    "Music",
    "Games",
    "Electronics",
    "Computers",
    "Home",
    "Garden",
    "Tools",
    "Grocery",
    "Health",
    "Beauty",
    "Toys",
    "Kids",
    "Baby",
    "Clothing",
    "Shoes",
    "Jewelery",
    "Sports",
    "Outdoors",
    "Automotive",
    "Industrial",
];

const DEPARTMENTS_JA: &[&str] = &[
    "営業部",
    "総務部",
    "人事部",
    "経理部",
    "開発部",
    "マーケティング部",
    "企画部",
    "広報部",
    "法務部",
    "情報システム部",
];

/// Region, city and street in that order, joined per locale.
pub fn address(provider: &FakerProvider, rng: &mut dyn RngCore) -> String {
    let region = provider.region(rng);
    let city = provider.city(rng);
    let street = provider.street_address(rng);
    [region, city, street].join(address_separator(provider.locale()))
}

pub fn department(locale: Locale, rng: &mut dyn RngCore) -> &'static str {
    let values = match locale {
        Locale::En => DEPARTMENTS_EN,
        Locale::Ja => DEPARTMENTS_JA,
    };
    pick(values, rng)
}

/// `latitude` and `longitude` yield bare numbers; `both` yields `"lat,lng"`.
pub fn lat_long(kind: LatLongKind, rng: &mut dyn RngCore) -> GeneratedValue {
    match kind {
        LatLongKind::Latitude => GeneratedValue::Float(coordinate(LATITUDE_BOUND, rng)),
        LatLongKind::Longitude => GeneratedValue::Float(coordinate(LONGITUDE_BOUND, rng)),
        LatLongKind::Both => {
            let latitude = coordinate(LATITUDE_BOUND, rng);
            let longitude = coordinate(LONGITUDE_BOUND, rng);
            GeneratedValue::Text(format!("{latitude},{longitude}"))
        }
    }
}

fn coordinate(bound: i64, rng: &mut dyn RngCore) -> f64 {
    rng.random_range(-bound..=bound) as f64 / COORDINATE_SCALE
}

fn pick(values: &[&'static str], rng: &mut dyn RngCore) -> &'static str {
    let idx = rng.random_range(0..values.len());
    values[idx]
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;
    use crate::faker_rs::locales::{JA_CITIES, JA_PREFECTURES};

    #[test]
    fn both_renders_a_comma_joined_pair_in_bounds() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let GeneratedValue::Text(value) = lat_long(LatLongKind::Both, &mut rng) else {
            panic!("expected text");
        };
        let (lat, lng) = value.split_once(',').expect("comma");
        let lat: f64 = lat.parse().expect("latitude");
        let lng: f64 = lng.parse().expect("longitude");
        assert!((-90.0..=90.0).contains(&lat));
        assert!((-180.0..=180.0).contains(&lng));
    }

    #[test]
    fn departments_follow_the_locale() {
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        assert!(DEPARTMENTS_JA.contains(&department(Locale::Ja, &mut rng)));
        assert!(DEPARTMENTS_EN.contains(&department(Locale::En, &mut rng)));
    }

    #[test]
    fn japanese_addresses_compose_prefecture_city_and_street() {
        let street = regex::Regex::new(r"^\p{Han}+[1-9]丁目\d{1,2}-\d{1,2}$").expect("regex");
        let provider = FakerProvider::new(Locale::Ja);
        for seed in 0..20 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let value = address(&provider, &mut rng);
            assert!(!value.contains(", "), "{value}");

            let prefecture = JA_PREFECTURES
                .iter()
                .find(|prefecture| value.starts_with(**prefecture))
                .unwrap_or_else(|| panic!("no prefecture in {value}"));
            let rest = &value[prefecture.len()..];
            let city = JA_CITIES
                .iter()
                .find(|city| rest.starts_with(**city))
                .unwrap_or_else(|| panic!("no city in {value}"));
            let street_part = &rest[city.len()..];
            assert!(street.is_match(street_part), "{value}");
            assert!(!value.chars().any(|ch| ch.is_ascii_alphabetic()), "{value}");
        }
    }
}
