use dummyforge_core::Locale;
use fake::Fake;
use fake::faker::address::raw::{BuildingNumber, CityName, StateName, StreetName};
use fake::faker::color::raw::HexColor;
use fake::faker::company::raw::CompanyName;
use fake::faker::creditcard::raw::CreditCardNumber;
use fake::faker::internet::raw::{DomainSuffix, IPv4, IPv6, SafeEmail};
use fake::faker::lorem::raw::Word;
use fake::faker::name::raw::Name;
use fake::faker::phone_number::raw::PhoneNumber;
use fake::locales::EN;
use rand::{Rng, RngCore};

use super::locales::{JA_CITIES, JA_PREFECTURES, JA_TOWNS, localized};

/// Locale-aware source of realistic values backed by the `fake` crate.
///
/// The provider holds no state besides its locale; entropy comes from the
/// caller's RNG, so one provider can serve any number of generation calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FakerProvider {
    locale: Locale,
}

impl FakerProvider {
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn full_name(&self, rng: &mut dyn RngCore) -> String {
        localized!(self.locale, Name, rng)
    }

    pub fn phone(&self, rng: &mut dyn RngCore) -> String {
        localized!(self.locale, PhoneNumber, rng)
    }

    pub fn company(&self, rng: &mut dyn RngCore) -> String {
        localized!(self.locale, CompanyName, rng)
    }

    pub fn region(&self, rng: &mut dyn RngCore) -> String {
        match self.locale {
            Locale::En => StateName(EN).fake_with_rng(rng),
            Locale::Ja => pick(JA_PREFECTURES, rng).to_string(),
        }
    }

    pub fn city(&self, rng: &mut dyn RngCore) -> String {
        match self.locale {
            Locale::En => CityName(EN).fake_with_rng(rng),
            Locale::Ja => pick(JA_CITIES, rng).to_string(),
        }
    }

    /// `123 Main Street` for en; `本町3丁目12-5` (town, chome, block, lot) for ja.
    pub fn street_address(&self, rng: &mut dyn RngCore) -> String {
        match self.locale {
            Locale::En => {
                let street: String = StreetName(EN).fake_with_rng(rng);
                let number: String = BuildingNumber(EN).fake_with_rng(rng);
                format!("{number} {street}")
            }
            Locale::Ja => {
                let town = pick(JA_TOWNS, rng);
                let chome = rng.random_range(1..=9_u32);
                let block = rng.random_range(1..=30_u32);
                let lot = rng.random_range(1..=20_u32);
                format!("{town}{chome}丁目{block}-{lot}")
            }
        }
    }

    // Addresses on the wire stay ASCII regardless of locale.
    pub fn email(&self, rng: &mut dyn RngCore) -> String {
        SafeEmail(EN).fake_with_rng(rng)
    }

    pub fn url(&self, rng: &mut dyn RngCore) -> String {
        let word: String = Word(EN).fake_with_rng(rng);
        let suffix: String = DomainSuffix(EN).fake_with_rng(rng);
        format!("https://www.{word}.{suffix}")
    }

    pub fn ipv4(&self, rng: &mut dyn RngCore) -> String {
        IPv4(EN).fake_with_rng(rng)
    }

    pub fn ipv6(&self, rng: &mut dyn RngCore) -> String {
        IPv6(EN).fake_with_rng(rng)
    }

    pub fn color(&self, rng: &mut dyn RngCore) -> String {
        HexColor(EN).fake_with_rng(rng)
    }

    pub fn credit_card(&self, rng: &mut dyn RngCore) -> String {
        CreditCardNumber(EN).fake_with_rng(rng)
    }
}

fn pick(values: &[&'static str], rng: &mut dyn RngCore) -> &'static str {
    values[rng.random_range(0..values.len())]
}
