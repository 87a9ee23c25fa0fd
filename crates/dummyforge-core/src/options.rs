//! Typed per-kind options and the lenient reader they are parsed with.
//!
//! Every reader returns `None` on a missing key or a value of the wrong
//! shape; callers substitute the documented default. Nothing here fails.

use chrono::{DateTime, NaiveDate, NaiveTime, TimeZone, Utc};
use serde_json::{Map, Value};

/// Upper bound on currency fraction digits; larger values fall back to the default.
pub const MAX_CURRENCY_DECIMALS: u32 = 8;

/// Read-only view over a field's `options` object.
#[derive(Debug, Clone, Copy)]
pub struct OptionMap<'a> {
    map: Option<&'a Map<String, Value>>,
}

impl<'a> OptionMap<'a> {
    /// Wrap raw options; anything other than a JSON object reads as empty.
    pub fn new(options: Option<&'a Value>) -> Self {
        Self {
            map: options.and_then(Value::as_object),
        }
    }

    pub fn get(&self, key: &str) -> Option<&'a Value> {
        self.map.and_then(|map| map.get(key))
    }

    /// Integers, or floats with no fractional part.
    pub fn get_i64(&self, key: &str) -> Option<i64> {
        let value = self.get(key)?;
        value.as_i64().or_else(|| {
            value
                .as_f64()
                .filter(|number| number.is_finite() && number.fract() == 0.0)
                .filter(|number| number.abs() < i64::MAX as f64)
                .map(|number| number as i64)
        })
    }

    pub fn get_u64(&self, key: &str) -> Option<u64> {
        self.get_i64(key).and_then(|value| u64::try_from(value).ok())
    }

    pub fn get_f64(&self, key: &str) -> Option<f64> {
        self.get(key)
            .and_then(Value::as_f64)
            .filter(|value| value.is_finite())
    }

    pub fn get_str(&self, key: &str) -> Option<&'a str> {
        self.get(key).and_then(Value::as_str)
    }

    pub fn get_object(&self, key: &str) -> Option<OptionMap<'a>> {
        self.get(key)
            .and_then(Value::as_object)
            .map(|map| OptionMap { map: Some(map) })
    }
}

/// Inclusive integer bounds read from `options.range`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntRange {
    pub min: i64,
    pub max: i64,
}

impl IntRange {
    pub const NUMBER_DEFAULT: IntRange = IntRange { min: 0, max: 1000 };
    pub const SALES_DEFAULT: IntRange = IntRange {
        min: 10_000,
        max: 1_000_000,
    };

    /// A missing bound takes the default's bound; an inverted range is replaced entirely.
    pub fn from_options(options: &OptionMap<'_>, default: IntRange) -> Self {
        let Some(range) = options.get_object("range") else {
            return default;
        };
        let min = range.get_i64("min").unwrap_or(default.min);
        let max = range.get_i64("max").unwrap_or(default.max);
        if min > max {
            return default;
        }
        Self { min, max }
    }
}

/// Inclusive instant bounds for `date` fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl Default for DateRange {
    fn default() -> Self {
        Self {
            start: start_of_day(default_date(2020, 1, 1)),
            end: end_of_day(default_date(2025, 12, 31)),
        }
    }
}

impl DateRange {
    pub fn from_options(options: &OptionMap<'_>) -> Self {
        let default = Self::default();
        let start = options
            .get_str("startDate")
            .and_then(|value| parse_instant(value, false))
            .unwrap_or(default.start);
        let end = options
            .get_str("endDate")
            .and_then(|value| parse_instant(value, true))
            .unwrap_or(default.end);
        if start > end {
            return default;
        }
        Self { start, end }
    }
}

/// Parse an RFC 3339 instant or a bare `YYYY-MM-DD` date.
///
/// A bare date is the first millisecond of the day, or the last one when
/// `end_of_range` is set, so both bounds include the whole named day.
pub fn parse_instant(value: &str, end_of_range: bool) -> Option<DateTime<Utc>> {
    if let Ok(instant) = DateTime::parse_from_rfc3339(value) {
        return Some(instant.with_timezone(&Utc));
    }
    let date = NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()?;
    Some(if end_of_range {
        end_of_day(date)
    } else {
        start_of_day(date)
    })
}

fn default_date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

fn start_of_day(date: NaiveDate) -> DateTime<Utc> {
    Utc.from_utc_datetime(&date.and_time(NaiveTime::default()))
}

fn end_of_day(date: NaiveDate) -> DateTime<Utc> {
    let time = NaiveTime::from_hms_milli_opt(23, 59, 59, 999).unwrap_or(NaiveTime::default());
    Utc.from_utc_datetime(&date.and_time(time))
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CurrencyType {
    #[default]
    Yen,
    Dollar,
}

impl CurrencyType {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "yen" => Some(Self::Yen),
            "dollar" => Some(Self::Dollar),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Yen => "yen",
            Self::Dollar => "dollar",
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Self::Yen => "¥",
            Self::Dollar => "$",
        }
    }
}

/// Options for formatted `currency` amounts.
#[derive(Debug, Clone, PartialEq)]
pub struct CurrencyOptions {
    pub currency_type: CurrencyType,
    pub min: f64,
    pub max: f64,
    pub decimals: u32,
    /// Explicit symbol; wins over the currency type's symbol.
    pub symbol: Option<String>,
}

impl Default for CurrencyOptions {
    fn default() -> Self {
        Self {
            currency_type: CurrencyType::default(),
            min: Self::DEFAULT_MIN,
            max: Self::DEFAULT_MAX,
            decimals: 0,
            symbol: None,
        }
    }
}

impl CurrencyOptions {
    pub const DEFAULT_MIN: f64 = 1000.0;
    pub const DEFAULT_MAX: f64 = 1_000_000.0;

    pub fn from_options(options: &OptionMap<'_>) -> Self {
        let currency_type = options
            .get_str("currencyType")
            .and_then(CurrencyType::parse)
            .unwrap_or_default();
        let mut min = options.get_f64("min").unwrap_or(Self::DEFAULT_MIN);
        let mut max = options.get_f64("max").unwrap_or(Self::DEFAULT_MAX);
        if min > max {
            min = Self::DEFAULT_MIN;
            max = Self::DEFAULT_MAX;
        }
        let decimals = options
            .get_u64("decimals")
            .and_then(|value| u32::try_from(value).ok())
            .filter(|value| *value <= MAX_CURRENCY_DECIMALS)
            .unwrap_or(0);
        let symbol = options
            .get_str("symbol")
            .filter(|value| !value.is_empty())
            .map(str::to_string);

        Self {
            currency_type,
            min,
            max,
            decimals,
            symbol,
        }
    }

    pub fn symbol(&self) -> &str {
        self.symbol
            .as_deref()
            .unwrap_or_else(|| self.currency_type.symbol())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum IpVersion {
    #[default]
    V4,
    V6,
}

impl IpVersion {
    pub fn from_options(options: &OptionMap<'_>) -> Self {
        match options.get_str("ipVersion") {
            Some("IPv6") => Self::V6,
            _ => Self::V4,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::V4 => "IPv4",
            Self::V6 => "IPv6",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LatLongKind {
    Latitude,
    Longitude,
    #[default]
    Both,
}

impl LatLongKind {
    pub fn from_options(options: &OptionMap<'_>) -> Self {
        match options.get_str("latLongType") {
            Some("latitude") => Self::Latitude,
            Some("longitude") => Self::Longitude,
            _ => Self::Both,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Latitude => "latitude",
            Self::Longitude => "longitude",
            Self::Both => "both",
        }
    }
}

/// Element count for `array` fields.
pub const DEFAULT_ARRAY_LENGTH: usize = 1;

pub fn array_length(options: &OptionMap<'_>) -> usize {
    options
        .get_u64("arrayLength")
        .and_then(|value| usize::try_from(value).ok())
        .unwrap_or(DEFAULT_ARRAY_LENGTH)
}
