use std::fmt;
use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Semantic type tag of a field definition.
///
/// The wire form is the camelCase tag used in schema documents
/// (`fullName`, `ipAddress`, `latLong`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataType {
    String,
    Number,
    Boolean,
    Date,
    Email,
    Phone,
    Address,
    FullName,
    Company,
    Department,
    Sales,
    Percentage,
    ProductCode,
    Currency,
    IpAddress,
    Url,
    Color,
    CreditCard,
    LatLong,
    Object,
    Array,
}

impl DataType {
    pub const ALL: &'static [DataType] = &[
        DataType::String,
        DataType::Number,
        DataType::Boolean,
        DataType::Date,
        DataType::Email,
        DataType::Phone,
        DataType::Address,
        DataType::FullName,
        DataType::Company,
        DataType::Department,
        DataType::Sales,
        DataType::Percentage,
        DataType::ProductCode,
        DataType::Currency,
        DataType::IpAddress,
        DataType::Url,
        DataType::Color,
        DataType::CreditCard,
        DataType::LatLong,
        DataType::Object,
        DataType::Array,
    ];

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|ty| ty.as_str() == value)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Number => "number",
            Self::Boolean => "boolean",
            Self::Date => "date",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Address => "address",
            Self::FullName => "fullName",
            Self::Company => "company",
            Self::Department => "department",
            Self::Sales => "sales",
            Self::Percentage => "percentage",
            Self::ProductCode => "productCode",
            Self::Currency => "currency",
            Self::IpAddress => "ipAddress",
            Self::Url => "url",
            Self::Color => "color",
            Self::CreditCard => "creditCard",
            Self::LatLong => "latLong",
            Self::Object => "object",
            Self::Array => "array",
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Locale selector for the fake value provider and phrase pools.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Locale {
    #[default]
    En,
    Ja,
}

impl Locale {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "en" | "en_US" => Some(Self::En),
            "ja" | "ja_JP" => Some(Self::Ja),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Ja => "ja",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Locale {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::parse(value).ok_or_else(|| Error::UnsupportedLocale(value.to_string()))
    }
}

/// Target text format for generated records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Json,
    Yaml,
    Csv,
}

impl OutputFormat {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "json" => Some(Self::Json),
            "yaml" | "yml" => Some(Self::Yaml),
            "csv" => Some(Self::Csv),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Yaml => "yaml",
            Self::Csv => "csv",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::parse(value).ok_or_else(|| Error::UnsupportedFormat(value.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_type_tags_round_trip() {
        for ty in DataType::ALL {
            assert_eq!(DataType::parse(ty.as_str()), Some(*ty));
        }
        assert_eq!(DataType::parse("FullName"), None);
    }

    #[test]
    fn locale_accepts_region_aliases() {
        assert_eq!(Locale::parse("ja_JP"), Some(Locale::Ja));
        assert!("fr".parse::<Locale>().is_err());
    }
}
