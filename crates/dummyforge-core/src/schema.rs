use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};

use crate::options::{
    CurrencyOptions, DEFAULT_ARRAY_LENGTH, DateRange, IntRange, IpVersion, LatLongKind,
    OptionMap, array_length,
};
use crate::types::{DataType, Locale};

/// Wire form of one schema node, as it appears in JSON/YAML documents.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct FieldSpec {
    /// Opaque identifier, stable across edits.
    #[serde(default)]
    pub id: String,
    /// Key used in generated records; may be empty.
    #[serde(default)]
    pub name: String,
    /// Semantic type tag (`email`, `currency`, `object`, ...).
    #[serde(rename = "type", default)]
    pub data_type: String,
    /// Type-specific configuration; unknown keys are ignored.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Value>,
    /// Children of an `object` field.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fields: Option<Vec<FieldSpec>>,
    /// Item template of an `array` field.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_definition: Option<Box<FieldSpec>>,
}

/// A schema node with its options already resolved against defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "FieldSpec", into = "FieldSpec")]
pub struct FieldDefinition {
    pub id: String,
    pub name: String,
    pub kind: FieldKind,
}

/// One variant per semantic type, carrying only the options that type reads.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldKind {
    String,
    Number(IntRange),
    Boolean,
    Date(DateRange),
    Email,
    Phone,
    Address,
    FullName,
    Company,
    Department,
    Sales(IntRange),
    Percentage,
    ProductCode,
    Currency(CurrencyOptions),
    IpAddress(IpVersion),
    Url,
    Color,
    CreditCard,
    LatLong(LatLongKind),
    Object(Vec<FieldDefinition>),
    Array(ArrayItems),
    /// Tag outside the known set; generates an empty string.
    Unknown(String),
}

/// Homogeneous array template.
#[derive(Debug, Clone, PartialEq)]
pub struct ArrayItems {
    pub item: Option<Box<FieldDefinition>>,
    pub length: usize,
}

impl ArrayItems {
    pub fn new(item: FieldDefinition, length: usize) -> Self {
        Self {
            item: Some(Box::new(item)),
            length,
        }
    }
}

impl FieldDefinition {
    /// Build a definition with a fresh id.
    pub fn new(name: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name: name.into(),
            kind,
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn data_type(&self) -> Option<DataType> {
        self.kind.data_type()
    }
}

impl FieldKind {
    /// Resolve a wire tag and its raw options into a typed kind.
    pub fn resolve(
        tag: &str,
        options: Option<&Value>,
        fields: Option<Vec<FieldSpec>>,
        item: Option<Box<FieldSpec>>,
    ) -> Self {
        let Some(data_type) = DataType::parse(tag) else {
            return Self::Unknown(tag.to_string());
        };
        let options = OptionMap::new(options);

        match data_type {
            DataType::String => Self::String,
            DataType::Number => Self::Number(IntRange::from_options(
                &options,
                IntRange::NUMBER_DEFAULT,
            )),
            DataType::Boolean => Self::Boolean,
            DataType::Date => Self::Date(DateRange::from_options(&options)),
            DataType::Email => Self::Email,
            DataType::Phone => Self::Phone,
            DataType::Address => Self::Address,
            DataType::FullName => Self::FullName,
            DataType::Company => Self::Company,
            DataType::Department => Self::Department,
            DataType::Sales => Self::Sales(IntRange::from_options(
                &options,
                IntRange::SALES_DEFAULT,
            )),
            DataType::Percentage => Self::Percentage,
            DataType::ProductCode => Self::ProductCode,
            DataType::Currency => Self::Currency(CurrencyOptions::from_options(&options)),
            DataType::IpAddress => Self::IpAddress(IpVersion::from_options(&options)),
            DataType::Url => Self::Url,
            DataType::Color => Self::Color,
            DataType::CreditCard => Self::CreditCard,
            DataType::LatLong => Self::LatLong(LatLongKind::from_options(&options)),
            DataType::Object => Self::Object(
                fields
                    .unwrap_or_default()
                    .into_iter()
                    .map(FieldDefinition::from)
                    .collect(),
            ),
            DataType::Array => Self::Array(ArrayItems {
                item: item.map(|spec| Box::new(FieldDefinition::from(*spec))),
                length: array_length(&options),
            }),
        }
    }

    pub fn data_type(&self) -> Option<DataType> {
        let data_type = match self {
            Self::String => DataType::String,
            Self::Number(_) => DataType::Number,
            Self::Boolean => DataType::Boolean,
            Self::Date(_) => DataType::Date,
            Self::Email => DataType::Email,
            Self::Phone => DataType::Phone,
            Self::Address => DataType::Address,
            Self::FullName => DataType::FullName,
            Self::Company => DataType::Company,
            Self::Department => DataType::Department,
            Self::Sales(_) => DataType::Sales,
            Self::Percentage => DataType::Percentage,
            Self::ProductCode => DataType::ProductCode,
            Self::Currency(_) => DataType::Currency,
            Self::IpAddress(_) => DataType::IpAddress,
            Self::Url => DataType::Url,
            Self::Color => DataType::Color,
            Self::CreditCard => DataType::CreditCard,
            Self::LatLong(_) => DataType::LatLong,
            Self::Object(_) => DataType::Object,
            Self::Array(_) => DataType::Array,
            Self::Unknown(_) => return None,
        };
        Some(data_type)
    }

    pub fn type_tag(&self) -> &str {
        match self {
            Self::Unknown(tag) => tag.as_str(),
            known => known.data_type().map(DataType::as_str).unwrap_or_default(),
        }
    }

    /// Non-default options in wire form, or `None` when everything is default.
    fn options_value(&self) -> Option<Value> {
        let mut options = Map::new();
        match self {
            Self::Number(range) => push_range(&mut options, *range, IntRange::NUMBER_DEFAULT),
            Self::Sales(range) => push_range(&mut options, *range, IntRange::SALES_DEFAULT),
            Self::Date(range) if *range != DateRange::default() => {
                options.insert("startDate".into(), json!(range.start.to_rfc3339()));
                options.insert("endDate".into(), json!(range.end.to_rfc3339()));
            }
            Self::Currency(currency) => {
                let default = CurrencyOptions::default();
                if currency.currency_type != default.currency_type {
                    options.insert(
                        "currencyType".into(),
                        json!(currency.currency_type.as_str()),
                    );
                }
                if currency.min != default.min || currency.max != default.max {
                    options.insert("min".into(), json!(currency.min));
                    options.insert("max".into(), json!(currency.max));
                }
                if currency.decimals != default.decimals {
                    options.insert("decimals".into(), json!(currency.decimals));
                }
                if let Some(symbol) = &currency.symbol {
                    options.insert("symbol".into(), json!(symbol));
                }
            }
            Self::IpAddress(version) if *version != IpVersion::default() => {
                options.insert("ipVersion".into(), json!(version.as_str()));
            }
            Self::LatLong(kind) if *kind != LatLongKind::default() => {
                options.insert("latLongType".into(), json!(kind.as_str()));
            }
            Self::Array(items) => {
                options.insert("arrayLength".into(), json!(items.length));
            }
            _ => {}
        }
        (!options.is_empty()).then_some(Value::Object(options))
    }
}

fn push_range(options: &mut Map<String, Value>, range: IntRange, default: IntRange) {
    if range != default {
        options.insert(
            "range".into(),
            json!({"min": range.min, "max": range.max}),
        );
    }
}

impl From<FieldSpec> for FieldDefinition {
    fn from(spec: FieldSpec) -> Self {
        let kind = FieldKind::resolve(
            &spec.data_type,
            spec.options.as_ref(),
            spec.fields,
            spec.item_definition,
        );
        Self {
            id: spec.id,
            name: spec.name,
            kind,
        }
    }
}

impl From<FieldDefinition> for FieldSpec {
    fn from(field: FieldDefinition) -> Self {
        let data_type = field.kind.type_tag().to_string();
        let options = field.kind.options_value();
        let (fields, item_definition) = match field.kind {
            FieldKind::Object(children) => (
                Some(children.into_iter().map(FieldSpec::from).collect()),
                None,
            ),
            FieldKind::Array(items) => (
                None,
                items.item.map(|item| Box::new(FieldSpec::from(*item))),
            ),
            _ => (None, None),
        };
        Self {
            id: field.id,
            name: field.name,
            data_type,
            options,
            fields,
            item_definition,
        }
    }
}

/// A named schema document: `{ "name": ..., "fields": [...] }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataSetDefinition {
    #[serde(default)]
    pub name: String,
    pub fields: Vec<FieldDefinition>,
}

/// Per-request generation options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GeneratorOptions {
    /// Number of top-level records to produce.
    pub item_count: usize,
    pub language: Locale,
    /// Fixed RNG seed; a random one is drawn when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            item_count: 5,
            language: Locale::default(),
            seed: None,
        }
    }
}

impl Default for ArrayItems {
    fn default() -> Self {
        Self {
            item: None,
            length: DEFAULT_ARRAY_LENGTH,
        }
    }
}
