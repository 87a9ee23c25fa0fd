//! Core contracts and helpers for dummyforge.
//!
//! This crate defines the field schema types, the per-type option model,
//! schema document loading and sample-based schema inference shared by the
//! generator and the CLI.

pub mod document;
pub mod error;
pub mod infer;
pub mod lint;
pub mod options;
pub mod schema;
pub mod types;

pub use document::{SchemaSyntax, load_schema_file, load_schema_str, parse_document, read_document};
pub use error::{Error, Result};
pub use infer::infer_schema;
pub use lint::{SchemaWarning, lint_schema};
pub use options::{
    CurrencyOptions, CurrencyType, DateRange, IntRange, IpVersion, LatLongKind, OptionMap,
};
pub use schema::{
    ArrayItems, DataSetDefinition, FieldDefinition, FieldKind, FieldSpec, GeneratorOptions,
};
pub use types::{DataType, Locale, OutputFormat};
