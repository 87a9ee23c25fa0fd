//! Synthetic record generation for dummyforge.
//!
//! This crate turns a field schema from `dummyforge-core` into locale-aware
//! records and serializes them as JSON, YAML or CSV.

pub mod engine;
pub mod errors;
pub mod faker_rs;
pub mod generators;
pub mod output;
pub mod record;

pub use engine::{GenerationEngine, GenerationResult, generate_data, generate_dataset};
pub use errors::OutputError;
pub use faker_rs::FakerProvider;
pub use generators::{generate_field_value, generate_record};
pub use output::{format_output, format_output_tag};
pub use record::{GeneratedValue, Record};
