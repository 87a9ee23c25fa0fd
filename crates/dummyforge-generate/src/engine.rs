use std::time::Instant;

use dummyforge_core::{FieldDefinition, GeneratorOptions};
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::info;

use crate::faker_rs::FakerProvider;
use crate::generators::generate_record;
use crate::record::Record;

/// Result of a generation run.
#[derive(Debug, Clone)]
pub struct GenerationResult {
    pub records: Vec<Record>,
    /// Seed the run used; replaying it with the same schema reproduces `records`.
    pub seed: u64,
}

/// Entry point for generating datasets from a field schema.
#[derive(Debug, Clone)]
pub struct GenerationEngine {
    options: GeneratorOptions,
}

impl GenerationEngine {
    pub fn new(options: GeneratorOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &GeneratorOptions {
        &self.options
    }

    pub fn run(&self, fields: &[FieldDefinition]) -> GenerationResult {
        let start = Instant::now();
        let seed = self.options.seed.unwrap_or_else(rand::random);
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let provider = FakerProvider::new(self.options.language);

        info!(
            event = "generation_started",
            fields = fields.len(),
            item_count = self.options.item_count,
            language = %self.options.language,
            seed,
            "generation started"
        );

        let records = generate_dataset(fields, self.options.item_count, &provider, &mut rng);

        info!(
            event = "generation_finished",
            records = records.len(),
            duration_ms = start.elapsed().as_millis() as u64,
            "generation finished"
        );

        GenerationResult { records, seed }
    }
}

/// `count` independent records, each holding every field of `fields`.
pub fn generate_dataset(
    fields: &[FieldDefinition],
    count: usize,
    provider: &FakerProvider,
    rng: &mut dyn RngCore,
) -> Vec<Record> {
    (0..count)
        .map(|_| generate_record(fields, provider, rng))
        .collect()
}

/// Generate `options.item_count` records in `options.language`.
pub fn generate_data(fields: &[FieldDefinition], options: &GeneratorOptions) -> Vec<Record> {
    GenerationEngine::new(options.clone()).run(fields).records
}
