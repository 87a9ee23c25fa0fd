mod logging;
mod workspace;

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::{Args, Parser, Subcommand};
use dummyforge_core::{
    DataType, Error as CoreError, Locale, OutputFormat, infer_schema, lint_schema,
    load_schema_file, read_document,
};
use dummyforge_generate::{GenerationEngine, OutputError, Record, format_output};
use serde_json::Value;
use thiserror::Error;
use tracing::{info, warn};

use logging::init_logging;
use workspace::{
    DEFAULT_SETTINGS_FILE, Settings, WorkspaceError, load_settings, save_settings,
    write_bytes_atomic,
};

#[derive(Debug, Error)]
enum CliError {
    #[error("core error: {0}")]
    Core(#[from] CoreError),
    #[error("output error: {0}")]
    Output(#[from] OutputError),
    #[error("settings error: {0}")]
    Workspace(#[from] WorkspaceError),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("logging error: {0}")]
    Logging(String),
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

#[derive(Parser, Debug)]
#[command(name = "dummyforge", version, about = "Schema-driven synthetic data generator")]
struct Cli {
    /// Settings file.
    #[arg(long, global = true, default_value = DEFAULT_SETTINGS_FILE)]
    config: PathBuf,
    /// Emit logs as JSON lines on stderr.
    #[arg(long, global = true, default_value_t = false)]
    log_json: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate records from a schema document.
    Generate(GenerateArgs),
    /// Re-format a JSON array of records.
    Format(FormatArgs),
    /// Infer a schema from a sample JSON or YAML document.
    Infer(InferArgs),
    /// List the supported field type tags.
    Types,
    /// Write the default settings file.
    Init(InitArgs),
}

#[derive(Args, Debug)]
struct GenerateArgs {
    /// Schema document (.json, .yaml or .yml).
    #[arg(long)]
    schema: PathBuf,
    /// Number of records.
    #[arg(long)]
    count: Option<usize>,
    /// Locale for generated values (en, ja).
    #[arg(long)]
    language: Option<Locale>,
    /// Output format (json, yaml, csv).
    #[arg(long)]
    format: Option<OutputFormat>,
    /// Seed for reproducible output.
    #[arg(long)]
    seed: Option<u64>,
    /// Output file; stdout when omitted.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct FormatArgs {
    /// JSON file holding an array of records.
    #[arg(long)]
    input: PathBuf,
    /// Output format (json, yaml, csv).
    #[arg(long)]
    format: Option<OutputFormat>,
    /// Output file; stdout when omitted.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct InferArgs {
    /// Sample document (.json, .yaml or .yml).
    #[arg(long)]
    sample: PathBuf,
    /// Output file; stdout when omitted.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct InitArgs {
    /// Overwrite an existing settings file.
    #[arg(long, default_value_t = false)]
    force: bool,
}

fn main() -> Result<(), CliError> {
    let cli = Cli::parse();

    let settings = match &cli.command {
        Command::Init(_) => Settings::default(),
        _ => load_settings(&cli.config)?,
    };
    init_logging(cli.log_json || settings.log_json)?;

    match cli.command {
        Command::Generate(args) => run_generate(args, &settings),
        Command::Format(args) => run_format(args, &settings),
        Command::Infer(args) => run_infer(args),
        Command::Types => run_types(),
        Command::Init(args) => run_init(&cli.config, &args),
    }
}

fn run_generate(args: GenerateArgs, settings: &Settings) -> Result<(), CliError> {
    let timer = Instant::now();
    let mut options = settings.generator_options();
    if let Some(count) = args.count {
        options.item_count = count;
    }
    if let Some(language) = args.language {
        options.language = language;
    }
    if let Some(seed) = args.seed {
        options.seed = Some(seed);
    }
    let format = args.format.unwrap_or(settings.format);

    let dataset = load_schema_file(&args.schema)?;
    info!(
        event = "schema_loaded",
        path = %args.schema.display(),
        name = %dataset.name,
        fields = dataset.fields.len()
    );
    for warning in lint_schema(&dataset.fields) {
        warn!(
            event = "schema_warning",
            code = warning.code,
            path = %warning.path,
            "{}",
            warning.message
        );
    }

    let result = GenerationEngine::new(options).run(&dataset.fields);
    let text = format_output(&result.records, format)?;
    write_output(args.out.as_deref(), &text)?;

    info!(
        event = "run_finished",
        status = "success",
        records = result.records.len(),
        format = %format,
        seed = result.seed,
        duration_ms = timer.elapsed().as_millis() as u64
    );
    Ok(())
}

fn run_format(args: FormatArgs, settings: &Settings) -> Result<(), CliError> {
    let content = std::fs::read_to_string(&args.input)?;
    let records = parse_records(serde_json::from_str(&content)?)?;
    let format = args.format.unwrap_or(settings.format);

    let text = format_output(&records, format)?;
    write_output(args.out.as_deref(), &text)?;
    info!(
        event = "records_formatted",
        records = records.len(),
        format = %format
    );
    Ok(())
}

fn run_infer(args: InferArgs) -> Result<(), CliError> {
    let sample = read_document(&args.sample)?;
    let fields = infer_schema(&sample)?;
    let mut text = serde_json::to_string_pretty(&fields)?;
    text.push('\n');

    write_output(args.out.as_deref(), &text)?;
    info!(
        event = "schema_inferred",
        path = %args.sample.display(),
        fields = fields.len()
    );
    Ok(())
}

fn run_types() -> Result<(), CliError> {
    let mut stdout = io::stdout().lock();
    for data_type in DataType::ALL {
        writeln!(stdout, "{data_type}")?;
    }
    Ok(())
}

fn run_init(path: &Path, args: &InitArgs) -> Result<(), CliError> {
    if path.exists() && !args.force {
        return Err(CliError::InvalidConfig(format!(
            "{} already exists; pass --force to overwrite",
            path.display()
        )));
    }
    save_settings(path, &Settings::default())?;
    info!(event = "settings_written", path = %path.display());
    Ok(())
}

fn parse_records(value: Value) -> Result<Vec<Record>, CliError> {
    let Value::Array(items) = value else {
        return Err(CliError::InvalidInput(
            "records document must be a JSON array".to_string(),
        ));
    };
    items
        .into_iter()
        .enumerate()
        .map(|(idx, item)| match item {
            Value::Object(map) => Ok(Record::from(map)),
            _ => Err(CliError::InvalidInput(format!(
                "record {idx} is not a JSON object"
            ))),
        })
        .collect()
}

fn write_output(path: Option<&Path>, text: &str) -> Result<(), CliError> {
    match path {
        Some(path) => {
            write_bytes_atomic(path, text.as_bytes())?;
            info!(event = "output_written", path = %path.display(), bytes = text.len());
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(text.as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;
    use serde_json::json;

    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn generate_flags_parse_into_typed_values() {
        let cli = Cli::try_parse_from([
            "dummyforge",
            "generate",
            "--schema",
            "schema.yaml",
            "--language",
            "ja",
            "--format",
            "yml",
            "--seed",
            "7",
            "--log-json",
        ])
        .expect("parse args");

        assert!(cli.log_json);
        let Command::Generate(args) = cli.command else {
            panic!("expected generate");
        };
        assert_eq!(args.language, Some(Locale::Ja));
        assert_eq!(args.format, Some(OutputFormat::Yaml));
        assert_eq!(args.seed, Some(7));
        assert_eq!(args.count, None);
    }

    #[test]
    fn unknown_format_flag_is_rejected() {
        let result = Cli::try_parse_from([
            "dummyforge",
            "format",
            "--input",
            "records.json",
            "--format",
            "xml",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn records_must_be_an_array_of_objects() {
        let records = parse_records(json!([{"a": 1}, {"b": [true]}])).expect("records");
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].keys().collect::<Vec<_>>(), ["b"]);

        assert!(matches!(
            parse_records(json!({"a": 1})),
            Err(CliError::InvalidInput(_))
        ));
        assert!(matches!(
            parse_records(json!([{"a": 1}, 2])),
            Err(CliError::InvalidInput(message)) if message.contains("record 1")
        ));
    }
}
