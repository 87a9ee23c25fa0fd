use std::env;
use std::path::PathBuf;

use dummyforge_core::{GeneratorOptions, Locale, OutputFormat, load_schema_file};
use dummyforge_generate::{GenerationEngine, format_output};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let mut args = env::args().skip(1);
    let mut schema_path: Option<PathBuf> = None;
    let mut options = GeneratorOptions::default();
    let mut format = OutputFormat::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--count" => options.item_count = flag_value(&mut args, "--count")?.parse()?,
            "--lang" => options.language = flag_value(&mut args, "--lang")?.parse::<Locale>()?,
            "--format" => format = flag_value(&mut args, "--format")?.parse::<OutputFormat>()?,
            "--seed" => options.seed = Some(flag_value(&mut args, "--seed")?.parse()?),
            _ => {
                if schema_path.is_none() {
                    schema_path = Some(PathBuf::from(arg));
                } else {
                    return Err("unexpected argument".into());
                }
            }
        }
    }

    let schema_path = schema_path.ok_or("missing schema path")?;
    let dataset = load_schema_file(&schema_path)?;

    let result = GenerationEngine::new(options).run(&dataset.fields);
    print!("{}", format_output(&result.records, format)?);
    eprintln!("seed={}", result.seed);
    Ok(())
}

fn flag_value(
    args: &mut impl Iterator<Item = String>,
    flag: &str,
) -> Result<String, Box<dyn std::error::Error>> {
    args.next()
        .ok_or_else(|| format!("missing {flag} value").into())
}
