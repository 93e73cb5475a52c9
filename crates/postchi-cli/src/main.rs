//! postchi CLI entrypoint
//! Parses command-line arguments and dispatches to the core generator.

// Internal imports (std, crate)
use std::env;
use std::str::FromStr;

// External imports (alphabetized)
use anyhow::Context;
use clap::Parser;
use postchi_core::{find_config_file, generate, Config, ConfigOverlay};

#[derive(Parser)]
#[command(name = "postchi")]
#[command(author, version, long_about = None)]
#[command(about = "Convert Postman collections to type-safe API calls")]
struct Cli {
    /// Path to the Postman collection JSON file
    #[arg(short, long)]
    input: Option<String>,
    /// Output directory for the generated files (default: ./src/api)
    #[arg(short, long)]
    output: Option<String>,
    /// Output language: typescript or javascript (default: typescript)
    #[arg(short, long)]
    language: Option<String>,
    /// Request handler used by generated functions: fetch or axios (default: fetch)
    #[arg(short, long)]
    request_handler: Option<String>,
    /// File layout strategy: single-file or multi-file (default: single-file)
    #[arg(short, long)]
    strategy: Option<String>,
}

/// Parse an optional axis flag into its typed form.
fn parse_axis<T>(value: &Option<String>, axis: &str) -> anyhow::Result<Option<T>>
where
    T: FromStr<Err = String>,
{
    value
        .as_deref()
        .map(|raw| {
            raw.parse::<T>()
                .map_err(|e| anyhow::anyhow!("Invalid {axis} '{raw}': {e}"))
        })
        .transpose()
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    let language = parse_axis(&cli.language, "language")?;
    let request_handler = parse_axis(&cli.request_handler, "request handler")?;
    let strategy = parse_axis(&cli.strategy, "file strategy")?;

    // Layer the configuration: defaults, then the config file from the
    // working directory when present, then explicit CLI flags.
    let mut overlays = Vec::new();
    let cwd = env::current_dir().context("Failed to determine current directory")?;
    if let Some(config_path) = find_config_file(&cwd) {
        println!("Using configuration from {}", config_path.display());
        overlays.push(ConfigOverlay::from_file(&config_path).await?);
    }
    overlays.push(ConfigOverlay {
        input: cli.input.clone(),
        output: cli.output.clone(),
        language,
        request_handler,
        strategy,
    });

    let config = Config::resolve(&overlays)?;
    tracing::debug!(?config, "resolved configuration");

    println!("Reading collection from: {}", config.input);
    println!("Generating API client in: {}", config.output);
    println!("Using language: {}", config.language);
    println!("Using request handler: {}", config.request_handler);
    println!("Using file strategy: {}", config.strategy);

    let summary = generate(&config).await?;

    let noun = if summary.endpoint_count == 1 {
        "endpoint"
    } else {
        "endpoints"
    };
    println!(
        "✅ Generated {} API {} successfully!",
        summary.endpoint_count, noun
    );
    Ok(())
}
