//! End-to-end generation: load a collection, emit client code, write files.
//!
//! # Examples
//!
//! ```no_run
//! use postchi_core::{generate, Config};
//!
//! # async fn run() -> postchi_core::Result<()> {
//! let config = Config {
//!     input: "collection.json".to_string(),
//!     ..Config::default()
//! };
//! let summary = generate(&config).await?;
//! println!("wrote {} files", summary.written.len());
//! # Ok(())
//! # }
//! ```

// Internal imports (std, crate)
use crate::collection::Collection;
use crate::config::Config;
use crate::emitter;
use std::path::{Path, PathBuf};

// External imports (alphabetized)
use tokio::fs;

/// What a generation run produced.
#[derive(Debug, Clone)]
pub struct GenerationSummary {
    /// Number of request functions emitted.
    pub endpoint_count: usize,
    /// Paths of the files written, in write order.
    pub written: Vec<PathBuf>,
}

/// Generate API client code for the given configuration.
///
/// Reads and parses the collection, runs the emission pass, then writes
/// every produced document under the configured output directory,
/// creating the directory first when it does not exist.
pub async fn generate(config: &Config) -> crate::Result<GenerationSummary> {
    // 1. Load and parse the collection
    let collection = Collection::from_file(&config.input).await?;
    log::info!(
        "Processing collection: {}",
        collection.display_name().unwrap_or("Unnamed collection")
    );

    // 2. Emit the client code (pure, no I/O)
    let output = emitter::emit(&collection, config)?;

    // 3. Write the generated documents
    let output_dir = Path::new(&config.output);
    if !output_dir.exists() {
        log::debug!("Creating output directory: {}", output_dir.display());
        fs::create_dir_all(output_dir).await?;
    }

    let mut written = Vec::with_capacity(output.files.len());
    for file in &output.files {
        let path = output_dir.join(&file.name);
        log::debug!("Writing {}", path.display());
        fs::write(&path, &file.content).await?;
        written.push(path);
    }

    log::info!("Generated {} API endpoints", output.endpoint_count);
    Ok(GenerationSummary {
        endpoint_count: output.endpoint_count,
        written,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Language, RequestHandler, Strategy};
    use crate::error::Error;
    use tempfile::tempdir;

    const COLLECTION_JSON: &str = r#"{
        "info": {"name": "Ping API"},
        "item": [
            {
                "name": "Ping",
                "request": {
                    "method": "GET",
                    "header": [],
                    "url": {"raw": "https://api.example.com/ping"}
                }
            }
        ]
    }"#;

    fn config_for(dir: &Path, input: &Path) -> Config {
        Config {
            input: input.display().to_string(),
            output: dir.display().to_string(),
            language: Language::TypeScript,
            request_handler: RequestHandler::Fetch,
            strategy: Strategy::SingleFile,
        }
    }

    #[tokio::test]
    async fn test_generate_writes_single_file() {
        let temp = tempdir().unwrap();
        let input = temp.path().join("collection.json");
        std::fs::write(&input, COLLECTION_JSON).unwrap();
        let out_dir = temp.path().join("out");

        let summary = generate(&config_for(&out_dir, &input)).await.unwrap();

        assert_eq!(summary.endpoint_count, 1);
        assert_eq!(summary.written, vec![out_dir.join("api-client.ts")]);
        let content = std::fs::read_to_string(&summary.written[0]).unwrap();
        assert!(content.contains("export async function ping(): Promise<Response> {"));
    }

    #[tokio::test]
    async fn test_generate_writes_split_files() {
        let temp = tempdir().unwrap();
        let input = temp.path().join("collection.json");
        std::fs::write(&input, COLLECTION_JSON).unwrap();
        let out_dir = temp.path().join("out");

        let mut config = config_for(&out_dir, &input);
        config.strategy = Strategy::MultiFile;
        let summary = generate(&config).await.unwrap();

        assert_eq!(
            summary.written,
            vec![out_dir.join("api-types.ts"), out_dir.join("api-functions.ts")]
        );
        assert!(out_dir.join("api-types.ts").exists());
        assert!(out_dir.join("api-functions.ts").exists());
    }

    #[tokio::test]
    async fn test_generate_creates_nested_output_dir() {
        let temp = tempdir().unwrap();
        let input = temp.path().join("collection.json");
        std::fs::write(&input, COLLECTION_JSON).unwrap();
        let out_dir = temp.path().join("deeply").join("nested").join("api");

        generate(&config_for(&out_dir, &input)).await.unwrap();
        assert!(out_dir.join("api-client.ts").exists());
    }

    #[tokio::test]
    async fn test_generate_missing_input_is_io_error() {
        let temp = tempdir().unwrap();
        let input = temp.path().join("does-not-exist.json");
        let out_dir = temp.path().join("out");

        let err = generate(&config_for(&out_dir, &input)).await.unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }

    #[tokio::test]
    async fn test_generate_malformed_input_reports_path() {
        let temp = tempdir().unwrap();
        let input = temp.path().join("broken.json");
        std::fs::write(&input, "not json at all").unwrap();
        let out_dir = temp.path().join("out");

        let err = generate(&config_for(&out_dir, &input)).await.unwrap_err();
        let message = err.to_string();
        assert!(message.contains("Failed to parse collection"));
        assert!(message.contains("broken.json"));
    }
}
