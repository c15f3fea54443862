//! paramkit CLI entrypoint
//! Parses command-line arguments and dispatches to the core converter.

// Internal imports (std, crate)
use std::path::PathBuf;

// External imports (alphabetized)
use anyhow::Context;
use clap::Parser;
use paramkit_core::{placeholder::extract_placeholders, Config, Converter, DescriptorDocument};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "paramkit")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Show the parameters and resolved path of a descriptor file
    Inspect {
        /// Path to a descriptor document (YAML or JSON)
        descriptor: PathBuf,
        /// Configuration file overriding the known keys (YAML or TOML)
        #[arg(long)]
        config: Option<PathBuf>,
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,
    },
    /// List the placeholder identifiers of a path template
    Keys {
        /// Path template, e.g. /user/{id}
        template: String,
    },
}

#[derive(clap::ValueEnum, Clone, Copy, Debug)]
pub enum OutputFormat {
    Json,
    Yaml,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
    let cli = Cli::parse();
    match &cli.command {
        Commands::Inspect {
            descriptor,
            config,
            format,
        } => {
            let config = match config {
                Some(path) => Config::from_file(path)
                    .await
                    .with_context(|| format!("Failed to load config {}", path.display()))?,
                None => Config::default(),
            };
            tracing::debug!(known_keys = ?config.known_keys, "Using configuration");

            let document = DescriptorDocument::from_file(descriptor)
                .await
                .with_context(|| format!("Failed to load descriptor {}", descriptor.display()))?;

            let summary = Converter::new(&config).summarize(&document);
            let rendered = match format {
                OutputFormat::Json => serde_json::to_string_pretty(&summary)?,
                OutputFormat::Yaml => serde_yaml::to_string(&summary)?,
            };
            println!("{}", rendered.trim_end());
        }
        Commands::Keys { template } => {
            for key in extract_placeholders(template).iter() {
                println!("{key}");
            }
        }
    }
    Ok(())
}
