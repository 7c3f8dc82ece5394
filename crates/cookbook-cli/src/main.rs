//! Cookbook CLI - Command-line interface for the recipe cookbook

use anyhow::Result;
use clap::{Parser, Subcommand};
use cookbook_core::{build_summary, normalize, parse_entry, resolve, Cookbook};
use std::path::{Path, PathBuf};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(name = "cookbook")]
#[command(about = "Recipe cookbook - flatten recipes into base ingredients")]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a cookbook JSON file (an array of entry payloads)
    Validate {
        /// Path to the cookbook JSON file
        file: PathBuf,
    },

    /// Print the ingredient summary for a recipe
    Summary {
        /// Path to the cookbook JSON file
        #[arg(short, long)]
        file: PathBuf,

        /// Name of the recipe to summarize
        #[arg(short, long)]
        name: String,
    },

    /// Canonicalize a handwritten recipe name
    Parse {
        /// The handwritten name
        input: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Commands::Validate { file } => {
            let cookbook = load_cookbook(&file)?;
            info!("Cookbook is valid: {} entries", cookbook.len());
        }
        Commands::Summary { file, name } => {
            let cookbook = load_cookbook(&file)?;
            let resolution = resolve(&cookbook, &name)?;
            let summary = build_summary(&name, &resolution);
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
        Commands::Parse { input } => match normalize(&input) {
            Some(name) => println!("{}", name),
            None => anyhow::bail!("'{}' cannot be parsed into a recipe name", input),
        },
    }

    Ok(())
}

/// Load a cookbook file: a JSON array of entry payloads, inserted in order.
fn load_cookbook(path: &Path) -> Result<Cookbook> {
    let content = std::fs::read_to_string(path)?;
    let payloads: Vec<serde_json::Value> = serde_json::from_str(&content)?;

    let mut cookbook = Cookbook::new();
    let mut failures = 0;
    for payload in payloads {
        let entry = match parse_entry(payload) {
            Ok(entry) => entry,
            Err(error) => {
                eprintln!("Validation error: {}", error);
                failures += 1;
                continue;
            }
        };
        if let Err(errors) = cookbook.insert(entry) {
            for error in &errors {
                eprintln!("Validation error: {}", error);
            }
            failures += errors.len();
        }
    }

    if failures > 0 {
        anyhow::bail!("Cookbook validation failed with {} errors", failures);
    }

    Ok(cookbook)
}
