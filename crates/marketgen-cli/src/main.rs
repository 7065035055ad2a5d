mod adapt;
mod brands;
mod score;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use marketgen_core::Platform;
use tracing_subscriber::EnvFilter;

use crate::brands::BrandsCommands;

#[derive(Debug, Parser)]
#[command(name = "marketgen")]
#[command(about = "Adapt marketing content for social platforms and check brand voice")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Adapt a content item for one or more platforms
    Adapt {
        /// JSON file holding the content item
        #[arg(long)]
        input: PathBuf,
        /// Target platform; repeat for several
        #[arg(long = "platform", required = true)]
        platforms: Vec<Platform>,
        /// Adapt platforms in parallel on the blocking pool
        #[arg(long)]
        concurrent: bool,
    },
    /// Score text against a brand's declared voice
    Score {
        /// Brand id or name
        #[arg(long)]
        brand: String,
        #[command(flatten)]
        source: ScoreSource,
        /// Score from an external voice model, in [0, 1]
        #[arg(long)]
        model_score: Option<f64>,
    },
    /// Profile the voice of existing content items
    Profile {
        /// JSON content item; repeat for several
        #[arg(long = "input", required = true)]
        inputs: Vec<PathBuf>,
        /// Number of key phrases to report
        #[arg(long, default_value_t = marketgen_voice::DEFAULT_KEY_PHRASES)]
        top: usize,
    },
    /// Inspect the brand file
    Brands {
        #[command(subcommand)]
        command: BrandsCommands,
    },
}

#[derive(Debug, Args)]
#[group(required = true, multiple = false)]
struct ScoreSource {
    /// Text to score
    #[arg(long)]
    text: Option<String>,
    /// JSON content item to score
    #[arg(long)]
    input: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = marketgen_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Some(Commands::Adapt {
            input,
            platforms,
            concurrent,
        }) => adapt::run_adapt(&config, &input, &platforms, concurrent).await,
        Some(Commands::Score {
            brand,
            source,
            model_score,
        }) => score::run_score(
            &config,
            &brand,
            source.text.as_deref(),
            source.input.as_deref(),
            model_score,
        ),
        Some(Commands::Profile { inputs, top }) => score::run_profile(&inputs, top),
        Some(Commands::Brands { command }) => brands::run_brands(&config, &command),
        None => {
            println!("marketgen: no command given, see --help");
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests;
