//! specforge CLI entrypoint.

use std::path::PathBuf;

use clap::Parser;
use tracing::{Level, info};
use tracing_subscriber::EnvFilter;

use specforge::pipeline::Pipeline;
use specforge::{config, init};

#[derive(Parser)]
#[command(name = "specforge")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Process every profile in the configuration
    Generate {
        /// Working directory holding the configuration; all relative paths
        /// resolve against it
        #[arg(long, default_value = ".")]
        dir: PathBuf,
    },
    /// Write a starter configuration file
    Init {
        /// Directory to scaffold into
        #[arg(long, default_value = ".")]
        dir: PathBuf,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Generate { dir } => run_generate(&dir).await,
        Commands::Init { dir } => run_init(&dir),
    }
}

async fn run_generate(dir: &PathBuf) -> anyhow::Result<()> {
    // Discovery failure is the only invocation-fatal error; its message
    // already carries the remediation pointer at `specforge init`.
    let config = config::discover(dir)?;
    info!(profiles = config.profiles.len(), "configuration loaded");

    let pipeline = Pipeline::new(dir);
    let summary = pipeline.run(&config).await;
    info!(
        generated = summary.generated,
        skipped = summary.skipped,
        failed = summary.failed,
        "run complete"
    );
    Ok(())
}

fn run_init(dir: &PathBuf) -> anyhow::Result<()> {
    let path = init::scaffold(dir)?;
    info!(path = %path.display(), "configuration scaffolded");
    println!("Wrote {}", path.display());
    Ok(())
}
