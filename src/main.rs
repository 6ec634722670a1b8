use anyhow::Result;
use clap::{Parser, Subcommand};

// Use the library modules
use jpdata::commands;

#[derive(Parser)]
#[clap(name = "jpdata")]
#[clap(about = "Fetches Japanese dictionary and example-sentence datasets")]
#[clap(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Download the latest dataset releases and extract them
    Fetch {
        /// Forcibly overwrite any local copies of the downloaded data with
        /// the latest version
        #[clap(short, long)]
        overwrite: bool,
    },
    /// Extract already-downloaded local archives
    Extract {
        /// Re-extract even if the destination file exists
        #[clap(short, long)]
        overwrite: bool,
    },
    /// Show downloaded/extracted state of every dataset
    Status,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Fetch { overwrite } => {
            commands::fetch::fetch_datasets(overwrite).map_err(|e| anyhow::anyhow!(e))
        }
        Commands::Extract { overwrite } => {
            commands::extract::extract_archives(overwrite).map_err(|e| anyhow::anyhow!(e))
        }
        Commands::Status => commands::status::show_status().map_err(|e| anyhow::anyhow!(e)),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }

    Ok(())
}
