use clap::{Parser, Subcommand};

mod bundle;
mod error;
mod inspect;
mod output;
mod utils;

use error::Result;

#[derive(Parser)]
#[command(name = "bindery")]
#[command(about = "PEM certificate bundle toolkit", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the certificates found in PEM data
    Inspect {
        #[command(flatten)]
        config: inspect::Config,
    },
    /// Merge certificates from several PEM inputs into one bundle
    Bundle {
        #[command(flatten)]
        config: bundle::Config,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Inspect { config } => {
            inspect::execute(config)?;
        }
        Commands::Bundle { config } => {
            bundle::execute(config)?;
        }
    }

    Ok(())
}
