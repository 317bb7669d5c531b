mod extract;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "roxinho-cli")]
#[command(about = "Roxinho product import command line interface")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Extract a product from a marketplace or store URL and print it as JSON
    Extract {
        /// Product page URL (Mercado Livre, Amazon, or any store)
        url: String,
    },
    /// Show which storefront category a product name falls into
    Classify {
        /// Product name, e.g. "Mouse Gamer RGB"
        name: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    match cli.command {
        Commands::Extract { url } => {
            let config = roxinho_core::load_app_config()?;
            init_tracing(&config.log_level)?;
            extract::run_extract(&config, &url).await?;
        }
        Commands::Classify { name } => {
            println!("{}", extract::describe_category(&name));
        }
    }

    Ok(())
}

/// Logs go to stderr so stdout stays pipeable JSON.
fn init_tracing(fallback_level: &str) -> anyhow::Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(fallback_level))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}
