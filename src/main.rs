use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use driftwell_tools::{assign, export, icons, linear::LinearClient};

#[derive(Parser)]
#[command(name = "dwt")]
#[command(about = "Workspace automation for Driftwell: issue export and icon assets")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Export the scope project from Linear as JSON and Markdown
    Export,
    /// Assign planned component work to the current user and move it along
    Assign,
    /// Render the app icon sets for the iOS and watchOS asset catalogs
    Icons,
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| "driftwell_tools=info".into()),
    );

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();
    match cli.command {
        Commands::Export => {
            let client = LinearClient::from_env()?;
            export::run(&client).await?;
        }
        Commands::Assign => {
            let client = LinearClient::from_env()?;
            assign::run(&client).await?;
        }
        Commands::Icons => {
            icons::generate_all(std::path::Path::new("."))?;
        }
    }

    Ok(())
}
