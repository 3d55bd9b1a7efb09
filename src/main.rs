use clap::Parser;
use embedding_function::cli::{self, Cli, Command};
use embedding_function::infrastructure::logging;
use embedding_function::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = AppConfig::load().unwrap_or_default();
    logging::init_logging(&config.logging);

    match cli.command {
        Command::Query { text } => cli::embed::query(&text).await,
        Command::Documents { texts } => cli::embed::documents(&texts).await,
        Command::Model => cli::embed::model(),
    }
}
