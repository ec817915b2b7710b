use std::process::ExitCode;

use anyhow::Result;
use marka_config::Config;
use marka_vision::ImageAnalysisClient;
use tracing_subscriber::EnvFilter;

mod batch;
mod menu;

use self::menu::Command;

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("marka=info")),
        )
        .init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("An error occurred: {err:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<()> {
    // Credentials are checked before the menu so a bad setup fails fast.
    let config = Config::from_env()?;

    match menu::prompt()? {
        Command::RunBatch => {
            let client = ImageAnalysisClient::new(config.service);
            let summary = batch::run_batch(&client, &config.batch).await?;

            println!(
                "\nProcessed {} image(s): {} annotated, {} failed",
                summary.processed, summary.annotated, summary.failed
            );
        }
        Command::Quit => println!("Exiting..."),
    }

    Ok(())
}
