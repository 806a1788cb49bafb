use anyhow::Result;
use othello_cli::CliEngine;
use tracing::info;

fn main() -> Result<()> {
    // stdout carries the console protocol; logs go to stderr.
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();
    info!("othello starting");
    CliEngine::new().run()?;
    Ok(())
}
