//! lastopened - report Desktop entries as they are opened

use anyhow::Result;
use clap::Parser;
use cli_lib::{logging, Cli};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Held until exit so buffered file output is flushed
    let _guard = logging::init(cli.log_file.as_deref())?;

    cli_lib::run(cli).await
}
