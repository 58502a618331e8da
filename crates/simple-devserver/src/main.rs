//! `simple-devserver` binary.

use clap::Parser;
use simple_devserver::{Cli, DevServerError, serve};
use std::process;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
	let cli = Cli::parse();

	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_filter()));
	tracing_subscriber::fmt().with_env_filter(filter).init();

	if let Err(e) = run(&cli).await {
		tracing::error!("{}", e);
		process::exit(1);
	}
}

async fn run(cli: &Cli) -> Result<(), DevServerError> {
	let settings = cli.settings()?;
	serve(settings).await
}
