use anyhow::Result;
use clap::Parser;

mod actions;
mod cli;
mod config;
mod connect;
mod faucet;
mod monitoring;
mod signer;
mod vm;

#[cfg(test)]
mod test_support;

use cli::args::Cli;
use cli::context::{init_tracing, load_configuration};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = load_configuration(cli.config.clone())?;
    init_tracing(&config.logging)?;
    cli::run(cli, config).await
}
