use anyhow::Result;

use crate::cli::action::{handle_action_cmd, handle_units_cmd};
use crate::cli::args::{Cli, Command};
use crate::cli::connect::handle_connect_cmd;
use crate::cli::context::{build_http_client, init_configs};
use crate::cli::faucet::handle_faucet_cmd;
use crate::config::AppConfig;

pub async fn run(cli: Cli, config: AppConfig) -> Result<()> {
    if config.prometheus.enable {
        crate::monitoring::try_init_prometheus(&config.prometheus.listen)?;
    }

    match cli.command {
        Command::Init(args) => init_configs(args)?,
        Command::Faucet(args) => {
            let client = build_http_client(&config.global)?;
            handle_faucet_cmd(args, &config, client).await?;
        }
        Command::Connect(args) => {
            let client = build_http_client(&config.global)?;
            handle_connect_cmd(args, &config, client).await?;
        }
        Command::Action(cmd) => handle_action_cmd(cmd, &config)?,
        Command::Units(cmd) => handle_units_cmd(cmd, &config)?,
    }

    Ok(())
}
