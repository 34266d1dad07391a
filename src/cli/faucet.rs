use anyhow::Result;
use tracing::{info, warn};

use crate::cli::args::FaucetCmd;
use crate::config::AppConfig;
use crate::faucet::FaucetClient;

pub async fn handle_faucet_cmd(
    cmd: FaucetCmd,
    config: &AppConfig,
    client: reqwest::Client,
) -> Result<()> {
    let address = cmd.address.trim();
    let faucet = FaucetClient::new(client, &config.faucet);
    info!(target: "faucet", address, host = %config.faucet.host, "申请水龙头代币");
    if let Err(err) = faucet.request_transfer(address).await {
        warn!(target: "faucet", address, status = ?err.status(), "水龙头申请失败");
        return Err(err.into());
    }
    println!("✅ 已为 {address} 申请测试代币");
    Ok(())
}
