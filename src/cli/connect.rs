use anyhow::{Result, anyhow};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::cli::args::ConnectCmd;
use crate::config::AppConfig;
use crate::connect::{ConnectError, ConnectionState, View, select_signer};
use crate::faucet::FaucetClient;
use crate::signer::{SignerKind, WalletSignerProvider};

/// 把当前界面状态渲染成终端输出。
pub fn render_view(view: View<'_>, extension_available: bool) -> String {
    match view {
        View::Loading { message } => format!("⏳ {message}"),
        View::Errors(errors) => errors
            .iter()
            .map(|err| format!("❌ {err}"))
            .collect::<Vec<_>>()
            .join("\n"),
        View::Selector => {
            let snap = if extension_available {
                "可用"
            } else {
                "未配置 signer.snap_bridge_url"
            };
            format!(
                "可选签名器：\n  {}（{snap}）\n  {}（内存临时密钥）",
                SignerKind::MetamaskSnap,
                SignerKind::Ephemeral
            )
        }
    }
}

pub async fn handle_connect_cmd(
    cmd: ConnectCmd,
    config: &AppConfig,
    client: reqwest::Client,
) -> Result<()> {
    let provider = WalletSignerProvider::new(client.clone(), &config.signer);
    let extension_available = provider.extension_available();
    let mut state = ConnectionState::new();
    println!("{}", render_view(state.view(), extension_available));

    let cancel = CancellationToken::new();
    let watcher = {
        let cancel = cancel.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                info!(target: "connect", "收到 Ctrl+C，取消签名器连接");
                cancel.cancel();
            }
        })
    };

    let outcome = select_signer(&mut state, &provider, cmd.signer, &cancel, |view| {
        // 连接成功后由下方输出地址，不再重复展示选择列表。
        if !matches!(view, View::Selector) {
            println!("{}", render_view(view, extension_available));
        }
    })
    .await;
    watcher.abort();
    debug!(target: "connect", pending = state.pending(), "signer selection settled");

    let pair = match outcome {
        Ok(pair) => pair,
        Err(ConnectError::Cancelled) => {
            println!("已取消签名器连接");
            return Ok(());
        }
        Err(err) => {
            warn!(
                target: "connect",
                errors = state.errors().len(),
                "签名器连接失败"
            );
            return Err(anyhow!(err));
        }
    };

    println!("signer1 ({}): {}", pair.signer1.kind(), pair.signer1.address());
    println!("signer2 ({}): {}", pair.signer2.kind(), pair.signer2.address());

    if let Some(text) = cmd.sign.as_deref() {
        let signature = pair.signer1.sign(text.as_bytes()).await?;
        println!("signature: {}", bs58::encode(signature).into_string());
    }

    if cmd.fund {
        let address = pair.signer1.address().to_string();
        let faucet = FaucetClient::new(client, &config.faucet);
        if let Err(err) = faucet.request_transfer(&address).await {
            warn!(target: "faucet", address = %address, error = %err, "水龙头申请失败");
            return Err(anyhow!(err));
        }
        println!("✅ 已为 {address} 申请测试代币");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selector_mentions_missing_bridge() {
        let rendered = render_view(View::Selector, false);
        assert!(rendered.contains("metamask-snap"));
        assert!(rendered.contains("snap_bridge_url"));
        assert!(rendered.contains("ephemeral"));
    }

    #[test]
    fn errors_render_one_line_each() {
        let errors = vec!["first".to_string(), "second".to_string()];
        let rendered = render_view(View::Errors(&errors), true);
        assert_eq!(rendered.lines().count(), 2);
        assert!(rendered.ends_with("second"));
    }
}
