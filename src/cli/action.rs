use anyhow::{Result, anyhow};
use tracing::debug;

use crate::actions::Action;
use crate::cli::args::{ActionCmd, UnitsCmd};
use crate::config::AppConfig;
use crate::vm::VmClient;

pub fn build_action(cmd: ActionCmd, vm: &VmClient) -> Result<Action> {
    let action = match cmd {
        ActionCmd::Transfer { to, token, value } => Action::transfer(vm, &to, &token, &value)?,
        ActionCmd::Balance { token, address } => Action::token_balance(&token, &address),
        ActionCmd::TokenInfo { token } => Action::token_info(&token),
        ActionCmd::CreateToken {
            name,
            symbol,
            metadata,
        } => Action::create_token(&name, &symbol, &metadata),
        ActionCmd::Mint { to, value, token } => Action::mint_token(vm, &to, &value, &token)?,
        ActionCmd::CreatePool {
            function_id,
            token_x,
            token_y,
            fee,
        } => Action::create_liquidity_pool(function_id, &token_x, &token_y, fee),
        ActionCmd::AddLiquidity {
            amount_x,
            amount_y,
            token_x,
            token_y,
            pool,
        } => Action::add_liquidity(amount_x, amount_y, &token_x, &token_y, &pool),
    };
    Ok(action)
}

pub fn handle_action_cmd(cmd: ActionCmd, config: &AppConfig) -> Result<()> {
    let vm = VmClient::new(&config.vm)?;
    let action = build_action(cmd, &vm)?;
    debug!(
        target: "actions",
        action = action.action_name(),
        endpoint = %vm.rpc_endpoint(),
        "action payload built"
    );
    let rendered = action
        .to_value()
        .and_then(|value| serde_json::to_string_pretty(&value))
        .map_err(|err| anyhow!("序列化 Action 失败: {err}"))?;
    println!("{rendered}");
    eprintln!("endpoint: {}", vm.rpc_endpoint());
    Ok(())
}

pub fn handle_units_cmd(cmd: UnitsCmd, config: &AppConfig) -> Result<()> {
    let vm = VmClient::new(&config.vm)?;
    debug!(target: "actions", decimals = vm.decimals(), "unit conversion");
    match cmd {
        UnitsCmd::ToNative { amount } => {
            println!("{}", vm.convert_to_native_tokens(&amount)?);
        }
        UnitsCmd::FromNative { value } => {
            println!("{}", vm.format_native_tokens(value));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::VmConfig;

    fn vm() -> VmClient {
        VmClient::new(&VmConfig::default()).expect("default vm config")
    }

    #[test]
    fn transfer_command_converts_value() {
        let action = build_action(
            ActionCmd::Transfer {
                to: "0xabc".to_string(),
                token: "0xtoken".to_string(),
                value: "1.5".to_string(),
            },
            &vm(),
        )
        .expect("transfer action");
        let value = action.to_value().expect("json");
        assert_eq!(value["actionName"], "TransferToken");
        assert_eq!(value["data"]["value"], "1500000000");
    }

    #[test]
    fn mint_command_rejects_malformed_amount() {
        let err = build_action(
            ActionCmd::Mint {
                to: "0xabc".to_string(),
                value: "one".to_string(),
                token: "0xtoken".to_string(),
            },
            &vm(),
        )
        .unwrap_err();
        assert!(err.to_string().contains("one"));
    }
}
