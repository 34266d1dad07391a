//! Typed action payloads submitted to the VM.
//!
//! Every payload serialises as `{ "actionName": ..., "data": { ... } }`.
//! Amount fields that carry token values are converted to native units and
//! encoded as decimal strings; free-text token fields are base64 encoded.

use base64::{Engine as _, engine::general_purpose};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use serde_with::{DisplayFromStr, serde_as};

use crate::vm::{UnitError, VmClient};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "actionName", content = "data")]
pub enum Action {
    TransferToken(TransferToken),
    GetTokenAccountBalance(GetTokenAccountBalance),
    GetTokenInfo(GetTokenInfo),
    CreateToken(CreateToken),
    MintToken(MintToken),
    CreateLiquidityPool(CreateLiquidityPool),
    AddLiquidity(AddLiquidity),
}

#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferToken {
    pub to: String,
    pub token_address: String,
    #[serde_as(as = "DisplayFromStr")]
    pub value: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetTokenAccountBalance {
    pub token: String,
    pub account: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetTokenInfo {
    pub token: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateToken {
    pub name: String,
    pub symbol: String,
    pub metadata: String,
}

#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MintToken {
    pub to: String,
    #[serde_as(as = "DisplayFromStr")]
    pub value: u64,
    pub token: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateLiquidityPool {
    #[serde(rename = "functionID")]
    pub function_id: u64,
    pub token_x: String,
    pub token_y: String,
    pub fee: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddLiquidity {
    pub amount_x: u64,
    pub amount_y: u64,
    pub token_x: String,
    pub token_y: String,
    pub liquidity_pool: String,
}

impl Action {
    pub fn transfer(
        vm: &VmClient,
        to: &str,
        token_address: &str,
        value: &str,
    ) -> Result<Self, UnitError> {
        Ok(Self::TransferToken(TransferToken {
            to: to.to_string(),
            token_address: token_address.to_string(),
            value: vm.convert_to_native_tokens(value)?,
        }))
    }

    pub fn token_balance(token_address: &str, address: &str) -> Self {
        Self::GetTokenAccountBalance(GetTokenAccountBalance {
            token: token_address.to_string(),
            account: address.to_string(),
        })
    }

    pub fn token_info(token: &str) -> Self {
        Self::GetTokenInfo(GetTokenInfo {
            token: token.to_string(),
        })
    }

    pub fn create_token(name: &str, symbol: &str, metadata: &str) -> Self {
        Self::CreateToken(CreateToken {
            name: encode_text(name),
            symbol: encode_text(symbol),
            metadata: encode_text(metadata),
        })
    }

    pub fn mint_token(vm: &VmClient, to: &str, value: &str, token: &str) -> Result<Self, UnitError> {
        Ok(Self::MintToken(MintToken {
            to: to.to_string(),
            value: vm.convert_to_native_tokens(value)?,
            token: token.to_string(),
        }))
    }

    pub fn create_liquidity_pool(function_id: u64, token_x: &str, token_y: &str, fee: u64) -> Self {
        Self::CreateLiquidityPool(CreateLiquidityPool {
            function_id,
            token_x: token_x.to_string(),
            token_y: token_y.to_string(),
            fee,
        })
    }

    pub fn add_liquidity(
        amount_x: u64,
        amount_y: u64,
        token_x: &str,
        token_y: &str,
        liquidity_pool: &str,
    ) -> Self {
        Self::AddLiquidity(AddLiquidity {
            amount_x,
            amount_y,
            token_x: token_x.to_string(),
            token_y: token_y.to_string(),
            liquidity_pool: liquidity_pool.to_string(),
        })
    }

    pub fn action_name(&self) -> &'static str {
        match self {
            Self::TransferToken(_) => "TransferToken",
            Self::GetTokenAccountBalance(_) => "GetTokenAccountBalance",
            Self::GetTokenInfo(_) => "GetTokenInfo",
            Self::CreateToken(_) => "CreateToken",
            Self::MintToken(_) => "MintToken",
            Self::CreateLiquidityPool(_) => "CreateLiquidityPool",
            Self::AddLiquidity(_) => "AddLiquidity",
        }
    }

    pub fn to_value(&self) -> Result<Value, serde_json::Error> {
        serde_json::to_value(self)
    }
}

fn encode_text(raw: &str) -> String {
    general_purpose::STANDARD.encode(raw.as_bytes())
}

#[cfg(test)]
mod tests;
