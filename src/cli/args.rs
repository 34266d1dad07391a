use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::signer::SignerKind;

#[derive(Parser, Debug)]
#[command(name = "vmwallet", version, about = "HyperSDK VM 演示钱包客户端")]
pub struct Cli {
    #[arg(
        short,
        long,
        value_name = "FILE",
        help = "配置文件路径（默认查找 vmwallet.toml 或 config/vmwallet.toml）"
    )]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// 初始化配置模版文件
    Init(InitCmd),
    /// 向水龙头申请测试代币
    Faucet(FaucetCmd),
    /// 连接签名器（MetaMask Snap 或内存临时密钥）
    Connect(ConnectCmd),
    /// 构造 Action 载荷并输出 JSON
    #[command(subcommand)]
    Action(ActionCmd),
    /// 代币数量与原生单位互转
    #[command(subcommand)]
    Units(UnitsCmd),
}

#[derive(Args, Debug)]
pub struct InitCmd {
    #[arg(long, value_name = "DIR", help = "可选输出目录（默认当前目录）")]
    pub output: Option<PathBuf>,
    #[arg(long, help = "若文件存在则覆盖")]
    pub force: bool,
}

#[derive(Args, Debug)]
pub struct FaucetCmd {
    #[arg(help = "接收测试代币的地址")]
    pub address: String,
}

#[derive(Args, Debug)]
pub struct ConnectCmd {
    #[arg(long, value_enum, help = "签名器类型")]
    pub signer: SignerKind,
    #[arg(long, help = "连接成功后为第一个签名器申请水龙头代币")]
    pub fund: bool,
    #[arg(long, value_name = "TEXT", help = "使用第一个签名器签名一段文本（输出 base58）")]
    pub sign: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum ActionCmd {
    /// 转账（TransferToken）
    Transfer {
        #[arg(long, help = "收款地址")]
        to: String,
        #[arg(long, help = "代币地址")]
        token: String,
        #[arg(long, help = "转账数量（十进制，自动换算为原生单位）")]
        value: String,
    },
    /// 查询账户代币余额（GetTokenAccountBalance）
    Balance {
        #[arg(long, help = "代币地址")]
        token: String,
        #[arg(long, help = "账户地址")]
        address: String,
    },
    /// 查询代币信息（GetTokenInfo）
    #[command(name = "token-info")]
    TokenInfo {
        #[arg(long, help = "代币地址")]
        token: String,
    },
    /// 创建代币（CreateToken）
    #[command(name = "create-token")]
    CreateToken {
        #[arg(long)]
        name: String,
        #[arg(long)]
        symbol: String,
        #[arg(long, default_value = "")]
        metadata: String,
    },
    /// 铸造代币（MintToken）
    Mint {
        #[arg(long, help = "接收地址")]
        to: String,
        #[arg(long, help = "铸造数量（十进制，自动换算为原生单位）")]
        value: String,
        #[arg(long, help = "代币地址")]
        token: String,
    },
    /// 创建流动性池（CreateLiquidityPool）
    #[command(name = "create-pool")]
    CreatePool {
        #[arg(long, help = "定价函数 ID")]
        function_id: u64,
        #[arg(long)]
        token_x: String,
        #[arg(long)]
        token_y: String,
        #[arg(long, help = "手续费（基点）")]
        fee: u64,
    },
    /// 添加流动性（AddLiquidity）
    #[command(name = "add-liquidity")]
    AddLiquidity {
        #[arg(long)]
        amount_x: u64,
        #[arg(long)]
        amount_y: u64,
        #[arg(long)]
        token_x: String,
        #[arg(long)]
        token_y: String,
        #[arg(long, help = "流动性池地址")]
        pool: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum UnitsCmd {
    /// 十进制数量 -> 原生单位
    #[command(name = "to-native")]
    ToNative { amount: String },
    /// 原生单位 -> 十进制数量
    #[command(name = "from-native")]
    FromNative { value: u64 },
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_connect_signer_kind() {
        let cli = Cli::try_parse_from(["vmwallet", "connect", "--signer", "metamask-snap", "--fund"])
            .expect("parse connect");
        match cli.command {
            Command::Connect(args) => {
                assert_eq!(args.signer, SignerKind::MetamaskSnap);
                assert!(args.fund);
                assert!(args.sign.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn parses_pool_action() {
        let cli = Cli::try_parse_from([
            "vmwallet",
            "action",
            "create-pool",
            "--function-id",
            "1",
            "--token-x",
            "0xX",
            "--token-y",
            "0xY",
            "--fee",
            "30",
        ])
        .expect("parse action");
        assert!(matches!(
            cli.command,
            Command::Action(ActionCmd::CreatePool { function_id: 1, fee: 30, .. })
        ));
    }
}
