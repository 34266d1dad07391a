//! CLI 模块负责解析命令行参数并分发到各子命令处理逻辑。

mod runner;

pub mod action;
pub mod args;
pub mod connect;
pub mod context;
pub mod faucet;

pub use runner::run;
