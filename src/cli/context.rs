use std::fs;
use std::path::PathBuf;

use anyhow::{Result, anyhow};
use reqwest::Proxy;
use time::{UtcOffset, macros::format_description};
use tracing_subscriber::fmt::time::OffsetTime;
use tracing_subscriber::{EnvFilter, fmt};

use crate::config::{AppConfig, ConfigError, GlobalConfig, LoggingConfig, LoggingProfile, load_config};

/// 初始化 tracing，兼顾 JSON 与文本输出模式。
pub fn init_tracing(config: &LoggingConfig) -> Result<()> {
    let mut filter = EnvFilter::try_new(&config.level).unwrap_or_else(|_| EnvFilter::new("info"));

    // 默认压低外部依赖的调试输出；Verbose 模式打开签名器与水龙头的细节日志。
    match config.profile {
        LoggingProfile::Lean => {
            const QUIET_TARGETS: &[(&str, &str)] = &[
                ("hyper", "warn"),
                ("hyper_util::client::legacy", "warn"),
                ("reqwest", "info"),
            ];
            for (module, level) in QUIET_TARGETS {
                if !config.level.contains(module) {
                    if let Ok(directive) = format!("{module}={level}").parse() {
                        filter = filter.add_directive(directive);
                    }
                }
            }
        }
        LoggingProfile::Verbose => {
            const VERBOSE_TARGETS: &[(&str, &str)] = &[
                ("signer", "debug"),
                ("signer::snap", "debug"),
                ("faucet", "debug"),
                ("latency", "debug"),
            ];
            for (module, level) in VERBOSE_TARGETS {
                if let Ok(directive) = format!("{module}={level}").parse() {
                    filter = filter.add_directive(directive);
                }
            }
        }
    }

    let time_format =
        format_description!("[year]-[month]-[day] [hour]:[minute]:[second].[subsecond digits:3]");
    let offset = UtcOffset::from_hms(config.timezone_offset_hours, 0, 0).map_err(|err| {
        anyhow!(
            "invalid logging timezone offset {}: {err}",
            config.timezone_offset_hours
        )
    })?;
    let offset_timer = OffsetTime::new(offset, time_format);

    // 日志写 stderr，stdout 留给命令输出（JSON 载荷、地址等）。
    let base = fmt()
        .with_writer(std::io::stderr)
        .with_timer(offset_timer)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(true)
        .with_level(true);

    if config.json {
        base.json()
            .with_current_span(false)
            .with_span_list(false)
            .with_env_filter(filter)
            .try_init()
            .map_err(|err| anyhow!(err.to_string()))?;
    } else {
        base.with_env_filter(filter)
            .event_format(fmt::format().compact())
            .try_init()
            .map_err(|err| anyhow!(err.to_string()))?;
    }
    Ok(())
}

/// 加载主配置；用于 `vmwallet --config` 的入口。
pub fn load_configuration(path: Option<PathBuf>) -> Result<AppConfig, ConfigError> {
    load_config(path)
}

/// 按 global 配置构建共享的 HTTP 客户端（代理与 User-Agent）。
pub fn build_http_client(global: &GlobalConfig) -> Result<reqwest::Client> {
    let mut builder = reqwest::Client::builder();

    let agent = global.user_agent.trim();
    if !agent.is_empty() {
        builder = builder.user_agent(agent);
    }

    if let Some(proxy_url) = global
        .proxy
        .as_deref()
        .map(str::trim)
        .filter(|value| !value.is_empty())
    {
        let proxy = Proxy::all(proxy_url)
            .map_err(|err| anyhow!("global.proxy 地址无效 {proxy_url}: {err}"))?;
        builder = builder.proxy(proxy);
    }

    builder
        .build()
        .map_err(|err| anyhow!("构建 HTTP 客户端失败: {err}"))
}

pub fn init_configs(args: crate::cli::args::InitCmd) -> Result<()> {
    let output_dir = match args.output {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    fs::create_dir_all(&output_dir)?;

    let templates: [(&str, &str); 1] = [(
        "vmwallet.toml",
        include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/vmwallet.toml")),
    )];

    for (filename, contents) in templates {
        let target_path = output_dir.join(filename);
        if target_path.exists() && !args.force {
            println!(
                "跳过 {}（文件已存在，如需覆盖请加 --force）",
                target_path.display()
            );
            continue;
        }

        fs::write(&target_path, contents)?;
        println!("已写入 {}", target_path.display());
    }

    Ok(())
}
