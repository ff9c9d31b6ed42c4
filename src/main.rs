//! uaparser 命令行：解析参数或标准输入中的 UA 字符串
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

use uaparser::{ConfigManager, UaParser};

#[derive(Debug, Parser)]
#[command(name = "uaparser", version, about = "Classify user-agent strings into OS / device / browser / device type")]
struct Cli {
    /// JSON 规则文件，缺省使用内置规则
    #[arg(short, long)]
    rules: Option<PathBuf>,

    /// 每行输出一个 JSON 对象
    #[arg(long)]
    json: bool,

    /// 输出规则编译统计
    #[arg(short, long)]
    verbose: bool,

    /// 待解析的 UA，缺省从标准输入逐行读取
    user_agents: Vec<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // 未设置 RUST_LOG 时：--verbose 输出 info（编译统计），否则仅 warn
    let default_level = if cli.verbose { LevelFilter::INFO } else { LevelFilter::WARN };
    let filter = EnvFilter::builder()
        .with_default_directive(default_level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let mut builder = ConfigManager::custom().verbose(cli.verbose);
    if let Some(path) = &cli.rules {
        builder = builder.rules_path(path);
    }
    let config = builder.build();
    let parser = UaParser::with_config(&config).context("failed to build UA parser")?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if cli.user_agents.is_empty() {
        for line in io::stdin().lock().lines() {
            let line = line.context("failed to read stdin")?;
            emit(&mut out, &parser, &line, cli.json)?;
        }
    } else {
        for ua in &cli.user_agents {
            emit(&mut out, &parser, ua, cli.json)?;
        }
    }
    Ok(())
}

fn emit(out: &mut impl Write, parser: &UaParser, ua: &str, json: bool) -> Result<()> {
    let info = parser.parse(ua);
    if json {
        writeln!(out, "{}", serde_json::to_string(&info)?)?;
    } else {
        writeln!(out, "{}", info)?;
    }
    Ok(())
}
