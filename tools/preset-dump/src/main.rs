//! # Preset Dump
//!
//! 过渡预设导出工具 - 构建内置预设注册表并导出为 JSON，
//! 供宿主渲染层 / 编辑器工具消费或排查。
//!
//! ## 用法
//!
//! ```bash
//! # 在项目根目录使用 cargo 运行
//! cargo run -p preset-dump                        # 全量导出到 stdout
//! cargo run -p preset-dump -- --output presets.json
//! cargo run -p preset-dump -- --compact
//! cargo run -p preset-dump -- list
//! cargo run -p preset-dump -- show moveinright
//! ```

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use vn_transitions::PresetRegistry;

#[derive(Parser)]
#[command(name = "preset-dump")]
#[command(about = "过渡预设导出工具 - 将内置预设注册表导出为 JSON")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// 输出文件（默认：stdout）
    #[arg(short, long, global = true)]
    output: Option<PathBuf>,

    /// 紧凑输出（默认带缩进）
    #[arg(long, global = true)]
    compact: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// 列出全部预设名称
    List,

    /// 显示单个预设
    Show {
        /// 预设名称，如 `dissolve`、`moveinright`
        name: String,
    },
}

fn main() -> ExitCode {
    if let Err(e) = real_main() {
        eprintln!("preset-dump error: {e:#}");
        return ExitCode::from(1);
    }
    ExitCode::from(0)
}

fn real_main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_target(false).init();

    let cli = Cli::parse();
    let registry = PresetRegistry::with_defaults()?;

    let text = match &cli.command {
        None => to_json(&registry.sorted_entries(), cli.compact)?,
        Some(Commands::List) => registry.names().join("\n"),
        Some(Commands::Show { name }) => {
            let descriptor = registry
                .get(name)
                .ok_or_else(|| anyhow::anyhow!("未知预设 '{name}'"))?;
            to_json(descriptor, cli.compact)?
        }
    };

    match &cli.output {
        Some(path) => fs::write(path, text + "\n")?,
        None => println!("{text}"),
    }
    Ok(())
}

fn to_json<T: serde::Serialize>(value: &T, compact: bool) -> anyhow::Result<String> {
    let text = if compact {
        serde_json::to_string(value)?
    } else {
        serde_json::to_string_pretty(value)?
    };
    Ok(text)
}
