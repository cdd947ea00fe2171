//! MissionNavigator 安装操作规划工具（planner）。
//!
//! 职责：
//! - 读取 `component-meta.json`，构造组件安装钩子
//! - 用内存规划宿主执行一次操作规划（不做任何系统修改）
//! - `plan`：按执行顺序打印操作队列；`export`：落盘 `install-plan.json`
//!
//! 说明：
//! - 默认操作集建模为一条 `Extract(<component_id>.7z, @TargetDir@)` 请求，
//!   与宿主引擎对组件的默认处理一致
//! - 平台标签默认取编译目标，可用 `--platform` 覆盖以预演其他平台的队列
//!
//! 作者：MissionNavigator 项目组（自动生成）
//! 创建时间：2026-08-23
//! 修改时间：2026-08-23

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use mnav_core::hook::InstallHook;
use mnav_core::host::{current_platform_id, PlanningHost};
use mnav_core::meta::{ComponentMeta, TARGET_DIR_PLACEHOLDER};
use mnav_core::operation::{Operation, OP_EXTRACT};
use mnav_core::plan::{persist_report, PlanReport};
use tracing::info;

/// 命令行参数。
///
/// 说明：
/// - `meta` 指向组件元数据文件（默认 `component-meta.json`）
/// - `platform` 覆盖平台标签（默认取编译目标）
#[derive(Debug, Parser)]
#[command(name = "mnav-planner", version)]
struct Cli {
    #[arg(long, default_value = "component-meta.json")]
    meta: PathBuf,

    #[arg(long)]
    platform: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

/// planner 支持的子命令。
#[derive(Debug, Subcommand)]
enum Commands {
    /// 规划并打印操作队列（只读，不落盘）。
    Plan,
    /// 规划并将结果写入 JSON 文件。
    Export {
        #[arg(long, default_value = "install-plan.json")]
        out: PathBuf,
    },
}

/// 程序入口：解析参数并分发子命令。
fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("info".parse().unwrap()),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();
    match &cli.command {
        Commands::Plan => plan(&cli),
        Commands::Export { out } => export(&cli, out),
    }
}

/// 执行一次操作规划并返回（平台标签, 元数据, 队列）。
///
/// 异常处理：
/// - 元数据读取/解析失败会返回错误
fn run_planning(cli: &Cli) -> Result<(String, ComponentMeta, Vec<Operation>)> {
    let meta = ComponentMeta::load(&cli.meta)?;
    let platform = cli
        .platform
        .clone()
        .unwrap_or_else(|| current_platform_id().to_string());

    let defaults = vec![Operation::new(
        OP_EXTRACT,
        [format!("{}.7z", meta.component_id), TARGET_DIR_PLACEHOLDER.to_string()],
    )];
    let mut host = PlanningHost::new(platform.clone(), defaults);
    InstallHook::new(meta.clone()).create_operations(&mut host);

    Ok((platform, meta, host.into_operations()))
}

/// `plan` 子命令：打印操作队列。
fn plan(cli: &Cli) -> Result<()> {
    let (platform, meta, operations) = run_planning(cli)?;
    info!(
        "规划完成: {} {} (platform = {platform}, {} 项操作)",
        meta.display_name,
        meta.version,
        operations.len()
    );
    for op in &operations {
        println!("{op}");
    }
    Ok(())
}

/// `export` 子命令：规划并落盘 `install-plan.json`。
///
/// 异常处理：
/// - 序列化或写文件失败会返回错误
fn export(cli: &Cli, out: &PathBuf) -> Result<()> {
    let (platform, meta, operations) = run_planning(cli)?;
    let report = PlanReport::new(&meta, &platform, operations);
    persist_report(out, &report)?;
    info!(
        "规划结果已写入: {} (plan_id = {})",
        out.display(),
        report.plan_id
    );
    Ok(())
}
