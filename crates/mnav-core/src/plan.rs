//! 规划结果落盘模型（install-plan.json）。
//!
//! 目的：
//! - 记录“本次规划产出了哪些操作请求”，供部署审计与宿主侧比对
//! - 不含执行结果；操作执行与回滚由宿主引擎负责
//!
//! 作者：MissionNavigator 项目组（自动生成）
//! 创建时间：2026-08-23
//! 修改时间：2026-08-23

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::meta::ComponentMeta;
use crate::operation::Operation;

/// 单次规划的结果（会序列化为 JSON 落盘）。
///
/// 字段说明：
/// - `plan_id`：本次规划 ID（用于区分多次规划）
/// - `component_id` / `version`：与组件元数据一致
/// - `platform`：本次规划使用的平台标签
/// - `generated_at`：规划时间（UTC）
/// - `operations`：按执行顺序排列的操作请求
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanReport {
    pub plan_id: Uuid,
    pub component_id: String,
    pub version: String,
    pub platform: String,
    pub generated_at: OffsetDateTime,
    pub operations: Vec<Operation>,
}

impl PlanReport {
    /// 由元数据与规划出的操作序列创建报告。
    ///
    /// 返回值：
    /// - `plan_id` 为随机 UUID，`generated_at` 为当前 UTC 时间
    pub fn new(meta: &ComponentMeta, platform: &str, operations: Vec<Operation>) -> Self {
        Self {
            plan_id: Uuid::new_v4(),
            component_id: meta.component_id.clone(),
            version: meta.version.clone(),
            platform: platform.to_string(),
            generated_at: OffsetDateTime::now_utc(),
            operations,
        }
    }
}

/// 将规划报告序列化并写入指定路径。
///
/// 异常处理：
/// - 序列化失败或写文件失败会返回错误
pub fn persist_report(path: &Path, report: &PlanReport) -> Result<()> {
    let bytes = serde_json::to_vec_pretty(report).context("序列化 install-plan.json 失败")?;
    std::fs::write(path, bytes)
        .with_context(|| format!("写入规划文件失败: {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// 验证报告 JSON 往返后操作序列保持顺序与内容。
    fn plan_report_serde_round_trip() {
        let meta = ComponentMeta::default();
        let ops = vec![
            Operation::new("Extract", ["pkg.7z", "@TargetDir@"]),
            Operation::new(
                "CreateShortcut",
                [
                    "@TargetDir@/bin/missionnavigator.exe",
                    "@DesktopDir@/MissionNavigator.lnk",
                ],
            ),
        ];
        let report = PlanReport::new(&meta, "windows", ops.clone());
        let json = serde_json::to_string(&report).unwrap();
        let back: PlanReport = serde_json::from_str(&json).unwrap();
        assert_eq!(back.plan_id, report.plan_id);
        assert_eq!(back.platform, "windows");
        assert_eq!(back.operations, ops);
    }
}
