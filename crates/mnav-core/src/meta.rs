//! 组件元数据（component-meta.json）模型定义。
//!
//! 该模块描述组件安装钩子需要的全部输入：
//! - 组件标识与版本（用于规划结果落盘与审计）
//! - 目标可执行文件的占位符路径与快捷方式显示名
//!
//! 约定：
//! - 路径字段使用宿主占位符（`@TargetDir@` 等），由宿主引擎在执行期解析
//! - 可选字段通过 `#[serde(default)]` 提供 MissionNavigator 默认值，
//!   以便元数据文件向前兼容
//! - 该模块仅定义数据结构与加载逻辑，不执行任何系统修改
//!
//! 作者：MissionNavigator 项目组（自动生成）
//! 创建时间：2026-08-23
//! 修改时间：2026-08-23

use std::path::Path;

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};

/// 安装目标目录占位符（宿主执行期解析）。
pub const TARGET_DIR_PLACEHOLDER: &str = "@TargetDir@";

/// 开始菜单目录占位符（宿主执行期解析）。
pub const START_MENU_DIR_PLACEHOLDER: &str = "@StartMenuDir@";

/// 桌面目录占位符（宿主执行期解析）。
pub const DESKTOP_DIR_PLACEHOLDER: &str = "@DesktopDir@";

/// 组件元数据根对象（对应 `component-meta.json`）。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComponentMeta {
    /// 组件标识（例如 `org.mavlink.missionnavigator`）。
    pub component_id: String,
    /// 组件显示名称。
    pub display_name: String,
    /// 版本号（用于展示/审计）。
    pub version: String,
    #[serde(default = "default_target_exe")]
    /// 目标可执行文件的占位符路径（快捷方式指向的对象）。
    pub target_exe: String,
    #[serde(default = "default_shortcut_name")]
    /// 快捷方式显示名（不含 `.lnk`）。
    pub shortcut_name: String,
}

fn default_target_exe() -> String {
    format!("{TARGET_DIR_PLACEHOLDER}/bin/missionnavigator.exe")
}

fn default_shortcut_name() -> String {
    "MissionNavigator".to_string()
}

impl Default for ComponentMeta {
    /// MissionNavigator 组件的出厂元数据。
    fn default() -> Self {
        Self {
            component_id: "org.mavlink.missionnavigator".to_string(),
            display_name: "MissionNavigator".to_string(),
            version: "1.0.0".to_string(),
            target_exe: default_target_exe(),
            shortcut_name: default_shortcut_name(),
        }
    }
}

impl ComponentMeta {
    /// 开始菜单快捷方式的目的路径（占位符形式）。
    pub fn start_menu_link(&self) -> String {
        format!("{START_MENU_DIR_PLACEHOLDER}/{}.lnk", self.shortcut_name)
    }

    /// 桌面快捷方式的目的路径（占位符形式）。
    pub fn desktop_link(&self) -> String {
        format!("{DESKTOP_DIR_PLACEHOLDER}/{}.lnk", self.shortcut_name)
    }

    /// 读取并解析组件元数据（JSON）。
    ///
    /// 参数：
    /// - `path`：元数据文件路径
    ///
    /// 返回值：
    /// - 成功：解析后的 [`ComponentMeta`]
    ///
    /// 异常处理：
    /// - 文件读取失败（不存在/权限/IO）返回错误
    /// - JSON 解析失败返回错误
    /// - `target_exe` 或 `shortcut_name` 为空字符串时返回错误，
    ///   避免生成指向基准目录本身的快捷方式请求
    pub fn load(path: &Path) -> Result<Self> {
        let bytes =
            std::fs::read(path).with_context(|| format!("读取元数据失败: {}", path.display()))?;
        let meta: ComponentMeta =
            serde_json::from_slice(&bytes).context("解析元数据 JSON 失败")?;
        if meta.target_exe.is_empty() {
            return Err(anyhow!("元数据 target_exe 为空"));
        }
        if meta.shortcut_name.is_empty() {
            return Err(anyhow!("元数据 shortcut_name 为空"));
        }
        Ok(meta)
    }
}
