//! 宿主安装引擎抽象与内存实现。
//!
//! 设计目标：
//! - 将“隐式全局宿主”改为显式依赖注入：组件钩子只依赖 [`InstallerHost`]，
//!   可用假宿主独立测试
//! - 平台识别以宿主下发的字符串标签为准，与编译目标解耦
//!
//! 作者：MissionNavigator 项目组（自动生成）
//! 创建时间：2026-08-23
//! 修改时间：2026-08-23

use thiserror::Error;

use crate::operation::Operation;

/// Windows 平台标签（与宿主 `platform_id()` 做精确比较）。
pub const PLATFORM_WINDOWS: &str = "windows";

/// 默认操作生成阶段的错误类型。
///
/// 用途：
/// - 供宿主实现表达“默认操作集无法生成”的明确原因；
///   钩子侧按“记录日志并继续”的策略吞掉该错误（见 [`crate::hook::InstallHook`]）。
#[derive(Debug, Error)]
pub enum HostError {
    #[error("宿主拒绝生成默认安装操作: {0}")]
    DefaultOperationsRejected(String),
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

/// 宿主安装引擎接口（操作规划阶段）。
///
/// 约定：
/// - `create_default_operations` 可能失败；失败与否不影响后续追加操作
/// - `add_operation` 视为不失败（仅内存追加，执行期问题由宿主处理）
/// - 操作按追加顺序执行，宿主不重排
pub trait InstallerHost {
    /// 生成并入队本组件的默认安装操作集。
    fn create_default_operations(&mut self) -> Result<(), HostError>;

    /// 向宿主队列末尾追加一条操作请求。
    fn add_operation(&mut self, operation: Operation);

    /// 当前平台标签（例如 `windows` / `linux` / `macos`）。
    fn platform_id(&self) -> &str;
}

/// 返回编译目标对应的平台标签。
///
/// 返回值：
/// - `windows` / `macos` / `linux`；其余目标返回 `unknown`
///
/// 说明：
/// - 仅作为工具侧缺省值；真实安装运行时以宿主下发的标签为准。
pub fn current_platform_id() -> &'static str {
    if cfg!(target_os = "windows") {
        "windows"
    } else if cfg!(target_os = "macos") {
        "macos"
    } else if cfg!(target_os = "linux") {
        "linux"
    } else {
        "unknown"
    }
}

/// 内存规划宿主：将默认操作集与钩子追加的操作收集到同一个队列。
///
/// 用途：
/// - 规划工具（`mnav-planner`）与测试使用；不做任何系统修改
/// - 默认操作集在构造时给定，`create_default_operations` 仅负责入队
#[derive(Debug, Clone)]
pub struct PlanningHost {
    platform: String,
    default_operations: Vec<Operation>,
    queue: Vec<Operation>,
}

impl PlanningHost {
    /// 构造规划宿主。
    ///
    /// 参数：
    /// - `platform`：平台标签（精确匹配，不做大小写归一）
    /// - `default_operations`：宿主默认操作集（可为空）
    pub fn new<P: Into<String>>(platform: P, default_operations: Vec<Operation>) -> Self {
        Self {
            platform: platform.into(),
            default_operations,
            queue: Vec::new(),
        }
    }

    /// 当前队列内容（按执行顺序）。
    pub fn operations(&self) -> &[Operation] {
        &self.queue
    }

    /// 消费宿主并取出队列。
    pub fn into_operations(self) -> Vec<Operation> {
        self.queue
    }
}

impl InstallerHost for PlanningHost {
    /// 将构造时给定的默认操作集按序入队（总是成功）。
    fn create_default_operations(&mut self) -> Result<(), HostError> {
        self.queue.extend(self.default_operations.iter().cloned());
        Ok(())
    }

    fn add_operation(&mut self, operation: Operation) {
        self.queue.push(operation);
    }

    fn platform_id(&self) -> &str {
        &self.platform
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn planning_host_queues_defaults_then_additions() {
        let mut host = PlanningHost::new(
            "linux",
            vec![Operation::new("Extract", ["pkg.7z", "@TargetDir@"])],
        );
        host.create_default_operations().unwrap();
        host.add_operation(Operation::new("Mkdir", ["@TargetDir@/data"]));
        let names: Vec<&str> = host.operations().iter().map(|o| o.name.as_str()).collect();
        assert_eq!(names, ["Extract", "Mkdir"]);
    }

    #[test]
    fn host_error_messages_name_the_cause() {
        let e = HostError::DefaultOperationsRejected("组件未注册".to_string());
        assert!(e.to_string().contains("组件未注册"));
    }
}
