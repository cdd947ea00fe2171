//! 组件安装钩子：操作规划阶段的唯一入口。
//!
//! 行为（按序执行）：
//! 1) 请求宿主生成默认安装操作集；失败时记录日志并继续（尽力而为，不上抛）
//! 2) 读取宿主平台标签
//! 3) 标签精确等于 `windows` 时，追加两条 `CreateShortcut` 请求
//!    （开始菜单在前、桌面在后，参数均为“目标可执行文件、`.lnk` 目的路径”）
//! 4) 其他平台不追加任何操作，也不输出日志
//!
//! 约定：
//! - 钩子不做去重；宿主每次规划调用都会得到完整的一份操作序列
//! - 占位符路径原样入队，由宿主引擎在执行期解析
//!
//! 作者：MissionNavigator 项目组（自动生成）
//! 创建时间：2026-08-23
//! 修改时间：2026-08-23

use tracing::warn;

use crate::host::{InstallerHost, PLATFORM_WINDOWS};
use crate::meta::ComponentMeta;
use crate::operation::{Operation, OP_CREATE_SHORTCUT};

/// 组件安装钩子。
///
/// 说明：
/// - 通过 [`InstallerHost`] 显式注入宿主，便于用假宿主独立测试
/// - 自身无状态，可在多次规划调用间复用
#[derive(Debug, Clone, Default)]
pub struct InstallHook {
    meta: ComponentMeta,
}

impl InstallHook {
    /// 用给定组件元数据构造钩子。
    pub fn new(meta: ComponentMeta) -> Self {
        Self { meta }
    }

    /// 组件元数据（只读）。
    pub fn meta(&self) -> &ComponentMeta {
        &self.meta
    }

    /// 规划阶段回调：向宿主队列追加本组件的全部操作请求。
    ///
    /// 参数：
    /// - `host`：宿主安装引擎（拥有操作队列与平台标签）
    ///
    /// 异常处理：
    /// - 默认操作集生成失败被完整吸收：记录一条 warn 日志后继续执行
    ///   平台特定步骤；本方法自身不会失败
    pub fn create_operations(&self, host: &mut dyn InstallerHost) {
        if let Err(e) = host.create_default_operations() {
            warn!("默认安装操作生成失败，继续平台特定步骤: {e}");
        }

        if host.platform_id() == PLATFORM_WINDOWS {
            host.add_operation(Operation::new(
                OP_CREATE_SHORTCUT,
                [self.meta.target_exe.clone(), self.meta.start_menu_link()],
            ));
            host.add_operation(Operation::new(
                OP_CREATE_SHORTCUT,
                [self.meta.target_exe.clone(), self.meta.desktop_link()],
            ));
        }
    }
}
