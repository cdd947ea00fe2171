//! MissionNavigator 安装组件核心库（无系统副作用）。
//!
//! 功能：
//! - 定义安装操作（operation）模型：操作名 + 有序字符串参数
//! - 定义宿主安装引擎抽象（[`host::InstallerHost`]），供组件钩子依赖注入
//! - 实现组件安装钩子（[`hook::InstallHook`]）：操作规划阶段的唯一入口
//! - 定义组件元数据（component-meta.json）与规划结果落盘模型（install-plan.json）
//!
//! 约定：
//! - 本库只向宿主队列追加声明式操作请求，不执行文件复制、注册表或快捷方式原语
//! - 路径参数中的 `@TargetDir@` 等占位符由宿主引擎在执行期解析
//!
//! 作者：MissionNavigator 项目组（自动生成）
//! 创建时间：2026-08-23
//! 修改时间：2026-08-23

pub mod hook;
pub mod host;
pub mod meta;
pub mod operation;
pub mod plan;
