//! 安装操作模型。
//!
//! 操作是一条“操作名 + 有序字符串参数”的声明式指令，由组件钩子创建、
//! 追加到宿主队列，并由宿主引擎在执行阶段解释；本库不解释其语义。
//!
//! 作者：MissionNavigator 项目组（自动生成）
//! 创建时间：2026-08-23
//! 修改时间：2026-08-23

use std::fmt;

use serde::{Deserialize, Serialize};

/// 快捷方式创建操作名（参数约定：目标可执行文件、`.lnk` 目的路径）。
pub const OP_CREATE_SHORTCUT: &str = "CreateShortcut";

/// 组件默认操作：解包组件归档到安装目录（参数约定：归档名、目标目录）。
pub const OP_EXTRACT: &str = "Extract";

/// 单条安装操作请求。
///
/// 字段说明：
/// - `name`：操作名（由宿主引擎解释，例如 `CreateShortcut`）
/// - `args`：有序位置参数；追加后不再被本库读取或修改
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Operation {
    pub name: String,
    pub args: Vec<String>,
}

impl Operation {
    /// 构造一条操作请求。
    ///
    /// 参数：
    /// - `name`：操作名
    /// - `args`：位置参数（任意可转为 `String` 的序列）
    pub fn new<N, I, A>(name: N, args: I) -> Self
    where
        N: Into<String>,
        I: IntoIterator<Item = A>,
        A: Into<String>,
    {
        Self {
            name: name.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }
}

impl fmt::Display for Operation {
    /// 渲染为 `Name(arg1, arg2, ...)` 形式，用于规划结果的人读输出。
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.name, self.args.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_renders_name_and_args() {
        let op = Operation::new(OP_CREATE_SHORTCUT, ["a.exe", "b.lnk"]);
        assert_eq!(op.to_string(), "CreateShortcut(a.exe, b.lnk)");
    }

    #[test]
    fn display_renders_empty_args() {
        let op = Operation::new("Noop", Vec::<String>::new());
        assert_eq!(op.to_string(), "Noop()");
    }
}
