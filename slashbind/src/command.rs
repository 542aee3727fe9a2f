//! 命令注册元数据（Command Registration Facade）
//!
//! 仅用于填充远端命令注册表的顶层条目，不参与分发逻辑。
//!
use crate::schema::{CommandSchema, OptionDescriptor};
use serde::{Deserialize, Serialize};

/// 命令元数据：(内部名称, 展示名称, 描述)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommandData {
    pub name: String,
    pub human_name: String,
    pub description: String,
}

impl CommandData {
    pub fn new(
        name: impl Into<String>,
        human_name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            human_name: human_name.into(),
            description: description.into(),
        }
    }
}

/// 能够给出自身元数据的命令
///
/// 可通过 `#[derive(Command)]` 与 `#[command(name = .., human_name = .., description = ..)]` 生成。
pub trait Command {
    fn command_data(&self) -> CommandData;
}

/// 提交给远端注册表的完整命令条目
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandRegistration {
    #[serde(flatten)]
    pub data: CommandData,
    pub options: Vec<OptionDescriptor>,
}

impl CommandRegistration {
    pub fn new(data: CommandData, schema: &CommandSchema) -> Self {
        Self {
            data,
            options: schema.options.clone(),
        }
    }
}
