//! 入站交互事件（Interaction）
//!
//! 网关下发的交互负载模型，支持从 JSON 反序列化：
//! ```json
//! {"id": "1", "type": 2, "data": {"name": "greet", "options": [{"name": "greeting", "type": 3, "value": "hi"}]}}
//! ```
//! 仅 `type = 2` 的负载视为命令调用；snowflake 同时接受字符串与数字写法。
//!
//! 单个选项的类型编码未知、或值与其线上类型不符时，不拒绝整个事件：
//! 该选项保留为 `OptionValue::Unknown`，由字段映射与解码策略决定去留。
//!
use crate::error::{DecodeError, WireError};
use crate::kind::OptionKind;
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

/// 入站选项值（按线上类型区分）
#[derive(Debug, Clone, PartialEq)]
pub enum OptionValue {
    Text(String),
    Integer(i64),
    Boolean(bool),
    Snowflake { kind: OptionKind, id: u64 },
    Number(f64),
    Nested {
        kind: OptionKind,
        options: Vec<InboundOption>,
    },
    /// 无法按线上类型读取的值（未知类型编码，或值与类型不符）
    Unknown { code: u8, raw: Value },
}

impl OptionValue {
    /// 线上类型；`Unknown` 没有可用的类型
    pub fn kind(&self) -> Option<OptionKind> {
        match self {
            Self::Text(_) => Some(OptionKind::String),
            Self::Integer(_) => Some(OptionKind::Integer),
            Self::Boolean(_) => Some(OptionKind::Boolean),
            Self::Snowflake { kind, .. } => Some(*kind),
            Self::Number(_) => Some(OptionKind::Number),
            Self::Nested { kind, .. } => Some(*kind),
            Self::Unknown { .. } => None,
        }
    }

    pub fn as_text(&self) -> Result<&str, DecodeError> {
        match self {
            Self::Text(s) => Ok(s),
            other => Err(other.mismatch(OptionKind::String)),
        }
    }

    pub fn as_integer(&self) -> Result<i64, DecodeError> {
        match self {
            Self::Integer(v) => Ok(*v),
            other => Err(other.mismatch(OptionKind::Integer)),
        }
    }

    pub fn as_boolean(&self) -> Result<bool, DecodeError> {
        match self {
            Self::Boolean(v) => Ok(*v),
            other => Err(other.mismatch(OptionKind::Boolean)),
        }
    }

    /// 读取标识符；`expected` 为字段声明的引用类别，线上类别不一致时报错
    pub fn as_identifier(&self, expected: OptionKind) -> Result<u64, DecodeError> {
        match self {
            Self::Snowflake { kind, id } if *kind == expected => Ok(*id),
            other => Err(other.mismatch(expected)),
        }
    }

    pub(crate) fn mismatch(&self, expected: OptionKind) -> DecodeError {
        match self {
            Self::Unknown { code, .. } => DecodeError::Unreadable {
                expected,
                code: *code,
            },
            other => DecodeError::KindMismatch {
                expected,
                // 除 Unknown 外均有线上类型
                found: other.kind().unwrap_or(expected),
            },
        }
    }
}

/// 入站选项：(名称, 值)，属于不可信输入
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "RawOption")]
pub struct InboundOption {
    pub name: String,
    pub value: OptionValue,
}

impl InboundOption {
    pub fn new(name: impl Into<String>, value: OptionValue) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

/// 一次命令调用的负载
#[derive(Debug, Clone, PartialEq)]
pub struct CommandInteraction {
    pub name: String,
    pub options: Vec<InboundOption>,
}

/// 交互负载的判别联合
#[derive(Debug, Clone, PartialEq)]
pub enum InteractionData {
    Ping,
    Command(CommandInteraction),
    /// 组件、自动补全、模态框等非命令交互
    Other { kind: u8 },
}

/// 入站交互事件
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "RawInteraction")]
pub struct InteractionEvent {
    pub id: u64,
    pub data: InteractionData,
}

impl InteractionEvent {
    pub fn command(id: u64, name: impl Into<String>, options: Vec<InboundOption>) -> Self {
        Self {
            id,
            data: InteractionData::Command(CommandInteraction {
                name: name.into(),
                options,
            }),
        }
    }

    pub fn as_command(&self) -> Option<&CommandInteraction> {
        match &self.data {
            InteractionData::Command(cmd) => Some(cmd),
            _ => None,
        }
    }

    pub fn from_json(payload: &str) -> Result<Self, WireError> {
        Ok(serde_json::from_str(payload)?)
    }
}

// -------- wire --------

const INTERACTION_PING: u8 = 1;
const INTERACTION_COMMAND: u8 = 2;

#[derive(Deserialize)]
struct RawInteraction {
    id: Value,
    #[serde(rename = "type")]
    kind: u8,
    #[serde(default)]
    data: Option<RawCommandData>,
}

#[derive(Deserialize)]
struct RawCommandData {
    name: String,
    #[serde(default)]
    options: Vec<RawOption>,
}

#[derive(Deserialize)]
struct RawOption {
    name: String,
    #[serde(rename = "type")]
    code: u8,
    #[serde(default)]
    value: Option<Value>,
    #[serde(default)]
    options: Vec<RawOption>,
}

impl TryFrom<RawInteraction> for InteractionEvent {
    type Error = WireError;

    fn try_from(raw: RawInteraction) -> Result<Self, Self::Error> {
        let id = parse_snowflake(&raw.id)?;
        let data = match raw.kind {
            INTERACTION_PING => InteractionData::Ping,
            INTERACTION_COMMAND => {
                let data = raw.data.ok_or(WireError::InvalidValue {
                    name: "data".to_string(),
                    expected: "command data",
                })?;
                let options = data.options.into_iter().map(InboundOption::from).collect();
                InteractionData::Command(CommandInteraction {
                    name: data.name,
                    options,
                })
            }
            kind => InteractionData::Other { kind },
        };
        Ok(Self { id, data })
    }
}

impl From<RawOption> for InboundOption {
    fn from(raw: RawOption) -> Self {
        let RawOption {
            name,
            code,
            value,
            options,
        } = raw;

        let typed = OptionKind::from_code(code)
            .and_then(|kind| typed_value(kind, value.as_ref(), options));
        let value = typed.unwrap_or_else(|| {
            debug!(option = %name, code, "keeping unreadable option value as unknown");
            OptionValue::Unknown {
                code,
                raw: value.unwrap_or(Value::Null),
            }
        });

        Self { name, value }
    }
}

fn typed_value(
    kind: OptionKind,
    value: Option<&Value>,
    options: Vec<RawOption>,
) -> Option<OptionValue> {
    let typed = match kind {
        OptionKind::SubCommand | OptionKind::SubCommandGroup => OptionValue::Nested {
            kind,
            options: options.into_iter().map(InboundOption::from).collect(),
        },
        OptionKind::String => OptionValue::Text(value?.as_str()?.to_owned()),
        OptionKind::Integer => OptionValue::Integer(value?.as_i64()?),
        OptionKind::Boolean => OptionValue::Boolean(value?.as_bool()?),
        OptionKind::Number => OptionValue::Number(value?.as_f64()?),
        OptionKind::User
        | OptionKind::Channel
        | OptionKind::Role
        | OptionKind::Mentionable
        | OptionKind::Attachment => OptionValue::Snowflake {
            kind,
            id: parse_snowflake(value?).ok()?,
        },
    };
    Some(typed)
}

fn parse_snowflake(v: &Value) -> Result<u64, WireError> {
    match v {
        Value::String(s) => s
            .parse::<u64>()
            .map_err(|_| WireError::InvalidSnowflake(s.clone())),
        Value::Number(n) => n
            .as_u64()
            .ok_or_else(|| WireError::InvalidSnowflake(n.to_string())),
        other => Err(WireError::InvalidSnowflake(other.to_string())),
    }
}
