//! 选项类型（OptionKind）与字段类型映射（OptionType）
//!
//! `OptionKind` 覆盖远端命令注册表定义的全部选项类型编码；
//! 其中只有一部分在 [`registry`](crate::registry) 中登记了构造器与解码器，
//! 可作为请求结构体的字段类型使用。
//!
use crate::error::{DecodeError, WireError};
use crate::interaction::OptionValue;
use crate::registry;
use serde::{Deserialize, Serialize};

/// 远端选项类型（数值编码与线上协议一致）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum OptionKind {
    SubCommand,
    SubCommandGroup,
    /// 文本
    String,
    Integer,
    Boolean,
    User,
    Channel,
    Role,
    Mentionable,
    Number,
    Attachment,
}

impl OptionKind {
    /// 线上协议中的类型编码
    pub const fn code(self) -> u8 {
        match self {
            Self::SubCommand => 1,
            Self::SubCommandGroup => 2,
            Self::String => 3,
            Self::Integer => 4,
            Self::Boolean => 5,
            Self::User => 6,
            Self::Channel => 7,
            Self::Role => 8,
            Self::Mentionable => 9,
            Self::Number => 10,
            Self::Attachment => 11,
        }
    }

    pub fn from_code(code: u8) -> Option<Self> {
        let kind = match code {
            1 => Self::SubCommand,
            2 => Self::SubCommandGroup,
            3 => Self::String,
            4 => Self::Integer,
            5 => Self::Boolean,
            6 => Self::User,
            7 => Self::Channel,
            8 => Self::Role,
            9 => Self::Mentionable,
            10 => Self::Number,
            11 => Self::Attachment,
            _ => return None,
        };
        Some(kind)
    }

    /// 是否为以 snowflake 承载的标识符类型
    pub const fn is_identifier(self) -> bool {
        matches!(
            self,
            Self::User | Self::Channel | Self::Role | Self::Mentionable | Self::Attachment
        )
    }
}

impl From<OptionKind> for u8 {
    fn from(kind: OptionKind) -> Self {
        kind.code()
    }
}

impl TryFrom<u8> for OptionKind {
    type Error = WireError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Self::from_code(code).ok_or(WireError::UnknownKind(code))
    }
}

/// 注册表解码器的输出：与具体字段类型无关的中间值
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decoded {
    Text(String),
    Integer(i64),
    Boolean(bool),
    Identifier(u64),
}

/// 可作为请求字段的类型
///
/// - `KIND`：该类型在远端 schema 中对应的选项类型；
/// - `REQUIRED`：未显式标注 `optional` 时的默认必填性（`Option<T>` 为 `false`）；
/// - `decode`：经注册表中 `KIND` 对应的解码器取值，再还原为具体类型。
///
/// 未实现该 trait 的字段类型会在 `#[derive(Request)]` 展开处产生编译错误。
pub trait OptionType: Sized {
    const KIND: OptionKind;
    const REQUIRED: bool = true;

    fn from_decoded(decoded: Decoded) -> Option<Self>;

    fn decode(value: &OptionValue) -> Result<Self, DecodeError> {
        let entry = registry::lookup(Self::KIND).ok_or(DecodeError::NoDecoder(Self::KIND))?;
        let decoded = entry.decode(value)?;
        Self::from_decoded(decoded).ok_or_else(|| value.mismatch(Self::KIND))
    }
}

impl OptionType for String {
    const KIND: OptionKind = OptionKind::String;

    fn from_decoded(decoded: Decoded) -> Option<Self> {
        match decoded {
            Decoded::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl OptionType for i64 {
    const KIND: OptionKind = OptionKind::Integer;

    fn from_decoded(decoded: Decoded) -> Option<Self> {
        match decoded {
            Decoded::Integer(v) => Some(v),
            _ => None,
        }
    }
}

impl OptionType for bool {
    const KIND: OptionKind = OptionKind::Boolean;

    fn from_decoded(decoded: Decoded) -> Option<Self> {
        match decoded {
            Decoded::Boolean(v) => Some(v),
            _ => None,
        }
    }
}

impl<T: OptionType> OptionType for Option<T> {
    const KIND: OptionKind = T::KIND;
    const REQUIRED: bool = false;

    fn from_decoded(decoded: Decoded) -> Option<Self> {
        T::from_decoded(decoded).map(Some)
    }
}
