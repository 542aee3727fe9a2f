//! 统一错误定义
//!
//! 按阶段拆分为三类：
//! - `SchemaError`：派生或校验命令 schema 时的配置错误（致命，应中止注册）；
//! - `DecodeError`：将入站选项值解码为字段类型时的错误；
//! - `WireError`：解析网关下发的交互负载时的错误。
//!
use crate::kind::OptionKind;
use thiserror::Error;

/// Schema 派生错误（配置期）
#[non_exhaustive]
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SchemaError {
    #[error("unsupported option kind: field={field}, kind={kind:?}")]
    UnsupportedKind {
        field: &'static str,
        kind: OptionKind,
    },
    #[error("duplicate option name: {name}")]
    DuplicateOption { name: String },
    #[error("invalid option name: {name}")]
    InvalidName { name: String },
    #[error("description length out of range 1..=100: option={name}, len={len}")]
    InvalidDescription { name: String, len: usize },
    #[error("required option declared after an optional one: {name}")]
    RequiredAfterOptional { name: String },
    #[error("too many options: count={count}, max={max}")]
    TooManyOptions { count: usize, max: usize },
}

/// 选项值解码错误（运行期）
#[non_exhaustive]
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DecodeError {
    #[error("kind mismatch: expected={expected:?}, found={found:?}")]
    KindMismatch {
        expected: OptionKind,
        found: OptionKind,
    },
    #[error("unreadable value: expected={expected:?}, wire type code={code}")]
    Unreadable { expected: OptionKind, code: u8 },
        #[error("no decoder registered for kind {0:?}")]
    NoDecoder(OptionKind),
    #[error("unknown field: {0}")]
    UnknownField(String),
}

/// 交互负载解析错误
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum WireError {
    #[error("serialization error: {source}")]
    Serde {
        #[from]
        source: serde_json::Error,
    },
    #[error("unknown option type code: {0}")]
    UnknownKind(u8),
    #[error("invalid value for option {name}: expected {expected}")]
    InvalidValue { name: String, expected: &'static str },
    #[error("invalid snowflake: {0}")]
    InvalidSnowflake(String),
}

/// 统一 Result 类型别名
pub type SchemaResult<T> = Result<T, SchemaError>;
