//! 类型注册表（Type Registry）
//!
//! 进程级只读表：登记受支持的选项类型，及其 schema 选项构造器与线上值解码器。
//! 未登记的类型在派生 schema 时视为配置错误。
//!
use crate::error::DecodeError;
use crate::interaction::OptionValue;
use crate::kind::{Decoded, OptionKind};
use crate::schema::OptionDescriptor;

type Decoder = fn(&OptionValue) -> Result<Decoded, DecodeError>;

/// 注册表条目
#[derive(Debug)]
pub struct KindEntry {
    kind: OptionKind,
    decoder: Decoder,
}

impl KindEntry {
    pub fn kind(&self) -> OptionKind {
        self.kind
    }

    /// 构造带本类型标记的选项描述
    pub fn option(
        &self,
        name: impl Into<String>,
        description: impl Into<String>,
        required: bool,
    ) -> OptionDescriptor {
        OptionDescriptor {
            name: name.into(),
            kind: self.kind,
            description: description.into(),
            required,
        }
    }

    /// 调用与本类型匹配的访问器解码线上值
    pub fn decode(&self, value: &OptionValue) -> Result<Decoded, DecodeError> {
        (self.decoder)(value)
    }
}

static REGISTRY: [KindEntry; 6] = [
    KindEntry {
        kind: OptionKind::String,
        decoder: decode_text,
    },
    KindEntry {
        kind: OptionKind::Integer,
        decoder: decode_integer,
    },
    KindEntry {
        kind: OptionKind::Boolean,
        decoder: decode_boolean,
    },
    KindEntry {
        kind: OptionKind::User,
        decoder: decode_user,
    },
    KindEntry {
        kind: OptionKind::Channel,
        decoder: decode_channel,
    },
    KindEntry {
        kind: OptionKind::Role,
        decoder: decode_role,
    },
];

/// 查找类型对应的注册表条目
pub fn lookup(kind: OptionKind) -> Option<&'static KindEntry> {
    REGISTRY.iter().find(|e| e.kind == kind)
}

/// 受支持的全部类型（按注册顺序）
pub fn supported() -> impl Iterator<Item = OptionKind> {
    REGISTRY.iter().map(|e| e.kind)
}

fn decode_text(value: &OptionValue) -> Result<Decoded, DecodeError> {
    value.as_text().map(|s| Decoded::Text(s.to_owned()))
}

fn decode_integer(value: &OptionValue) -> Result<Decoded, DecodeError> {
    value.as_integer().map(Decoded::Integer)
}

fn decode_boolean(value: &OptionValue) -> Result<Decoded, DecodeError> {
    value.as_boolean().map(Decoded::Boolean)
}

fn decode_user(value: &OptionValue) -> Result<Decoded, DecodeError> {
    value.as_identifier(OptionKind::User).map(Decoded::Identifier)
}

fn decode_channel(value: &OptionValue) -> Result<Decoded, DecodeError> {
    value.as_identifier(OptionKind::Channel).map(Decoded::Identifier)
}

fn decode_role(value: &OptionValue) -> Result<Decoded, DecodeError> {
    value.as_identifier(OptionKind::Role).map(Decoded::Identifier)
}
