//! Schema 派生（Schema Deriver）
//!
//! 按字段声明顺序生成选项描述列表，并建立“线上名称 → 字段声明”的映射。
//! 任何一个字段不合法即整体失败，不产出部分 schema。
//! 远端注册表的附加限制由 `validate_for_registry` 单独校验，派生本身不做要求。
//!
use crate::error::{SchemaError, SchemaResult};
use crate::kind::OptionKind;
use crate::registry;
use crate::request::{FieldSpec, Request};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

/// 单条命令可声明的最大选项数
pub const MAX_OPTIONS: usize = 25;
/// 选项名称最大长度（字符数）
pub const MAX_NAME_LEN: usize = 32;
/// 选项描述最大长度（字符数）
pub const MAX_DESCRIPTION_LEN: usize = 100;

/// 选项描述：提交给远端命令注册表的 schema 条目
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionDescriptor {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: OptionKind,
    pub description: String,
    pub required: bool,
}

/// 线上选项名称到字段声明的映射（注册期构建，之后只读）
#[derive(Debug, Clone, Default)]
pub struct FieldMapping {
    by_wire: HashMap<String, &'static FieldSpec>,
}

impl FieldMapping {
    pub fn resolve(&self, wire_name: &str) -> Option<&'static FieldSpec> {
        self.by_wire.get(wire_name).copied()
    }

    pub fn len(&self) -> usize {
        self.by_wire.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_wire.is_empty()
    }
}

/// 派生结果
#[derive(Debug, Clone)]
pub struct CommandSchema {
    pub options: Vec<OptionDescriptor>,
    pub mapping: FieldMapping,
}

/// 由请求结构派生 schema
pub fn derive_schema<R: Request>() -> SchemaResult<CommandSchema> {
    derive_fields(R::FIELDS)
}

/// 由字段声明列表派生 schema
///
/// 仅两类致命错误：字段类型未在注册表登记；线上名称（小写）重复。
/// 远端注册表的长度、数量与顺序限制见 [`validate_for_registry`]。
pub fn derive_fields(fields: &'static [FieldSpec]) -> SchemaResult<CommandSchema> {
    let mut options = Vec::with_capacity(fields.len());
    let mut by_wire = HashMap::with_capacity(fields.len());

    for field in fields {
        let entry = registry::lookup(field.kind).ok_or(SchemaError::UnsupportedKind {
            field: field.ident,
            kind: field.kind,
        })?;

        let name = field.ident.to_lowercase();
        if by_wire.insert(name.clone(), field).is_some() {
            return Err(SchemaError::DuplicateOption { name });
        }

        debug!(option = %name, kind = ?field.kind, required = field.required, "derived option");
        options.push(entry.option(name, field.description, field.required));
    }

    Ok(CommandSchema {
        options,
        mapping: FieldMapping { by_wire },
    })
}

/// 按远端命令注册表的限制校验已派生的 schema
///
/// - 选项数不超过 [`MAX_OPTIONS`]；
/// - 名称 1..=[`MAX_NAME_LEN`] 个字符，仅含字母、数字、`-`、`_`；
/// - 描述 1..=[`MAX_DESCRIPTION_LEN`] 个字符；
/// - 必填选项不得出现在可选选项之后。
pub fn validate_for_registry(schema: &CommandSchema) -> SchemaResult<()> {
    let count = schema.options.len();
    if count > MAX_OPTIONS {
        return Err(SchemaError::TooManyOptions {
            count,
            max: MAX_OPTIONS,
        });
    }

    let mut seen_optional = false;
    for option in &schema.options {
        validate_name(&option.name)?;

        let len = option.description.chars().count();
        if len == 0 || len > MAX_DESCRIPTION_LEN {
            return Err(SchemaError::InvalidDescription {
                name: option.name.clone(),
                len,
            });
        }

        if option.required && seen_optional {
            return Err(SchemaError::RequiredAfterOptional {
                name: option.name.clone(),
            });
        }
        seen_optional |= !option.required;
    }
    Ok(())
}

fn validate_name(name: &str) -> SchemaResult<()> {
    let len = name.chars().count();
    let charset_ok = name
        .chars()
        .all(|c| c.is_alphanumeric() || c == '-' || c == '_');

    if len == 0 || len > MAX_NAME_LEN || !charset_ok {
        return Err(SchemaError::InvalidName {
            name: name.to_string(),
        });
    }
    Ok(())
}
