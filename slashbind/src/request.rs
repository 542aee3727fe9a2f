//! 请求结构（Request Shape）
//!
//! 命令处理器声明的参数结构体。通常通过 `#[derive(Request)]` 生成实现：
//! ```rust
//! use slashbind::Request;
//! use slashbind::id::UserId;
//!
//! #[derive(Request, Default)]
//! struct Greet {
//!     #[option(desc = "msg")]
//!     greeting: String,
//!     #[option(desc = "who", optional)]
//!     target: UserId,
//! }
//! ```
//!
use crate::error::DecodeError;
use crate::interaction::{InboundOption, OptionValue};
use crate::kind::OptionKind;
use crate::schema::FieldMapping;
use tracing::debug;

/// 字段声明（按声明顺序）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// 字段标识符（原样，不做大小写处理）
    pub ident: &'static str,
    pub kind: OptionKind,
    pub description: &'static str,
    pub required: bool,
}

/// 请求结构：描述字段，并按字段标识符写入解码后的值
///
/// `Default` 即“零值”实例，未出现的选项保持零值。
pub trait Request: Default + Send + 'static {
    const FIELDS: &'static [FieldSpec];

    /// 将线上值解码并写入 `ident` 对应字段；解码失败时字段保持原值
    fn assign(&mut self, ident: &str, value: &OptionValue) -> Result<(), DecodeError>;
}

/// 单个字段的解码失败记录
#[derive(Debug, Clone, PartialEq)]
pub struct FieldFailure {
    pub field: &'static str,
    pub option: String,
    pub error: DecodeError,
}

/// 组装结果：请求实例与解码失败列表
#[derive(Debug)]
pub struct Assembled<R> {
    pub request: R,
    pub failures: Vec<FieldFailure>,
}

impl<R> Assembled<R> {
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// 由入站选项组装请求实例
///
/// - 名称无法经 `mapping` 解析的选项直接丢弃；
/// - 解码失败的字段保持零值，并记录到 `failures`。
pub fn assemble<R: Request>(mapping: &FieldMapping, options: &[InboundOption]) -> Assembled<R> {
    let mut request = R::default();
    let mut failures = Vec::new();

    for opt in options {
        let Some(field) = mapping.resolve(&opt.name) else {
            debug!(option = %opt.name, "dropping unknown option");
            continue;
        };

        if let Err(error) = request.assign(field.ident, &opt.value) {
            failures.push(FieldFailure {
                field: field.ident,
                option: opt.name.clone(),
                error,
            });
        }
    }

    Assembled { request, failures }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::id::UserId;
    use crate::kind::OptionType;
    use crate::schema::derive_schema;

    // 手写实现，与 derive 生成的代码等价
    #[derive(Debug, Default, PartialEq)]
    struct Greet {
        greeting: String,
        target: UserId,
    }

    impl Request for Greet {
        const FIELDS: &'static [FieldSpec] = &[
            FieldSpec {
                ident: "greeting",
                kind: <String as OptionType>::KIND,
                description: "msg",
                required: <String as OptionType>::REQUIRED,
            },
            FieldSpec {
                ident: "target",
                kind: <UserId as OptionType>::KIND,
                description: "who",
                required: false,
            },
        ];

        fn assign(&mut self, ident: &str, value: &OptionValue) -> Result<(), DecodeError> {
            match ident {
                "greeting" => self.greeting = <String as OptionType>::decode(value)?,
                "target" => self.target = <UserId as OptionType>::decode(value)?,
                other => return Err(DecodeError::UnknownField(other.to_string())),
            }
            Ok(())
        }
    }

    fn user(id: u64) -> OptionValue {
        OptionValue::Snowflake { kind: OptionKind::User, id }
    }

    #[test]
    fn populates_every_recognised_option() {
        let schema = derive_schema::<Greet>().unwrap();
        let options = vec![
            InboundOption::new("greeting", OptionValue::Text("hi".into())),
            InboundOption::new("target", user(42)),
        ];

        let out = assemble::<Greet>(&schema.mapping, &options);
        assert!(out.is_clean());
        assert_eq!(
            out.request,
            Greet {
                greeting: "hi".into(),
                target: UserId(42),
            }
        );
    }

    #[test]
    fn unknown_option_is_dropped_without_touching_other_fields() {
        let schema = derive_schema::<Greet>().unwrap();
        let options = vec![
            InboundOption::new("greeting", OptionValue::Text("hi".into())),
            InboundOption::new("bogus", OptionValue::Integer(99)),
        ];

        let out = assemble::<Greet>(&schema.mapping, &options);
        assert!(out.is_clean());
        assert_eq!(out.request.greeting, "hi");
        assert_eq!(out.request.target, UserId::default());
    }

    #[test]
    fn no_options_yields_zero_value() {
        let schema = derive_schema::<Greet>().unwrap();
        let out = assemble::<Greet>(&schema.mapping, &[]);
        assert!(out.is_clean());
        assert_eq!(out.request, Greet::default());
    }

    #[test]
    fn decode_failure_keeps_zero_value_and_is_reported() {
        let schema = derive_schema::<Greet>().unwrap();
        let options = vec![
            InboundOption::new("greeting", OptionValue::Integer(1)),
            InboundOption::new("target", user(7)),
        ];

        let out = assemble::<Greet>(&schema.mapping, &options);
        assert_eq!(out.request.greeting, "");
        assert_eq!(out.request.target, UserId(7));
        assert_eq!(out.failures.len(), 1);
        assert_eq!(out.failures[0].field, "greeting");
        assert_eq!(
            out.failures[0].error,
            DecodeError::KindMismatch {
                expected: OptionKind::String,
                found: OptionKind::Integer,
            }
        );
    }
}
