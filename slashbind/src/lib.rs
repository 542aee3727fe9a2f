//! 斜杠命令参数绑定基础库（slashbind）
//!
//! 将命令参数声明为普通结构体，由框架完成：
//! - 派生远端命令的参数 schema（`schema`）；
//! - 把入站交互事件中的松散选项还原为强类型请求（`request`）。
//!
//! 组成：
//! - `kind` / `registry`：受支持的选项类型及其构造器、解码器；
//! - `id`：用户、频道、角色三类标识符；
//! - `interaction`：入站交互事件的线上模型；
//! - `command`：命令注册元数据。
//!
//! 分发（事件订阅、处理器调用）见 `slashbind-dispatch`。
//!
pub mod command;
pub mod error;
pub mod id;
pub mod interaction;
pub mod kind;
pub mod registry;
pub mod request;
pub mod schema;

pub use command::{Command, CommandData, CommandRegistration};
pub use request::Request;
pub use slashbind_macros::{Command, Request, snowflake_id};

// 允许在本 crate 内部通过 ::slashbind 进行自引用，
// 以便过程宏在本 crate 内展开时也能解析到 ::slashbind 路径。
extern crate self as slashbind;
