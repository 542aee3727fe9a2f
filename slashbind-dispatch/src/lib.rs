//! 斜杠命令分发层（slashbind-dispatch）
//!
//! 将命令处理器绑定到事件源：绑定时派生 schema 并缓存字段映射，
//! 运行时把入站交互还原为强类型请求，再在独立任务中调用处理器。
//!
pub mod binder;
pub mod config;
pub mod context;
pub mod error;
pub mod gateway;
pub mod handler;

pub use binder::{Binder, Binding, BindingStats};
pub use config::{BinderConfig, DecodePolicy};
pub use context::RequestContext;
pub use error::DispatchError;
pub use gateway::{EventSource, InMemoryGateway};
pub use handler::{CommandHandler, FnHandler, handler_fn};
