//! 事件源（Event Source）
//!
//! 网关/状态库对外提供的最小协议：登记交互事件回调。
//! - `EventSource`：只增不减的回调登记接口；
//! - `InMemoryGateway`：进程内实现，供测试、示例与本地开发使用。
//!
pub mod source;
pub mod source_inmemory;

pub use source::{EventSource, InteractionCallback};
pub use source_inmemory::InMemoryGateway;
