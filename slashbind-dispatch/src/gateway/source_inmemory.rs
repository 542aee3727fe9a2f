//! 内存版事件源（InMemoryGateway）
//!
//! - `publish`：按登记顺序同步调用全部回调；
//! - `publish_json`：先解析网关 JSON 负载再发布。
//!
//! 发布前会复制一份回调列表，回调内部可以安全地继续登记新回调。

use super::{EventSource, InteractionCallback};
use crate::error::DispatchError;
use slashbind::interaction::InteractionEvent;
use std::sync::{PoisonError, RwLock};
use tracing::trace;

#[derive(Default)]
pub struct InMemoryGateway {
    handlers: RwLock<Vec<InteractionCallback>>,
}

impl InMemoryGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn publish(&self, event: &InteractionEvent) {
        let handlers = self
            .handlers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();

        trace!(interaction_id = event.id, handlers = handlers.len(), "publishing interaction");
        for handler in &handlers {
            handler(event);
        }
    }

    pub fn publish_json(&self, payload: &str) -> Result<(), DispatchError> {
        let event = InteractionEvent::from_json(payload)?;
        self.publish(&event);
        Ok(())
    }

    /// 已登记的回调数量
    pub fn handler_count(&self) -> usize {
        self.handlers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

impl EventSource for InMemoryGateway {
    fn add_handler(&self, callback: InteractionCallback) {
        self.handlers
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(callback);
    }
}
