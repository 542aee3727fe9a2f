use slashbind::interaction::InteractionEvent;
use std::sync::Arc;

/// 交互事件回调；可能被并发、重入调用
pub type InteractionCallback = Arc<dyn Fn(&InteractionEvent) + Send + Sync>;

/// 事件源：登记交互事件回调（无注销）
pub trait EventSource: Send + Sync {
    fn add_handler(&self, callback: InteractionCallback);
}
