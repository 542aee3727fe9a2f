/// 请求上下文（Request Context）
///
/// 处理器的第一个参数，承载一次命令调用的横切信息：
/// - `session`：绑定时提供的会话/客户端句柄（通常为 `Arc<...>` 或其他廉价可克隆值）；
/// - `interaction_id`：入站交互 ID，用于回复与追踪；
/// - `command`：被调用的命令名称。
#[derive(Clone, Debug)]
pub struct RequestContext<S> {
    pub session: S,
    pub interaction_id: u64,
    pub command: String,
}
