use bon::Builder;

/// 单个绑定默认的处理器并发上限
pub const DEFAULT_HANDLER_CONCURRENCY: usize = 64;
/// 单个绑定默认允许的待处理调用上限（排队中与执行中之和）
pub const DEFAULT_MAX_PENDING: usize = 1024;

/// 选项解码失败时的处理策略
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DecodePolicy {
    /// 字段保持零值并记录告警，处理器照常调用
    #[default]
    Lenient,
    /// 拒绝本次调用，处理器不会被调用
    Strict,
}

/// 分发绑定配置
///
/// ```rust
/// use slashbind_dispatch::config::{BinderConfig, DecodePolicy};
///
/// let cfg = BinderConfig::builder()
///     .decode_policy(DecodePolicy::Strict)
///     .handler_concurrency(8)
///     .build();
/// assert_eq!(cfg.decode_policy, DecodePolicy::Strict);
/// ```
#[derive(Debug, Clone, Copy, Builder)]
pub struct BinderConfig {
    #[builder(default)]
    pub decode_policy: DecodePolicy,
    /// 同一命令同时执行的处理器数量上限（至少为 1）
    #[builder(default = DEFAULT_HANDLER_CONCURRENCY)]
    pub handler_concurrency: usize,
    /// 同一命令已提交但尚未结束的调用上限（至少为 1），超出的事件被丢弃
    #[builder(default = DEFAULT_MAX_PENDING)]
    pub max_pending: usize,
    /// 绑定时按远端注册表限制校验 schema（名称、描述长度、选项数、必填顺序）
    #[builder(default)]
    pub registry_limits: bool,
}

impl Default for BinderConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}
