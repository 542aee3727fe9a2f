//! 分发绑定（Dispatch Binder）
//!
//! 为每个命令处理器安装一个交互事件回调：
//! 1. 非命令交互、或命令名不匹配的事件直接忽略；
//! 2. 按绑定时缓存的字段映射组装新的请求实例（未知选项丢弃）；
//! 3. 解码失败按 `DecodePolicy` 处理；
//! 4. 占用一个待处理名额后，在独立的 tokio 任务中调用处理器；
//!    名额耗尽时丢弃该事件；错误与 panic 仅记录，不外溢。
//!
use crate::config::{BinderConfig, DecodePolicy};
use crate::context::RequestContext;
use crate::error::DispatchError;
use crate::gateway::EventSource;
use crate::handler::CommandHandler;
use dashmap::DashMap;
use futures_util::FutureExt;
use slashbind::command::CommandRegistration;
use slashbind::interaction::InteractionEvent;
use slashbind::request::{Assembled, assemble};
use slashbind::schema::{FieldMapping, derive_schema, validate_for_registry};
use std::any::Any;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::runtime::Handle;
use tokio::sync::{OwnedSemaphorePermit, Semaphore};
use tracing::{debug, error, info, trace, warn};

/// 绑定器：持有会话值与配置，负责把处理器安装到事件源
pub struct Binder<S> {
    session: S,
    config: BinderConfig,
    // 命令名 -> (注册条目, 绑定次数)
    bound: DashMap<String, (CommandRegistration, usize)>,
}

impl<S> Binder<S>
where
    S: Clone + Send + Sync + 'static,
{
    pub fn new(session: S) -> Self {
        Self::with_config(session, BinderConfig::default())
    }

    pub fn with_config(session: S, config: BinderConfig) -> Self {
        Self {
            session,
            config,
            bound: DashMap::new(),
        }
    }

    pub fn config(&self) -> &BinderConfig {
        &self.config
    }

    /// 绑定命令处理器
    ///
    /// - schema 只在此处派生一次，失败即返回错误（应中止启动）；
    /// - 必须在 tokio 运行时内调用，处理器将在该运行时上执行；
    /// - 同一命令重复绑定不会去重，每次都会安装新的回调。
    pub fn bind<E, H>(&self, source: &E, handler: H) -> Result<Binding, DispatchError>
    where
        E: EventSource + ?Sized,
        H: CommandHandler<S>,
    {
        let data = handler.command_data();
        let schema_error = |source| DispatchError::Schema {
            command: data.name.clone(),
            source,
        };
        let schema = derive_schema::<H::Request>().map_err(schema_error)?;
        if self.config.registry_limits {
            validate_for_registry(&schema).map_err(schema_error)?;
        }
        let runtime =
            Handle::try_current().map_err(|_| DispatchError::NoRuntime(data.name.clone()))?;

        let registration = CommandRegistration::new(data.clone(), &schema);
        let stats = Arc::new(StatsCounters::default());

        let bound = Arc::new(BoundCommand {
            name: data.name.clone(),
            mapping: schema.mapping,
            handler,
            session: self.session.clone(),
            policy: self.config.decode_policy,
            permits: Arc::new(Semaphore::new(self.config.handler_concurrency.max(1))),
            pending: Arc::new(Semaphore::new(self.config.max_pending.max(1))),
            stats: stats.clone(),
            runtime,
        });

        source.add_handler(Arc::new(move |event: &InteractionEvent| {
            BoundCommand::on_event(&bound, event);
        }));

        let mut entry = self
            .bound
            .entry(data.name.clone())
            .or_insert_with(|| (registration.clone(), 0));
        entry.1 += 1;
        if entry.1 > 1 {
            warn!(command = %data.name, times = entry.1, "command bound more than once");
        }
        drop(entry);

        info!(
            command = %data.name,
            options = registration.options.len(),
            "command bound"
        );

        Ok(Binding {
            registration,
            stats,
        })
    }

    /// 已绑定命令的注册条目（按名称排序）
    pub fn registrations(&self) -> Vec<CommandRegistration> {
        let mut out: Vec<_> = self.bound.iter().map(|e| e.value().0.clone()).collect();
        out.sort_by(|a, b| a.data.name.cmp(&b.data.name));
        out
    }
}

/// 一次绑定的结果
#[derive(Debug, Clone)]
pub struct Binding {
    registration: CommandRegistration,
    stats: Arc<StatsCounters>,
}

impl Binding {
    pub fn registration(&self) -> &CommandRegistration {
        &self.registration
    }

    pub fn stats(&self) -> BindingStats {
        self.stats.snapshot()
    }
}

/// 绑定计数快照
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BindingStats {
    /// 已提交执行的调用数
    pub dispatched: u64,
    /// 因严格解码策略被拒绝的调用数
    pub rejected: u64,
    /// 待处理名额耗尽而被丢弃的调用数
    pub overflowed: u64,
    /// 处理器成功返回的调用数
    pub completed: u64,
    /// 处理器返回错误或 panic 的调用数
    pub failed: u64,
}

#[derive(Debug, Default)]
struct StatsCounters {
    dispatched: AtomicU64,
    rejected: AtomicU64,
    overflowed: AtomicU64,
    completed: AtomicU64,
    failed: AtomicU64,
}

impl StatsCounters {
    fn snapshot(&self) -> BindingStats {
        BindingStats {
            dispatched: self.dispatched.load(Ordering::Acquire),
            rejected: self.rejected.load(Ordering::Acquire),
            overflowed: self.overflowed.load(Ordering::Acquire),
            completed: self.completed.load(Ordering::Acquire),
            failed: self.failed.load(Ordering::Acquire),
        }
    }
}

struct BoundCommand<S, H> {
    name: String,
    mapping: FieldMapping,
    handler: H,
    session: S,
    policy: DecodePolicy,
    permits: Arc<Semaphore>,
    pending: Arc<Semaphore>,
    stats: Arc<StatsCounters>,
    runtime: Handle,
}

impl<S, H> BoundCommand<S, H>
where
    S: Clone + Send + Sync + 'static,
    H: CommandHandler<S>,
{
    fn on_event(this: &Arc<Self>, event: &InteractionEvent) {
        let Some(cmd) = event.as_command() else {
            trace!(interaction_id = event.id, "ignoring non-command interaction");
            return;
        };
        if cmd.name != this.name {
            return;
        }

        let Assembled { request, failures } = assemble::<H::Request>(&this.mapping, &cmd.options);

        for failure in &failures {
            warn!(
                command = %this.name,
                interaction_id = event.id,
                field = failure.field,
                option = %failure.option,
                error = %failure.error,
                "option decode failed"
            );
        }
        if !failures.is_empty() && this.policy == DecodePolicy::Strict {
            this.stats.rejected.fetch_add(1, Ordering::AcqRel);
            return;
        }

        // 名额随任务结束归还，排队任务数因此有界
        let Ok(slot) = Arc::clone(&this.pending).try_acquire_owned() else {
            this.stats.overflowed.fetch_add(1, Ordering::AcqRel);
            warn!(command = %this.name, interaction_id = event.id, "too many pending invocations, dropping");
            return;
        };
        this.stats.dispatched.fetch_add(1, Ordering::AcqRel);

        let ctx = RequestContext {
            session: this.session.clone(),
            interaction_id: event.id,
            command: this.name.clone(),
        };
        let bound = Arc::clone(this);
        this.runtime.spawn(async move { bound.run(ctx, request, slot).await });
    }

    async fn run(&self, ctx: RequestContext<S>, request: H::Request, slot: OwnedSemaphorePermit) {
        // 信号量从不关闭，acquire 只会在关闭时失败
        let Ok(_permit) = self.permits.acquire().await else {
            return;
        };

        let interaction_id = ctx.interaction_id;
        let outcome = AssertUnwindSafe(self.handler.invoke(ctx, request))
            .catch_unwind()
            .await;
        // 先归还名额再计数：计数可见时名额已可用
        drop(slot);

        match outcome {
            Ok(Ok(())) => {
                self.stats.completed.fetch_add(1, Ordering::AcqRel);
                debug!(command = %self.name, interaction_id, "command handled");
            }
            Ok(Err(err)) => {
                self.stats.failed.fetch_add(1, Ordering::AcqRel);
                error!(command = %self.name, interaction_id, error = %err, "command handler failed");
            }
            Err(panic) => {
                self.stats.failed.fetch_add(1, Ordering::AcqRel);
                error!(
                    command = %self.name,
                    interaction_id,
                    panic = panic_message(panic.as_ref()),
                    "command handler panicked"
                );
            }
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(s) = payload.downcast_ref::<&'static str>() {
        s
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.as_str()
    } else {
        "non-string panic payload"
    }
}
