use crate::context::RequestContext;
use async_trait::async_trait;
use slashbind::command::{Command, CommandData};
use slashbind::request::Request;
use std::future::Future;
use std::marker::PhantomData;

/// 命令处理器
///
/// - `Request`：参数结构，绑定时据此派生 schema 与字段映射；
/// - `invoke`：以 `(上下文, 请求)` 调用；返回的错误由分发层记录，不会影响其他命令。
#[async_trait]
pub trait CommandHandler<S>: Command + Send + Sync + 'static
where
    S: Send + Sync + 'static,
{
    type Request: Request;

    async fn invoke(&self, ctx: RequestContext<S>, req: Self::Request) -> anyhow::Result<()>;
}

/// 以闭包实现的处理器，请求类型由闭包第二个参数推导
pub struct FnHandler<R, F> {
    data: CommandData,
    f: F,
    _request: PhantomData<fn() -> R>,
}

/// 由命令元数据与闭包构造处理器
///
/// ```rust,ignore
/// let greet = handler_fn(CommandData::new("greet", "Greet", "Say hi"),
///     |ctx: RequestContext<Session>, req: Greet| async move { Ok(()) });
/// ```
pub fn handler_fn<S, R, F, Fut>(data: CommandData, f: F) -> FnHandler<R, F>
where
    S: Send + Sync + 'static,
    R: Request,
    F: Fn(RequestContext<S>, R) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = anyhow::Result<()>> + Send + 'static,
{
    FnHandler {
        data,
        f,
        _request: PhantomData,
    }
}

impl<R, F> Command for FnHandler<R, F> {
    fn command_data(&self) -> CommandData {
        self.data.clone()
    }
}

#[async_trait]
impl<S, R, F, Fut> CommandHandler<S> for FnHandler<R, F>
where
    S: Send + Sync + 'static,
    R: Request,
    F: Fn(RequestContext<S>, R) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = anyhow::Result<()>> + Send + 'static,
{
    type Request = R;

    async fn invoke(&self, ctx: RequestContext<S>, req: R) -> anyhow::Result<()> {
        (self.f)(ctx, req).await
    }
}
