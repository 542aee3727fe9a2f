use async_trait::async_trait;
use slashbind::command::CommandData;
use slashbind::id::{RoleId, UserId};
use slashbind::{Command, Request};
use slashbind_dispatch::{
    Binder, BinderConfig, CommandHandler, InMemoryGateway, RequestContext, handler_fn,
};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// 演示用会话：真实场景中通常是网关客户端句柄
#[derive(Debug)]
struct Session {
    bot_name: String,
}

#[derive(Request, Default, Debug)]
struct Whois {
    #[option(desc = "member to look up", optional)]
    name: UserId,
    #[option(desc = "role to check", optional)]
    role: RoleId,
}

#[derive(Command)]
#[command(name = "whois", human_name = "Who is", description = "Show a member and a role")]
struct WhoisHandler;

#[async_trait]
impl CommandHandler<Arc<Session>> for WhoisHandler {
    type Request = Whois;

    async fn invoke(&self, ctx: RequestContext<Arc<Session>>, req: Whois) -> anyhow::Result<()> {
        info!(
            bot = %ctx.session.bot_name,
            interaction_id = ctx.interaction_id,
            user = %req.name,
            role = %req.role,
            "whois invoked"
        );
        Ok(())
    }
}

#[derive(Request, Default, Debug)]
struct Echo {
    #[option(desc = "text to repeat")]
    text: String,
    #[option(desc = "how many times", optional)]
    times: i64,
    #[option(desc = "shout it", optional)]
    loud: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let gateway = InMemoryGateway::new();
    // 真实注册前按远端限制校验 schema
    let config = BinderConfig::builder().registry_limits(true).build();
    let binder = Binder::with_config(
        Arc::new(Session {
            bot_name: "slashbind-demo".to_string(),
        }),
        config,
    );

    binder.bind(&gateway, WhoisHandler)?;
    binder.bind(
        &gateway,
        handler_fn(
            CommandData::new("echo", "Echo", "Repeat some text"),
            |_ctx: RequestContext<Arc<Session>>, req: Echo| async move {
                let mut line = req.text.repeat(req.times.clamp(1, 5) as usize);
                if req.loud {
                    line = line.to_uppercase();
                }
                info!(%line, "echo");
                anyhow::Ok(())
            },
        ),
    )?;

    // 注册负载：交给远端命令注册接口
    println!(
        "{}",
        serde_json::to_string_pretty(&binder.registrations())?
    );

    gateway.publish_json(
        r#"{"id": "1001", "type": 2, "data": {"name": "whois", "options": [
            {"name": "name", "type": 6, "value": "80351110224678912"},
            {"name": "role", "type": 8, "value": "41771983423143936"}
        ]}}"#,
    )?;
    gateway.publish_json(
        r#"{"id": "1002", "type": 2, "data": {"name": "echo", "options": [
            {"name": "text", "type": 3, "value": "hi "},
            {"name": "times", "type": 4, "value": 3},
            {"name": "loud", "type": 5, "value": true}
        ]}}"#,
    )?;

    // 处理器在后台任务中运行
    tokio::time::sleep(Duration::from_millis(100)).await;
    Ok(())
}
