use anyhow::{Context, Result};
use ddd_customer::handler::register_default_handlers;
use ddd_customer::{Address, CustomerEvent, CustomerService};
use ddd_events::eventing::{DispatcherConfig, EventDispatcher, FailurePolicy};
use std::env;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

/// 演示配置（来自环境变量）
#[derive(Debug)]
struct DemoConfig {
    /// `EVENT_FAILURE_POLICY`：`fail_fast`（默认）或 `continue`
    failure_policy: FailurePolicy,
}

impl DemoConfig {
    fn from_env() -> Result<Self> {
        Self::from_failure_policy(env::var("EVENT_FAILURE_POLICY").ok())
    }

    fn from_failure_policy(raw: Option<String>) -> Result<Self> {
        let failure_policy = match raw {
            Some(raw) => raw
                .parse::<FailurePolicy>()
                .with_context(|| format!("invalid EVENT_FAILURE_POLICY: {raw}"))?,
            None => FailurePolicy::default(),
        };
        Ok(Self { failure_policy })
    }
}

/// `RUST_LOG` 覆盖默认的 `info` 级别
fn log_filter(rust_log: Option<String>) -> EnvFilter {
    rust_log
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new("info"))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(env::var("RUST_LOG").ok()))
        .init();

    let config = DemoConfig::from_env()?;
    info!(?config, "demo starting");

    let dispatcher = Arc::new(EventDispatcher::<CustomerEvent>::with_config(
        DispatcherConfig::builder()
            .failure_policy(config.failure_policy)
            .build(),
    ));
    register_default_handlers(&dispatcher);
    info!(events = ?dispatcher.registered_events(), "handlers registered");

    let service = CustomerService::new(dispatcher.clone());
    let customer_id = Uuid::new_v4().to_string();

    service.create_customer(&customer_id, "Customer 1")?;
    service.change_address(
        &customer_id,
        "Customer 1",
        Address::new("Street 1", 1, "13330-250", "São Paulo")?,
    )?;

    dispatcher.unregister_all();
    info!(
        registered = dispatcher.registered_events().len(),
        "all handlers unregistered"
    );

    Ok(())
}
