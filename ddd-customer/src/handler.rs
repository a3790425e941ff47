//! 客户事件处理器
//!
//! 全部为日志类副作用，通过 `tracing` 输出；`render` 为纯函数，便于测试。
//!
use crate::event::CustomerEvent;
use ddd_events::domain_event::DomainEvent;
use ddd_events::error::{DomainError, DomainResult};
use ddd_events::eventing::{EventDispatcher, EventHandler};
use std::sync::Arc;
use tracing::{debug, info};

/// 客户创建后的第一条日志
#[derive(Debug, Default)]
pub struct FirstConsoleLogHandler;

impl FirstConsoleLogHandler {
    pub fn render(&self, event: &CustomerEvent) -> String {
        format!("This is the first console.log of event: {}", event.event_name())
    }
}

impl EventHandler<CustomerEvent> for FirstConsoleLogHandler {
    fn handler_name(&self) -> &str {
        "first_console_log"
    }

    fn handle(&self, event: &CustomerEvent) -> DomainResult<()> {
        info!(handler = self.handler_name(), "{}", self.render(event));
        Ok(())
    }
}

/// 客户创建后的第二条日志
#[derive(Debug, Default)]
pub struct SecondConsoleLogHandler;

impl SecondConsoleLogHandler {
    pub fn render(&self, event: &CustomerEvent) -> String {
        format!("This is the second console.log of event: {}", event.event_name())
    }
}

impl EventHandler<CustomerEvent> for SecondConsoleLogHandler {
    fn handler_name(&self) -> &str {
        "second_console_log"
    }

    fn handle(&self, event: &CustomerEvent) -> DomainResult<()> {
        info!(handler = self.handler_name(), "{}", self.render(event));
        Ok(())
    }
}

/// 地址变更日志，只接受 `AddressChanged`
#[derive(Debug, Default)]
pub struct AddressChangedLogHandler;

impl AddressChangedLogHandler {
    pub fn render(&self, event: &CustomerEvent) -> DomainResult<String> {
        match event {
            CustomerEvent::AddressChanged {
                customer_id,
                name,
                address,
                ..
            } => Ok(format!(
                "Customer address: {customer_id}, {name} changed to: {address}"
            )),
            other => Err(DomainError::type_mismatch(
                CustomerEvent::ADDRESS_CHANGED,
                other.event_name(),
            )),
        }
    }
}

impl EventHandler<CustomerEvent> for AddressChangedLogHandler {
    fn handler_name(&self) -> &str {
        "address_changed_log"
    }

    fn handle(&self, event: &CustomerEvent) -> DomainResult<()> {
        let line = self.render(event)?;
        info!(handler = self.handler_name(), customer_id = event.customer_id(), "{line}");
        Ok(())
    }
}

/// 以 JSON 记录完整事件（debug 级别）
#[derive(Debug, Default)]
pub struct JsonAuditLogHandler;

impl JsonAuditLogHandler {
    pub fn render(&self, event: &CustomerEvent) -> DomainResult<String> {
        Ok(serde_json::to_string(event)?)
    }
}

impl EventHandler<CustomerEvent> for JsonAuditLogHandler {
    fn handler_name(&self) -> &str {
        "json_audit_log"
    }

    fn handle(&self, event: &CustomerEvent) -> DomainResult<()> {
        let payload = self.render(event)?;
        debug!(
            handler = self.handler_name(),
            event = event.event_name(),
            occurred_at = %event.occurred_at(),
            %payload,
            "customer event"
        );
        Ok(())
    }
}

/// 注册默认的日志处理器：
/// - `CustomerCreated`：第一条、第二条日志
/// - `AddressChanged`：地址变更日志
/// - 全部事件：JSON 审计日志
pub fn register_default_handlers(dispatcher: &EventDispatcher<CustomerEvent>) {
    dispatcher.register(CustomerEvent::CUSTOMER_CREATED, Arc::new(FirstConsoleLogHandler));
    dispatcher.register(CustomerEvent::CUSTOMER_CREATED, Arc::new(SecondConsoleLogHandler));
    dispatcher.register(CustomerEvent::ADDRESS_CHANGED, Arc::new(AddressChangedLogHandler));

    let audit = Arc::new(JsonAuditLogHandler);
    for name in CustomerEvent::EVENT_NAMES {
        dispatcher.register(*name, audit.clone());
    }
}
