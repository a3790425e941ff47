//! 客户服务（事件发布方）
//!
//! 在状态变更后构造事件并同步通知分发器；处理器的失败原样返回给调用方。
//!
use crate::address::Address;
use crate::event::CustomerEvent;
use ddd_events::error::{DomainError, DomainResult};
use ddd_events::eventing::EventDispatcher;
use std::sync::Arc;
use tracing::info;

pub struct CustomerService {
    dispatcher: Arc<EventDispatcher<CustomerEvent>>,
}

impl CustomerService {
    pub fn new(dispatcher: Arc<EventDispatcher<CustomerEvent>>) -> Self {
        Self { dispatcher }
    }

    pub fn dispatcher(&self) -> &Arc<EventDispatcher<CustomerEvent>> {
        &self.dispatcher
    }

    /// 创建客户并发布 `CustomerCreated`
    pub fn create_customer(&self, customer_id: &str, name: &str) -> DomainResult<CustomerEvent> {
        ensure_present(customer_id, "Id is required")?;
        ensure_present(name, "Name is required")?;

        let event = CustomerEvent::customer_created(customer_id, name);
        self.publish(&event)?;
        Ok(event)
    }

    /// 变更客户地址并发布 `AddressChanged`
    pub fn change_address(
        &self,
        customer_id: &str,
        name: &str,
        address: Address,
    ) -> DomainResult<CustomerEvent> {
        ensure_present(customer_id, "Id is required")?;
        ensure_present(name, "Name is required")?;

        let event = CustomerEvent::address_changed(customer_id, name, address);
        self.publish(&event)?;
        Ok(event)
    }

    fn publish(&self, event: &CustomerEvent) -> DomainResult<()> {
        info!(customer_id = event.customer_id(), "publishing customer event");
        self.dispatcher.notify(event)
    }
}

fn ensure_present(value: &str, reason: &str) -> DomainResult<()> {
    if value.trim().is_empty() {
        return Err(DomainError::invalid_value(reason));
    }
    Ok(())
}
