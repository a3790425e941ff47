use crate::address::Address;
use chrono::Utc;
use ddd_events_macros::domain_event;

/// 客户事件
#[domain_event]
pub enum CustomerEvent {
    CustomerCreated {
        customer_id: String,
        name: String,
    },
    AddressChanged {
        customer_id: String,
        name: String,
        address: Address,
    },
}

impl CustomerEvent {
    pub fn customer_created(customer_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self::CustomerCreated {
            customer_id: customer_id.into(),
            name: name.into(),
            occurred_at: Utc::now(),
        }
    }

    pub fn address_changed(
        customer_id: impl Into<String>,
        name: impl Into<String>,
        address: Address,
    ) -> Self {
        Self::AddressChanged {
            customer_id: customer_id.into(),
            name: name.into(),
            address,
            occurred_at: Utc::now(),
        }
    }

    pub fn customer_id(&self) -> &str {
        match self {
            Self::CustomerCreated { customer_id, .. } | Self::AddressChanged { customer_id, .. } => {
                customer_id
            }
        }
    }
}
