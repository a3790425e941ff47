use chrono::{DateTime, Utc};
use ddd_events::domain_event::DomainEvent;
use ddd_events_macros::domain_event;
use serde::{Deserialize, Serialize};

// 已有派生与显式声明的 occurred_at 字段均被保留
#[domain_event]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
enum InvoiceEvent {
    Issued {
        occurred_at: DateTime<Utc>,
        invoice_id: String,
    },
}

fn main() {
    let at = Utc::now();
    let ev = InvoiceEvent::Issued {
        occurred_at: at,
        invoice_id: "inv-1".into(),
    };
    assert_eq!(ev.occurred_at(), &at);
    assert_eq!(ev.clone(), ev);
}
