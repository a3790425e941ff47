use ddd_events::domain_event::DomainEvent;
use ddd_events_macros::domain_event;

#[domain_event]
pub enum OrderEvent {
    Placed { order_id: String, total: u64 },
    Cancelled { order_id: String },
}

fn main() {
    let ev = OrderEvent::Placed {
        order_id: "o-1".into(),
        total: 30,
        occurred_at: chrono::Utc::now(),
    };
    assert_eq!(ev.event_name(), "Placed");
    assert_eq!(OrderEvent::PLACED, "Placed");
    assert_eq!(OrderEvent::CANCELLED, "Cancelled");
    assert_eq!(OrderEvent::EVENT_NAMES, &["Placed", "Cancelled"]);
}
