use ddd_events_macros::domain_event;

#[domain_event]
pub enum OrderEvent {
    Placed { order_id: String },
    #[event(name = "Placed")]
    Replaced { order_id: String },
}

fn main() {}
