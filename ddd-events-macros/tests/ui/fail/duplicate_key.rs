use ddd_events_macros::domain_event;

#[domain_event]
pub enum OrderEvent {
    #[event(name = "order.placed", name = "order.created")]
    Placed { order_id: String },
}

fn main() {}
