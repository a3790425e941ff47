use ddd_events_macros::domain_event;

#[domain_event]
pub enum OrderEvent {
    #[event(title = "order.placed")]
    Placed { order_id: String },
}

fn main() {}
