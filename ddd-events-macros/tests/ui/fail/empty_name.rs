use ddd_events_macros::domain_event;

#[domain_event]
pub enum OrderEvent {
    #[event(name = "")]
    Placed { order_id: String },
}

fn main() {}
