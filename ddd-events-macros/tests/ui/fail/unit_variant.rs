use ddd_events_macros::domain_event;

#[domain_event]
pub enum HeartbeatEvent {
    Ping,
}

fn main() {}
