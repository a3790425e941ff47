use ddd_events_macros::domain_event;

#[domain_event]
pub enum NothingHappened {}

fn main() {}
