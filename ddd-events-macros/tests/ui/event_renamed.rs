use ddd_events::domain_event::DomainEvent;
use ddd_events_macros::domain_event;

#[domain_event]
enum ProductEvent {
    #[event(name = "product.created")]
    Created { product_id: String, price: u64 },
    #[event(name = "product.price_changed")]
    PriceChanged { product_id: String, price: u64 },
    Discontinued { product_id: String },
}

fn main() {
    let ev = ProductEvent::PriceChanged {
        product_id: "p-1".into(),
        price: 20,
        occurred_at: chrono::Utc::now(),
    };
    assert_eq!(ev.event_name(), ProductEvent::PRICE_CHANGED);
    assert_eq!(ProductEvent::CREATED, "product.created");
    assert_eq!(ProductEvent::DISCONTINUED, "Discontinued");
}
