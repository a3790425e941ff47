use chrono::Utc;
use ddd_events::domain_event::DomainEvent;
use ddd_events::error::{DomainError, DomainResult};
use ddd_events::eventing::{
    DispatcherConfig, EventDispatcher, EventHandler, FailurePolicy, handler_fn, is_same_handler,
};
use ddd_events_macros::domain_event;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tokio::task::JoinSet;

#[domain_event]
enum MemberEvent {
    CustomerCreated {
        customer_id: String,
        name: String,
    },
    AddressChanged {
        customer_id: String,
        street: String,
        city: String,
    },
}

fn created(id: &str) -> MemberEvent {
    MemberEvent::CustomerCreated {
        customer_id: id.to_string(),
        name: format!("Customer {id}"),
        occurred_at: Utc::now(),
    }
}

fn address_changed(id: &str) -> MemberEvent {
    MemberEvent::AddressChanged {
        customer_id: id.to_string(),
        street: "Street 1".into(),
        city: "City 1".into(),
        occurred_at: Utc::now(),
    }
}

#[derive(Default)]
struct CountingHandler {
    seen: Mutex<Vec<&'static str>>,
}

impl CountingHandler {
    fn calls(&self) -> usize {
        self.seen.lock().unwrap().len()
    }

    fn calls_for(&self, name: &str) -> usize {
        self.seen.lock().unwrap().iter().filter(|n| **n == name).count()
    }
}

impl EventHandler<MemberEvent> for CountingHandler {
    fn handle(&self, event: &MemberEvent) -> DomainResult<()> {
        self.seen.lock().unwrap().push(event.event_name());
        Ok(())
    }
}

#[test]
fn customer_workflow_end_to_end() {
    let dispatcher = EventDispatcher::<MemberEvent>::new();
    let created_1 = Arc::new(CountingHandler::default());
    let created_2 = Arc::new(CountingHandler::default());
    let address = Arc::new(CountingHandler::default());

    dispatcher.register(MemberEvent::CUSTOMER_CREATED, created_1.clone());
    dispatcher.register(MemberEvent::CUSTOMER_CREATED, created_2.clone());
    dispatcher.register(MemberEvent::ADDRESS_CHANGED, address.clone());

    let created_handlers = dispatcher.event_handlers("CustomerCreated").unwrap();
    assert_eq!(created_handlers.len(), 2);
    assert!(is_same_handler(&created_handlers[0], &created_1));
    assert!(is_same_handler(&created_handlers[1], &created_2));
    assert_eq!(dispatcher.handler_count("AddressChanged"), Some(1));
    for name in MemberEvent::EVENT_NAMES {
        assert!(dispatcher.is_registered(name));
    }

    dispatcher.notify(&created("c-1")).unwrap();
    dispatcher.notify(&address_changed("c-1")).unwrap();

    assert_eq!(created_1.calls(), 1);
    assert_eq!(created_2.calls(), 1);
    assert_eq!(address.calls(), 1);
    assert_eq!(address.calls_for("CustomerCreated"), 0);
    assert_eq!(address.calls_for("AddressChanged"), 1);
}

#[test]
fn unregister_then_unregister_all_lifecycle() {
    let dispatcher = EventDispatcher::<MemberEvent>::new();
    let created_1 = Arc::new(CountingHandler::default());
    let created_2 = Arc::new(CountingHandler::default());
    let address = Arc::new(CountingHandler::default());

    dispatcher.register("CustomerCreated", created_1.clone());
    dispatcher.register("CustomerCreated", created_2.clone());
    dispatcher.register("AddressChanged", address.clone());

    assert!(dispatcher.unregister("CustomerCreated", &created_1));
    assert!(dispatcher.unregister("CustomerCreated", &created_2));
    assert!(dispatcher.unregister("AddressChanged", &address));

    // 注销后名称仍存在，只是列表为空
    assert_eq!(dispatcher.handler_count("CustomerCreated"), Some(0));
    assert_eq!(dispatcher.handler_count("AddressChanged"), Some(0));

    dispatcher.register("CustomerCreated", created_1.clone());
    dispatcher.unregister_all();

    assert!(dispatcher.event_handlers("CustomerCreated").is_none());
    assert!(dispatcher.event_handlers("AddressChanged").is_none());

    dispatcher.notify(&created("c-2")).unwrap();
    assert_eq!(created_1.calls(), 0);
}

#[test]
fn failing_handler_error_reaches_publisher() {
    let dispatcher = EventDispatcher::<MemberEvent>::new();
    let after = Arc::new(CountingHandler::default());

    dispatcher.register(
        "AddressChanged",
        handler_fn("geocoder", |event: &MemberEvent| match event {
            MemberEvent::AddressChanged { city, .. } if city.is_empty() => {
                Err(DomainError::event_handler("geocoder", "city is empty"))
            }
            _ => Ok(()),
        }),
    );
    dispatcher.register("AddressChanged", after.clone());

    dispatcher.notify(&address_changed("c-3")).unwrap();
    assert_eq!(after.calls(), 1);

    let broken = MemberEvent::AddressChanged {
        customer_id: "c-3".into(),
        street: "Street 1".into(),
        city: String::new(),
        occurred_at: Utc::now(),
    };
    let err = dispatcher.notify(&broken).unwrap_err();
    assert_eq!(
        err.to_string(),
        "event handler error: handler=geocoder, reason=city is empty"
    );
    assert_eq!(after.calls(), 1);
}

#[test]
fn continue_policy_reaches_every_handler() {
    let dispatcher = EventDispatcher::<MemberEvent>::with_config(DispatcherConfig {
        failure_policy: FailurePolicy::Continue,
    });
    let after = Arc::new(CountingHandler::default());

    dispatcher.register(
        "CustomerCreated",
        handler_fn("mailer", |_event: &MemberEvent| {
            Err(DomainError::event_handler("mailer", "smtp down"))
        }),
    );
    dispatcher.register("CustomerCreated", after.clone());

    let err = dispatcher.notify(&created("c-4")).unwrap_err();
    assert!(matches!(err, DomainError::EventHandler { ref handler, .. } if handler == "mailer"));
    assert_eq!(after.calls(), 1);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_register_then_notify_once_each() {
    const N: usize = 64;

    let dispatcher = Arc::new(EventDispatcher::<MemberEvent>::new());
    let handlers: Vec<Arc<CountingHandler>> =
        (0..N).map(|_| Arc::new(CountingHandler::default())).collect();

    let mut set = JoinSet::new();
    for h in &handlers {
        let dispatcher = dispatcher.clone();
        let h = h.clone();
        set.spawn(async move { dispatcher.register("CustomerCreated", h) });
    }
    while let Some(res) = set.join_next().await {
        res.unwrap();
    }

    assert_eq!(dispatcher.handler_count("CustomerCreated"), Some(N));

    dispatcher.notify(&created("c-5")).unwrap();

    for h in &handlers {
        assert_eq!(h.calls(), 1);
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_notify_shares_one_registry() {
    let dispatcher = Arc::new(EventDispatcher::<MemberEvent>::new());
    let counter = Arc::new(AtomicUsize::new(0));
    {
        let counter = counter.clone();
        dispatcher.register(
            "CustomerCreated",
            handler_fn("counter", move |_event: &MemberEvent| {
                counter.fetch_add(1, Ordering::SeqCst);
                Ok(())
            }),
        );
    }

    let mut set = JoinSet::new();
    for i in 0..100 {
        let dispatcher = dispatcher.clone();
        set.spawn(async move { dispatcher.notify(&created(&format!("c-{i}"))) });
    }
    while let Some(res) = set.join_next().await {
        res.unwrap().unwrap();
    }

    assert_eq!(counter.load(Ordering::SeqCst), 100);
}
