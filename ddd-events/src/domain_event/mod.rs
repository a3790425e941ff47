//! 领域事件（Domain Event）
//!
//! 定义事件载荷需要实现的最小接口（`DomainEvent`）。同一限界上下文中
//! 形态各异的事件以枚举表达，载荷按变体静态类型化，分发器只关心名称。

mod domain_event_trait;

pub use domain_event_trait::DomainEvent;
