//! 事件处理器（EventHandler）
//!
//! 定义消费某类事件的同步处理逻辑与元信息（名称）。
//!
use crate::domain_event::DomainEvent;
use crate::error::DomainResult;
use std::marker::PhantomData;
use std::sync::Arc;

/// 事件处理器：处理某一类型的事件
pub trait EventHandler<E>: Send + Sync
where
    E: DomainEvent,
{
    /// 处理器名称（用于日志与错误报告），默认取类型名
    fn handler_name(&self) -> &str {
        std::any::type_name::<Self>()
    }

    /// 处理事件
    fn handle(&self, event: &E) -> DomainResult<()>;
}

/// 分发器中保存的处理器引用
pub type SharedEventHandler<E> = Arc<dyn EventHandler<E>>;

/// 判断两个处理器引用是否指向同一实例
///
/// 以共享分配的地址为准，而非值相等：同一类型的两个实例互不相同。
pub fn is_same_handler<E, H>(registered: &SharedEventHandler<E>, candidate: &Arc<H>) -> bool
where
    E: DomainEvent,
    H: EventHandler<E> + ?Sized,
{
    std::ptr::addr_eq(Arc::as_ptr(registered), Arc::as_ptr(candidate))
}

/// 基于闭包的处理器
pub struct FnEventHandler<E, F> {
    name: String,
    f: F,
    _marker: PhantomData<fn(&E)>,
}

impl<E, F> EventHandler<E> for FnEventHandler<E, F>
where
    E: DomainEvent,
    F: Fn(&E) -> DomainResult<()> + Send + Sync,
{
    fn handler_name(&self) -> &str {
        &self.name
    }

    fn handle(&self, event: &E) -> DomainResult<()> {
        (self.f)(event)
    }
}

/// 以闭包构造一个具名处理器
pub fn handler_fn<E, F>(name: impl Into<String>, f: F) -> Arc<FnEventHandler<E, F>>
where
    E: DomainEvent,
    F: Fn(&E) -> DomainResult<()> + Send + Sync,
{
    Arc::new(FnEventHandler {
        name: name.into(),
        f,
        _marker: PhantomData,
    })
}
