//! 事件分发器（EventDispatcher）
//!
//! 进程内观察者注册表：
//! - 以事件名称为键维护有序处理器列表，按注册顺序同步通知；
//! - 不去重：同一处理器重复注册将被重复调用；
//! - 键存在但列表为空（注销后）与键不存在（从未注册）可被区分；
//! - `unregister_all` 将注册表整体重置为初始空状态。
//!
//! 注册表基于 `DashMap`，全部操作仅需 `&self`，可通过 `Arc` 在线程间共享。
//! 分片锁只在修改注册表与复制待通知列表时持有，调用处理器期间不持锁，
//! 因此处理器可在通知过程中重入注册/注销，变更从下一次通知起生效。
//!
use super::config::{DispatcherConfig, FailurePolicy};
use super::handler::{EventHandler, SharedEventHandler, is_same_handler};
use crate::domain_event::DomainEvent;
use crate::error::DomainResult;
use dashmap::DashMap;
use std::sync::Arc;
use tracing::{debug, trace, warn};

/// 同步事件分发器
pub struct EventDispatcher<E>
where
    E: DomainEvent,
{
    handlers: DashMap<String, Vec<SharedEventHandler<E>>>,
    config: DispatcherConfig,
}

impl<E> Default for EventDispatcher<E>
where
    E: DomainEvent,
{
    fn default() -> Self {
        Self {
            handlers: DashMap::new(),
            config: DispatcherConfig::default(),
        }
    }
}

impl<E> EventDispatcher<E>
where
    E: DomainEvent,
{
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: DispatcherConfig) -> Self {
        Self {
            handlers: DashMap::new(),
            config,
        }
    }

    pub fn config(&self) -> &DispatcherConfig {
        &self.config
    }

    /// 注册处理器：追加到该事件名称的列表末尾（首次出现时创建列表）
    pub fn register(&self, event_name: impl Into<String>, handler: SharedEventHandler<E>) {
        let event_name = event_name.into();
        debug!(
            event = %event_name,
            handler = handler.handler_name(),
            "registering event handler"
        );
        self.handlers.entry(event_name).or_default().push(handler);
    }

    /// 注销处理器：移除该事件名称下第一个同一实例的条目
    ///
    /// 名称未知或处理器未注册时不做任何事并返回 `false`；
    /// 即使列表因此变空，也保留该名称的条目。
    pub fn unregister<H>(&self, event_name: &str, handler: &Arc<H>) -> bool
    where
        H: EventHandler<E> + ?Sized,
    {
        // 处理器名称在取分片写锁之前读取
        let handler_name = handler.handler_name();

        let Some(mut list) = self.handlers.get_mut(event_name) else {
            trace!(event = event_name, "unregister on unknown event, ignored");
            return false;
        };

        let Some(pos) = list.iter().position(|h| is_same_handler(h, handler)) else {
            drop(list);
            trace!(
                event = event_name,
                handler = handler_name,
                "handler not registered, ignored"
            );
            return false;
        };

        list.remove(pos);
        let remaining = list.len();
        drop(list);

        debug!(
            event = event_name,
            handler = handler_name,
            remaining,
            "unregistered event handler"
        );
        true
    }

    /// 清空注册表：所有已知名称恢复为“从未注册”
    pub fn unregister_all(&self) {
        debug!(events = self.handlers.len(), "unregistering all event handlers");
        self.handlers.clear();
    }

    /// 通知：按注册顺序在当前线程上同步调用该事件名称下的全部处理器
    ///
    /// 名称未注册时直接返回 `Ok(())`。处理器失败时的行为由
    /// [`FailurePolicy`] 决定，默认首个失败即返回，后续处理器不再调用。
    pub fn notify(&self, event: &E) -> DomainResult<()> {
        let event_name = event.event_name();

        // 复制后立即释放分片锁，处理器执行期间不持锁
        let Some(handlers) = self
            .handlers
            .get(event_name)
            .map(|entry| entry.value().clone())
        else {
            trace!(event = event_name, "no handlers registered, skipping");
            return Ok(());
        };

        debug!(
            event = event_name,
            handlers = handlers.len(),
            occurred_at = %event.occurred_at(),
            "dispatching event"
        );

        let mut first_error = None;
        for handler in &handlers {
            if let Err(err) = handler.handle(event) {
                warn!(
                    event = event_name,
                    handler = handler.handler_name(),
                    error = %err,
                    policy = %self.config.failure_policy,
                    "event handler failed"
                );
                match self.config.failure_policy {
                    FailurePolicy::FailFast => return Err(err),
                    FailurePolicy::Continue => {
                        first_error.get_or_insert(err);
                    }
                }
            }
        }

        first_error.map_or(Ok(()), Err)
    }

    /// 获取某事件名称下当前的处理器列表
    ///
    /// `None` 表示从未注册（或已被 `unregister_all` 清除），
    /// `Some(vec![])` 表示已注册但当前为空。每次调用读取的都是当时的注册表。
    pub fn event_handlers(&self, event_name: &str) -> Option<Vec<SharedEventHandler<E>>> {
        self.handlers
            .get(event_name)
            .map(|entry| entry.value().clone())
    }

    /// 该事件名称是否存在于注册表中（列表可能为空）
    pub fn is_registered(&self, event_name: &str) -> bool {
        self.handlers.contains_key(event_name)
    }

    /// 该事件名称下的处理器数量，从未注册时为 `None`
    pub fn handler_count(&self, event_name: &str) -> Option<usize> {
        self.handlers.get(event_name).map(|entry| entry.len())
    }

    /// 获取已注册的事件名称列表（按字典序）
    pub fn registered_events(&self) -> Vec<String> {
        let mut names: Vec<String> = self.handlers.iter().map(|e| e.key().clone()).collect();
        names.sort_unstable();
        names
    }
}
