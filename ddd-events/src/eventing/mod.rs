//! 事件子系统（eventing）
//!
//! 提供进程内观察者注册表的协议与实现：
//! - `EventHandler`：对某类事件执行同步副作用；
//! - `EventDispatcher`：按事件名称维护有序处理器列表并同步通知；
//! - `DispatcherConfig`：分发配置（处理器失败时的策略）。
//!
//! 不包含持久化、重试、跨进程传输等能力；通知在调用方线程上同步完成。
//!
pub mod config;
pub mod dispatcher;
pub mod handler;

pub use config::{DispatcherConfig, FailurePolicy};
pub use dispatcher::EventDispatcher;
pub use handler::{EventHandler, FnEventHandler, SharedEventHandler, handler_fn, is_same_handler};
