//! 客户（Customer）限界上下文的领域事件
//!
//! - `CustomerEvent`：客户创建、地址变更事件；
//! - `handler`：订阅客户事件的日志处理器；
//! - `CustomerService`：在状态变更后发布事件的发布方。
//!
pub mod address;
pub mod event;
pub mod handler;
pub mod service;

pub use address::Address;
pub use event::CustomerEvent;
pub use service::CustomerService;
