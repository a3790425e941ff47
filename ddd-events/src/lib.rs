//! DDD 领域事件基础库（ddd-events）
//!
//! 提供进程内、同步的领域事件分发能力：
//! - 领域事件（`domain_event`）：事件名称与发生时间的最小接口；
//! - 事件子系统（`eventing`）：处理器协议、分发器与分发配置；
//! - 统一错误（`error`）。
//!
//! 分发器是显式构造、显式传递的对象，不提供全局单例。
//!
//! 典型用法：
//! 1. 使用 `#[domain_event]`（见 `ddd-events-macros`）定义事件枚举；
//! 2. 为每个副作用实现 `EventHandler`；
//! 3. 在 `EventDispatcher` 上按事件名称注册处理器；
//! 4. 状态变更后由发布方调用 `notify`。
//!
pub mod domain_event;
pub mod error;
pub mod eventing;

// 允许在本 crate 内部通过 ::ddd_events 进行自引用，
// 以便过程宏在本 crate 的单元测试中也能解析到 ::ddd_events 路径。
extern crate self as ddd_events;
