use chrono::{DateTime, Utc};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fmt;

/// 领域事件载荷需要满足的通用能力边界
///
/// 事件一经构造即不可变；名称由具体变体决定，而非可变状态。
pub trait DomainEvent:
    Clone + PartialEq + fmt::Debug + Serialize + DeserializeOwned + Send + Sync + 'static
{
    /// 事件名称（分发器据此查找处理器，如 `CustomerCreated`）
    fn event_name(&self) -> &'static str;

    /// 事件发生时间（构造时确定）
    fn occurred_at(&self) -> &DateTime<Utc>;
}
