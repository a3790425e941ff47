use proc_macro::TokenStream;

mod domain_event;
mod utils;

/// 领域事件宏
///
/// 仅支持形如：
/// pub enum XxxEvent {
///     Variant { field_a: T, ... },
/// }
/// 的具名字段变体：
/// - 合并默认派生：`Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize`
/// - 为缺失的变体追加字段 `occurred_at: chrono::DateTime<chrono::Utc>`（置于最后）
/// - 生成 `::ddd_events::domain_event::DomainEvent` 实现（event_name/occurred_at）
/// - 生成事件名常量：每个变体一个（如 `CustomerCreated` -> `CUSTOMER_CREATED`），以及 `EVENT_NAMES`
/// - 事件名默认取变体名，可通过 `#[event(name = "...")]` 覆写
///
/// 使用方需依赖 `serde`（derive）与 `chrono`（serde 特性）。
#[proc_macro_attribute]
pub fn domain_event(attr: TokenStream, item: TokenStream) -> TokenStream {
    domain_event::expand(attr, item)
}
