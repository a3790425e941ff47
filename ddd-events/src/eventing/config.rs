//! 分发配置
//!
use crate::error::DomainError;
use bon::Builder;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 处理器失败时的分发策略
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailurePolicy {
    /// 首个失败即返回其错误，本次通知中后续处理器不再执行
    #[default]
    FailFast,
    /// 执行全部处理器，返回首个错误
    Continue,
}

impl fmt::Display for FailurePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FailFast => write!(f, "fail_fast"),
            Self::Continue => write!(f, "continue"),
        }
    }
}

impl FromStr for FailurePolicy {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fail_fast" | "fail-fast" | "failfast" => Ok(Self::FailFast),
            "continue" => Ok(Self::Continue),
            other => Err(DomainError::Parse {
                reason: format!("unknown failure policy: {other}"),
            }),
        }
    }
}

/// 事件分发器配置
#[derive(Builder, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DispatcherConfig {
    /// 处理器失败时的策略
    #[builder(default)]
    #[serde(default)]
    pub failure_policy: FailurePolicy,
}
