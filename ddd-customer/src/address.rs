use ddd_events::error::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// 客户地址（地址变更事件的载荷）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    street: String,
    number: u32,
    zip: String,
    city: String,
}

impl Address {
    pub fn new(
        street: impl Into<String>,
        number: u32,
        zip: impl Into<String>,
        city: impl Into<String>,
    ) -> DomainResult<Self> {
        let address = Self {
            street: street.into(),
            number,
            zip: zip.into(),
            city: city.into(),
        };
        address.validate()?;
        Ok(address)
    }

    fn validate(&self) -> DomainResult<()> {
        if self.street.trim().is_empty() {
            return Err(DomainError::invalid_value("street is required"));
        }
        if self.number == 0 {
            return Err(DomainError::invalid_value("number must be greater than zero"));
        }
        if self.zip.trim().is_empty() {
            return Err(DomainError::invalid_value("zip is required"));
        }
        if self.city.trim().is_empty() {
            return Err(DomainError::invalid_value("city is required"));
        }
        Ok(())
    }

    pub fn street(&self) -> &str {
        &self.street
    }

    pub fn number(&self) -> u32 {
        self.number
    }

    pub fn zip(&self) -> &str {
        &self.zip
    }

    pub fn city(&self) -> &str {
        &self.city
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {} {}", self.street, self.number, self.zip, self.city)
    }
}
