use std::fmt;

use serde::Serialize;

use crate::domain::{error::DomainError, rules::Validator};

/// An extra the hotel charges for, such as breakfast or spa access.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Service {
    name: String,
    /// Whole currency units; free services cost 0.
    price: i32,
}

impl Service {
    pub fn new(name: impl Into<String>, price: i32) -> Result<Self, DomainError> {
        Self::builder().name(name).price(price).build()
    }

    pub fn builder() -> ServiceBuilder {
        ServiceBuilder::default()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> i32 {
        self.price
    }

    pub fn set_name(&mut self, name: impl Into<String>) -> Result<(), DomainError> {
        self.name = Validator::require_text("name", Some(name.into()))?;
        Ok(())
    }

    pub fn set_price(&mut self, price: i32) -> Result<(), DomainError> {
        self.price = Validator::require_non_negative("price", Some(price))?;
        Ok(())
    }
}

impl fmt::Display for Service {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Service\n  name: {}\n  price: {}", self.name, self.price)
    }
}

/// Builder for [`Service`].
#[derive(Debug, Default, Clone)]
pub struct ServiceBuilder {
    name: Option<String>,
    price: Option<i32>,
}

impl ServiceBuilder {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn price(mut self, price: i32) -> Self {
        self.price = Some(price);
        self
    }

    pub fn build(self) -> Result<Service, DomainError> {
        Ok(Service {
            name: Validator::require_text("name", self.name)?,
            price: Validator::require_non_negative("price", self.price)?,
        })
    }
}
