//! The `Guest` value object.
//!
//! A guest exists only in a fully valid state: names are non-blank, the email
//! has a basic `local@domain.tld` shape and the check-in date is not in the
//! past. Stored strings are exactly what the caller supplied; trimming is
//! applied only while validating.

use std::fmt;

use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::{error::DomainError, rules::Validator};

/// A hotel guest with contact details and a check-in date.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Guest {
    first_name: String,
    last_name: String,
    email: String,
    check_in_date: NaiveDate,
}

impl Guest {
    /// Build a guest from concrete values, validating in field order.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
        check_in_date: NaiveDate,
    ) -> Result<Self, DomainError> {
        Self::builder()
            .first_name(first_name)
            .last_name(last_name)
            .email(email)
            .check_in_date(check_in_date)
            .build()
    }

    /// Start building a guest. Unset fields are reported as missing.
    pub fn builder() -> GuestBuilder {
        GuestBuilder::default()
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn check_in_date(&self) -> NaiveDate {
        self.check_in_date
    }

    pub fn set_first_name(&mut self, first_name: impl Into<String>) -> Result<(), DomainError> {
        self.first_name = Validator::require_text("first_name", Some(first_name.into()))?;
        Ok(())
    }

    pub fn set_last_name(&mut self, last_name: impl Into<String>) -> Result<(), DomainError> {
        self.last_name = Validator::require_text("last_name", Some(last_name.into()))?;
        Ok(())
    }

    pub fn set_email(&mut self, email: impl Into<String>) -> Result<(), DomainError> {
        self.email = Validator::require_email("email", Some(email.into()))?;
        Ok(())
    }

    /// Rejects dates before today.
    pub fn set_check_in_date(&mut self, check_in_date: NaiveDate) -> Result<(), DomainError> {
        self.check_in_date = Validator::require_not_in_past("check_in_date", Some(check_in_date))?;
        Ok(())
    }
}

impl fmt::Display for Guest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Guest\n  first name: {}\n  last name: {}\n  email: {}\n  check-in date: {}",
            self.first_name, self.last_name, self.email, self.check_in_date
        )
    }
}

/// Builder for [`Guest`].
#[derive(Debug, Default, Clone)]
pub struct GuestBuilder {
    first_name: Option<String>,
    last_name: Option<String>,
    email: Option<String>,
    check_in_date: Option<NaiveDate>,
}

impl GuestBuilder {
    pub fn first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = Some(first_name.into());
        self
    }

    pub fn last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = Some(last_name.into());
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn check_in_date(mut self, check_in_date: NaiveDate) -> Self {
        self.check_in_date = Some(check_in_date);
        self
    }

    /// Validate every field in declaration order; the first failure wins.
    pub fn build(self) -> Result<Guest, DomainError> {
        Ok(Guest {
            first_name: Validator::require_text("first_name", self.first_name)?,
            last_name: Validator::require_text("last_name", self.last_name)?,
            email: Validator::require_email("email", self.email)?,
            check_in_date: Validator::require_not_in_past("check_in_date", self.check_in_date)?,
        })
    }
}
