//! Validation facade.
//!
//! [`Validator`] groups the primitives under domain-meaningful names. It is a
//! namespace, never instantiated, and holds no state.
//!
//! Two flavours are exposed:
//! - `validate_*` answer yes/no and never fail;
//! - `require_*` turn a failed check into a [`DomainError`] naming the field.
//!   Entity setters are written in terms of these.

use chrono::{Local, NaiveDate};

use crate::domain::{error::DomainError, validation};

/// Stateless validation facade shared across all entities.
pub struct Validator;

impl Validator {
    // ── Boolean checks ────────────────────────────────────────────────────

    /// Non-empty after trimming leading/trailing whitespace.
    pub fn validate_string(text: Option<&str>) -> bool {
        validation::is_non_empty_string(text)
    }

    /// Basic `local@domain.tld` shape.
    pub fn validate_email(email: Option<&str>) -> bool {
        validation::is_valid_email(email)
    }

    /// `compare` is present and not before `threshold`.
    pub fn validate_date(compare: Option<NaiveDate>, threshold: NaiveDate) -> bool {
        validation::is_date_on_or_after(compare, threshold)
    }

    pub fn validate_positive_number<N: PartialOrd + Default>(number: N) -> bool {
        validation::is_positive(number)
    }

    pub fn validate_non_negative_number<N: PartialOrd + Default>(number: N) -> bool {
        validation::is_non_negative(number)
    }

    pub fn validate_object<T: ?Sized>(object: Option<&T>) -> bool {
        validation::is_not_null(object)
    }

    /// A check-in date is present and not in the past relative to `today`.
    pub fn validate_check_in_date(date: Option<NaiveDate>, today: NaiveDate) -> bool {
        Self::validate_object(date.as_ref()) && Self::validate_date(date, today)
    }

    /// The local calendar date used as the "not in the past" threshold.
    pub fn today() -> NaiveDate {
        Local::now().date_naive()
    }

    // ── Checks that fail with a typed error ───────────────────────────────

    /// Present and non-blank. The original (untrimmed) text is returned.
    pub fn require_text(field: &'static str, value: Option<String>) -> Result<String, DomainError> {
        let value = Self::require_present(field, value)?;
        if !Self::validate_string(Some(&value)) {
            return Err(DomainError::invalid(field, "can't be empty"));
        }
        Ok(value)
    }

    pub fn require_email(field: &'static str, value: Option<String>) -> Result<String, DomainError> {
        let value = Self::require_present(field, value)?;
        if !Self::validate_email(Some(&value)) {
            return Err(DomainError::invalid(field, "does not match the email format"));
        }
        Ok(value)
    }

    /// Present and on or after `threshold`. `rule` describes the threshold
    /// for the error message, e.g. "can't be in the past".
    pub fn require_date_on_or_after(
        field: &'static str,
        value: Option<NaiveDate>,
        threshold: NaiveDate,
        rule: &str,
    ) -> Result<NaiveDate, DomainError> {
        let date = Self::require_present(field, value)?;
        if !Self::validate_date(Some(date), threshold) {
            return Err(DomainError::invalid(field, rule));
        }
        Ok(date)
    }

    /// Present and not before today.
    pub fn require_not_in_past(
        field: &'static str,
        value: Option<NaiveDate>,
    ) -> Result<NaiveDate, DomainError> {
        Self::require_date_on_or_after(field, value, Self::today(), "can't be in the past")
    }

    pub fn require_positive<N>(field: &'static str, value: Option<N>) -> Result<N, DomainError>
    where
        N: PartialOrd + Default + Copy,
    {
        let n = Self::require_present(field, value)?;
        if !Self::validate_positive_number(n) {
            return Err(DomainError::invalid(field, "must be positive"));
        }
        Ok(n)
    }

    pub fn require_non_negative<N>(field: &'static str, value: Option<N>) -> Result<N, DomainError>
    where
        N: PartialOrd + Default + Copy,
    {
        let n = Self::require_present(field, value)?;
        if !Self::validate_non_negative_number(n) {
            return Err(DomainError::invalid(field, "can't be negative"));
        }
        Ok(n)
    }

    pub fn require_present<T>(field: &'static str, value: Option<T>) -> Result<T, DomainError> {
        value.ok_or_else(|| DomainError::missing(field))
    }
}
