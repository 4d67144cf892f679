//! Validation primitives.
//!
//! Total, side-effect-free predicates shared by every entity. They answer
//! "is this value acceptable?" and nothing else; turning a `false` into an
//! error is the job of [`super::rules::Validator`].
//!
//! Absence is modelled with `Option`: `None` stands for a value the caller
//! never supplied.

use std::sync::OnceLock;

use chrono::NaiveDate;
use regex::Regex;

/// Basic syntactic email shape: `local@domain.tld`, lowercase TLD of two or
/// more letters. Word characters are ASCII only.
const EMAIL_PATTERN: &str = r"^[A-Za-z0-9_.-]+@[A-Za-z0-9_.-]+\.[a-z]{2,}$";

fn email_regex() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| Regex::new(EMAIL_PATTERN).expect("email pattern is a valid regex"))
}

/// `true` if the string is present and has non-whitespace content.
pub(crate) fn is_non_empty_string(value: Option<&str>) -> bool {
    value.is_some_and(|s| !s.trim().is_empty())
}

/// `true` if the string is present and looks like an email address.
pub(crate) fn is_valid_email(value: Option<&str>) -> bool {
    value.is_some_and(|s| email_regex().is_match(s))
}

/// `true` if the date is present and falls on or after `threshold`.
pub(crate) fn is_date_on_or_after(date: Option<NaiveDate>, threshold: NaiveDate) -> bool {
    date.is_some_and(|d| d >= threshold)
}

/// `true` if `n > 0`. NaN is never positive.
pub(crate) fn is_positive<N>(n: N) -> bool
where
    N: PartialOrd + Default,
{
    n > N::default()
}

/// `true` if `n >= 0`. NaN is never non-negative.
pub(crate) fn is_non_negative<N>(n: N) -> bool
where
    N: PartialOrd + Default,
{
    n >= N::default()
}

/// `true` if the reference is present.
pub(crate) fn is_not_null<T: ?Sized>(value: Option<&T>) -> bool {
    value.is_some()
}
