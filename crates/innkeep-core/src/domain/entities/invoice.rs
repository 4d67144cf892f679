//! The `Invoice` entity.
//!
//! The total is a cached, derived value. It starts at zero and only changes
//! when [`Invoice::calculate_total_amount`] is called; editing the
//! reservation afterwards leaves it stale until the next explicit call.

use std::fmt;
use std::hash::{Hash, Hasher};

use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::{
    entities::{
        Reservation,
        common::{float_key, write_nested},
    },
    error::DomainError,
    rules::Validator,
};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Invoice {
    reservation: Reservation,
    total_amount: f64,
    issue_date: NaiveDate,
}

impl Invoice {
    pub fn new(reservation: Reservation, issue_date: NaiveDate) -> Result<Self, DomainError> {
        Self::builder()
            .reservation(reservation)
            .issue_date(issue_date)
            .build()
    }

    pub fn builder() -> InvoiceBuilder {
        InvoiceBuilder::default()
    }

    pub fn reservation(&self) -> &Reservation {
        &self.reservation
    }

    /// Mutable access to the billed reservation. Changes made through it are
    /// not reflected in the total until it is recalculated.
    pub fn reservation_mut(&mut self) -> &mut Reservation {
        &mut self.reservation
    }

    pub fn total_amount(&self) -> f64 {
        self.total_amount
    }

    pub fn issue_date(&self) -> NaiveDate {
        self.issue_date
    }

    /// Does not touch the total.
    pub fn set_reservation(&mut self, reservation: Reservation) {
        self.reservation = reservation;
    }

    pub fn set_issue_date(&mut self, issue_date: NaiveDate) -> Result<(), DomainError> {
        self.issue_date = Validator::require_not_in_past("issue_date", Some(issue_date))?;
        Ok(())
    }

    /// Recompute the total as room price plus every service price, store it
    /// and return it. Calling it twice without changes yields the same value.
    pub fn calculate_total_amount(&mut self) -> f64 {
        let services: f64 = self
            .reservation
            .services()
            .iter()
            .map(|s| f64::from(s.price()))
            .sum();
        self.total_amount = self.reservation.room().price() + services;
        self.total_amount
    }
}

// `total_amount` is a finite sum of validated prices, never NaN.
impl Eq for Invoice {}

impl Hash for Invoice {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.reservation.hash(state);
        float_key(self.total_amount).hash(state);
        self.issue_date.hash(state);
    }
}

impl fmt::Display for Invoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invoice")?;
        write_nested(f, "reservation", &self.reservation)?;
        write!(
            f,
            "\n  total amount: {:.2}\n  issue date: {}",
            self.total_amount, self.issue_date
        )
    }
}

/// Builder for [`Invoice`]. The total always starts at zero.
#[derive(Debug, Default, Clone)]
pub struct InvoiceBuilder {
    reservation: Option<Reservation>,
    issue_date: Option<NaiveDate>,
}

impl InvoiceBuilder {
    pub fn reservation(mut self, reservation: Reservation) -> Self {
        self.reservation = Some(reservation);
        self
    }

    pub fn issue_date(mut self, issue_date: NaiveDate) -> Self {
        self.issue_date = Some(issue_date);
        self
    }

    pub fn build(self) -> Result<Invoice, DomainError> {
        Ok(Invoice {
            reservation: Validator::require_present("reservation", self.reservation)?,
            total_amount: 0.0,
            issue_date: Validator::require_not_in_past("issue_date", self.issue_date)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use chrono::Days;

    use super::*;
    use crate::domain::entities::{Guest, Room, Service};

    fn in_days(n: u64) -> NaiveDate {
        Validator::today().checked_add_days(Days::new(n)).unwrap()
    }

    fn reservation() -> Reservation {
        let guest = Guest::new("John", "Doe", "john.doe@example.com", in_days(1)).unwrap();
        let room = Room::new(101, "Single", 1, 500.0).unwrap();
        let mut r = Reservation::new(guest, room, in_days(1), in_days(3)).unwrap();
        r.add_service(Service::new("Breakfast", 50).unwrap());
        r.add_service(Service::new("Spa", 30).unwrap());
        r
    }

    #[test]
    fn total_starts_at_zero() {
        let invoice = Invoice::new(reservation(), Validator::today()).unwrap();
        assert_eq!(invoice.total_amount(), 0.0);
    }

    #[test]
    fn total_is_room_plus_services() {
        let mut invoice = Invoice::new(reservation(), Validator::today()).unwrap();
        assert_eq!(invoice.calculate_total_amount(), 580.0);
        assert_eq!(invoice.total_amount(), 580.0);
    }

    #[test]
    fn recalculation_is_idempotent() {
        let mut invoice = Invoice::new(reservation(), Validator::today()).unwrap();
        invoice.calculate_total_amount();
        assert_eq!(invoice.calculate_total_amount(), 580.0);
    }

    #[test]
    fn total_goes_stale_until_recalculated() {
        let mut invoice = Invoice::new(reservation(), Validator::today()).unwrap();
        invoice.calculate_total_amount();

        invoice
            .reservation_mut()
            .add_service(Service::new("Parking", 20).unwrap());
        assert_eq!(invoice.total_amount(), 580.0);

        assert_eq!(invoice.calculate_total_amount(), 600.0);
    }

    #[test]
    fn replacing_reservation_keeps_old_total() {
        let mut invoice = Invoice::new(reservation(), Validator::today()).unwrap();
        invoice.calculate_total_amount();

        let mut cheaper = reservation();
        cheaper.set_services(Vec::new());
        invoice.set_reservation(cheaper);
        assert_eq!(invoice.total_amount(), 580.0);
        assert_eq!(invoice.calculate_total_amount(), 500.0);
    }

    #[test]
    fn past_issue_date_is_invalid() {
        let yesterday = Validator::today().checked_sub_days(Days::new(1)).unwrap();
        let err = Invoice::new(reservation(), yesterday).unwrap_err();
        assert_eq!(err.to_string(), "issue_date can't be in the past");

        let mut invoice = Invoice::new(reservation(), in_days(1)).unwrap();
        assert!(invoice.set_issue_date(yesterday).is_err());
        assert_eq!(invoice.issue_date(), in_days(1));
    }

    #[test]
    fn missing_reservation_is_reported() {
        let err = Invoice::builder()
            .issue_date(Validator::today())
            .build()
            .unwrap_err();
        assert_eq!(err, DomainError::MissingValue { field: "reservation" });
    }

    #[test]
    fn equality_includes_total() {
        let a = Invoice::new(reservation(), Validator::today()).unwrap();
        let mut b = a.clone();
        assert_eq!(a, b);
        b.calculate_total_amount();
        assert_ne!(a, b);
    }

    #[test]
    fn display_shows_total_and_date() {
        let mut invoice = Invoice::new(reservation(), Validator::today()).unwrap();
        invoice.calculate_total_amount();
        let text = invoice.to_string();
        assert!(text.contains("total amount: 580.00"));
        assert!(text.contains(&format!("issue date: {}", Validator::today())));
        assert!(text.contains("  reservation:\n    Reservation"));
    }
}
