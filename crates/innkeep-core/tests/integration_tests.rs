//! Integration tests for innkeep-core.

use chrono::{Days, NaiveDate};
use innkeep_core::prelude::*;

fn in_days(n: u64) -> NaiveDate {
    Validator::today().checked_add_days(Days::new(n)).unwrap()
}

fn yesterday() -> NaiveDate {
    Validator::today().checked_sub_days(Days::new(1)).unwrap()
}

fn booking(price: f64, services: &[(&str, i32)]) -> Reservation {
    let guest = Guest::new("John", "Doe", "john.doe@example.com", in_days(1)).unwrap();
    let room = Room::new(101, "Single", 1, price).unwrap();
    let mut reservation = Reservation::new(guest, room, in_days(1), in_days(2)).unwrap();
    for (name, price) in services {
        reservation.add_service(Service::new(*name, *price).unwrap());
    }
    reservation
}

#[test]
fn string_check_rejects_blank_and_absent() {
    for s in ["a", " b", "Doe-Smith"] {
        assert!(Validator::validate_string(Some(s)));
    }
    for s in ["", " "] {
        assert!(!Validator::validate_string(Some(s)));
    }
    assert!(!Validator::validate_string(None));
}

#[test]
fn email_check_matches_documented_examples() {
    assert!(Validator::validate_email(Some("john.doe@example.com")));
    assert!(Validator::validate_email(Some("user_1@mail.example.org")));
    assert!(!Validator::validate_email(Some("wrong_email")));
    assert!(!Validator::validate_email(Some("wrong@@mail")));
    assert!(!Validator::validate_email(Some("")));
}

#[test]
fn date_check_boundary_is_inclusive() {
    let t = in_days(10);
    assert!(Validator::validate_date(Some(t), t));
    assert!(Validator::validate_date(Some(in_days(11)), t));
    assert!(!Validator::validate_date(Some(in_days(9)), t));
}

#[test]
fn guest_failures_carry_the_right_kind() {
    let empty_name = Guest::new("", "Stone", "invalid@example.com", in_days(1)).unwrap_err();
    assert!(matches!(empty_name, DomainError::InvalidValue { .. }));

    let no_email = Guest::builder()
        .first_name("Tom")
        .last_name("Green")
        .check_in_date(in_days(1))
        .build()
        .unwrap_err();
    assert!(matches!(no_email, DomainError::MissingValue { field: "email" }));

    let past = Guest::new("Sara", "Moon", "sara.moon@example.com", yesterday()).unwrap_err();
    assert!(matches!(past, DomainError::InvalidValue { field: "check_in_date", .. }));
}

#[test]
fn room_price_must_be_strictly_positive() {
    let negative = Room::new(303, "Suite", 2, -200.0).unwrap_err();
    assert_eq!(negative.to_string(), "price must be positive");
    assert!(matches!(negative, DomainError::InvalidValue { .. }));

    let zero = Room::new(303, "Suite", 2, 0.0).unwrap_err();
    assert!(matches!(zero, DomainError::InvalidValue { .. }));
}

#[test]
fn reservation_end_date_boundary() {
    let mut reservation = booking(500.0, &[]);
    assert!(matches!(
        reservation.set_end_date(in_days(0)),
        Err(DomainError::InvalidValue { .. })
    ));
    assert!(reservation.set_end_date(reservation.start_date()).is_ok());
}

#[test]
fn invoice_total_requires_explicit_recompute() {
    let mut invoice = Invoice::new(booking(500.0, &[("Breakfast", 50), ("Spa", 30)]), in_days(0))
        .unwrap();
    assert_eq!(invoice.calculate_total_amount(), 580.0);

    invoice
        .reservation_mut()
        .add_service(Service::new("Parking", 20).unwrap());
    assert_eq!(invoice.total_amount(), 580.0);

    invoice.calculate_total_amount();
    assert_eq!(invoice.total_amount(), 600.0);
}

#[test]
fn stored_values_are_not_normalised() {
    let guest = Guest::new("  John", "Doe  ", "john.doe@example.com", in_days(1)).unwrap();
    assert_eq!(guest.first_name(), "  John");
    assert_eq!(guest.last_name(), "Doe  ");

    let room = Room::new(7, " Deluxe ", 3, 1234.5).unwrap();
    assert_eq!(room.room_type(), " Deluxe ");
    assert_eq!(room.price(), 1234.5);

    let service = Service::new("Late checkout ", 0).unwrap();
    assert_eq!(service.name(), "Late checkout ");
    assert_eq!(service.price(), 0);
}

#[test]
fn composite_rendering_contains_every_field() {
    let mut invoice = Invoice::new(booking(500.0, &[("Breakfast", 50)]), in_days(0)).unwrap();
    invoice.calculate_total_amount();
    let text = invoice.to_string();

    for needle in [
        "first name: John",
        "last name: Doe",
        "email: john.doe@example.com",
        "number: 101",
        "type: Single",
        "capacity: 1",
        "price: 500.00",
        "name: Breakfast",
        "price: 50",
        "total amount: 550.00",
    ] {
        assert!(text.contains(needle), "missing {needle:?} in:\n{text}");
    }
}
