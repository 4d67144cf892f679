//! The `Reservation` aggregate.
//!
//! A reservation owns its guest, its room and an ordered list of extra
//! services. Dates are validated in dependency order: the start date against
//! today, then the end date against the start date.
//!
//! # Invariant
//!
//! `today <= start_date <= end_date` holds after every successful
//! construction or mutation. "Today" is the date at the time of the call;
//! a stored start date naturally ages into the past afterwards.
//!
//! # Services
//!
//! Duplicates are allowed: booking breakfast twice is two breakfasts.
//! Services are valid by construction, so replacing the list does not
//! re-validate elements.

use std::fmt;

use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::{
    entities::{Guest, Room, Service, common::write_nested},
    error::DomainError,
    rules::Validator,
};

const END_BEFORE_START: &str = "can't be before start date";
const START_AFTER_END: &str = "can't be after end date";

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Reservation {
    guest: Guest,
    room: Room,
    services: Vec<Service>,
    start_date: NaiveDate,
    end_date: NaiveDate,
}

impl Reservation {
    /// Create a reservation with an empty service list.
    pub fn new(
        guest: Guest,
        room: Room,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<Self, DomainError> {
        Self::builder()
            .guest(guest)
            .room(room)
            .start_date(start_date)
            .end_date(end_date)
            .build()
    }

    pub fn builder() -> ReservationBuilder {
        ReservationBuilder::default()
    }

    pub fn guest(&self) -> &Guest {
        &self.guest
    }

    pub fn room(&self) -> &Room {
        &self.room
    }

    pub fn services(&self) -> &[Service] {
        &self.services
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    pub fn end_date(&self) -> NaiveDate {
        self.end_date
    }

    /// Nights between start and end date.
    pub fn nights(&self) -> i64 {
        (self.end_date - self.start_date).num_days()
    }

    pub fn set_guest(&mut self, guest: Guest) {
        self.guest = guest;
    }

    pub fn set_room(&mut self, room: Room) {
        self.room = room;
    }

    /// Rejects a date in the past or one that would put the start after the
    /// current end date.
    pub fn set_start_date(&mut self, start_date: NaiveDate) -> Result<(), DomainError> {
        let start_date = Validator::require_not_in_past("start_date", Some(start_date))?;
        if start_date > self.end_date {
            return Err(DomainError::invalid("start_date", START_AFTER_END));
        }
        self.start_date = start_date;
        Ok(())
    }

    /// Equal to the start date is allowed (a same-day stay).
    pub fn set_end_date(&mut self, end_date: NaiveDate) -> Result<(), DomainError> {
        self.end_date = Validator::require_date_on_or_after(
            "end_date",
            Some(end_date),
            self.start_date,
            END_BEFORE_START,
        )?;
        Ok(())
    }

    /// Replace the whole service list.
    pub fn set_services(&mut self, services: Vec<Service>) {
        self.services = services;
    }

    /// Append a service; duplicates are kept.
    pub fn add_service(&mut self, service: Service) {
        self.services.push(service);
    }
}

impl fmt::Display for Reservation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Reservation")?;
        write_nested(f, "guest", &self.guest)?;
        write_nested(f, "room", &self.room)?;
        write!(
            f,
            "\n  start date: {}\n  end date: {}",
            self.start_date, self.end_date
        )?;
        if self.services.is_empty() {
            return write!(f, "\n  services: none");
        }
        for (i, service) in self.services.iter().enumerate() {
            write_nested(f, &format!("service {}", i + 1), service)?;
        }
        Ok(())
    }
}

/// Builder for [`Reservation`]. `services` is optional and defaults to empty.
#[derive(Debug, Default, Clone)]
pub struct ReservationBuilder {
    guest: Option<Guest>,
    room: Option<Room>,
    services: Vec<Service>,
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
}

impl ReservationBuilder {
    pub fn guest(mut self, guest: Guest) -> Self {
        self.guest = Some(guest);
        self
    }

    pub fn room(mut self, room: Room) -> Self {
        self.room = Some(room);
        self
    }

    pub fn services(mut self, services: Vec<Service>) -> Self {
        self.services = services;
        self
    }

    pub fn start_date(mut self, start_date: NaiveDate) -> Self {
        self.start_date = Some(start_date);
        self
    }

    pub fn end_date(mut self, end_date: NaiveDate) -> Self {
        self.end_date = Some(end_date);
        self
    }

    /// Validate in dependency order: guest, room, start date, end date.
    pub fn build(self) -> Result<Reservation, DomainError> {
        let guest = Validator::require_present("guest", self.guest)?;
        let room = Validator::require_present("room", self.room)?;
        let start_date = Validator::require_not_in_past("start_date", self.start_date)?;
        let end_date = Validator::require_date_on_or_after(
            "end_date",
            self.end_date,
            start_date,
            END_BEFORE_START,
        )?;

        Ok(Reservation {
            guest,
            room,
            services: self.services,
            start_date,
            end_date,
        })
    }
}

#[cfg(test)]
mod tests {
    use chrono::Days;

    use super::*;

    fn in_days(n: u64) -> NaiveDate {
        Validator::today().checked_add_days(Days::new(n)).unwrap()
    }

    fn guest() -> Guest {
        Guest::new("John", "Doe", "john.doe@example.com", in_days(1)).unwrap()
    }

    fn room() -> Room {
        Room::new(101, "Single", 1, 500.0).unwrap()
    }

    fn reservation() -> Reservation {
        Reservation::new(guest(), room(), in_days(1), in_days(4)).unwrap()
    }

    #[test]
    fn starts_with_no_services() {
        let r = reservation();
        assert!(r.services().is_empty());
        assert_eq!(r.nights(), 3);
    }

    #[test]
    fn getters_return_supplied_values() {
        let r = reservation();
        assert_eq!(r.guest(), &guest());
        assert_eq!(r.room(), &room());
        assert_eq!(r.start_date(), in_days(1));
        assert_eq!(r.end_date(), in_days(4));
    }

    #[test]
    fn end_before_start_is_invalid() {
        let err = Reservation::new(guest(), room(), in_days(3), in_days(2)).unwrap_err();
        assert_eq!(err.to_string(), "end_date can't be before start date");
    }

    #[test]
    fn set_end_date_before_start_fails_equal_succeeds() {
        let mut r = reservation();
        assert!(matches!(
            r.set_end_date(in_days(0)),
            Err(DomainError::InvalidValue { field: "end_date", .. })
        ));
        assert_eq!(r.end_date(), in_days(4));

        r.set_end_date(in_days(1)).unwrap();
        assert_eq!(r.end_date(), r.start_date());
        assert_eq!(r.nights(), 0);
    }

    #[test]
    fn past_start_is_invalid() {
        let yesterday = Validator::today().checked_sub_days(Days::new(1)).unwrap();
        let err = Reservation::new(guest(), room(), yesterday, in_days(2)).unwrap_err();
        assert_eq!(err.field(), "start_date");
    }

    #[test]
    fn start_cannot_move_past_end() {
        let mut r = reservation();
        let err = r.set_start_date(in_days(5)).unwrap_err();
        assert_eq!(err.to_string(), "start_date can't be after end date");
        r.set_start_date(in_days(4)).unwrap();
        assert_eq!(r.start_date(), in_days(4));
    }

    #[test]
    fn missing_room_is_reported_before_dates() {
        let err = Reservation::builder()
            .guest(guest())
            .end_date(in_days(1))
            .build()
            .unwrap_err();
        assert_eq!(err, DomainError::MissingValue { field: "room" });
    }

    #[test]
    fn missing_end_date_is_reported() {
        let err = Reservation::builder()
            .guest(guest())
            .room(room())
            .start_date(in_days(1))
            .build()
            .unwrap_err();
        assert_eq!(err, DomainError::MissingValue { field: "end_date" });
    }

    #[test]
    fn duplicate_services_are_kept_in_order() {
        let mut r = reservation();
        let breakfast = Service::new("Breakfast", 50).unwrap();
        r.add_service(breakfast.clone());
        r.add_service(Service::new("Spa", 30).unwrap());
        r.add_service(breakfast.clone());

        let names: Vec<_> = r.services().iter().map(Service::name).collect();
        assert_eq!(names, ["Breakfast", "Spa", "Breakfast"]);
    }

    #[test]
    fn set_services_replaces_the_list() {
        let mut r = reservation();
        r.add_service(Service::new("Breakfast", 50).unwrap());
        r.set_services(vec![Service::new("Parking", 20).unwrap()]);
        assert_eq!(r.services(), [Service::new("Parking", 20).unwrap()]);

        r.set_services(Vec::new());
        assert!(r.services().is_empty());
    }

    #[test]
    fn builder_accepts_initial_services() {
        let r = Reservation::builder()
            .guest(guest())
            .room(room())
            .services(vec![Service::new("Spa", 30).unwrap()])
            .start_date(in_days(1))
            .end_date(in_days(2))
            .build()
            .unwrap();
        assert_eq!(r.services().len(), 1);
    }

    #[test]
    fn equality_includes_services() {
        let a = reservation();
        let mut b = reservation();
        assert_eq!(a, b);
        b.add_service(Service::new("Spa", 30).unwrap());
        assert_ne!(a, b);
    }

    #[test]
    fn display_nests_components() {
        let mut r = reservation();
        assert!(r.to_string().contains("services: none"));

        r.add_service(Service::new("Spa", 30).unwrap());
        let text = r.to_string();
        assert!(text.starts_with("Reservation\n  guest:\n    Guest"));
        assert!(text.contains("  room:\n    Room\n      number: 101"));
        assert!(text.contains("  service 1:\n    Service\n      name: Spa"));
    }
}
