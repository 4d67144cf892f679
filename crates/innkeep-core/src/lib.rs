//! Innkeep Core - Validated Hotel Domain Model
//!
//! This crate provides the domain layer for the Innkeep hotel-management
//! exercise: guests, rooms, services, reservations and invoices, each kept
//! valid by its constructors and setters.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           innkeep-cli (CLI)             │
//! │  (demo driver, checks, quotes, config)  │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │              Entities                   │
//! │ (Guest, Room, Service, Reservation,     │
//! │  Invoice) - validated on every write    │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Validation facade (Validator)      │
//! │   domain names → typed DomainError      │
//! └──────────────────┬──────────────────────┘
//!                    │ delegates to
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Validation primitives            │
//! │   pure predicates, total, no effects    │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use innkeep_core::prelude::*;
//!
//! let today = Validator::today();
//!
//! let guest = Guest::new("John", "Doe", "john.doe@example.com", today).unwrap();
//! let room = Room::new(101, "Single", 1, 500.0).unwrap();
//!
//! let mut reservation = Reservation::new(guest, room, today, today).unwrap();
//! reservation.add_service(Service::new("Breakfast", 50).unwrap());
//!
//! let mut invoice = Invoice::new(reservation, today).unwrap();
//! assert_eq!(invoice.total_amount(), 0.0);
//! assert_eq!(invoice.calculate_total_amount(), 550.0);
//! ```

pub mod domain;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::domain::{
        DomainError, ErrorCategory, Guest, Invoice, Reservation, Room, Service, Validator,
    };
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
