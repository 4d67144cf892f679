// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for Innkeep.
//!
//! This module contains pure business logic with no I/O.
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or logging
//! - **Value objects**: All entities are Clone + Eq + Hash over every field
//! - **Always valid**: Constructors and setters validate; failures return
//!   [`DomainError`] and leave nothing half-built
//!
// Public API - what the world sees
pub mod entities;
pub mod error;
pub mod rules;

// Private implementation details - reached through `rules::Validator`
mod validation;

// Re-exports for convenience
pub use entities::{
    Guest, GuestBuilder, Invoice, InvoiceBuilder, Reservation, ReservationBuilder, Room,
    RoomBuilder, Service, ServiceBuilder,
};

pub use error::{DomainError, ErrorCategory};

pub use rules::Validator;
