pub(crate) mod common;
pub mod guest;
pub mod invoice;
pub mod reservation;
pub mod room;
pub mod service;

pub use crate::domain::DomainError;
pub use guest::{Guest, GuestBuilder};
pub use invoice::{Invoice, InvoiceBuilder};
pub use reservation::{Reservation, ReservationBuilder};
pub use room::{Room, RoomBuilder};
pub use service::{Service, ServiceBuilder};
