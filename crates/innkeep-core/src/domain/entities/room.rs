use std::fmt;
use std::hash::{Hash, Hasher};

use serde::Serialize;

use crate::domain::{entities::common::float_key, error::DomainError, rules::Validator};

/// A hotel room: number, type, capacity (max people) and nightly price.
///
/// Every numeric field is strictly positive and the type is non-blank.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Room {
    room_number: i32,
    room_type: String,
    capacity: i32,
    price: f64,
}

impl Room {
    pub fn new(
        room_number: i32,
        room_type: impl Into<String>,
        capacity: i32,
        price: f64,
    ) -> Result<Self, DomainError> {
        Self::builder()
            .room_number(room_number)
            .room_type(room_type)
            .capacity(capacity)
            .price(price)
            .build()
    }

    pub fn builder() -> RoomBuilder {
        RoomBuilder::default()
    }

    pub fn room_number(&self) -> i32 {
        self.room_number
    }

    pub fn room_type(&self) -> &str {
        &self.room_type
    }

    pub fn capacity(&self) -> i32 {
        self.capacity
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn set_room_number(&mut self, room_number: i32) -> Result<(), DomainError> {
        self.room_number = Validator::require_positive("room_number", Some(room_number))?;
        Ok(())
    }

    pub fn set_room_type(&mut self, room_type: impl Into<String>) -> Result<(), DomainError> {
        self.room_type = Validator::require_text("room_type", Some(room_type.into()))?;
        Ok(())
    }

    pub fn set_capacity(&mut self, capacity: i32) -> Result<(), DomainError> {
        self.capacity = Validator::require_positive("capacity", Some(capacity))?;
        Ok(())
    }

    /// Zero is rejected: the price must be strictly positive.
    pub fn set_price(&mut self, price: f64) -> Result<(), DomainError> {
        self.price = Validator::require_positive("price", Some(price))?;
        Ok(())
    }
}

// `price` is never NaN, so equality is total.
impl Eq for Room {}

impl Hash for Room {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.room_number.hash(state);
        self.room_type.hash(state);
        self.capacity.hash(state);
        float_key(self.price).hash(state);
    }
}

impl fmt::Display for Room {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Room\n  number: {}\n  type: {}\n  capacity: {}\n  price: {:.2}",
            self.room_number, self.room_type, self.capacity, self.price
        )
    }
}

/// Builder for [`Room`].
#[derive(Debug, Default, Clone)]
pub struct RoomBuilder {
    room_number: Option<i32>,
    room_type: Option<String>,
    capacity: Option<i32>,
    price: Option<f64>,
}

impl RoomBuilder {
    pub fn room_number(mut self, room_number: i32) -> Self {
        self.room_number = Some(room_number);
        self
    }

    pub fn room_type(mut self, room_type: impl Into<String>) -> Self {
        self.room_type = Some(room_type.into());
        self
    }

    pub fn capacity(mut self, capacity: i32) -> Self {
        self.capacity = Some(capacity);
        self
    }

    pub fn price(mut self, price: f64) -> Self {
        self.price = Some(price);
        self
    }

    pub fn build(self) -> Result<Room, DomainError> {
        Ok(Room {
            room_number: Validator::require_positive("room_number", self.room_number)?,
            room_type: Validator::require_text("room_type", self.room_type)?,
            capacity: Validator::require_positive("capacity", self.capacity)?,
            price: Validator::require_positive("price", self.price)?,
        })
    }
}
