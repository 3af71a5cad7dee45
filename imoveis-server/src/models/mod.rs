//! Domain models and request validation
//!
//! Request input is validated when converted into these types.
//! Invalid input returns ValidationError, not panic.

pub mod property;
pub mod purchase_date;
pub mod validation;

pub use property::{Property, PropertyFields, PropertyWithRooms, Room, RoomFields};
pub use purchase_date::{format_purchase_date, parse_purchase_date, DatePolicy};
pub use validation::ValidationError;
