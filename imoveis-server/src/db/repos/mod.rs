//! PostgreSQL repositories, one per table

pub mod properties;
pub mod rooms;

pub use properties::PropertyRepo;
pub use rooms::RoomRepo;
