//! The gateway seam between handlers and storage
//!
//! Handlers only see `dyn Store`; the backend is chosen at startup and
//! injected through router state.

use async_trait::async_trait;

use crate::models::{Property, PropertyFields, Room, RoomFields};

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    /// Driver error, message passed through verbatim
    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),

    /// Constraint violation reported by a non-SQL backend
    #[error("{0}")]
    Constraint(String),
}

/// Storage operations behind the HTTP handlers.
///
/// Update and delete report rows affected but never fail on a missing id.
#[async_trait]
pub trait Store: Send + Sync {
    /// Short backend name, reported by `/health`.
    fn kind(&self) -> &'static str;

    /// Insert a property, returning its generated id.
    async fn create_property(&self, fields: &PropertyFields) -> Result<i32, DbError>;

    /// All properties, without rooms.
    async fn list_properties(&self) -> Result<Vec<Property>, DbError>;

    async fn update_property(&self, id: i32, fields: &PropertyFields) -> Result<u64, DbError>;

    async fn delete_property(&self, id: i32) -> Result<u64, DbError>;

    /// Insert a room, returning the stored record.
    async fn create_room(&self, fields: RoomFields) -> Result<Room, DbError>;

    async fn rooms_for_property(&self, property_id: i32) -> Result<Vec<Room>, DbError>;

    async fn delete_room(&self, id: i32) -> Result<u64, DbError>;
}
