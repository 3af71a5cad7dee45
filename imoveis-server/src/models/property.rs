//! Property and room records

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Property record from database (`imoveis`)
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Property {
    pub id: i32,
    pub description: String,
    pub purchase_date: DateTime<Utc>,
    pub address: String,
}

/// Room record from database (`comodos`)
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Room {
    pub id: i32,
    pub name: String,
    pub property_id: i32,
}

/// Property with its rooms, as returned by the list endpoint
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyWithRooms {
    pub property: Property,
    pub rooms: Vec<Room>,
}

/// Writable property fields, shared by insert and full-field update
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyFields {
    pub description: String,
    pub purchase_date: DateTime<Utc>,
    pub address: String,
}

/// Writable room fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomFields {
    pub name: String,
    pub property_id: i32,
}

impl Room {
    pub fn from_fields(id: i32, fields: RoomFields) -> Self {
        Self {
            id,
            name: fields.name,
            property_id: fields.property_id,
        }
    }
}

impl Property {
    pub fn from_fields(id: i32, fields: PropertyFields) -> Self {
        Self {
            id,
            description: fields.description,
            purchase_date: fields.purchase_date,
            address: fields.address,
        }
    }
}
