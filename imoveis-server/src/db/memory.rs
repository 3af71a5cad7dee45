//! In-process store
//!
//! Mirrors what PostgreSQL does for this schema: ids start at 1 and are never
//! reused, the room foreign key is checked on insert and on deleting a
//! referenced property, and update/delete on a missing id affect zero rows.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{DbError, Store};
use crate::models::{Property, PropertyFields, Room, RoomFields};

const ROOM_FK: &str = "comodos_imovel_id_fkey";

#[derive(Default)]
struct Tables {
    properties: BTreeMap<i32, Property>,
    rooms: BTreeMap<i32, Room>,
    next_property_id: i32,
    next_room_id: i32,
}

impl Tables {
    fn next_property_id(&mut self) -> Result<i32, DbError> {
        self.next_property_id = next_in_sequence(self.next_property_id, "imoveis_id_seq")?;
        Ok(self.next_property_id)
    }

    fn next_room_id(&mut self) -> Result<i32, DbError> {
        self.next_room_id = next_in_sequence(self.next_room_id, "comodos_id_seq")?;
        Ok(self.next_room_id)
    }
}

/// `SERIAL` sequences stop at `i32::MAX` instead of wrapping.
fn next_in_sequence(current: i32, sequence: &str) -> Result<i32, DbError> {
    current.checked_add(1).ok_or_else(|| {
        DbError::Constraint(format!(
            "nextval: reached maximum value of sequence \"{}\" ({})",
            sequence,
            i32::MAX
        ))
    })
}

/// Store kept entirely in memory; contents are lost on drop
#[derive(Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Store for MemoryStore {
    fn kind(&self) -> &'static str {
        "memory"
    }

    async fn create_property(&self, fields: &PropertyFields) -> Result<i32, DbError> {
        let mut tables = self.tables.write().await;
        let id = tables.next_property_id()?;
        tables
            .properties
            .insert(id, Property::from_fields(id, fields.clone()));
        Ok(id)
    }

    async fn list_properties(&self) -> Result<Vec<Property>, DbError> {
        let tables = self.tables.read().await;
        Ok(tables.properties.values().cloned().collect())
    }

    async fn update_property(&self, id: i32, fields: &PropertyFields) -> Result<u64, DbError> {
        let mut tables = self.tables.write().await;
        match tables.properties.get_mut(&id) {
            Some(property) => {
                *property = Property::from_fields(id, fields.clone());
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete_property(&self, id: i32) -> Result<u64, DbError> {
        let mut tables = self.tables.write().await;
        if tables.rooms.values().any(|room| room.property_id == id) {
            return Err(DbError::Constraint(format!(
                "update or delete on table \"imoveis\" violates foreign key constraint \"{}\" on table \"comodos\"",
                ROOM_FK
            )));
        }
        Ok(u64::from(tables.properties.remove(&id).is_some()))
    }

    async fn create_room(&self, fields: RoomFields) -> Result<Room, DbError> {
        let mut tables = self.tables.write().await;
        if !tables.properties.contains_key(&fields.property_id) {
            return Err(DbError::Constraint(format!(
                "insert or update on table \"comodos\" violates foreign key constraint \"{}\"",
                ROOM_FK
            )));
        }
        let id = tables.next_room_id()?;
        let room = Room::from_fields(id, fields);
        tables.rooms.insert(id, room.clone());
        Ok(room)
    }

    async fn rooms_for_property(&self, property_id: i32) -> Result<Vec<Room>, DbError> {
        let tables = self.tables.read().await;
        Ok(tables
            .rooms
            .values()
            .filter(|room| room.property_id == property_id)
            .cloned()
            .collect())
    }

    async fn delete_room(&self, id: i32) -> Result<u64, DbError> {
        let mut tables = self.tables.write().await;
        Ok(u64::from(tables.rooms.remove(&id).is_some()))
    }
}
