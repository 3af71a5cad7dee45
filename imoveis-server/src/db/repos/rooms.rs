//! Room repository

use sqlx::PgPool;

use crate::db::DbError;
use crate::models::{Room, RoomFields};

/// Room repository
pub struct RoomRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> RoomRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Insert a room. A missing property surfaces as the driver's
    /// foreign-key error.
    pub async fn create(&self, fields: RoomFields) -> Result<Room, DbError> {
        let id: i32 = sqlx::query_scalar(
            r#"
            INSERT INTO comodos (nome, imovel_id)
            VALUES ($1, $2)
            RETURNING id
            "#,
        )
        .bind(&fields.name)
        .bind(fields.property_id)
        .fetch_one(self.pool)
        .await?;

        Ok(Room::from_fields(id, fields))
    }

    /// Rooms belonging to one property.
    pub async fn list_for_property(&self, property_id: i32) -> Result<Vec<Room>, DbError> {
        let rooms = sqlx::query_as::<_, Room>(
            r#"
            SELECT id, nome AS name, imovel_id AS property_id
            FROM comodos
            WHERE imovel_id = $1
            ORDER BY id
            "#,
        )
        .bind(property_id)
        .fetch_all(self.pool)
        .await?;

        Ok(rooms)
    }

    pub async fn delete(&self, id: i32) -> Result<u64, DbError> {
        let result = sqlx::query("DELETE FROM comodos WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
