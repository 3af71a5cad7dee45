//! Property repository
//!
//! Plain parameterized statements, one per call. No transactions: each
//! statement commits on its own.

use sqlx::PgPool;

use crate::db::DbError;
use crate::models::{Property, PropertyFields};

/// Property repository
pub struct PropertyRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> PropertyRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Insert a property, returning the generated id.
    pub async fn create(&self, fields: &PropertyFields) -> Result<i32, DbError> {
        let id: i32 = sqlx::query_scalar(
            r#"
            INSERT INTO imoveis (descricao, data_compra, endereco)
            VALUES ($1, $2, $3)
            RETURNING id
            "#,
        )
        .bind(&fields.description)
        .bind(fields.purchase_date)
        .bind(&fields.address)
        .fetch_one(self.pool)
        .await?;

        Ok(id)
    }

    /// List all properties, without rooms.
    pub async fn list(&self) -> Result<Vec<Property>, DbError> {
        let properties = sqlx::query_as::<_, Property>(
            r#"
            SELECT
                id,
                descricao AS description,
                data_compra AS purchase_date,
                endereco AS address
            FROM imoveis
            ORDER BY id
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(properties)
    }

    /// Overwrite every writable field. Returns rows affected (0 for a missing id).
    pub async fn update(&self, id: i32, fields: &PropertyFields) -> Result<u64, DbError> {
        let result = sqlx::query(
            r#"
            UPDATE imoveis
            SET descricao = $2, data_compra = $3, endereco = $4
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(&fields.description)
        .bind(fields.purchase_date)
        .bind(&fields.address)
        .execute(self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    /// Delete by id. Rooms are not cascaded; the foreign key rejects the
    /// delete while any room still references the property.
    pub async fn delete(&self, id: i32) -> Result<u64, DbError> {
        let result = sqlx::query("DELETE FROM imoveis WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
