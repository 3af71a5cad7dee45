//! PostgreSQL-backed store

use async_trait::async_trait;
use sqlx::PgPool;

use super::repos::{PropertyRepo, RoomRepo};
use super::{DbError, Store};
use crate::models::{Property, PropertyFields, Room, RoomFields};

/// Store over a shared connection pool
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Store for PgStore {
    fn kind(&self) -> &'static str {
        "postgres"
    }

    async fn create_property(&self, fields: &PropertyFields) -> Result<i32, DbError> {
        PropertyRepo::new(&self.pool).create(fields).await
    }

    async fn list_properties(&self) -> Result<Vec<Property>, DbError> {
        PropertyRepo::new(&self.pool).list().await
    }

    async fn update_property(&self, id: i32, fields: &PropertyFields) -> Result<u64, DbError> {
        PropertyRepo::new(&self.pool).update(id, fields).await
    }

    async fn delete_property(&self, id: i32) -> Result<u64, DbError> {
        PropertyRepo::new(&self.pool).delete(id).await
    }

    async fn create_room(&self, fields: RoomFields) -> Result<Room, DbError> {
        RoomRepo::new(&self.pool).create(fields).await
    }

    async fn rooms_for_property(&self, property_id: i32) -> Result<Vec<Room>, DbError> {
        RoomRepo::new(&self.pool).list_for_property(property_id).await
    }

    async fn delete_room(&self, id: i32) -> Result<u64, DbError> {
        RoomRepo::new(&self.pool).delete(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{create_pool, migrations, DEFAULT_MAX_CONNECTIONS};
    use chrono::{TimeZone, Utc};

    // Integration tests - run with DATABASE_URL set
    // cargo test -p imoveis-server -- --ignored

    async fn store() -> PgStore {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = create_pool(&url, DEFAULT_MAX_CONNECTIONS)
            .await
            .expect("pool creation failed");
        migrations::run(&pool).await.expect("migrations failed");
        PgStore::new(pool)
    }

    fn fields(description: &str) -> PropertyFields {
        PropertyFields {
            description: description.into(),
            purchase_date: Utc.with_ymd_and_hms(2024, 3, 15, 0, 0, 0).unwrap(),
            address: "Rua das Flores, 10".into(),
        }
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn property_round_trips() {
        let store = store().await;
        let id = store.create_property(&fields("Casa")).await.unwrap();
        assert!(id > 0);

        let listed = store.list_properties().await.unwrap();
        let found = listed.into_iter().find(|p| p.id == id).expect("inserted row missing");
        assert_eq!(found, Property::from_fields(id, fields("Casa")));

        assert_eq!(store.delete_property(id).await.unwrap(), 1);
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn missing_ids_affect_zero_rows() {
        let store = store().await;
        assert_eq!(store.update_property(i32::MAX, &fields("x")).await.unwrap(), 0);
        assert_eq!(store.delete_property(i32::MAX).await.unwrap(), 0);
        assert_eq!(store.delete_room(i32::MAX).await.unwrap(), 0);
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn room_with_missing_property_is_rejected() {
        let store = store().await;
        let err = store
            .create_room(RoomFields {
                name: "Sala".into(),
                property_id: i32::MAX,
            })
            .await
            .unwrap_err();
        assert!(matches!(err, DbError::Sqlx(sqlx::Error::Database(_))));
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn rooms_are_scoped_to_property() {
        let store = store().await;
        let a = store.create_property(&fields("A")).await.unwrap();
        let b = store.create_property(&fields("B")).await.unwrap();
        let room = store
            .create_room(RoomFields {
                name: "Cozinha".into(),
                property_id: a,
            })
            .await
            .unwrap();

        assert_eq!(store.rooms_for_property(a).await.unwrap(), vec![room.clone()]);
        assert!(store.rooms_for_property(b).await.unwrap().is_empty());

        store.delete_room(room.id).await.unwrap();
        store.delete_property(a).await.unwrap();
        store.delete_property(b).await.unwrap();
    }
}
