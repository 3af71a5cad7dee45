//! Database layer - connection pool, migrations and stores
//!
//! - One shared pool, no global connection handle
//! - Plain parameterized statements, no transactions
//! - Rely on DB constraints; no check-then-insert

pub mod memory;
pub mod migrations;
pub mod pool;
pub mod postgres;
pub mod repos;
pub mod store;

pub use memory::MemoryStore;
pub use pool::{create_pool, DEFAULT_MAX_CONNECTIONS};
pub use postgres::PgStore;
pub use store::{DbError, Store};
