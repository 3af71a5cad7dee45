//! imoveis-server: HTTP CRUD service for properties and their rooms
//!
//! Properties (`imoveis`) and rooms (`comodos`) are stored in PostgreSQL and
//! exposed as JSON over axum. Handlers reach storage only through the
//! [`db::Store`] trait carried in router state.

pub mod db;
pub mod http;
pub mod models;

pub use db::{DbError, MemoryStore, PgStore, Store};
pub use http::{run_server, ServerConfig};
