//! Route handlers organized by resource

pub mod health;
pub mod properties;
pub mod rooms;

use serde::Serialize;

/// `{"status": "..."}` acknowledgement for writes with no other payload
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
}
