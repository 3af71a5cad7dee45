//! Room endpoints (`/comodos`)

use std::sync::Arc;

use axum::{
    extract::State,
    routing::{delete, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};

use super::StatusResponse;
use crate::http::error::ApiError;
use crate::http::extractors::{JsonBody, ValidId};
use crate::http::server::AppState;
use crate::models::{Room, RoomFields};

const DELETED: &str = "Cômodo deletado com sucesso!";

/// Create room request, bound as-is. A missing `imovel_id` decodes as 0 and
/// is left for the foreign key to reject.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CreateRoomRequest {
    pub nome: String,
    pub imovel_id: i32,
}

impl From<CreateRoomRequest> for RoomFields {
    fn from(req: CreateRoomRequest) -> Self {
        Self {
            name: req.nome,
            property_id: req.imovel_id,
        }
    }
}

/// Room response
#[derive(Debug, Serialize)]
pub struct RoomResponse {
    pub id: i32,
    pub nome: String,
    pub imovel_id: i32,
}

impl From<Room> for RoomResponse {
    fn from(r: Room) -> Self {
        Self {
            id: r.id,
            nome: r.name,
            imovel_id: r.property_id,
        }
    }
}

/// POST /comodos - create a room
async fn create_room(
    State(state): State<Arc<AppState>>,
    JsonBody(req): JsonBody<CreateRoomRequest>,
) -> Result<Json<RoomResponse>, ApiError> {
    let room = state.store.create_room(RoomFields::from(req)).await?;
    tracing::info!(id = room.id, property_id = room.property_id, "Room created");

    Ok(Json(RoomResponse::from(room)))
}

/// DELETE /comodos/{id}
async fn delete_room(
    State(state): State<Arc<AppState>>,
    ValidId(id): ValidId,
) -> Result<Json<StatusResponse>, ApiError> {
    let rows = state.store.delete_room(id).await?;
    tracing::debug!(id, rows, "Room deleted");

    Ok(Json(StatusResponse { status: DELETED }))
}

/// Room routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/comodos", post(create_room))
        .route("/comodos/{id}", delete(delete_room))
}
