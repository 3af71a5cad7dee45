//! Property endpoints (`/imoveis`)

use std::sync::Arc;

use axum::{
    extract::State,
    routing::{get, put},
    Json, Router,
};
use serde::{Deserialize, Serialize};

use super::rooms::RoomResponse;
use super::StatusResponse;
use crate::http::error::ApiError;
use crate::http::extractors::{JsonBody, ValidId};
use crate::http::server::AppState;
use crate::models::{
    format_purchase_date, parse_purchase_date, DatePolicy, PropertyFields, PropertyWithRooms,
    ValidationError,
};

const CREATED: &str = "Imóvel criado com sucesso!";
const UPDATED: &str = "Imóvel atualizado com sucesso!";
const DELETED: &str = "Imóvel deletado com sucesso!";

/// Create/update property request. Missing fields decode as empty strings.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct PropertyRequest {
    pub descricao: String,
    #[serde(rename = "dataCompra")]
    pub data_compra: String,
    pub endereco: String,
}

impl PropertyRequest {
    fn into_fields(self, policy: DatePolicy) -> Result<PropertyFields, ValidationError> {
        let purchase_date = parse_purchase_date(&self.data_compra, policy)?;
        Ok(PropertyFields {
            description: self.descricao,
            purchase_date,
            address: self.endereco,
        })
    }
}

/// Create property response
#[derive(Debug, Serialize)]
pub struct CreatePropertyResponse {
    pub status: &'static str,
    pub id: i32,
}

/// Property response with nested rooms
#[derive(Debug, Serialize)]
pub struct PropertyResponse {
    pub id: i32,
    pub descricao: String,
    #[serde(rename = "dataCompra")]
    pub data_compra: String,
    pub endereco: String,
    pub comodos: Vec<RoomResponse>,
}

impl From<PropertyWithRooms> for PropertyResponse {
    fn from(p: PropertyWithRooms) -> Self {
        Self {
            id: p.property.id,
            descricao: p.property.description,
            data_compra: format_purchase_date(&p.property.purchase_date),
            endereco: p.property.address,
            comodos: p.rooms.into_iter().map(RoomResponse::from).collect(),
        }
    }
}

/// POST /imoveis - create a property (date as yyyy-MM-dd)
async fn create_property(
    State(state): State<Arc<AppState>>,
    JsonBody(req): JsonBody<PropertyRequest>,
) -> Result<Json<CreatePropertyResponse>, ApiError> {
    let fields = req.into_fields(DatePolicy::DateOnly)?;
    let id = state.store.create_property(&fields).await?;
    tracing::info!(id, "Property created");

    Ok(Json(CreatePropertyResponse {
        status: CREATED,
        id,
    }))
}

/// GET /imoveis - list properties, each with its rooms
///
/// One query for the properties, then one per property for its rooms. The
/// first failing query aborts the whole response.
async fn list_properties(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<PropertyResponse>>, ApiError> {
    let properties = state.store.list_properties().await?;

    let mut response = Vec::with_capacity(properties.len());
    for property in properties {
        let rooms = state.store.rooms_for_property(property.id).await?;
        response.push(PropertyResponse::from(PropertyWithRooms { property, rooms }));
    }

    Ok(Json(response))
}

/// PUT /imoveis/{id} - overwrite a property (date as yyyy-MM-dd or RFC 3339)
async fn update_property(
    State(state): State<Arc<AppState>>,
    ValidId(id): ValidId,
    JsonBody(req): JsonBody<PropertyRequest>,
) -> Result<Json<StatusResponse>, ApiError> {
    let fields = req.into_fields(DatePolicy::DateOrTimestamp)?;
    let rows = state.store.update_property(id, &fields).await?;
    tracing::debug!(id, rows, "Property updated");

    Ok(Json(StatusResponse { status: UPDATED }))
}

/// DELETE /imoveis/{id}
async fn delete_property(
    State(state): State<Arc<AppState>>,
    ValidId(id): ValidId,
) -> Result<Json<StatusResponse>, ApiError> {
    let rows = state.store.delete_property(id).await?;
    tracing::debug!(id, rows, "Property deleted");

    Ok(Json(StatusResponse { status: DELETED }))
}

/// Property routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/imoveis", get(list_properties).post(create_property))
        .route("/imoveis/{id}", put(update_property).delete(delete_property))
}
