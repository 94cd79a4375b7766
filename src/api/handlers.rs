//! API handlers

use axum::{
    extract::{Path, State},
    http::header,
    response::IntoResponse,
    Json,
};
use bytes::Bytes;

use crate::api::AppState;
use crate::types::{Acknowledgement, Shipment};

/// List every shipment
#[utoipa::path(
    get,
    path = "/envios",
    tag = "envios",
    summary = "Listar todos los envíos",
    responses(
        (status = 200, description = "Shipment listing", body = [Shipment])
    )
)]
pub async fn list_shipments() -> Json<Vec<Shipment>> {
    tracing::debug!("Listing shipments");
    Json(Shipment::listing())
}

/// Register a new shipment
///
/// The body is accepted as-is: it is logged and never parsed, so empty or
/// malformed payloads get the same confirmation.
#[utoipa::path(
    post,
    path = "/envios",
    tag = "envios",
    summary = "Crear un nuevo envío",
    request_body(content = String, description = "Shipment payload", content_type = "application/json"),
    responses(
        (status = 200, description = "Shipment registered", body = Acknowledgement)
    )
)]
pub async fn create_shipment(body: Bytes) -> Json<Acknowledgement> {
    tracing::info!(body = %String::from_utf8_lossy(&body), "New shipment received");
    Json(Acknowledgement::registered())
}

/// Fetch a shipment by id
#[utoipa::path(
    get,
    path = "/envios/{id}",
    tag = "envios",
    summary = "Obtener un envío por ID",
    params(
        ("id" = String, Path, description = "Shipment id")
    ),
    responses(
        (status = 200, description = "Shipment record", body = Shipment)
    )
)]
pub async fn get_shipment(Path(id): Path<String>) -> Json<Shipment> {
    tracing::info!(%id, "Looking up shipment");
    Json(Shipment::lookup(id))
}

/// Serve the pre-rendered OpenAPI document
pub async fn api_doc(State(state): State<AppState>) -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/json")],
        state.api_doc.clone(),
    )
}
