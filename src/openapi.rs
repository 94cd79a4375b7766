//! OpenAPI document for the shipment API

use utoipa::openapi::server::Server;
use utoipa::OpenApi;

use crate::api::handlers;
use crate::config::AppConfig;
use crate::types::{Acknowledgement, Shipment};

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::list_shipments,
        handlers::create_shipment,
        handlers::get_shipment
    ),
    components(schemas(Shipment, Acknowledgement)),
    tags((name = "envios", description = "Gestión de Envíos"))
)]
pub struct ApiDoc;

/// Build the document with the configured info block and server URL.
pub fn document(config: &AppConfig) -> utoipa::openapi::OpenApi {
    let mut doc = ApiDoc::openapi();

    doc.info.title = config.api_doc.title.clone();
    doc.info.version = config.api_doc.version.clone();
    doc.info.description = Some(config.api_doc.description.clone());

    let server_url = if config.server.context_path.is_empty() {
        "/".to_string()
    } else {
        config.server.context_path.clone()
    };
    doc.servers = Some(vec![Server::new(server_url)]);

    doc
}
