//! Wire records returned by the shipment endpoints

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A shipment ("envío") as it appears on the wire.
///
/// Field order is significant: records serialize as
/// `{"id", "destinatario", "direccion", "estado"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Shipment {
    #[schema(example = "001")]
    pub id: String,

    #[serde(rename = "destinatario")]
    #[schema(example = "Juan Pérez")]
    pub recipient: String,

    #[serde(rename = "direccion")]
    #[schema(example = "Av. Siempre Viva 123")]
    pub address: String,

    #[serde(rename = "estado")]
    #[schema(example = "En tránsito")]
    pub status: String,
}

impl Shipment {
    fn new(id: impl Into<String>, recipient: &str, address: &str, status: &str) -> Self {
        Self {
            id: id.into(),
            recipient: recipient.to_string(),
            address: address.to_string(),
            status: status.to_string(),
        }
    }

    /// The fixed listing served by `GET /envios`.
    pub fn listing() -> Vec<Shipment> {
        vec![Shipment::new(
            "001",
            "Juan Pérez",
            "Av. Siempre Viva 123",
            "En tránsito",
        )]
    }

    /// The record served by `GET /envios/{id}`. Only `id` varies.
    pub fn lookup(id: impl Into<String>) -> Shipment {
        Shipment::new(id, "Cliente X", "Calle Falsa 123", "Entregado")
    }
}

/// Confirmation body for a registered shipment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Acknowledgement {
    #[serde(rename = "mensaje")]
    #[schema(example = "Envío registrado correctamente")]
    pub message: String,
}

impl Acknowledgement {
    pub fn registered() -> Self {
        Self {
            message: "Envío registrado correctamente".to_string(),
        }
    }
}
