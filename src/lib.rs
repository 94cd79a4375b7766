//! Envios - REST API for registering and querying shipments
//!
//! Routes mounted under the configured context path (`/api` by default):
//! - `GET /envios` lists shipments
//! - `POST /envios` registers a shipment
//! - `GET /envios/{id}` fetches a shipment
//! - `GET /api-doc` serves the OpenAPI document

pub mod api;
pub mod config;
pub mod error;
pub mod openapi;
pub mod types;

pub use error::{Error, Result};
