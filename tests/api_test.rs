//! HTTP surface tests for the shipment API
//!
//! Requests go through the full router (nesting, tracing layer, handlers)
//! without binding a socket.

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use envios::api::{create_router, serve, AppState};
use envios::config::AppConfig;
use http_body_util::BodyExt;
use tower::ServiceExt; // for oneshot

fn default_config() -> AppConfig {
    let mut config = AppConfig::default();
    config.normalize().unwrap();
    config
}

fn router_for(config: &AppConfig) -> Router {
    create_router(AppState::new(config).unwrap())
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Option<String>, Vec<u8>) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .map(|v| v.to_str().unwrap().to_string());
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, content_type, bytes.to_vec())
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

fn post(uri: &str, body: impl Into<Body>) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(body.into())
        .unwrap()
}

#[tokio::test]
async fn test_list_returns_fixed_array() {
    let app = router_for(&default_config());

    let (status, content_type, body) = send(app, get("/api/envios")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(content_type.as_deref(), Some("application/json"));
    assert_eq!(
        String::from_utf8(body).unwrap(),
        r#"[{"id":"001","destinatario":"Juan Pérez","direccion":"Av. Siempre Viva 123","estado":"En tránsito"}]"#
    );
}

#[tokio::test]
async fn test_create_ignores_body() {
    let app = router_for(&default_config());
    let expected = r#"{"mensaje":"Envío registrado correctamente"}"#;

    let bodies: Vec<Body> = vec![
        Body::from(r#"{"id":"007","destinatario":"Ana"}"#),
        Body::empty(),
        Body::from("{not json"),
        Body::from(vec![0xff, 0xfe, 0x00]),
    ];

    for body in bodies {
        let (status, content_type, bytes) = send(app.clone(), post("/api/envios", body)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(content_type.as_deref(), Some("application/json"));
        assert_eq!(String::from_utf8(bytes).unwrap(), expected);
    }
}

#[tokio::test]
async fn test_create_without_content_type() {
    let app = router_for(&default_config());
    let request = Request::builder()
        .method("POST")
        .uri("/api/envios")
        .body(Body::from("plain text"))
        .unwrap();

    let (status, _, bytes) = send(app, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        String::from_utf8(bytes).unwrap(),
        r#"{"mensaje":"Envío registrado correctamente"}"#
    );
}

#[tokio::test]
async fn test_get_by_id_echoes_id() {
    let app = router_for(&default_config());

    let (status, content_type, body) = send(app.clone(), get("/api/envios/42")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(content_type.as_deref(), Some("application/json"));
    assert_eq!(
        String::from_utf8(body).unwrap(),
        r#"{"id":"42","destinatario":"Cliente X","direccion":"Calle Falsa 123","estado":"Entregado"}"#
    );

    let (status, _, body) = send(app, get("/api/envios/abc")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        String::from_utf8(body).unwrap(),
        r#"{"id":"abc","destinatario":"Cliente X","direccion":"Calle Falsa 123","estado":"Entregado"}"#
    );
}

#[tokio::test]
async fn test_get_by_id_decodes_path_segment() {
    let app = router_for(&default_config());

    let (status, _, body) = send(app, get("/api/envios/a%20b%22c")).await;

    assert_eq!(status, StatusCode::OK);
    let value: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(value["id"], "a b\"c");
    assert_eq!(value["estado"], "Entregado");
}

#[tokio::test]
async fn test_api_doc_is_served() {
    let app = router_for(&default_config());

    let (status, content_type, body) = send(app, get("/api/api-doc")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(content_type.as_deref(), Some("application/json"));

    let doc: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(doc["info"]["title"], "API de Envíos");
    assert_eq!(doc["info"]["version"], "1.0.0");
    assert!(doc["paths"]["/envios"]["get"].is_object());
    assert!(doc["paths"]["/envios"]["post"].is_object());
    assert!(doc["paths"]["/envios/{id}"]["get"].is_object());
}

#[tokio::test]
async fn test_unmatched_routes_use_framework_defaults() {
    let app = router_for(&default_config());

    let (status, _, _) = send(app.clone(), get("/envios")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _, _) = send(app.clone(), get("/api/unknown")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let delete = Request::builder()
        .method("DELETE")
        .uri("/api/envios")
        .body(Body::empty())
        .unwrap();
    let (status, _, _) = send(app, delete).await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn test_custom_context_path_moves_routes() {
    let mut config = AppConfig::default();
    config.server.context_path = "/v1/".to_string();
    config.api_doc.path = "docs".to_string();
    config.normalize().unwrap();
    let app = router_for(&config);

    let (status, _, _) = send(app.clone(), get("/v1/envios")).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _, body) = send(app.clone(), get("/v1/docs")).await;
    assert_eq!(status, StatusCode::OK);
    let doc: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(doc["servers"][0]["url"], "/v1");

    let (status, _, _) = send(app, get("/api/envios")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_root_context_path() {
    let mut config = AppConfig::default();
    config.server.context_path = "/".to_string();
    config.normalize().unwrap();
    let app = router_for(&config);

    let (status, _, body) = send(app.clone(), get("/envios/7")).await;
    assert_eq!(status, StatusCode::OK);
    let value: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(value["id"], "7");

    let (status, _, _) = send(app, get("/api-doc")).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_serve_stops_on_shutdown() {
    let mut config = AppConfig::default();
    config.server.host = "127.0.0.1".to_string();
    config.server.port = 0;
    config.normalize().unwrap();

    serve(&config, async {}).await.unwrap();
}

#[tokio::test]
async fn test_get_by_id_path_decoding_edges() {
    let app = router_for(&default_config());

    let (status, _, body) = send(app.clone(), get("/api/envios/a%2Fb")).await;
    assert_eq!(status, StatusCode::OK);
    let value: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(value["id"], "a/b");

    // Path<String> needs UTF-8 after decoding
    let (status, _, _) = send(app, get("/api/envios/%FF")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}
