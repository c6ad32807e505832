#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use axum_test::TestServer;
use chrono::{DateTime, Utc};
use serde_json::{Value, json};
use shelter_stats::api::routes::stats_routes;
use shelter_stats::infrastructure::http::HttpStoreClient;
use shelter_stats::routes::service_routes;
use shelter_stats::state::AppState;
use uuid::Uuid;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub fn client_for(server: &MockServer) -> HttpStoreClient {
    HttpStoreClient::new(&server.uri(), Duration::from_secs(5)).unwrap()
}

pub fn create_test_state(server: &MockServer) -> AppState {
    AppState::new(Arc::new(client_for(server)), 4, 12)
}

/// Service routes without the rate limiter, which needs
/// connect info the test transport does not provide.
pub fn create_test_server(state: AppState) -> TestServer {
    let app = service_routes(stats_routes()).with_state(state);

    TestServer::new(app).unwrap()
}

pub async fn mount_json(server: &MockServer, route: &str, body: Value) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

pub async fn mount_status(server: &MockServer, route: &str, status: u16) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(status))
        .mount(server)
        .await;
}

pub fn days_ago(days: i64) -> DateTime<Utc> {
    Utc::now() - chrono::Duration::days(days)
}

pub fn adoption_json(status: &str, adopted_at: DateTime<Utc>, publication: Option<Uuid>) -> Value {
    json!({
        "id_adopcion": Uuid::new_v4(),
        "fecha_adopcion": adopted_at.to_rfc3339(),
        "estado": status,
        "id_publicacion": publication,
    })
}

/// Mounts publication `publication` pointing at a new animal of `species`,
/// optionally housed in `shelter`.
pub async fn mount_animal_chain(
    server: &MockServer,
    publication: Uuid,
    species: &str,
    shelter: Option<Uuid>,
) {
    let animal = Uuid::new_v4();

    mount_json(
        server,
        &format!("/publicaciones/{publication}"),
        json!({
            "id_publicacion": publication,
            "fecha_publicacion": "2024-01-01T00:00:00",
            "id_animal": animal,
        }),
    )
    .await;

    mount_json(
        server,
        &format!("/animals/{animal}"),
        json!({
            "id_animal": animal,
            "especie": species,
            "id_refugio": shelter,
        }),
    )
    .await;
}
