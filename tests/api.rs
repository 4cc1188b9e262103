use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::header::CONTENT_TYPE;
use axum::http::{Method, Request, StatusCode};
use enquete_tv::handlers::create_router;
use enquete_tv::storage::JsonFileStorage;
use enquete_tv::store::PollStore;
use serde_json::{Value, json};
use std::path::Path;
use std::sync::Arc;
use tempfile::TempDir;
use tower::util::ServiceExt;

async fn app_over(path: &Path) -> Router {
    let store = PollStore::open(Box::new(JsonFileStorage::new(path)))
        .await
        .unwrap();
    create_router(Arc::new(store))
}

async fn test_app() -> (Router, TempDir) {
    let dir = TempDir::new().unwrap();
    let app = app_over(&dir.path().join("votos.json")).await;
    (app, dir)
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

async fn post_vote(app: &Router, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(Method::POST)
        .uri("/votar")
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn resultados_returns_the_seeded_poll() {
    let (app, _dir) = test_app().await;

    let (status, body) = get(&app, "/resultados").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["pergunta"].as_str().unwrap().contains("TV"));
    assert_eq!(body["totalVotos"], 0);

    let options = body["opcoes"].as_array().unwrap();
    assert_eq!(options.len(), 4);
    for option in options {
        assert_eq!(option["votos"], 0);
        assert_eq!(option["porcentagem"], 0);
        assert!(option["id"].is_string());
        assert!(option["texto"].is_string());
    }
}

#[tokio::test]
async fn votar_registers_a_vote_and_returns_fresh_results() {
    let (app, _dir) = test_app().await;

    let (status, body) = post_vote(&app, json!({ "opcao": "jogos" })).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["sucesso"], true);
    assert_eq!(body["opcao"]["id"], "jogos");
    assert_eq!(body["opcao"]["votos"], 1);
    assert_eq!(body["totalVotos"], 1);
    assert_eq!(body["resultados"]["totalVotos"], 1);

    // The read endpoint agrees.
    let (_, results) = get(&app, "/resultados").await;
    assert_eq!(results["totalVotos"], 1);
    assert_eq!(results["opcoes"][0]["votos"], 1);
    assert_eq!(results["opcoes"][0]["porcentagem"], 100);
}

#[tokio::test]
async fn votar_unknown_option_is_rejected_and_nothing_changes() {
    let (app, _dir) = test_app().await;

    let (status, body) = post_vote(&app, json!({ "opcao": "nao-existe" })).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["erro"].is_string());
    assert_eq!(body["codigo"], "opcao_desconhecida");

    let (_, results) = get(&app, "/resultados").await;
    assert_eq!(results["totalVotos"], 0);
}

#[tokio::test]
async fn votar_missing_field_is_a_bad_request() {
    let (app, _dir) = test_app().await;

    for body in [json!({}), json!({ "opcao": "" }), json!({ "opcao": "   " })] {
        let (status, body) = post_vote(&app, body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["erro"].is_string());
        assert_eq!(body["codigo"], "opcao_ausente");
    }
}

#[tokio::test]
async fn votes_survive_a_restart() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("votos.json");

    {
        let app = app_over(&path).await;
        post_vote(&app, json!({ "opcao": "enquetes" })).await;
        post_vote(&app, json!({ "opcao": "enquetes" })).await;
        post_vote(&app, json!({ "opcao": "cameras" })).await;
    }

    // New store over the same file, as after a process restart.
    let app = app_over(&path).await;
    let (_, results) = get(&app, "/resultados").await;

    assert_eq!(results["totalVotos"], 3);
    assert_eq!(results["opcoes"][1]["votos"], 2);
    assert_eq!(results["opcoes"][1]["porcentagem"], 67);
    assert_eq!(results["opcoes"][3]["votos"], 1);
    assert_eq!(results["opcoes"][3]["porcentagem"], 33);
}

#[tokio::test]
async fn root_route_describes_the_api() {
    let (app, _dir) = test_app().await;

    let (status, body) = get(&app, "/").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert!(body["endpoints"]["votar"].is_string());
}
