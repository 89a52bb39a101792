//! API integration tests

use acervo_server::{api, config::AppConfig, repository::Ledger, AppState};
use axum::{
    body::{to_bytes, Body},
    http::{Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

/// Router over a freshly seeded ledger
fn app() -> Router {
    api::create_router(AppState::new(
        AppConfig::default(),
        Ledger::seeded().expect("Failed to seed ledger"),
    ))
}

/// Send a request, returning status and parsed JSON body
async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .expect("Failed to build request"),
        None => builder.body(Body::empty()).expect("Failed to build request"),
    };

    let response = app
        .clone()
        .oneshot(request)
        .await
        .expect("Failed to send request");
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("Failed to parse response")
    };
    (status, value)
}

async fn copies_of(app: &Router, title_id: u64) -> Vec<Value> {
    let (_, body) = send(app, Method::GET, "/acervo", None).await;
    body.as_array()
        .expect("copy list")
        .iter()
        .filter(|c| c["idlivro"] == title_id)
        .cloned()
        .collect()
}

#[tokio::test]
async fn test_health_check() {
    let app = app();
    let (status, body) = send(&app, Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_create_title_allocates_copies() {
    let app = app();
    let (status, body) = send(
        &app,
        Method::POST,
        "/livros/new",
        Some(json!({
            "nome": "Memórias Póstumas",
            "categoria": "romance",
            "tags": "realismo,classico",
            "quantidade_total": "3",
            "idbiblioteca": "0"
        })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["id"], 1);
    assert_eq!(body["tags"], json!(["realismo", "classico"]));
    assert_eq!(body["quantidade_total"], 3);

    let copies = copies_of(&app, 1).await;
    let ids: Vec<u64> = copies.iter().map(|c| c["id"].as_u64().unwrap()).collect();
    assert_eq!(ids, vec![10, 11, 12]);
    assert!(copies.iter().all(|c| c["idUsuario"] == -1 && c["idbiblioteca"] == 0));
}

#[tokio::test]
async fn test_create_title_missing_fields() {
    let app = app();
    let (status, body) = send(
        &app,
        Method::POST,
        "/livros/new",
        Some(json!({ "nome": "Sem tags", "categoria": "x", "quantidade_total": 1 })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "BadValue");
    let (_, titles) = send(&app, Method::GET, "/livros", None).await;
    assert_eq!(titles.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_quantity_reconciliation_scenario() {
    let app = app();

    let (status, body) = send(
        &app,
        Method::PUT,
        "/livros/0",
        Some(json!({ "quantidade_total": 7 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["quantidade_total"], 7);
    let ids: Vec<u64> = copies_of(&app, 0)
        .await
        .iter()
        .map(|c| c["id"].as_u64().unwrap())
        .collect();
    assert_eq!(ids, vec![3, 4, 5, 6, 7, 8, 9]);

    let (status, body) = send(
        &app,
        Method::PUT,
        "/livros/0",
        Some(json!({ "quantidade_total": 20 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["quantidade_total"], 20);
    let copies = copies_of(&app, 0).await;
    assert_eq!(copies.len(), 20);
    assert!(copies.iter().all(|c| c["idbiblioteca"] == 0 && c["idUsuario"] == -1));
}

#[tokio::test]
async fn test_reduction_blocked_by_loans() {
    let app = app();
    for id in 0..9 {
        let (status, _) = send(
            &app,
            Method::PUT,
            &format!("/acervo/status/{}", id),
            Some(json!({ "idUsuario": 2 })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }

    let (status, body) = send(
        &app,
        Method::PUT,
        "/livros/0",
        Some(json!({ "nome": "outro nome", "quantidade_total": 8 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "NotEnoughCopies");

    let (_, title) = send(&app, Method::GET, "/livros/0", None).await;
    assert_eq!(title["nome"], "livro de romance");
    assert_eq!(title["quantidade_total"], 10);
    assert_eq!(title["tagsString"], "classico,finaltriste");
    assert_eq!(copies_of(&app, 0).await.len(), 10);
}

#[tokio::test]
async fn test_update_unknown_title() {
    let app = app();
    let (status, _) = send(
        &app,
        Method::PUT,
        "/livros/42",
        Some(json!({ "quantidade_total": 1 })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_title_removes_copies() {
    let app = app();
    let (status, body) = send(&app, Method::DELETE, "/livros/0", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["mensagem"], "Deletado");
    assert_eq!(body["livro"]["id"], 0);

    assert!(copies_of(&app, 0).await.is_empty());
    let (_, users) = send(&app, Method::GET, "/usuarios", None).await;
    assert_eq!(users.as_array().unwrap().len(), 3);
    let (_, libraries) = send(&app, Method::GET, "/bibliotecas", None).await;
    assert_eq!(libraries.as_array().unwrap().len(), 1);

    let (status, _) = send(&app, Method::DELETE, "/livros/0", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_copy_ids_not_reused_across_deletes() {
    let app = app();
    let title = |name: &str| {
        json!({
            "nome": name,
            "categoria": "c",
            "tags": ["t"],
            "quantidade_total": 1,
            "idbiblioteca": 0
        })
    };

    let (_, first) = send(&app, Method::POST, "/livros/new", Some(title("um"))).await;
    let first_id = first["id"].as_u64().unwrap();
    let first_copy = copies_of(&app, first_id).await[0]["id"].clone();
    send(&app, Method::POST, "/livros/new", Some(title("dois"))).await;
    send(&app, Method::DELETE, &format!("/livros/{}", first_id), None).await;
    let (_, third) = send(&app, Method::POST, "/livros/new", Some(title("tres"))).await;

    let third_copy = copies_of(&app, third["id"].as_u64().unwrap()).await[0]["id"].clone();
    assert_ne!(third_copy, first_copy);
}

#[tokio::test]
async fn test_borrow_status_toggle() {
    let app = app();

    let (status, body) = send(
        &app,
        Method::PUT,
        "/acervo/status/5",
        Some(json!({ "idUsuario": "3" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["idUsuario"], 3);

    let (_, listing) = send(&app, Method::GET, "/acervo", None).await;
    assert_eq!(listing[5]["status"], "Emprestado (User 3)");
    assert_eq!(listing[5]["nomeLivro"], "livro de romance");
    assert_eq!(listing[5]["cnpjBiblioteca"], "2y9167391693816");

    let (status, body) = send(
        &app,
        Method::PUT,
        "/acervo/status/5",
        Some(json!({ "idUsuario": -1 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["idUsuario"], -1);
}

#[tokio::test]
async fn test_borrow_unknown_user_or_copy() {
    let app = app();
    let (status, body) = send(
        &app,
        Method::PUT,
        "/acervo/status/5",
        Some(json!({ "idUsuario": 99 })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "NoSuchUser");

    let (_, copy) = send(&app, Method::GET, "/acervo/5", None).await;
    assert_eq!(copy["item"]["idUsuario"], -1);
    assert_eq!(copy["itemName"], "livro de romance");

    let (status, _) = send(
        &app,
        Method::PUT,
        "/acervo/status/500",
        Some(json!({ "idUsuario": 1 })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_user_crud() {
    let app = app();

    let (status, created) = send(
        &app,
        Method::POST,
        "/usuarios",
        Some(json!({ "nome": "Pessoa4", "cpf": "321", "idade": 33, "nivel": 2 })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["id"], 4);

    let (status, updated) = send(
        &app,
        Method::PUT,
        "/usuarios/4",
        Some(json!({ "nome": "", "idade": 34 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["nome"], "Pessoa4");
    assert_eq!(updated["idade"], 34);

    let (_, listing) = send(&app, Method::GET, "/usuarios", None).await;
    assert_eq!(listing[3]["nivelLabel"], "Funcionário");

    let (status, body) = send(&app, Method::DELETE, "/usuarios/4", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["mensagem"], "Deletado");

    let (status, _) = send(&app, Method::GET, "/usuarios/4", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, _) = send(&app, Method::PUT, "/usuarios/4", Some(json!({ "nome": "x" }))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_create_user_missing_fields() {
    let app = app();
    let (status, _) = send(
        &app,
        Method::POST,
        "/usuarios",
        Some(json!({ "nome": "Pessoa4", "cpf": "321", "nivel": 1 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_library_crud_without_cascade() {
    let app = app();

    let (status, created) = send(
        &app,
        Method::POST,
        "/bibliotecas",
        Some(json!({ "cnpj": "11.111.111/0001-11", "acervo": 80, "cep": "20000-000" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["id"], 1);

    let (status, updated) = send(
        &app,
        Method::PUT,
        "/bibliotecas/1",
        Some(json!({ "cep": "", "acervo": "90" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["cep"], "20000-000");
    assert_eq!(updated["acervo"], 90);

    let (status, body) = send(&app, Method::DELETE, "/bibliotecas/0", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["mensagem"], "Deletada");

    let copies = copies_of(&app, 0).await;
    assert_eq!(copies.len(), 10);
    assert!(copies.iter().all(|c| c["cnpjBiblioteca"] == "Desconhecido"));

    let (status, _) = send(&app, Method::DELETE, "/bibliotecas/0", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_access_levels() {
    let app = app();
    let (status, body) = send(&app, Method::GET, "/niveis", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body[0], json!({ "id": 1, "nome": "Leitor/Cliente" }));
}

#[tokio::test]
async fn test_malformed_body_is_validation_error() {
    let app = app();
    let (status, body) = send(
        &app,
        Method::POST,
        "/livros/new",
        Some(json!({
            "nome": "Iracema",
            "categoria": "romance",
            "tags": ["indianismo"],
            "quantidade_total": "dez",
            "idbiblioteca": 0
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "BadValue");
    assert_eq!(body["code"], 18);

    let (status, body) = send(
        &app,
        Method::PUT,
        "/livros/0",
        Some(json!({ "tags": 5 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "BadValue");

    let (status, _) = send(&app, Method::GET, "/livros", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(copies_of(&app, 0).await.len(), 10);
}

#[tokio::test]
async fn test_oversized_quantity_rejected() {
    let app = app();
    let (status, body) = send(
        &app,
        Method::POST,
        "/livros/new",
        Some(json!({
            "nome": "Enciclopédia",
            "categoria": "referencia",
            "tags": ["volume"],
            "quantidade_total": 4294967295u64,
            "idbiblioteca": 0
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "BadValue");

    let (status, _) = send(
        &app,
        Method::PUT,
        "/livros/0",
        Some(json!({ "quantidade_total": 4294967295u64 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, titles) = send(&app, Method::GET, "/livros", None).await;
    assert_eq!(titles.as_array().map(Vec::len), Some(1));
    assert_eq!(copies_of(&app, 0).await.len(), 10);
}

#[tokio::test]
async fn test_status_of_unknown_copy_without_user_id() {
    let app = app();
    let (status, body) = send(&app, Method::PUT, "/acervo/status/999", Some(json!({}))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "NoSuchData");
}
