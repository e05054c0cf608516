use std::net::SocketAddr;

use axum::Router;
use reqwest::StatusCode as HttpStatusCode;
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;

use server::routes::{self, ServerState};

fn cors() -> CorsLayer { CorsLayer::very_permissive() }

struct TestApp {
    base_url: String,
}

async fn start_server() -> anyhow::Result<TestApp> {
    let db = models::db::connect_in_memory().await?;
    service::seed::seed_demo_data(&db).await?;

    let app: Router = routes::build_router(ServerState { db }, cors());
    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    let base_url = format!("http://{}:{}", addr.ip(), addr.port());

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await { eprintln!("server error: {}", e); }
    });

    Ok(TestApp { base_url })
}

#[tokio::test]
async fn e2e_health_and_cors() -> anyhow::Result<()> {
    let app = start_server().await?;
    let client = reqwest::Client::new();

    let res = client
        .get(format!("{}/health", app.base_url))
        .header("Origin", "http://localhost:3000")
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    assert!(res.headers().contains_key("access-control-allow-origin"));
    let body: Value = res.json().await?;
    assert_eq!(body["status"], "ok");
    Ok(())
}

#[tokio::test]
async fn e2e_animal_lifecycle() -> anyhow::Result<()> {
    let app = start_server().await?;
    let client = reqwest::Client::new();
    let animals = format!("{}/animals", app.base_url);

    // form-style payload: every value a string
    let res = client
        .post(&animals)
        .json(&json!({"name": "Luna", "age": "6", "gender": "Female", "species_name": "Tiger", "zoo_id": "2"}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::CREATED);
    let body: Value = res.json().await?;
    assert_eq!(body["message"], "Animal added");

    let listed: Vec<Value> = client
        .get(&animals)
        .query(&[("species_name", "Tiger"), ("sort_by", "age"), ("sort_order", "desc")])
        .send()
        .await?
        .json()
        .await?;
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0]["name"], "Luna");
    assert_eq!(listed[0]["zoo_name"], "Bronx Zoo");
    let id = listed[0]["animal_id"].as_i64().unwrap_or_default();

    let res = client
        .put(format!("{animals}/{id}"))
        .json(&json!({"name": "Luna", "age": 4, "gender": "Female", "species_name": "Tiger", "zoo_id": 1}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::OK);

    let in_zoo1: Vec<Value> = client.get(&animals).query(&[("zoo_id", "1")]).send().await?.json().await?;
    assert!(in_zoo1.iter().any(|a| a["animal_id"] == id && a["age"] == 4.0));

    let res = client.delete(format!("{animals}/{id}")).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let res = client.delete(format!("{animals}/{id}")).send().await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn e2e_unknown_routes_and_ids() -> anyhow::Result<()> {
    let app = start_server().await?;
    let client = reqwest::Client::new();

    let res = client.get(format!("{}/zoos/404", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);

    let res = client.get(format!("{}/zoos/abc", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);
    let body: Value = res.json().await?;
    assert_eq!(body["message"], "Resource not found");

    let res = client.get(format!("{}/nope", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);
    Ok(())
}
