use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use server::routes::{self, ServerState};

fn cors() -> tower_http::cors::CorsLayer { tower_http::cors::CorsLayer::very_permissive() }

/// Router over a fresh in-memory store seeded with the demo data set
/// (zoos 1..=3, zoo 3 without staff).
async fn build_app() -> anyhow::Result<Router> {
    let db = models::db::connect_in_memory().await?;
    service::seed::seed_demo_data(&db).await?;
    Ok(routes::build_router(ServerState { db }, cors()))
}

async fn send(app: &Router, req: Request<Body>) -> anyhow::Result<(StatusCode, Value)> {
    let resp = app.clone().oneshot(req).await?;
    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await?;
    let body = if bytes.is_empty() { Value::Null } else { serde_json::from_slice(&bytes)? };
    Ok((status, body))
}

async fn get(app: &Router, uri: &str) -> anyhow::Result<(StatusCode, Value)> {
    send(app, Request::builder().uri(uri).body(Body::empty())?).await
}

async fn send_json(app: &Router, method: &str, uri: &str, body: Value) -> anyhow::Result<(StatusCode, Value)> {
    let req = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(&body)?))?;
    send(app, req).await
}

fn rows(body: &Value) -> &Vec<Value> {
    body.as_array().expect("json array")
}

#[tokio::test]
async fn test_health() -> anyhow::Result<()> {
    let app = build_app().await?;
    let (status, body) = get(&app, "/health").await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    Ok(())
}

#[tokio::test]
async fn test_list_zoos() -> anyhow::Result<()> {
    let app = build_app().await?;
    let (status, body) = get(&app, "/zoos").await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body[0], json!({"zoo_id": 1, "name": "San Diego Zoo"}));
    assert_eq!(rows(&body).len(), 3);
    Ok(())
}

#[tokio::test]
async fn test_zoo_detail_and_missing() -> anyhow::Result<()> {
    let app = build_app().await?;
    let (status, body) = get(&app, "/zoos/2").await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"name": "Bronx Zoo", "location": "New York"}));

    let (status, body) = get(&app, "/zoos/99").await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"message": "Zoo not found"}));
    Ok(())
}

#[tokio::test]
async fn test_zoo_employees() -> anyhow::Result<()> {
    let app = build_app().await?;
    let (status, body) = get(&app, "/zoos/1/employees").await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(rows(&body).len(), 2);
    let first = &body[0];
    for key in ["emp_id", "first_name", "last_name", "job_title", "job_description"] {
        assert!(first.get(key).is_some(), "missing {key}");
    }
    assert!(first.get("zoo_id").is_none());

    let (status, body) = get(&app, "/zoos/3/employees").await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));

    let (status, body) = get(&app, "/zoos/77/employees").await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Zoo not found");
    Ok(())
}

#[tokio::test]
async fn test_list_animals_unfiltered_has_zoo_name() -> anyhow::Result<()> {
    let app = build_app().await?;
    let (status, body) = get(&app, "/animals").await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(rows(&body).len(), 7);
    assert!(rows(&body).iter().all(|a| a["zoo_name"].is_string()));
    Ok(())
}

#[tokio::test]
async fn test_list_animals_filters() -> anyhow::Result<()> {
    let app = build_app().await?;

    let (_, body) = get(&app, "/animals?species_name=Lion").await?;
    assert_eq!(rows(&body).len(), 3);
    assert!(rows(&body).iter().all(|a| a["species_name"] == "Lion"));

    let (_, body) = get(&app, "/animals?zoo_id=1").await?;
    assert_eq!(rows(&body).len(), 4);
    assert!(rows(&body).iter().all(|a| a["zoo_id"] == 1 && a.get("zoo_name").is_none()));

    let (_, body) = get(&app, "/animals?minAge=2&maxAge=5").await?;
    assert_eq!(rows(&body).len(), 4);
    assert!(rows(&body).iter().all(|a| {
        let age = a["age"].as_f64().unwrap();
        (2.0..=5.0).contains(&age)
    }));

    let (_, body) = get(&app, "/animals?gender=Female&species_name=Elephant").await?;
    let names: Vec<_> = rows(&body).iter().map(|a| a["name"].as_str().unwrap()).collect();
    assert_eq!(names, vec!["Ellie"]);
    Ok(())
}

#[tokio::test]
async fn test_list_animals_browser_style_empty_params() -> anyhow::Result<()> {
    let app = build_app().await?;
    let (status, body) = get(
        &app,
        "/animals?species_name=&zoo_id=&minAge=&maxAge=&gender=&sort_by=&sort_order=asc",
    )
    .await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(rows(&body).len(), 7);
    Ok(())
}

#[tokio::test]
async fn test_list_animals_sorting() -> anyhow::Result<()> {
    let app = build_app().await?;
    let (_, body) = get(&app, "/animals?sort_by=age&sort_order=desc").await?;
    let ages: Vec<f64> = rows(&body).iter().map(|a| a["age"].as_f64().unwrap()).collect();
    assert_eq!(ages.len(), 7);
    assert!(ages.windows(2).all(|w| w[0] >= w[1]));

    let (_, body) = get(&app, "/animals?sort_by=name").await?;
    let names: Vec<String> = rows(&body).iter().map(|a| a["name"].as_str().unwrap().to_string()).collect();
    let mut sorted = names.clone();
    sorted.sort();
    assert_eq!(names, sorted);

    let (status, body) = get(&app, "/animals?sort_by=weight&sort_order=desc").await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(rows(&body).len(), 7);
    Ok(())
}

#[tokio::test]
async fn test_list_animals_bad_number_is_400() -> anyhow::Result<()> {
    let app = build_app().await?;
    let (status, body) = get(&app, "/animals?minAge=old").await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].as_str().unwrap().contains("minAge"));
    Ok(())
}

#[tokio::test]
async fn test_create_animal() -> anyhow::Result<()> {
    let app = build_app().await?;
    let (status, body) = send_json(
        &app,
        "POST",
        "/animals",
        json!({"animal_id": null, "name": "Knut", "age": "0.5", "gender": "Male", "species_name": "Penguin", "zoo_id": "3"}),
    )
    .await?;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body, json!({"message": "Animal added"}));

    let (_, body) = get(&app, "/animals?zoo_id=3").await?;
    assert_eq!(rows(&body).len(), 1);
    assert_eq!(body[0]["name"], "Knut");
    assert_eq!(body[0]["age"], 0.5);
    Ok(())
}

#[tokio::test]
async fn test_create_animal_unknown_species_fails() -> anyhow::Result<()> {
    let app = build_app().await?;
    let (status, body) = send_json(
        &app,
        "POST",
        "/animals",
        json!({"name": "Ghost", "age": 1, "gender": "Male", "species_name": "Unicorn", "zoo_id": 1}),
    )
    .await?;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["message"].is_string());

    let (_, body) = get(&app, "/animals").await?;
    assert_eq!(rows(&body).len(), 7);
    assert!(rows(&body).iter().all(|a| a["name"] != "Ghost"));
    Ok(())
}

#[tokio::test]
async fn test_create_animal_missing_field_fails() -> anyhow::Result<()> {
    let app = build_app().await?;
    let (status, _) = send_json(&app, "POST", "/animals", json!({"name": "Half", "species_name": "Lion"})).await?;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    let (_, body) = get(&app, "/animals").await?;
    assert_eq!(rows(&body).len(), 7);
    Ok(())
}

#[tokio::test]
async fn test_update_animal() -> anyhow::Result<()> {
    let app = build_app().await?;
    // the edit form posts the listed row back, extra keys included
    let (_, listed) = get(&app, "/animals?sort_by=animal_id").await?;
    let mut row = listed[0].clone();
    row["name"] = json!("Mufasa");
    row["age"] = json!("12");
    row["zoo_id"] = json!(2);
    let id = row["animal_id"].as_i64().unwrap();

    let (status, body) = send_json(&app, "PUT", &format!("/animals/{id}"), row).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"message": "Animal updated"}));

    let (_, body) = get(&app, "/animals?sort_by=animal_id").await?;
    assert_eq!(body[0]["name"], "Mufasa");
    assert_eq!(body[0]["age"], 12.0);
    assert_eq!(body[0]["zoo_id"], 2);
    assert_eq!(body[0]["zoo_name"], "Bronx Zoo");
    Ok(())
}

#[tokio::test]
async fn test_update_missing_animal_is_404_and_store_unchanged() -> anyhow::Result<()> {
    let app = build_app().await?;
    let (_, before) = get(&app, "/animals").await?;
    let (status, body) = send_json(
        &app,
        "PUT",
        "/animals/999",
        json!({"name": "Nobody", "age": 1, "gender": "Male", "species_name": "Lion", "zoo_id": 1}),
    )
    .await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"message": "Animal not found"}));
    let (_, after) = get(&app, "/animals").await?;
    assert_eq!(before, after);
    Ok(())
}

#[tokio::test]
async fn test_delete_animal() -> anyhow::Result<()> {
    let app = build_app().await?;
    let req = Request::builder().method("DELETE").uri("/animals/1").body(Body::empty())?;
    let (status, body) = send(&app, req).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"message": "Animal deleted"}));

    let (_, body) = get(&app, "/animals").await?;
    assert_eq!(rows(&body).len(), 6);
    assert!(rows(&body).iter().all(|a| a["animal_id"] != 1));

    let req = Request::builder().method("DELETE").uri("/animals/1").body(Body::empty())?;
    let (status, body) = send(&app, req).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Animal not found");
    Ok(())
}

#[tokio::test]
async fn test_species_list_and_detail() -> anyhow::Result<()> {
    let app = build_app().await?;
    let (status, body) = get(&app, "/species").await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!(["Elephant", "Lion", "Penguin", "Tiger"]));

    let (status, body) = get(&app, "/species/Tiger").await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "species_name": "Tiger",
            "food": "Meat",
            "habitat": {"habitat": "Rainforest", "temperature": 27.0, "humidity": 85.0}
        })
    );

    let (status, body) = get(&app, "/species/Dodo").await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"message": "Species not found"}));
    Ok(())
}

#[tokio::test]
async fn test_openapi_document_served() -> anyhow::Result<()> {
    let app = build_app().await?;
    let (status, body) = get(&app, "/openapi.json").await?;
    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"]["/animals/{id}"].is_object());
    Ok(())
}

fn is_json(resp: &axum::response::Response) -> bool {
    resp.headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .map(|v| v.starts_with("application/json"))
        .unwrap_or(false)
}

#[tokio::test]
async fn test_update_with_missing_field_answers_json_500() -> anyhow::Result<()> {
    let app = build_app().await?;
    let req = Request::builder()
        .method("PUT")
        .uri("/animals/1")
        .header("content-type", "application/json")
        .body(Body::from(r#"{"name": "Simba"}"#))?;
    let resp = app.clone().oneshot(req).await?;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(is_json(&resp));
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await?;
    let body: Value = serde_json::from_slice(&bytes)?;
    assert!(body["message"].as_str().unwrap().contains("age"));

    let (_, body) = get(&app, "/animals?sort_by=animal_id").await?;
    assert_eq!(body[0]["name"], "Simba");
    assert_eq!(body[0]["age"], 5.0);
    Ok(())
}

#[tokio::test]
async fn test_create_with_non_numeric_age_answers_json_500() -> anyhow::Result<()> {
    let app = build_app().await?;
    let (status, body) = send_json(
        &app,
        "POST",
        "/animals",
        json!({"name": "Oldie", "age": "old", "gender": "Male", "species_name": "Lion", "zoo_id": 1}),
    )
    .await?;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["message"].is_string());

    let (_, body) = get(&app, "/animals").await?;
    assert_eq!(rows(&body).len(), 7);
    Ok(())
}

#[tokio::test]
async fn test_malformed_json_answers_json_500() -> anyhow::Result<()> {
    let app = build_app().await?;
    let req = Request::builder()
        .method("POST")
        .uri("/animals")
        .header("content-type", "application/json")
        .body(Body::from("{not json"))?;
    let (status, body) = send(&app, req).await?;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["message"].is_string());
    Ok(())
}

#[tokio::test]
async fn test_non_integer_ids_answer_json_404() -> anyhow::Result<()> {
    let app = build_app().await?;
    for uri in ["/zoos/abc", "/zoos/abc/employees"] {
        let resp = app.clone().oneshot(Request::builder().uri(uri).body(Body::empty())?).await?;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND, "{uri}");
        assert!(is_json(&resp), "{uri}");
    }

    let req = Request::builder().method("DELETE").uri("/animals/abc").body(Body::empty())?;
    let (status, body) = send(&app, req).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"message": "Resource not found"}));

    let (_, body) = get(&app, "/animals").await?;
    assert_eq!(rows(&body).len(), 7);
    Ok(())
}

#[tokio::test]
async fn test_storage_failure_hides_driver_detail() -> anyhow::Result<()> {
    let app = build_app().await?;
    let (status, body) = send_json(
        &app,
        "POST",
        "/animals",
        json!({"name": "Ghost", "age": 1, "gender": "Male", "species_name": "Unicorn", "zoo_id": 1}),
    )
    .await?;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({"message": "Internal server error"}));
    Ok(())
}

#[tokio::test]
async fn test_list_animals_accepts_whole_float_zoo_id() -> anyhow::Result<()> {
    let app = build_app().await?;
    let (status, body) = get(&app, "/animals?zoo_id=1.0").await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(rows(&body).len(), 4);

    let (status, _) = get(&app, "/animals?zoo_id=1.5").await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    Ok(())
}
