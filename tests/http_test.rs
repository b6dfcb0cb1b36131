use axum::body::{to_bytes, Body};
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use chrono::NaiveDate;
use madde_ledger::clock::FixedClock;
use madde_ledger::config::Config;
use madde_ledger::http::router;
use madde_ledger::lifecycle::LedgerSystem;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

async fn call(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => request
            .header("content-type", "application/json")
            .body(Body::from(body.to_string())),
        None => request.body(Body::empty()),
    }
    .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = serde_json::from_slice(&bytes)
        .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()));
    (status, value)
}

fn start() -> LedgerSystem {
    let clock = Arc::new(FixedClock::new(NaiveDate::from_ymd_opt(2024, 5, 7).unwrap()));
    LedgerSystem::start(&Config::default(), clock).unwrap()
}

fn order_body(status: &str) -> Value {
    json!({
        "company_name": "Hanul Ceramics",
        "quote_date": "2024-03-02",
        "category": "sintering",
        "product_name": "alumina plate",
        "quantity": 0,
        "manufacturing_cost": 700,
        "total_quote_price": 0,
        "status": status,
        "due_date": "2024-04-30"
    })
}

#[tokio::test]
async fn order_routes_drive_the_lifecycle() {
    let system = start();
    let app = router(system.state());

    let (status, order) = call(&app, Method::POST, "/orders", Some(order_body("Quoting"))).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(order["unit_quote_price"], 0);
    assert_eq!(order["margin_rate"], Value::Null);
    let id = order["id"].as_u64().unwrap();

    let (status, updated) = call(
        &app,
        Method::PUT,
        &format!("/orders/{id}"),
        Some(json!({ "status": "Delivered", "total_quote_price": 1000, "quantity": 3 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["delivered_at"], "2024-05-07");
    assert_eq!(updated["unit_quote_price"], 333);
    assert_eq!(updated["margin_rate"], 30.0);

    let (status, tracking) = call(
        &app,
        Method::POST,
        &format!("/orders/{id}/tracking"),
        Some(json!({ "line": "kiln 2", "produced_quantity": 40 })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(tracking["line"], "kiln 2");
    let (_, rows) = call(&app, Method::GET, &format!("/orders/{id}/tracking"), None).await;
    assert_eq!(rows.as_array().unwrap().len(), 1);

    let (status, progress) = call(
        &app,
        Method::PUT,
        &format!("/orders/{id}/progress"),
        Some(json!({ "stage": "inspection" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(progress["stage"], "inspection");

    let (status, summary) = call(&app, Method::GET, "/revenue/summary", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(summary["total_month"], 1000);
    assert_eq!(summary["quarter"], 2);

    drop(app);
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn errors_map_to_status_codes() {
    let system = start();
    let app = router(system.state());

    let (status, _) = call(&app, Method::GET, "/orders/41", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let mut blank = order_body("Quoting");
    blank["company_name"] = json!("");
    let (status, message) = call(&app, Method::POST, "/orders", Some(blank)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(message.as_str().unwrap().contains("company_name"));

    let (status, _) = call(
        &app,
        Method::PUT,
        "/personnel/7/shares",
        Some(json!({ "shares": { "A": 10 } })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = call(&app, Method::PUT, "/orders/41/progress", Some(json!({}))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let mut negative = order_body("Quoting");
    negative["quantity"] = json!(-3);
    let (status, message) = call(&app, Method::POST, "/orders", Some(negative)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(message.as_str().unwrap().contains("quantity"));

    let mut missing = order_body("Quoting");
    missing.as_object_mut().unwrap().remove("due_date");
    let (status, message) = call(&app, Method::POST, "/orders", Some(missing)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(message.as_str().unwrap().contains("due_date"));

    let request = Request::builder()
        .method(Method::POST)
        .uri("/projects")
        .header("content-type", "application/json")
        .body(Body::from("{ not json"))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    drop(app);
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn asset_report_and_share_routes() {
    let system = start();
    let app = router(system.state());

    call(
        &app,
        Method::POST,
        "/projects",
        Some(json!({ "title": "Kiln retrofit", "status": "진행중" })),
    )
    .await;
    call(
        &app,
        Method::POST,
        "/projects",
        Some(json!({ "title": "Glaze study", "status": "완료" })),
    )
    .await;
    let (status, person) = call(
        &app,
        Method::POST,
        "/personnel",
        Some(json!({ "name": "Kim Soyeon", "department": "Materials", "annual_salary": 60000000 })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let person_id = person["id"].as_u64().unwrap();

    let (status, shares) = call(
        &app,
        Method::PUT,
        &format!("/personnel/{person_id}/shares"),
        Some(json!({ "shares": { "Kiln retrofit": 40, "Glaze study": "15", "Bad": -1 } })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(shares.as_array().unwrap().len(), 2);

    let (status, report) = call(&app, Method::GET, "/assets", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(report["projects"], json!(["Kiln retrofit"]));
    assert_eq!(report["personnel_rows"][0]["total_amount"], 24_000_000);
    assert_eq!(report["personnel_grand_total"], 24_000_000);

    let (status, _) = call(&app, Method::DELETE, &format!("/personnel/{person_id}"), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    let (_, report) = call(&app, Method::GET, "/assets", None).await;
    assert_eq!(report["personnel_rows"], json!([]));

    drop(app);
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn project_routes_edit_and_delete() {
    let system = start();
    let app = router(system.state());

    let (status, project) = call(
        &app,
        Method::POST,
        "/projects",
        Some(json!({ "title": "Kiln retrofit", "status": "완료", "organization": "KEIT" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let id = project["id"].as_u64().unwrap();
    let (_, person) = call(
        &app,
        Method::POST,
        "/personnel",
        Some(json!({ "name": "Kim Soyeon", "department": "Materials", "annual_salary": 60000000 })),
    )
    .await;
    let person_id = person["id"].as_u64().unwrap();
    call(
        &app,
        Method::PUT,
        &format!("/personnel/{person_id}/shares"),
        Some(json!({ "shares": { "Kiln retrofit": 50 } })),
    )
    .await;

    let (_, report) = call(&app, Method::GET, "/assets", None).await;
    assert_eq!(report["personnel_grand_total"], 0);

    let (status, edited) = call(
        &app,
        Method::PUT,
        &format!("/projects/{id}"),
        Some(json!({ "status": "진행중", "organization": null })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(edited["status"], "진행중");
    assert_eq!(edited["organization"], Value::Null);
    assert_eq!(edited["title"], "Kiln retrofit");

    let (_, report) = call(&app, Method::GET, "/assets", None).await;
    assert_eq!(report["projects"], json!(["Kiln retrofit"]));
    assert_eq!(report["personnel_grand_total"], 30_000_000);

    let (status, _) = call(
        &app,
        Method::PUT,
        &format!("/projects/{id}"),
        Some(json!({ "title": "  " })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = call(&app, Method::DELETE, &format!("/projects/{id}"), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    let (status, _) = call(&app, Method::DELETE, &format!("/projects/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, _) = call(
        &app,
        Method::PUT,
        &format!("/projects/{id}"),
        Some(json!({ "status": "완료" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    drop(app);
    system.shutdown().await.unwrap();
}
