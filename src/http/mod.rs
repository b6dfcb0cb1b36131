//! # HTTP Surface
//!
//! JSON routes over the ledger's clients and services. Handlers live in [`routes`];
//! errors, malformed bodies included, become status codes through [`ApiError`].

pub mod error;
pub mod extract;
pub mod routes;

pub use error::ApiError;
pub use extract::ApiJson;

use crate::allocation::AllocationService;
use crate::clients::{
    EquipmentClient, OrderProgressClient, PersonnelClient, ProcessOrderClient,
    ProcessTrackingClient, ProjectClient, ProjectShareClient,
};
use crate::revenue::RevenueService;
use axum::{
    routing::{get, put},
    Router,
};
use std::io;
use tokio::{net::TcpListener, signal::ctrl_c};
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

/// Everything a handler can reach.
#[derive(Clone)]
pub struct AppState {
    pub personnel: PersonnelClient,
    pub equipment: EquipmentClient,
    pub projects: ProjectClient,
    pub shares: ProjectShareClient,
    pub orders: ProcessOrderClient,
    pub tracking: ProcessTrackingClient,
    pub progress: OrderProgressClient,
    pub allocation: AllocationService,
    pub revenue: RevenueService,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/orders", get(routes::list_orders).post(routes::create_order))
        .route("/orders/{id}", get(routes::get_order).put(routes::update_order))
        .route(
            "/orders/{id}/tracking",
            get(routes::list_tracking).post(routes::add_tracking),
        )
        .route(
            "/orders/{id}/progress",
            get(routes::get_progress).put(routes::upsert_progress),
        )
        .route("/assets", get(routes::allocation_report))
        .route("/revenue/summary", get(routes::revenue_summary))
        .route(
            "/personnel",
            get(routes::list_personnel).post(routes::create_personnel),
        )
        .route("/personnel/{id}", axum::routing::delete(routes::delete_personnel))
        .route("/personnel/{id}/shares", put(routes::replace_personnel_shares))
        .route(
            "/equipment",
            get(routes::list_equipment).post(routes::create_equipment),
        )
        .route("/equipment/{id}", axum::routing::delete(routes::delete_equipment))
        .route("/equipment/{id}/shares", put(routes::replace_equipment_shares))
        .route("/projects", get(routes::list_projects).post(routes::create_project))
        .route(
            "/projects/{id}",
            put(routes::update_project).delete(routes::delete_project),
        )
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Serves the router on `0.0.0.0:<port>` until Ctrl+C.
pub async fn serve(port: u16, state: AppState) -> io::Result<()> {
    let address = format!("0.0.0.0:{port}");
    let listener = TcpListener::bind(&address).await?;
    info!("Listening on {address}");

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if let Err(e) = ctrl_c().await {
        warn!(error = %e, "Failed to install Ctrl+C handler, serving until killed");
        std::future::pending::<()>().await;
    }
    info!("Received Ctrl+C, shutting down");
}
