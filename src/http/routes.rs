use super::{ApiError, ApiJson, AppState};
use crate::allocation::AllocationReport;
use crate::model::{
    Equipment, EquipmentCreate, EquipmentId, OrderProgress, OrderProgressInput, Personnel,
    PersonnelCreate, PersonnelId, ProcessOrder, ProcessOrderId, ProcessOrderInput,
    ProcessOrderUpdate, ProcessTracking, Project, ProjectCreate, ProjectId, ProjectShare,
    ProjectUpdate, ShareOwner, ShareReplacement, TrackingMetrics,
};
use crate::revenue::RevenueSummary;
use actor_framework::ActorClient;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

type ApiResult<T> = Result<T, ApiError>;

async fn require_order(state: &AppState, id: ProcessOrderId) -> ApiResult<ProcessOrder> {
    state
        .orders
        .get(id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Order not found: {id}")))
}

// --- Orders ---

pub async fn create_order(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<ProcessOrderInput>,
) -> ApiResult<(StatusCode, Json<ProcessOrder>)> {
    let order = state.orders.create_order(input).await?;
    Ok((StatusCode::CREATED, Json(order)))
}

pub async fn list_orders(State(state): State<AppState>) -> ApiResult<Json<Vec<ProcessOrder>>> {
    Ok(Json(state.orders.list().await?))
}

pub async fn get_order(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> ApiResult<Json<ProcessOrder>> {
    Ok(Json(require_order(&state, ProcessOrderId(id)).await?))
}

pub async fn update_order(
    State(state): State<AppState>,
    Path(id): Path<u32>,
    ApiJson(update): ApiJson<ProcessOrderUpdate>,
) -> ApiResult<Json<ProcessOrder>> {
    Ok(Json(
        state.orders.update_order(ProcessOrderId(id), update).await?,
    ))
}

pub async fn list_tracking(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> ApiResult<Json<Vec<ProcessTracking>>> {
    let order = require_order(&state, ProcessOrderId(id)).await?;
    Ok(Json(state.tracking.for_order(order.id).await?))
}

pub async fn add_tracking(
    State(state): State<AppState>,
    Path(id): Path<u32>,
    ApiJson(metrics): ApiJson<TrackingMetrics>,
) -> ApiResult<(StatusCode, Json<ProcessTracking>)> {
    let order = require_order(&state, ProcessOrderId(id)).await?;
    let tracking_id = state.tracking.add(order.id, metrics).await?;
    let row = state
        .tracking
        .get(tracking_id)
        .await?
        .ok_or_else(|| ApiError::Internal(format!("{tracking_id} vanished after create")))?;
    Ok((StatusCode::CREATED, Json(row)))
}

pub async fn get_progress(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> ApiResult<Json<OrderProgress>> {
    let id = ProcessOrderId(id);
    state
        .progress
        .for_order(id)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("No progress recorded for {id}")))
}

pub async fn upsert_progress(
    State(state): State<AppState>,
    Path(id): Path<u32>,
    ApiJson(input): ApiJson<OrderProgressInput>,
) -> ApiResult<Json<OrderProgress>> {
    Ok(Json(state.progress.upsert(ProcessOrderId(id), input).await?))
}

// --- Allocation & revenue ---

pub async fn allocation_report(State(state): State<AppState>) -> Json<AllocationReport> {
    Json(state.allocation.report().await)
}

pub async fn revenue_summary(State(state): State<AppState>) -> ApiResult<Json<RevenueSummary>> {
    Ok(Json(state.revenue.summary().await?))
}

async fn replace_shares(
    state: &AppState,
    owner: ShareOwner,
    payload: &ShareReplacement,
) -> ApiResult<Json<Vec<ProjectShare>>> {
    state.allocation.replace_shares(owner, payload).await?;
    Ok(Json(state.shares.shares_of(owner).await?))
}

pub async fn replace_personnel_shares(
    State(state): State<AppState>,
    Path(id): Path<u32>,
    ApiJson(payload): ApiJson<ShareReplacement>,
) -> ApiResult<Json<Vec<ProjectShare>>> {
    replace_shares(&state, ShareOwner::Personnel(PersonnelId(id)), &payload).await
}

pub async fn replace_equipment_shares(
    State(state): State<AppState>,
    Path(id): Path<u32>,
    ApiJson(payload): ApiJson<ShareReplacement>,
) -> ApiResult<Json<Vec<ProjectShare>>> {
    replace_shares(&state, ShareOwner::Equipment(EquipmentId(id)), &payload).await
}

// --- Supporting records ---

pub async fn list_personnel(State(state): State<AppState>) -> ApiResult<Json<Vec<Personnel>>> {
    Ok(Json(state.personnel.list().await?))
}

pub async fn create_personnel(
    State(state): State<AppState>,
    ApiJson(params): ApiJson<PersonnelCreate>,
) -> ApiResult<(StatusCode, Json<Personnel>)> {
    let id = state.personnel.create(params).await?;
    let person = state
        .personnel
        .get(id)
        .await?
        .ok_or_else(|| ApiError::Internal(format!("{id} vanished after create")))?;
    Ok((StatusCode::CREATED, Json(person)))
}

pub async fn delete_personnel(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> ApiResult<StatusCode> {
    state.personnel.delete(PersonnelId(id)).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn list_equipment(State(state): State<AppState>) -> ApiResult<Json<Vec<Equipment>>> {
    Ok(Json(state.equipment.list().await?))
}

pub async fn create_equipment(
    State(state): State<AppState>,
    ApiJson(params): ApiJson<EquipmentCreate>,
) -> ApiResult<(StatusCode, Json<Equipment>)> {
    let id = state.equipment.create(params).await?;
    let item = state
        .equipment
        .get(id)
        .await?
        .ok_or_else(|| ApiError::Internal(format!("{id} vanished after create")))?;
    Ok((StatusCode::CREATED, Json(item)))
}

pub async fn delete_equipment(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> ApiResult<StatusCode> {
    state.equipment.delete(EquipmentId(id)).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn list_projects(State(state): State<AppState>) -> ApiResult<Json<Vec<Project>>> {
    Ok(Json(state.projects.list().await?))
}

pub async fn create_project(
    State(state): State<AppState>,
    ApiJson(params): ApiJson<ProjectCreate>,
) -> ApiResult<(StatusCode, Json<Project>)> {
    let id = state.projects.create(params).await?;
    let project = state
        .projects
        .get(id)
        .await?
        .ok_or_else(|| ApiError::Internal(format!("{id} vanished after create")))?;
    Ok((StatusCode::CREATED, Json(project)))
}

pub async fn update_project(
    State(state): State<AppState>,
    Path(id): Path<u32>,
    ApiJson(update): ApiJson<ProjectUpdate>,
) -> ApiResult<Json<Project>> {
    Ok(Json(state.projects.update_project(ProjectId(id), update).await?))
}

pub async fn delete_project(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> ApiResult<StatusCode> {
    state.projects.delete(ProjectId(id)).await?;
    Ok(StatusCode::NO_CONTENT)
}
