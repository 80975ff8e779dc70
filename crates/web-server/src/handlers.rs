use crate::dto::{
    CostDetailResponse, CreateGuestRequest, CreateRoomRequest, CreateRoomTypeRequest,
    CreatedRoomResponse, FreeRoomResponse, GuestResponse, GuestSearchResponse,
    MonthlyRevenueResponse, OccupancyResponse, RoomResponse, RoomTypeResponse,
};
use crate::{AppState, error::AppError};
use axum::{
    Json,
    extract::{Path, Query, State},
};
use chrono::{NaiveDate, Utc};
use core_types::{NewGuest, NewRoom, NewRoomType, RoomStatusSummary};
use serde::Deserialize;
use std::sync::Arc;

/// Offset/limit pagination for the listing endpoints.
#[derive(Debug, Deserialize)]
pub struct ListParams {
    #[serde(default = "default_skip")]
    skip: i64,
    #[serde(default = "default_limit")]
    limit: i64,
}
fn default_skip() -> i64 {
    0
}
fn default_limit() -> i64 {
    100
}

// --- Room types ---

/// # GET /api/room-types
pub async fn list_room_types(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<RoomTypeResponse>>, AppError> {
    let room_types = state.db_repo.list_room_types().await?;
    Ok(Json(room_types.into_iter().map(Into::into).collect()))
}

/// # POST /api/room-types
pub async fn create_room_type(
    State(state): State<Arc<AppState>>,
    Json(body): Json<CreateRoomTypeRequest>,
) -> Result<Json<RoomTypeResponse>, AppError> {
    let input = NewRoomType::from(body);
    input.validate()?;
    let created = state.db_repo.create_room_type(&input).await?;
    Ok(Json(created.into()))
}

// --- Room inventory ---

/// # GET /api/rooms?skip&limit
pub async fn list_rooms(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<RoomResponse>>, AppError> {
    let rooms = state.db_repo.list_rooms(params.skip, params.limit).await?;
    Ok(Json(rooms.into_iter().map(Into::into).collect()))
}

/// # POST /api/rooms
pub async fn create_room(
    State(state): State<Arc<AppState>>,
    Json(body): Json<CreateRoomRequest>,
) -> Result<Json<CreatedRoomResponse>, AppError> {
    let input = NewRoom::from(body);
    input.validate()?;
    let created = state.db_repo.create_room(&input).await?;
    Ok(Json(created.into()))
}

/// # GET /api/rooms/stats/summary
pub async fn room_stats_summary(
    State(state): State<Arc<AppState>>,
) -> Result<Json<RoomStatusSummary>, AppError> {
    let summary = state.db_repo.room_status_summary().await?;
    Ok(Json(summary))
}

// --- Guest stays ---

/// # GET /api/guests?skip&limit
pub async fn list_guests(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<GuestResponse>>, AppError> {
    let guests = state.db_repo.list_guests(params.skip, params.limit).await?;
    Ok(Json(guests.into_iter().map(Into::into).collect()))
}

/// # POST /api/guests
pub async fn create_guest(
    State(state): State<Arc<AppState>>,
    Json(body): Json<CreateGuestRequest>,
) -> Result<Json<GuestResponse>, AppError> {
    let input = NewGuest::from(body);
    input.validate()?;
    let created = state.db_repo.create_guest(&input).await?;
    Ok(Json(created.into()))
}

/// # POST /api/guests/:guest_id/checkout
///
/// Stamps the server's current time as the check-out time. Repeating the
/// call overwrites the stamp; there is no double-checkout guard.
pub async fn checkout_guest(
    Path(guest_id): Path<i64>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<GuestResponse>, AppError> {
    let checkout_time = Utc::now();
    let updated = state
        .db_repo
        .checkout_guest(guest_id, checkout_time)
        .await?
        .ok_or_else(|| AppError::NotFound("guest record not found".to_string()))?;
    Ok(Json(updated.into()))
}

// --- Business queries and statistics (delegated aggregates) ---

#[derive(Debug, Deserialize)]
pub struct FreeRoomQuery {
    pub room_type_name: String,
}

/// # GET /api/business/search/free-rooms?room_type_name
pub async fn search_free_rooms(
    State(state): State<Arc<AppState>>,
    Query(query): Query<FreeRoomQuery>,
) -> Result<Json<Vec<FreeRoomResponse>>, AppError> {
    let rooms = state
        .db_repo
        .search_free_rooms_by_type(&query.room_type_name)
        .await?;
    Ok(Json(rooms.into_iter().map(Into::into).collect()))
}

#[derive(Debug, Deserialize)]
pub struct KeywordQuery {
    pub keyword: String,
}

/// # GET /api/business/search/guests?keyword
pub async fn search_guests(
    State(state): State<Arc<AppState>>,
    Query(query): Query<KeywordQuery>,
) -> Result<Json<Vec<GuestSearchResponse>>, AppError> {
    let guests = state.db_repo.search_guests_by_keyword(&query.keyword).await?;
    Ok(Json(guests.into_iter().map(Into::into).collect()))
}

#[derive(Debug, Deserialize)]
pub struct DateRangeQuery {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

/// # GET /api/business/statistics/occupancy-rate?start_date&end_date
pub async fn occupancy_rate(
    State(state): State<Arc<AppState>>,
    Query(query): Query<DateRangeQuery>,
) -> Result<Json<Vec<OccupancyResponse>>, AppError> {
    let rows = state
        .db_repo
        .occupancy_rate(query.start_date, query.end_date)
        .await?;
    Ok(Json(rows.into_iter().map(Into::into).collect()))
}

#[derive(Debug, Deserialize)]
pub struct YearQuery {
    pub year: i32,
}

/// # GET /api/business/statistics/annual-revenue?year
///
/// Returns up to twelve rows; months with no checked-out stays are
/// simply absent, which is an empty report rather than an error.
pub async fn annual_revenue(
    State(state): State<Arc<AppState>>,
    Query(query): Query<YearQuery>,
) -> Result<Json<Vec<MonthlyRevenueResponse>>, AppError> {
    let rows = state.db_repo.annual_revenue(query.year).await?;
    Ok(Json(rows.into_iter().map(Into::into).collect()))
}

/// # GET /api/business/cost-detail/:guest_id
pub async fn cost_detail(
    Path(guest_id): Path<i64>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<CostDetailResponse>, AppError> {
    let detail = state
        .db_repo
        .guest_cost_detail(guest_id)
        .await?
        .ok_or_else(|| AppError::NotFound("no cost detail for this guest".to_string()))?;
    Ok(Json(detail.into()))
}

/// # GET /api/business/guests/expired-stays
pub async fn expired_stays(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<GuestResponse>>, AppError> {
    let guests = state.db_repo.expired_stays().await?;
    Ok(Json(guests.into_iter().map(Into::into).collect()))
}
