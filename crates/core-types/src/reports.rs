//! Result shapes for the delegated aggregate queries.
//!
//! The aggregation logic itself lives in store-side routines; these
//! structs only pin down the row shape each routine is contracted to
//! return.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Live counts over the full room inventory. Statuses outside the two
/// canonical values contribute to `total` only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomStatusSummary {
    pub total: i64,
    pub free: i64,
    pub occupied: i64,
}

/// One currently-free room of a requested type.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct FreeRoom {
    pub room_no: String,
    pub room_type_name: String,
    pub room_price: Decimal,
    pub room_floor: Option<i32>,
    pub room_bed_count: Option<i32>,
}

/// An extended guest row from the keyword search: the full stay record
/// plus the resolved room type name and price.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct GuestSearchRow {
    pub guest_id: i64,
    pub guest_name: String,
    pub guest_gender: String,
    pub guest_age: Option<i32>,
    pub id_card: String,
    pub phone_num: Option<String>,
    pub address: Option<String>,
    pub workplace: Option<String>,
    pub come_from: Option<String>,
    pub check_in_time: DateTime<Utc>,
    pub stay_days: i32,
    pub room_no: Option<String>,
    pub check_out_time: Option<DateTime<Utc>>,
    pub deposit_money: Decimal,
    pub room_cost: Decimal,
    pub remark: Option<String>,
    pub room_type_name: String,
    pub room_price: Decimal,
}

/// Per-type occupancy over a date range.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct OccupancyRow {
    pub room_type_name: String,
    pub total_room_count: i64,
    pub occupied_room_count: i64,
    pub occupancy_rate: Decimal,
}

/// Revenue and guest count for one month of the requested year.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct MonthlyRevenue {
    pub month: i32,
    pub monthly_revenue: Decimal,
    pub guest_count: i64,
}

/// Settlement summary for one guest: days stayed, accumulated cost and
/// the deposit refund.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct GuestCostDetail {
    pub guest_name: String,
    pub room_no: String,
    pub room_type_name: String,
    pub room_price: Decimal,
    pub check_in_time: DateTime<Utc>,
    pub check_out_time: Option<DateTime<Utc>>,
    pub actual_stay_days: i32,
    pub deposit_money: Decimal,
    pub room_cost: Decimal,
    pub refund_money: Decimal,
}
