use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Canonical room status values.
///
/// The status column is an open string: values outside this set (e.g. a
/// maintenance marker) are stored untouched and only counted in totals.
pub mod status {
    pub const FREE: &str = "free";
    pub const OCCUPIED: &str = "occupied";
}

/// A price/category class of room. Created administratively; referenced
/// by zero or more `RoomInfo` rows and never deleted once referenced.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct RoomType {
    pub room_type_id: String,
    pub room_type_name: String,
    pub room_price: Decimal,
    pub room_desc: Option<String>,
}

/// One physical room and its current status.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct RoomInfo {
    pub room_no: String,
    pub room_type_id: String,
    pub room_status: String,
    pub room_floor: Option<i32>,
    pub room_bed_count: Option<i32>,
}

/// A `room_info` row joined with its `room_type`, as returned by the
/// room listing. Flat so it can be read straight off the join.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct RoomWithType {
    pub room_no: String,
    pub room_type_id: String,
    pub room_status: String,
    pub room_floor: Option<i32>,
    pub room_bed_count: Option<i32>,
    pub room_type_name: String,
    pub room_price: Decimal,
    pub room_desc: Option<String>,
}

/// One guest's stay record, current or historical.
///
/// A guest is currently staying iff `check_out_time` is `None`. The
/// `room_no` reference is optional: a stay may outlive its room (data
/// cleanup), and stored values may carry incidental padding, so joins
/// against `room_info` always compare trimmed values.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct GuestInfo {
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
}

/// A guest record enriched with the nightly price of its room's type,
/// as returned by the guest listing. `room_price` falls back to zero
/// when the room cannot be resolved; the guest is still returned.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct GuestStay {
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
    pub room_price: Decimal,
}
