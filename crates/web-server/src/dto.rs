//! External-facing request and response shapes.
//!
//! Wire JSON uses camelCase field names. Every guest record leaving the
//! service passes through [`GuestResponse`] or [`GuestSearchResponse`],
//! which apply the masking rules for phone numbers and ID documents.

use chrono::{DateTime, Utc};
use core_types::entities::status;
use core_types::{
    FreeRoom, GuestCostDetail, GuestInfo, GuestSearchRow, GuestStay, MonthlyRevenue, NewGuest,
    NewRoom, NewRoomType, OccupancyRow, RoomType, RoomWithType,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

// --- Requests ---

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRoomTypeRequest {
    pub room_type_id: String,
    pub room_type_name: String,
    pub room_price: Decimal,
    #[serde(default)]
    pub room_desc: Option<String>,
}

impl From<CreateRoomTypeRequest> for NewRoomType {
    fn from(req: CreateRoomTypeRequest) -> Self {
        NewRoomType {
            room_type_id: req.room_type_id,
            room_type_name: req.room_type_name,
            room_price: req.room_price,
            room_desc: req.room_desc,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRoomRequest {
    pub room_no: String,
    pub room_type_id: String,
    #[serde(default = "default_room_status")]
    pub room_status: String,
    #[serde(default)]
    pub room_floor: Option<i32>,
    #[serde(default)]
    pub room_bed_count: Option<i32>,
}

fn default_room_status() -> String {
    status::FREE.to_string()
}

impl From<CreateRoomRequest> for NewRoom {
    fn from(req: CreateRoomRequest) -> Self {
        NewRoom {
            room_no: req.room_no,
            room_type_id: req.room_type_id,
            room_status: req.room_status,
            room_floor: req.room_floor,
            room_bed_count: req.room_bed_count,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateGuestRequest {
    pub guest_name: String,
    #[serde(default = "default_gender")]
    pub guest_gender: String,
    #[serde(default)]
    pub guest_age: Option<i32>,
    pub id_card: String,
    #[serde(default)]
    pub phone_num: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub workplace: Option<String>,
    #[serde(default)]
    pub come_from: Option<String>,
    pub stay_days: i32,
    #[serde(default)]
    pub room_no: Option<String>,
    #[serde(default)]
    pub deposit_money: Decimal,
    #[serde(default)]
    pub remark: Option<String>,
}

fn default_gender() -> String {
    "unspecified".to_string()
}

impl From<CreateGuestRequest> for NewGuest {
    fn from(req: CreateGuestRequest) -> Self {
        NewGuest {
            guest_name: req.guest_name,
            guest_gender: req.guest_gender,
            guest_age: req.guest_age,
            id_card: req.id_card,
            phone_num: req.phone_num,
            address: req.address,
            workplace: req.workplace,
            come_from: req.come_from,
            stay_days: req.stay_days,
            room_no: req.room_no,
            deposit_money: req.deposit_money,
            remark: req.remark,
        }
        .normalized()
    }
}

// --- Masking ---

/// Masks an 11-character phone number as first-3 + "****" + the digits
/// from position 7 on. Any other length passes through unchanged.
pub fn mask_phone(phone: &str) -> String {
    let chars: Vec<char> = phone.chars().collect();
    if chars.len() != 11 {
        return phone.to_string();
    }
    let head: String = chars[..3].iter().collect();
    let tail: String = chars[7..].iter().collect();
    format!("{head}****{tail}")
}

/// Masks an ID document of length >= 10 as first 6 + mask characters +
/// last 4, preserving total length. Shorter values pass through.
pub fn mask_id_card(id_card: &str) -> String {
    let chars: Vec<char> = id_card.chars().collect();
    let len = chars.len();
    if len < 10 {
        return id_card.to_string();
    }
    let head: String = chars[..6].iter().collect();
    let tail: String = chars[len - 4..].iter().collect();
    format!("{head}{}{tail}", "*".repeat(len - 10))
}

// --- Responses ---

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomTypeResponse {
    pub room_type_id: String,
    pub room_type_name: String,
    pub room_price: Decimal,
    pub room_desc: Option<String>,
}

impl From<RoomType> for RoomTypeResponse {
    fn from(row: RoomType) -> Self {
        RoomTypeResponse {
            room_type_id: row.room_type_id,
            room_type_name: row.room_type_name,
            room_price: row.room_price,
            room_desc: row.room_desc,
        }
    }
}

/// A room with its type nested, the way the listing endpoint exposes it.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomResponse {
    pub room_no: String,
    pub room_type_id: String,
    pub room_status: String,
    pub room_floor: Option<i32>,
    pub room_bed_count: Option<i32>,
    pub room_type: RoomTypeResponse,
}

impl From<RoomWithType> for RoomResponse {
    fn from(row: RoomWithType) -> Self {
        RoomResponse {
            room_no: row.room_no,
            room_type_id: row.room_type_id.clone(),
            room_status: row.room_status,
            room_floor: row.room_floor,
            room_bed_count: row.room_bed_count,
            room_type: RoomTypeResponse {
                room_type_id: row.room_type_id,
                room_type_name: row.room_type_name,
                room_price: row.room_price,
                room_desc: row.room_desc,
            },
        }
    }
}

/// The bare room shape returned by the create endpoint, before any type
/// join has happened.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedRoomResponse {
    pub room_no: String,
    pub room_type_id: String,
    pub room_status: String,
    pub room_floor: Option<i32>,
    pub room_bed_count: Option<i32>,
}

impl From<core_types::RoomInfo> for CreatedRoomResponse {
    fn from(row: core_types::RoomInfo) -> Self {
        CreatedRoomResponse {
            room_no: row.room_no,
            room_type_id: row.room_type_id,
            room_status: row.room_status,
            room_floor: row.room_floor,
            room_bed_count: row.room_bed_count,
        }
    }
}

/// A guest record as rendered to callers: phone and ID document masked,
/// enriched with the resolved room price (zero when unresolvable).
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GuestResponse {
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

impl From<GuestStay> for GuestResponse {
    fn from(row: GuestStay) -> Self {
        GuestResponse {
            guest_id: row.guest_id,
            guest_name: row.guest_name,
            guest_gender: row.guest_gender,
            guest_age: row.guest_age,
            id_card: mask_id_card(&row.id_card),
            phone_num: row.phone_num.as_deref().map(mask_phone),
            address: row.address,
            workplace: row.workplace,
            come_from: row.come_from,
            check_in_time: row.check_in_time,
            stay_days: row.stay_days,
            room_no: row.room_no,
            check_out_time: row.check_out_time,
            deposit_money: row.deposit_money,
            room_cost: row.room_cost,
            remark: row.remark,
            room_price: row.room_price,
        }
    }
}

impl From<GuestInfo> for GuestResponse {
    /// Freshly created or checked-out records carry no join context, so
    /// the enriched price defaults to zero.
    fn from(row: GuestInfo) -> Self {
        GuestResponse::from(GuestStay {
            guest_id: row.guest_id,
            guest_name: row.guest_name,
            guest_gender: row.guest_gender,
            guest_age: row.guest_age,
            id_card: row.id_card,
            phone_num: row.phone_num,
            address: row.address,
            workplace: row.workplace,
            come_from: row.come_from,
            check_in_time: row.check_in_time,
            stay_days: row.stay_days,
            room_no: row.room_no,
            check_out_time: row.check_out_time,
            deposit_money: row.deposit_money,
            room_cost: row.room_cost,
            remark: row.remark,
            room_price: Decimal::ZERO,
        })
    }
}

/// A keyword-search hit: the masked guest record plus its resolved room
/// type name and price.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GuestSearchResponse {
    #[serde(flatten)]
    pub guest: GuestResponse,
    pub room_type_name: String,
}

impl From<GuestSearchRow> for GuestSearchResponse {
    fn from(row: GuestSearchRow) -> Self {
        GuestSearchResponse {
            guest: GuestResponse {
                guest_id: row.guest_id,
                guest_name: row.guest_name,
                guest_gender: row.guest_gender,
                guest_age: row.guest_age,
                id_card: mask_id_card(&row.id_card),
                phone_num: row.phone_num.as_deref().map(mask_phone),
                address: row.address,
                workplace: row.workplace,
                come_from: row.come_from,
                check_in_time: row.check_in_time,
                stay_days: row.stay_days,
                room_no: row.room_no,
                check_out_time: row.check_out_time,
                deposit_money: row.deposit_money,
                room_cost: row.room_cost,
                remark: row.remark,
                room_price: row.room_price,
            },
            room_type_name: row.room_type_name,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FreeRoomResponse {
    pub room_no: String,
    pub room_type_name: String,
    pub room_price: Decimal,
    pub room_floor: Option<i32>,
    pub room_bed_count: Option<i32>,
}

impl From<FreeRoom> for FreeRoomResponse {
    fn from(row: FreeRoom) -> Self {
        FreeRoomResponse {
            room_no: row.room_no,
            room_type_name: row.room_type_name,
            room_price: row.room_price,
            room_floor: row.room_floor,
            room_bed_count: row.room_bed_count,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OccupancyResponse {
    pub room_type_name: String,
    pub total_room_count: i64,
    pub occupied_room_count: i64,
    pub occupancy_rate: Decimal,
}

impl From<OccupancyRow> for OccupancyResponse {
    fn from(row: OccupancyRow) -> Self {
        OccupancyResponse {
            room_type_name: row.room_type_name,
            total_room_count: row.total_room_count,
            occupied_room_count: row.occupied_room_count,
            occupancy_rate: row.occupancy_rate,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyRevenueResponse {
    pub month: i32,
    pub monthly_revenue: Decimal,
    pub guest_count: i64,
}

impl From<MonthlyRevenue> for MonthlyRevenueResponse {
    fn from(row: MonthlyRevenue) -> Self {
        MonthlyRevenueResponse {
            month: row.month,
            monthly_revenue: row.monthly_revenue,
            guest_count: row.guest_count,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CostDetailResponse {
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

impl From<GuestCostDetail> for CostDetailResponse {
    fn from(row: GuestCostDetail) -> Self {
        CostDetailResponse {
            guest_name: row.guest_name,
            room_no: row.room_no,
            room_type_name: row.room_type_name,
            room_price: row.room_price,
            check_in_time: row.check_in_time,
            check_out_time: row.check_out_time,
            actual_stay_days: row.actual_stay_days,
            deposit_money: row.deposit_money,
            room_cost: row.room_cost,
            refund_money: row.refund_money,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rust_decimal_macros::dec;

    #[test]
    fn phone_mask_hides_middle_digits() {
        assert_eq!(mask_phone("13812345678"), "138****5678");
    }

    #[test]
    fn phone_mask_passes_other_lengths_through() {
        assert_eq!(mask_phone("1234567"), "1234567");
        assert_eq!(mask_phone(""), "");
        assert_eq!(mask_phone("123456789012"), "123456789012");
    }

    #[test]
    fn id_card_mask_preserves_total_length() {
        let masked = mask_id_card("110101199001011234");
        assert_eq!(masked, "110101********1234");
        assert_eq!(masked.chars().count(), 18);
    }

    #[test]
    fn id_card_mask_passes_short_values_through() {
        assert_eq!(mask_id_card("123456789"), "123456789");
    }

    #[test]
    fn id_card_mask_handles_minimum_length() {
        // At exactly 10 characters nothing is left to hide, but the
        // first-6/last-4 split still applies.
        assert_eq!(mask_id_card("1234567890"), "1234567890");
    }

    fn sample_guest_info() -> GuestInfo {
        GuestInfo {
            guest_id: 7,
            guest_name: "Li".to_string(),
            guest_gender: "unspecified".to_string(),
            guest_age: None,
            id_card: "110101199001011234".to_string(),
            phone_num: Some("13812345678".to_string()),
            address: None,
            workplace: None,
            come_from: None,
            check_in_time: Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap(),
            stay_days: 2,
            room_no: Some("101".to_string()),
            check_out_time: None,
            deposit_money: dec!(200.00),
            room_cost: dec!(0.00),
            remark: None,
        }
    }

    #[test]
    fn guest_response_masks_sensitive_fields() {
        let response = GuestResponse::from(sample_guest_info());
        assert_eq!(response.id_card, "110101********1234");
        assert_eq!(response.phone_num.as_deref(), Some("138****5678"));
    }

    #[test]
    fn guest_response_without_join_context_defaults_price_to_zero() {
        let response = GuestResponse::from(sample_guest_info());
        assert_eq!(response.room_price, Decimal::ZERO);
    }

    #[test]
    fn guest_response_serializes_camel_case() {
        let response = GuestResponse::from(sample_guest_info());
        let json = serde_json::to_value(&response).unwrap();
        assert!(json.get("guestName").is_some());
        assert!(json.get("idCard").is_some());
        assert!(json.get("checkInTime").is_some());
        assert!(json.get("roomPrice").is_some());
        assert!(json.get("guest_name").is_none());
    }

    #[test]
    fn create_guest_request_trims_room_no_on_conversion() {
        let request: CreateGuestRequest = serde_json::from_value(serde_json::json!({
            "guestName": "Li",
            "idCard": "110101199001011234",
            "stayDays": 2,
            "roomNo": " 101 "
        }))
        .unwrap();
        let input = NewGuest::from(request);
        assert_eq!(input.room_no.as_deref(), Some("101"));
        assert_eq!(input.guest_gender, "unspecified");
        assert_eq!(input.deposit_money, Decimal::ZERO);
    }

    #[test]
    fn create_room_request_defaults_to_free_status() {
        let request: CreateRoomRequest = serde_json::from_value(serde_json::json!({
            "roomNo": "101",
            "roomTypeId": "A01"
        }))
        .unwrap();
        assert_eq!(request.room_status, status::FREE);
    }
}
