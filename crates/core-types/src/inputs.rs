//! Validated input shapes for the create/update operations.
//!
//! Validation runs at the service boundary, before any store
//! interaction; the repository only ever sees inputs that have passed
//! `validate`.

use crate::entities::status;
use crate::error::CoreError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Input for registering a new room category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewRoomType {
    pub room_type_id: String,
    pub room_type_name: String,
    pub room_price: Decimal,
    pub room_desc: Option<String>,
}

impl NewRoomType {
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.room_type_id.trim().is_empty() {
            return Err(CoreError::InvalidInput(
                "room_type_id".to_string(),
                "must not be empty".to_string(),
            ));
        }
        if self.room_type_name.trim().is_empty() {
            return Err(CoreError::InvalidInput(
                "room_type_name".to_string(),
                "must not be empty".to_string(),
            ));
        }
        if self.room_price < Decimal::ZERO {
            return Err(CoreError::InvalidInput(
                "room_price".to_string(),
                "must not be negative".to_string(),
            ));
        }
        Ok(())
    }
}

/// Input for registering a new physical room.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewRoom {
    pub room_no: String,
    pub room_type_id: String,
    pub room_status: String,
    pub room_floor: Option<i32>,
    pub room_bed_count: Option<i32>,
}

impl NewRoom {
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.room_no.trim().is_empty() {
            return Err(CoreError::InvalidInput(
                "room_no".to_string(),
                "must not be empty".to_string(),
            ));
        }
        if self.room_type_id.trim().is_empty() {
            return Err(CoreError::InvalidInput(
                "room_type_id".to_string(),
                "must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for NewRoom {
    fn default() -> Self {
        Self {
            room_no: String::new(),
            room_type_id: String::new(),
            room_status: status::FREE.to_string(),
            room_floor: None,
            room_bed_count: None,
        }
    }
}

/// Input for a check-in registration. The check-in timestamp and the
/// generated guest id are assigned by the store on insert.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewGuest {
    pub guest_name: String,
    pub guest_gender: String,
    pub guest_age: Option<i32>,
    pub id_card: String,
    pub phone_num: Option<String>,
    pub address: Option<String>,
    pub workplace: Option<String>,
    pub come_from: Option<String>,
    pub stay_days: i32,
    pub room_no: Option<String>,
    pub deposit_money: Decimal,
    pub remark: Option<String>,
}

impl NewGuest {
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.guest_name.trim().is_empty() {
            return Err(CoreError::InvalidInput(
                "guest_name".to_string(),
                "must not be empty".to_string(),
            ));
        }
        if self.id_card.trim().is_empty() {
            return Err(CoreError::InvalidInput(
                "id_card".to_string(),
                "must not be empty".to_string(),
            ));
        }
        if self.stay_days < 1 {
            return Err(CoreError::InvalidInput(
                "stay_days".to_string(),
                "must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Strips incidental whitespace from the room number so that later
    /// joins against `room_info.room_no` resolve. A room number that is
    /// all whitespace becomes no room at all.
    pub fn normalized(mut self) -> Self {
        self.room_no = self.room_no.and_then(|no| {
            let trimmed = no.trim().to_string();
            if trimmed.is_empty() { None } else { Some(trimmed) }
        });
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn sample_guest() -> NewGuest {
        NewGuest {
            guest_name: "Li".to_string(),
            guest_gender: "unspecified".to_string(),
            guest_age: None,
            id_card: "110101199001011234".to_string(),
            phone_num: None,
            address: None,
            workplace: None,
            come_from: None,
            stay_days: 2,
            room_no: Some(" 101 ".to_string()),
            deposit_money: dec!(200.00),
            remark: None,
        }
    }

    #[test]
    fn guest_normalization_trims_room_no() {
        let guest = sample_guest().normalized();
        assert_eq!(guest.room_no.as_deref(), Some("101"));
    }

    #[test]
    fn guest_normalization_drops_blank_room_no() {
        let mut guest = sample_guest();
        guest.room_no = Some("   ".to_string());
        assert_eq!(guest.normalized().room_no, None);
    }

    #[test]
    fn guest_without_room_stays_roomless() {
        let mut guest = sample_guest();
        guest.room_no = None;
        assert_eq!(guest.normalized().room_no, None);
    }

    #[test]
    fn guest_requires_name_and_id_card() {
        let mut guest = sample_guest();
        guest.guest_name = "  ".to_string();
        assert!(guest.validate().is_err());

        let mut guest = sample_guest();
        guest.id_card = String::new();
        assert!(guest.validate().is_err());

        assert!(sample_guest().validate().is_ok());
    }

    #[test]
    fn guest_requires_positive_stay_days() {
        let mut guest = sample_guest();
        guest.stay_days = 0;
        assert!(guest.validate().is_err());
    }

    #[test]
    fn room_type_rejects_negative_price_and_empty_name() {
        let mut room_type = NewRoomType {
            room_type_id: "A01".to_string(),
            room_type_name: "Standard".to_string(),
            room_price: dec!(100.00),
            room_desc: None,
        };
        assert!(room_type.validate().is_ok());

        room_type.room_price = dec!(-1.00);
        assert!(room_type.validate().is_err());

        room_type.room_price = dec!(100.00);
        room_type.room_type_name = String::new();
        assert!(room_type.validate().is_err());
    }

    #[test]
    fn room_defaults_to_free_status() {
        let room = NewRoom {
            room_no: "101".to_string(),
            room_type_id: "A01".to_string(),
            ..NewRoom::default()
        };
        assert_eq!(room.room_status, status::FREE);
        assert!(room.validate().is_ok());
    }
}
