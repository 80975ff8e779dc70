pub mod entities;
pub mod error;
pub mod inputs;
pub mod reports;

// Re-export the core types to provide a clean public API.
pub use entities::{GuestInfo, GuestStay, RoomInfo, RoomType, RoomWithType, status};
pub use error::CoreError;
pub use inputs::{NewGuest, NewRoom, NewRoomType};
pub use reports::{
    FreeRoom, GuestCostDetail, GuestSearchRow, MonthlyRevenue, OccupancyRow, RoomStatusSummary,
};
