use crate::DbError;
use chrono::{DateTime, NaiveDate, Utc};
use core_types::entities::status;
use core_types::{
    FreeRoom, GuestCostDetail, GuestInfo, GuestSearchRow, GuestStay, MonthlyRevenue, NewGuest,
    NewRoom, NewRoomType, OccupancyRow, RoomInfo, RoomStatusSummary, RoomType, RoomWithType,
};
use sqlx::postgres::PgPool;

/// The `DbRepository` provides a high-level, application-specific interface
/// to the database. It encapsulates all SQL queries and data access logic.
///
/// Mutations are single-statement commits; consistency (key uniqueness,
/// referential integrity) is delegated to the store's own constraints.
#[derive(Debug, Clone)]
pub struct DbRepository {
    pool: PgPool,
}

impl DbRepository {
    /// Creates a new `DbRepository` with a shared database connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    // --- Room types ---

    /// Fetches every room category, ordered by id.
    pub async fn list_room_types(&self) -> Result<Vec<RoomType>, DbError> {
        let room_types = sqlx::query_as::<_, RoomType>(
            "SELECT room_type_id, room_type_name, room_price, room_desc \
             FROM room_type ORDER BY room_type_id ASC",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(room_types)
    }

    /// Inserts a new room category and returns the stored row.
    /// An id collision surfaces as `DbError::DuplicateKey`.
    pub async fn create_room_type(&self, room_type: &NewRoomType) -> Result<RoomType, DbError> {
        let created = sqlx::query_as::<_, RoomType>(
            r#"
            INSERT INTO room_type (room_type_id, room_type_name, room_price, room_desc)
            VALUES ($1, $2, $3, $4)
            RETURNING room_type_id, room_type_name, room_price, room_desc
            "#,
        )
        .bind(&room_type.room_type_id)
        .bind(&room_type.room_type_name)
        .bind(room_type.room_price)
        .bind(&room_type.room_desc)
        .fetch_one(&self.pool)
        .await
        .map_err(DbError::from_write)?;

        Ok(created)
    }

    // --- Room inventory ---

    /// Fetches one page of rooms joined with their type, ordered by room
    /// number. The join is deduplicated so the page size is stable.
    pub async fn list_rooms(&self, skip: i64, limit: i64) -> Result<Vec<RoomWithType>, DbError> {
        let rooms = sqlx::query_as::<_, RoomWithType>(
            r#"
            SELECT DISTINCT
                r.room_no, r.room_type_id, r.room_status, r.room_floor, r.room_bed_count,
                t.room_type_name, t.room_price, t.room_desc
            FROM room_info AS r
            JOIN room_type AS t ON r.room_type_id = t.room_type_id
            ORDER BY r.room_no ASC
            OFFSET $1 LIMIT $2
            "#,
        )
        .bind(skip)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;
        Ok(rooms)
    }

    /// Inserts a new room. An unknown type id surfaces as
    /// `DbError::ForeignKeyViolation`, an existing room number as
    /// `DbError::DuplicateKey`; in either case no row is persisted.
    pub async fn create_room(&self, room: &NewRoom) -> Result<RoomInfo, DbError> {
        let created = sqlx::query_as::<_, RoomInfo>(
            r#"
            INSERT INTO room_info (room_no, room_type_id, room_status, room_floor, room_bed_count)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING room_no, room_type_id, room_status, room_floor, room_bed_count
            "#,
        )
        .bind(&room.room_no)
        .bind(&room.room_type_id)
        .bind(&room.room_status)
        .bind(room.room_floor)
        .bind(room.room_bed_count)
        .fetch_one(&self.pool)
        .await
        .map_err(DbError::from_write)?;

        Ok(created)
    }

    /// Live room-state counts: three independent counts over the full
    /// inventory. Statuses beyond the two canonical values (maintenance
    /// markers and the like) show up in `total` only.
    pub async fn room_status_summary(&self) -> Result<RoomStatusSummary, DbError> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM room_info")
            .fetch_one(&self.pool)
            .await?;
        let free: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM room_info WHERE room_status = $1")
                .bind(status::FREE)
                .fetch_one(&self.pool)
                .await?;
        let occupied: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM room_info WHERE room_status = $1")
                .bind(status::OCCUPIED)
                .fetch_one(&self.pool)
                .await?;

        Ok(RoomStatusSummary {
            total,
            free,
            occupied,
        })
    }

    // --- Guest stays ---

    /// Fetches one page of stay records, most recent first, each enriched
    /// with the nightly price of its room's type.
    ///
    /// Both joins are outer joins: a guest whose room number no longer
    /// resolves is still returned, with a price of zero. Room numbers are
    /// compared trimmed because stored values may carry padding.
    pub async fn list_guests(&self, skip: i64, limit: i64) -> Result<Vec<GuestStay>, DbError> {
        let guests = sqlx::query_as::<_, GuestStay>(
            r#"
            SELECT
                g.guest_id, g.guest_name, g.guest_gender, g.guest_age, g.id_card,
                g.phone_num, g.address, g.workplace, g.come_from, g.check_in_time,
                g.stay_days, g.room_no, g.check_out_time, g.deposit_money, g.room_cost,
                g.remark,
                COALESCE(t.room_price, 0.00) AS room_price
            FROM guest_info AS g
            LEFT JOIN room_info AS r ON btrim(g.room_no) = btrim(r.room_no)
            LEFT JOIN room_type AS t ON r.room_type_id = t.room_type_id
            ORDER BY g.guest_id DESC
            OFFSET $1 LIMIT $2
            "#,
        )
        .bind(skip)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;
        Ok(guests)
    }

    /// Registers a check-in and returns the stored record with its
    /// generated id. The insert is a single statement, so a failure
    /// leaves no partial row; constraint violations surface classified.
    ///
    /// The caller is expected to pass a normalized input (trimmed room
    /// number); normalization is applied again here so the stored value
    /// is trimmed no matter how the repository is driven.
    pub async fn create_guest(&self, guest: &NewGuest) -> Result<GuestInfo, DbError> {
        let room_no = guest
            .room_no
            .as_deref()
            .map(str::trim)
            .filter(|no| !no.is_empty());

        let created = sqlx::query_as::<_, GuestInfo>(
            r#"
            INSERT INTO guest_info (
                guest_name, guest_gender, guest_age, id_card, phone_num, address,
                workplace, come_from, stay_days, room_no, deposit_money, remark
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            RETURNING
                guest_id, guest_name, guest_gender, guest_age, id_card, phone_num,
                address, workplace, come_from, check_in_time, stay_days, room_no,
                check_out_time, deposit_money, room_cost, remark
            "#,
        )
        .bind(&guest.guest_name)
        .bind(&guest.guest_gender)
        .bind(guest.guest_age)
        .bind(&guest.id_card)
        .bind(&guest.phone_num)
        .bind(&guest.address)
        .bind(&guest.workplace)
        .bind(&guest.come_from)
        .bind(guest.stay_days)
        .bind(room_no)
        .bind(guest.deposit_money)
        .bind(&guest.remark)
        .fetch_one(&self.pool)
        .await
        .map_err(DbError::from_write)?;

        tracing::info!(guest_id = created.guest_id, "guest checked in");
        Ok(created)
    }

    /// Stamps a guest's check-out time and returns the updated record,
    /// or `None` when no such guest exists (nothing is mutated then).
    ///
    /// A second call simply overwrites the timestamp; there is no guard
    /// against double checkout.
    pub async fn checkout_guest(
        &self,
        guest_id: i64,
        checkout_time: DateTime<Utc>,
    ) -> Result<Option<GuestInfo>, DbError> {
        let updated = sqlx::query_as::<_, GuestInfo>(
            r#"
            UPDATE guest_info SET check_out_time = $2
            WHERE guest_id = $1
            RETURNING
                guest_id, guest_name, guest_gender, guest_age, id_card, phone_num,
                address, workplace, come_from, check_in_time, stay_days, room_no,
                check_out_time, deposit_money, room_cost, remark
            "#,
        )
        .bind(guest_id)
        .bind(checkout_time)
        .fetch_optional(&self.pool)
        .await?;

        if updated.is_some() {
            tracing::info!(guest_id, "guest checked out");
        }
        Ok(updated)
    }

    // --- Delegated aggregates ---
    //
    // These invoke named store-side routines. The repository owns only the
    // call signature and the row shape; the aggregation logic lives in the
    // database.

    /// Currently-free rooms of the given type, via
    /// `search_free_rooms_by_type`.
    pub async fn search_free_rooms_by_type(
        &self,
        room_type_name: &str,
    ) -> Result<Vec<FreeRoom>, DbError> {
        let rooms = sqlx::query_as::<_, FreeRoom>(
            "SELECT room_no, room_type_name, room_price, room_floor, room_bed_count \
             FROM search_free_rooms_by_type($1)",
        )
        .bind(room_type_name)
        .fetch_all(&self.pool)
        .await?;
        Ok(rooms)
    }

    /// Fuzzy guest lookup over name / room number / ID document, via
    /// `search_guest_info_by_keyword`.
    pub async fn search_guests_by_keyword(
        &self,
        keyword: &str,
    ) -> Result<Vec<GuestSearchRow>, DbError> {
        let guests = sqlx::query_as::<_, GuestSearchRow>(
            r#"
            SELECT
                guest_id, guest_name, guest_gender, guest_age, id_card, phone_num,
                address, workplace, come_from, check_in_time, stay_days, room_no,
                check_out_time, deposit_money, room_cost, remark,
                room_type_name, room_price
            FROM search_guest_info_by_keyword($1)
            "#,
        )
        .bind(keyword)
        .fetch_all(&self.pool)
        .await?;
        Ok(guests)
    }

    /// Per-type occupancy over a date range, via `room_occupancy_rate`.
    pub async fn occupancy_rate(
        &self,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<Vec<OccupancyRow>, DbError> {
        let rows = sqlx::query_as::<_, OccupancyRow>(
            "SELECT room_type_name, total_room_count, occupied_room_count, occupancy_rate \
             FROM room_occupancy_rate($1, $2)",
        )
        .bind(start_date)
        .bind(end_date)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Monthly revenue figures for one year, via `annual_revenue`.
    /// Months with no checked-out stays produce no row.
    pub async fn annual_revenue(&self, year: i32) -> Result<Vec<MonthlyRevenue>, DbError> {
        let rows = sqlx::query_as::<_, MonthlyRevenue>(
            "SELECT month, monthly_revenue, guest_count FROM annual_revenue($1)",
        )
        .bind(year)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Settlement detail for one guest, via `guest_cost_detail`. Absence
    /// is not an error here; the caller decides what a miss means.
    pub async fn guest_cost_detail(
        &self,
        guest_id: i64,
    ) -> Result<Option<GuestCostDetail>, DbError> {
        let detail = sqlx::query_as::<_, GuestCostDetail>(
            r#"
            SELECT
                guest_name, room_no, room_type_name, room_price, check_in_time,
                check_out_time, actual_stay_days, deposit_money, room_cost, refund_money
            FROM guest_cost_detail($1)
            "#,
        )
        .bind(guest_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(detail)
    }

    /// Guests whose elapsed stay exceeds their declared stay length and
    /// who have not checked out, from the `expired_stay_guest` view.
    pub async fn expired_stays(&self) -> Result<Vec<GuestInfo>, DbError> {
        let guests = sqlx::query_as::<_, GuestInfo>(
            r#"
            SELECT
                guest_id, guest_name, guest_gender, guest_age, id_card, phone_num,
                address, workplace, come_from, check_in_time, stay_days, room_no,
                check_out_time, deposit_money, room_cost, remark
            FROM expired_stay_guest
            ORDER BY guest_id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(guests)
    }
}
