use crate::models::booking::{Booking, BookingStatus, NewBooking};
use crate::utils::error::{AppError, AppResult};
use sqlx::sqlite::SqliteExecutor;

// Durable booking records. Plain CRUD over the bookings table; the functions
// take any executor so the coordinator can run them inside the same
// transaction as the inventory ledger.

const BOOKING_COLUMNS: &str =
    "booking_id, flight_id, passenger_name, seat_no, pnr, price, status, created_at";

pub async fn get(executor: impl SqliteExecutor<'_>, booking_id: i64) -> AppResult<Booking> {
    sqlx::query_as::<_, Booking>(&format!(
        "SELECT {BOOKING_COLUMNS} FROM bookings WHERE booking_id = ?"
    ))
    .bind(booking_id)
    .fetch_optional(executor)
    .await?
    .ok_or(AppError::BookingNotFound)
}

pub async fn get_by_pnr(executor: impl SqliteExecutor<'_>, pnr: &str) -> AppResult<Booking> {
    sqlx::query_as::<_, Booking>(&format!(
        "SELECT {BOOKING_COLUMNS} FROM bookings WHERE pnr = ?"
    ))
    .bind(pnr)
    .fetch_optional(executor)
    .await?
    .ok_or(AppError::BookingNotFound)
}

pub async fn list_by_flight(
    executor: impl SqliteExecutor<'_>,
    flight_id: i64,
) -> AppResult<Vec<Booking>> {
    let bookings = sqlx::query_as::<_, Booking>(&format!(
        "SELECT {BOOKING_COLUMNS} FROM bookings WHERE flight_id = ? ORDER BY booking_id"
    ))
    .bind(flight_id)
    .fetch_all(executor)
    .await?;

    Ok(bookings)
}

/// Inserts a booking row and returns its id. A PNR collision surfaces as
/// `DuplicatePnr` so the caller can regenerate and retry.
pub async fn insert(executor: impl SqliteExecutor<'_>, booking: &NewBooking) -> AppResult<i64> {
    let result = sqlx::query(
        "INSERT INTO bookings (flight_id, passenger_name, seat_no, pnr, price, status, created_at) \
         VALUES (?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(booking.flight_id)
    .bind(&booking.passenger_name)
    .bind(&booking.seat_no)
    .bind(&booking.pnr)
    .bind(booking.price.to_string())
    .bind(booking.status.to_string())
    .bind(booking.created_at)
    .execute(executor)
    .await;

    match result {
        Ok(done) => Ok(done.last_insert_rowid()),
        Err(sqlx::Error::Database(e)) if e.is_unique_violation() => Err(AppError::DuplicatePnr),
        Err(e) => Err(e.into()),
    }
}

pub async fn update_status(
    executor: impl SqliteExecutor<'_>,
    booking_id: i64,
    status: BookingStatus,
) -> AppResult<()> {
    let result = sqlx::query("UPDATE bookings SET status = ? WHERE booking_id = ?")
        .bind(status.to_string())
        .bind(booking_id)
        .execute(executor)
        .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::BookingNotFound);
    }
    Ok(())
}

/// Guarded Confirmed/Paid -> Cancelled transition. Returns `false` when the
/// booking was already cancelled, which keeps concurrent cancels idempotent
/// without a read-then-write race.
pub async fn mark_cancelled(executor: impl SqliteExecutor<'_>, booking_id: i64) -> AppResult<bool> {
    let result = sqlx::query("UPDATE bookings SET status = ? WHERE booking_id = ? AND status <> ?")
        .bind(BookingStatus::Cancelled.to_string())
        .bind(booking_id)
        .bind(BookingStatus::Cancelled.to_string())
        .execute(executor)
        .await?;

    Ok(result.rows_affected() == 1)
}
