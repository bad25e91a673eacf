use crate::utils::error::AppResult;
use sqlx::SqliteConnection;

// Per-flight seat accounting. Both operations are single guarded UPDATE
// statements, so the check and the mutation cannot be interleaved by a
// concurrent caller; they run on whatever connection or transaction the
// caller owns.

/// Takes one seat from the flight. Returns `false` when the flight is sold
/// out or does not exist; the row is left untouched in either case.
pub async fn reserve_seat(conn: &mut SqliteConnection, flight_id: i64) -> AppResult<bool> {
    let result = sqlx::query(
        "UPDATE flights SET seats_available = seats_available - 1 \
         WHERE id = ? AND seats_available > 0",
    )
    .bind(flight_id)
    .execute(&mut *conn)
    .await?;

    Ok(result.rows_affected() == 1)
}

/// Returns one seat to the flight, clamped at the flight's capacity so a
/// double release cannot overshoot. Returns `false` when nothing changed.
pub async fn release_seat(conn: &mut SqliteConnection, flight_id: i64) -> AppResult<bool> {
    let result = sqlx::query(
        "UPDATE flights SET seats_available = seats_available + 1 \
         WHERE id = ? AND seats_available < total_seats",
    )
    .bind(flight_id)
    .execute(&mut *conn)
    .await?;

    Ok(result.rows_affected() == 1)
}
