use anyhow::Result;
use chrono::{Duration, NaiveDateTime, NaiveTime, Utc};
use flight_booking_system::db::Database;
use flight_booking_system::models::flight::{Flight, NewFlight};
use flight_booking_system::services::flight_service::FlightService;
use rust_decimal::Decimal;
use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};

pub struct TestDb;

impl TestDb {
    // Every test gets its own private in-memory database. The pool is pinned
    // to a single connection that never expires, since an in-memory SQLite
    // database lives and dies with its connection.
    pub async fn memory_pool() -> Result<SqlitePool, sqlx::Error> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect("sqlite::memory:")
            .await?;

        Database::init_schema(&pool).await?;
        Ok(pool)
    }
}

pub fn departure_in_days(days: i64) -> NaiveDateTime {
    (Utc::now().date_naive() + Duration::days(days))
        .and_time(NaiveTime::from_hms_opt(10, 0, 0).unwrap())
}

// Helper to create test flight data with a chosen number of open seats
#[allow(clippy::too_many_arguments)]
pub async fn create_test_flight(
    pool: &SqlitePool,
    flight_no: &str,
    origin: &str,
    destination: &str,
    days_out: i64,
    base_fare: Decimal,
    total_seats: i64,
    seats_available: i64,
) -> Result<Flight> {
    let flight_service = FlightService::new(pool.clone());
    let departure = departure_in_days(days_out);

    let mut flight = flight_service
        .create_flight(NewFlight {
            flight_no: flight_no.to_string(),
            origin: origin.to_string(),
            destination: destination.to_string(),
            departure,
            arrival: departure + Duration::hours(2),
            base_fare,
            total_seats,
            airline_name: "Test Air".to_string(),
        })
        .await?;

    if seats_available != total_seats {
        sqlx::query("UPDATE flights SET seats_available = ? WHERE id = ?")
            .bind(seats_available)
            .bind(flight.id)
            .execute(pool)
            .await?;
        flight.seats_available = seats_available;
    }

    Ok(flight)
}

pub async fn seats_available(pool: &SqlitePool, flight_id: i64) -> Result<i64> {
    let seats = sqlx::query_scalar::<_, i64>("SELECT seats_available FROM flights WHERE id = ?")
        .bind(flight_id)
        .fetch_one(pool)
        .await?;
    Ok(seats)
}
