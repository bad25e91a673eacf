use chrono::{Duration, NaiveDateTime, NaiveTime, Utc};
use dotenv::dotenv;
use flight_booking_system::db::Database;
use flight_booking_system::models::flight::NewFlight;
use flight_booking_system::services::flight_service::FlightService;
use flight_booking_system::utils::error::AppResult;
use rust_decimal::Decimal;

fn departing(days_out: i64, hour: u32, duration_minutes: i64) -> (NaiveDateTime, NaiveDateTime) {
    let departure = (Utc::now().date_naive() + Duration::days(days_out))
        .and_time(NaiveTime::from_hms_opt(hour, 0, 0).unwrap_or(NaiveTime::MIN));
    (departure, departure + Duration::minutes(duration_minutes))
}

fn sample_flights() -> Vec<NewFlight> {
    let schedule = [
        ("AI101", "Delhi", "Mumbai", 14, 10, 120, 800000, 200, "Air India"),
        ("AI102", "Mumbai", "Delhi", 14, 15, 120, 820000, 200, "Air India"),
        ("6E201", "Delhi", "Chennai", 15, 9, 150, 900000, 180, "IndiGo"),
        ("6E202", "Chennai", "Delhi", 15, 13, 150, 910000, 180, "IndiGo"),
        ("UK301", "Mumbai", "Chennai", 16, 12, 150, 600000, 150, "Vistara"),
        ("SG401", "Delhi", "Kolkata", 17, 7, 120, 550000, 180, "SpiceJet"),
    ];

    schedule
        .iter()
        .map(
            |&(flight_no, origin, destination, days_out, hour, minutes, fare_cents, seats, airline)| {
                let (departure, arrival) = departing(days_out, hour, minutes as i64);
                NewFlight {
                    flight_no: flight_no.to_string(),
                    origin: origin.to_string(),
                    destination: destination.to_string(),
                    departure,
                    arrival,
                    base_fare: Decimal::new(fare_cents, 2),
                    total_seats: seats,
                    airline_name: airline.to_string(),
                }
            },
        )
        .collect()
}

#[tokio::main]
async fn main() -> AppResult<()> {
    dotenv().ok();

    let database_url =
        std::env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite:flight_booking.db".to_string());

    let db = Database::new(&database_url).await?;
    Database::init_schema(db.get_pool()).await?;

    // Only seed an empty database
    let existing = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM flights")
        .fetch_one(db.get_pool())
        .await?;
    if existing > 0 {
        println!("Database already contains {} flights, skipping seed", existing);
        return Ok(());
    }

    let flight_service = FlightService::new(db.pool.clone());
    for new_flight in sample_flights() {
        let flight = flight_service.create_flight(new_flight).await?;
        println!(
            "Seeded flight {} {} -> {} ({} seats)",
            flight.flight_no, flight.origin, flight.destination, flight.total_seats
        );
    }

    Ok(())
}
