use crate::models::flight::{
    Flight, FlightSearchQuery, FlightSearchResponse, FlightSummary, NewFlight,
};
use crate::services::fare_engine;
use crate::utils::error::{AppError, AppResult};
use chrono::{Duration, NaiveDateTime, NaiveTime, Utc};
use rust_decimal::prelude::ToPrimitive;
use sqlx::{QueryBuilder, SqlitePool};

pub struct FlightService {
    pool: SqlitePool,
}

impl FlightService {
    pub fn new(pool: SqlitePool) -> Self {
        FlightService { pool }
    }

    // Search flights with open seats, priced at query time
    pub async fn search_flights(
        &self,
        search_query: FlightSearchQuery,
    ) -> AppResult<FlightSearchResponse> {
        let mut builder = QueryBuilder::new(
            "SELECT id, flight_no, origin, destination, departure, arrival, base_fare, \
             total_seats, seats_available, airline_name \
             FROM flights WHERE seats_available > 0",
        );

        if let Some(origin) = &search_query.origin {
            builder.push(" AND origin LIKE ");
            builder.push_bind(format!("%{}%", origin));
        }
        if let Some(destination) = &search_query.destination {
            builder.push(" AND destination LIKE ");
            builder.push_bind(format!("%{}%", destination));
        }
        if let Some(date) = search_query.date {
            let day_start = date.and_time(NaiveTime::MIN);
            let day_end = day_start + Duration::days(1);
            builder.push(" AND departure >= ");
            builder.push_bind(day_start);
            builder.push(" AND departure < ");
            builder.push_bind(day_end);
        }

        let flights: Vec<Flight> = builder.build_query_as().fetch_all(&self.pool).await?;

        let now = Utc::now().naive_utc();
        let mut results: Vec<FlightSummary> =
            flights.iter().map(|f| summarize(f, now)).collect();

        match search_query.sort_by.as_deref() {
            Some("duration") => {
                results.sort_by(|a, b| a.duration_hours.total_cmp(&b.duration_hours))
            }
            _ => results.sort_by(|a, b| a.current_price.total_cmp(&b.current_price)),
        }

        Ok(FlightSearchResponse { flights: results })
    }

    pub async fn get_flight(&self, flight_id: i64) -> AppResult<Flight> {
        sqlx::query_as::<_, Flight>(
            "SELECT id, flight_no, origin, destination, departure, arrival, base_fare, \
             total_seats, seats_available, airline_name FROM flights WHERE id = ?",
        )
        .bind(flight_id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(AppError::FlightNotFound)
    }

    // Administrative/import path; flights start with every seat open
    pub async fn create_flight(&self, new_flight: NewFlight) -> AppResult<Flight> {
        let result = sqlx::query(
            "INSERT INTO flights (flight_no, origin, destination, departure, arrival, \
             base_fare, total_seats, seats_available, airline_name) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&new_flight.flight_no)
        .bind(&new_flight.origin)
        .bind(&new_flight.destination)
        .bind(new_flight.departure)
        .bind(new_flight.arrival)
        .bind(new_flight.base_fare.to_string())
        .bind(new_flight.total_seats)
        .bind(new_flight.total_seats)
        .bind(&new_flight.airline_name)
        .execute(&self.pool)
        .await;

        let result = match result {
            Ok(done) => done,
            Err(sqlx::Error::Database(e)) if e.is_unique_violation() => {
                return Err(AppError::BadRequest(format!(
                    "Flight number {} already exists",
                    new_flight.flight_no
                )))
            }
            Err(e) => return Err(e.into()),
        };

        Ok(Flight {
            id: result.last_insert_rowid(),
            flight_no: new_flight.flight_no,
            origin: new_flight.origin,
            destination: new_flight.destination,
            departure: new_flight.departure,
            arrival: new_flight.arrival,
            base_fare: new_flight.base_fare,
            total_seats: new_flight.total_seats,
            seats_available: new_flight.total_seats,
            airline_name: new_flight.airline_name,
        })
    }
}

fn summarize(flight: &Flight, now: NaiveDateTime) -> FlightSummary {
    let price = fare_engine::quote(
        flight.base_fare,
        flight.total_seats,
        flight.seats_available,
        flight.departure,
        now,
    );
    let minutes = (flight.arrival - flight.departure).num_minutes();
    let duration_hours = ((minutes as f64 / 60.0) * 100.0).round() / 100.0;

    FlightSummary {
        flight_id: flight.id,
        flight_no: flight.flight_no.clone(),
        origin: flight.origin.clone(),
        destination: flight.destination.clone(),
        departure: flight.departure,
        arrival: flight.arrival,
        duration_hours,
        current_price: price.to_f64().unwrap_or_default(),
        seats_available: flight.seats_available,
        airline_name: flight.airline_name.clone(),
    }
}
