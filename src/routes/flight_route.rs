use crate::models::booking::BookingResponse;
use crate::models::flight::{FlightSearchQuery, FlightSearchResponse};
use crate::services::booking_service::BookingService;
use crate::services::flight_service::FlightService;
use crate::utils::error::AppError;
use chrono::NaiveDate;
use rocket::serde::json::Json;
use rocket::State;
use rocket_okapi::openapi;

/// Search flights
#[openapi(tag = "Flights")]
#[get("/flights/search?<origin>&<destination>&<date>&<sort_by>")]
pub async fn search_flights(
    origin: Option<String>,
    destination: Option<String>,
    date: Option<String>,
    sort_by: Option<String>,
    flight_service: &State<FlightService>,
) -> Result<Json<FlightSearchResponse>, AppError> {
    let date = if let Some(date) = date {
        Some(
            NaiveDate::parse_from_str(&date, "%Y-%m-%d")
                .map_err(|_| AppError::BadRequest("Invalid date format. Use YYYY-MM-DD.".into()))?,
        )
    } else {
        None
    };

    let query = FlightSearchQuery {
        origin,
        destination,
        date,
        sort_by,
    };
    let flights = flight_service.search_flights(query).await?;
    Ok(Json(flights))
}

/// List the bookings held against a flight
#[openapi(tag = "Flights")]
#[get("/flights/<flight_id>/bookings")]
pub async fn list_flight_bookings(
    flight_id: i64,
    flight_service: &State<FlightService>,
    booking_service: &State<BookingService>,
) -> Result<Json<Vec<BookingResponse>>, AppError> {
    let flight = flight_service.get_flight(flight_id).await?;
    let bookings = booking_service.bookings_for_flight(flight_id).await?;

    Ok(Json(
        bookings
            .iter()
            .map(|b| BookingResponse::new(b, &flight))
            .collect(),
    ))
}
