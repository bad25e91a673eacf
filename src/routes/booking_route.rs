use crate::models::booking::{BookingRequest, BookingResponse};
use crate::services::booking_service::BookingService;
use crate::services::flight_service::FlightService;
use crate::utils::error::AppError;
use rocket::serde::json::Json;
use rocket::serde::json::{json, Value};
use rocket::State;
use rocket_okapi::openapi;

/// Book one seat on a flight
#[openapi(tag = "Bookings")]
#[post("/bookings", format = "json", data = "<request>")]
pub async fn create_booking(
    request: Json<BookingRequest>,
    booking_service: &State<BookingService>,
    flight_service: &State<FlightService>,
) -> Result<Json<BookingResponse>, AppError> {
    let booking = booking_service.book(request.into_inner()).await?;
    let flight = flight_service.get_flight(booking.flight_id).await?;

    Ok(Json(BookingResponse::new(&booking, &flight)))
}

/// Look up a booking by its id
#[openapi(tag = "Bookings")]
#[get("/bookings/<booking_id>")]
pub async fn get_booking(
    booking_id: i64,
    booking_service: &State<BookingService>,
    flight_service: &State<FlightService>,
) -> Result<Json<BookingResponse>, AppError> {
    let booking = booking_service.get_booking(booking_id).await?;
    let flight = flight_service.get_flight(booking.flight_id).await?;

    Ok(Json(BookingResponse::new(&booking, &flight)))
}

/// Look up a booking by its reference code
#[openapi(tag = "Bookings")]
#[get("/bookings/pnr/<pnr>")]
pub async fn get_booking_by_pnr(
    pnr: String,
    booking_service: &State<BookingService>,
    flight_service: &State<FlightService>,
) -> Result<Json<BookingResponse>, AppError> {
    let booking = booking_service.get_booking_by_pnr(&pnr).await?;
    let flight = flight_service.get_flight(booking.flight_id).await?;

    Ok(Json(BookingResponse::new(&booking, &flight)))
}

/// Cancel a booking and release its seat
#[openapi(tag = "Bookings")]
#[delete("/bookings/<booking_id>")]
pub async fn cancel_booking(
    booking_id: i64,
    booking_service: &State<BookingService>,
) -> Result<Json<Value>, AppError> {
    booking_service.cancel(booking_id).await?;

    Ok(Json(json!({
        "message": format!("Booking {} has been cancelled", booking_id)
    })))
}
