use crate::models::flight::Flight;
use chrono::NaiveDateTime;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row};
use strum_macros::{Display, EnumString};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema, Display, EnumString,
)]
pub enum BookingStatus {
    Confirmed,
    Cancelled,
    Paid,
}

#[derive(Debug, Clone)]
pub struct Booking {
    pub booking_id: i64,
    pub flight_id: i64,
    pub passenger_name: String,
    pub seat_no: Option<String>,
    pub pnr: String,
    pub price: Decimal,
    pub status: BookingStatus,
    pub created_at: NaiveDateTime,
}

impl FromRow<'_, SqliteRow> for Booking {
    fn from_row(row: &SqliteRow) -> Result<Self, sqlx::Error> {
        let price: String = row.try_get("price")?;
        let status: String = row.try_get("status")?;
        Ok(Booking {
            booking_id: row.try_get("booking_id")?,
            flight_id: row.try_get("flight_id")?,
            passenger_name: row.try_get("passenger_name")?,
            seat_no: row.try_get("seat_no")?,
            pnr: row.try_get("pnr")?,
            price: price.parse().map_err(|e| sqlx::Error::ColumnDecode {
                index: "price".into(),
                source: Box::new(e),
            })?,
            status: status.parse().map_err(|e| sqlx::Error::ColumnDecode {
                index: "status".into(),
                source: Box::new(e),
            })?,
            created_at: row.try_get("created_at")?,
        })
    }
}

// Row values for an insert; the coordinator fills the PNR in per attempt
#[derive(Debug)]
pub struct NewBooking {
    pub flight_id: i64,
    pub passenger_name: String,
    pub seat_no: Option<String>,
    pub pnr: String,
    pub price: Decimal,
    pub status: BookingStatus,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct BookingRequest {
    pub flight_id: i64,
    pub passenger_name: String,
    pub seat_no: Option<String>,
}

#[derive(Debug, Serialize, JsonSchema)]
pub struct BookingResponse {
    pub booking_id: i64,
    pub pnr: String,
    pub flight_no: String,
    pub passenger_name: String,
    pub seat_no: Option<String>,
    pub status: BookingStatus,
    pub price: f64,
    pub departure: NaiveDateTime,
    pub origin: String,
    pub destination: String,
}

impl BookingResponse {
    pub fn new(booking: &Booking, flight: &Flight) -> Self {
        BookingResponse {
            booking_id: booking.booking_id,
            pnr: booking.pnr.clone(),
            flight_no: flight.flight_no.clone(),
            passenger_name: booking.passenger_name.clone(),
            seat_no: booking.seat_no.clone(),
            status: booking.status,
            price: booking.price.to_f64().unwrap_or_default(),
            departure: flight.departure,
            origin: flight.origin.clone(),
            destination: flight.destination.clone(),
        }
    }
}
