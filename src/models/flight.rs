use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row};
use std::str::FromStr;

#[derive(Debug, Clone)]
pub struct Flight {
    pub id: i64,
    pub flight_no: String,
    pub origin: String,
    pub destination: String,
    pub departure: NaiveDateTime,
    pub arrival: NaiveDateTime,
    pub base_fare: Decimal,
    pub total_seats: i64,
    pub seats_available: i64,
    pub airline_name: String,
}

// Fares are stored as canonical decimal strings, so the row mapping is manual
impl FromRow<'_, SqliteRow> for Flight {
    fn from_row(row: &SqliteRow) -> Result<Self, sqlx::Error> {
        let base_fare: String = row.try_get("base_fare")?;
        Ok(Flight {
            id: row.try_get("id")?,
            flight_no: row.try_get("flight_no")?,
            origin: row.try_get("origin")?,
            destination: row.try_get("destination")?,
            departure: row.try_get("departure")?,
            arrival: row.try_get("arrival")?,
            base_fare: Decimal::from_str(&base_fare).map_err(|e| sqlx::Error::ColumnDecode {
                index: "base_fare".into(),
                source: Box::new(e),
            })?,
            total_seats: row.try_get("total_seats")?,
            seats_available: row.try_get("seats_available")?,
            airline_name: row.try_get("airline_name")?,
        })
    }
}

// Input for the administrative/import path; every seat is open on creation
#[derive(Debug, Clone)]
pub struct NewFlight {
    pub flight_no: String,
    pub origin: String,
    pub destination: String,
    pub departure: NaiveDateTime,
    pub arrival: NaiveDateTime,
    pub base_fare: Decimal,
    pub total_seats: i64,
    pub airline_name: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct FlightSearchQuery {
    pub origin: Option<String>,
    pub destination: Option<String>,
    pub date: Option<NaiveDate>,
    pub sort_by: Option<String>,
}

#[derive(Debug, Serialize, JsonSchema)]
pub struct FlightSearchResponse {
    pub flights: Vec<FlightSummary>,
}

// Single flight in FlightSearchResponse, priced at query time
#[derive(Debug, Serialize, JsonSchema)]
pub struct FlightSummary {
    pub flight_id: i64,
    pub flight_no: String,
    pub origin: String,
    pub destination: String,
    pub departure: NaiveDateTime,
    pub arrival: NaiveDateTime,
    pub duration_hours: f64,
    pub current_price: f64,
    pub seats_available: i64,
    pub airline_name: String,
}
