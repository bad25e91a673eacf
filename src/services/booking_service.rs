use crate::models::booking::{Booking, BookingRequest, BookingStatus, NewBooking};
use crate::models::flight::Flight;
use crate::services::{booking_store, fare_engine, inventory_ledger};
use crate::utils::error::{AppError, AppResult};
use crate::utils::pnr;
use chrono::Utc;
use sqlx::SqlitePool;

const MAX_PNR_ATTEMPTS: u32 = 5;

/// Whether bookings that have already been paid for may still be cancelled.
#[derive(Debug, Clone)]
pub struct CancellationPolicy {
    pub allow_paid: bool,
}

impl Default for CancellationPolicy {
    fn default() -> Self {
        CancellationPolicy { allow_paid: true }
    }
}

pub struct BookingService {
    pool: SqlitePool,
    policy: CancellationPolicy,
}

impl BookingService {
    pub fn new(pool: SqlitePool) -> Self {
        BookingService {
            pool,
            policy: CancellationPolicy::default(),
        }
    }

    pub fn with_policy(pool: SqlitePool, policy: CancellationPolicy) -> Self {
        BookingService { pool, policy }
    }

    /// Books one seat on the flight. The seat reservation and the booking
    /// record commit together or not at all; any failure after the
    /// reservation rolls the seat back.
    pub async fn book(&self, request: BookingRequest) -> AppResult<Booking> {
        if request.passenger_name.trim().is_empty() {
            return Err(AppError::BadRequest("Passenger name must not be empty".into()));
        }

        let mut tx = self.pool.begin().await?;

        if !inventory_ledger::reserve_seat(&mut tx, request.flight_id).await? {
            // The guard rejects both missing and sold-out flights; look at
            // the row to report which one it was
            let exists =
                sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM flights WHERE id = ?")
                    .bind(request.flight_id)
                    .fetch_one(&mut *tx)
                    .await?;
            return if exists == 0 {
                Err(AppError::FlightNotFound)
            } else {
                Err(AppError::NoSeatsAvailable)
            };
        }

        // Re-read inside the transaction: seats_available now includes the
        // seat just reserved, which is the occupancy the fare should reflect
        let flight = sqlx::query_as::<_, Flight>(
            "SELECT id, flight_no, origin, destination, departure, arrival, base_fare, \
             total_seats, seats_available, airline_name FROM flights WHERE id = ?",
        )
        .bind(request.flight_id)
        .fetch_one(&mut *tx)
        .await?;

        if flight.seats_available < 0 || flight.seats_available > flight.total_seats {
            log::error!(
                "flight {} has {}/{} seats available",
                flight.id,
                flight.seats_available,
                flight.total_seats
            );
            return Err(AppError::InvariantViolation(format!(
                "flight {} has {} of {} seats available",
                flight.id, flight.seats_available, flight.total_seats
            )));
        }

        let now = Utc::now().naive_utc();
        let price = fare_engine::quote(
            flight.base_fare,
            flight.total_seats,
            flight.seats_available,
            flight.departure,
            now,
        );

        let mut record = NewBooking {
            flight_id: flight.id,
            passenger_name: request.passenger_name,
            seat_no: request.seat_no,
            pnr: String::new(),
            price,
            status: BookingStatus::Confirmed,
            created_at: now,
        };

        let mut created = None;
        for _ in 0..MAX_PNR_ATTEMPTS {
            record.pnr = pnr::generate();
            match booking_store::insert(&mut *tx, &record).await {
                Ok(booking_id) => {
                    created = Some(booking_id);
                    break;
                }
                Err(AppError::DuplicatePnr) => {
                    log::warn!("PNR collision on flight {}, regenerating", flight.id);
                    continue;
                }
                Err(e) => return Err(e),
            }
        }

        let Some(booking_id) = created else {
            return Err(AppError::StoreUnavailable(
                "could not allocate a unique booking reference".into(),
            ));
        };

        tx.commit().await?;

        Ok(Booking {
            booking_id,
            flight_id: record.flight_id,
            passenger_name: record.passenger_name,
            seat_no: record.seat_no,
            pnr: record.pnr,
            price: record.price,
            status: record.status,
            created_at: record.created_at,
        })
    }

    /// Cancels a booking and returns its seat to the flight, atomically.
    /// A second cancel of the same booking reports `AlreadyCancelled` and
    /// releases nothing.
    pub async fn cancel(&self, booking_id: i64) -> AppResult<()> {
        let mut tx = self.pool.begin().await?;

        let booking = booking_store::get(&mut *tx, booking_id).await?;

        if booking.status == BookingStatus::Cancelled {
            return Err(AppError::AlreadyCancelled);
        }
        if booking.status == BookingStatus::Paid && !self.policy.allow_paid {
            return Err(AppError::BadRequest(
                "Paid bookings cannot be cancelled".into(),
            ));
        }

        if !booking_store::mark_cancelled(&mut *tx, booking_id).await? {
            // Lost the race against a concurrent cancel
            return Err(AppError::AlreadyCancelled);
        }

        inventory_ledger::release_seat(&mut tx, booking.flight_id).await?;

        tx.commit().await?;
        Ok(())
    }

    pub async fn get_booking(&self, booking_id: i64) -> AppResult<Booking> {
        booking_store::get(&self.pool, booking_id).await
    }

    pub async fn get_booking_by_pnr(&self, pnr: &str) -> AppResult<Booking> {
        booking_store::get_by_pnr(&self.pool, pnr).await
    }

    pub async fn bookings_for_flight(&self, flight_id: i64) -> AppResult<Vec<Booking>> {
        booking_store::list_by_flight(&self.pool, flight_id).await
    }
}
