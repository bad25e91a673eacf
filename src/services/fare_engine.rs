use chrono::NaiveDateTime;
use rust_decimal::{Decimal, RoundingStrategy};

/// Dynamic fare for a flight, derived from how full it is and how close
/// departure is. Pure: same inputs always give the same price, so it is safe
/// to call once per search row and again at booking time.
///
/// Surcharge factors combine multiplicatively, the result is rounded
/// half-up to cents and never drops below the base fare.
pub fn quote(
    base_fare: Decimal,
    total_seats: i64,
    seats_available: i64,
    departure: NaiveDateTime,
    now: NaiveDateTime,
) -> Decimal {
    if total_seats <= 0 {
        return base_fare;
    }

    let sold = total_seats - seats_available;
    let occupancy = Decimal::from(sold) / Decimal::from(total_seats);

    let seat_factor = if occupancy >= Decimal::new(90, 2) {
        Decimal::new(150, 2)
    } else if occupancy >= Decimal::new(70, 2) {
        Decimal::new(125, 2)
    } else {
        Decimal::ONE
    };

    // num_days truncates toward zero; departures in the past land in the
    // steepest tier
    let days_left = (departure - now).num_days();
    let time_factor = if days_left < 1 {
        Decimal::new(140, 2)
    } else if days_left < 3 {
        Decimal::new(125, 2)
    } else if days_left < 7 {
        Decimal::new(110, 2)
    } else {
        Decimal::ONE
    };

    let price = (base_fare * seat_factor * time_factor)
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);

    price.max(base_fare)
}
