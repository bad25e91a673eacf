pub mod booking_route;
pub mod flight_route;
