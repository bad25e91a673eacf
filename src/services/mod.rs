pub mod booking_service;
pub mod booking_store;
pub mod fare_engine;
pub mod flight_service;
pub mod inventory_ledger;
