#[macro_use]
extern crate rocket;

pub mod db;
pub mod models;
pub mod routes;
pub mod services;
pub mod utils;
