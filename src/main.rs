#[macro_use]
extern crate rocket;

use dotenv::dotenv;
use flight_booking_system::db::Database;
use flight_booking_system::routes;
use flight_booking_system::services::booking_service::BookingService;
use flight_booking_system::services::flight_service::FlightService;
use rocket::fairing::AdHoc;
use rocket_okapi::openapi_get_routes;
use rocket_okapi::swagger_ui::{make_swagger_ui, SwaggerUIConfig};

#[launch]
async fn rocket() -> _ {
    dotenv().ok();

    let database_url =
        std::env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite:flight_booking.db".to_string());

    // Connect to the database
    let db = Database::new(&database_url)
        .await
        .expect("Failed to connect to database");
    Database::init_schema(db.get_pool())
        .await
        .expect("Failed to initialize database schema");

    let flight_service = FlightService::new(db.pool.clone());
    let booking_service = BookingService::new(db.pool.clone());

    rocket::build()
        .manage(flight_service)
        .manage(booking_service)
        .mount(
            "/api",
            openapi_get_routes![
                routes::flight_route::search_flights,
                routes::flight_route::list_flight_bookings,
                routes::booking_route::create_booking,
                routes::booking_route::get_booking,
                routes::booking_route::get_booking_by_pnr,
                routes::booking_route::cancel_booking,
            ],
        )
        .mount(
            "/swagger",
            make_swagger_ui(&SwaggerUIConfig {
                url: "/api/openapi.json".to_string(),
                ..Default::default()
            }),
        )
        .attach(AdHoc::on_response("CORS", |_, res| {
            Box::pin(async move {
                res.set_header(rocket::http::Header::new(
                    "Access-Control-Allow-Origin",
                    "*",
                ));
            })
        }))
}
