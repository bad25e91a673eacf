use rocket::http::ContentType;
use rocket::http::Status;
use rocket::response::Responder;
use rocket::Request;
use rocket::Response;
use rocket_okapi::gen::OpenApiGenerator;
use rocket_okapi::okapi::openapi3::Responses;
use rocket_okapi::response::OpenApiResponderInner;
use rocket_okapi::util::ensure_status_code_exists;
use serde::Serialize;
use serde_json::json;
use std::io::Cursor;
use thiserror::Error;

#[derive(Error, Debug, Serialize)]
pub enum AppError {
    #[error("Flight not found")]
    FlightNotFound,

    #[error("Booking not found")]
    BookingNotFound,

    #[error("No seats available")]
    NoSeatsAvailable,

    #[error("Booking is already cancelled")]
    AlreadyCancelled,

    // Internal to the booking path; the coordinator retries and never
    // lets this variant reach a caller
    #[error("Booking reference already in use")]
    DuplicatePnr,

    #[error("Storage unavailable: {0}")]
    StoreUnavailable(String),

    #[error("Inventory invariant violated: {0}")]
    InvariantViolation(String),

    #[error("Bad request: {0}")]
    BadRequest(String),
}

// Any raw database failure reaching the core boundary is transient from the
// caller's point of view; not-found rows are handled with fetch_optional
impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        AppError::StoreUnavailable(err.to_string())
    }
}

// Define a type alias for the result type
pub type AppResult<T> = Result<T, AppError>;

// Format all errors from route level to an HTTP response
#[rocket::async_trait]
impl<'r> Responder<'r, 'static> for AppError {
    fn respond_to(self, _: &'r Request<'_>) -> rocket::response::Result<'static> {
        let status = match self {
            AppError::FlightNotFound => Status::NotFound,
            AppError::BookingNotFound => Status::NotFound,
            AppError::NoSeatsAvailable => Status::Conflict,
            AppError::AlreadyCancelled => Status::Conflict,
            AppError::DuplicatePnr => Status::InternalServerError,
            AppError::StoreUnavailable(_) => Status::ServiceUnavailable,
            AppError::InvariantViolation(_) => Status::InternalServerError,
            AppError::BadRequest(_) => Status::BadRequest,
        };

        let json = json!({
            "error": self.to_string()
        });

        Response::build()
            .status(status)
            .header(ContentType::JSON)
            .sized_body(None, Cursor::new(json.to_string()))
            .ok()
    }
}

impl OpenApiResponderInner for AppError {
    fn responses(_gen: &mut OpenApiGenerator) -> rocket_okapi::Result<Responses> {
        let mut responses = Responses::default();
        for status in [400, 404, 409, 500, 503] {
            ensure_status_code_exists(&mut responses, status);
        }
        Ok(responses)
    }
}
