//! HTTP adapter: route handlers, error mapping, and shared state.

pub mod employees;
pub mod error;
pub mod health;
pub mod state;

pub use error::ApiResult;

use actix_web::{Scope, web};

use crate::domain::Error;

fn path_error_handler(
    err: actix_web::error::PathError,
    _req: &actix_web::HttpRequest,
) -> actix_web::Error {
    Error::invalid_request(err.to_string()).into()
}

fn json_error_handler(
    err: actix_web::error::JsonPayloadError,
    _req: &actix_web::HttpRequest,
) -> actix_web::Error {
    Error::invalid_request(err.to_string()).into()
}

/// Build the `/api` scope with all employee routes registered.
///
/// Extractor failures (non-integer path ids, malformed JSON bodies) are
/// rerouted through the domain error type so they render as a 400 with the
/// standard `{info}` payload instead of actix's plain-text default.
pub fn api_scope() -> Scope {
    web::scope("/api")
        .app_data(web::PathConfig::default().error_handler(path_error_handler))
        .app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .service(employees::list_employees)
        .service(employees::get_employee)
        .service(employees::add_employee)
        .service(employees::update_employee)
        .service(employees::delete_employee)
}
