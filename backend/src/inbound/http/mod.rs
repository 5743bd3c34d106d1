//! HTTP inbound adapter exposing REST endpoints.

use actix_web::web;

pub mod doctors;
pub mod error;
pub mod health;
pub mod schemas;
pub mod state;

pub use error::ApiResult;

/// Request body size limit for JSON payloads.
const JSON_LIMIT_BYTES: usize = 16 * 1024;

/// Register the doctor endpoints and their extractor configuration.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use doctor_directory::inbound::http::configure;
///
/// let _app = App::new().configure(configure);
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::JsonConfig::default()
            .limit(JSON_LIMIT_BYTES)
            .error_handler(error::json_error_handler),
    )
    .app_data(web::QueryConfig::default().error_handler(error::query_error_handler))
    .service(doctors::add_doctor)
    .service(doctors::list_doctors);
}
