//! Page handlers.
//!
//! ```text
//! GET  /            -> 302 /doctor
//! GET  /doctor      search page
//! GET  /add-doctor  empty form
//! POST /add-doctor  validate, then register with the backend
//! ```

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::http::header::{self, ContentType};
use actix_web::{HttpResponse, ResponseError, get, post, web};
use tracing::{error, info, warn};

use crate::client::DirectoryClient;
use crate::forms::DoctorForm;
use crate::pages::{AddDoctorView, Pages, SearchView};
use crate::search::{SearchFilters, SearchParams, SearchResults};

pub const LIST_FAILED: &str = "Failed to load doctors. Please try again.";
pub const ADD_FAILED: &str = "Something went wrong. Please try again later.";
pub const ADD_SUCCEEDED: &str = "Doctor has been added successfully.";

/// Dependencies shared by every page handler.
#[derive(Clone)]
pub struct FrontendState {
    pub client: Arc<dyn DirectoryClient>,
    pub pages: Arc<Pages>,
}

impl FrontendState {
    pub fn new(client: Arc<dyn DirectoryClient>, pages: Arc<Pages>) -> Self {
        Self { client, pages }
    }
}

/// Template rendering failed; the page cannot be produced.
#[derive(Debug, thiserror::Error)]
#[error("page rendering failed: {0}")]
pub struct RenderError(#[from] minijinja::Error);

impl ResponseError for RenderError {
    fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }

    fn error_response(&self) -> HttpResponse {
        error!(error = %self, "failed to render page");
        HttpResponse::InternalServerError()
            .content_type(ContentType::plaintext())
            .body("Internal Server Error")
    }
}

fn html(status: StatusCode, body: String) -> HttpResponse {
    HttpResponse::build(status)
        .content_type(ContentType::html())
        .body(body)
}

/// Send visitors to the search page.
#[get("/")]
pub async fn index() -> HttpResponse {
    HttpResponse::Found()
        .insert_header((header::LOCATION, "/doctor"))
        .finish()
}

/// Search doctors by specialty and location, then by minimum rating.
#[get("/doctor")]
pub async fn search_doctors(
    state: web::Data<FrontendState>,
    params: web::Query<SearchParams>,
) -> Result<HttpResponse, RenderError> {
    let filters = SearchFilters::from(params.into_inner());
    match state.client.list_doctors(&filters.list_query()).await {
        Ok(listing) => {
            let results = SearchResults::from_listing(&filters, listing);
            let body = state.pages.search(&SearchView {
                filters: &filters,
                results: Some(&results),
                error: None,
            })?;
            Ok(html(StatusCode::OK, body))
        }
        Err(err) => {
            warn!(error = %err, "doctor search failed");
            let body = state.pages.search(&SearchView {
                filters: &filters,
                results: None,
                error: Some(LIST_FAILED),
            })?;
            Ok(html(StatusCode::BAD_GATEWAY, body))
        }
    }
}

/// Show the empty add-doctor form.
#[get("/add-doctor")]
pub async fn add_doctor_form(
    state: web::Data<FrontendState>,
) -> Result<HttpResponse, RenderError> {
    let body = state.pages.add_doctor(&AddDoctorView::default())?;
    Ok(html(StatusCode::OK, body))
}

/// Validate the submitted form and register the doctor.
///
/// Invalid forms are re-rendered with field errors and never reach the
/// backend. A successful submission clears the form.
#[post("/add-doctor")]
pub async fn submit_doctor(
    state: web::Data<FrontendState>,
    form: web::Form<DoctorForm>,
) -> Result<HttpResponse, RenderError> {
    let form = form.into_inner();
    let submission = match form.validate() {
        Ok(submission) => submission,
        Err(errors) => {
            let body = state.pages.add_doctor(&AddDoctorView {
                form: Some(&form),
                errors: Some(&errors),
                ..AddDoctorView::default()
            })?;
            return Ok(html(StatusCode::UNPROCESSABLE_ENTITY, body));
        }
    };

    match state.client.add_doctor(&submission).await {
        Ok(doctor) => {
            info!(doctor_id = %doctor.id, "doctor registered");
            let body = state.pages.add_doctor(&AddDoctorView {
                success: Some(ADD_SUCCEEDED),
                ..AddDoctorView::default()
            })?;
            Ok(html(StatusCode::OK, body))
        }
        Err(err) => {
            warn!(error = %err, "doctor registration failed");
            let body = state.pages.add_doctor(&AddDoctorView {
                form: Some(&form),
                failure: Some(ADD_FAILED),
                ..AddDoctorView::default()
            })?;
            Ok(html(StatusCode::BAD_GATEWAY, body))
        }
    }
}

/// Register the page routes.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(index)
        .service(search_doctors)
        .service(add_doctor_form)
        .service(submit_doctor);
}

#[cfg(test)]
#[path = "routes_tests.rs"]
mod tests;
