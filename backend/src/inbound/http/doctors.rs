//! Doctor directory HTTP handlers.
//!
//! ```text
//! POST /add-doctor
//! GET  /list-doctor-with-filter?specialty=&location=&page=&limit=
//! ```

use actix_web::{HttpResponse, get, post, web};
use pagination::{PageRequest, PaginationError};
use serde::{Deserialize, Serialize};
use serde_json::json;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use crate::domain::ports::{AddDoctorRequest, ListDoctorsRequest};
use crate::domain::{Doctor, DoctorFilter, Error, NewDoctor};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;

/// Request payload for registering a doctor.
///
/// Every field is required; values are stored as submitted.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct AddDoctorRequestBody {
    #[schema(example = "Dr. Asha Rao")]
    pub name: String,
    #[schema(example = "Cardiology")]
    pub specialty: String,
    #[schema(example = "NY")]
    pub location: String,
    /// Years of experience.
    #[schema(example = 5)]
    pub experience: f64,
    /// Rating on a one to five scale. Not range-checked here.
    #[schema(example = 4)]
    pub rating: f64,
}

impl From<AddDoctorRequestBody> for NewDoctor {
    fn from(value: AddDoctorRequestBody) -> Self {
        Self {
            name: value.name,
            specialty: value.specialty,
            location: value.location,
            experience: value.experience,
            rating: value.rating,
        }
    }
}

/// Stored doctor record.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct DoctorBody {
    pub id: Uuid,
    pub name: String,
    pub specialty: String,
    pub location: String,
    pub experience: f64,
    pub rating: f64,
}

impl From<Doctor> for DoctorBody {
    fn from(value: Doctor) -> Self {
        let id = *value.id().as_uuid();
        let fields = value.fields().clone();
        Self {
            id,
            name: fields.name,
            specialty: fields.specialty,
            location: fields.location,
            experience: fields.experience,
            rating: fields.rating,
        }
    }
}

/// Query parameters for listing doctors.
///
/// `page` and `limit` arrive as text so malformed values produce a
/// structured `invalid_request` body instead of the extractor's default.
#[derive(Debug, Default, Deserialize, Serialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListDoctorsQuery {
    /// Exact specialty to match.
    pub specialty: Option<String>,
    /// Exact location to match.
    pub location: Option<String>,
    /// One-based page number, default 1.
    #[param(value_type = Option<u32>, minimum = 1)]
    pub page: Option<String>,
    /// Page size, default 10.
    #[param(value_type = Option<u32>, minimum = 1)]
    pub limit: Option<String>,
}

/// One page of doctors plus the filtered total.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct ListDoctorsResponseBody {
    pub doctors: Vec<DoctorBody>,
    /// Records matching the filter across all pages.
    pub total: u64,
}

fn map_pagination_error(error: PaginationError) -> Error {
    Error::invalid_request(error.to_string()).with_details(json!({
        "field": error.field(),
        "code": error.code(),
    }))
}

/// Register a new doctor.
#[utoipa::path(
    post,
    path = "/add-doctor",
    request_body = AddDoctorRequestBody,
    responses(
        (status = 201, description = "Doctor created", body = DoctorBody),
        (status = 400, description = "Malformed request body", body = ErrorSchema),
        (status = 500, description = "Record store failure", body = ErrorSchema)
    ),
    tags = ["doctors"],
    operation_id = "addDoctor"
)]
#[post("/add-doctor")]
pub async fn add_doctor(
    state: web::Data<HttpState>,
    payload: web::Json<AddDoctorRequestBody>,
) -> ApiResult<HttpResponse> {
    let request = AddDoctorRequest {
        doctor: payload.into_inner().into(),
    };
    let response = state.doctors.add_doctor(request).await?;
    Ok(HttpResponse::Created().json(DoctorBody::from(response.doctor)))
}

/// List doctors matching exact specialty and location filters.
#[utoipa::path(
    get,
    path = "/list-doctor-with-filter",
    params(ListDoctorsQuery),
    responses(
        (status = 200, description = "Matching doctors", body = ListDoctorsResponseBody),
        (status = 400, description = "Invalid page or limit", body = ErrorSchema),
        (status = 500, description = "Record store failure", body = ErrorSchema)
    ),
    tags = ["doctors"],
    operation_id = "listDoctors"
)]
#[get("/list-doctor-with-filter")]
pub async fn list_doctors(
    state: web::Data<HttpState>,
    query: web::Query<ListDoctorsQuery>,
) -> ApiResult<HttpResponse> {
    let ListDoctorsQuery {
        specialty,
        location,
        page,
        limit,
    } = query.into_inner();
    let page =
        PageRequest::parse(page.as_deref(), limit.as_deref()).map_err(map_pagination_error)?;

    let response = state
        .doctors_query
        .list_doctors(ListDoctorsRequest {
            filter: DoctorFilter::new(specialty, location),
            page,
        })
        .await?;

    let (doctors, total) = response.page.into_parts();
    Ok(HttpResponse::Ok().json(ListDoctorsResponseBody {
        doctors: doctors.into_iter().map(DoctorBody::from).collect(),
        total,
    }))
}

#[cfg(test)]
#[path = "doctors_tests.rs"]
mod tests;
