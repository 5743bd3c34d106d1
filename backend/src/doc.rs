//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers the doctor endpoints, the health probes and the
//! schema wrappers from [`crate::inbound::http::schemas`]. The document backs
//! Swagger UI in debug builds and the `openapi-dump` binary.

use crate::inbound::http::doctors::{AddDoctorRequestBody, DoctorBody, ListDoctorsResponseBody};
use crate::inbound::http::schemas::{ErrorCodeSchema, ErrorSchema};
use utoipa::OpenApi;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Doctor directory API",
        description = "Register doctors and list them with exact-match filters and pagination."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::doctors::add_doctor,
        crate::inbound::http::doctors::list_doctors,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        AddDoctorRequestBody,
        DoctorBody,
        ListDoctorsResponseBody,
        ErrorSchema,
        ErrorCodeSchema
    )),
    tags(
        (name = "doctors", description = "Doctor directory operations"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
