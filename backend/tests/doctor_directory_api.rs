//! End-to-end checks of the doctor directory API over the in-memory store.

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::{App, test, web};
use doctor_directory::Trace;
use doctor_directory::domain::TRACE_ID_HEADER;
use doctor_directory::inbound::http::configure;
use doctor_directory::inbound::http::error::route_not_found;
use doctor_directory::inbound::http::state::HttpState;
use doctor_directory::outbound::memory::InMemoryDoctorRepository;
use serde_json::{Value, json};

fn app() -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let state = HttpState::from_repository(Arc::new(InMemoryDoctorRepository::new()));
    App::new()
        .app_data(web::Data::new(state))
        .wrap(Trace)
        .configure(configure)
        .default_service(web::to(route_not_found))
}

#[actix_web::test]
async fn created_doctor_is_listed_under_its_specialty_only() {
    let app = test::init_service(app()).await;

    let created = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/add-doctor")
            .set_json(json!({
                "name": "A",
                "specialty": "Cardiology",
                "location": "NY",
                "experience": 5,
                "rating": 4
            }))
            .to_request(),
    )
    .await;
    assert_eq!(created.status(), StatusCode::CREATED);
    assert!(created.headers().contains_key(TRACE_ID_HEADER));
    let created: Value = test::read_body_json(created).await;

    let cardiology: Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::get()
            .uri("/list-doctor-with-filter?specialty=Cardiology")
            .to_request(),
    )
    .await;
    assert_eq!(cardiology["total"], 1);
    assert_eq!(cardiology["doctors"][0], created);

    let neurology: Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::get()
            .uri("/list-doctor-with-filter?specialty=Neurology")
            .to_request(),
    )
    .await;
    assert_eq!(neurology, json!({ "doctors": [], "total": 0 }));
}

#[actix_web::test]
async fn error_bodies_carry_the_response_trace_id() {
    let app = test::init_service(app()).await;

    let response = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/list-doctor-with-filter?page=0")
            .to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let header = response
        .headers()
        .get(TRACE_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned)
        .expect("trace-id header");
    let body: Value = test::read_body_json(response).await;
    assert_eq!(body["traceId"], header.as_str());
}
