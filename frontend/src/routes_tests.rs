//! Tests for the page handlers.

use actix_web::{App, test as actix_test};
use rstest::rstest;

use super::*;
use crate::client::{
    BackendError, DoctorListing, DoctorRecord, DoctorSubmission, ListQuery, MockDirectoryClient,
};
use crate::search::PAGE_LIMIT;

fn state(client: MockDirectoryClient) -> web::Data<FrontendState> {
    let pages = Pages::new().expect("templates compile");
    web::Data::new(FrontendState::new(Arc::new(client), Arc::new(pages)))
}

fn record(name: &str, rating: f64) -> DoctorRecord {
    DoctorRecord {
        id: format!("id-{name}"),
        name: name.to_owned(),
        specialty: "Cardiology".to_owned(),
        location: "NY".to_owned(),
        experience: 5.0,
        rating,
    }
}

async fn body_text(response: actix_web::dev::ServiceResponse) -> String {
    let bytes = actix_test::read_body(response).await;
    String::from_utf8(bytes.to_vec()).expect("utf8 body")
}

const VALID_FORM: &str = "name=Dr.+Asha+Rao&specialty=Cardiology&location=NY&experience=5&rating=4";

fn post_form(body: &'static str) -> actix_http::Request {
    actix_test::TestRequest::post()
        .uri("/add-doctor")
        .insert_header(ContentType::form_url_encoded())
        .set_payload(body)
        .to_request()
}

#[actix_web::test]
async fn root_redirects_to_search() {
    let app = actix_test::init_service(
        App::new()
            .app_data(state(MockDirectoryClient::new()))
            .configure(configure),
    )
    .await;

    let response =
        actix_test::call_service(&app, actix_test::TestRequest::get().uri("/").to_request()).await;

    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(
        response.headers().get(header::LOCATION).and_then(|v| v.to_str().ok()),
        Some("/doctor")
    );
}

#[rstest]
#[case("name=&specialty=Cardiology&location=NY&experience=5&rating=4")]
#[case("name=+++&specialty=Cardiology&location=NY&experience=5&rating=4")]
#[case("specialty=Cardiology&location=NY&experience=5&rating=4")]
#[actix_web::test]
async fn empty_name_blocks_submission_without_backend_call(#[case] body: &'static str) {
    let mut client = MockDirectoryClient::new();
    client.expect_add_doctor().times(0);
    let app =
        actix_test::init_service(App::new().app_data(state(client)).configure(configure)).await;

    let response = actix_test::call_service(&app, post_form(body)).await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let html = body_text(response).await;
    assert!(html.contains("Name is required."));
    assert!(!html.contains(ADD_SUCCEEDED));
}

#[actix_web::test]
async fn valid_submission_converts_numbers_and_clears_form() {
    let mut client = MockDirectoryClient::new();
    client
        .expect_add_doctor()
        .withf(|doctor: &DoctorSubmission| {
            doctor.name == "Dr. Asha Rao"
                && doctor.specialty == "Cardiology"
                && doctor.location == "NY"
                && doctor.experience == 5.0
                && doctor.rating == 4.0
        })
        .times(1)
        .returning(|_| Ok(record("Dr. Asha Rao", 4.0)));
    let app =
        actix_test::init_service(App::new().app_data(state(client)).configure(configure)).await;

    let response = actix_test::call_service(&app, post_form(VALID_FORM)).await;

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains(ADD_SUCCEEDED));
    assert!(!html.contains("value=\"Cardiology\""));
}

#[actix_web::test]
async fn backend_failure_keeps_input_and_shows_retry_message() {
    let mut client = MockDirectoryClient::new();
    client
        .expect_add_doctor()
        .times(1)
        .returning(|_| Err(BackendError::Transport("connection refused".to_owned())));
    let app =
        actix_test::init_service(App::new().app_data(state(client)).configure(configure)).await;

    let response = actix_test::call_service(&app, post_form(VALID_FORM)).await;

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let html = body_text(response).await;
    assert!(html.contains(ADD_FAILED));
    assert!(html.contains("value=\"Cardiology\""));
    assert!(!html.contains("connection refused"));
}

#[actix_web::test]
async fn search_sends_filters_without_rating_and_filters_locally() {
    let mut client = MockDirectoryClient::new();
    client
        .expect_list_doctors()
        .withf(|query: &ListQuery| {
            *query
                == ListQuery {
                    specialty: Some("Cardiology".to_owned()),
                    location: None,
                    page: 1,
                    limit: PAGE_LIMIT,
                }
        })
        .times(1)
        .returning(|_| {
            Ok(DoctorListing {
                doctors: vec![record("Low", 2.0), record("High", 4.5)],
                total: 2,
            })
        });
    let app =
        actix_test::init_service(App::new().app_data(state(client)).configure(configure)).await;
    let request = actix_test::TestRequest::get()
        .uri("/doctor?specialty=Cardiology&location=&rating=4")
        .to_request();

    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains("High"));
    assert!(!html.contains(">Low<"));
    assert!(html.contains("2 doctors match your search."));
}

#[actix_web::test]
async fn search_failure_renders_retry_message() {
    let mut client = MockDirectoryClient::new();
    client.expect_list_doctors().times(1).returning(|_| {
        Err(BackendError::Status {
            status: 500,
            message: "Server error while listing doctors".to_owned(),
        })
    });
    let app =
        actix_test::init_service(App::new().app_data(state(client)).configure(configure)).await;
    let request = actix_test::TestRequest::get().uri("/doctor?page=3").to_request();

    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let html = body_text(response).await;
    assert!(html.contains(LIST_FAILED));
    assert!(html.contains("Page 3"));
}

#[actix_web::test]
async fn add_form_links_to_search() {
    let app = actix_test::init_service(
        App::new()
            .app_data(state(MockDirectoryClient::new()))
            .configure(configure),
    )
    .await;

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::get().uri("/add-doctor").to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains("Full Name"));
    assert!(html.contains("Browse Doctor"));
}
