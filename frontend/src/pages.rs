//! HTML rendering for the search and add-doctor pages.
//!
//! Templates are compiled into the binary and rendered with minijinja. HTML
//! auto-escaping applies to every value except the JSON-LD block, which is
//! serialised and escaped for a `<script>` context here.

use minijinja::{Environment, Error, Value, context};
use serde::Serialize;
use serde_json::json;

use crate::client::DoctorRecord;
use crate::forms::{DoctorForm, FieldErrors};
use crate::search::{SearchFilters, SearchResults};

const LAYOUT_TEMPLATE: &str = include_str!("../templates/layout.html");
const DOCTORS_TEMPLATE: &str = include_str!("../templates/doctors.html");
const ADD_DOCTOR_TEMPLATE: &str = include_str!("../templates/add_doctor.html");

const DESCRIPTION: &str = "Search and filter top-rated doctors by specialty and location.";
const SEARCH_TITLE: &str = "Find Top Doctors | Health Finder";
const SEARCH_CANONICAL: &str = "http://localhost:3000/doctors";
const ADD_TITLE: &str = "Add/Registeration for Doctor | Health Finder";
const ADD_CANONICAL: &str = "https://andaz2.onrender.com/add-doctor";

/// Review count advertised in the structured data.
const REVIEW_COUNT: u32 = 10;

const RATING_OPTIONS: [(&str, &str); 6] = [
    ("", "Minimum Rating"),
    ("1", "1 star & up"),
    ("2", "2 stars & up"),
    ("3", "3 stars & up"),
    ("4", "4 stars & up"),
    ("5", "5 stars only"),
];

#[derive(Serialize)]
struct FormField {
    name: &'static str,
    label: &'static str,
    kind: &'static str,
}

const FORM_FIELDS: [FormField; 5] = [
    FormField { name: "name", label: "Full Name", kind: "text" },
    FormField { name: "specialty", label: "Specialty", kind: "text" },
    FormField { name: "location", label: "Location", kind: "text" },
    FormField { name: "experience", label: "Experience (years)", kind: "number" },
    FormField { name: "rating", label: "Rating (1-5)", kind: "number" },
];

/// What the search page shows.
#[derive(Debug)]
pub struct SearchView<'a> {
    pub filters: &'a SearchFilters,
    /// `None` when the backend call failed.
    pub results: Option<&'a SearchResults>,
    pub error: Option<&'a str>,
}

/// What the add-doctor page shows.
#[derive(Debug, Default)]
pub struct AddDoctorView<'a> {
    pub form: Option<&'a DoctorForm>,
    pub errors: Option<&'a FieldErrors>,
    pub success: Option<&'a str>,
    pub failure: Option<&'a str>,
}

/// schema.org `ItemList` of the physicians shown on a page.
pub fn physician_list(doctors: &[DoctorRecord]) -> serde_json::Value {
    let items: Vec<_> = doctors
        .iter()
        .enumerate()
        .map(|(index, doctor)| {
            json!({
                "@type": "ListItem",
                "position": index + 1,
                "item": {
                    "@type": "Physician",
                    "name": doctor.name,
                    "medicalSpecialty": doctor.specialty,
                    "address": {
                        "@type": "PostalAddress",
                        "addressLocality": doctor.location,
                    },
                    "aggregateRating": {
                        "@type": "AggregateRating",
                        "ratingValue": doctor.rating,
                        "reviewCount": REVIEW_COUNT,
                    },
                },
            })
        })
        .collect();
    json!({
        "@context": "https://schema.org",
        "@type": "ItemList",
        "itemListElement": items,
    })
}

/// Serialise JSON for embedding inside `<script>`; markup-significant
/// characters become `\u` escapes so no value can close the element.
fn script_json(value: &serde_json::Value) -> Result<String, Error> {
    let raw = serde_json::to_string(value).map_err(|err| {
        Error::new(minijinja::ErrorKind::BadSerialization, "JSON-LD serialisation failed")
            .with_source(err)
    })?;
    Ok(raw
        .replace('<', "\\u003c")
        .replace('>', "\\u003e")
        .replace('&', "\\u0026"))
}

/// Compiled page templates.
pub struct Pages {
    env: Environment<'static>,
}

impl Pages {
    /// Compile the built-in templates.
    ///
    /// # Errors
    ///
    /// Returns a minijinja error when a template fails to parse.
    pub fn new() -> Result<Self, Error> {
        let mut env = Environment::new();
        env.add_template("layout.html", LAYOUT_TEMPLATE)?;
        env.add_template("doctors.html", DOCTORS_TEMPLATE)?;
        env.add_template("add_doctor.html", ADD_DOCTOR_TEMPLATE)?;
        env.add_filter("number", |value: f64| format!("{value}"));
        Ok(Self { env })
    }

    /// Render the search page.
    ///
    /// # Errors
    ///
    /// Returns a minijinja error when rendering fails.
    pub fn search(&self, view: &SearchView<'_>) -> Result<String, Error> {
        let shown = view.results.map_or(&[][..], |results| results.doctors.as_slice());
        let json_ld = script_json(&physician_list(shown))?;
        self.env.get_template("doctors.html")?.render(context! {
            title => SEARCH_TITLE,
            description => DESCRIPTION,
            canonical => SEARCH_CANONICAL,
            rating_options => RATING_OPTIONS,
            filters => view.filters,
            results => view.results,
            error => view.error,
            json_ld => Value::from_safe_string(json_ld),
        })
    }

    /// Render the add-doctor page.
    ///
    /// # Errors
    ///
    /// Returns a minijinja error when rendering fails.
    pub fn add_doctor(&self, view: &AddDoctorView<'_>) -> Result<String, Error> {
        let empty_form = DoctorForm::default();
        let no_errors = FieldErrors::default();
        self.env.get_template("add_doctor.html")?.render(context! {
            title => ADD_TITLE,
            description => DESCRIPTION,
            canonical => ADD_CANONICAL,
            fields => FORM_FIELDS,
            form => view.form.unwrap_or(&empty_form),
            errors => view.errors.unwrap_or(&no_errors),
            success => view.success,
            failure => view.failure,
        })
    }
}
