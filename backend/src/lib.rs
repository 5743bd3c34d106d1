//! Doctor directory backend library.
//!
//! Hexagonal layout: `domain` holds records, ports and services; `inbound`
//! adapts HTTP onto the driving ports; `outbound` implements the record store.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod settings;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use middleware::Trace;
