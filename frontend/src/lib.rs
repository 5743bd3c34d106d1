//! Server-rendered pages for the doctor directory.
//!
//! Two views talk to the directory API: a form that registers doctors and a
//! search page that lists them by specialty and location, narrowed further by
//! minimum rating in this process.

pub mod client;
pub mod forms;
pub mod pages;
pub mod routes;
pub mod search;
pub mod settings;

pub use client::{DirectoryClient, HttpDirectoryClient};
pub use pages::Pages;
pub use routes::FrontendState;
pub use settings::FrontendSettings;
