//! Domain ports and supporting types for the hexagonal boundary.

mod doctor_command;
mod doctor_query;
mod doctor_repository;

#[cfg(test)]
pub use doctor_command::MockDoctorCommand;
pub use doctor_command::{AddDoctorRequest, AddDoctorResponse, DoctorCommand};
#[cfg(test)]
pub use doctor_query::MockDoctorQuery;
pub use doctor_query::{DoctorQuery, ListDoctorsRequest, ListDoctorsResponse};
#[cfg(test)]
pub use doctor_repository::MockDoctorRepository;
pub use doctor_repository::{DoctorRepository, DoctorRepositoryError};
