//! Internal Diesel row structs for the doctors table.
//!
//! These never leave the persistence layer.

use diesel::prelude::*;
use uuid::Uuid;

use crate::domain::{Doctor, DoctorId, NewDoctor};

use super::schema::doctors;

/// Row struct for reading from the doctors table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = doctors)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct DoctorRow {
    pub id: Uuid,
    pub name: String,
    pub specialty: String,
    pub location: String,
    pub experience: f64,
    pub rating: f64,
}

impl From<DoctorRow> for Doctor {
    fn from(row: DoctorRow) -> Self {
        let DoctorRow {
            id,
            name,
            specialty,
            location,
            experience,
            rating,
        } = row;
        Doctor::new(
            DoctorId::from_uuid(id),
            NewDoctor {
                name,
                specialty,
                location,
                experience,
                rating,
            },
        )
    }
}

/// Insertable struct for creating doctor records.
///
/// `id` and `created_at` take their column defaults.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = doctors)]
pub(crate) struct NewDoctorRow<'a> {
    pub name: &'a str,
    pub specialty: &'a str,
    pub location: &'a str,
    pub experience: f64,
    pub rating: f64,
}

impl<'a> From<&'a NewDoctor> for NewDoctorRow<'a> {
    fn from(doctor: &'a NewDoctor) -> Self {
        Self {
            name: &doctor.name,
            specialty: &doctor.specialty,
            location: &doctor.location,
            experience: doctor.experience,
            rating: doctor.rating,
        }
    }
}
