//! PostgreSQL-backed `DoctorRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use diesel::pg::Pg;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use pagination::PageRequest;

use crate::domain::ports::{DoctorRepository, DoctorRepositoryError};
use crate::domain::{Doctor, DoctorFilter, NewDoctor};

use super::diesel_basic_error_mapping::{map_diesel_error, map_pool_error};
use super::models::{DoctorRow, NewDoctorRow};
use super::pool::DbPool;
use super::schema::doctors;

/// Diesel-backed implementation of the doctor repository port.
///
/// Listing order is `(created_at, id)` ascending, so pages are stable while
/// no records are inserted between requests.
#[derive(Clone)]
pub struct DieselDoctorRepository {
    pool: DbPool,
}

impl DieselDoctorRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

/// Start a boxed query constrained by the exact-match filter.
fn filtered(filter: &DoctorFilter) -> doctors::BoxedQuery<'static, Pg> {
    let mut query = doctors::table.into_boxed();
    if let Some(specialty) = filter.specialty() {
        query = query.filter(doctors::specialty.eq(specialty.to_owned()));
    }
    if let Some(location) = filter.location() {
        query = query.filter(doctors::location.eq(location.to_owned()));
    }
    query
}

/// Offsets past `i64::MAX` cannot match any row, so they saturate.
fn window_bounds(window: PageRequest) -> (i64, i64) {
    let offset = i64::try_from(window.offset()).unwrap_or(i64::MAX);
    (offset, i64::from(window.limit()))
}

#[async_trait]
impl DoctorRepository for DieselDoctorRepository {
    async fn insert(&self, doctor: &NewDoctor) -> Result<Doctor, DoctorRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        diesel::insert_into(doctors::table)
            .values(NewDoctorRow::from(doctor))
            .returning(DoctorRow::as_returning())
            .get_result::<DoctorRow>(&mut conn)
            .await
            .map(Doctor::from)
            .map_err(map_diesel_error)
    }

    async fn find(
        &self,
        filter: &DoctorFilter,
        window: PageRequest,
    ) -> Result<Vec<Doctor>, DoctorRepositoryError> {
        let (offset, limit) = window_bounds(window);
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<DoctorRow> = filtered(filter)
            .order((doctors::created_at.asc(), doctors::id.asc()))
            .offset(offset)
            .limit(limit)
            .select(DoctorRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(rows.into_iter().map(Doctor::from).collect())
    }

    async fn count(&self, filter: &DoctorFilter) -> Result<u64, DoctorRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let total: i64 = filtered(filter)
            .count()
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        u64::try_from(total).map_err(|_| DoctorRepositoryError::query("negative row count"))
    }
}
