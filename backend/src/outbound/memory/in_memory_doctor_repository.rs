//! `DoctorRepository` backed by a vector behind an async lock.
//!
//! Records are listed in insertion order. Nothing survives a restart.

use async_trait::async_trait;
use pagination::PageRequest;
use tokio::sync::RwLock;

use crate::domain::ports::{DoctorRepository, DoctorRepositoryError};
use crate::domain::{Doctor, DoctorFilter, DoctorId, NewDoctor};

/// Volatile doctor store.
#[derive(Debug, Default)]
pub struct InMemoryDoctorRepository {
    doctors: RwLock<Vec<Doctor>>,
}

impl InMemoryDoctorRepository {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DoctorRepository for InMemoryDoctorRepository {
    async fn insert(&self, doctor: &NewDoctor) -> Result<Doctor, DoctorRepositoryError> {
        let stored = Doctor::new(DoctorId::random(), doctor.clone());
        self.doctors.write().await.push(stored.clone());
        Ok(stored)
    }

    async fn find(
        &self,
        filter: &DoctorFilter,
        window: PageRequest,
    ) -> Result<Vec<Doctor>, DoctorRepositoryError> {
        // Offsets beyond addressable memory cannot match anything.
        let skip = usize::try_from(window.offset()).unwrap_or(usize::MAX);
        let take = usize::try_from(window.limit()).unwrap_or(usize::MAX);

        let doctors = self.doctors.read().await;
        Ok(doctors
            .iter()
            .filter(|doctor| filter.matches(doctor))
            .skip(skip)
            .take(take)
            .cloned()
            .collect())
    }

    async fn count(&self, filter: &DoctorFilter) -> Result<u64, DoctorRepositoryError> {
        let doctors = self.doctors.read().await;
        let matching = doctors.iter().filter(|doctor| filter.matches(doctor)).count();
        Ok(u64::try_from(matching).unwrap_or(u64::MAX))
    }
}

#[cfg(test)]
mod tests {
    use rstest::{fixture, rstest};

    use super::*;

    fn doctor(name: &str, specialty: &str, location: &str) -> NewDoctor {
        NewDoctor {
            name: name.to_owned(),
            specialty: specialty.to_owned(),
            location: location.to_owned(),
            experience: 5.0,
            rating: 4.0,
        }
    }

    #[fixture]
    async fn populated() -> InMemoryDoctorRepository {
        let repo = InMemoryDoctorRepository::new();
        for (name, specialty, location) in [
            ("A", "Cardiology", "NY"),
            ("B", "Cardiology", "LA"),
            ("C", "Dermatology", "NY"),
        ] {
            repo.insert(&doctor(name, specialty, location))
                .await
                .expect("insert succeeds");
        }
        repo
    }

    #[rstest]
    #[tokio::test]
    async fn insert_assigns_distinct_ids() {
        let repo = InMemoryDoctorRepository::new();
        let first = repo.insert(&doctor("A", "X", "Y")).await.expect("insert");
        let second = repo.insert(&doctor("A", "X", "Y")).await.expect("insert");

        assert_ne!(first.id(), second.id());
        assert_eq!(first.fields(), second.fields());
    }

    #[rstest]
    #[case(None, None, 3)]
    #[case(Some("Cardiology"), None, 2)]
    #[case(None, Some("NY"), 2)]
    #[case(Some("Cardiology"), Some("NY"), 1)]
    #[case(Some("cardiology"), None, 0)]
    #[tokio::test]
    async fn count_applies_exact_filters(
        #[future] populated: InMemoryDoctorRepository,
        #[case] specialty: Option<&str>,
        #[case] location: Option<&str>,
        #[case] expected: u64,
    ) {
        let repo = populated.await;
        let filter = DoctorFilter::new(specialty.map(str::to_owned), location.map(str::to_owned));

        assert_eq!(repo.count(&filter).await.expect("count"), expected);
    }

    #[rstest]
    #[tokio::test]
    async fn find_windows_filtered_records_in_insertion_order(
        #[future] populated: InMemoryDoctorRepository,
    ) {
        let repo = populated.await;
        let window = PageRequest::new(2, 1).expect("valid window");

        let found = repo
            .find(&DoctorFilter::default(), window)
            .await
            .expect("find");

        let names: Vec<_> = found.iter().map(Doctor::name).collect();
        assert_eq!(names, ["B"]);
    }

    #[rstest]
    #[tokio::test]
    async fn find_past_the_end_is_empty(#[future] populated: InMemoryDoctorRepository) {
        let repo = populated.await;
        let window = PageRequest::new(5, 10).expect("valid window");

        let found = repo
            .find(&DoctorFilter::default(), window)
            .await
            .expect("find");

        assert!(found.is_empty());
    }
}
