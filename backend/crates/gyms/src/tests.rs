//! Unit tests for the gym use cases, backed by an in-memory repository.

use std::sync::{Arc, Mutex};

use auth::Identity;

use crate::application::{CreateGymInput, CreateGymUseCase, ListGymsUseCase};
use crate::domain::entities::Gym;
use crate::domain::repository::GymRepository;
use crate::error::{GymError, GymResult};

/// In-memory gym repository enforcing the (location, setting_style) key
#[derive(Clone, Default)]
struct MemGymRepository {
    gyms: Arc<Mutex<Vec<Gym>>>,
}

impl GymRepository for MemGymRepository {
    async fn create(&self, gym: &Gym) -> GymResult<()> {
        let mut gyms = self.gyms.lock().unwrap();
        if gyms
            .iter()
            .any(|g| g.location == gym.location && g.setting_style == gym.setting_style)
        {
            return Err(GymError::DuplicateGym);
        }
        gyms.push(gym.clone());
        Ok(())
    }

    async fn list(&self) -> GymResult<Vec<Gym>> {
        Ok(self.gyms.lock().unwrap().clone())
    }
}

fn identity() -> Identity {
    Identity {
        username: "alice".to_string(),
    }
}

fn input(name: &str, location: &str, style: &str) -> CreateGymInput {
    CreateGymInput {
        name: name.to_string(),
        location: location.to_string(),
        setting_style: style.to_string(),
    }
}

#[tokio::test]
async fn test_duplicate_location_and_style_fails() {
    let repo = Arc::new(MemGymRepository::default());
    let use_case = CreateGymUseCase::new(repo);

    use_case
        .execute(input("Crux", "Oslo", "bouldering"), &identity())
        .await
        .unwrap();

    let err = use_case
        .execute(input("Crux II", "Oslo", "bouldering"), &identity())
        .await
        .unwrap_err();
    assert!(matches!(err, GymError::DuplicateGym));
}

#[tokio::test]
async fn test_same_location_different_style_is_allowed() {
    let repo = Arc::new(MemGymRepository::default());
    let use_case = CreateGymUseCase::new(repo.clone());

    use_case
        .execute(input("Crux", "Oslo", "bouldering"), &identity())
        .await
        .unwrap();
    use_case
        .execute(input("Crux", "Oslo", "lead"), &identity())
        .await
        .unwrap();

    let gyms = ListGymsUseCase::new(repo).execute().await.unwrap();
    assert_eq!(gyms.len(), 2);
}
