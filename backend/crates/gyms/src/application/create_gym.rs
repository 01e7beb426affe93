//! Create Gym Use Case

use std::sync::Arc;

use auth::Identity;

use crate::domain::entities::Gym;
use crate::domain::repository::GymRepository;
use crate::error::GymResult;

/// Create gym input
pub struct CreateGymInput {
    pub name: String,
    pub location: String,
    pub setting_style: String,
}

/// Create gym use case
///
/// Any authenticated user may register a gym; the identity is recorded
/// in the logs only, gyms have no owner.
pub struct CreateGymUseCase<R>
where
    R: GymRepository,
{
    repo: Arc<R>,
}

impl<R> CreateGymUseCase<R>
where
    R: GymRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, input: CreateGymInput, identity: &Identity) -> GymResult<Gym> {
        let gym = Gym::new(input.name, input.location, input.setting_style);

        self.repo.create(&gym).await?;

        tracing::info!(
            gym_id = %gym.gym_id,
            location = %gym.location,
            setting_style = %gym.setting_style,
            created_by = %identity.username,
            "Gym created"
        );

        Ok(gym)
    }
}
