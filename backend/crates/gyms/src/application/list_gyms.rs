//! List Gyms Use Case

use std::sync::Arc;

use crate::domain::entities::Gym;
use crate::domain::repository::GymRepository;
use crate::error::GymResult;

/// List gyms use case (public, no identity required)
pub struct ListGymsUseCase<R>
where
    R: GymRepository,
{
    repo: Arc<R>,
}

impl<R> ListGymsUseCase<R>
where
    R: GymRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self) -> GymResult<Vec<Gym>> {
        self.repo.list().await
    }
}
