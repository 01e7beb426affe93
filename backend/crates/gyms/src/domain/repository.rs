//! Repository Traits

use crate::domain::entities::Gym;
use crate::error::GymResult;

/// Gym repository trait
#[trait_variant::make(GymRepository: Send)]
pub trait LocalGymRepository {
    /// Persist a new gym
    ///
    /// A `(location, setting_style)` collision must surface as
    /// [`crate::GymError::DuplicateGym`].
    async fn create(&self, gym: &Gym) -> GymResult<()>;

    /// All gyms, oldest first
    async fn list(&self) -> GymResult<Vec<Gym>>;
}
