//! Application layer - use cases

pub mod create_gym;
pub mod list_gyms;

pub use create_gym::{CreateGymInput, CreateGymUseCase};
pub use list_gyms::ListGymsUseCase;
