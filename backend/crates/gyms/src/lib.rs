//! Gym Registry Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Gym entity, repository trait
//! - `application/` - Use cases
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! Gyms are created by any authenticated user, deduplicated by
//! `(location, setting_style)`, and never mutated or deleted. Listing
//! is public.

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

#[cfg(test)]
mod tests;

// Re-exports for convenience
pub use error::{GymError, GymResult};
pub use infra::postgres::PgGymRepository;
pub use presentation::router::gyms_router;
