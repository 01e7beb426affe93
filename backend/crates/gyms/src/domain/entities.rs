//! Gym Entities

use chrono::{DateTime, Utc};
use kernel::id::GymId;

/// A climbing gym
///
/// Uniqueness invariant: no two gyms share `(location, setting_style)`.
/// Never mutated or deleted once created.
#[derive(Debug, Clone, PartialEq)]
pub struct Gym {
    pub gym_id: GymId,
    /// Display name
    pub name: String,
    /// Part of the uniqueness key
    pub location: String,
    /// Part of the uniqueness key, e.g. "bouldering" or "lead"
    pub setting_style: String,
    pub created_at: DateTime<Utc>,
}

impl Gym {
    /// Create a new gym record
    pub fn new(name: String, location: String, setting_style: String) -> Self {
        Self {
            gym_id: GymId::new(),
            name,
            location,
            setting_style,
            created_at: Utc::now(),
        }
    }
}
