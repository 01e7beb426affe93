//! API DTOs (Data Transfer Objects)

use serde::{Deserialize, Serialize};

use crate::domain::entities::Gym;

/// Create gym request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateGymRequest {
    pub name: String,
    pub location: String,
    pub setting_style: String,
}

/// Gym response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GymResponse {
    /// Identifier surfaced as a plain string
    pub gym_id: String,
    pub name: String,
    pub location: String,
    pub setting_style: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl From<Gym> for GymResponse {
    fn from(gym: Gym) -> Self {
        Self {
            gym_id: gym.gym_id.to_string(),
            name: gym.name,
            location: gym.location,
            setting_style: gym.setting_style,
            created_at: gym.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gym_response_shape() {
        let gym = Gym::new("Crux".into(), "Oslo".into(), "bouldering".into());
        let response = GymResponse::from(gym.clone());

        let body = serde_json::to_value(&response).unwrap();
        assert_eq!(body["gymId"], gym.gym_id.to_string());
        assert_eq!(body["settingStyle"], "bouldering");
    }
}
