//! API DTOs (Data Transfer Objects)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::{Climb, ClimbSession};

// ============================================================================
// Start
// ============================================================================

/// Query string for POST /sessions/start
#[derive(Debug, Clone, Deserialize)]
pub struct StartSessionQuery {
    pub gym_id: String,
}

/// Start session response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StartSessionResponse {
    pub session_id: String,
}

// ============================================================================
// Log climb
// ============================================================================

/// Climb request body
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClimbRequest {
    pub grade: String,
    pub hold_type: String,
    pub angle: String,
    pub result: String,
    /// Defaults to the server clock when absent
    pub timestamp: Option<DateTime<Utc>>,
}

// ============================================================================
// End
// ============================================================================

/// Query string for PATCH /sessions/{session_id}/end
#[derive(Debug, Clone, Deserialize)]
pub struct EndSessionQuery {
    pub fatigue: i16,
}

// ============================================================================
// Shared
// ============================================================================

/// Plain acknowledgement
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AckResponse {
    pub message: &'static str,
}

// ============================================================================
// History
// ============================================================================

/// One climb in a session response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClimbResponse {
    pub grade: String,
    pub hold_type: String,
    pub angle: String,
    pub result: String,
    pub timestamp: DateTime<Utc>,
}

impl From<Climb> for ClimbResponse {
    fn from(climb: Climb) -> Self {
        Self {
            grade: climb.grade,
            hold_type: climb.hold_type,
            angle: climb.angle,
            result: climb.result,
            timestamp: climb.timestamp,
        }
    }
}

/// One session in the history response
///
/// The identifier is surfaced as a plain string; the storage identifier
/// itself never leaves the repository layer.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionResponse {
    pub session_id: String,
    pub username: String,
    pub gym_id: String,
    pub start_time: DateTime<Utc>,
    pub end_time: Option<DateTime<Utc>>,
    pub duration_minutes: Option<f64>,
    pub fatigue_level: Option<i16>,
    pub climbs: Vec<ClimbResponse>,
    pub status: String,
}

impl From<ClimbSession> for SessionResponse {
    fn from(session: ClimbSession) -> Self {
        Self {
            session_id: session.session_id.to_string(),
            username: session.username,
            gym_id: session.gym_id,
            start_time: session.start_time,
            end_time: session.end_time,
            duration_minutes: session.duration_minutes,
            fatigue_level: session.fatigue_level,
            climbs: session.climbs.into_iter().map(ClimbResponse::from).collect(),
            status: session.status.as_str().to_string(),
        }
    }
}
