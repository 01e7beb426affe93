//! Session Entities
//!
//! A [`ClimbSession`] is one continuous visit at a gym, bounded by
//! start/end, owning an ordered list of [`Climb`]s. The lifecycle is a
//! two-state machine: `active --[finish]--> completed`, with no way
//! back.

use chrono::{DateTime, Utc};
use kernel::id::SessionId;
use serde::{Deserialize, Serialize};

/// Session lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    Active,
    Completed,
}

impl SessionStatus {
    /// Text form persisted in the status column
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionStatus::Active => "active",
            SessionStatus::Completed => "completed",
        }
    }

    /// Parse the persisted text form
    pub fn from_db(s: &str) -> Option<Self> {
        match s {
            "active" => Some(SessionStatus::Active),
            "completed" => Some(SessionStatus::Completed),
            _ => None,
        }
    }
}

/// One logged attempt/send within a session
///
/// Immutable once appended. Serialized as-is into the session's climbs
/// JSONB column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Climb {
    pub grade: String,
    pub hold_type: String,
    pub angle: String,
    /// e.g. "Flash", "Send", "Attempt"
    pub result: String,
    pub timestamp: DateTime<Utc>,
}

impl Climb {
    /// Create a climb; `timestamp` defaults to now when not supplied
    pub fn new(
        grade: String,
        hold_type: String,
        angle: String,
        result: String,
        timestamp: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            grade,
            hold_type,
            angle,
            result,
            timestamp: timestamp.unwrap_or_else(Utc::now),
        }
    }
}

/// One continuous climbing visit by a user at a gym
///
/// Invariants:
/// - `status == Active` ⟺ `end_time` unset ⟺ `duration_minutes` unset
/// - climbs are appended only while active
/// - `duration_minutes` is computed exactly once, at the end transition
#[derive(Debug, Clone, PartialEq)]
pub struct ClimbSession {
    pub session_id: SessionId,
    /// Owner; all mutations are scoped to this username
    pub username: String,
    /// Taken as given, not validated against the gym registry
    pub gym_id: String,
    pub start_time: DateTime<Utc>,
    pub end_time: Option<DateTime<Utc>>,
    pub duration_minutes: Option<f64>,
    /// Scale of 1-10, range enforced by the caller
    pub fatigue_level: Option<i16>,
    pub climbs: Vec<Climb>,
    pub status: SessionStatus,
}

impl ClimbSession {
    /// Start a new active session owned by `username`
    pub fn start(username: String, gym_id: String) -> Self {
        Self {
            session_id: SessionId::new(),
            username,
            gym_id,
            start_time: Utc::now(),
            end_time: None,
            duration_minutes: None,
            fatigue_level: None,
            climbs: Vec::new(),
            status: SessionStatus::Active,
        }
    }

    pub fn is_active(&self) -> bool {
        self.status == SessionStatus::Active
    }

    /// Append a climb; refused once the session is completed
    ///
    /// Returns whether the climb was recorded.
    pub fn log_climb(&mut self, climb: Climb) -> bool {
        if !self.is_active() {
            return false;
        }
        self.climbs.push(climb);
        true
    }

    /// End transition: set end time, compute duration, record fatigue
    ///
    /// Returns false (and changes nothing) when already completed.
    pub fn finish(&mut self, ended_at: DateTime<Utc>, fatigue_level: i16) -> bool {
        if !self.is_active() {
            return false;
        }
        let elapsed = ended_at - self.start_time;
        let minutes = elapsed.num_milliseconds() as f64 / 60_000.0;

        self.end_time = Some(ended_at);
        self.duration_minutes = Some(round2(minutes));
        self.fatigue_level = Some(fatigue_level);
        self.status = SessionStatus::Completed;
        true
    }
}

/// Round to 2 decimal places
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn session() -> ClimbSession {
        ClimbSession::start("alice".to_string(), "gym-1".to_string())
    }

    fn climb(result: &str) -> Climb {
        Climb::new(
            "6b+".to_string(),
            "crimp".to_string(),
            "overhang".to_string(),
            result.to_string(),
            None,
        )
    }

    #[test]
    fn test_start_is_active_and_empty() {
        let s = session();
        assert!(s.is_active());
        assert!(s.climbs.is_empty());
        assert_eq!(s.end_time, None);
        assert_eq!(s.duration_minutes, None);
        assert_eq!(s.fatigue_level, None);
    }

    #[test]
    fn test_finish_computes_rounded_duration() {
        // 150 seconds => 2.50 minutes
        let mut s = session();
        let ended = s.start_time + Duration::seconds(150);
        assert!(s.finish(ended, 7));

        assert_eq!(s.status, SessionStatus::Completed);
        assert_eq!(s.end_time, Some(ended));
        assert_eq!(s.duration_minutes, Some(2.5));
        assert_eq!(s.fatigue_level, Some(7));
    }

    #[test]
    fn test_finish_rounding_cases() {
        // 100 seconds => 1.6666... => 1.67
        let mut s = session();
        let ended = s.start_time + Duration::seconds(100);
        s.finish(ended, 3);
        assert_eq!(s.duration_minutes, Some(1.67));

        // 90 seconds => 1.5 exactly
        let mut s = session();
        let ended = s.start_time + Duration::seconds(90);
        s.finish(ended, 3);
        assert_eq!(s.duration_minutes, Some(1.5));
    }

    #[test]
    fn test_finish_is_one_way() {
        let mut s = session();
        let first_end = s.start_time + Duration::seconds(60);
        assert!(s.finish(first_end, 5));

        // A second end must not recompute anything
        let second_end = s.start_time + Duration::seconds(600);
        assert!(!s.finish(second_end, 9));
        assert_eq!(s.end_time, Some(first_end));
        assert_eq!(s.duration_minutes, Some(1.0));
        assert_eq!(s.fatigue_level, Some(5));
    }

    #[test]
    fn test_climbs_append_in_order_while_active() {
        let mut s = session();
        assert!(s.log_climb(climb("Flash")));
        assert!(s.log_climb(climb("Attempt")));
        assert!(s.log_climb(climb("Send")));

        let results: Vec<&str> = s.climbs.iter().map(|c| c.result.as_str()).collect();
        assert_eq!(results, vec!["Flash", "Attempt", "Send"]);
    }

    #[test]
    fn test_climbs_refused_after_finish() {
        let mut s = session();
        s.finish(s.start_time + Duration::seconds(60), 5);

        assert!(!s.log_climb(climb("Send")));
        assert!(s.climbs.is_empty());
    }

    #[test]
    fn test_status_text_round_trip() {
        assert_eq!(
            SessionStatus::from_db(SessionStatus::Active.as_str()),
            Some(SessionStatus::Active)
        );
        assert_eq!(
            SessionStatus::from_db(SessionStatus::Completed.as_str()),
            Some(SessionStatus::Completed)
        );
        assert_eq!(SessionStatus::from_db("paused"), None);
    }

    #[test]
    fn test_climb_timestamp_defaults_to_now() {
        let before = Utc::now();
        let c = climb("Flash");
        let after = Utc::now();
        assert!(c.timestamp >= before && c.timestamp <= after);
    }
}
