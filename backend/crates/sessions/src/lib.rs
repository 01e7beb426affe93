//! Session Manager Backend Module - the core of the activity logger
//!
//! Clean Architecture structure:
//! - `domain/` - Session/Climb entities, lifecycle rules, repository trait
//! - `application/` - Use cases (start, log climb, end, history, delete)
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Lifecycle
//! `active --[end]--> completed`; no transition leaves `completed` and
//! none re-enters `active`. Duration is computed exactly once at the end
//! transition.
//!
//! ## Ownership model
//! Every mutating operation filters by `(session_id, owner username)` in
//! a single atomic statement. A non-owner's request and a request for a
//! missing session produce the same NotFound signal, so the existence of
//! other users' sessions never leaks, and there is no
//! load-check-write race window.

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

#[cfg(test)]
mod tests;

// Re-exports for convenience
pub use error::{SessionError, SessionResult};
pub use infra::postgres::PgSessionRepository;
pub use presentation::router::sessions_router;
