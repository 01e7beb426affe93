//! Application layer - use cases

pub mod delete_session;
pub mod end_session;
pub mod log_climb;
pub mod session_history;
pub mod start_session;

pub use delete_session::DeleteSessionUseCase;
pub use end_session::EndSessionUseCase;
pub use log_climb::{LogClimbInput, LogClimbUseCase};
pub use session_history::SessionHistoryUseCase;
pub use start_session::StartSessionUseCase;
