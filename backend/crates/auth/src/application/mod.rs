//! Application layer - use cases and configuration

pub mod config;
pub mod log_in;
pub mod sign_up;

pub use config::AuthConfig;
pub use log_in::{LogInInput, LogInOutput, LogInUseCase};
pub use sign_up::{SignUpInput, SignUpOutput, SignUpUseCase};
