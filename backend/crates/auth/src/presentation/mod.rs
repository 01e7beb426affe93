//! Presentation layer - HTTP binding

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod router;
