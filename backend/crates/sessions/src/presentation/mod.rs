//! Presentation layer - HTTP binding

pub mod dto;
pub mod handlers;
pub mod router;
