//! Infrastructure layer - database implementations

pub mod postgres;
