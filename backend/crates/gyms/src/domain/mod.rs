//! Domain layer for the gyms crate

pub mod entities;
pub mod repository;
