//! Domain layer for the sessions crate

pub mod entities;
pub mod repository;
