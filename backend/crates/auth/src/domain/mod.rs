//! Domain layer for the auth crate

pub mod entities;
pub mod repository;
pub mod value_objects;
