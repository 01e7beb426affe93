//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Password hashing (Argon2id, NIST SP 800-63B compliant)
//! - Signed bearer tokens (HMAC-SHA256, JWT compact form)

pub mod password;
pub mod token;
