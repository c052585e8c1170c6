//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Cryptographic utilities (SHA-256, HMAC, Base64)
//! - Signed, time-limited access tokens
//! - Cookie management
//! - Payment provider client

pub mod cookie;
pub mod crypto;
pub mod payment;
pub mod token;
