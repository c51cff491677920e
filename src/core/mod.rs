//! Core services and infrastructure

pub mod error_handling;
pub mod logging;
pub mod nonce;
pub mod sync;
