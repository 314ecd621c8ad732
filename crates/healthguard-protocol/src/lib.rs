//! Shared request and response types for the HealthGuard auth API

mod requests;
mod types;

pub use requests::*;
pub use types::*;
