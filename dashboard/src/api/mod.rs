mod attendance;
mod auth;
pub mod client;
mod departments;
mod employees;
pub mod error;
mod payroll;
mod performance;
pub mod types;

pub use client::*;
pub use error::ApiError;
pub use types::*;
