//! Client-side core of the HRIS dashboard: a typed client for the HR REST
//! backend, an explicit session context, and the derived attendance, payroll
//! and performance views the dashboard renders.

pub mod aggregate;
pub mod api;
pub mod config;
pub mod state;
pub mod types;
pub mod utils;

pub use api::{ApiClient, ApiError};
pub use config::Config;
pub use state::{AuthContext, DashboardState, ReferenceDate};
