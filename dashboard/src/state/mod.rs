pub mod auth;
pub mod dashboard;

pub use auth::{AuthContext, AuthStatus, Session};
pub use dashboard::{Completion, DashboardState, Panel, PanelState, ReferenceDate, Ticket};
