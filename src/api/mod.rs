//! HTTP API module for the payslip generator.
//!
//! Exposes the payslip calculation as `POST /payslip`, validated with the
//! same rules as the console.

mod handlers;
mod request;
mod response;
mod server;
mod state;

pub use handlers::create_router;
pub use request::PayslipRequest;
pub use response::{ApiError, ApiErrorResponse};
pub use server::serve;
pub use state::AppState;
