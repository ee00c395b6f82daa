//! Wire-level models shared between the Reclaim backend and frontend.

pub mod errors;
pub mod report;
pub mod user;

pub use errors::ErrorResponse;
pub use report::{EprReport, StreamMetrics};
pub use user::{ConfigUserUpdate, MeResponse, User, UserRole};
