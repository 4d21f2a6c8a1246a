//! Screen logic for the appointment and notification detail views.
//!
//! Each function takes the [`AppContext`](crate::AppContext) and performs one
//! user action against the persisted collections.

mod appointments;
mod notifications;

pub use appointments::*;
pub use notifications::*;
