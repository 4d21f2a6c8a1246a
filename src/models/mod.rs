//! Data models for the Sharek booking core.
//!
//! Persisted models serialize with camelCase field names so the stored JSON
//! collections keep the layout the app has always written.

mod appointment;
mod language;
mod notification;
mod route;
mod service;

pub use appointment::*;
pub use language::*;
pub use notification::*;
pub use route::*;
pub use service::*;
