//! Session module: the per-user entry point to the catalogue.
//!
//! A `Session` owns the database pool and the logged-in user. Operations on a
//! specific gym, workout or exercise take its `RateableRef` explicitly; there
//! is no shared "currently selected" entity.

mod containers;
mod detail;
mod exercises;
mod gyms;
mod ratings;
mod session;
mod workouts;

pub use containers::{ContainerKind, ContainerOption};
pub use detail::DetailPage;
pub use ratings::validate_score;
pub use session::Session;
