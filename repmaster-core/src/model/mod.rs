//! Domain model: the rateable entities, ratings and the users who author them.
//!
//! Relationships between entities are held as id lists on both ends of an
//! edge. Use [`crate::relations`] to edit an edge so both ends stay in sync.

mod exercise;
mod gym;
mod muscle_group;
mod rateable;
mod rating;
mod user;
mod workout;

pub use exercise::Exercise;
pub use gym::Gym;
pub use muscle_group::MuscleGroup;
pub use rateable::{
    AnyRateable, Detail, NOT_RATED_LABEL, RateableKind, RateableRef, Rateable, STAR, format_average,
    shown_average,
};
pub use rating::{Rating, average_rating};
pub use user::RegisteredUser;
pub use workout::Workout;
