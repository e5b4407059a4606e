use std::hash::{Hash, Hasher};

use serde::Serialize;

/// A user who can rate things and collect gyms and workouts.
#[derive(Debug, Clone, Serialize)]
pub struct RegisteredUser {
    pub id: i32,
    pub username: String,
    pub gym_ids: Vec<i32>,
    /// Workouts the user follows, not necessarily ones they own.
    pub workout_ids: Vec<i32>,
}

impl RegisteredUser {
    pub fn new(id: i32, username: impl Into<String>) -> Self {
        Self {
            id,
            username: username.into(),
            gym_ids: Vec::new(),
            workout_ids: Vec::new(),
        }
    }
}

impl PartialEq for RegisteredUser {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for RegisteredUser {}

impl Hash for RegisteredUser {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
