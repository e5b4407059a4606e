use std::fmt;
use std::hash::{Hash, Hasher};

use serde::Serialize;

use super::rateable::fmt_rateable;
use super::{Detail, RateableRef, Rateable, Rating};

#[derive(Debug, Clone, Serialize)]
pub struct Gym {
    pub id: i32,
    pub name: String,
    pub address: Option<String>,
    pub workout_ids: Vec<i32>,
    /// Members: users who added this gym to their profile.
    pub user_ids: Vec<i32>,
    pub ratings: Vec<Rating>,
}

impl Gym {
    pub fn new(id: i32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            address: None,
            workout_ids: Vec::new(),
            user_ids: Vec::new(),
            ratings: Vec::new(),
        }
    }

    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }
}

impl Rateable for Gym {
    fn rateable_ref(&self) -> RateableRef {
        RateableRef::gym(self.id)
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn ratings(&self) -> &[Rating] {
        &self.ratings
    }

    fn ratings_mut(&mut self) -> &mut Vec<Rating> {
        &mut self.ratings
    }

    fn details(&self) -> Vec<Detail> {
        vec![
            Detail::new("Gym name: ", self.name.clone()),
            Detail::new("Address: ", self.address.clone().unwrap_or_default()),
            self.average_detail(),
            Detail::new("Workouts: ", self.workout_ids.len().to_string()),
        ]
    }
}

impl fmt::Display for Gym {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_rateable(self, f)
    }
}

impl PartialEq for Gym {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Gym {}

impl Hash for Gym {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn details_without_address() {
        let mut gym = Gym::new(2, "Iron Temple");
        gym.workout_ids = vec![1, 4];
        let details = gym.details();
        assert_eq!(details[0], Detail::new("Gym name: ", "Iron Temple"));
        assert_eq!(details[1].data, "");
        assert_eq!(details[2].data, "Not rated yet");
        assert_eq!(details[3], Detail::new("Workouts: ", "2"));
    }
}
