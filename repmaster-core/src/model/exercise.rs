use std::fmt;
use std::hash::{Hash, Hasher};

use serde::Serialize;

use super::rateable::fmt_rateable;
use super::{Detail, MuscleGroup, RateableRef, Rateable, Rating};

#[derive(Debug, Clone, Serialize)]
pub struct Exercise {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub primary_muscle: Option<MuscleGroup>,
    pub workout_ids: Vec<i32>,
    pub ratings: Vec<Rating>,
}

impl Exercise {
    pub fn new(id: i32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            description: None,
            primary_muscle: None,
            workout_ids: Vec::new(),
            ratings: Vec::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_primary_muscle(mut self, muscle: MuscleGroup) -> Self {
        self.primary_muscle = Some(muscle);
        self
    }
}

impl Rateable for Exercise {
    fn rateable_ref(&self) -> RateableRef {
        RateableRef::exercise(self.id)
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
            Detail::new("Exercise name: ", self.name.clone()),
            Detail::new("Description: ", self.description.clone().unwrap_or_default()),
            Detail::new(
                "Primary musclegroup: ",
                self.primary_muscle
                    .map(|m| m.to_string())
                    .unwrap_or_default(),
            ),
            self.average_detail(),
            Detail::new("Workouts: ", self.workout_ids.len().to_string()),
        ]
    }
}

impl fmt::Display for Exercise {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_rateable(self, f)
    }
}

impl PartialEq for Exercise {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Exercise {}

impl Hash for Exercise {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
