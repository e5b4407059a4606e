use std::fmt;
use std::hash::{Hash, Hasher};

use serde::Serialize;

use super::rateable::fmt_rateable;
use super::{Detail, MuscleGroup, RateableRef, Rateable, Rating};

/// A training plan. Owns its exercise list; gyms and users refer back to it.
#[derive(Debug, Clone, Serialize)]
pub struct Workout {
    pub id: i32,
    pub name: String,
    pub publicly_available: bool,
    /// Ordered, duplicates allowed.
    pub muscle_groups: Vec<MuscleGroup>,
    pub exercise_ids: Vec<i32>,
    pub gym_ids: Vec<i32>,
    /// Users who use this workout.
    pub user_ids: Vec<i32>,
    pub owner_id: Option<i32>,
    pub ratings: Vec<Rating>,
}

impl Workout {
    pub fn new(id: i32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            publicly_available: true,
            muscle_groups: Vec::new(),
            exercise_ids: Vec::new(),
            gym_ids: Vec::new(),
            user_ids: Vec::new(),
            owner_id: None,
            ratings: Vec::new(),
        }
    }

    pub fn with_owner(mut self, owner_id: i32) -> Self {
        self.owner_id = Some(owner_id);
        self
    }

    pub fn add_muscle_group(&mut self, muscle: MuscleGroup) {
        self.muscle_groups.push(muscle);
    }

    /// Removes the first occurrence of `muscle`.
    pub fn remove_muscle_group(&mut self, muscle: MuscleGroup) -> bool {
        match self.muscle_groups.iter().position(|m| *m == muscle) {
            Some(index) => {
                self.muscle_groups.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn muscle_groups_label(&self) -> String {
        let names: Vec<&str> = self.muscle_groups.iter().map(|m| m.as_str()).collect();
        format!("[{}]", names.join(", "))
    }

    pub fn is_visible_to(&self, user_id: Option<i32>) -> bool {
        self.publicly_available || (user_id.is_some() && self.owner_id == user_id)
    }
}

impl Rateable for Workout {
    fn rateable_ref(&self) -> RateableRef {
        RateableRef::workout(self.id)
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
            Detail::new("Workout name: ", self.name.clone()),
            Detail::new("Worked musclegroups: ", self.muscle_groups_label()),
            self.average_detail(),
            Detail::new("Users: ", self.user_ids.len().to_string()),
        ]
    }
}

impl fmt::Display for Workout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_rateable(self, f)
    }
}

impl PartialEq for Workout {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Workout {}

impl Hash for Workout {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::STAR;

    fn average_row(workout: &Workout) -> Detail {
        workout
            .details()
            .into_iter()
            .find(|d| d.feature == "Average rating: ")
            .expect("average row present")
    }

    #[test]
    fn unrated_workout_says_so() {
        let workout = Workout::new(1, "Push");
        assert_eq!(average_row(&workout).data, "Not rated yet");
    }

    #[test]
    fn rated_workout_shows_stars() {
        let mut workout = Workout::new(1, "Push");
        workout.add_rating(Rating::new(1, 4.0, None, 1));
        let data = average_row(&workout).data;
        assert!(data.contains("4.0"));
        assert_eq!(data.matches(STAR).count(), 4);
    }

    #[test]
    fn muscle_groups_keep_duplicates_and_order() {
        let mut workout = Workout::new(1, "Full body");
        workout.add_muscle_group(MuscleGroup::Quads);
        workout.add_muscle_group(MuscleGroup::Chest);
        workout.add_muscle_group(MuscleGroup::Quads);
        assert_eq!(workout.muscle_groups_label(), "[Quads, Chest, Quads]");

        assert!(workout.remove_muscle_group(MuscleGroup::Quads));
        assert_eq!(workout.muscle_groups, vec![MuscleGroup::Chest, MuscleGroup::Quads]);
        assert!(!workout.remove_muscle_group(MuscleGroup::Calves));
    }

    #[test]
    fn removing_from_fresh_workout_is_harmless() {
        let mut workout = Workout::new(1, "Empty");
        assert!(!workout.remove_muscle_group(MuscleGroup::Abs));
        assert!(workout.remove_rating(1).is_none());
    }

    #[test]
    fn private_workouts_only_visible_to_owner() {
        let mut workout = Workout::new(1, "Secret").with_owner(7);
        workout.publicly_available = false;
        assert!(workout.is_visible_to(Some(7)));
        assert!(!workout.is_visible_to(Some(8)));
        assert!(!workout.is_visible_to(None));
    }
}
