//! Demo catalogue for trying the application out.
//!
//! Seeding only runs against a database without users, so it can be called
//! on every start without duplicating anything.

use diesel::prelude::*;
use log::{debug, info};
use rand::Rng;

use crate::db::models::{ExerciseDraft, GymDraft, WorkoutDraft};
use crate::db::operations;
use crate::error::{RepError, Result};
use crate::model::{MuscleGroup, RateableRef};

const USERS: [&str; 3] = ["alice", "bob", "carol"];

const GYMS: [(&str, &str); 2] = [
    ("Iron Temple", "12 Forge Street"),
    ("Pulse Fitness", "4 Riverside Avenue"),
];

const EXERCISES: [(&str, &str, MuscleGroup); 6] = [
    ("Squat", "Barbell back squat to parallel", MuscleGroup::Quads),
    ("Romanian Deadlift", "Hip hinge with soft knees", MuscleGroup::Hamstrings),
    ("Bench Press", "Flat barbell press", MuscleGroup::Chest),
    ("Overhead Press", "Standing strict press", MuscleGroup::Shoulders),
    ("Pull-up", "Overhand grip, full hang", MuscleGroup::Back),
    ("Barbell Curl", "Strict curl without swing", MuscleGroup::Biceps),
];

struct DemoWorkout {
    name: &'static str,
    muscles: &'static [MuscleGroup],
    exercises: &'static [&'static str],
    gyms: &'static [&'static str],
}

const WORKOUTS: [DemoWorkout; 3] = [
    DemoWorkout {
        name: "Leg Day",
        muscles: &[MuscleGroup::Quads, MuscleGroup::Hamstrings],
        exercises: &["Squat", "Romanian Deadlift"],
        gyms: &["Iron Temple"],
    },
    DemoWorkout {
        name: "Push Day",
        muscles: &[MuscleGroup::Chest, MuscleGroup::Shoulders, MuscleGroup::Triceps],
        exercises: &["Bench Press", "Overhead Press"],
        gyms: &["Iron Temple", "Pulse Fitness"],
    },
    DemoWorkout {
        name: "Pull Day",
        muscles: &[MuscleGroup::Back, MuscleGroup::Biceps],
        exercises: &["Pull-up", "Barbell Curl"],
        gyms: &["Pulse Fitness"],
    },
];

const COMMENTS: [&str; 4] = ["Great", "Solid", "Too crowded", "Would do again"];

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SeedSummary {
    pub users: usize,
    pub gyms: usize,
    pub workouts: usize,
    pub exercises: usize,
    pub ratings: usize,
}

impl SeedSummary {
    pub fn is_empty(&self) -> bool {
        *self == SeedSummary::default()
    }
}

/// Fills an empty database with demo data. Returns an empty summary when
/// there already are users.
pub fn seed_demo_data<R: Rng>(conn: &mut SqliteConnection, rng: &mut R) -> Result<SeedSummary> {
    if !operations::list_users(conn)?.is_empty() {
        debug!("Database already has users, skipping demo data");
        return Ok(SeedSummary::default());
    }

    let summary = conn.transaction::<_, RepError, _>(|conn| {
        let mut summary = SeedSummary::default();

        let users = USERS
            .iter()
            .map(|name| operations::create_user(conn, name))
            .collect::<Result<Vec<_>>>()?;
        summary.users = users.len();

        let mut targets = Vec::new();
        let mut gym_ids = Vec::new();
        for (name, address) in GYMS {
            let gym = operations::create_gym(conn, &GymDraft::new(name).address(address))?;
            targets.push(RateableRef::gym(gym.id));
            gym_ids.push((name, gym.id));
        }
        summary.gyms = gym_ids.len();

        let mut exercise_ids = Vec::new();
        for (name, description, muscle) in EXERCISES {
            let exercise = operations::create_exercise(
                conn,
                &ExerciseDraft::new(name)
                    .description(description)
                    .primary_muscle(muscle),
            )?;
            targets.push(RateableRef::exercise(exercise.id));
            exercise_ids.push((name, exercise.id));
        }
        summary.exercises = exercise_ids.len();

        for (index, demo) in WORKOUTS.iter().enumerate() {
            let owner = &users[index % users.len()];
            let workout = operations::create_workout(
                conn,
                &WorkoutDraft::new(demo.name)
                    .muscle_groups(demo.muscles.iter().copied())
                    .owner(owner.id),
            )?;
            for exercise in demo.exercises {
                if let Some((_, id)) = exercise_ids.iter().find(|(n, _)| n == exercise) {
                    operations::link_workout_exercise(conn, workout.id, *id)?;
                }
            }
            for gym in demo.gyms {
                if let Some((_, id)) = gym_ids.iter().find(|(n, _)| n == gym) {
                    operations::link_gym_workout(conn, *id, workout.id)?;
                }
            }
            targets.push(RateableRef::workout(workout.id));
            summary.workouts += 1;
        }

        for user in &users {
            for (_, gym_id) in &gym_ids {
                if rng.random_bool(0.5) {
                    operations::link_user_gym(conn, user.id, *gym_id)?;
                }
            }
            for target in &targets {
                if !rng.random_bool(0.6) {
                    continue;
                }
                let score = rng.random_range(2..=10) as f64 / 2.0;
                let comment = if rng.random_bool(0.5) {
                    Some(COMMENTS[rng.random_range(0..COMMENTS.len())])
                } else {
                    None
                };
                operations::add_rating(conn, *target, user.id, score, comment)?;
                summary.ratings += 1;
            }
        }

        Ok(summary)
    })?;

    info!(
        "Seeded {} users, {} gyms, {} workouts, {} exercises, {} ratings",
        summary.users, summary.gyms, summary.workouts, summary.exercises, summary.ratings
    );
    Ok(summary)
}
