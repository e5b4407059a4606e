use log::warn;

use crate::db::models::{WorkoutChanges, WorkoutDraft};
use crate::db::operations;
use crate::error::{RepError, Result};
use crate::model::{Exercise, MuscleGroup, Workout};
use crate::relations;
use crate::session::Session;

impl Session {
    /// Stores a new workout. Without an explicit owner it belongs to the
    /// logged-in user, if any.
    pub fn save_workout(&self, draft: &WorkoutDraft) -> Result<Workout> {
        if draft.name.trim().is_empty() {
            return Err(RepError::Validation(
                "workout name must not be empty".to_string(),
            ));
        }
        let draft = WorkoutDraft {
            owner_id: draft
                .owner_id
                .or_else(|| self.logged_in_user().map(|u| u.id)),
            ..draft.clone()
        };
        let mut conn = self.conn()?;
        operations::create_workout(&mut conn, &draft)
    }

    pub fn update_workout(&self, workout_id: i32, changes: &WorkoutChanges) -> Result<Workout> {
        let mut conn = self.conn()?;
        let workout = operations::find_workout(&mut conn, workout_id)?;
        self.ensure_can_edit(&workout)?;
        operations::update_workout(&mut conn, workout_id, changes)
    }

    pub fn delete_workout(&self, workout_id: i32) -> Result<()> {
        let mut conn = self.conn()?;
        let workout = operations::find_workout(&mut conn, workout_id)?;
        self.ensure_can_edit(&workout)?;
        operations::delete_workout(&mut conn, workout_id)
    }

    /// Workouts the current user may see: public ones and their own.
    pub fn list_workouts(&self) -> Result<Vec<Workout>> {
        let mut conn = self.conn()?;
        let workouts = operations::list_workouts(&mut conn)?;
        Ok(workouts.into_iter().filter(|w| self.can_view(w)).collect())
    }

    pub fn list_exercises(&self, workout_id: i32) -> Result<Vec<Exercise>> {
        let mut conn = self.conn()?;
        let workout = operations::find_workout(&mut conn, workout_id)?;
        if !self.can_view(&workout) {
            return Err(RepError::not_found("workout", workout_id));
        }
        operations::list_workout_exercises(&mut conn, workout_id)
    }

    pub fn add_exercise_to_workout(&self, workout_id: i32, exercise_id: i32) -> Result<bool> {
        let mut conn = self.conn()?;
        let workout = operations::find_workout(&mut conn, workout_id)?;
        self.ensure_can_edit(&workout)?;
        operations::link_workout_exercise(&mut conn, workout_id, exercise_id)
    }

    pub fn remove_exercise_from_workout(&self, workout_id: i32, exercise_id: i32) -> Result<bool> {
        let mut conn = self.conn()?;
        let workout = operations::find_workout(&mut conn, workout_id)?;
        self.ensure_can_edit(&workout)?;
        operations::unlink_workout_exercise(&mut conn, workout_id, exercise_id)
    }

    /// Stores the workout/exercise edge and mirrors it on both loaded
    /// entities.
    pub fn link_exercise(&self, workout: &mut Workout, exercise: &mut Exercise) -> Result<bool> {
        self.ensure_can_edit(workout)?;
        let mut conn = self.conn()?;
        let stored = operations::link_workout_exercise(&mut conn, workout.id, exercise.id)?;
        let mirrored = relations::add_exercise(workout, exercise);
        Ok(stored || mirrored)
    }

    pub fn unlink_exercise(&self, workout: &mut Workout, exercise: &mut Exercise) -> Result<bool> {
        self.ensure_can_edit(workout)?;
        let mut conn = self.conn()?;
        let stored = operations::unlink_workout_exercise(&mut conn, workout.id, exercise.id)?;
        let mirrored = relations::remove_exercise(workout, exercise);
        Ok(stored || mirrored)
    }

    pub fn add_muscle_group(&self, workout_id: i32, muscle: MuscleGroup) -> Result<Workout> {
        let mut conn = self.conn()?;
        let workout = operations::find_workout(&mut conn, workout_id)?;
        self.ensure_can_edit(&workout)?;
        operations::add_muscle_group(&mut conn, workout_id, muscle)?;
        operations::find_workout(&mut conn, workout_id)
    }

    pub fn remove_muscle_group(&self, workout_id: i32, muscle: MuscleGroup) -> Result<bool> {
        let mut conn = self.conn()?;
        let workout = operations::find_workout(&mut conn, workout_id)?;
        self.ensure_can_edit(&workout)?;
        operations::remove_muscle_group(&mut conn, workout_id, muscle)
    }

    /// Adds the workout to the logged-in user's list of used workouts.
    pub fn use_workout(&self, workout_id: i32) -> Result<bool> {
        let user = self.require_user()?;
        let mut conn = self.conn()?;
        let workout = operations::find_workout(&mut conn, workout_id)?;
        if !self.can_view(&workout) {
            return Err(RepError::not_found("workout", workout_id));
        }
        operations::link_user_workout(&mut conn, user.id, workout_id)
    }

    pub fn stop_using_workout(&self, workout_id: i32) -> Result<bool> {
        let user = self.require_user()?;
        let mut conn = self.conn()?;
        operations::unlink_user_workout(&mut conn, user.id, workout_id)
    }

    /// Owned workouts may only be changed by their owner. Unowned ones are
    /// open to everybody.
    pub(crate) fn ensure_can_edit(&self, workout: &Workout) -> Result<()> {
        let Some(owner_id) = workout.owner_id else {
            return Ok(());
        };
        match self.logged_in_user() {
            Some(user) if user.id == owner_id => Ok(()),
            Some(user) => {
                warn!(
                    "User #{} tried to edit workout #{} owned by #{}",
                    user.id, workout.id, owner_id
                );
                Err(RepError::Unauthorized(format!(
                    "workout #{} belongs to another user",
                    workout.id
                )))
            }
            None => Err(RepError::NotLoggedIn),
        }
    }
}
