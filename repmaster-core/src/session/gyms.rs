//! Gym management and the gym side of the gym/workout edge.

use diesel::{Connection, SqliteConnection};
use log::info;

use crate::db::models::{GymChanges, GymDraft, WorkoutDraft};
use crate::db::operations;
use crate::error::{RepError, Result};
use crate::model::{Gym, Workout};
use crate::relations;
use crate::session::Session;

impl Session {
    pub fn save_gym(&self, draft: &GymDraft) -> Result<Gym> {
        if draft.name.trim().is_empty() {
            return Err(RepError::Validation("gym name must not be empty".to_string()));
        }
        let mut conn = self.conn()?;
        operations::create_gym(&mut conn, draft)
    }

    pub fn update_gym(&self, gym_id: i32, changes: &GymChanges) -> Result<Gym> {
        let mut conn = self.conn()?;
        operations::update_gym(&mut conn, gym_id, changes)
    }

    pub fn delete_gym(&self, gym_id: i32) -> Result<()> {
        let mut conn = self.conn()?;
        operations::delete_gym(&mut conn, gym_id)
    }

    pub fn list_gyms(&self) -> Result<Vec<Gym>> {
        let mut conn = self.conn()?;
        operations::list_gyms(&mut conn)
    }

    /// Creates a workout and puts it in the named gym in one transaction.
    pub fn add_new_workout_to_gym(&self, gym_name: &str, draft: &WorkoutDraft) -> Result<Workout> {
        let mut pooled = self.conn()?;
        let conn: &mut SqliteConnection = &mut pooled;
        let owner_id = draft
            .owner_id
            .or_else(|| self.logged_in_user().map(|u| u.id));

        conn.transaction::<_, RepError, _>(|conn| {
            let gym = operations::find_gym_by_name(conn, gym_name)?;
            let draft = WorkoutDraft {
                owner_id,
                ..draft.clone()
            };
            let workout = operations::create_workout(conn, &draft)?;
            operations::link_gym_workout(conn, gym.id, workout.id)?;
            info!("Added new workout {} to gym {}", workout.name, gym.name);
            operations::find_workout(conn, workout.id)
        })
    }

    pub fn add_existing_workout_to_gym(&self, gym_name: &str, workout_name: &str) -> Result<bool> {
        let mut pooled = self.conn()?;
        let conn: &mut SqliteConnection = &mut pooled;
        conn.transaction::<_, RepError, _>(|conn| {
            let gym = operations::find_gym_by_name(conn, gym_name)?;
            let workout = operations::find_workout_by_name(conn, workout_name)?;
            if !self.can_view(&workout) {
                return Err(RepError::not_found("workout", workout_name));
            }
            self.ensure_can_edit(&workout)?;
            operations::link_gym_workout(conn, gym.id, workout.id)
        })
    }

    pub fn remove_workout_from_gym(&self, gym_name: &str, workout_name: &str) -> Result<bool> {
        let mut pooled = self.conn()?;
        let conn: &mut SqliteConnection = &mut pooled;
        conn.transaction::<_, RepError, _>(|conn| {
            let gym = operations::find_gym_by_name(conn, gym_name)?;
            let workout = operations::find_workout_by_name(conn, workout_name)?;
            if !self.can_view(&workout) {
                return Err(RepError::not_found("workout", workout_name));
            }
            self.ensure_can_edit(&workout)?;
            operations::unlink_gym_workout(conn, gym.id, workout.id)
        })
    }

    /// Stores the gym/workout edge and mirrors it on both loaded entities.
    pub fn link_workout(&self, gym: &mut Gym, workout: &mut Workout) -> Result<bool> {
        if !self.can_view(workout) {
            return Err(RepError::not_found("workout", workout.id));
        }
        self.ensure_can_edit(workout)?;
        let mut conn = self.conn()?;
        let stored = operations::link_gym_workout(&mut conn, gym.id, workout.id)?;
        let mirrored = relations::add_workout_to_gym(gym, workout);
        Ok(stored || mirrored)
    }

    /// Workouts of the named gym that the current user may see.
    pub fn list_gym_workouts(&self, gym_name: &str) -> Result<Vec<Workout>> {
        let mut conn = self.conn()?;
        let gym = operations::find_gym_by_name(&mut conn, gym_name)?;
        let workouts = gym
            .workout_ids
            .iter()
            .map(|id| operations::find_workout(&mut conn, *id))
            .collect::<Result<Vec<_>>>()?;
        Ok(workouts.into_iter().filter(|w| self.can_view(w)).collect())
    }

    pub fn leave_gym(&self, gym_id: i32) -> Result<bool> {
        let user = self.require_user()?;
        let mut conn = self.conn()?;
        operations::unlink_user_gym(&mut conn, user.id, gym_id)
    }
}
