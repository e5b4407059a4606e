use crate::db::models::{ExerciseChanges, ExerciseDraft};
use crate::db::operations;
use crate::error::{RepError, Result};
use crate::model::Exercise;
use crate::session::Session;

impl Session {
    pub fn save_exercise(&self, draft: &ExerciseDraft) -> Result<Exercise> {
        if draft.name.trim().is_empty() {
            return Err(RepError::Validation(
                "exercise name must not be empty".to_string(),
            ));
        }
        let mut conn = self.conn()?;
        operations::create_exercise(&mut conn, draft)
    }

    pub fn update_exercise(&self, exercise_id: i32, changes: &ExerciseChanges) -> Result<Exercise> {
        let mut conn = self.conn()?;
        operations::update_exercise(&mut conn, exercise_id, changes)
    }

    pub fn delete_exercise(&self, exercise_id: i32) -> Result<()> {
        let mut conn = self.conn()?;
        operations::delete_exercise(&mut conn, exercise_id)
    }

    pub fn list_all_exercises(&self) -> Result<Vec<Exercise>> {
        let mut conn = self.conn()?;
        operations::list_exercises(&mut conn)
    }
}
