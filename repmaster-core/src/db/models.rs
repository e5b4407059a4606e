use chrono::NaiveDateTime;
use diesel::{AsChangeset, Insertable, Queryable, Selectable};

use crate::db::schema;
use crate::model::{MuscleGroup, RateableRef, Rating};

// Users
#[derive(Queryable, Selectable, Debug, Clone)]
#[diesel(table_name = schema::users)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct UserRow {
    pub id: i32,
    pub username: String,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = schema::users)]
pub struct NewUserRow<'a> {
    pub username: &'a str,
    pub created_at: NaiveDateTime,
}

// Gyms
#[derive(Queryable, Selectable, Debug, Clone)]
#[diesel(table_name = schema::gyms)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct GymRow {
    pub id: i32,
    pub name: String,
    pub address: Option<String>,
}

#[derive(Insertable)]
#[diesel(table_name = schema::gyms)]
pub struct NewGymRow<'a> {
    pub name: &'a str,
    pub address: Option<&'a str>,
}

#[derive(Debug, Clone, Default)]
pub struct GymDraft {
    pub name: String,
    pub address: Option<String>,
}

impl GymDraft {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            address: None,
        }
    }

    pub fn address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }
}

#[derive(AsChangeset, Debug, Clone, Default)]
#[diesel(table_name = schema::gyms)]
pub struct GymChanges {
    pub name: Option<String>,
    pub address: Option<Option<String>>,
}

impl GymChanges {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.address.is_none()
    }
}

// Workouts
#[derive(Queryable, Selectable, Debug, Clone)]
#[diesel(table_name = schema::workouts)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct WorkoutRow {
    pub id: i32,
    pub name: String,
    pub publicly_available: bool,
    pub owner_id: Option<i32>,
}

#[derive(Insertable)]
#[diesel(table_name = schema::workouts)]
pub struct NewWorkoutRow<'a> {
    pub name: &'a str,
    pub publicly_available: bool,
    pub owner_id: Option<i32>,
}

#[derive(Debug, Clone)]
pub struct WorkoutDraft {
    pub name: String,
    pub publicly_available: bool,
    pub muscle_groups: Vec<MuscleGroup>,
    pub owner_id: Option<i32>,
}

impl WorkoutDraft {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            publicly_available: true,
            muscle_groups: Vec::new(),
            owner_id: None,
        }
    }

    pub fn muscle_groups(mut self, muscle_groups: impl IntoIterator<Item = MuscleGroup>) -> Self {
        self.muscle_groups = muscle_groups.into_iter().collect();
        self
    }

    pub fn private(mut self) -> Self {
        self.publicly_available = false;
        self
    }

    pub fn owner(mut self, owner_id: i32) -> Self {
        self.owner_id = Some(owner_id);
        self
    }
}

#[derive(AsChangeset, Debug, Clone, Default)]
#[diesel(table_name = schema::workouts)]
pub struct WorkoutChanges {
    pub name: Option<String>,
    pub publicly_available: Option<bool>,
}

impl WorkoutChanges {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.publicly_available.is_none()
    }
}

// Exercises
#[derive(Queryable, Selectable, Debug, Clone)]
#[diesel(table_name = schema::exercises)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct ExerciseRow {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub primary_muscle: Option<String>,
}

#[derive(Insertable)]
#[diesel(table_name = schema::exercises)]
pub struct NewExerciseRow<'a> {
    pub name: &'a str,
    pub description: Option<&'a str>,
    pub primary_muscle: Option<&'static str>,
}

#[derive(Debug, Clone, Default)]
pub struct ExerciseDraft {
    pub name: String,
    pub description: Option<String>,
    pub primary_muscle: Option<MuscleGroup>,
}

impl ExerciseDraft {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn primary_muscle(mut self, muscle: MuscleGroup) -> Self {
        self.primary_muscle = Some(muscle);
        self
    }
}

#[derive(AsChangeset, Debug, Clone, Default)]
#[diesel(table_name = schema::exercises)]
pub struct ExerciseChanges {
    pub name: Option<String>,
    pub description: Option<Option<String>>,
}

impl ExerciseChanges {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.description.is_none()
    }
}

// Ratings
#[derive(Queryable, Selectable, Debug, Clone)]
#[diesel(table_name = schema::ratings)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct RatingRow {
    pub id: i32,
    pub score: f64,
    pub comment: Option<String>,
    pub gym_id: Option<i32>,
    pub workout_id: Option<i32>,
    pub exercise_id: Option<i32>,
    pub user_id: i32,
    pub created_at: NaiveDateTime,
}

impl RatingRow {
    pub fn target(&self) -> Option<RateableRef> {
        match (self.gym_id, self.workout_id, self.exercise_id) {
            (Some(id), _, _) => Some(RateableRef::gym(id)),
            (_, Some(id), _) => Some(RateableRef::workout(id)),
            (_, _, Some(id)) => Some(RateableRef::exercise(id)),
            _ => None,
        }
    }
}

impl From<RatingRow> for Rating {
    fn from(row: RatingRow) -> Self {
        let target = row.target();
        Rating {
            id: row.id,
            score: row.score,
            comment: row.comment,
            target,
            author_id: row.user_id,
            created_at: row.created_at,
        }
    }
}

#[derive(Insertable)]
#[diesel(table_name = schema::ratings)]
pub struct NewRatingRow<'a> {
    pub score: f64,
    pub comment: Option<&'a str>,
    pub gym_id: Option<i32>,
    pub workout_id: Option<i32>,
    pub exercise_id: Option<i32>,
    pub user_id: i32,
    pub created_at: NaiveDateTime,
}

impl<'a> NewRatingRow<'a> {
    pub fn for_target(
        target: RateableRef,
        user_id: i32,
        score: f64,
        comment: Option<&'a str>,
        created_at: NaiveDateTime,
    ) -> Self {
        use crate::model::RateableKind;

        let mut row = NewRatingRow {
            score,
            comment,
            gym_id: None,
            workout_id: None,
            exercise_id: None,
            user_id,
            created_at,
        };
        match target.kind {
            RateableKind::Gym => row.gym_id = Some(target.id),
            RateableKind::Workout => row.workout_id = Some(target.id),
            RateableKind::Exercise => row.exercise_id = Some(target.id),
        }
        row
    }
}
