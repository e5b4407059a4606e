use chrono::Utc;
use diesel::prelude::*;
use log::{debug, info};

use crate::db::models::{
    ExerciseChanges, ExerciseDraft, ExerciseRow, GymChanges, GymDraft, GymRow, NewExerciseRow,
    NewGymRow, NewRatingRow, NewUserRow, NewWorkoutRow, RatingRow, UserRow, WorkoutChanges,
    WorkoutDraft, WorkoutRow,
};
use crate::db::schema::{
    exercises, gym_workouts, gyms, ratings, user_gyms, user_workouts, users, workout_exercises,
    workout_muscle_groups, workouts,
};
use crate::error::{RepError, Result};
use crate::model::{
    AnyRateable, Exercise, Gym, MuscleGroup, RateableKind, RateableRef, Rating, RegisteredUser,
    Workout,
};

// Users
pub fn create_user(conn: &mut SqliteConnection, username: &str) -> Result<RegisteredUser> {
    let username = username.trim();
    if username.is_empty() {
        return Err(RepError::Validation("username must not be empty".to_string()));
    }

    conn.transaction::<_, RepError, _>(|conn| {
        let taken = diesel::select(diesel::dsl::exists(
            users::table.filter(users::username.eq(username)),
        ))
        .get_result::<bool>(conn)?;
        if taken {
            return Err(RepError::Validation(format!(
                "username '{}' is already taken",
                username
            )));
        }

        let row = diesel::insert_into(users::table)
            .values(&NewUserRow {
                username,
                created_at: Utc::now().naive_utc(),
            })
            .returning(UserRow::as_returning())
            .get_result(conn)?;
        info!("Registered user {} (#{})", row.username, row.id);
        Ok(RegisteredUser::new(row.id, row.username))
    })
}

pub fn get_or_create_user(conn: &mut SqliteConnection, username: &str) -> Result<RegisteredUser> {
    match find_user_by_name(conn, username) {
        Err(e) if e.is_not_found() => create_user(conn, username),
        other => other,
    }
}

fn hydrate_user(conn: &mut SqliteConnection, row: UserRow) -> Result<RegisteredUser> {
    let gym_ids = user_gyms::table
        .filter(user_gyms::user_id.eq(row.id))
        .order(user_gyms::id.asc())
        .select(user_gyms::gym_id)
        .load::<i32>(conn)?;
    let workout_ids = user_workouts::table
        .filter(user_workouts::user_id.eq(row.id))
        .order(user_workouts::id.asc())
        .select(user_workouts::workout_id)
        .load::<i32>(conn)?;

    Ok(RegisteredUser {
        id: row.id,
        username: row.username,
        gym_ids,
        workout_ids,
    })
}

pub fn find_user(conn: &mut SqliteConnection, user_id: i32) -> Result<RegisteredUser> {
    let row = users::table
        .find(user_id)
        .select(UserRow::as_select())
        .first(conn)
        .optional()?
        .ok_or_else(|| RepError::not_found("user", user_id))?;
    hydrate_user(conn, row)
}

pub fn find_user_by_name(conn: &mut SqliteConnection, username: &str) -> Result<RegisteredUser> {
    let row = users::table
        .filter(users::username.eq(username.trim()))
        .select(UserRow::as_select())
        .first(conn)
        .optional()?
        .ok_or_else(|| RepError::not_found("user", username))?;
    hydrate_user(conn, row)
}

pub fn list_users(conn: &mut SqliteConnection) -> Result<Vec<RegisteredUser>> {
    let rows = users::table
        .order(users::id.asc())
        .select(UserRow::as_select())
        .load(conn)?;
    rows.into_iter().map(|row| hydrate_user(conn, row)).collect()
}

// Ratings
pub fn ratings_for(conn: &mut SqliteConnection, target: RateableRef) -> Result<Vec<Rating>> {
    let query = ratings::table
        .select(RatingRow::as_select())
        .order(ratings::id.asc())
        .into_boxed();
    let query = match target.kind {
        RateableKind::Gym => query.filter(ratings::gym_id.eq(target.id)),
        RateableKind::Workout => query.filter(ratings::workout_id.eq(target.id)),
        RateableKind::Exercise => query.filter(ratings::exercise_id.eq(target.id)),
    };
    let rows = query.load::<RatingRow>(conn)?;
    Ok(rows.into_iter().map(Rating::from).collect())
}

pub fn add_rating(
    conn: &mut SqliteConnection,
    target: RateableRef,
    author_id: i32,
    score: f64,
    comment: Option<&str>,
) -> Result<Rating> {
    conn.transaction::<_, RepError, _>(|conn| {
        ensure_rateable(conn, target)?;
        ensure_user(conn, author_id)?;

        let row = diesel::insert_into(ratings::table)
            .values(&NewRatingRow::for_target(
                target,
                author_id,
                score,
                comment,
                Utc::now().naive_utc(),
            ))
            .returning(RatingRow::as_returning())
            .get_result(conn)?;
        info!("User #{} rated {} with {:.1}", author_id, target, score);
        Ok(Rating::from(row))
    })
}

pub fn find_rating(conn: &mut SqliteConnection, rating_id: i32) -> Result<Rating> {
    ratings::table
        .find(rating_id)
        .select(RatingRow::as_select())
        .first(conn)
        .optional()?
        .map(Rating::from)
        .ok_or_else(|| RepError::not_found("rating", rating_id))
}

pub fn delete_rating(conn: &mut SqliteConnection, rating_id: i32) -> Result<()> {
    let deleted = diesel::delete(ratings::table.find(rating_id)).execute(conn)?;
    if deleted == 0 {
        return Err(RepError::not_found("rating", rating_id));
    }
    info!("Deleted rating #{}", rating_id);
    Ok(())
}

// Rateables
fn rateable_exists(conn: &mut SqliteConnection, target: RateableRef) -> Result<bool> {
    let found: bool = match target.kind {
        RateableKind::Gym => {
            diesel::select(diesel::dsl::exists(gyms::table.find(target.id))).get_result(conn)?
        }
        RateableKind::Workout => {
            diesel::select(diesel::dsl::exists(workouts::table.find(target.id))).get_result(conn)?
        }
        RateableKind::Exercise => diesel::select(diesel::dsl::exists(
            exercises::table.find(target.id),
        ))
        .get_result(conn)?,
    };
    Ok(found)
}

fn ensure_rateable(conn: &mut SqliteConnection, target: RateableRef) -> Result<()> {
    if rateable_exists(conn, target)? {
        Ok(())
    } else {
        Err(RepError::not_found(target.kind.as_str(), target.id))
    }
}

fn ensure_user(conn: &mut SqliteConnection, user_id: i32) -> Result<()> {
    let found = diesel::select(diesel::dsl::exists(users::table.find(user_id)))
        .get_result::<bool>(conn)?;
    if found {
        Ok(())
    } else {
        Err(RepError::not_found("user", user_id))
    }
}

pub fn load_rateable(conn: &mut SqliteConnection, target: RateableRef) -> Result<AnyRateable> {
    debug!("Loading {}", target);
    Ok(match target.kind {
        RateableKind::Gym => find_gym(conn, target.id)?.into(),
        RateableKind::Workout => find_workout(conn, target.id)?.into(),
        RateableKind::Exercise => find_exercise(conn, target.id)?.into(),
    })
}

pub fn list_rateables(conn: &mut SqliteConnection, kind: RateableKind) -> Result<Vec<AnyRateable>> {
    Ok(match kind {
        RateableKind::Gym => list_gyms(conn)?.into_iter().map(Into::into).collect(),
        RateableKind::Workout => list_workouts(conn)?.into_iter().map(Into::into).collect(),
        RateableKind::Exercise => list_exercises(conn)?.into_iter().map(Into::into).collect(),
    })
}

// Gyms
fn hydrate_gym(conn: &mut SqliteConnection, row: GymRow) -> Result<Gym> {
    let workout_ids = gym_workouts::table
        .filter(gym_workouts::gym_id.eq(row.id))
        .order(gym_workouts::id.asc())
        .select(gym_workouts::workout_id)
        .load::<i32>(conn)?;
    let user_ids = user_gyms::table
        .filter(user_gyms::gym_id.eq(row.id))
        .order(user_gyms::id.asc())
        .select(user_gyms::user_id)
        .load::<i32>(conn)?;
    let ratings = ratings_for(conn, RateableRef::gym(row.id))?;

    Ok(Gym {
        id: row.id,
        name: row.name,
        address: row.address,
        workout_ids,
        user_ids,
        ratings,
    })
}

pub fn create_gym(conn: &mut SqliteConnection, draft: &GymDraft) -> Result<Gym> {
    let row = diesel::insert_into(gyms::table)
        .values(&NewGymRow {
            name: &draft.name,
            address: draft.address.as_deref(),
        })
        .returning(GymRow::as_returning())
        .get_result(conn)?;
    info!("Created gym {} (#{})", row.name, row.id);
    hydrate_gym(conn, row)
}

pub fn update_gym(conn: &mut SqliteConnection, gym_id: i32, changes: &GymChanges) -> Result<Gym> {
    if !changes.is_empty() {
        let updated = diesel::update(gyms::table.find(gym_id))
            .set(changes)
            .execute(conn)?;
        if updated == 0 {
            return Err(RepError::not_found("gym", gym_id));
        }
        info!("Updated gym #{}", gym_id);
    }
    find_gym(conn, gym_id)
}

/// Deletes the gym together with its ratings and edges.
pub fn delete_gym(conn: &mut SqliteConnection, gym_id: i32) -> Result<()> {
    conn.transaction::<_, RepError, _>(|conn| {
        let removed_ratings =
            diesel::delete(ratings::table.filter(ratings::gym_id.eq(gym_id))).execute(conn)?;
        diesel::delete(gym_workouts::table.filter(gym_workouts::gym_id.eq(gym_id)))
            .execute(conn)?;
        diesel::delete(user_gyms::table.filter(user_gyms::gym_id.eq(gym_id))).execute(conn)?;
        let deleted = diesel::delete(gyms::table.find(gym_id)).execute(conn)?;
        if deleted == 0 {
            return Err(RepError::not_found("gym", gym_id));
        }
        info!("Deleted gym #{} and {} rating(s)", gym_id, removed_ratings);
        Ok(())
    })
}

pub fn find_gym(conn: &mut SqliteConnection, gym_id: i32) -> Result<Gym> {
    let row = gyms::table
        .find(gym_id)
        .select(GymRow::as_select())
        .first(conn)
        .optional()?
        .ok_or_else(|| RepError::not_found("gym", gym_id))?;
    hydrate_gym(conn, row)
}

/// First gym with exactly this name, by id order.
pub fn find_gym_by_name(conn: &mut SqliteConnection, name: &str) -> Result<Gym> {
    let row = gyms::table
        .filter(gyms::name.eq(name))
        .order(gyms::id.asc())
        .select(GymRow::as_select())
        .first(conn)
        .optional()?
        .ok_or_else(|| RepError::not_found("gym", name))?;
    hydrate_gym(conn, row)
}

pub fn list_gyms(conn: &mut SqliteConnection) -> Result<Vec<Gym>> {
    let rows = gyms::table
        .order(gyms::id.asc())
        .select(GymRow::as_select())
        .load(conn)?;
    rows.into_iter().map(|row| hydrate_gym(conn, row)).collect()
}

pub fn gyms_for_user(conn: &mut SqliteConnection, user_id: i32) -> Result<Vec<Gym>> {
    let ids = user_gyms::table
        .filter(user_gyms::user_id.eq(user_id))
        .order(user_gyms::id.asc())
        .select(user_gyms::gym_id)
        .load::<i32>(conn)?;
    ids.into_iter().map(|id| find_gym(conn, id)).collect()
}

// Workouts
fn load_muscle_groups(conn: &mut SqliteConnection, workout_id: i32) -> Result<Vec<MuscleGroup>> {
    workout_muscle_groups::table
        .filter(workout_muscle_groups::workout_id.eq(workout_id))
        .order(workout_muscle_groups::position.asc())
        .select(workout_muscle_groups::muscle_group)
        .load::<String>(conn)?
        .iter()
        .map(|name| name.parse::<MuscleGroup>())
        .collect()
}

fn hydrate_workout(conn: &mut SqliteConnection, row: WorkoutRow) -> Result<Workout> {
    let muscle_groups = load_muscle_groups(conn, row.id)?;
    let exercise_ids = workout_exercises::table
        .filter(workout_exercises::workout_id.eq(row.id))
        .order(workout_exercises::id.asc())
        .select(workout_exercises::exercise_id)
        .load::<i32>(conn)?;
    let gym_ids = gym_workouts::table
        .filter(gym_workouts::workout_id.eq(row.id))
        .order(gym_workouts::id.asc())
        .select(gym_workouts::gym_id)
        .load::<i32>(conn)?;
    let user_ids = user_workouts::table
        .filter(user_workouts::workout_id.eq(row.id))
        .order(user_workouts::id.asc())
        .select(user_workouts::user_id)
        .load::<i32>(conn)?;
    let ratings = ratings_for(conn, RateableRef::workout(row.id))?;

    Ok(Workout {
        id: row.id,
        name: row.name,
        publicly_available: row.publicly_available,
        muscle_groups,
        exercise_ids,
        gym_ids,
        user_ids,
        owner_id: row.owner_id,
        ratings,
    })
}

pub fn create_workout(conn: &mut SqliteConnection, draft: &WorkoutDraft) -> Result<Workout> {
    conn.transaction::<_, RepError, _>(|conn| {
        if let Some(owner_id) = draft.owner_id {
            ensure_user(conn, owner_id)?;
        }
        let row = diesel::insert_into(workouts::table)
            .values(&NewWorkoutRow {
                name: &draft.name,
                publicly_available: draft.publicly_available,
                owner_id: draft.owner_id,
            })
            .returning(WorkoutRow::as_returning())
            .get_result(conn)?;

        for (position, muscle) in draft.muscle_groups.iter().enumerate() {
            diesel::insert_into(workout_muscle_groups::table)
                .values((
                    workout_muscle_groups::workout_id.eq(row.id),
                    workout_muscle_groups::position.eq(position as i32),
                    workout_muscle_groups::muscle_group.eq(muscle.as_str()),
                ))
                .execute(conn)?;
        }

        info!("Created workout {} (#{})", row.name, row.id);
        hydrate_workout(conn, row)
    })
}

pub fn update_workout(
    conn: &mut SqliteConnection,
    workout_id: i32,
    changes: &WorkoutChanges,
) -> Result<Workout> {
    if !changes.is_empty() {
        let updated = diesel::update(workouts::table.find(workout_id))
            .set(changes)
            .execute(conn)?;
        if updated == 0 {
            return Err(RepError::not_found("workout", workout_id));
        }
        info!("Updated workout #{}", workout_id);
    }
    find_workout(conn, workout_id)
}

/// Deletes the workout together with its ratings, muscle groups and edges.
pub fn delete_workout(conn: &mut SqliteConnection, workout_id: i32) -> Result<()> {
    conn.transaction::<_, RepError, _>(|conn| {
        let removed_ratings =
            diesel::delete(ratings::table.filter(ratings::workout_id.eq(workout_id)))
                .execute(conn)?;
        diesel::delete(
            workout_muscle_groups::table
                .filter(workout_muscle_groups::workout_id.eq(workout_id)),
        )
        .execute(conn)?;
        diesel::delete(
            workout_exercises::table.filter(workout_exercises::workout_id.eq(workout_id)),
        )
        .execute(conn)?;
        diesel::delete(gym_workouts::table.filter(gym_workouts::workout_id.eq(workout_id)))
            .execute(conn)?;
        diesel::delete(user_workouts::table.filter(user_workouts::workout_id.eq(workout_id)))
            .execute(conn)?;
        let deleted = diesel::delete(workouts::table.find(workout_id)).execute(conn)?;
        if deleted == 0 {
            return Err(RepError::not_found("workout", workout_id));
        }
        info!(
            "Deleted workout #{} and {} rating(s)",
            workout_id, removed_ratings
        );
        Ok(())
    })
}

pub fn find_workout(conn: &mut SqliteConnection, workout_id: i32) -> Result<Workout> {
    let row = workouts::table
        .find(workout_id)
        .select(WorkoutRow::as_select())
        .first(conn)
        .optional()?
        .ok_or_else(|| RepError::not_found("workout", workout_id))?;
    hydrate_workout(conn, row)
}

/// First workout with exactly this name, by id order.
pub fn find_workout_by_name(conn: &mut SqliteConnection, name: &str) -> Result<Workout> {
    let row = workouts::table
        .filter(workouts::name.eq(name))
        .order(workouts::id.asc())
        .select(WorkoutRow::as_select())
        .first(conn)
        .optional()?
        .ok_or_else(|| RepError::not_found("workout", name))?;
    hydrate_workout(conn, row)
}

pub fn list_workouts(conn: &mut SqliteConnection) -> Result<Vec<Workout>> {
    let rows = workouts::table
        .order(workouts::id.asc())
        .select(WorkoutRow::as_select())
        .load(conn)?;
    rows.into_iter().map(|row| hydrate_workout(conn, row)).collect()
}

/// Workouts the user owns or uses, by id.
pub fn workouts_for_user(conn: &mut SqliteConnection, user_id: i32) -> Result<Vec<Workout>> {
    let mut ids = workouts::table
        .filter(workouts::owner_id.eq(user_id))
        .select(workouts::id)
        .load::<i32>(conn)?;
    ids.extend(
        user_workouts::table
            .filter(user_workouts::user_id.eq(user_id))
            .select(user_workouts::workout_id)
            .load::<i32>(conn)?,
    );
    ids.sort_unstable();
    ids.dedup();
    ids.into_iter().map(|id| find_workout(conn, id)).collect()
}

pub fn add_muscle_group(
    conn: &mut SqliteConnection,
    workout_id: i32,
    muscle: MuscleGroup,
) -> Result<()> {
    conn.transaction::<_, RepError, _>(|conn| {
        ensure_rateable(conn, RateableRef::workout(workout_id))?;
        let max_position: Option<i32> = workout_muscle_groups::table
            .filter(workout_muscle_groups::workout_id.eq(workout_id))
            .select(diesel::dsl::max(workout_muscle_groups::position))
            .first(conn)?;

        diesel::insert_into(workout_muscle_groups::table)
            .values((
                workout_muscle_groups::workout_id.eq(workout_id),
                workout_muscle_groups::position.eq(max_position.map(|p| p + 1).unwrap_or(0)),
                workout_muscle_groups::muscle_group.eq(muscle.as_str()),
            ))
            .execute(conn)?;
        debug!("Added {} to workout #{}", muscle, workout_id);
        Ok(())
    })
}

/// Removes the first occurrence of `muscle` from the workout.
pub fn remove_muscle_group(
    conn: &mut SqliteConnection,
    workout_id: i32,
    muscle: MuscleGroup,
) -> Result<bool> {
    conn.transaction::<_, RepError, _>(|conn| {
        ensure_rateable(conn, RateableRef::workout(workout_id))?;
        let first_position: Option<i32> = workout_muscle_groups::table
            .filter(workout_muscle_groups::workout_id.eq(workout_id))
            .filter(workout_muscle_groups::muscle_group.eq(muscle.as_str()))
            .select(diesel::dsl::min(workout_muscle_groups::position))
            .first(conn)?;

        let Some(position) = first_position else {
            return Ok(false);
        };
        diesel::delete(workout_muscle_groups::table.find((workout_id, position)))
            .execute(conn)?;
        debug!("Removed {} from workout #{}", muscle, workout_id);
        Ok(true)
    })
}

// Exercises
fn hydrate_exercise(conn: &mut SqliteConnection, row: ExerciseRow) -> Result<Exercise> {
    let workout_ids = workout_exercises::table
        .filter(workout_exercises::exercise_id.eq(row.id))
        .order(workout_exercises::id.asc())
        .select(workout_exercises::workout_id)
        .load::<i32>(conn)?;
    let ratings = ratings_for(conn, RateableRef::exercise(row.id))?;
    let primary_muscle = row
        .primary_muscle
        .as_deref()
        .map(str::parse::<MuscleGroup>)
        .transpose()?;

    Ok(Exercise {
        id: row.id,
        name: row.name,
        description: row.description,
        primary_muscle,
        workout_ids,
        ratings,
    })
}

pub fn create_exercise(conn: &mut SqliteConnection, draft: &ExerciseDraft) -> Result<Exercise> {
    let row = diesel::insert_into(exercises::table)
        .values(&NewExerciseRow {
            name: &draft.name,
            description: draft.description.as_deref(),
            primary_muscle: draft.primary_muscle.map(|m| m.as_str()),
        })
        .returning(ExerciseRow::as_returning())
        .get_result(conn)?;
    info!("Created exercise {} (#{})", row.name, row.id);
    hydrate_exercise(conn, row)
}

pub fn update_exercise(
    conn: &mut SqliteConnection,
    exercise_id: i32,
    changes: &ExerciseChanges,
) -> Result<Exercise> {
    if !changes.is_empty() {
        let updated = diesel::update(exercises::table.find(exercise_id))
            .set(changes)
            .execute(conn)?;
        if updated == 0 {
            return Err(RepError::not_found("exercise", exercise_id));
        }
        info!("Updated exercise #{}", exercise_id);
    }
    find_exercise(conn, exercise_id)
}

/// Deletes the exercise together with its ratings and workout edges.
pub fn delete_exercise(conn: &mut SqliteConnection, exercise_id: i32) -> Result<()> {
    conn.transaction::<_, RepError, _>(|conn| {
        let removed_ratings =
            diesel::delete(ratings::table.filter(ratings::exercise_id.eq(exercise_id)))
                .execute(conn)?;
        diesel::delete(
            workout_exercises::table.filter(workout_exercises::exercise_id.eq(exercise_id)),
        )
        .execute(conn)?;
        let deleted = diesel::delete(exercises::table.find(exercise_id)).execute(conn)?;
        if deleted == 0 {
            return Err(RepError::not_found("exercise", exercise_id));
        }
        info!(
            "Deleted exercise #{} and {} rating(s)",
            exercise_id, removed_ratings
        );
        Ok(())
    })
}

pub fn find_exercise(conn: &mut SqliteConnection, exercise_id: i32) -> Result<Exercise> {
    let row = exercises::table
        .find(exercise_id)
        .select(ExerciseRow::as_select())
        .first(conn)
        .optional()?
        .ok_or_else(|| RepError::not_found("exercise", exercise_id))?;
    hydrate_exercise(conn, row)
}

/// First exercise with exactly this name, by id order.
pub fn find_exercise_by_name(conn: &mut SqliteConnection, name: &str) -> Result<Exercise> {
    let row = exercises::table
        .filter(exercises::name.eq(name))
        .order(exercises::id.asc())
        .select(ExerciseRow::as_select())
        .first(conn)
        .optional()?
        .ok_or_else(|| RepError::not_found("exercise", name))?;
    hydrate_exercise(conn, row)
}

pub fn list_exercises(conn: &mut SqliteConnection) -> Result<Vec<Exercise>> {
    let rows = exercises::table
        .order(exercises::id.asc())
        .select(ExerciseRow::as_select())
        .load(conn)?;
    rows.into_iter()
        .map(|row| hydrate_exercise(conn, row))
        .collect()
}

/// Exercises of a workout, in the order they were added.
pub fn list_workout_exercises(conn: &mut SqliteConnection, workout_id: i32) -> Result<Vec<Exercise>> {
    let workout = find_workout(conn, workout_id)?;
    workout
        .exercise_ids
        .iter()
        .map(|id| find_exercise(conn, *id))
        .collect()
}

// Edges. Each edge is a single join-table row, so one insert or delete
// changes both directions at once.
pub fn link_workout_exercise(
    conn: &mut SqliteConnection,
    workout_id: i32,
    exercise_id: i32,
) -> Result<bool> {
    conn.transaction::<_, RepError, _>(|conn| {
        ensure_rateable(conn, RateableRef::workout(workout_id))?;
        ensure_rateable(conn, RateableRef::exercise(exercise_id))?;
        let inserted = diesel::insert_or_ignore_into(workout_exercises::table)
            .values((
                workout_exercises::workout_id.eq(workout_id),
                workout_exercises::exercise_id.eq(exercise_id),
            ))
            .execute(conn)?;
        Ok(inserted > 0)
    })
}

pub fn unlink_workout_exercise(
    conn: &mut SqliteConnection,
    workout_id: i32,
    exercise_id: i32,
) -> Result<bool> {
    let deleted = diesel::delete(
        workout_exercises::table
            .filter(workout_exercises::workout_id.eq(workout_id))
            .filter(workout_exercises::exercise_id.eq(exercise_id)),
    )
    .execute(conn)?;
    Ok(deleted > 0)
}

pub fn link_gym_workout(conn: &mut SqliteConnection, gym_id: i32, workout_id: i32) -> Result<bool> {
    conn.transaction::<_, RepError, _>(|conn| {
        ensure_rateable(conn, RateableRef::gym(gym_id))?;
        ensure_rateable(conn, RateableRef::workout(workout_id))?;
        let inserted = diesel::insert_or_ignore_into(gym_workouts::table)
            .values((
                gym_workouts::gym_id.eq(gym_id),
                gym_workouts::workout_id.eq(workout_id),
            ))
            .execute(conn)?;
        Ok(inserted > 0)
    })
}

pub fn unlink_gym_workout(
    conn: &mut SqliteConnection,
    gym_id: i32,
    workout_id: i32,
) -> Result<bool> {
    let deleted = diesel::delete(
        gym_workouts::table
            .filter(gym_workouts::gym_id.eq(gym_id))
            .filter(gym_workouts::workout_id.eq(workout_id)),
    )
    .execute(conn)?;
    Ok(deleted > 0)
}

pub fn link_user_workout(
    conn: &mut SqliteConnection,
    user_id: i32,
    workout_id: i32,
) -> Result<bool> {
    conn.transaction::<_, RepError, _>(|conn| {
        ensure_user(conn, user_id)?;
        ensure_rateable(conn, RateableRef::workout(workout_id))?;
        let inserted = diesel::insert_or_ignore_into(user_workouts::table)
            .values((
                user_workouts::user_id.eq(user_id),
                user_workouts::workout_id.eq(workout_id),
            ))
            .execute(conn)?;
        Ok(inserted > 0)
    })
}

pub fn unlink_user_workout(
    conn: &mut SqliteConnection,
    user_id: i32,
    workout_id: i32,
) -> Result<bool> {
    let deleted = diesel::delete(
        user_workouts::table
            .filter(user_workouts::user_id.eq(user_id))
            .filter(user_workouts::workout_id.eq(workout_id)),
    )
    .execute(conn)?;
    Ok(deleted > 0)
}

pub fn link_user_gym(conn: &mut SqliteConnection, user_id: i32, gym_id: i32) -> Result<bool> {
    conn.transaction::<_, RepError, _>(|conn| {
        ensure_user(conn, user_id)?;
        ensure_rateable(conn, RateableRef::gym(gym_id))?;
        let inserted = diesel::insert_or_ignore_into(user_gyms::table)
            .values((user_gyms::user_id.eq(user_id), user_gyms::gym_id.eq(gym_id)))
            .execute(conn)?;
        Ok(inserted > 0)
    })
}

pub fn unlink_user_gym(conn: &mut SqliteConnection, user_id: i32, gym_id: i32) -> Result<bool> {
    let deleted = diesel::delete(
        user_gyms::table
            .filter(user_gyms::user_id.eq(user_id))
            .filter(user_gyms::gym_id.eq(gym_id)),
    )
    .execute(conn)?;
    Ok(deleted > 0)
}
