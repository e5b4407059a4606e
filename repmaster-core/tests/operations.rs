mod common;

use repmaster::RepError;
use repmaster::db::models::{ExerciseDraft, GymChanges, GymDraft, WorkoutChanges, WorkoutDraft};
use repmaster::db::operations::*;
use repmaster::model::{MuscleGroup, RateableRef, Rateable};

#[test]
fn workout_keeps_muscle_group_order_and_duplicates() {
    let pool = common::memory_pool();
    let mut conn = pool.get().unwrap();

    let workout = create_workout(
        &mut conn,
        &WorkoutDraft::new("Full body").muscle_groups([
            MuscleGroup::Quads,
            MuscleGroup::Chest,
            MuscleGroup::Quads,
        ]),
    )
    .unwrap();
    assert_eq!(
        workout.muscle_groups,
        vec![MuscleGroup::Quads, MuscleGroup::Chest, MuscleGroup::Quads]
    );

    add_muscle_group(&mut conn, workout.id, MuscleGroup::Calves).unwrap();
    assert!(remove_muscle_group(&mut conn, workout.id, MuscleGroup::Quads).unwrap());
    assert!(!remove_muscle_group(&mut conn, workout.id, MuscleGroup::Abs).unwrap());

    let reloaded = find_workout(&mut conn, workout.id).unwrap();
    assert_eq!(
        reloaded.muscle_groups,
        vec![MuscleGroup::Chest, MuscleGroup::Quads, MuscleGroup::Calves]
    );
}

#[test]
fn exercise_edge_is_visible_from_both_sides() {
    let pool = common::memory_pool();
    let mut conn = pool.get().unwrap();

    let workout = create_workout(&mut conn, &WorkoutDraft::new("Leg Day")).unwrap();
    let squat = create_exercise(&mut conn, &ExerciseDraft::new("Squat")).unwrap();

    assert!(link_workout_exercise(&mut conn, workout.id, squat.id).unwrap());
    assert!(!link_workout_exercise(&mut conn, workout.id, squat.id).unwrap());

    assert_eq!(find_workout(&mut conn, workout.id).unwrap().exercise_ids, vec![squat.id]);
    assert_eq!(find_exercise(&mut conn, squat.id).unwrap().workout_ids, vec![workout.id]);

    assert!(unlink_workout_exercise(&mut conn, workout.id, squat.id).unwrap());
    assert!(find_workout(&mut conn, workout.id).unwrap().exercise_ids.is_empty());
    assert!(find_exercise(&mut conn, squat.id).unwrap().workout_ids.is_empty());
}

#[test]
fn linking_unknown_entities_is_not_found() {
    let pool = common::memory_pool();
    let mut conn = pool.get().unwrap();
    let gym = create_gym(&mut conn, &GymDraft::new("Iron Temple")).unwrap();

    let err = link_gym_workout(&mut conn, gym.id, 404).unwrap_err();
    assert!(err.is_not_found());
    assert!(find_gym(&mut conn, gym.id).unwrap().workout_ids.is_empty());
}

#[test]
fn find_by_name_reports_missing_names() {
    let pool = common::memory_pool();
    let mut conn = pool.get().unwrap();

    match find_gym_by_name(&mut conn, "Nowhere") {
        Err(RepError::NotFound { entity, key }) => {
            assert_eq!(entity, "gym");
            assert_eq!(key, "Nowhere");
        }
        other => panic!("expected NotFound, got {:?}", other),
    }
    assert!(find_workout_by_name(&mut conn, "Nothing").unwrap_err().is_not_found());
    assert!(find_exercise_by_name(&mut conn, "Nothing").unwrap_err().is_not_found());
    assert!(find_user_by_name(&mut conn, "nobody").unwrap_err().is_not_found());
}

#[test]
fn find_by_name_takes_the_first_match() {
    let pool = common::memory_pool();
    let mut conn = pool.get().unwrap();
    let first = create_gym(&mut conn, &GymDraft::new("Twin")).unwrap();
    create_gym(&mut conn, &GymDraft::new("Twin")).unwrap();

    assert_eq!(find_gym_by_name(&mut conn, "Twin").unwrap().id, first.id);
}

#[test]
fn ratings_load_in_insertion_order_with_targets() {
    let pool = common::memory_pool();
    let mut conn = pool.get().unwrap();
    let user = create_user(&mut conn, "ada").unwrap();
    let gym = create_gym(&mut conn, &GymDraft::new("Iron Temple")).unwrap();
    let target = RateableRef::gym(gym.id);

    let first = add_rating(&mut conn, target, user.id, 3.0, Some("ok")).unwrap();
    let second = add_rating(&mut conn, target, user.id, 5.0, None).unwrap();
    assert_eq!(first.target, Some(target));

    let gym = find_gym(&mut conn, gym.id).unwrap();
    let ids: Vec<i32> = gym.ratings().iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![first.id, second.id]);
    assert_eq!(gym.average_rating(), 4.0);
    assert_eq!(gym.ratings()[0].comment.as_deref(), Some("ok"));
}

#[test]
fn rating_a_missing_target_fails() {
    let pool = common::memory_pool();
    let mut conn = pool.get().unwrap();
    let user = create_user(&mut conn, "ada").unwrap();

    let err = add_rating(&mut conn, RateableRef::exercise(9), user.id, 3.0, None).unwrap_err();
    assert!(err.is_not_found());
}

#[test]
fn deleting_a_workout_cascades() {
    let pool = common::memory_pool();
    let mut conn = pool.get().unwrap();
    let user = create_user(&mut conn, "ada").unwrap();
    let gym = create_gym(&mut conn, &GymDraft::new("Iron Temple")).unwrap();
    let workout = create_workout(
        &mut conn,
        &WorkoutDraft::new("Leg Day").muscle_groups([MuscleGroup::Quads]),
    )
    .unwrap();
    let squat = create_exercise(&mut conn, &ExerciseDraft::new("Squat")).unwrap();
    link_workout_exercise(&mut conn, workout.id, squat.id).unwrap();
    link_gym_workout(&mut conn, gym.id, workout.id).unwrap();
    link_user_workout(&mut conn, user.id, workout.id).unwrap();
    let rating = add_rating(&mut conn, RateableRef::workout(workout.id), user.id, 4.0, None).unwrap();

    delete_workout(&mut conn, workout.id).unwrap();

    assert!(find_rating(&mut conn, rating.id).unwrap_err().is_not_found());
    assert!(find_workout(&mut conn, workout.id).unwrap_err().is_not_found());
    assert!(find_exercise(&mut conn, squat.id).unwrap().workout_ids.is_empty());
    assert!(find_gym(&mut conn, gym.id).unwrap().workout_ids.is_empty());
    assert!(find_user(&mut conn, user.id).unwrap().workout_ids.is_empty());
    assert!(delete_workout(&mut conn, workout.id).unwrap_err().is_not_found());
}

#[test]
fn deleting_gym_and_exercise_removes_their_ratings() {
    let pool = common::memory_pool();
    let mut conn = pool.get().unwrap();
    let user = create_user(&mut conn, "ada").unwrap();
    let gym = create_gym(&mut conn, &GymDraft::new("Iron Temple")).unwrap();
    let squat = create_exercise(&mut conn, &ExerciseDraft::new("Squat")).unwrap();
    let on_gym = add_rating(&mut conn, RateableRef::gym(gym.id), user.id, 2.0, None).unwrap();
    let on_squat = add_rating(&mut conn, RateableRef::exercise(squat.id), user.id, 5.0, None).unwrap();

    delete_gym(&mut conn, gym.id).unwrap();
    delete_exercise(&mut conn, squat.id).unwrap();

    assert!(find_rating(&mut conn, on_gym.id).unwrap_err().is_not_found());
    assert!(find_rating(&mut conn, on_squat.id).unwrap_err().is_not_found());
}

#[test]
fn updates_change_only_given_fields() {
    let pool = common::memory_pool();
    let mut conn = pool.get().unwrap();
    let gym = create_gym(&mut conn, &GymDraft::new("Iron Temple").address("1 Main St")).unwrap();

    let renamed = update_gym(
        &mut conn,
        gym.id,
        &GymChanges {
            name: Some("Steel Temple".to_string()),
            ..Default::default()
        },
    )
    .unwrap();
    assert_eq!(renamed.name, "Steel Temple");
    assert_eq!(renamed.address.as_deref(), Some("1 Main St"));

    let cleared = update_gym(
        &mut conn,
        gym.id,
        &GymChanges {
            address: Some(None),
            ..Default::default()
        },
    )
    .unwrap();
    assert_eq!(cleared.address, None);

    let workout = create_workout(&mut conn, &WorkoutDraft::new("Push")).unwrap();
    let unchanged = update_workout(&mut conn, workout.id, &WorkoutChanges::default()).unwrap();
    assert_eq!(unchanged.name, "Push");
    assert!(
        update_workout(&mut conn, 404, &WorkoutChanges {
            publicly_available: Some(false),
            ..Default::default()
        })
        .unwrap_err()
        .is_not_found()
    );
}

#[test]
fn usernames_are_unique() {
    let pool = common::memory_pool();
    let mut conn = pool.get().unwrap();
    create_user(&mut conn, "ada").unwrap();

    assert!(matches!(
        create_user(&mut conn, "ada"),
        Err(RepError::Validation(_))
    ));
    assert!(matches!(create_user(&mut conn, "  "), Err(RepError::Validation(_))));
    assert_eq!(get_or_create_user(&mut conn, "ada").unwrap().username, "ada");
    assert_eq!(list_users(&mut conn).unwrap().len(), 1);
}
