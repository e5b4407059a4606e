//! Edits of the many-to-many edges between entities already loaded in memory.
//!
//! Every edge is stored on both ends. These functions are the only place that
//! touches those id lists, and each one updates both ends in the same call.
//! Linking is idempotent and returns whether anything changed. The session
//! services that take loaded entities (`Session::link_exercise`,
//! `Session::link_workout`) store the join row first and then call these so
//! the caller's copies match the database.

use crate::model::{Exercise, Gym, RegisteredUser, Workout};

fn link(left: &mut Vec<i32>, right_id: i32, right: &mut Vec<i32>, left_id: i32) -> bool {
    let left_has = left.contains(&right_id);
    let right_has = right.contains(&left_id);
    if !left_has {
        left.push(right_id);
    }
    if !right_has {
        right.push(left_id);
    }
    !(left_has && right_has)
}

fn unlink(left: &mut Vec<i32>, right_id: i32, right: &mut Vec<i32>, left_id: i32) -> bool {
    let before = left.len() + right.len();
    left.retain(|id| *id != right_id);
    right.retain(|id| *id != left_id);
    before != left.len() + right.len()
}

pub fn add_exercise(workout: &mut Workout, exercise: &mut Exercise) -> bool {
    link(
        &mut workout.exercise_ids,
        exercise.id,
        &mut exercise.workout_ids,
        workout.id,
    )
}

pub fn remove_exercise(workout: &mut Workout, exercise: &mut Exercise) -> bool {
    unlink(
        &mut workout.exercise_ids,
        exercise.id,
        &mut exercise.workout_ids,
        workout.id,
    )
}

pub fn add_registered_user(workout: &mut Workout, user: &mut RegisteredUser) -> bool {
    link(
        &mut workout.user_ids,
        user.id,
        &mut user.workout_ids,
        workout.id,
    )
}

pub fn remove_registered_user(workout: &mut Workout, user: &mut RegisteredUser) -> bool {
    unlink(
        &mut workout.user_ids,
        user.id,
        &mut user.workout_ids,
        workout.id,
    )
}

pub fn add_workout_to_gym(gym: &mut Gym, workout: &mut Workout) -> bool {
    link(&mut gym.workout_ids, workout.id, &mut workout.gym_ids, gym.id)
}

pub fn remove_workout_from_gym(gym: &mut Gym, workout: &mut Workout) -> bool {
    unlink(&mut gym.workout_ids, workout.id, &mut workout.gym_ids, gym.id)
}

pub fn add_gym_to_user(user: &mut RegisteredUser, gym: &mut Gym) -> bool {
    link(&mut user.gym_ids, gym.id, &mut gym.user_ids, user.id)
}

pub fn remove_gym_from_user(user: &mut RegisteredUser, gym: &mut Gym) -> bool {
    unlink(&mut user.gym_ids, gym.id, &mut gym.user_ids, user.id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Detail, MuscleGroup, Rateable, Rating, STAR};

    #[test]
    fn add_exercise_links_both_ends() {
        let mut workout = Workout::new(1, "Leg Day");
        let mut squat = Exercise::new(5, "Squat");

        assert!(add_exercise(&mut workout, &mut squat));
        assert_eq!(workout.exercise_ids, vec![5]);
        assert_eq!(squat.workout_ids, vec![1]);

        assert!(!add_exercise(&mut workout, &mut squat));
        assert_eq!(workout.exercise_ids.len(), 1);
    }

    #[test]
    fn remove_exercise_unlinks_both_ends() {
        let mut workout = Workout::new(1, "Leg Day");
        let mut squat = Exercise::new(5, "Squat");
        add_exercise(&mut workout, &mut squat);

        assert!(remove_exercise(&mut workout, &mut squat));
        assert!(workout.exercise_ids.is_empty());
        assert!(squat.workout_ids.is_empty());
        assert!(!remove_exercise(&mut workout, &mut squat));
    }

    #[test]
    fn registered_users_are_tracked_on_both_ends() {
        let mut workout = Workout::new(1, "Leg Day");
        let mut user = RegisteredUser::new(3, "ada");

        add_registered_user(&mut workout, &mut user);
        assert_eq!(workout.user_ids, vec![3]);
        assert_eq!(user.workout_ids, vec![1]);

        remove_registered_user(&mut workout, &mut user);
        assert!(workout.user_ids.is_empty());
        assert!(user.workout_ids.is_empty());
    }

    #[test]
    fn gym_edges() {
        let mut gym = Gym::new(2, "Iron Temple");
        let mut workout = Workout::new(1, "Leg Day");
        let mut user = RegisteredUser::new(3, "ada");

        add_workout_to_gym(&mut gym, &mut workout);
        add_gym_to_user(&mut user, &mut gym);
        assert_eq!(gym.workout_ids, vec![1]);
        assert_eq!(workout.gym_ids, vec![2]);
        assert_eq!(user.gym_ids, vec![2]);
        assert_eq!(gym.user_ids, vec![3]);

        assert!(remove_workout_from_gym(&mut gym, &mut workout));
        assert!(remove_gym_from_user(&mut user, &mut gym));
        assert!(gym.workout_ids.is_empty() && workout.gym_ids.is_empty());
        assert!(gym.user_ids.is_empty() && user.gym_ids.is_empty());
    }

    #[test]
    fn half_linked_edge_gets_repaired() {
        let mut workout = Workout::new(1, "Leg Day");
        let mut squat = Exercise::new(5, "Squat");
        workout.exercise_ids.push(5);

        assert!(add_exercise(&mut workout, &mut squat));
        assert_eq!(workout.exercise_ids, vec![5]);
        assert_eq!(squat.workout_ids, vec![1]);
    }

    #[test]
    fn leg_day_scenario() {
        let u1 = RegisteredUser::new(1, "u1");
        let mut workout = Workout::new(1, "Leg Day");
        workout.add_muscle_group(MuscleGroup::Quads);
        workout.add_muscle_group(MuscleGroup::Hamstrings);
        let mut squat = Exercise::new(1, "Squat");
        add_exercise(&mut workout, &mut squat);
        workout.add_rating(Rating::new(1, 4.0, None, u1.id));

        let details = workout.details();
        assert_eq!(details.len(), 4);
        assert_eq!(details[0], Detail::new("Workout name: ", "Leg Day"));
        assert_eq!(
            details[1],
            Detail::new("Worked musclegroups: ", "[Quads, Hamstrings]")
        );
        assert!(details[2].data.starts_with("4.0"));
        assert_eq!(details[2].data.matches(STAR).count(), 4);
        assert_eq!(details[3], Detail::new("Users: ", "0"));
    }
}
