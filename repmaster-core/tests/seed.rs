mod common;

use rand::SeedableRng;
use rand::rngs::StdRng;
use repmaster::db::operations;
use repmaster::model::Rateable;
use repmaster::seed::seed_demo_data;

#[test]
fn seeds_once() {
    let pool = common::memory_pool();
    let mut conn = pool.get().unwrap();
    let mut rng = StdRng::seed_from_u64(7);

    let summary = seed_demo_data(&mut conn, &mut rng).unwrap();
    assert_eq!(summary.users, 3);
    assert_eq!(summary.gyms, 2);
    assert_eq!(summary.workouts, 3);
    assert_eq!(summary.exercises, 6);

    let leg_day = operations::find_workout_by_name(&mut conn, "Leg Day").unwrap();
    assert_eq!(leg_day.exercise_ids.len(), 2);
    assert_eq!(leg_day.muscle_groups_label(), "[Quads, Hamstrings]");

    let stored: usize = operations::list_workouts(&mut conn)
        .unwrap()
        .iter()
        .map(|w| w.ratings().len())
        .sum::<usize>()
        + operations::list_gyms(&mut conn)
            .unwrap()
            .iter()
            .map(|g| g.ratings().len())
            .sum::<usize>()
        + operations::list_exercises(&mut conn)
            .unwrap()
            .iter()
            .map(|e| e.ratings().len())
            .sum::<usize>();
    assert_eq!(stored, summary.ratings);

    let again = seed_demo_data(&mut conn, &mut rng).unwrap();
    assert!(again.is_empty());
}
