use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use super::{Exercise, Gym, Rating, Workout, average_rating};
use crate::error::RepError;

pub const NOT_RATED_LABEL: &str = "Not rated yet";
pub const STAR: &str = "⭐";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RateableKind {
    Gym,
    Workout,
    Exercise,
}

impl RateableKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RateableKind::Gym => "gym",
            RateableKind::Workout => "workout",
            RateableKind::Exercise => "exercise",
        }
    }
}

impl fmt::Display for RateableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RateableKind {
    type Err = RepError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "gym" | "gyms" => Ok(RateableKind::Gym),
            "workout" | "workouts" => Ok(RateableKind::Workout),
            "exercise" | "exercises" => Ok(RateableKind::Exercise),
            other => Err(RepError::Validation(format!("unknown rateable kind '{}'", other))),
        }
    }
}

/// Identity of a rateable entity, usable without loading it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct RateableRef {
    pub kind: RateableKind,
    pub id: i32,
}

impl RateableRef {
    pub fn new(kind: RateableKind, id: i32) -> Self {
        Self { kind, id }
    }

    pub fn gym(id: i32) -> Self {
        Self::new(RateableKind::Gym, id)
    }

    pub fn workout(id: i32) -> Self {
        Self::new(RateableKind::Workout, id)
    }

    pub fn exercise(id: i32) -> Self {
        Self::new(RateableKind::Exercise, id)
    }
}

impl fmt::Display for RateableRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} #{}", self.kind, self.id)
    }
}

/// One label/value row of a detail page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Detail {
    pub feature: String,
    pub data: String,
}

impl Detail {
    pub fn new(feature: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            feature: feature.into(),
            data: data.into(),
        }
    }
}

/// Rounds an average to the single decimal it is shown with.
pub fn shown_average(average: f64) -> f64 {
    (average * 10.0).round() / 10.0
}

/// Renders an average for display: `"Not rated yet"` for `0.0`, otherwise the
/// value with one decimal followed by one star per whole point of that value.
pub fn format_average(average: f64) -> String {
    if average == 0.0 {
        return NOT_RATED_LABEL.to_string();
    }
    let shown = shown_average(average);
    format!("{:.1}{}", shown, STAR.repeat(shown.trunc() as usize))
}

/// Shared behaviour of everything a user can rate.
pub trait Rateable {
    fn rateable_ref(&self) -> RateableRef;

    fn name(&self) -> &str;

    fn ratings(&self) -> &[Rating];

    fn ratings_mut(&mut self) -> &mut Vec<Rating>;

    /// Ordered label/value rows for the detail page.
    fn details(&self) -> Vec<Detail>;

    /// Appends the rating and points its back-reference at `self`.
    fn add_rating(&mut self, mut rating: Rating) {
        rating.target = Some(self.rateable_ref());
        self.ratings_mut().push(rating);
    }

    /// Detaches the rating with `rating_id`, clearing its back-reference.
    fn remove_rating(&mut self, rating_id: i32) -> Option<Rating> {
        let ratings = self.ratings_mut();
        let index = ratings.iter().position(|r| r.id == rating_id)?;
        let mut rating = ratings.remove(index);
        rating.target = None;
        Some(rating)
    }

    fn average_rating(&self) -> f64 {
        average_rating(self.ratings())
    }

    fn average_detail(&self) -> Detail {
        Detail::new("Average rating: ", format_average(self.average_rating()))
    }
}

pub(crate) fn fmt_rateable(rateable: &dyn Rateable, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let average = rateable.average_rating();
    if average == 0.0 {
        write!(f, "{} Not rated", rateable.name())
    } else {
        write!(f, "{} AVG rating {:.1}/5.0", rateable.name(), shown_average(average))
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum AnyRateable {
    Gym(Gym),
    Workout(Workout),
    Exercise(Exercise),
}

impl AnyRateable {
    pub fn kind(&self) -> RateableKind {
        match self {
            AnyRateable::Gym(_) => RateableKind::Gym,
            AnyRateable::Workout(_) => RateableKind::Workout,
            AnyRateable::Exercise(_) => RateableKind::Exercise,
        }
    }

    fn as_dyn(&self) -> &dyn Rateable {
        match self {
            AnyRateable::Gym(g) => g,
            AnyRateable::Workout(w) => w,
            AnyRateable::Exercise(e) => e,
        }
    }

    fn as_dyn_mut(&mut self) -> &mut dyn Rateable {
        match self {
            AnyRateable::Gym(g) => g,
            AnyRateable::Workout(w) => w,
            AnyRateable::Exercise(e) => e,
        }
    }
}

impl Rateable for AnyRateable {
    fn rateable_ref(&self) -> RateableRef {
        self.as_dyn().rateable_ref()
    }

    fn name(&self) -> &str {
        self.as_dyn().name()
    }

    fn ratings(&self) -> &[Rating] {
        self.as_dyn().ratings()
    }

    fn ratings_mut(&mut self) -> &mut Vec<Rating> {
        self.as_dyn_mut().ratings_mut()
    }

    fn details(&self) -> Vec<Detail> {
        self.as_dyn().details()
    }
}

impl fmt::Display for AnyRateable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_rateable(self.as_dyn(), f)
    }
}

impl From<Gym> for AnyRateable {
    fn from(g: Gym) -> Self {
        AnyRateable::Gym(g)
    }
}

impl From<Workout> for AnyRateable {
    fn from(w: Workout) -> Self {
        AnyRateable::Workout(w)
    }
}

impl From<Exercise> for AnyRateable {
    fn from(e: Exercise) -> Self {
        AnyRateable::Exercise(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_variants() -> Vec<AnyRateable> {
        vec![
            Gym::new(1, "Iron Temple").into(),
            Workout::new(1, "Leg Day").into(),
            Exercise::new(1, "Squat").into(),
        ]
    }

    #[test]
    fn add_rating_sets_back_reference() {
        for mut rateable in all_variants() {
            rateable.add_rating(Rating::new(10, 3.0, None, 1));
            let rating = &rateable.ratings()[0];
            assert_eq!(rating.id, 10);
            assert_eq!(rating.target, Some(rateable.rateable_ref()));
        }
    }

    #[test]
    fn remove_rating_clears_back_reference() {
        for mut rateable in all_variants() {
            rateable.add_rating(Rating::new(10, 3.0, None, 1));
            rateable.add_rating(Rating::new(11, 4.0, None, 2));

            let removed = rateable.remove_rating(10).expect("rating present");
            assert_eq!(removed.target, None);
            assert!(rateable.ratings().iter().all(|r| r.id != 10));
            assert_eq!(rateable.ratings().len(), 1);
        }
    }

    #[test]
    fn removing_unknown_rating_is_none() {
        let mut gym: AnyRateable = Gym::new(1, "Iron Temple").into();
        assert!(gym.remove_rating(99).is_none());
    }

    #[test]
    fn ratings_keep_insertion_order() {
        let mut workout = Workout::new(3, "Push");
        for (id, score) in [(5, 2.0), (2, 4.0), (9, 1.0)] {
            workout.add_rating(Rating::new(id, score, None, 1));
        }
        let ids: Vec<i32> = workout.ratings().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![5, 2, 9]);
    }

    #[test]
    fn format_average_stars_truncate() {
        assert_eq!(format_average(0.0), NOT_RATED_LABEL);
        assert_eq!(format_average(4.0), "4.0⭐⭐⭐⭐");
        assert_eq!(format_average(2.5), "2.5⭐⭐");
        assert_eq!(format_average(0.5), "0.5");
    }

    #[test]
    fn stars_follow_the_shown_value() {
        assert_eq!(format_average(4.95), "5.0⭐⭐⭐⭐⭐");
        assert_eq!(format_average(0.96), "1.0⭐");
        assert_eq!(format_average(2.94), "2.9⭐⭐");
        assert_eq!(format_average((2.0 + 2.6) / 2.0), "2.3⭐⭐");
    }

    #[test]
    fn kind_parses_plural_and_singular() {
        assert_eq!("Workouts".parse::<RateableKind>().unwrap(), RateableKind::Workout);
        assert_eq!("gym".parse::<RateableKind>().unwrap(), RateableKind::Gym);
        assert!("user".parse::<RateableKind>().is_err());
    }

    #[test]
    fn display_mentions_average() {
        let mut exercise = Exercise::new(4, "Deadlift");
        assert_eq!(exercise.to_string(), "Deadlift Not rated");
        exercise.add_rating(Rating::new(1, 5.0, None, 1));
        assert_eq!(exercise.to_string(), "Deadlift AVG rating 5.0/5.0");
    }
}
