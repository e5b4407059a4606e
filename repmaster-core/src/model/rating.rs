use std::hash::{Hash, Hasher};

use chrono::{NaiveDateTime, Utc};
use serde::Serialize;

use super::RateableRef;

/// A single score left by a user on a gym, workout or exercise.
///
/// `target` is the back-reference to the rated entity. It is set by
/// [`super::Rateable::add_rating`] and cleared by
/// [`super::Rateable::remove_rating`]; do not assign it by hand.
#[derive(Debug, Clone, Serialize)]
pub struct Rating {
    pub id: i32,
    pub score: f64,
    pub comment: Option<String>,
    pub target: Option<RateableRef>,
    pub author_id: i32,
    pub created_at: NaiveDateTime,
}

impl Rating {
    pub fn new(id: i32, score: f64, comment: Option<String>, author_id: i32) -> Self {
        Self {
            id,
            score,
            comment,
            target: None,
            author_id,
            created_at: Utc::now().naive_utc(),
        }
    }

    pub fn is_authored_by(&self, user_id: i32) -> bool {
        self.author_id == user_id
    }
}

impl PartialEq for Rating {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Rating {}

impl Hash for Rating {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// Arithmetic mean of the scores, `0.0` when there are none.
pub fn average_rating(ratings: &[Rating]) -> f64 {
    if ratings.is_empty() {
        return 0.0;
    }
    ratings.iter().map(|r| r.score).sum::<f64>() / ratings.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn average_of_nothing_is_zero() {
        assert_eq!(average_rating(&[]), 0.0);
    }

    #[test]
    fn average_is_the_mean() {
        let ratings = vec![Rating::new(1, 3.0, None, 1), Rating::new(2, 5.0, None, 2)];
        assert_eq!(average_rating(&ratings), 4.0);
    }

    #[test]
    fn equality_ignores_everything_but_id() {
        let a = Rating::new(7, 1.0, Some("meh".to_string()), 1);
        let b = Rating::new(7, 5.0, None, 2);
        assert_eq!(a, b);
        assert_ne!(a, Rating::new(8, 1.0, Some("meh".to_string()), 1));
    }
}
