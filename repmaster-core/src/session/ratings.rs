use log::warn;

use crate::db::operations;
use crate::error::{RepError, Result};
use crate::model::{AnyRateable, RateableRef, Rateable, Rating};
use crate::session::Session;

pub const MIN_SCORE: f64 = 0.0;
pub const MAX_SCORE: f64 = 5.0;

pub fn validate_score(score: f64) -> Result<()> {
    if score.is_finite() && (MIN_SCORE..=MAX_SCORE).contains(&score) {
        Ok(())
    } else {
        Err(RepError::Validation(format!(
            "score must be between {:.1} and {:.1}, got {}",
            MIN_SCORE, MAX_SCORE, score
        )))
    }
}

impl Session {
    /// Rates `target` as the logged-in user and returns it with the new
    /// rating attached.
    pub fn rate(
        &self,
        target: RateableRef,
        score: f64,
        comment: Option<&str>,
    ) -> Result<AnyRateable> {
        validate_score(score)?;
        let user = self.require_user()?;
        let mut conn = self.conn()?;

        let mut rateable = self.load_visible(&mut conn, target)?;
        let comment = comment.map(str::trim).filter(|c| !c.is_empty());
        let rating = operations::add_rating(&mut conn, target, user.id, score, comment)?;
        rateable.add_rating(rating);
        Ok(rateable)
    }

    /// Deletes one of the logged-in user's ratings on `target` and returns it
    /// detached.
    pub fn delete_rating(&self, target: RateableRef, rating_id: i32) -> Result<Rating> {
        let user = self.require_user()?;
        let mut conn = self.conn()?;

        let mut rateable = self.load_visible(&mut conn, target)?;
        let rating = rateable
            .ratings()
            .iter()
            .find(|r| r.id == rating_id)
            .ok_or_else(|| RepError::not_found("rating", rating_id))?;
        if !rating.is_authored_by(user.id) {
            warn!(
                "User #{} tried to delete rating #{} by user #{}",
                user.id, rating_id, rating.author_id
            );
            return Err(RepError::Unauthorized(format!(
                "rating #{} was written by someone else",
                rating_id
            )));
        }

        operations::delete_rating(&mut conn, rating_id)?;
        rateable
            .remove_rating(rating_id)
            .ok_or_else(|| RepError::not_found("rating", rating_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_bounds() {
        assert!(validate_score(0.0).is_ok());
        assert!(validate_score(5.0).is_ok());
        assert!(validate_score(5.1).is_err());
        assert!(validate_score(-0.5).is_err());
        assert!(validate_score(f64::NAN).is_err());
    }
}
