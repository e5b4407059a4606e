use diesel::r2d2::{ConnectionManager, PooledConnection};
use diesel::SqliteConnection;
use log::{info, warn};

use crate::config::Config;
use crate::db::{self, DbPool, operations};
use crate::error::{RepError, Result};
use crate::model::{AnyRateable, RateableKind, RateableRef, RegisteredUser, Workout};

pub type DbConn = PooledConnection<ConnectionManager<SqliteConnection>>;

pub struct Session {
    pub db_pool: DbPool,
    user: Option<RegisteredUser>,
}

impl Session {
    pub fn new(db_pool: DbPool) -> Self {
        Self {
            db_pool,
            user: None,
        }
    }

    /// Connects to the configured database and applies pending migrations.
    pub fn open(config: &Config) -> Result<Self> {
        let pool = db::connect(&config.database_url)?;
        Ok(Self::new(pool))
    }

    pub fn conn(&self) -> Result<DbConn> {
        Ok(self.db_pool.get()?)
    }

    pub fn is_logged_in(&self) -> bool {
        self.user.is_some()
    }

    /// The user as of log-in time. Use [`Session::current_user`] for fresh
    /// edge lists.
    pub fn logged_in_user(&self) -> Option<&RegisteredUser> {
        self.user.as_ref()
    }

    pub(crate) fn require_user(&self) -> Result<&RegisteredUser> {
        self.user.as_ref().ok_or(RepError::NotLoggedIn)
    }

    pub fn current_user(&self) -> Result<RegisteredUser> {
        let user_id = self.require_user()?.id;
        let mut conn = self.conn()?;
        operations::find_user(&mut conn, user_id)
    }

    pub fn register_user(&self, username: &str) -> Result<RegisteredUser> {
        let mut conn = self.conn()?;
        operations::create_user(&mut conn, username)
    }

    pub fn log_in(&mut self, username: &str) -> Result<&RegisteredUser> {
        let mut conn = self.conn()?;
        let user = operations::find_user_by_name(&mut conn, username).inspect_err(|e| {
            warn!("Log in as '{}' failed: {}", username, e);
        })?;
        info!("Logged in as {} (#{})", user.username, user.id);
        Ok(&*self.user.insert(user))
    }

    pub fn log_out(&mut self) {
        if let Some(user) = self.user.take() {
            info!("Logged out {}", user.username);
        }
    }

    /// Loads a rateable, hiding private workouts from everyone but their owner.
    pub fn find_rateable(&self, target: RateableRef) -> Result<AnyRateable> {
        let mut conn = self.conn()?;
        self.load_visible(&mut conn, target)
    }

    pub fn find_rateable_by_name(&self, kind: RateableKind, name: &str) -> Result<AnyRateable> {
        let mut conn = self.conn()?;
        let rateable: AnyRateable = match kind {
            RateableKind::Gym => operations::find_gym_by_name(&mut conn, name)?.into(),
            RateableKind::Workout => operations::find_workout_by_name(&mut conn, name)?.into(),
            RateableKind::Exercise => operations::find_exercise_by_name(&mut conn, name)?.into(),
        };
        if let AnyRateable::Workout(workout) = &rateable {
            if !self.can_view(workout) {
                return Err(RepError::not_found("workout", name));
            }
        }
        Ok(rateable)
    }

    pub fn list_rateables(&self, kind: RateableKind) -> Result<Vec<AnyRateable>> {
        let mut conn = self.conn()?;
        let all = operations::list_rateables(&mut conn, kind)?;
        Ok(all
            .into_iter()
            .filter(|r| match r {
                AnyRateable::Workout(w) => self.can_view(w),
                _ => true,
            })
            .collect())
    }

    /// Removes every row from every table.
    pub fn delete_all(&self) -> Result<()> {
        let mut conn = self.conn()?;
        db::clear_all_tables(&mut conn)
    }

    pub(crate) fn load_visible(
        &self,
        conn: &mut SqliteConnection,
        target: RateableRef,
    ) -> Result<AnyRateable> {
        let mut rateable = operations::load_rateable(conn, target)?;
        match &mut rateable {
            AnyRateable::Workout(workout) if !self.can_view(workout) => {
                return Err(RepError::not_found("workout", target.id));
            }
            AnyRateable::Gym(gym) => {
                gym.workout_ids = self.visible_workout_ids(conn, &gym.workout_ids)?;
            }
            _ => {}
        }
        Ok(rateable)
    }

    /// Drops the ids of workouts the current user may not see.
    pub(crate) fn visible_workout_ids(
        &self,
        conn: &mut SqliteConnection,
        workout_ids: &[i32],
    ) -> Result<Vec<i32>> {
        let mut visible = Vec::with_capacity(workout_ids.len());
        for id in workout_ids {
            if self.can_view(&operations::find_workout(conn, *id)?) {
                visible.push(*id);
            }
        }
        Ok(visible)
    }

    pub(crate) fn can_view(&self, workout: &Workout) -> bool {
        workout.is_visible_to(self.user.as_ref().map(|u| u.id))
    }
}
