//! Which containers a rateable can be attached to, and attaching it.
//!
//! Gyms go on the user's own profile, workouts go into one of the user's
//! gyms, exercises go into one of the user's workouts.

use std::fmt;

use diesel::SqliteConnection;
use log::{info, warn};
use serde::Serialize;

use crate::db::operations;
use crate::error::{RepError, Result};
use crate::model::{RateableKind, RateableRef, RegisteredUser};
use crate::session::Session;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ContainerKind {
    User,
    Gym,
    Workout,
}

impl ContainerKind {
    pub fn for_target(kind: RateableKind) -> Self {
        match kind {
            RateableKind::Gym => ContainerKind::User,
            RateableKind::Workout => ContainerKind::Gym,
            RateableKind::Exercise => ContainerKind::Workout,
        }
    }
}

impl fmt::Display for ContainerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContainerKind::User => write!(f, "user"),
            ContainerKind::Gym => write!(f, "gym"),
            ContainerKind::Workout => write!(f, "workout"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContainerOption {
    pub kind: ContainerKind,
    pub id: i32,
    pub name: String,
}

impl ContainerOption {
    pub fn myself(user: &RegisteredUser) -> Self {
        Self {
            kind: ContainerKind::User,
            id: user.id,
            name: user.username.clone(),
        }
    }
}

impl Session {
    /// Containers the logged-in user may attach a `kind` to.
    ///
    /// `None` means there is no fixed set and the only choice is the user.
    pub fn possible_containers(&self, kind: RateableKind) -> Result<Option<Vec<ContainerOption>>> {
        let user = self.require_user()?;
        let mut conn = self.conn()?;
        possible_containers_for(&mut conn, kind, user.id)
    }

    /// Attaches `target` to the container with `container_id`. Returns
    /// `false` when it was already attached.
    pub fn add_to_container(&self, target: RateableRef, container_id: i32) -> Result<bool> {
        let user = self.require_user()?;
        let mut conn = self.conn()?;
        self.load_visible(&mut conn, target)?;

        let options = possible_containers_for(&mut conn, target.kind, user.id)?;
        let allowed = match &options {
            None => container_id == user.id,
            Some(list) => list.iter().any(|c| c.id == container_id),
        };
        let container_kind = ContainerKind::for_target(target.kind);
        if !allowed {
            warn!(
                "User #{} tried to attach {} to foreign {} #{}",
                user.id, target, container_kind, container_id
            );
            return Err(RepError::Unauthorized(format!(
                "{} #{} is not one of your {}s",
                container_kind, container_id, container_kind
            )));
        }

        let linked = match target.kind {
            RateableKind::Gym => operations::link_user_gym(&mut conn, user.id, target.id)?,
            RateableKind::Workout => {
                operations::link_gym_workout(&mut conn, container_id, target.id)?
            }
            RateableKind::Exercise => {
                operations::link_workout_exercise(&mut conn, container_id, target.id)?
            }
        };
        if linked {
            info!("Attached {} to {} #{}", target, container_kind, container_id);
        }
        Ok(linked)
    }
}

pub(crate) fn possible_containers_for(
    conn: &mut SqliteConnection,
    kind: RateableKind,
    user_id: i32,
) -> Result<Option<Vec<ContainerOption>>> {
    let options = match kind {
        RateableKind::Gym => return Ok(None),
        RateableKind::Workout => operations::gyms_for_user(conn, user_id)?
            .into_iter()
            .map(|g| ContainerOption {
                kind: ContainerKind::Gym,
                id: g.id,
                name: g.name,
            })
            .collect(),
        RateableKind::Exercise => operations::workouts_for_user(conn, user_id)?
            .into_iter()
            .map(|w| ContainerOption {
                kind: ContainerKind::Workout,
                id: w.id,
                name: w.name,
            })
            .collect(),
    };
    Ok(Some(options))
}
