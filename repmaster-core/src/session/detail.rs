use serde::Serialize;

use crate::error::Result;
use crate::model::{Detail, RateableRef, Rateable, Rating};
use crate::session::Session;
use crate::session::containers::{ContainerOption, possible_containers_for};

/// Everything a view needs to render one rateable.
#[derive(Debug, Clone, Serialize)]
pub struct DetailPage {
    pub target: RateableRef,
    pub title: String,
    pub details: Vec<Detail>,
    pub ratings: Vec<Rating>,
    pub logged_in_user_id: Option<i32>,
    /// `false` when the only option offered is attaching to the user.
    pub has_fixed_containers: bool,
    /// Empty when nobody is logged in.
    pub containers: Vec<ContainerOption>,
}

impl DetailPage {
    pub fn can_delete(&self, rating: &Rating) -> bool {
        self.logged_in_user_id
            .is_some_and(|user_id| rating.is_authored_by(user_id))
    }
}

impl Session {
    pub fn detail(&self, target: RateableRef) -> Result<DetailPage> {
        let mut conn = self.conn()?;
        let rateable = self.load_visible(&mut conn, target)?;

        let (has_fixed_containers, containers) = match self.logged_in_user() {
            Some(user) => match possible_containers_for(&mut conn, target.kind, user.id)? {
                Some(options) => (true, options),
                None => (false, vec![ContainerOption::myself(user)]),
            },
            None => (false, Vec::new()),
        };

        Ok(DetailPage {
            target,
            title: rateable.to_string(),
            details: rateable.details(),
            ratings: rateable.ratings().to_vec(),
            logged_in_user_id: self.logged_in_user().map(|u| u.id),
            has_fixed_containers,
            containers,
        })
    }
}
