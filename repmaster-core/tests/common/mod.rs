#![allow(dead_code)]

use repmaster::Session;
use repmaster::db::{self, DbPool, MEMORY_DATABASE};

pub fn memory_pool() -> DbPool {
    db::connect(MEMORY_DATABASE).expect("in-memory database")
}

pub fn session() -> Session {
    Session::new(memory_pool())
}

/// A session logged in as a freshly registered `username`.
pub fn session_as(username: &str) -> Session {
    let mut session = session();
    session.register_user(username).expect("register user");
    session.log_in(username).expect("log in");
    session
}
