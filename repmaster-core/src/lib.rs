pub mod config;
pub mod db;
pub mod error;
pub mod logging;
pub mod model;
pub mod relations;
pub mod seed;
pub mod session;

pub use error::{RepError, Result};
pub use session::Session;
