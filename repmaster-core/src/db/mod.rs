pub mod models;
pub mod operations;
pub mod schema;

use diesel::connection::SimpleConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, CustomizeConnection, Pool};
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use log::{debug, info};

use crate::error::{RepError, Result};

pub type DbPool = Pool<ConnectionManager<SqliteConnection>>;

pub const MEMORY_DATABASE: &str = ":memory:";

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("../migrations");

#[derive(Debug)]
struct ConnectionOptions {
    wal: bool,
}

impl CustomizeConnection<SqliteConnection, diesel::r2d2::Error> for ConnectionOptions {
    fn on_acquire(&self, conn: &mut SqliteConnection) -> std::result::Result<(), diesel::r2d2::Error> {
        let mut pragmas = String::from("PRAGMA foreign_keys = ON; PRAGMA busy_timeout = 5000;");
        if self.wal {
            pragmas.push_str(" PRAGMA journal_mode = WAL; PRAGMA synchronous = NORMAL;");
        }
        conn.batch_execute(&pragmas)
            .map_err(diesel::r2d2::Error::QueryError)
    }
}

/// Builds a connection pool. An in-memory database gets exactly one
/// connection that is never recycled, otherwise every checkout would see a
/// fresh empty database.
pub fn create_pool(database_url: &str) -> Result<DbPool> {
    let in_memory = database_url == MEMORY_DATABASE;
    let manager = ConnectionManager::<SqliteConnection>::new(database_url);
    let builder = Pool::builder().connection_customizer(Box::new(ConnectionOptions {
        wal: !in_memory,
    }));
    let builder = if in_memory {
        builder.max_size(1).idle_timeout(None).max_lifetime(None)
    } else {
        builder.max_size(8)
    };
    debug!("Opening database pool for {}", database_url);
    Ok(builder.build(manager)?)
}

pub fn init_database(conn: &mut SqliteConnection) -> Result<()> {
    let applied = conn
        .run_pending_migrations(MIGRATIONS)
        .map_err(|e| RepError::Migration(e.to_string()))?;

    if applied.is_empty() {
        debug!("Database schema is up to date");
    }
    for version in applied {
        info!("Migration {} applied successfully", version);
    }
    Ok(())
}

/// Opens the pool and brings the schema up to date.
pub fn connect(database_url: &str) -> Result<DbPool> {
    let pool = create_pool(database_url)?;
    let mut conn = pool.get()?;
    init_database(&mut conn)?;
    Ok(pool)
}

pub fn clear_all_tables(conn: &mut SqliteConnection) -> Result<()> {
    use schema::*;

    conn.transaction::<_, RepError, _>(|conn| {
        diesel::delete(ratings::table).execute(conn)?;
        diesel::delete(workout_muscle_groups::table).execute(conn)?;
        diesel::delete(workout_exercises::table).execute(conn)?;
        diesel::delete(gym_workouts::table).execute(conn)?;
        diesel::delete(user_workouts::table).execute(conn)?;
        diesel::delete(user_gyms::table).execute(conn)?;
        diesel::delete(exercises::table).execute(conn)?;
        diesel::delete(workouts::table).execute(conn)?;
        diesel::delete(gyms::table).execute(conn)?;
        diesel::delete(users::table).execute(conn)?;
        Ok(())
    })?;
    info!("Cleared all tables");
    Ok(())
}
