mod browser;

use anyhow::{Result, bail};
use clap::{Parser, Subcommand};
use dotenvy::dotenv;
use log::{LevelFilter, info, warn};

use repmaster::Session;
use repmaster::config::Config;
use repmaster::logging;
use repmaster::model::{Rateable, RateableKind, RateableRef};
use repmaster::seed::seed_demo_data;

#[derive(Parser, Debug)]
#[command(version, about = "RepMaster - rate gyms, workouts and exercises", long_about = None)]
struct Args {
    /// SQLite database path, overrides DATABASE_URL
    #[arg(long, global = true)]
    database: Option<String>,

    /// Act as this user
    #[arg(short, long, global = true)]
    user: Option<String>,

    /// off, error, warn, info, debug, trace or directives like info,repmaster::db=debug
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Create the database and apply migrations
    Init,
    /// Fill an empty database with demo data
    Seed,
    /// Register a new user
    Register { username: String },
    /// List gyms, workouts or exercises
    List { kind: RateableKind },
    /// Show the detail page of one gym, workout or exercise
    Show {
        kind: RateableKind,
        id: i32,
        #[arg(long)]
        json: bool,
    },
    /// Rate a gym, workout or exercise (score 0.0 to 5.0)
    Rate {
        kind: RateableKind,
        id: i32,
        score: f64,
        #[arg(short, long)]
        comment: Option<String>,
    },
    /// Delete one of your own ratings
    DeleteRating {
        kind: RateableKind,
        id: i32,
        rating_id: i32,
    },
    /// Attach a rateable to one of your containers; lists them when no id is given
    Attach {
        kind: RateableKind,
        id: i32,
        container_id: Option<i32>,
    },
    /// Start using a workout
    UseWorkout { id: i32 },
    /// Interactive browser
    Browse {
        #[arg(short, long, default_value_t = RateableKind::Workout)]
        kind: RateableKind,
    },
}

fn open_session(config: &Config, user: Option<&str>) -> Result<Session> {
    let mut session = Session::open(config)?;
    if let Some(username) = user {
        session.log_in(username)?;
    }
    Ok(session)
}

fn main() -> Result<()> {
    dotenv().ok();
    let args = Args::parse();

    let config = Config::from_env()
        .with_database_url(args.database)
        .with_log_level(args.log_level);
    if !logging::set_log_level(&config.log_level) {
        logging::init_logger(LevelFilter::Info);
        warn!("Unknown log level {}, using info", config.log_level);
    }

    let user = args.user.as_deref();
    match args.command {
        Commands::Init => {
            Session::open(&config)?;
            println!("Database ready at {}", config.database_url);
        }
        Commands::Seed => {
            let session = open_session(&config, None)?;
            let mut conn = session.conn()?;
            let summary = seed_demo_data(&mut conn, &mut rand::rng())?;
            if summary.is_empty() {
                println!("Database already has data, nothing seeded");
            } else {
                println!(
                    "Seeded {} users, {} gyms, {} workouts, {} exercises and {} ratings",
                    summary.users,
                    summary.gyms,
                    summary.workouts,
                    summary.exercises,
                    summary.ratings
                );
            }
        }
        Commands::Register { username } => {
            let session = open_session(&config, None)?;
            let registered = session.register_user(&username)?;
            println!("Registered {} (#{})", registered.username, registered.id);
        }
        Commands::List { kind } => {
            let session = open_session(&config, user)?;
            let rateables = session.list_rateables(kind)?;
            if rateables.is_empty() {
                println!("No {}s found", kind);
            }
            for rateable in rateables {
                println!("{}, {}", rateable.rateable_ref().id, rateable);
            }
        }
        Commands::Show { kind, id, json } => {
            let session = open_session(&config, user)?;
            let page = session.detail(RateableRef::new(kind, id))?;
            if json {
                println!("{}", serde_json::to_string_pretty(&page)?);
                return Ok(());
            }
            println!("{}", page.title);
            for detail in &page.details {
                println!("  {}{}", detail.feature, detail.data);
            }
            if !page.ratings.is_empty() {
                println!("Ratings:");
            }
            for rating in &page.ratings {
                let mine = if page.can_delete(rating) { " (yours)" } else { "" };
                println!(
                    "  #{} {:.1}/5.0 {}{}",
                    rating.id,
                    rating.score,
                    rating.comment.as_deref().unwrap_or(""),
                    mine
                );
            }
        }
        Commands::Rate {
            kind,
            id,
            score,
            comment,
        } => {
            let session = open_session(&config, user)?;
            let rated = session.rate(RateableRef::new(kind, id), score, comment.as_deref())?;
            println!("{}", rated);
        }
        Commands::DeleteRating {
            kind,
            id,
            rating_id,
        } => {
            let session = open_session(&config, user)?;
            let removed = session.delete_rating(RateableRef::new(kind, id), rating_id)?;
            println!("Deleted rating #{} ({:.1}/5.0)", removed.id, removed.score);
        }
        Commands::Attach {
            kind,
            id,
            container_id,
        } => {
            let session = open_session(&config, user)?;
            let target = RateableRef::new(kind, id);
            let Some(container_id) = container_id else {
                let page = session.detail(target)?;
                if page.containers.is_empty() {
                    bail!("No containers available for {}", target);
                }
                for option in page.containers {
                    println!("{} {}, {}", option.kind, option.id, option.name);
                }
                return Ok(());
            };
            if session.add_to_container(target, container_id)? {
                info!("Attached {} to #{}", target, container_id);
                println!("Attached {}", target);
            } else {
                println!("{} was already attached", target);
            }
        }
        Commands::UseWorkout { id } => {
            let session = open_session(&config, user)?;
            if session.use_workout(id)? {
                println!("Now using workout #{}", id);
            } else {
                println!("Already using workout #{}", id);
            }
        }
        Commands::Browse { kind } => {
            let session = open_session(&config, user)?;
            let terminal = ratatui::init();
            let result = browser::run(terminal, &session, kind);
            ratatui::restore();
            result?;
        }
    }
    Ok(())
}
