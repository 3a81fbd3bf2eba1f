pub mod entities;
mod roast_repository;
mod stack_repository;
mod vote_repository;

pub use roast_repository::RoastRepository;
pub use stack_repository::StackRepository;
pub use vote_repository::VoteRepository;

use entities::{roast, vote, Roast, Stack, Vote};
use sea_orm::sea_query::Index;
use sea_orm::{
    ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbErr, Schema, SqlErr,
};
use stack_roast_errors::AppError;
use std::time::Duration;

// Long enough that the pool never recycles the connection.
const IN_MEMORY_KEEP_ALIVE: Duration = Duration::from_secs(365 * 24 * 60 * 60);

pub async fn create_connection(
    database_url: &str,
    max_connections: u32,
) -> Result<DatabaseConnection, DbErr> {
    Database::connect(connect_options(database_url, max_connections)).await
}

fn connect_options(database_url: &str, max_connections: u32) -> ConnectOptions {
    let mut opt = ConnectOptions::new(database_url);
    opt.min_connections(1)
        .connect_timeout(Duration::from_secs(10))
        .acquire_timeout(Duration::from_secs(10))
        .sqlx_logging(false);

    // Every connection to an in-memory SQLite database opens a fresh, empty database,
    // so the pool holds exactly one and never replaces it.
    if database_url.contains(":memory:") {
        opt.max_connections(1)
            .idle_timeout(IN_MEMORY_KEEP_ALIVE)
            .max_lifetime(IN_MEMORY_KEEP_ALIVE);
    } else {
        opt.max_connections(max_connections.max(1))
            .idle_timeout(Duration::from_secs(600));
    }
    opt
}

/// Creates the tables and indexes if they do not exist yet.
pub async fn run_migrations(db: &DatabaseConnection) -> Result<(), DbErr> {
    let backend = db.get_database_backend();
    let schema = Schema::new(backend);

    let tables = [
        schema.create_table_from_entity(Stack).if_not_exists().to_owned(),
        schema.create_table_from_entity(Roast).if_not_exists().to_owned(),
        schema.create_table_from_entity(Vote).if_not_exists().to_owned(),
    ];
    for table in &tables {
        db.execute(backend.build(table)).await?;
    }

    let indexes = [
        Index::create()
            .name("idx_roasts_stack_id")
            .table(Roast)
            .col(roast::Column::StackId)
            .if_not_exists()
            .to_owned(),
        // One vote per voter per roast; concurrent duplicates fail on insert.
        Index::create()
            .name("idx_votes_roast_voter")
            .table(Vote)
            .col(vote::Column::RoastId)
            .col(vote::Column::VoterIp)
            .unique()
            .if_not_exists()
            .to_owned(),
    ];
    for index in &indexes {
        db.execute(backend.build(index)).await?;
    }

    tracing::info!("Database schema is up to date");
    Ok(())
}

pub async fn connect_and_migrate(
    database_url: &str,
    max_connections: u32,
) -> Result<DatabaseConnection, DbErr> {
    let db = create_connection(database_url, max_connections).await?;
    run_migrations(&db).await?;
    Ok(db)
}

pub fn db_error(err: DbErr) -> AppError {
    tracing::error!("Database error: {}", err);
    AppError::Database(err.to_string())
}

pub fn is_unique_violation(err: &DbErr) -> bool {
    matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
}

#[cfg(test)]
pub(crate) async fn test_connection() -> DatabaseConnection {
    connect_and_migrate("sqlite::memory:", 1)
        .await
        .expect("in-memory database")
}
