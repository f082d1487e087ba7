use anyhow::Context;
use persistence::db::{DatabaseConfig, create_postgres_pool, run_migrations};
use sqlx::PgPool;
use std::env;

const DEFAULT_MIGRATIONS_PATH: &str = "infrastructure/persistence/migrations";

/// Initialize database connection pool from environment variables
///
/// Environment variables:
/// - DATABASE_URL: PostgreSQL connection string (required)
/// - DATABASE_MAX_CONNECTIONS: Pool size (default: 5)
/// - RUN_MIGRATIONS: "true" to apply migrations on start-up (default: false)
/// - MIGRATIONS_PATH: Migrations directory (default: "infrastructure/persistence/migrations")
///
/// # Errors
/// Returns error if DATABASE_URL is not set, the connection fails or a
/// requested migration run fails
pub async fn init_database() -> anyhow::Result<PgPool> {
    let db_url = env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

    let mut config = DatabaseConfig::new(db_url);
    if let Some(max_connections) = parse_max_connections(env::var("DATABASE_MAX_CONNECTIONS").ok())? {
        config = config.with_max_connections(max_connections);
    }

    let pool = create_postgres_pool(&config).await?;

    if migrations_enabled(env::var("RUN_MIGRATIONS").ok().as_deref()) {
        let path =
            env::var("MIGRATIONS_PATH").unwrap_or_else(|_| DEFAULT_MIGRATIONS_PATH.to_string());
        run_migrations(&pool, &path).await?;
        tracing::info!("Applied migrations from {}", path);
    }

    Ok(pool)
}

fn parse_max_connections(raw: Option<String>) -> anyhow::Result<Option<u32>> {
    raw.map(|value| {
        value
            .trim()
            .parse::<u32>()
            .with_context(|| format!("DATABASE_MAX_CONNECTIONS is not a number: {}", value))
    })
    .transpose()
}

fn migrations_enabled(raw: Option<&str>) -> bool {
    matches!(raw.map(str::trim), Some("true") | Some("1"))
}
