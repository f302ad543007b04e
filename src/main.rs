//! Users API binary.

use std::sync::Arc;

use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use users_api::adapters::{app_router, InMemoryUserRepository, PostgresUserRepository, UserHandlers};
use users_api::config::{AppConfig, DatabaseConfig, ServerConfig};
use users_api::ports::UserRepository;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load()?;
    config.validate()?;

    init_tracing(&config.server);

    let addr = config.server.socket_addr();
    info!(
        addr = %addr,
        environment = ?config.server.environment,
        min_age = config.registration.min_age,
        "Starting Users API"
    );

    let repository: Arc<dyn UserRepository> = match &config.database {
        Some(database) => Arc::new(connect(database).await?),
        None => {
            warn!("No database configured, records are kept in memory only");
            Arc::new(InMemoryUserRepository::new())
        }
    };

    let handlers = UserHandlers::from_repository(repository, config.registration.min_age);
    let app = app_router(handlers, &config.server);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Users API listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

fn init_tracing(server: &ServerConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&server.log_level));

    if server.is_production() {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}

async fn connect(database: &DatabaseConfig) -> anyhow::Result<PostgresUserRepository> {
    let pool = database.pool_options().connect(&database.url).await?;
    info!(
        url = %database.redacted_url(),
        min_connections = database.min_connections,
        max_connections = database.max_connections,
        "Connected to PostgreSQL"
    );

    if database.run_migrations {
        sqlx::migrate!("./migrations").run(&pool).await?;
        info!("Database migrations applied");
    }

    Ok(PostgresUserRepository::new(pool))
}
