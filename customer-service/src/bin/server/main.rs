use std::sync::Arc;
use std::time::Duration;

use auth::Authenticator;
use auth::PasswordHasher;
use chrono::Utc;
use customer_service::config::Config;
use customer_service::domain::customer::service::CustomerService;
use customer_service::domain::security::service::SecurityService;
use customer_service::inbound::http::router::create_router;
use customer_service::outbound::repositories::PostgresCustomerRepository;
use customer_service::outbound::repositories::PostgresTokenStore;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "customer_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "customer-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    if config.token.lifetime_minutes <= 0 {
        anyhow::bail!(
            "token.lifetime_minutes must be positive, got {}",
            config.token.lifetime_minutes
        );
    }

    tracing::info!(
        http_port = config.server.http_port,
        token_lifetime_minutes = config.token.lifetime_minutes,
        hasher_memory_kib = config.hasher.memory_kib,
        hasher_iterations = config.hasher.iterations,
        "Configuration loaded"
    );

    let pg_pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&config.database.url)
        .await?;
    tracing::info!(
        max_connections = 5,
        database = "postgresql",
        "Database connection pool created"
    );

    sqlx::migrate!("./migrations").run(&pg_pool).await?;
    tracing::info!(database = "postgresql", "Database migrations completed");

    let password_hasher = PasswordHasher::with_params((&config.hasher).into())?;
    let authenticator = Arc::new(Authenticator::with_hasher(password_hasher.clone()));

    let customer_repository = Arc::new(PostgresCustomerRepository::new(pg_pool.clone()));
    let token_store = Arc::new(PostgresTokenStore::new(pg_pool));

    let customer_service = Arc::new(CustomerService::new(
        Arc::clone(&customer_repository),
        password_hasher,
    ));
    let security_service = Arc::new(SecurityService::new(
        customer_repository,
        Arc::clone(&token_store),
        authenticator,
        config.token.lifetime(),
    ));

    if config.token.purge_interval_minutes > 0 {
        let period = Duration::from_secs(config.token.purge_interval_minutes * 60);
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            loop {
                interval.tick().await;
                match token_store.purge_expired(Utc::now()).await {
                    Ok(purged) => tracing::debug!(purged, "Expired tokens purged"),
                    Err(e) => tracing::warn!(error = %e, "Expired token purge failed"),
                }
            }
        });
    }

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    let http_application = create_router(customer_service, security_service);

    if let Err(e) = axum::serve(http_listener, http_application).await {
        tracing::error!(error = %e, "Server error");
        return Err(e.into());
    }

    tracing::info!("Server exited successfully");
    Ok(())
}
