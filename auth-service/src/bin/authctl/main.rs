use std::env;
use std::sync::Arc;

use anyhow::Context;
use auth_service::auth::AuthService;
use auth_service::auth::AuthServicePort;
use auth_service::auth::Username;
use auth_service::config::Config;
use auth_service::directory::PostgresUserDirectory;
use sqlx::postgres::PgPoolOptions;
use token::SecretKey;
use token::TokenSigner;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Operational round-trip check: issue a token for the given username with a
/// freshly generated process key, then validate it back through the user
/// directory. Exercises the full issue/validate path against live
/// infrastructure without any HTTP transport.
#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "auth_service=debug,authctl=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let username = env::args().nth(1).context("usage: authctl <username>")?;
    let username = Username::new(username)?;

    let config = Config::load()?;
    tracing::info!(
        database_url = %config.database.url,
        max_age_hours = config.token.max_age_hours,
        slew_minutes = config.token.slew_minutes,
        "Configuration loaded"
    );

    let pg_pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&config.database.url)
        .await?;
    sqlx::migrate!("./migrations").run(&pg_pool).await?;
    tracing::info!(database = "postgresql", "Database ready");

    let signer = TokenSigner::with_window(SecretKey::generate(), config.token.window());
    let directory = Arc::new(PostgresUserDirectory::new(pg_pool));
    let service = AuthService::new(directory, signer);

    let encoded = service.issue_token(&username).await?;
    println!("{encoded}");

    match service.validate_token(&encoded).await? {
        Some(identity) => tracing::info!(
            user_id = %identity.user.id,
            username = %identity.user.username,
            issued_at = %identity.issued_at,
            "Token validated"
        ),
        None => tracing::warn!(
            username = %username,
            "Token did not validate; user missing or disabled in the directory"
        ),
    }

    Ok(())
}
