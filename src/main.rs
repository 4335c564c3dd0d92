use event_portal::config::{init_db, run_migrations, Config};
use event_portal::modules::auth::model::Role;
use event_portal::services::{jwt::JwtService, metrics::MetricsRegistry};
use event_portal::store::Store;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "event_portal=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    if let Err(e) = run().await {
        tracing::error!(error = %e, "fatal error");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), BoxError> {
    // Configuration is read once; a missing JWT_SECRET stops startup here.
    let config = Config::from_env()?;

    let db = init_db(&config.database_url, config.db_max_connections).await?;
    tracing::info!("Connected to MySQL");

    if config.run_migrations {
        run_migrations(&db).await?;
        tracing::info!("Migrations applied");
    }

    let store = Store::mysql(db);

    // `event-portal promote-admin <email>` grants the admin role out of band.
    let args: Vec<String> = std::env::args().skip(1).collect();
    if let [command, email] = args.as_slice() {
        if command == "promote-admin" {
            return promote_admin(&store, email).await;
        }
    }
    if !args.is_empty() {
        return Err("usage: event-portal [promote-admin <email>]".into());
    }

    let jwt_service = JwtService::new(&config.jwt_secret);
    let metrics = MetricsRegistry::new()?;

    let app = event_portal::create_app(store, jwt_service, metrics, config.http);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;
    tracing::info!("Server running on http://localhost:{}", config.port);
    axum::serve(listener, app).await?;

    Ok(())
}

async fn promote_admin(store: &Store, email: &str) -> Result<(), BoxError> {
    if !store.users.set_role(email, Role::Admin).await? {
        return Err(format!("no user with email {email}").into());
    }
    tracing::info!(email = %email, "user promoted to admin");
    Ok(())
}
