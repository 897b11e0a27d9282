use sea_orm::DatabaseConnection;
use time::Duration;
use tower_sessions::{Expiry, SessionManagerLayer};
use tower_sessions_sqlx_store::SqliteStore;

use crate::server::{
    config::Config,
    data::user::UserRepository,
    error::AppError,
    seed::seed_catalog,
    service::admin::code::AdminCodeService,
};

/// Days of inactivity after which a session expires.
pub const SESSION_INACTIVITY_DAYS: i64 = 7;

/// Connects to the Sqlite database and runs pending migrations.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Creates the session layer backed by the application database.
///
/// The session table is created on first use.
///
/// # Returns
/// - `Ok(SessionManagerLayer)` - Layer to attach to the router
/// - `Err(AppError::SqlxErr)` - Failed to create the session table
pub async fn connect_to_session(
    db: &DatabaseConnection,
) -> Result<SessionManagerLayer<SqliteStore>, AppError> {
    let pool = db.get_sqlite_connection_pool();
    let session_store = SqliteStore::new(pool.clone());
    session_store.migrate().await?;

    Ok(SessionManagerLayer::new(session_store)
        .with_secure(false)
        .with_expiry(Expiry::OnInactivity(Duration::days(SESSION_INACTIVITY_DAYS))))
}

/// Issues a one-time admin code when no admin account exists yet.
///
/// The code is written to the log so the operator can register the first admin with it.
pub async fn check_for_admin(
    db: &DatabaseConnection,
    admin_code_service: &AdminCodeService,
) -> Result<(), AppError> {
    if UserRepository::new(db).admin_exists().await? {
        return Ok(());
    }

    let code = admin_code_service.generate().await;

    tracing::info!(
        "No admin account exists. Register with admin code {} within {} seconds to create one.",
        code,
        admin_code_service.ttl().as_secs()
    );

    Ok(())
}

/// Seeds the default catalog when enabled in configuration.
pub async fn seed_if_enabled(db: &DatabaseConnection, config: &Config) -> Result<(), AppError> {
    if config.seed_catalog {
        seed_catalog(db).await?;
    }

    Ok(())
}
