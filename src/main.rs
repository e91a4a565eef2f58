//! My First App - stream gage map web application
//!
//! Serves the map, echo-name and home pages together with a small GeoJSON
//! API. The command line also offers store initialisation and user creation.

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::info;

use config::LogFormat;
use my_first_app::{
    config, create_router,
    db::{self, GageRepository},
    middleware::rate_limit::spawn_rate_limit_cleanup,
    services::AuthService,
    utils::validation::validate_username,
    AppConfig, AppState,
};

fn main() -> Result<()> {
    // Parse command line arguments
    let args: Vec<String> = env::args().collect();

    // Check for --help flag
    if args.iter().any(|arg| arg == "--help" || arg == "-h") {
        print_help();
        return Ok(());
    }

    // Check for --version flag
    if args.iter().any(|arg| arg == "--version" || arg == "-V") {
        println!("My First App {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    if let Some(pos) = args.iter().position(|arg| arg == "--init-config") {
        let path = args
            .get(pos + 1)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("config.yaml"));
        if path.exists() {
            anyhow::bail!("Refusing to overwrite existing {}", path.display());
        }
        AppConfig::create_default_config(&path)?;
        println!("Wrote default configuration to {}", path.display());
        return Ok(());
    }

    // Load configuration first (before logging, so we know log format)
    let config = AppConfig::load().context("Failed to load configuration")?;

    // The guard must be kept alive for the duration of the program
    // to ensure log messages are flushed to files
    let _log_guard = init_logging(&config);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(config.server.workers)
        .enable_all()
        .build()
        .context("Failed to build tokio runtime")?;

    if args.iter().any(|arg| arg == "--init-store") {
        return runtime.block_on(init_store(&config));
    }

    if let Some(pos) = args.iter().position(|arg| arg == "--create-user") {
        let values = &args[pos + 1..];
        if values.len() < 3 {
            anyhow::bail!("Usage: my-first-app --create-user <username> <email> <password>");
        }
        return runtime.block_on(create_user(&config, &values[0], &values[1], &values[2]));
    }

    runtime.block_on(serve(config))
}

/// Run the HTTP server until it exits
async fn serve(config: AppConfig) -> Result<()> {
    info!("My First App starting up");
    info!("Configuration loaded successfully");

    ensure_data_directory(&config)?;

    info!("Initializing database connection");
    let db = db::init_pool(&config.database)
        .await
        .context("Failed to initialize database")?;

    if config.app.seed_gages {
        let inserted = GageRepository::new(&db)
            .seed_defaults()
            .await
            .context("Failed to seed stream gages")?;
        if inserted > 0 {
            info!("Seeded {} stream gages", inserted);
        }
    }

    let state = AppState::new(config.clone(), db);
    spawn_rate_limit_cleanup(state.login_rate_limit.clone());

    let app = create_router(state);

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port)
        .parse()
        .context("Invalid server address configuration")?;

    info!("Starting HTTP server on http://{}{}", addr, config.app.page(""));

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind to address")?;

    info!("HTTP server is ready to accept connections");

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    .context("HTTP server error")?;

    Ok(())
}

/// Create the store, apply migrations and seed the default gages
async fn init_store(config: &AppConfig) -> Result<()> {
    ensure_data_directory(config)?;

    let pool = db::create_persistent_store(&config.database, true)
        .await
        .context("Failed to initialize persistent store")?;
    let count = GageRepository::new(&pool).count().await?;
    pool.close().await;

    println!("Persistent store ready: {}", config.database.url);
    println!("Stream gages: {}", count);
    Ok(())
}

/// Create a login account from the command line
async fn create_user(config: &AppConfig, username: &str, email: &str, password: &str) -> Result<()> {
    if !validate_username(username) {
        anyhow::bail!("Invalid username: {}", username);
    }
    if password.chars().count() < config.auth.password_min_length {
        anyhow::bail!(
            "Password must be at least {} characters",
            config.auth.password_min_length
        );
    }

    ensure_data_directory(config)?;
    let pool = db::init_pool(&config.database)
        .await
        .context("Failed to initialize database")?;

    let user = AuthService::new(pool.clone())
        .create_user(username, email, password)
        .await?;
    pool.close().await;

    info!(username = %user.username, "User created");
    println!("Created user {} ({})", user.username, user.id);
    Ok(())
}

/// Initialize the logging/tracing infrastructure
fn init_logging(config: &AppConfig) -> Option<tracing_appender::non_blocking::WorkerGuard> {
    use config::LogTarget;
    use tracing_subscriber::{prelude::*, EnvFilter};

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    let log_config = &config.logging;

    match &log_config.target {
        LogTarget::Console => {
            let subscriber = tracing_subscriber::registry().with(env_filter);
            init_console_logging(subscriber, &log_config.format);
            None
        }
        LogTarget::File => {
            let (writer, guard) = create_file_writer(log_config);
            let subscriber = tracing_subscriber::registry().with(env_filter);
            init_file_logging(subscriber, &log_config.format, writer);
            Some(guard)
        }
        LogTarget::Both => {
            let (writer, guard) = create_file_writer(log_config);
            let subscriber = tracing_subscriber::registry().with(env_filter);
            init_both_logging(subscriber, &log_config.format, writer);
            Some(guard)
        }
    }
}

/// Create a file writer with optional daily rotation
fn create_file_writer(
    log_config: &config::LoggingConfig,
) -> (
    tracing_appender::non_blocking::NonBlocking,
    tracing_appender::non_blocking::WorkerGuard,
) {
    if let Err(e) = std::fs::create_dir_all(&log_config.log_dir) {
        eprintln!(
            "Warning: Failed to create log directory {:?}: {}",
            log_config.log_dir, e
        );
    }

    let file_appender = if log_config.daily_rotation {
        tracing_appender::rolling::daily(&log_config.log_dir, &log_config.log_prefix)
    } else {
        tracing_appender::rolling::never(&log_config.log_dir, &log_config.log_prefix)
    };

    tracing_appender::non_blocking(file_appender)
}

/// Initialize console-only logging
fn init_console_logging<S>(subscriber: S, format: &LogFormat)
where
    S: tracing::Subscriber + for<'a> tracing_subscriber::registry::LookupSpan<'a> + Send + Sync,
{
    use tracing_subscriber::{fmt, prelude::*};

    match format {
        LogFormat::Json => {
            subscriber
                .with(fmt::layer().json().with_target(true))
                .init();
        }
        LogFormat::Compact => {
            subscriber
                .with(fmt::layer().compact().with_target(false))
                .init();
        }
        LogFormat::Pretty => {
            subscriber
                .with(fmt::layer().with_target(true).with_thread_ids(false))
                .init();
        }
    }
}

/// Initialize file-only logging
fn init_file_logging<S>(
    subscriber: S,
    format: &LogFormat,
    writer: tracing_appender::non_blocking::NonBlocking,
) where
    S: tracing::Subscriber + for<'a> tracing_subscriber::registry::LookupSpan<'a> + Send + Sync,
{
    use tracing_subscriber::{fmt, prelude::*};

    match format {
        LogFormat::Json => {
            subscriber
                .with(fmt::layer().json().with_target(true).with_writer(writer))
                .init();
        }
        LogFormat::Compact => {
            subscriber
                .with(fmt::layer().compact().with_target(false).with_writer(writer))
                .init();
        }
        LogFormat::Pretty => {
            subscriber
                .with(
                    fmt::layer()
                        .with_target(true)
                        .with_ansi(false)
                        .with_writer(writer),
                )
                .init();
        }
    }
}

/// Initialize both console and file logging
fn init_both_logging<S>(
    subscriber: S,
    format: &LogFormat,
    writer: tracing_appender::non_blocking::NonBlocking,
) where
    S: tracing::Subscriber + for<'a> tracing_subscriber::registry::LookupSpan<'a> + Send + Sync,
{
    use tracing_subscriber::{fmt, prelude::*};

    match format {
        LogFormat::Json => {
            subscriber
                .with(fmt::layer().json().with_target(true)) // Console
                .with(fmt::layer().json().with_target(true).with_writer(writer)) // File
                .init();
        }
        LogFormat::Compact => {
            subscriber
                .with(fmt::layer().compact().with_target(false)) // Console
                .with(fmt::layer().compact().with_target(false).with_writer(writer)) // File
                .init();
        }
        LogFormat::Pretty => {
            subscriber
                .with(fmt::layer().with_target(true)) // Console
                .with(
                    fmt::layer()
                        .with_target(true)
                        .with_ansi(false)
                        .with_writer(writer),
                ) // File
                .init();
        }
    }
}

/// Ensure the directory holding the SQLite database exists
fn ensure_data_directory(config: &AppConfig) -> Result<()> {
    if let Some(path) = db::sqlite_file_path(&config.database.url) {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent).context("Failed to create data directory")?;
                info!("Created data directory: {:?}", parent);
            }
        }
    }
    Ok(())
}

/// Print help message
fn print_help() {
    println!(
        r#"My First App {}

USAGE:
    my-first-app [OPTIONS]

OPTIONS:
    -h, --help              Print this help message
    -V, --version           Print version information
    --init-config [PATH]    Write the default configuration (config.yaml unless
                            PATH is given), then exit.
    --init-store            Create the persistent store, apply migrations and
                            seed the default stream gages, then exit.
    --create-user <USERNAME> <EMAIL> <PASSWORD>
                            Create a login account, then exit.

ENVIRONMENT:
    MY_FIRST_APP_CONFIG       Path to configuration file (default: config.yaml)
    MY_FIRST_APP_HOST         Listen address
    MY_FIRST_APP_PORT         Listen port
    MY_FIRST_APP_ROOT_URL     Path the application pages are mounted under
    MY_FIRST_APP_LOG_FORMAT   Log format (pretty, json, compact)
    DATABASE_URL              SQLite database URL
    JWT_SECRET                Session signing secret (at least 32 characters)
    RUST_LOG                  Log filter

CONFIGURATION:
    The application looks for configuration files in the following order:
    1. Path specified by MY_FIRST_APP_CONFIG environment variable
    2. ./config.yaml
    3. ./config/config.yaml
    4. /etc/my-first-app/config.yaml
    5. <user config dir>/my-first-app/config.yaml"#,
        env!("CARGO_PKG_VERSION")
    );
}
