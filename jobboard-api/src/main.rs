use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::prelude::*;

use jobboard_api::config::{ApiConfig, CorsConfig};
use jobboard_api::database::seed;
use jobboard_api::{fixtures, handlers, helpers, JobSearch};

#[derive(Parser, Debug)]
#[command(author, version, about = "Job board search API", long_about = None)]
struct Args {
    #[arg(long, global = true)]
    log_file_path: Option<String>,

    /// Config file to use instead of the per-user one
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// SQLite database file, overrides the config
    #[arg(long, global = true)]
    db_path: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP server (default)
    Serve,
    /// Create or upgrade the database schema
    Migrate,
    /// Load the bundled job listings into the database
    Seed {
        /// Replace any jobs already stored
        #[arg(long)]
        force: bool,
    },
}

fn init_tracing(log_file_path: Option<&str>) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    if let Some(log_path) = log_file_path {
        let log_path = std::path::Path::new(log_path);
        let file_appender = tracing_appender::rolling::never(
            log_path.parent().unwrap_or(std::path::Path::new(".")),
            log_path
                .file_name()
                .unwrap_or(std::ffi::OsStr::new("jobboard-api.log")),
        );
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
        std::mem::forget(guard);

        tracing_subscriber::registry()
            .with(env_filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_ansi(true)
                    .with_writer(std::io::stdout),
            )
            .with(
                tracing_subscriber::fmt::layer()
                    .with_ansi(false)
                    .with_writer(non_blocking),
            )
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(env_filter).init();
    }
}

fn build_cors(cors_config: Option<&CorsConfig>) -> Cors {
    let cors = match cors_config {
        Some(cors_config) => {
            let mut cors_builder = Cors::default();
            for origin in &cors_config.allowed_origins {
                cors_builder = cors_builder.allowed_origin(origin);
            }
            cors_builder
        }
        None => Cors::default().allow_any_origin(),
    };

    cors.allowed_methods(vec!["GET", "OPTIONS"])
        .allowed_headers(vec!["Accept", "Content-Type"])
        .max_age(3600)
}

async fn serve(config: ApiConfig, db_path: Option<PathBuf>) -> anyhow::Result<()> {
    let repository = helpers::database::open_repository(&config.storage, db_path.as_deref())?;
    let search = JobSearch::new(repository, config.search);

    let server_config = config.server();
    let (host, port) = (server_config.host, server_config.port);
    tracing::info!(
        "Server will listen on {}:{} (storage: {})",
        host,
        port,
        search.backend_name()
    );

    let cors_config = config.cors.clone();
    let server = HttpServer::new(move || {
        App::new()
            .wrap(build_cors(cors_config.as_ref()))
            .wrap(Logger::default())
            .app_data(web::Data::new(search.clone()))
            .configure(handlers::configure)
    })
    .bind((host.as_str(), port))
    .with_context(|| format!("Failed to bind {}:{}", host, port))?
    .run();

    let handle = server.handle();
    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            return;
        }

        tracing::info!("Ctrl+C received, shutting down...");
        handle.stop(true).await;
    });

    server.await?;
    Ok(())
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing(args.log_file_path.as_deref());

    let (config, config_path) =
        ApiConfig::load(args.config.as_deref()).context("Failed to load config")?;
    tracing::info!("Loaded config from {}", config_path.display());

    match args.command.unwrap_or(Command::Serve) {
        Command::Serve => serve(config, args.db_path).await?,
        Command::Migrate => {
            let db_path =
                helpers::database::resolve_db_path(args.db_path.as_deref(), &config.storage)?;
            helpers::database::initialize_database(&db_path)?;
            tracing::info!("Migrations applied");
        }
        Command::Seed { force } => {
            let db_path =
                helpers::database::resolve_db_path(args.db_path.as_deref(), &config.storage)?;
            let db = helpers::database::initialize_database(&db_path)?;
            let fixture = fixtures::load_jobs()?;
            let inserted = seed::seed_jobs(db.async_connection.clone(), &fixture, force).await?;
            tracing::info!("Seed finished, {} jobs inserted", inserted);
        }
    }

    Ok(())
}
