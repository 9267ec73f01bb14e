//! Westeros Migrate Entry Point
//!
//! Reads the raw graph from the source Neo4j database and rebuilds it in the
//! target database.

use dotenv::dotenv;
use std::env;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use westeros_migrate::{pipeline, EdgeCounts, MigrateError, MigrationConfig};
use westeros_migrate_shared::{EdgeKind, EntityKind};

/// Initialize tracing/logging.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new("westeros_migrate=info,westeros_migrate_repository=info")
    });

    let json = env::var("LOG_FORMAT")
        .map(|format| format.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json().with_target(true))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_target(true).pretty())
            .init();
    }

    info!(
        service_name = "westeros-migrate",
        service_version = env!("CARGO_PKG_VERSION"),
        json,
        "Tracing initialized"
    );
}

#[tokio::main]
async fn main() -> Result<(), MigrateError> {
    // Load environment variables from .env file
    dotenv().ok();

    init_tracing();

    let config = match MigrationConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "Invalid configuration");
            return Err(e);
        }
    };

    info!(
        source = %config.source.location(),
        target = %config.target.location(),
        schema_path = ?config.schema_path,
        max_attempts = config.retry.max_attempts,
        "Starting migration"
    );

    match pipeline::run(&config).await {
        Ok(report) => {
            for kind in EntityKind::ALL {
                info!(kind = %kind, created = report.entities_created(kind), "Entities");
            }
            for kind in EdgeKind::ALL {
                let EdgeCounts { created, skipped } = report.edges(kind);
                info!(kind = %kind, created, skipped, "Edges");
            }
            info!(
                elapsed_secs = report.elapsed.as_secs_f64(),
                "Migration completed successfully"
            );
            Ok(())
        }
        Err(e) => {
            error!(error = %e, "Migration failed");
            Err(e)
        }
    }
}
