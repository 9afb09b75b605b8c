use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use adboard_seed::loader::{self, SeedPaths};

/// Load categories and ads from CSV files into an empty database.
#[derive(Parser, Debug)]
#[command(name = "adboard-seed", version, about)]
struct Cli {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL")]
    database_url: String,

    /// Categories file (header: name)
    #[arg(long, default_value = "categories.csv")]
    categories: PathBuf,

    /// Ads file (header: name,author,price,description,address,is_published)
    #[arg(long, default_value = "ads.csv")]
    ads: PathBuf,

    /// Assume the schema already exists
    #[arg(long)]
    skip_migrations: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "adboard_seed=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let pool = adboard_db::create_pool(&cli.database_url)
        .await
        .context("Failed to connect to database")?;

    if !cli.skip_migrations {
        adboard_db::run_migrations(&pool)
            .await
            .context("Failed to run database migrations")?;
        tracing::info!("Database migrations applied");
    }

    let paths = SeedPaths {
        categories: cli.categories,
        ads: cli.ads,
    };
    let summary = loader::run(&pool, &paths).await?;
    tracing::info!(
        categories = summary.categories,
        ads = summary.ads,
        "Seed data loaded"
    );

    println!("Success");
    Ok(())
}
