use agrimarket::{
    MIGRATIONS,
    core::{bootstrap, config, db},
    seed::Seeder,
};
use anyhow::{Context, Result};
use clap::Parser;
use diesel_async::{AsyncConnection, AsyncPgConnection};

/// Seeds the database with sample Kenyan agricultural data.
#[derive(Parser, Debug)]
#[command(name = "agrimarket-seed", version)]
struct Args {
    /// Clear existing data before seeding
    #[arg(long)]
    clear: bool,

    /// Seed for the random generator, for reproducible data
    #[arg(long, value_name = "SEED")]
    rng_seed: Option<u64>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    bootstrap::init();

    let config = config::load()?;
    let migrations_count = db::run_migrations_blocking(MIGRATIONS, &config.database.url).await?;
    tracing::info!("Run {} new migrations successfully", migrations_count);

    let conn = AsyncPgConnection::establish(&config.database.url)
        .await
        .context("Failed to connect to the database")?;

    let mut seeder = Seeder::new(conn, args.rng_seed);
    if args.clear {
        seeder.clear().await;
    }
    seeder.run().await;

    tracing::info!("Successfully seeded database!");
    Ok(())
}
