use agrimarket::{
    MIGRATIONS, admin,
    core::{
        bootstrap::{self, bootstrap},
        config, db, swagger,
    },
    routes,
};
use anyhow::Result;
use axum::Router;

#[tokio::main]
async fn main() -> Result<()> {
    bootstrap::init();

    let routes = routes::routes_with_openapi();

    let mut openapi = routes.get_openapi().clone();
    openapi.info = utoipa::openapi::InfoBuilder::new()
        .title("AgriMarket API")
        .version("1.0.0")
        .build();
    openapi.merge(admin::openapi::document());
    let swagger_ui = swagger::create_swagger_ui(openapi)?;

    let app = Router::new()
        .merge(routes)
        .merge(admin::routes())
        .merge(swagger_ui);

    tracing::info!("Running migrations...");
    let config = config::load()?;
    let migrations_count = db::run_migrations_blocking(MIGRATIONS, &config.database.url).await?;
    tracing::info!("Run {} new migrations successfully", migrations_count);

    tracing::info!("Bootstrapping...");
    bootstrap("AgriMarket", app, config).await?;
    Ok(())
}
