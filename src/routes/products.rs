use anyhow::Context;
use axum::{
    extract::{Path, State},
    response::IntoResponse,
};
use diesel::{ExpressionMethods, QueryDsl, SelectableHelper};
use diesel_async::RunQueryDsl;
use utoipa_axum::router::OpenApiRouter;

use crate::{
    choices::{Choice, ProductStatus},
    core::{
        app_error::{AppError, StdResponse},
        app_state::AppState,
    },
    models::ProductEntity,
    schema::products,
};

pub fn routes_with_openapi() -> OpenApiRouter<AppState> {
    OpenApiRouter::new().nest(
        "/products",
        OpenApiRouter::new().routes(utoipa_axum::routes!(get_product)),
    )
}

/// Fetch an active product by slug, counting the view.
#[utoipa::path(
    get,
    path = "/{slug}",
    tags = ["Products"],
    params(
        ("slug" = String, Path, description = "Product slug")
    ),
    responses(
        (status = 200, description = "Get product successfully", body = StdResponse<ProductEntity, String>),
        (status = 404, description = "No active product with this slug")
    )
)]
async fn get_product(
    Path(slug): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let conn = &mut state
        .db_pool
        .get()
        .await
        .context("Failed to obtain a DB connection pool")?;

    let product: ProductEntity = diesel::update(
        products::table
            .filter(products::slug.eq(&slug))
            .filter(products::status.eq(ProductStatus::Active.as_str())),
    )
    .set(products::views_count.eq(products::views_count + 1))
    .returning(ProductEntity::as_returning())
    .get_result(conn)
    .await?;

    Ok(StdResponse {
        data: Some(product),
        message: Some("Get product successfully"),
    })
}
