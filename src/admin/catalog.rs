//! Admin writes for farms and products, whose names and slugs must stay unique.

use anyhow::Context;
use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use diesel::{ExpressionMethods, QueryDsl, SelectableHelper, TextExpressionMethods};
use diesel_async::{AsyncConnection, AsyncPgConnection, RunQueryDsl};

use crate::{
    admin::audit,
    choices::AuditAction,
    core::{
        app_error::{AppError, StdResponse},
        app_state::AppState,
        middleware::AuditContext,
    },
    models::{
        CreateFarmEntity, CreateProductEntity, FarmEntity, Prepare, ProductEntity,
        UpdateFarmEntity, UpdateProductEntity,
    },
    schema::{farms, products},
    slug::{like_pattern, next_free_slug, slugify},
};

fn base_slug(text: &str) -> Result<String, AppError> {
    let slug = slugify(text);
    if slug.is_empty() {
        return Err(AppError::BadRequest(format!(
            "`{}` does not contain any usable characters",
            text
        )));
    }
    Ok(slug)
}

/// Slugifies `name` and suffixes it until no other farm uses it.
pub async fn unique_farm_name(
    conn: &mut AsyncPgConnection,
    name: &str,
    exclude: Option<i32>,
) -> Result<String, AppError> {
    let base = base_slug(name)?;

    let mut query = farms::table
        .filter(farms::name.like(like_pattern(&base)))
        .select(farms::name)
        .into_boxed();
    if let Some(id) = exclude {
        query = query.filter(farms::id.ne(id));
    }

    let taken: Vec<String> = query
        .load(conn)
        .await
        .context("Failed to look up farm names")?;
    Ok(next_free_slug(&base, taken))
}

/// Derives a product slug from `name` that no other product uses.
pub async fn unique_product_slug(
    conn: &mut AsyncPgConnection,
    name: &str,
    exclude: Option<i32>,
) -> Result<String, AppError> {
    let base = base_slug(name)?;

    let mut query = products::table
        .filter(products::slug.like(like_pattern(&base)))
        .select(products::slug)
        .into_boxed();
    if let Some(id) = exclude {
        query = query.filter(products::id.ne(id));
    }

    let taken: Vec<String> = query
        .load(conn)
        .await
        .context("Failed to look up product slugs")?;
    Ok(next_free_slug(&base, taken))
}

pub async fn create_farm(
    State(state): State<AppState>,
    Extension(ctx): Extension<AuditContext>,
    Json(mut body): Json<CreateFarmEntity>,
) -> Result<impl IntoResponse, AppError> {
    let conn = &mut state
        .db_pool
        .get()
        .await
        .context("Failed to obtain a DB connection pool")?;

    let farm = conn
        .transaction(move |conn| {
            Box::pin(async move {
                body.name = unique_farm_name(conn, &body.name, None).await?;

                let farm: FarmEntity = diesel::insert_into(farms::table)
                    .values(&body)
                    .returning(FarmEntity::as_returning())
                    .get_result(conn)
                    .await?;

                let entry = audit::Entry::new(AuditAction::Create, "farms")
                    .object(farm.id, &farm, "name")
                    .changes(audit::snapshot(&farm));
                audit::record(conn, &ctx, entry).await?;

                Ok::<FarmEntity, AppError>(farm)
            })
        })
        .await?;

    tracing::info!("Created farm {} ({})", farm.id, farm.name);
    Ok((
        StatusCode::CREATED,
        StdResponse {
            data: Some(farm),
            message: Some("Created FarmEntity"),
        },
    ))
}

pub async fn update_farm(
    State(state): State<AppState>,
    Extension(ctx): Extension<AuditContext>,
    Path(id): Path<i32>,
    Json(mut body): Json<UpdateFarmEntity>,
) -> Result<impl IntoResponse, AppError> {
    let conn = &mut state
        .db_pool
        .get()
        .await
        .context("Failed to obtain a DB connection pool")?;

    let farm = conn
        .transaction(move |conn| {
            Box::pin(async move {
                let before: FarmEntity = farms::table
                    .find(id)
                    .select(FarmEntity::as_select())
                    .first(conn)
                    .await?;

                if let Some(name) = body.name.take() {
                    body.name = Some(unique_farm_name(conn, &name, Some(id)).await?);
                }

                let after: FarmEntity = diesel::update(farms::table.find(id))
                    .set(&body)
                    .returning(FarmEntity::as_returning())
                    .get_result(conn)
                    .await?;

                let entry = audit::Entry::new(AuditAction::Update, "farms")
                    .object(after.id, &after, "name")
                    .changes(audit::diff(&audit::snapshot(&before), &audit::snapshot(&after)));
                audit::record(conn, &ctx, entry).await?;

                Ok::<FarmEntity, AppError>(after)
            })
        })
        .await?;

    Ok(StdResponse {
        data: Some(farm),
        message: Some("Updated FarmEntity"),
    })
}

pub async fn create_product(
    State(state): State<AppState>,
    Extension(ctx): Extension<AuditContext>,
    Json(mut body): Json<CreateProductEntity>,
) -> Result<impl IntoResponse, AppError> {
    body.prepare()?;

    let conn = &mut state
        .db_pool
        .get()
        .await
        .context("Failed to obtain a DB connection pool")?;

    let product = conn
        .transaction(move |conn| {
            Box::pin(async move {
                if body.slug.is_empty() {
                    body.slug = unique_product_slug(conn, &body.name, None).await?;
                }

                let product: ProductEntity = diesel::insert_into(products::table)
                    .values(&body)
                    .returning(ProductEntity::as_returning())
                    .get_result(conn)
                    .await?;

                let entry = audit::Entry::new(AuditAction::Create, "products")
                    .object(product.id, &product, "name")
                    .changes(audit::snapshot(&product));
                audit::record(conn, &ctx, entry).await?;

                Ok::<ProductEntity, AppError>(product)
            })
        })
        .await?;

    tracing::info!("Created product {} ({})", product.id, product.slug);
    Ok((
        StatusCode::CREATED,
        StdResponse {
            data: Some(product),
            message: Some("Created ProductEntity"),
        },
    ))
}

/// Clearing `slug` (sending `""`) regenerates it from the product name.
pub async fn update_product(
    State(state): State<AppState>,
    Extension(ctx): Extension<AuditContext>,
    Path(id): Path<i32>,
    Json(mut body): Json<UpdateProductEntity>,
) -> Result<impl IntoResponse, AppError> {
    body.prepare()?;

    let conn = &mut state
        .db_pool
        .get()
        .await
        .context("Failed to obtain a DB connection pool")?;

    let product = conn
        .transaction(move |conn| {
            Box::pin(async move {
                let before: ProductEntity = products::table
                    .find(id)
                    .select(ProductEntity::as_select())
                    .first(conn)
                    .await?;

                if body.slug.as_deref() == Some("") {
                    let name = body.name.clone().unwrap_or_else(|| before.name.clone());
                    body.slug = Some(unique_product_slug(conn, &name, Some(id)).await?);
                }

                let after: ProductEntity = diesel::update(products::table.find(id))
                    .set(&body)
                    .returning(ProductEntity::as_returning())
                    .get_result(conn)
                    .await?;

                let entry = audit::Entry::new(AuditAction::Update, "products")
                    .object(after.id, &after, "name")
                    .changes(audit::diff(&audit::snapshot(&before), &audit::snapshot(&after)));
                audit::record(conn, &ctx, entry).await?;

                Ok::<ProductEntity, AppError>(after)
            })
        })
        .await?;

    Ok(StdResponse {
        data: Some(product),
        message: Some("Updated ProductEntity"),
    })
}
