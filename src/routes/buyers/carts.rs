use std::collections::{BTreeMap, HashMap};

use anyhow::Context;
use axum::{
    Extension, Json,
    extract::{Path, State},
    response::IntoResponse,
};
use chrono::Utc;
use diesel::{ExpressionMethods, QueryDsl, SelectableHelper, upsert::excluded};
use diesel_async::{AsyncConnection, AsyncPgConnection, RunQueryDsl};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use utoipa_axum::router::OpenApiRouter;
use uuid::Uuid;

use crate::{
    choices::{Choice, ProductStatus},
    core::{
        app_error::{AppError, StdResponse},
        app_state::AppState,
        middleware,
    },
    models::{CartEntity, CartItemEntity, CreateCartEntity, CreateCartItemEntity},
    pricing::{line_total, max_amount},
    schema::{cart_items, carts, products},
};

/// Defines the buyer's cart routes (requires `X-Buyer-Id`).
pub fn routes_with_openapi() -> OpenApiRouter<AppState> {
    OpenApiRouter::new().nest(
        "/buyers/cart",
        OpenApiRouter::new()
            .routes(utoipa_axum::routes!(get_cart, replace_cart, clear_cart))
            .routes(utoipa_axum::routes!(remove_cart_item))
            .route_layer(axum::middleware::from_fn(middleware::buyers_authorization)),
    )
}

/// Returns the buyer's cart, creating an empty one on first use.
pub(crate) async fn get_or_create_cart(
    conn: &mut AsyncPgConnection,
    buyer_id: Uuid,
) -> Result<CartEntity, AppError> {
    diesel::insert_into(carts::table)
        .values(CreateCartEntity { buyer_id })
        .on_conflict(carts::buyer_id)
        .do_nothing()
        .execute(conn)
        .await?;

    let cart = carts::table
        .filter(carts::buyer_id.eq(buyer_id))
        .select(CartEntity::as_select())
        .first(conn)
        .await?;
    Ok(cart)
}

pub(crate) async fn load_items(
    conn: &mut AsyncPgConnection,
    cart_id: i32,
) -> Result<Vec<CartItemEntity>, AppError> {
    let items = cart_items::table
        .filter(cart_items::cart_id.eq(cart_id))
        .order_by(cart_items::id.asc())
        .select(CartItemEntity::as_select())
        .get_results(conn)
        .await
        .context("Failed to get cart items")?;
    Ok(items)
}

#[derive(Serialize, ToSchema)]
struct CartRes {
    cart: CartEntity,
    items: Vec<CartItemEntity>,
    item_count: usize,
    total_value: Decimal,
}

impl CartRes {
    fn new(cart: CartEntity, items: Vec<CartItemEntity>) -> Self {
        let total_value = items.iter().map(|item| item.total_price).sum();
        Self {
            item_count: items.len(),
            total_value,
            cart,
            items,
        }
    }
}

#[derive(Deserialize, ToSchema, Debug)]
struct CartItemReq {
    product_id: i32,
    quantity: Decimal,
    #[serde(default)]
    notes: String,
}

#[derive(Deserialize, ToSchema)]
struct ReplaceCartReq {
    items: Vec<CartItemReq>,
}

/// Drops non-positive quantities and keeps the last line per product.
fn normalize_items(items: Vec<CartItemReq>) -> Result<BTreeMap<i32, CartItemReq>, AppError> {
    let mut wanted = BTreeMap::new();
    for item in items {
        if item.quantity > max_amount() {
            return Err(AppError::BadRequest(format!(
                "Quantity for product {} exceeds {}",
                item.product_id,
                max_amount()
            )));
        }
        if item.quantity > Decimal::ZERO {
            wanted.insert(item.product_id, item);
        }
    }
    Ok(wanted)
}

/// Fetch the authenticated buyer's cart.
#[utoipa::path(
    get,
    path = "/",
    tags = ["Carts"],
    params(
        ("x-buyer-id" = Uuid, Header, description = "Authenticated buyer")
    ),
    responses(
        (status = 200, description = "Get cart successfully", body = StdResponse<CartRes, String>)
    )
)]
async fn get_cart(
    State(state): State<AppState>,
    Extension(buyer_id): Extension<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let conn = &mut state
        .db_pool
        .get()
        .await
        .context("Failed to obtain a DB connection pool")?;

    let cart = get_or_create_cart(conn, buyer_id).await?;
    let items = load_items(conn, cart.id).await?;

    Ok(StdResponse {
        data: Some(CartRes::new(cart, items)),
        message: Some("Get cart successfully"),
    })
}

/// Replace the contents of the cart, pricing each line from the product.
#[utoipa::path(
    put,
    path = "/",
    tags = ["Carts"],
    params(
        ("x-buyer-id" = Uuid, Header, description = "Authenticated buyer")
    ),
    request_body = ReplaceCartReq,
    responses(
        (status = 200, description = "Updated cart successfully", body = StdResponse<CartRes, String>),
        (status = 400, description = "A product is missing or not on sale")
    )
)]
async fn replace_cart(
    State(state): State<AppState>,
    Extension(buyer_id): Extension<Uuid>,
    Json(body): Json<ReplaceCartReq>,
) -> Result<impl IntoResponse, AppError> {
    let wanted = normalize_items(body.items)?;

    let conn = &mut state
        .db_pool
        .get()
        .await
        .context("Failed to obtain a DB connection pool")?;

    let (cart, items) = conn
        .transaction(move |conn| {
            Box::pin(async move {
                let cart = get_or_create_cart(conn, buyer_id).await?;
                let product_ids: Vec<i32> = wanted.keys().copied().collect();

                let prices: HashMap<i32, Decimal> = products::table
                    .filter(products::id.eq_any(&product_ids))
                    .filter(products::status.eq(ProductStatus::Active.as_str()))
                    .select((products::id, products::price_per_unit))
                    .get_results::<(i32, Decimal)>(conn)
                    .await
                    .context("Failed to get product prices")?
                    .into_iter()
                    .collect();

                if let Some(missing) = product_ids.iter().find(|id| !prices.contains_key(id)) {
                    return Err(AppError::BadRequest(format!(
                        "Product {} is not available",
                        missing
                    )));
                }

                diesel::delete(
                    cart_items::table
                        .filter(cart_items::cart_id.eq(cart.id))
                        .filter(cart_items::product_id.ne_all(&product_ids)),
                )
                .execute(conn)
                .await
                .context("Failed to delete cart items")?;

                let rows: Vec<CreateCartItemEntity> = wanted
                    .into_values()
                    .map(|item| -> Result<CreateCartItemEntity, AppError> {
                        let unit_price = prices[&item.product_id];
                        Ok(CreateCartItemEntity {
                            cart_id: cart.id,
                            product_id: item.product_id,
                            quantity: item.quantity,
                            unit_price,
                            total_price: line_total(item.quantity, unit_price)?,
                            notes: Some(item.notes),
                        })
                    })
                    .collect::<Result<_, _>>()?;

                let now = Utc::now();
                if !rows.is_empty() {
                    diesel::insert_into(cart_items::table)
                        .values(&rows)
                        .on_conflict((cart_items::cart_id, cart_items::product_id))
                        .do_update()
                        .set((
                            cart_items::quantity.eq(excluded(cart_items::quantity)),
                            cart_items::unit_price.eq(excluded(cart_items::unit_price)),
                            cart_items::total_price.eq(excluded(cart_items::total_price)),
                            cart_items::notes.eq(excluded(cart_items::notes)),
                            cart_items::updated_at.eq(now),
                        ))
                        .execute(conn)
                        .await
                        .context("Failed to upsert cart items")?;
                }

                let cart: CartEntity = diesel::update(carts::table.find(cart.id))
                    .set(carts::updated_at.eq(now))
                    .returning(CartEntity::as_returning())
                    .get_result(conn)
                    .await
                    .context("Failed to update cart timestamp")?;

                let items = load_items(conn, cart.id).await?;
                Ok::<(CartEntity, Vec<CartItemEntity>), AppError>((cart, items))
            })
        })
        .await?;

    Ok(StdResponse {
        data: Some(CartRes::new(cart, items)),
        message: Some("Updated cart successfully"),
    })
}

/// Remove one product from the cart.
#[utoipa::path(
    delete,
    path = "/items/{product_id}",
    tags = ["Carts"],
    params(
        ("x-buyer-id" = Uuid, Header, description = "Authenticated buyer"),
        ("product_id" = i32, Path, description = "Product to remove")
    ),
    responses(
        (status = 200, description = "Removed cart item successfully", body = StdResponse<CartItemEntity, String>),
        (status = 404, description = "The product is not in the cart")
    )
)]
async fn remove_cart_item(
    Path(product_id): Path<i32>,
    State(state): State<AppState>,
    Extension(buyer_id): Extension<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let conn = &mut state
        .db_pool
        .get()
        .await
        .context("Failed to obtain a DB connection pool")?;

    let cart = get_or_create_cart(conn, buyer_id).await?;
    let item: CartItemEntity = diesel::delete(
        cart_items::table
            .filter(cart_items::cart_id.eq(cart.id))
            .filter(cart_items::product_id.eq(product_id)),
    )
    .returning(CartItemEntity::as_returning())
    .get_result(conn)
    .await?;

    Ok(StdResponse {
        data: Some(item),
        message: Some("Removed cart item successfully"),
    })
}

/// Empty the cart.
#[utoipa::path(
    delete,
    path = "/",
    tags = ["Carts"],
    params(
        ("x-buyer-id" = Uuid, Header, description = "Authenticated buyer")
    ),
    responses(
        (status = 200, description = "Cleared cart successfully", body = StdResponse<CartRes, String>)
    )
)]
async fn clear_cart(
    State(state): State<AppState>,
    Extension(buyer_id): Extension<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let conn = &mut state
        .db_pool
        .get()
        .await
        .context("Failed to obtain a DB connection pool")?;

    let cart = get_or_create_cart(conn, buyer_id).await?;
    let removed = diesel::delete(cart_items::table.filter(cart_items::cart_id.eq(cart.id)))
        .execute(conn)
        .await
        .context("Failed to clear cart")?;

    tracing::debug!("Cleared {} items from cart {}", removed, cart.id);
    Ok(StdResponse {
        data: Some(CartRes::new(cart, Vec::new())),
        message: Some("Cleared cart successfully"),
    })
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    fn item(product_id: i32, quantity: &str) -> CartItemReq {
        CartItemReq {
            product_id,
            quantity: Decimal::from_str(quantity).unwrap(),
            notes: String::new(),
        }
    }

    #[test]
    fn non_positive_quantities_are_dropped() {
        let items = normalize_items(vec![item(1, "2"), item(2, "0"), item(3, "-1.5")]).unwrap();
        assert_eq!(items.keys().copied().collect::<Vec<_>>(), vec![1]);
    }

    #[test]
    fn quantities_beyond_the_column_are_rejected() {
        let err = normalize_items(vec![item(1, "2"), item(2, "100000000")]).unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
        assert_eq!(err.to_string(), "Quantity for product 2 exceeds 99999999.99");

        let huge = normalize_items(vec![item(3, "79228162514264337593543950335")]);
        assert!(matches!(huge, Err(AppError::BadRequest(_))));

        assert!(normalize_items(vec![item(4, "99999999.99")]).is_ok());
    }

    #[test]
    fn last_line_wins_for_repeated_products() {
        let items = normalize_items(vec![item(7, "1"), item(7, "4.5")]).unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[&7].quantity, Decimal::from_str("4.5").unwrap());
    }

    #[test]
    fn cart_summary_counts_lines_and_sums_totals() {
        let now = Utc::now();
        let cart = CartEntity {
            id: 1,
            buyer_id: Uuid::new_v4(),
            created_at: now,
            updated_at: now,
        };
        let line = |id: i32, total: &str| CartItemEntity {
            id,
            cart_id: 1,
            product_id: id,
            quantity: Decimal::ONE,
            unit_price: Decimal::from_str(total).unwrap(),
            total_price: Decimal::from_str(total).unwrap(),
            notes: String::new(),
            created_at: now,
            updated_at: now,
        };

        let res = CartRes::new(cart, vec![line(1, "120.50"), line(2, "79.50")]);
        assert_eq!(res.item_count, 2);
        assert_eq!(res.total_value, Decimal::from_str("200.00").unwrap());
    }
}
