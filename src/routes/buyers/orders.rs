use std::collections::{BTreeMap, HashMap};

use anyhow::Context;
use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::{Duration, Utc};
use diesel::{ExpressionMethods, OptionalExtension, QueryDsl, SelectableHelper};
use diesel_async::{AsyncConnection, RunQueryDsl};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::json;
use utoipa::ToSchema;
use utoipa_axum::router::OpenApiRouter;
use uuid::Uuid;

use crate::{
    choices::{Choice, OrderPaymentStatus, OrderStatus, PaymentStatus, PaymentType},
    core::{
        app_error::{AppError, StdResponse},
        app_state::AppState,
        middleware,
    },
    models::{
        CartItemEntity, CreateOrderEntity, CreateOrderItemEntity, CreatePaymentEntity,
        OrderEntity, OrderItemEntity, PaymentEntity, PaymentMethodEntity, ProductEntity,
    },
    core::config::Checkout,
    pricing::{OrderTotals, line_total, order_totals, payment_split, within_limits},
    routes::{
        buyers::carts::{get_or_create_cart, load_items},
        orders::record_status,
        reference,
    },
    schema::{cart_items, locations, order_items, orders, payment_methods, payments, products},
};

/// Defines the buyer's order routes (requires `X-Buyer-Id`).
pub fn routes_with_openapi() -> OpenApiRouter<AppState> {
    OpenApiRouter::new().nest(
        "/buyers/orders",
        OpenApiRouter::new()
            .routes(utoipa_axum::routes!(get_my_orders, checkout))
            .routes(utoipa_axum::routes!(get_my_order))
            .routes(utoipa_axum::routes!(cancel_order))
            .routes(utoipa_axum::routes!(pay_order))
            .route_layer(axum::middleware::from_fn(middleware::buyers_authorization)),
    )
}

#[derive(Serialize, ToSchema)]
struct OrderRes {
    order: OrderEntity,
    items: Vec<OrderItemEntity>,
}

fn product_snapshot(product: &ProductEntity) -> serde_json::Value {
    json!({
        "id": product.id,
        "name": product.name,
        "slug": product.slug,
        "farm_id": product.farm_id,
        "crop_id": product.crop_id,
        "unit_id": product.unit_id,
        "quality_grade": product.quality_grade,
        "price_per_unit": product.price_per_unit,
        "organic_certified": product.organic_certified,
    })
}

/// Fetch all orders of the authenticated buyer, newest first.
#[utoipa::path(
    get,
    path = "/",
    tags = ["Orders"],
    params(
        ("x-buyer-id" = Uuid, Header, description = "Authenticated buyer")
    ),
    responses(
        (status = 200, description = "Get my orders successfully", body = StdResponse<Vec<OrderRes>, String>)
    )
)]
async fn get_my_orders(
    State(state): State<AppState>,
    Extension(buyer_id): Extension<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let conn = &mut state
        .db_pool
        .get()
        .await
        .context("Failed to obtain a DB connection pool")?;

    let orders: Vec<OrderEntity> = orders::table
        .filter(orders::buyer_id.eq(buyer_id))
        .order_by((orders::order_date.desc(), orders::id.desc()))
        .select(OrderEntity::as_select())
        .get_results(conn)
        .await
        .context("Failed to get my orders")?;

    let order_ids: Vec<i32> = orders.iter().map(|order| order.id).collect();
    let items: Vec<OrderItemEntity> = order_items::table
        .filter(order_items::order_id.eq_any(&order_ids))
        .order_by(order_items::id.asc())
        .select(OrderItemEntity::as_select())
        .get_results(conn)
        .await
        .context("Failed to get order items")?;

    let mut group: HashMap<i32, Vec<OrderItemEntity>> = HashMap::new();
    for item in items {
        group.entry(item.order_id).or_default().push(item);
    }

    let orders: Vec<OrderRes> = orders
        .into_iter()
        .map(|order| OrderRes {
            items: group.remove(&order.id).unwrap_or_default(),
            order,
        })
        .collect();

    Ok(StdResponse {
        data: Some(orders),
        message: Some("Get my orders successfully"),
    })
}

/// Fetch one order of the authenticated buyer.
#[utoipa::path(
    get,
    path = "/{id}",
    tags = ["Orders"],
    params(
        ("x-buyer-id" = Uuid, Header, description = "Authenticated buyer"),
        ("id" = i32, Path, description = "Order ID to fetch")
    ),
    responses(
        (status = 200, description = "Get order successfully", body = StdResponse<OrderRes, String>),
        (status = 404, description = "Order not found")
    )
)]
async fn get_my_order(
    Path(id): Path<i32>,
    State(state): State<AppState>,
    Extension(buyer_id): Extension<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let conn = &mut state
        .db_pool
        .get()
        .await
        .context("Failed to obtain a DB connection pool")?;

    let order: OrderEntity = orders::table
        .find(id)
        .filter(orders::buyer_id.eq(buyer_id))
        .select(OrderEntity::as_select())
        .first(conn)
        .await?;

    let items: Vec<OrderItemEntity> = order_items::table
        .filter(order_items::order_id.eq(order.id))
        .order_by(order_items::id.asc())
        .select(OrderItemEntity::as_select())
        .get_results(conn)
        .await
        .context("Failed to get order items")?;

    Ok(StdResponse {
        data: Some(OrderRes { order, items }),
        message: Some("Get order successfully"),
    })
}

/// One farmer's share of the cart, priced and ready to insert.
#[derive(Debug)]
struct OrderDraft<'a> {
    farmer_id: i32,
    lines: Vec<(&'a CartItemEntity, &'a ProductEntity, Decimal)>,
    totals: OrderTotals,
}

/// Splits cart lines into one draft per farmer, ordered by farmer id.
///
/// Lines keep the cart's unit price; the line total is recomputed from it.
fn draft_orders<'a>(
    lines: &'a [CartItemEntity],
    catalog: &'a HashMap<i32, ProductEntity>,
    checkout: &Checkout,
) -> Result<Vec<OrderDraft<'a>>, AppError> {
    if lines.is_empty() {
        return Err(AppError::BadRequest("Cart is empty".into()));
    }

    let mut by_farmer: BTreeMap<i32, Vec<(&CartItemEntity, &ProductEntity, Decimal)>> =
        BTreeMap::new();
    for line in lines {
        let product = catalog.get(&line.product_id).ok_or_else(|| {
            AppError::BadRequest(format!("Product {} is no longer listed", line.product_id))
        })?;
        let total = line_total(line.quantity, line.unit_price)?;
        by_farmer
            .entry(product.farmer_id)
            .or_default()
            .push((line, product, total));
    }

    by_farmer
        .into_iter()
        .map(|(farmer_id, lines)| {
            let totals = order_totals(
                lines.iter().map(|&(_, _, total)| total),
                checkout.delivery_fee,
                checkout.tax_rate,
            )?;
            Ok(OrderDraft {
                farmer_id,
                lines,
                totals,
            })
        })
        .collect()
}

#[derive(Deserialize, ToSchema)]
struct CheckoutReq {
    delivery_location_id: i32,
    #[serde(default)]
    special_instructions: String,
}

/// Turn the cart into one order per farmer.
#[utoipa::path(
    post,
    path = "/",
    tags = ["Orders"],
    params(
        ("x-buyer-id" = Uuid, Header, description = "Authenticated buyer")
    ),
    request_body = CheckoutReq,
    responses(
        (status = 201, description = "Placed orders successfully", body = StdResponse<Vec<OrderRes>, String>),
        (status = 400, description = "The cart is empty"),
        (status = 403, description = "The delivery location belongs to someone else")
    )
)]
async fn checkout(
    State(state): State<AppState>,
    Extension(buyer_id): Extension<Uuid>,
    Json(body): Json<CheckoutReq>,
) -> Result<impl IntoResponse, AppError> {
    let checkout_config = state.config.checkout.clone();

    let conn = &mut state
        .db_pool
        .get()
        .await
        .context("Failed to obtain a DB connection pool")?;

    let placed = conn
        .transaction(move |conn| {
            Box::pin(async move {
                let owner: Option<Uuid> = locations::table
                    .find(body.delivery_location_id)
                    .select(locations::user_id)
                    .first(conn)
                    .await
                    .optional()?;
                if owner != Some(buyer_id) {
                    return Err(AppError::ForbiddenResource(
                        "Buyer does not own this delivery location".into(),
                    ));
                }

                let cart = get_or_create_cart(conn, buyer_id).await?;
                let lines = load_items(conn, cart.id).await?;

                let product_ids: Vec<i32> = lines.iter().map(|line| line.product_id).collect();
                let catalog: HashMap<i32, ProductEntity> = products::table
                    .filter(products::id.eq_any(&product_ids))
                    .select(ProductEntity::as_select())
                    .get_results(conn)
                    .await
                    .context("Failed to get cart products")?
                    .into_iter()
                    .map(|product| (product.id, product))
                    .collect();

                let drafts = draft_orders(&lines, &catalog, &checkout_config)?;

                let now = Utc::now();
                let expected = now + Duration::days(checkout_config.delivery_days);
                let mut placed = Vec::with_capacity(drafts.len());

                for draft in drafts {
                    let OrderDraft {
                        farmer_id,
                        lines,
                        totals,
                    } = draft;

                    let order: OrderEntity = diesel::insert_into(orders::table)
                        .values(CreateOrderEntity {
                            order_number: reference("ORD", now),
                            buyer_id,
                            farmer_id,
                            delivery_location_id: body.delivery_location_id,
                            expected_delivery_date: expected,
                            status: Some(OrderStatus::Pending.as_str().to_string()),
                            payment_status: Some(OrderPaymentStatus::Pending.as_str().to_string()),
                            subtotal: totals.subtotal,
                            delivery_fee: Some(totals.delivery_fee),
                            tax_amount: Some(totals.tax_amount),
                            discount_amount: Some(totals.discount_amount),
                            total_amount: totals.total_amount,
                            special_instructions: Some(body.special_instructions.clone()),
                            tracking_number: None,
                        })
                        .returning(OrderEntity::as_returning())
                        .get_result(conn)
                        .await?;

                    let rows: Vec<CreateOrderItemEntity> = lines
                        .iter()
                        .map(|&(line, product, total_price)| CreateOrderItemEntity {
                            order_id: order.id,
                            product_id: line.product_id,
                            quantity: line.quantity,
                            unit_price: line.unit_price,
                            total_price,
                            product_snapshot: Some(product_snapshot(product)),
                        })
                        .collect();

                    let items: Vec<OrderItemEntity> = diesel::insert_into(order_items::table)
                        .values(&rows)
                        .returning(OrderItemEntity::as_returning())
                        .get_results(conn)
                        .await?;

                    record_status(
                        conn,
                        order.id,
                        "",
                        &order.status,
                        Some(buyer_id),
                        "Order placed",
                    )
                    .await?;

                    tracing::info!(
                        "Placed order {} for farmer {} ({} items)",
                        order.order_number,
                        farmer_id,
                        items.len()
                    );
                    placed.push(OrderRes { order, items });
                }

                diesel::delete(cart_items::table.filter(cart_items::cart_id.eq(cart.id)))
                    .execute(conn)
                    .await
                    .context("Failed to empty cart")?;

                Ok::<Vec<OrderRes>, AppError>(placed)
            })
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        StdResponse {
            data: Some(placed),
            message: Some("Placed orders successfully"),
        },
    ))
}

#[derive(Deserialize, ToSchema)]
struct CancelOrderReq {
    #[serde(default)]
    reason: String,
}

/// Cancel an order that has not started processing.
#[utoipa::path(
    post,
    path = "/{id}/cancel",
    tags = ["Orders"],
    params(
        ("x-buyer-id" = Uuid, Header, description = "Authenticated buyer"),
        ("id" = i32, Path, description = "Order ID to cancel")
    ),
    request_body = CancelOrderReq,
    responses(
        (status = 200, description = "Cancelled order successfully", body = StdResponse<OrderEntity, String>),
        (status = 404, description = "No cancellable order with this id")
    )
)]
async fn cancel_order(
    Path(id): Path<i32>,
    State(state): State<AppState>,
    Extension(buyer_id): Extension<Uuid>,
    Json(body): Json<CancelOrderReq>,
) -> Result<impl IntoResponse, AppError> {
    let conn = &mut state
        .db_pool
        .get()
        .await
        .context("Failed to obtain a DB connection pool")?;

    let cancelled_order = conn
        .transaction(move |conn| {
            Box::pin(async move {
                let current: OrderEntity = orders::table
                    .find(id)
                    .filter(orders::buyer_id.eq(buyer_id))
                    .filter(orders::status.eq_any(OrderStatus::CANCELLABLE.map(|status| status.as_str())))
                    .select(OrderEntity::as_select())
                    .for_update()
                    .first(conn)
                    .await?;

                let now = Utc::now();
                let cancelled_order: OrderEntity = diesel::update(orders::table.find(current.id))
                    .set((
                        orders::status.eq(OrderStatus::Cancelled.as_str()),
                        orders::cancelled_at.eq(now),
                        orders::cancellation_reason.eq(&body.reason),
                        orders::updated_at.eq(now),
                    ))
                    .returning(OrderEntity::as_returning())
                    .get_result(conn)
                    .await?;

                record_status(
                    conn,
                    cancelled_order.id,
                    &current.status,
                    &cancelled_order.status,
                    Some(buyer_id),
                    &body.reason,
                )
                .await?;

                Ok::<OrderEntity, AppError>(cancelled_order)
            })
        })
        .await?;

    tracing::info!("Buyer cancelled order {}", cancelled_order.order_number);
    Ok(StdResponse {
        data: Some(cancelled_order),
        message: Some("Cancelled order successfully"),
    })
}

#[derive(Deserialize, ToSchema)]
struct PayOrderReq {
    payment_method_code: String,
}

/// Start a payment for the order total.
#[utoipa::path(
    post,
    path = "/{id}/payments",
    tags = ["Payments"],
    params(
        ("x-buyer-id" = Uuid, Header, description = "Authenticated buyer"),
        ("id" = i32, Path, description = "Order ID to pay")
    ),
    request_body = PayOrderReq,
    responses(
        (status = 201, description = "Created payment successfully", body = StdResponse<PaymentEntity, String>),
        (status = 400, description = "Payment method unavailable or amount out of range"),
        (status = 404, description = "Order not found")
    )
)]
async fn pay_order(
    Path(id): Path<i32>,
    State(state): State<AppState>,
    Extension(buyer_id): Extension<Uuid>,
    Json(body): Json<PayOrderReq>,
) -> Result<impl IntoResponse, AppError> {
    let conn = &mut state
        .db_pool
        .get()
        .await
        .context("Failed to obtain a DB connection pool")?;

    let order: OrderEntity = orders::table
        .find(id)
        .filter(orders::buyer_id.eq(buyer_id))
        .select(OrderEntity::as_select())
        .first(conn)
        .await?;

    if order.status == OrderStatus::Cancelled.as_str() {
        return Err(AppError::BadRequest("Order is cancelled".into()));
    }
    if order.payment_status == OrderPaymentStatus::Paid.as_str() {
        return Err(AppError::BadRequest("Order is already paid".into()));
    }

    let method: PaymentMethodEntity = payment_methods::table
        .filter(payment_methods::code.eq(&body.payment_method_code))
        .select(PaymentMethodEntity::as_select())
        .first(conn)
        .await
        .optional()?
        .filter(|method| method.is_active)
        .ok_or_else(|| {
            AppError::BadRequest(format!(
                "Payment method {} is not available",
                body.payment_method_code
            ))
        })?;

    let amount = order.total_amount;
    if !within_limits(amount, method.minimum_amount, method.maximum_amount) {
        return Err(AppError::BadRequest(format!(
            "{} accepts amounts from {}{}",
            method.name,
            method.minimum_amount,
            method
                .maximum_amount
                .map(|max| format!(" to {}", max))
                .unwrap_or_default()
        )));
    }

    let split = payment_split(amount, method.processing_fee_percentage);
    let payment: PaymentEntity = diesel::insert_into(payments::table)
        .values(CreatePaymentEntity {
            transaction_id: reference("TXN", Utc::now()),
            order_id: order.id,
            payment_method_id: method.id,
            payment_type: Some(PaymentType::Order.as_str().to_string()),
            amount,
            processing_fee: Some(split.processing_fee),
            net_amount: split.net_amount,
            status: Some(PaymentStatus::Pending.as_str().to_string()),
            gateway_reference: None,
            gateway_response: None,
        })
        .returning(PaymentEntity::as_returning())
        .get_result(conn)
        .await?;

    tracing::info!(
        "Created payment {} of {} for order {}",
        payment.transaction_id,
        payment.amount,
        order.order_number
    );
    Ok((
        StatusCode::CREATED,
        StdResponse {
            data: Some(payment),
            message: Some("Created payment successfully"),
        },
    ))
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use chrono::NaiveDate;

    use super::*;

    fn d(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn product(id: i32, farmer_id: i32, price: &str) -> ProductEntity {
        let now = Utc::now();
        ProductEntity {
            id,
            farmer_id,
            crop_id: 1,
            farm_id: farmer_id,
            name: format!("Product {id}"),
            slug: format!("product-{id}"),
            description: String::new(),
            quantity_available: d("100"),
            unit_id: 1,
            price_per_unit: d(price),
            minimum_order: Decimal::ONE,
            quality_grade: "grade_a".into(),
            harvest_date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            expiry_date: None,
            organic_certified: false,
            certification_body: String::new(),
            storage_condition: String::new(),
            packaging_options: json!([]),
            images: json!([]),
            videos: json!([]),
            status: "active".into(),
            featured: false,
            views_count: 0,
            likes_count: 0,
            created_at: now,
            updated_at: now,
        }
    }

    fn line(id: i32, product_id: i32, quantity: &str, unit_price: &str) -> CartItemEntity {
        let now = Utc::now();
        CartItemEntity {
            id,
            cart_id: 1,
            product_id,
            quantity: d(quantity),
            unit_price: d(unit_price),
            total_price: Decimal::ZERO,
            notes: String::new(),
            created_at: now,
            updated_at: now,
        }
    }

    fn catalog(products: Vec<ProductEntity>) -> HashMap<i32, ProductEntity> {
        products.into_iter().map(|p| (p.id, p)).collect()
    }

    #[test]
    fn cart_is_split_into_one_order_per_farmer() {
        let catalog = catalog(vec![
            product(1, 20, "50.00"),
            product(2, 10, "30.00"),
            product(3, 20, "12.50"),
        ]);
        let lines = vec![
            line(1, 1, "2", "50.00"),
            line(2, 2, "1", "30.00"),
            line(3, 3, "4", "12.50"),
        ];

        let drafts = draft_orders(&lines, &catalog, &Checkout::default()).unwrap();

        let farmers: Vec<i32> = drafts.iter().map(|draft| draft.farmer_id).collect();
        assert_eq!(farmers, vec![10, 20]);

        let second: Vec<i32> = drafts[1].lines.iter().map(|(l, _, _)| l.product_id).collect();
        assert_eq!(second, vec![1, 3]);
        assert_eq!(drafts[0].totals.subtotal, d("30.00"));
        assert_eq!(drafts[1].totals.subtotal, d("150.00"));
        assert_eq!(drafts[1].totals.total_amount, d("150.00"));
    }

    #[test]
    fn drafts_use_cart_price_and_checkout_charges() {
        let catalog = catalog(vec![product(1, 10, "99.00")]);
        let lines = vec![line(1, 1, "1.5", "80.00")];
        let checkout = Checkout {
            delivery_fee: d("200"),
            tax_rate: d("0.16"),
            delivery_days: 3,
        };

        let drafts = draft_orders(&lines, &catalog, &checkout).unwrap();

        assert_eq!(drafts.len(), 1);
        assert_eq!(drafts[0].lines[0].2, d("120.00"));
        let totals = drafts[0].totals;
        assert_eq!(totals.subtotal, d("120.00"));
        assert_eq!(totals.tax_amount, d("19.20"));
        assert_eq!(totals.delivery_fee, d("200"));
        assert_eq!(totals.total_amount, d("339.20"));
    }

    #[test]
    fn empty_cart_cannot_be_checked_out() {
        let err = draft_orders(&[], &HashMap::new(), &Checkout::default()).unwrap_err();
        assert_eq!(err.to_string(), "Cart is empty");
    }

    #[test]
    fn unlisted_product_rejects_the_checkout() {
        let catalog = catalog(vec![product(1, 10, "10")]);
        let lines = vec![line(1, 1, "1", "10"), line(2, 9, "1", "10")];

        let err = draft_orders(&lines, &catalog, &Checkout::default()).unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
        assert_eq!(err.to_string(), "Product 9 is no longer listed");
    }

    #[test]
    fn snapshot_keeps_the_listing_at_order_time() {
        let snapshot = product_snapshot(&product(4, 10, "45.50"));
        assert_eq!(snapshot["slug"], "product-4");
        assert_eq!(snapshot["farm_id"], 10);
        assert_eq!(snapshot["quality_grade"], "grade_a");
    }
}
