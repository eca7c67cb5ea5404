use anyhow::Context;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::{DateTime, Utc};
use diesel::{ExpressionMethods, OptionalExtension, QueryDsl, SelectableHelper};
use diesel_async::{AsyncConnection, AsyncPgConnection, RunQueryDsl};
use serde::Deserialize;
use serde_json::json;
use utoipa::ToSchema;
use utoipa_axum::router::OpenApiRouter;
use uuid::Uuid;

use crate::{
    choices::{Choice, DeliveryStatus, OrderStatus, ensure},
    core::{
        app_error::{AppError, StdResponse},
        app_state::AppState,
    },
    models::{
        CreateDeliveryEntity, CreateOrderStatusHistoryEntity, DeliveryEntity,
        DeliveryPartnerEntity, OrderEntity, OrderStatusHistoryEntity, UpdateOrderEntity,
    },
    schema::{
        deliveries, delivery_partners, farms, locations, order_items, order_status_history,
        orders, products,
    },
};

pub fn routes_with_openapi() -> OpenApiRouter<AppState> {
    OpenApiRouter::new().nest(
        "/orders",
        OpenApiRouter::new()
            .routes(utoipa_axum::routes!(update_order_status))
            .routes(utoipa_axum::routes!(get_order_history))
            .routes(utoipa_axum::routes!(create_delivery)),
    )
}

fn history_entry(
    order_id: i32,
    previous_status: &str,
    new_status: &str,
    changed_by_id: Option<Uuid>,
    notes: &str,
) -> CreateOrderStatusHistoryEntity {
    CreateOrderStatusHistoryEntity {
        order_id,
        previous_status: previous_status.to_string(),
        new_status: new_status.to_string(),
        changed_by_id,
        notes: Some(notes.to_string()),
    }
}

/// Appends a row to the order's status history.
pub(crate) async fn record_status(
    conn: &mut AsyncPgConnection,
    order_id: i32,
    previous_status: &str,
    new_status: &str,
    changed_by_id: Option<Uuid>,
    notes: &str,
) -> Result<OrderStatusHistoryEntity, AppError> {
    let row = diesel::insert_into(order_status_history::table)
        .values(history_entry(
            order_id,
            previous_status,
            new_status,
            changed_by_id,
            notes,
        ))
        .returning(OrderStatusHistoryEntity::as_returning())
        .get_result(conn)
        .await?;

    tracing::debug!(
        "Order {} moved from '{}' to '{}'",
        order_id,
        previous_status,
        new_status
    );
    Ok(row)
}

/// Changeset for a direct status update; delivered and cancelled orders get their timestamp.
fn status_changes(status: &str, now: DateTime<Utc>) -> UpdateOrderEntity {
    let mut changes = UpdateOrderEntity {
        status: Some(status.to_string()),
        ..Default::default()
    };
    if status == OrderStatus::Delivered.as_str() {
        changes.delivered_at = Some(Some(now));
    }
    if status == OrderStatus::Cancelled.as_str() {
        changes.cancelled_at = Some(Some(now));
    }
    changes
}

#[derive(Deserialize, ToSchema)]
struct UpdateOrderStatusReq {
    status: String,
    changed_by: Option<Uuid>,
    #[serde(default)]
    notes: String,
}

/// Set an order's status directly and record the change.
#[utoipa::path(
    patch,
    path = "/{id}/status",
    tags = ["Orders"],
    params(
        ("id" = i32, Path, description = "Order ID to update")
    ),
    request_body = UpdateOrderStatusReq,
    responses(
        (status = 200, description = "Updated order status successfully", body = StdResponse<OrderEntity, String>),
        (status = 400, description = "Unknown order status"),
        (status = 404, description = "Order not found")
    )
)]
async fn update_order_status(
    Path(id): Path<i32>,
    State(state): State<AppState>,
    Json(body): Json<UpdateOrderStatusReq>,
) -> Result<impl IntoResponse, AppError> {
    ensure::<OrderStatus>(&body.status)?;

    let conn = &mut state
        .db_pool
        .get()
        .await
        .context("Failed to obtain a DB connection pool")?;

    let order = conn
        .transaction(move |conn| {
            Box::pin(async move {
                let current: OrderEntity = orders::table
                    .find(id)
                    .select(OrderEntity::as_select())
                    .for_update()
                    .first(conn)
                    .await?;

                let now = Utc::now();
                let changes = status_changes(&body.status, now);

                let order: OrderEntity = diesel::update(orders::table.find(id))
                    .set((&changes, orders::updated_at.eq(now)))
                    .returning(OrderEntity::as_returning())
                    .get_result(conn)
                    .await?;

                record_status(
                    conn,
                    order.id,
                    &current.status,
                    &order.status,
                    body.changed_by,
                    &body.notes,
                )
                .await?;

                Ok::<OrderEntity, AppError>(order)
            })
        })
        .await?;

    tracing::info!("Order {} is now {}", order.order_number, order.status);
    Ok(StdResponse {
        data: Some(order),
        message: Some("Updated order status successfully"),
    })
}

/// List the status changes of an order, oldest first.
#[utoipa::path(
    get,
    path = "/{id}/history",
    tags = ["Orders"],
    params(
        ("id" = i32, Path, description = "Order ID")
    ),
    responses(
        (status = 200, description = "Get order history successfully", body = StdResponse<Vec<OrderStatusHistoryEntity>, String>),
        (status = 404, description = "Order not found")
    )
)]
async fn get_order_history(
    Path(id): Path<i32>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let conn = &mut state
        .db_pool
        .get()
        .await
        .context("Failed to obtain a DB connection pool")?;

    let exists: i64 = orders::table
        .find(id)
        .count()
        .get_result(conn)
        .await
        .context("Failed to find order")?;
    if exists == 0 {
        return Err(AppError::NotFound);
    }

    let history: Vec<OrderStatusHistoryEntity> = order_status_history::table
        .filter(order_status_history::order_id.eq(id))
        .order_by((
            order_status_history::timestamp.asc(),
            order_status_history::id.asc(),
        ))
        .select(OrderStatusHistoryEntity::as_select())
        .get_results(conn)
        .await
        .context("Failed to get order history")?;

    Ok(StdResponse {
        data: Some(history),
        message: Some("Get order history successfully"),
    })
}

#[derive(Deserialize, ToSchema)]
struct CreateDeliveryReq {
    delivery_partner_id: i32,
    #[serde(default)]
    driver_name: String,
    #[serde(default)]
    driver_phone: String,
    #[serde(default)]
    vehicle_details: String,
}

/// Assign a delivery partner to an order.
#[utoipa::path(
    post,
    path = "/{id}/delivery",
    tags = ["Deliveries"],
    params(
        ("id" = i32, Path, description = "Order ID to deliver")
    ),
    request_body = CreateDeliveryReq,
    responses(
        (status = 201, description = "Created delivery successfully", body = StdResponse<DeliveryEntity, String>),
        (status = 400, description = "Inactive partner or empty order"),
        (status = 404, description = "Order or partner not found"),
        (status = 409, description = "Order already has a delivery")
    )
)]
async fn create_delivery(
    Path(id): Path<i32>,
    State(state): State<AppState>,
    Json(body): Json<CreateDeliveryReq>,
) -> Result<impl IntoResponse, AppError> {
    let conn = &mut state
        .db_pool
        .get()
        .await
        .context("Failed to obtain a DB connection pool")?;

    let delivery = conn
        .transaction(move |conn| {
            Box::pin(async move {
                let order: OrderEntity = orders::table
                    .find(id)
                    .select(OrderEntity::as_select())
                    .first(conn)
                    .await?;

                let partner: DeliveryPartnerEntity = delivery_partners::table
                    .find(body.delivery_partner_id)
                    .select(DeliveryPartnerEntity::as_select())
                    .first(conn)
                    .await?;
                if !partner.is_active {
                    return Err(AppError::BadRequest(format!(
                        "Delivery partner {} is not active",
                        partner.name
                    )));
                }

                let pickup_address: String = order_items::table
                    .inner_join(products::table.inner_join(farms::table.inner_join(locations::table)))
                    .filter(order_items::order_id.eq(order.id))
                    .order_by(order_items::id.asc())
                    .select(locations::detailed_address)
                    .first(conn)
                    .await
                    .optional()?
                    .ok_or_else(|| AppError::BadRequest("Order has no items to deliver".into()))?;

                let delivery_address: String = locations::table
                    .find(order.delivery_location_id)
                    .select(locations::detailed_address)
                    .first(conn)
                    .await?;

                let status = DeliveryStatus::Assigned.as_str();
                let delivery = diesel::insert_into(deliveries::table)
                    .values(CreateDeliveryEntity {
                        order_id: order.id,
                        delivery_partner_id: partner.id,
                        driver_name: Some(body.driver_name),
                        driver_phone: Some(body.driver_phone),
                        vehicle_details: Some(body.vehicle_details),
                        pickup_address,
                        delivery_address,
                        status: Some(status.to_string()),
                        estimated_delivery_time: order.expected_delivery_date,
                        delivery_notes: None,
                        recipient_name: None,
                        delivery_fee: order.delivery_fee,
                        tracking_updates: Some(json!([
                            { "status": status, "note": "", "at": Utc::now() }
                        ])),
                    })
                    .returning(DeliveryEntity::as_returning())
                    .get_result(conn)
                    .await?;

                Ok::<DeliveryEntity, AppError>(delivery)
            })
        })
        .await?;

    tracing::info!("Assigned delivery {} to order {}", delivery.id, delivery.order_id);
    Ok((
        StatusCode::CREATED,
        StdResponse {
            data: Some(delivery),
            message: Some("Created delivery successfully"),
        },
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn history_entry_records_both_statuses() {
        let buyer = Uuid::new_v4();
        let entry = history_entry(7, "pending", "cancelled", Some(buyer), "Changed my mind");
        assert_eq!(entry.order_id, 7);
        assert_eq!(entry.previous_status, "pending");
        assert_eq!(entry.new_status, "cancelled");
        assert_eq!(entry.changed_by_id, Some(buyer));
        assert_eq!(entry.notes.as_deref(), Some("Changed my mind"));
    }

    #[test]
    fn placed_orders_start_history_from_nothing() {
        let entry = history_entry(1, "", "pending", None, "Order placed");
        assert!(entry.previous_status.is_empty());
        assert_eq!(entry.changed_by_id, None);
    }

    #[test]
    fn delivered_and_cancelled_orders_are_stamped() {
        let now = Utc::now();

        let delivered = status_changes("delivered", now);
        assert_eq!(delivered.status.as_deref(), Some("delivered"));
        assert_eq!(delivered.delivered_at, Some(Some(now)));
        assert_eq!(delivered.cancelled_at, None);

        let cancelled = status_changes("cancelled", now);
        assert_eq!(cancelled.cancelled_at, Some(Some(now)));
        assert_eq!(cancelled.delivered_at, None);

        let shipped = status_changes("shipped", now);
        assert_eq!(shipped.delivered_at, None);
        assert_eq!(shipped.cancelled_at, None);
    }
}
