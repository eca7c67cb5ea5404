use anyhow::Context;
use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};
use chrono::Utc;
use diesel::{ExpressionMethods, QueryDsl, SelectableHelper};
use diesel_async::{AsyncConnection, RunQueryDsl};
use serde::Deserialize;
use serde_json::{Value, json};
use utoipa::ToSchema;
use utoipa_axum::router::OpenApiRouter;

use crate::{
    choices::{Choice, DeliveryStatus, OrderStatus, ensure},
    core::{
        app_error::{AppError, StdResponse},
        app_state::AppState,
    },
    models::{DeliveryEntity, OrderEntity, UpdateDeliveryEntity, UpdateOrderEntity},
    routes::orders::record_status,
    schema::{deliveries, orders},
};

pub fn routes_with_openapi() -> OpenApiRouter<AppState> {
    OpenApiRouter::new().nest(
        "/deliveries",
        OpenApiRouter::new().routes(utoipa_axum::routes!(update_delivery_status)),
    )
}

#[derive(Deserialize, ToSchema)]
struct UpdateDeliveryStatusReq {
    status: String,
    #[serde(default)]
    note: String,
}

fn append_tracking(updates: Value, entry: Value) -> Value {
    let mut list = match updates {
        Value::Array(list) => list,
        Value::Null => Vec::new(),
        other => vec![other],
    };
    list.push(entry);
    Value::Array(list)
}

/// Move a delivery along and append a tracking update.
#[utoipa::path(
    patch,
    path = "/{id}/status",
    tags = ["Deliveries"],
    params(
        ("id" = i32, Path, description = "Delivery ID to update")
    ),
    request_body = UpdateDeliveryStatusReq,
    responses(
        (status = 200, description = "Updated delivery status successfully", body = StdResponse<DeliveryEntity, String>),
        (status = 400, description = "Unknown delivery status"),
        (status = 404, description = "Delivery not found")
    )
)]
async fn update_delivery_status(
    Path(id): Path<i32>,
    State(state): State<AppState>,
    Json(body): Json<UpdateDeliveryStatusReq>,
) -> Result<impl IntoResponse, AppError> {
    ensure::<DeliveryStatus>(&body.status)?;

    let conn = &mut state
        .db_pool
        .get()
        .await
        .context("Failed to obtain a DB connection pool")?;

    let delivery = conn
        .transaction(move |conn| {
            Box::pin(async move {
                let current: DeliveryEntity = deliveries::table
                    .find(id)
                    .select(DeliveryEntity::as_select())
                    .for_update()
                    .first(conn)
                    .await?;

                let now = Utc::now();
                let delivered = body.status == DeliveryStatus::Delivered.as_str();
                let mut changes = UpdateDeliveryEntity {
                    status: Some(body.status.clone()),
                    tracking_updates: Some(append_tracking(
                        current.tracking_updates,
                        json!({ "status": body.status, "note": body.note, "at": now }),
                    )),
                    ..Default::default()
                };
                if body.status == DeliveryStatus::PickedUp.as_str() {
                    changes.actual_pickup_time = Some(Some(now));
                }
                if delivered {
                    changes.actual_delivery_time = Some(Some(now));
                }

                let delivery: DeliveryEntity = diesel::update(deliveries::table.find(id))
                    .set(&changes)
                    .returning(DeliveryEntity::as_returning())
                    .get_result(conn)
                    .await?;

                if delivered {
                    let order: OrderEntity = orders::table
                        .find(delivery.order_id)
                        .select(OrderEntity::as_select())
                        .for_update()
                        .first(conn)
                        .await?;

                    let new_status = OrderStatus::Delivered.as_str();
                    if order.status != new_status {
                        let changes = UpdateOrderEntity {
                            status: Some(new_status.to_string()),
                            delivered_at: Some(Some(now)),
                            ..Default::default()
                        };
                        diesel::update(orders::table.find(order.id))
                            .set((&changes, orders::updated_at.eq(now)))
                            .execute(conn)
                            .await?;

                        record_status(conn, order.id, &order.status, new_status, None, &body.note)
                            .await?;
                    }
                }

                Ok::<DeliveryEntity, AppError>(delivery)
            })
        })
        .await?;

    tracing::info!("Delivery {} is now {}", delivery.id, delivery.status);
    Ok(StdResponse {
        data: Some(delivery),
        message: Some("Updated delivery status successfully"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tracking_updates_are_appended_in_order() {
        let first = append_tracking(json!([]), json!({ "status": "assigned" }));
        let second = append_tracking(first, json!({ "status": "picked_up" }));
        assert_eq!(
            second,
            json!([{ "status": "assigned" }, { "status": "picked_up" }])
        );
    }

    #[test]
    fn non_list_tracking_is_kept_as_first_entry() {
        let updates = append_tracking(json!({ "status": "legacy" }), json!({ "status": "in_transit" }));
        assert_eq!(updates.as_array().map(Vec::len), Some(2));

        let fresh = append_tracking(Value::Null, json!({ "status": "assigned" }));
        assert_eq!(fresh, json!([{ "status": "assigned" }]));
    }
}
