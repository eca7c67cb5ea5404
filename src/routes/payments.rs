use anyhow::Context;
use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};
use chrono::Utc;
use diesel::{ExpressionMethods, QueryDsl, SelectableHelper};
use diesel_async::{AsyncConnection, AsyncPgConnection, RunQueryDsl};
use serde::Deserialize;
use serde_json::Value;
use utoipa::ToSchema;
use utoipa_axum::router::OpenApiRouter;

use crate::{
    choices::{Choice, OrderPaymentStatus, OrderStatus, PaymentStatus},
    core::{
        app_error::{AppError, StdResponse},
        app_state::AppState,
    },
    models::{OrderEntity, PaymentEntity, UpdateOrderEntity, UpdatePaymentEntity},
    routes::orders::record_status,
    schema::{orders, payments},
};

/// Gateway callbacks settling a payment.
pub fn routes_with_openapi() -> OpenApiRouter<AppState> {
    OpenApiRouter::new().nest(
        "/payments",
        OpenApiRouter::new()
            .routes(utoipa_axum::routes!(confirm_payment))
            .routes(utoipa_axum::routes!(fail_payment)),
    )
}

/// Locks a payment that is still waiting for the gateway.
async fn open_payment(
    conn: &mut AsyncPgConnection,
    transaction_id: &str,
) -> Result<PaymentEntity, AppError> {
    payments::table
        .filter(payments::transaction_id.eq(transaction_id))
        .filter(payments::status.eq_any([
            PaymentStatus::Pending.as_str(),
            PaymentStatus::Processing.as_str(),
        ]))
        .select(PaymentEntity::as_select())
        .for_update()
        .first(conn)
        .await
        .map_err(AppError::from)
}

fn with_failure_reason(response: Value, reason: &str) -> Value {
    let mut response = match response {
        Value::Object(map) => map,
        _ => serde_json::Map::new(),
    };
    response.insert("failure_reason".into(), Value::String(reason.to_string()));
    Value::Object(response)
}

/// Mark a payment as completed and the order as paid.
#[utoipa::path(
    post,
    path = "/{transaction_id}/confirm",
    tags = ["Payments"],
    params(
        ("transaction_id" = String, Path, description = "Transaction reference issued at payment")
    ),
    responses(
        (status = 200, description = "Confirmed payment successfully", body = StdResponse<PaymentEntity, String>),
        (status = 404, description = "No open payment with this transaction id")
    )
)]
async fn confirm_payment(
    Path(transaction_id): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let conn = &mut state
        .db_pool
        .get()
        .await
        .context("Failed to obtain a DB connection pool")?;

    let payment = conn
        .transaction(move |conn| {
            Box::pin(async move {
                let payment = open_payment(conn, &transaction_id).await?;

                let now = Utc::now();
                let payment: PaymentEntity = diesel::update(payments::table.find(payment.id))
                    .set(&UpdatePaymentEntity {
                        status: Some(PaymentStatus::Completed.as_str().to_string()),
                        paid_at: Some(Some(now)),
                        ..Default::default()
                    })
                    .returning(PaymentEntity::as_returning())
                    .get_result(conn)
                    .await?;

                let order: OrderEntity = orders::table
                    .find(payment.order_id)
                    .select(OrderEntity::as_select())
                    .for_update()
                    .first(conn)
                    .await?;

                let next = order
                    .status
                    .parse::<OrderStatus>()
                    .ok()
                    .and_then(|status| status.after_payment());
                let changes = UpdateOrderEntity {
                    payment_status: Some(OrderPaymentStatus::Paid.as_str().to_string()),
                    status: next.map(|status| status.as_str().to_string()),
                    ..Default::default()
                };
                diesel::update(orders::table.find(order.id))
                    .set((&changes, orders::updated_at.eq(now)))
                    .execute(conn)
                    .await?;

                if let Some(next) = next {
                    record_status(
                        conn,
                        order.id,
                        &order.status,
                        next.as_str(),
                        None,
                        &format!("Payment {} confirmed", payment.transaction_id),
                    )
                    .await?;
                }

                Ok::<PaymentEntity, AppError>(payment)
            })
        })
        .await?;

    tracing::info!("Payment {} completed", payment.transaction_id);
    Ok(StdResponse {
        data: Some(payment),
        message: Some("Confirmed payment successfully"),
    })
}

#[derive(Deserialize, ToSchema)]
struct FailPaymentReq {
    #[serde(default)]
    reason: String,
}

/// Mark a payment as failed.
#[utoipa::path(
    post,
    path = "/{transaction_id}/fail",
    tags = ["Payments"],
    params(
        ("transaction_id" = String, Path, description = "Transaction reference issued at payment")
    ),
    request_body = FailPaymentReq,
    responses(
        (status = 200, description = "Recorded failed payment", body = StdResponse<PaymentEntity, String>),
        (status = 404, description = "No open payment with this transaction id")
    )
)]
async fn fail_payment(
    Path(transaction_id): Path<String>,
    State(state): State<AppState>,
    Json(body): Json<FailPaymentReq>,
) -> Result<impl IntoResponse, AppError> {
    let conn = &mut state
        .db_pool
        .get()
        .await
        .context("Failed to obtain a DB connection pool")?;

    let payment = conn
        .transaction(move |conn| {
            Box::pin(async move {
                let payment = open_payment(conn, &transaction_id).await?;

                let payment: PaymentEntity = diesel::update(payments::table.find(payment.id))
                    .set(&UpdatePaymentEntity {
                        status: Some(PaymentStatus::Failed.as_str().to_string()),
                        gateway_response: Some(with_failure_reason(
                            payment.gateway_response,
                            &body.reason,
                        )),
                        ..Default::default()
                    })
                    .returning(PaymentEntity::as_returning())
                    .get_result(conn)
                    .await?;

                diesel::update(orders::table.find(payment.order_id))
                    .set((
                        orders::payment_status.eq(OrderPaymentStatus::Failed.as_str()),
                        orders::updated_at.eq(Utc::now()),
                    ))
                    .execute(conn)
                    .await?;

                Ok::<PaymentEntity, AppError>(payment)
            })
        })
        .await?;

    tracing::warn!("Payment {} failed", payment.transaction_id);
    Ok(StdResponse {
        data: Some(payment),
        message: Some("Recorded failed payment"),
    })
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn failure_reason_is_merged_into_gateway_response() {
        let response = with_failure_reason(json!({ "code": "1032" }), "Cancelled by user");
        assert_eq!(
            response,
            json!({ "code": "1032", "failure_reason": "Cancelled by user" })
        );
    }

    #[test]
    fn failure_reason_replaces_non_object_response() {
        let response = with_failure_reason(json!("timeout"), "Gateway timeout");
        assert_eq!(response, json!({ "failure_reason": "Gateway timeout" }));
    }
}
