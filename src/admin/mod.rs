//! Back-office CRUD over every table.
//!
//! Each resource is declared with [`admin_resource!`] in [`resources`] and gets
//! list, detail, create, update, delete, CSV export and bulk actions under
//! `/admin/{table}`. All writes are recorded in `audit_logs`.

#[macro_use]
mod macros;

pub mod audit;
pub mod catalog;
pub mod export;
pub mod openapi;
pub mod query;
pub mod resources;

use anyhow::Context;
use axum::{Router, extract::State, response::IntoResponse, routing};
use diesel::{ExpressionMethods, QueryDsl, dsl::count_star};
use diesel_async::RunQueryDsl;
use serde::Serialize;

use crate::{
    choices::{Choice, OrderStatus, ProductStatus, UserType},
    core::{
        app_error::{AppError, StdResponse},
        app_state::AppState,
        middleware,
    },
    schema::{orders, products, users},
};

/// Describes how a resource is listed, filtered and acted upon.
#[derive(Serialize, Debug, Clone, Copy)]
pub struct ResourceMeta {
    pub name: &'static str,
    pub title: &'static str,
    pub group: &'static str,
    pub list_display: &'static [&'static str],
    pub search_fields: &'static [&'static str],
    pub list_filter: &'static [&'static str],
    pub ordering: &'static [&'static str],
    /// Field name, prefixed with `-` when descending.
    pub default_ordering: &'static str,
    pub date_hierarchy: Option<&'static str>,
    pub price_field: Option<&'static str>,
    pub actions: &'static [&'static str],
    /// Many-to-many links served under `/{id}/{relation}`.
    pub relations: &'static [&'static str],
    pub readonly: bool,
}

#[derive(Serialize, Debug)]
pub struct StatusCount {
    pub status: String,
    pub count: i64,
}

#[derive(Serialize, Debug)]
pub struct Dashboard {
    pub total_users: i64,
    pub total_farmers: i64,
    pub total_buyers: i64,
    pub active_products: i64,
    pub pending_orders: i64,
    pub orders_by_status: Vec<StatusCount>,
}

pub fn routes() -> Router<AppState> {
    let router = Router::new()
        .route("/", routing::get(registry))
        .route("/dashboard", routing::get(dashboard))
        .merge(resources::routes())
        .route_layer(axum::middleware::from_fn(middleware::admin_context));

    Router::new().nest("/admin", router)
}

async fn registry() -> impl IntoResponse {
    let items: Vec<ResourceMeta> = resources::all().copied().collect();
    StdResponse {
        data: Some(items),
        message: Some("List admin resources successfully"),
    }
}

async fn dashboard(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let conn = &mut state
        .db_pool
        .get()
        .await
        .context("Failed to obtain a DB connection pool")?;

    let total_users: i64 = users::table
        .count()
        .get_result(conn)
        .await
        .context("Failed to count users")?;

    let total_farmers: i64 = users::table
        .filter(users::user_type.eq(UserType::Farmer.as_str()))
        .count()
        .get_result(conn)
        .await
        .context("Failed to count farmers")?;

    let total_buyers: i64 = users::table
        .filter(users::user_type.eq(UserType::Buyer.as_str()))
        .count()
        .get_result(conn)
        .await
        .context("Failed to count buyers")?;

    let active_products: i64 = products::table
        .filter(products::status.eq(ProductStatus::Active.as_str()))
        .count()
        .get_result(conn)
        .await
        .context("Failed to count active products")?;

    let pending_orders: i64 = orders::table
        .filter(orders::status.eq(OrderStatus::Pending.as_str()))
        .count()
        .get_result(conn)
        .await
        .context("Failed to count pending orders")?;

    let orders_by_status = orders::table
        .group_by(orders::status)
        .select((orders::status, count_star()))
        .order_by(orders::status.asc())
        .load::<(String, i64)>(conn)
        .await
        .context("Failed to group orders by status")?
        .into_iter()
        .map(|(status, count)| StatusCount { status, count })
        .collect();

    Ok(StdResponse {
        data: Some(Dashboard {
            total_users,
            total_farmers,
            total_buyers,
            active_products,
            pending_orders,
            orders_by_status,
        }),
        message: Some("Get dashboard successfully"),
    })
}
