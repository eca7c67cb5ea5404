/// Declares an admin resource over one table.
///
/// Expands to a module named after the table with its [`ResourceMeta`](super::ResourceMeta),
/// the list query builder, the handlers and a `routes()` function mounted under
/// `/admin/{table}` by [`super::routes`].
///
/// `write` is one of `readonly`, `generic(CreateModel, UpdateModel)` or
/// `custom(create_handler, update_handler)`.
///
/// Each `relations` entry `name => join_table(owner_col, target_col)` adds
/// `GET`/`PUT /admin/{table}/{id}/{name}` over a many-to-many join table.
macro_rules! admin_resource {
    (@opt) => { None };
    (@opt $col:ident) => { Some(stringify!($col)) };

    (@first $first:literal $(, $rest:literal)*) => { $first };

    (@order_str $col:ident asc) => { stringify!($col) };
    (@order_str $col:ident desc) => { concat!("-", stringify!($col)) };

    (@is_desc asc) => { false };
    (@is_desc desc) => { true };

    (@readonly readonly) => { true };
    (@readonly $($other:tt)+) => { false };

    (@write_routes $router:ident, readonly) => { $router };
    (@write_routes $router:ident, generic($new:ident, $update:ident)) => {
        $router
            .route("/", routing::post(create))
            .route("/{id}", routing::patch(update))
    };
    (@write_routes $router:ident, custom($create:path, $update:path)) => {
        $router
            .route("/", routing::post($create))
            .route("/{id}", routing::patch($update))
    };

    (@write_handlers $id:ident, $entity:ident, readonly) => {};
    (@write_handlers $id:ident, $entity:ident, custom($create:path, $update:path)) => {};
    (@write_handlers $id:ident, $entity:ident, generic($new:ident, $update:ident)) => {
        async fn create(
            State(state): State<AppState>,
            Extension(ctx): Extension<AuditContext>,
            Json(mut body): Json<$new>,
        ) -> Result<impl IntoResponse, AppError> {
            body.prepare()?;

            let conn = &mut state
                .db_pool
                .get()
                .await
                .context("Failed to obtain a DB connection pool")?;

            let row = conn
                .transaction(move |conn| {
                    Box::pin(async move {
                        let row: $entity = diesel::insert_into(t::table)
                            .values(&body)
                            .returning(<$entity>::as_returning())
                            .get_result(conn)
                            .await?;

                        let entry = audit::Entry::new(AuditAction::Create, TABLE)
                            .object(row.id, &row, REPR)
                            .changes(audit::snapshot(&row));
                        audit::record(conn, &ctx, entry).await?;

                        Ok::<$entity, AppError>(row)
                    })
                })
                .await?;

            tracing::info!("Created {} {}", TABLE, row.id);
            Ok((
                StatusCode::CREATED,
                StdResponse {
                    data: Some(row),
                    message: Some(concat!("Created ", stringify!($entity))),
                },
            ))
        }

        async fn update(
            State(state): State<AppState>,
            Extension(ctx): Extension<AuditContext>,
            Path(id): Path<$id>,
            Json(mut body): Json<$update>,
        ) -> Result<impl IntoResponse, AppError> {
            body.prepare()?;

            let conn = &mut state
                .db_pool
                .get()
                .await
                .context("Failed to obtain a DB connection pool")?;

            let row = conn
                .transaction(move |conn| {
                    Box::pin(async move {
                        let before: $entity = t::table
                            .find(id)
                            .select(<$entity>::as_select())
                            .first(conn)
                            .await?;

                        let after: $entity = diesel::update(t::table.find(id))
                            .set(&body)
                            .returning(<$entity>::as_returning())
                            .get_result(conn)
                            .await?;

                        let changes = audit::diff(&audit::snapshot(&before), &audit::snapshot(&after));
                        let entry = audit::Entry::new(AuditAction::Update, TABLE)
                            .object(after.id, &after, REPR)
                            .changes(changes);
                        audit::record(conn, &ctx, entry).await?;

                        Ok::<$entity, AppError>(after)
                    })
                })
                .await?;

            Ok(StdResponse {
                data: Some(row),
                message: Some(concat!("Updated ", stringify!($entity))),
            })
        }
    };

    (
        table: $table:ident,
        id: $id:ident,
        entity: $entity:ident,
        title: $title:literal,
        group: $group:literal,
        display: [$($display:literal),+ $(,)?],
        search: [$($search:ident),* $(,)?],
        filters: [$($filter:ident: $filter_ty:ident),* $(,)?],
        ordering: [$($order:ident),+ $(,)?],
        default_order: $default_col:ident $default_dir:ident,
        date_field: [$($date_col:ident: $date_ty:ident)?],
        price_field: [$($price_col:ident)?],
        actions: [$($action:ident => $action_col:ident = $action_val:literal),* $(,)?],
        relations: [$($rel:ident => $join:ident($owner_col:ident, $target_col:ident)),* $(,)?],
        write: $($write:tt)+
    ) => {
        pub mod $table {
            #![allow(unused_imports, unused_mut)]

            use std::collections::HashMap;

            use anyhow::Context;
            use axum::{
                Extension, Json, Router,
                extract::{Path, Query, State},
                http::StatusCode,
                response::IntoResponse,
                routing,
            };
            use chrono::Utc;
            use diesel::{
                BoolExpressionMethods, BoxableExpression, ExpressionMethods,
                NullableExpressionMethods, PgTextExpressionMethods, QueryDsl, SelectableHelper,
                pg::Pg,
                sql_types::{Bool, Nullable},
            };
            use diesel_async::{AsyncConnection, RunQueryDsl};
            use serde_json::json;

            use super::*;
            use crate::{
                admin::{
                    ResourceMeta, audit, export,
                    query::{ActionRequest, ListParams, Page, RangeBound},
                },
                choices::AuditAction,
                core::{
                    app_error::{AppError, StdResponse},
                    app_state::AppState,
                    middleware::AuditContext,
                },
                models::Prepare,
                schema::$table as t,
            };

            pub const TABLE: &str = stringify!($table);
            const REPR: &str = admin_resource!(@first $($display),+);
            const ACTIONS: &[&str] = &[$(stringify!($action)),*];

            pub const META: ResourceMeta = ResourceMeta {
                name: TABLE,
                title: $title,
                group: $group,
                list_display: &[$($display),+],
                search_fields: &[$(stringify!($search)),*],
                list_filter: &[$(stringify!($filter)),*],
                ordering: &[$(stringify!($order)),+],
                default_ordering: admin_resource!(@order_str $default_col $default_dir),
                date_hierarchy: admin_resource!(@opt $($date_col)?),
                price_field: admin_resource!(@opt $($price_col)?),
                actions: ACTIONS,
                relations: &[$(stringify!($rel)),*],
                readonly: admin_resource!(@readonly $($write)+),
            };

            type Clause = Box<dyn BoxableExpression<t::table, Pg, SqlType = Nullable<Bool>>>;

            fn search_clause(pattern: &str) -> Option<Clause> {
                let clauses: Vec<Clause> = vec![
                    $(Box::new(t::$search.ilike(pattern.to_string()).nullable())),*
                ];
                clauses
                    .into_iter()
                    .reduce(|prev, next| -> Clause { Box::new(prev.or(next)) })
            }

            /// Applies ids, search, filters and ranges from `params`.
            pub fn filtered(params: &ListParams) -> Result<t::BoxedQuery<'static, Pg>, AppError> {
                params.check_filters(META.list_filter)?;
                if params.date_range.is_some() && META.date_hierarchy.is_none() {
                    return Err(AppError::BadRequest(format!("{} has no date field", TABLE)));
                }
                if params.price_range.is_some() && META.price_field.is_none() {
                    return Err(AppError::BadRequest(format!("{} has no price field", TABLE)));
                }

                let mut query = t::table.into_boxed();

                if let Some(ids) = params.ids::<$id>()? {
                    query = query.filter(t::id.eq_any(ids));
                }

                if let Some(clause) = params.search_pattern().and_then(|p| search_clause(&p)) {
                    query = query.filter(clause);
                }

                $(
                    if let Some(value) = params.filter::<$filter_ty>(stringify!($filter))? {
                        query = query.filter(t::$filter.eq(value));
                    }
                )*

                $(
                    if let Some(range) = params.date_range {
                        let since = <$date_ty as RangeBound>::since(range, Utc::now());
                        query = query.filter(t::$date_col.ge(since));
                    }
                )?

                $(
                    if let Some(range) = params.price_range {
                        query = query.filter(t::$price_col.ge(range.min));
                        if let Some(max) = range.max {
                            query = query.filter(t::$price_col.lt(max));
                        }
                    }
                )?

                Ok(query)
            }

            /// Orders by the requested field (or the default) with `id` as tie-breaker.
            pub fn ordered(
                query: t::BoxedQuery<'static, Pg>,
                params: &ListParams,
            ) -> Result<t::BoxedQuery<'static, Pg>, AppError> {
                let (field, desc) = params.order().unwrap_or((
                    stringify!($default_col),
                    admin_resource!(@is_desc $default_dir),
                ));

                $(
                    if field == stringify!($order) {
                        let query = if desc {
                            query.order_by(t::$order.desc())
                        } else {
                            query.order_by(t::$order.asc())
                        };
                        return Ok(query.then_order_by(t::id.asc()));
                    }
                )+

                Err(AppError::BadRequest(format!(
                    "Cannot order {} by `{}` (allowed: {})",
                    TABLE,
                    field,
                    META.ordering.join(", ")
                )))
            }

            pub fn routes() -> Router<AppState> {
                let router = Router::new()
                    .route("/", routing::get(list))
                    .route("/export", routing::get(export_csv))
                    .route("/{id}", routing::get(detail).delete(remove))
                    .route("/actions/{action}", routing::post(run_action));
                let router = admin_resource!(@write_routes router, $($write)+);
                $(
                    let router = router.merge(relations::$rel::routes());
                )*
                Router::new().nest(concat!("/", stringify!($table)), router)
            }

            async fn list(
                State(state): State<AppState>,
                Query(raw): Query<HashMap<String, String>>,
            ) -> Result<impl IntoResponse, AppError> {
                let params = ListParams::from_query(raw)?;
                let paging = params.paging(&state.config.admin)?;

                let conn = &mut state
                    .db_pool
                    .get()
                    .await
                    .context("Failed to obtain a DB connection pool")?;

                let total: i64 = filtered(&params)?
                    .count()
                    .get_result(conn)
                    .await
                    .context(concat!("Failed to count ", stringify!($table)))?;

                let items: Vec<$entity> = ordered(filtered(&params)?, &params)?
                    .limit(paging.limit())
                    .offset(paging.offset())
                    .select(<$entity>::as_select())
                    .load(conn)
                    .await
                    .context(concat!("Failed to list ", stringify!($table)))?;

                Ok(StdResponse {
                    data: Some(Page::new(items, total, paging)),
                    message: Some(concat!("List ", stringify!($table), " successfully")),
                })
            }

            async fn detail(
                State(state): State<AppState>,
                Path(id): Path<$id>,
            ) -> Result<impl IntoResponse, AppError> {
                let conn = &mut state
                    .db_pool
                    .get()
                    .await
                    .context("Failed to obtain a DB connection pool")?;

                let row: $entity = t::table
                    .find(id)
                    .select(<$entity>::as_select())
                    .first(conn)
                    .await?;

                Ok(StdResponse {
                    data: Some(row),
                    message: Some(concat!("Get ", stringify!($entity), " successfully")),
                })
            }

            async fn remove(
                State(state): State<AppState>,
                Extension(ctx): Extension<AuditContext>,
                Path(id): Path<$id>,
            ) -> Result<impl IntoResponse, AppError> {
                let conn = &mut state
                    .db_pool
                    .get()
                    .await
                    .context("Failed to obtain a DB connection pool")?;

                let row = conn
                    .transaction(move |conn| {
                        Box::pin(async move {
                            let row: $entity = diesel::delete(t::table.find(id))
                                .returning(<$entity>::as_returning())
                                .get_result(conn)
                                .await?;

                            let entry = audit::Entry::new(AuditAction::Delete, TABLE)
                                .object(row.id, &row, REPR)
                                .changes(audit::snapshot(&row));
                            audit::record(conn, &ctx, entry).await?;

                            Ok::<$entity, AppError>(row)
                        })
                    })
                    .await?;

                tracing::info!("Deleted {} {}", TABLE, row.id);
                Ok(StdResponse {
                    data: Some(row),
                    message: Some(concat!("Deleted ", stringify!($entity))),
                })
            }

            async fn export_csv(
                State(state): State<AppState>,
                Extension(ctx): Extension<AuditContext>,
                Query(raw): Query<HashMap<String, String>>,
            ) -> Result<impl IntoResponse, AppError> {
                let params = ListParams::from_query(raw.clone())?;
                let query = ordered(filtered(&params)?, &params)?;

                let conn = &mut state
                    .db_pool
                    .get()
                    .await
                    .context("Failed to obtain a DB connection pool")?;

                let body = conn
                    .transaction(move |conn| {
                        Box::pin(async move {
                            let rows: Vec<$entity> = query
                                .select(<$entity>::as_select())
                                .load(conn)
                                .await
                                .context(concat!("Failed to export ", stringify!($table)))?;

                            let body = export::to_csv(&export::field_names::<$entity>(), &rows)?;

                            let entry = audit::Entry::new(AuditAction::Export, TABLE)
                                .changes(json!({ "filters": raw, "rows": rows.len() }));
                            audit::record(conn, &ctx, entry).await?;

                            Ok::<String, AppError>(body)
                        })
                    })
                    .await?;

                Ok(export::attachment(TABLE, body))
            }

            async fn run_action(
                State(state): State<AppState>,
                Extension(ctx): Extension<AuditContext>,
                Path(action): Path<String>,
                Json(body): Json<ActionRequest<$id>>,
            ) -> Result<impl IntoResponse, AppError> {
                if !ACTIONS.contains(&action.as_str()) {
                    return Err(AppError::BadRequest(format!(
                        "Unknown action `{}` for {} (available: {})",
                        action,
                        TABLE,
                        ACTIONS.join(", ")
                    )));
                }
                if body.ids.is_empty() {
                    return Err(AppError::BadRequest("Select at least one row".into()));
                }

                let conn = &mut state
                    .db_pool
                    .get()
                    .await
                    .context("Failed to obtain a DB connection pool")?;

                let applied = action.clone();
                let affected = conn
                    .transaction(move |conn| {
                        Box::pin(async move {
                            let mut affected: Option<usize> = None;
                            $(
                                if action == stringify!($action) {
                                    let count = diesel::update(t::table.filter(t::id.eq_any(&body.ids)))
                                        .set(t::$action_col.eq($action_val))
                                        .execute(conn)
                                        .await?;
                                    affected = Some(count);
                                }
                            )*
                            let affected = affected.ok_or_else(|| {
                                AppError::BadRequest(format!("Unknown action `{}`", action))
                            })?;

                            let entry = audit::Entry::new(AuditAction::Update, TABLE).changes(json!({
                                "action": action,
                                "ids": body.ids,
                                "affected": affected,
                            }));
                            audit::record(conn, &ctx, entry).await?;

                            Ok::<usize, AppError>(affected)
                        })
                    })
                    .await?;

                tracing::info!("Applied {} to {} {} rows", applied, affected, TABLE);
                Ok(StdResponse {
                    data: Some(json!({ "action": applied, "affected": affected })),
                    message: Some("Action applied"),
                })
            }

            /// SQL a bulk action runs, for checking the declared column.
            #[cfg(test)]
            #[allow(unused_variables)]
            pub fn action_sql(action: &str, ids: &[$id]) -> Option<String> {
                $(
                    if action == stringify!($action) {
                        let query = diesel::update(t::table.filter(t::id.eq_any(ids)))
                            .set(t::$action_col.eq($action_val));
                        return Some(diesel::debug_query::<Pg, _>(&query).to_string());
                    }
                )*
                None
            }

            /// Many-to-many links owned by this table.
            pub mod relations {
                $(
                    pub mod $rel {
                        use super::super::*;
                        use crate::{admin::query::RelationRequest, schema::$join as j};

                        pub const NAME: &str = stringify!($rel);

                        pub fn routes() -> Router<AppState> {
                            Router::new().route(
                                concat!("/{id}/", stringify!($rel)),
                                routing::get(linked).put(replace),
                            )
                        }

                        async fn linked(
                            State(state): State<AppState>,
                            Path(id): Path<$id>,
                        ) -> Result<impl IntoResponse, AppError> {
                            let conn = &mut state
                                .db_pool
                                .get()
                                .await
                                .context("Failed to obtain a DB connection pool")?;

                            let _: $id = t::table.find(id).select(t::id).first(conn).await?;
                            let ids: Vec<i32> = j::table
                                .filter(j::$owner_col.eq(id))
                                .select(j::$target_col)
                                .order_by(j::$target_col.asc())
                                .load(conn)
                                .await
                                .context(concat!("Failed to list ", stringify!($join)))?;

                            Ok(StdResponse {
                                data: Some(ids),
                                message: Some(concat!("List ", stringify!($table), " ", stringify!($rel), " successfully")),
                            })
                        }

                        /// Replaces the whole set of linked ids.
                        async fn replace(
                            State(state): State<AppState>,
                            Extension(ctx): Extension<AuditContext>,
                            Path(id): Path<$id>,
                            Json(body): Json<RelationRequest<i32>>,
                        ) -> Result<impl IntoResponse, AppError> {
                            let wanted = body.targets();

                            let conn = &mut state
                                .db_pool
                                .get()
                                .await
                                .context("Failed to obtain a DB connection pool")?;

                            let linked = conn
                                .transaction(move |conn| {
                                    Box::pin(async move {
                                        let owner: $entity = t::table
                                            .find(id)
                                            .select(<$entity>::as_select())
                                            .for_update()
                                            .first(conn)
                                            .await?;

                                        let before: Vec<i32> = j::table
                                            .filter(j::$owner_col.eq(id))
                                            .select(j::$target_col)
                                            .order_by(j::$target_col.asc())
                                            .load(conn)
                                            .await?;

                                        diesel::delete(j::table.filter(j::$owner_col.eq(id)))
                                            .execute(conn)
                                            .await?;
                                        if !wanted.is_empty() {
                                            let rows: Vec<_> = wanted
                                                .iter()
                                                .map(|target| (j::$owner_col.eq(id), j::$target_col.eq(*target)))
                                                .collect();
                                            diesel::insert_into(j::table).values(rows).execute(conn).await?;
                                        }

                                        let entry = audit::Entry::new(AuditAction::Update, TABLE)
                                            .object(id, &owner, REPR)
                                            .changes(audit::link_changes(NAME, &before, &wanted));
                                        audit::record(conn, &ctx, entry).await?;

                                        Ok::<Vec<i32>, AppError>(wanted)
                                    })
                                })
                                .await?;

                            tracing::info!("Linked {} {} to {} {}", TABLE, id, linked.len(), NAME);
                            Ok(StdResponse {
                                data: Some(linked),
                                message: Some(concat!("Updated ", stringify!($table), " ", stringify!($rel))),
                            })
                        }

                        /// SQL inserting the links, for checking the declared join table.
                        #[cfg(test)]
                        pub fn link_sql(id: $id, targets: &[i32]) -> String {
                            let rows: Vec<_> = targets
                                .iter()
                                .map(|target| (j::$owner_col.eq(id), j::$target_col.eq(*target)))
                                .collect();
                            let query = diesel::insert_into(j::table).values(rows);
                            diesel::debug_query::<Pg, _>(&query).to_string()
                        }
                    }
                )*
            }

            admin_resource!(@write_handlers $id, $entity, $($write)+);
        }
    };
}
