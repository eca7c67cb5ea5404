use axum::Router;
use chrono::NaiveDate;
use uuid::Uuid;

use crate::{
    admin::{ResourceMeta, query::Timestamp},
    core::app_state::AppState,
    models::{
        AuditLogEntity, CreateSystemConfigurationEntity, CreateSystemMetricEntity,
        CreateUserActivityEntity, SystemConfigurationEntity, SystemMetricEntity,
        UpdateSystemConfigurationEntity, UpdateSystemMetricEntity, UpdateUserActivityEntity,
        UserActivityEntity,
    },
};

admin_resource! {
    table: user_activities,
    id: i32,
    entity: UserActivityEntity,
    title: "User activities",
    group: "Analytics & audit",
    display: ["activity_type", "user_id", "description", "timestamp"],
    search: [activity_type, description],
    filters: [activity_type: String, user_id: Uuid],
    ordering: [timestamp],
    default_order: timestamp desc,
    date_field: [timestamp: Timestamp],
    price_field: [],
    actions: [],
    relations: [],
    write: generic(CreateUserActivityEntity, UpdateUserActivityEntity)
}

admin_resource! {
    table: system_metrics,
    id: i32,
    entity: SystemMetricEntity,
    title: "System metrics",
    group: "Analytics & audit",
    display: ["metric_name", "metric_value", "metric_type", "period", "date_recorded"],
    search: [metric_name, metric_type],
    filters: [metric_type: String, period: String, date_recorded: NaiveDate],
    ordering: [date_recorded, metric_name, metric_value],
    default_order: date_recorded desc,
    date_field: [date_recorded: NaiveDate],
    price_field: [],
    actions: [],
    relations: [],
    write: generic(CreateSystemMetricEntity, UpdateSystemMetricEntity)
}

admin_resource! {
    table: audit_logs,
    id: i32,
    entity: AuditLogEntity,
    title: "Audit logs",
    group: "Analytics & audit",
    display: ["object_repr", "user_id", "action", "object_type", "timestamp"],
    search: [object_type, object_id, object_repr],
    filters: [action: String, object_type: String, object_id: String, user_id: Uuid],
    ordering: [timestamp, object_type],
    default_order: timestamp desc,
    date_field: [timestamp: Timestamp],
    price_field: [],
    actions: [],
    relations: [],
    write: readonly
}

admin_resource! {
    table: system_configurations,
    id: i32,
    entity: SystemConfigurationEntity,
    title: "System configuration",
    group: "Analytics & audit",
    display: ["key", "config_type", "value", "is_active", "updated_at"],
    search: [key, description],
    filters: [config_type: String, is_active: bool],
    ordering: [key, updated_at],
    default_order: key asc,
    date_field: [],
    price_field: [],
    actions: [
        make_active => is_active = true,
        make_inactive => is_active = false,
    ],
    relations: [],
    write: generic(CreateSystemConfigurationEntity, UpdateSystemConfigurationEntity)
}

pub const RESOURCES: &[ResourceMeta] = &[
    user_activities::META,
    system_metrics::META,
    audit_logs::META,
    system_configurations::META,
];

pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(user_activities::routes())
        .merge(system_metrics::routes())
        .merge(audit_logs::routes())
        .merge(system_configurations::routes())
}
