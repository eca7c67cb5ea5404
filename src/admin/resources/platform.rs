//! Premium subscriptions and the mobile app.

use axum::Router;
use uuid::Uuid;

use crate::{
    admin::{ResourceMeta, query::Timestamp},
    core::app_state::AppState,
    models::{
        AppVersionEntity, CreateAppVersionEntity, CreateMobileDeviceEntity,
        CreateSubscriptionPlanEntity, CreateUserSubscriptionEntity, MobileDeviceEntity,
        SubscriptionPlanEntity, UpdateAppVersionEntity, UpdateMobileDeviceEntity,
        UpdateSubscriptionPlanEntity, UpdateUserSubscriptionEntity, UserSubscriptionEntity,
    },
};

admin_resource! {
    table: subscription_plans,
    id: i32,
    entity: SubscriptionPlanEntity,
    title: "Subscription plans",
    group: "Subscriptions",
    display: ["name", "plan_type", "price", "billing_cycle", "commission_rate", "is_active"],
    search: [name, description],
    filters: [plan_type: String, billing_cycle: String, is_active: bool],
    ordering: [name, price, created_at],
    default_order: price asc,
    date_field: [],
    price_field: [price],
    actions: [
        make_active => is_active = true,
        make_inactive => is_active = false,
    ],
    relations: [],
    write: generic(CreateSubscriptionPlanEntity, UpdateSubscriptionPlanEntity)
}

admin_resource! {
    table: user_subscriptions,
    id: i32,
    entity: UserSubscriptionEntity,
    title: "User subscriptions",
    group: "Subscriptions",
    display: ["user_id", "plan_id", "status", "start_date", "end_date", "auto_renew"],
    search: [cancellation_reason],
    filters: [status: String, auto_renew: bool, plan_id: i32, user_id: Uuid],
    ordering: [start_date, end_date, created_at],
    default_order: start_date desc,
    date_field: [start_date: Timestamp],
    price_field: [],
    actions: [],
    relations: [],
    write: generic(CreateUserSubscriptionEntity, UpdateUserSubscriptionEntity)
}

admin_resource! {
    table: mobile_devices,
    id: i32,
    entity: MobileDeviceEntity,
    title: "Mobile devices",
    group: "Mobile app",
    display: ["device_id", "user_id", "device_type", "app_version", "os_version", "is_active", "last_seen"],
    search: [device_id, device_token],
    filters: [device_type: String, is_active: bool, app_version: String, user_id: Uuid],
    ordering: [last_seen, created_at],
    default_order: last_seen desc,
    date_field: [],
    price_field: [],
    actions: [
        make_active => is_active = true,
        make_inactive => is_active = false,
    ],
    relations: [],
    write: generic(CreateMobileDeviceEntity, UpdateMobileDeviceEntity)
}

admin_resource! {
    table: app_versions,
    id: i32,
    entity: AppVersionEntity,
    title: "App versions",
    group: "Mobile app",
    display: ["version_number", "platform", "build_number", "force_update", "is_active", "release_date"],
    search: [version_number, build_number, release_notes],
    filters: [platform: String, force_update: bool, is_active: bool],
    ordering: [release_date, version_number, created_at],
    default_order: release_date desc,
    date_field: [release_date: Timestamp],
    price_field: [],
    actions: [],
    relations: [],
    write: generic(CreateAppVersionEntity, UpdateAppVersionEntity)
}

pub const RESOURCES: &[ResourceMeta] = &[
    subscription_plans::META,
    user_subscriptions::META,
    mobile_devices::META,
    app_versions::META,
];

pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(subscription_plans::routes())
        .merge(user_subscriptions::routes())
        .merge(mobile_devices::routes())
        .merge(app_versions::routes())
}
