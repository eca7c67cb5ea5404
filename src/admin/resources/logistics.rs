use axum::Router;
use chrono::NaiveDate;

use crate::{
    admin::{ResourceMeta, query::Timestamp},
    core::app_state::AppState,
    models::{
        CreateDeliveryEntity, CreateDeliveryPartnerEntity, CreateDeliveryZoneEntity,
        CreateMarketDemandForecastEntity, CreateMarketPriceEntity, CreateStorageBookingEntity,
        CreateWarehouseEntity, DeliveryEntity, DeliveryPartnerEntity, DeliveryZoneEntity,
        MarketDemandForecastEntity, MarketPriceEntity, StorageBookingEntity, UpdateDeliveryEntity,
        UpdateDeliveryPartnerEntity, UpdateDeliveryZoneEntity, UpdateMarketDemandForecastEntity,
        UpdateMarketPriceEntity, UpdateStorageBookingEntity, UpdateWarehouseEntity,
        WarehouseEntity,
    },
};

admin_resource! {
    table: delivery_partners,
    id: i32,
    entity: DeliveryPartnerEntity,
    title: "Delivery partners",
    group: "Delivery & market",
    display: ["name", "contact_person", "phone_number", "rating", "is_active"],
    search: [name, contact_person, phone_number, email],
    filters: [is_active: bool],
    ordering: [name, rating, created_at],
    default_order: name asc,
    date_field: [],
    price_field: [],
    actions: [
        make_active => is_active = true,
        make_inactive => is_active = false,
    ],
    relations: [service_areas => delivery_partner_service_areas(delivery_partner_id, county_id)],
    write: generic(CreateDeliveryPartnerEntity, UpdateDeliveryPartnerEntity)
}

admin_resource! {
    table: deliveries,
    id: i32,
    entity: DeliveryEntity,
    title: "Deliveries",
    group: "Delivery & market",
    display: [
        "driver_name", "order_id", "delivery_partner_id", "status",
        "estimated_delivery_time", "actual_delivery_time",
    ],
    search: [driver_name, driver_phone, recipient_name, delivery_address],
    filters: [status: String, delivery_partner_id: i32, order_id: i32],
    ordering: [created_at, estimated_delivery_time],
    default_order: created_at desc,
    date_field: [created_at: Timestamp],
    price_field: [],
    actions: [],
    relations: [],
    write: generic(CreateDeliveryEntity, UpdateDeliveryEntity)
}

admin_resource! {
    table: market_prices,
    id: i32,
    entity: MarketPriceEntity,
    title: "Market prices",
    group: "Delivery & market",
    display: [
        "market_name", "crop_id", "location_id", "price_per_unit", "unit_id",
        "quality_grade", "price_trend", "date_recorded",
    ],
    search: [market_name, source],
    filters: [crop_id: i32, location_id: i32, price_trend: String, quality_grade: String, date_recorded: NaiveDate],
    ordering: [date_recorded, price_per_unit, market_name],
    default_order: date_recorded desc,
    date_field: [date_recorded: NaiveDate],
    price_field: [price_per_unit],
    actions: [],
    relations: [],
    write: generic(CreateMarketPriceEntity, UpdateMarketPriceEntity)
}

admin_resource! {
    table: delivery_zones,
    id: i32,
    entity: DeliveryZoneEntity,
    title: "Delivery zones",
    group: "Delivery & market",
    display: ["name", "base_delivery_fee", "free_delivery_threshold", "estimated_delivery_days", "is_active"],
    search: [name, description],
    filters: [is_active: bool, estimated_delivery_days: i32],
    ordering: [name, base_delivery_fee, estimated_delivery_days],
    default_order: name asc,
    date_field: [],
    price_field: [base_delivery_fee],
    actions: [
        make_active => is_active = true,
        make_inactive => is_active = false,
    ],
    relations: [counties => delivery_zone_counties(delivery_zone_id, county_id)],
    write: generic(CreateDeliveryZoneEntity, UpdateDeliveryZoneEntity)
}

admin_resource! {
    table: market_demand_forecasts,
    id: i32,
    entity: MarketDemandForecastEntity,
    title: "Demand forecasts",
    group: "Delivery & market",
    display: [
        "forecast_period", "crop_id", "location_id", "expected_demand",
        "price_prediction", "confidence_level",
    ],
    search: [forecast_period],
    filters: [expected_demand: String, price_prediction: String, location_id: i32],
    ordering: [created_at, confidence_level, forecast_period],
    default_order: created_at desc,
    date_field: [created_at: Timestamp],
    price_field: [],
    actions: [],
    relations: [],
    write: generic(CreateMarketDemandForecastEntity, UpdateMarketDemandForecastEntity)
}

admin_resource! {
    table: warehouses,
    id: i32,
    entity: WarehouseEntity,
    title: "Warehouses",
    group: "Warehousing",
    display: ["name", "manager_id", "capacity", "monthly_rate", "is_active"],
    search: [name],
    filters: [is_active: bool],
    ordering: [name, capacity, created_at],
    default_order: name asc,
    date_field: [],
    price_field: [monthly_rate],
    actions: [
        make_active => is_active = true,
        make_inactive => is_active = false,
    ],
    relations: [],
    write: generic(CreateWarehouseEntity, UpdateWarehouseEntity)
}

admin_resource! {
    table: storage_bookings,
    id: i32,
    entity: StorageBookingEntity,
    title: "Storage bookings",
    group: "Warehousing",
    display: [
        "booking_number", "farmer_id", "warehouse_id", "product_id",
        "status", "start_date", "end_date", "total_cost",
    ],
    search: [booking_number],
    filters: [status: String, warehouse_id: i32, farmer_id: i32],
    ordering: [start_date, created_at, total_cost],
    default_order: start_date desc,
    date_field: [start_date: Timestamp],
    price_field: [total_cost],
    actions: [],
    relations: [],
    write: generic(CreateStorageBookingEntity, UpdateStorageBookingEntity)
}

pub const RESOURCES: &[ResourceMeta] = &[
    delivery_partners::META,
    deliveries::META,
    market_prices::META,
    delivery_zones::META,
    market_demand_forecasts::META,
    warehouses::META,
    storage_bookings::META,
];

pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(delivery_partners::routes())
        .merge(deliveries::routes())
        .merge(market_prices::routes())
        .merge(delivery_zones::routes())
        .merge(market_demand_forecasts::routes())
        .merge(warehouses::routes())
        .merge(storage_bookings::routes())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zone_counties_are_written_to_their_join_table() {
        let sql = delivery_zones::relations::counties::link_sql(3, &[1, 4]);
        assert!(
            sql.contains(r#"INSERT INTO "delivery_zone_counties" ("delivery_zone_id", "county_id")"#),
            "{sql}"
        );
        assert!(sql.contains("[3, 1, 3, 4]"), "{sql}");
    }

    #[test]
    fn partner_service_areas_have_their_own_route() {
        assert_eq!(delivery_partners::META.relations, &["service_areas"]);
        assert_eq!(delivery_partners::relations::service_areas::NAME, "service_areas");
        let sql = delivery_partners::relations::service_areas::link_sql(9, &[47]);
        assert!(sql.contains(r#""delivery_partner_service_areas""#), "{sql}");
    }

    #[test]
    fn nullable_rates_still_filter_by_price() {
        let raw = [("price_range".to_string(), "1000+".to_string())].into_iter().collect();
        let params = crate::admin::query::ListParams::from_query(raw).unwrap();
        let query = warehouses::filtered(&params).unwrap();
        let sql = diesel::debug_query::<diesel::pg::Pg, _>(&query).to_string();
        assert!(sql.contains(r#""warehouses"."monthly_rate" >= $"#), "{sql}");
    }
}
