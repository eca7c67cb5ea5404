use axum::Router;
use uuid::Uuid;

use crate::{
    admin::{ResourceMeta, query::Timestamp},
    core::app_state::AppState,
    models::{
        CountyEntity, CreateCountyEntity, CreateLocationEntity, CreateSubcountyEntity,
        CreateWardEntity, LocationEntity, SubcountyEntity, UpdateCountyEntity,
        UpdateLocationEntity, UpdateSubcountyEntity, UpdateWardEntity, WardEntity,
    },
};

admin_resource! {
    table: counties,
    id: i32,
    entity: CountyEntity,
    title: "Counties",
    group: "Geography",
    display: ["name", "code", "population", "area_sq_km"],
    search: [name, code],
    filters: [],
    ordering: [name, code, population, area_sq_km],
    default_order: name asc,
    date_field: [],
    price_field: [],
    actions: [],
    relations: [],
    write: generic(CreateCountyEntity, UpdateCountyEntity)
}

admin_resource! {
    table: subcounties,
    id: i32,
    entity: SubcountyEntity,
    title: "Subcounties",
    group: "Geography",
    display: ["name", "county_id", "code"],
    search: [name, code],
    filters: [county_id: i32],
    ordering: [name, code],
    default_order: name asc,
    date_field: [],
    price_field: [],
    actions: [],
    relations: [],
    write: generic(CreateSubcountyEntity, UpdateSubcountyEntity)
}

admin_resource! {
    table: wards,
    id: i32,
    entity: WardEntity,
    title: "Wards",
    group: "Geography",
    display: ["name", "subcounty_id", "code"],
    search: [name, code],
    filters: [subcounty_id: i32],
    ordering: [name, code],
    default_order: name asc,
    date_field: [],
    price_field: [],
    actions: [],
    relations: [],
    write: generic(CreateWardEntity, UpdateWardEntity)
}

admin_resource! {
    table: locations,
    id: i32,
    entity: LocationEntity,
    title: "Locations",
    group: "Geography",
    display: ["name", "user_id", "county_id", "subcounty_id", "ward_id", "is_default"],
    search: [name, village, detailed_address],
    filters: [county_id: i32, subcounty_id: i32, ward_id: i32, user_id: Uuid, is_default: bool],
    ordering: [created_at, name],
    default_order: created_at desc,
    date_field: [created_at: Timestamp],
    price_field: [],
    actions: [],
    relations: [],
    write: generic(CreateLocationEntity, UpdateLocationEntity)
}

pub const RESOURCES: &[ResourceMeta] = &[
    counties::META,
    subcounties::META,
    wards::META,
    locations::META,
];

pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(counties::routes())
        .merge(subcounties::routes())
        .merge(wards::routes())
        .merge(locations::routes())
}
