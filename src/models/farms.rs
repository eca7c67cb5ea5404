use chrono::{DateTime, Utc};
use diesel::prelude::{AsChangeset, Identifiable, Insertable, Queryable, Selectable};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use super::double_option;

// Farms
//
// Farm names double as slugs, so create and update go through the custom
// admin handlers in `admin::catalog` rather than `Prepare`.

#[derive(Queryable, Selectable, Identifiable, Serialize, Debug, Clone, ToSchema)]
#[diesel(table_name = crate::schema::farms)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct FarmEntity {
    pub id: i32,
    pub farmer_id: i32,
    pub name: String,
    pub location_id: i32,
    pub size: Decimal,
    pub soil_type: String,
    pub water_source: String,
    pub irrigation_method: String,
    pub elevation: Option<i32>,
    pub photos: Value,
    pub description: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Insertable, Deserialize, Debug)]
#[diesel(table_name = crate::schema::farms)]
pub struct CreateFarmEntity {
    pub farmer_id: i32,
    pub name: String,
    pub location_id: i32,
    pub size: Decimal,
    pub soil_type: Option<String>,
    pub water_source: Option<String>,
    pub irrigation_method: Option<String>,
    pub elevation: Option<i32>,
    pub photos: Option<Value>,
    pub description: Option<String>,
    pub is_active: Option<bool>,
}

#[derive(AsChangeset, Deserialize, Debug, Default)]
#[diesel(table_name = crate::schema::farms)]
pub struct UpdateFarmEntity {
    pub farmer_id: Option<i32>,
    pub name: Option<String>,
    pub location_id: Option<i32>,
    pub size: Option<Decimal>,
    pub soil_type: Option<String>,
    pub water_source: Option<String>,
    pub irrigation_method: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub elevation: Option<Option<i32>>,
    pub photos: Option<Value>,
    pub description: Option<String>,
    pub is_active: Option<bool>,
}
