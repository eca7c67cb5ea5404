use chrono::{DateTime, Utc};
use diesel::prelude::{AsChangeset, Identifiable, Insertable, Queryable, Selectable};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::{Prepare, double_option};

// Counties

#[derive(Queryable, Selectable, Identifiable, Serialize, Debug, Clone, ToSchema)]
#[diesel(table_name = crate::schema::counties)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct CountyEntity {
    pub id: i32,
    pub name: String,
    pub code: String,
    pub population: Option<i32>,
    pub area_sq_km: Option<f64>,
    pub created_at: DateTime<Utc>,
}

#[derive(Insertable, Deserialize, Debug)]
#[diesel(table_name = crate::schema::counties)]
pub struct CreateCountyEntity {
    pub name: String,
    pub code: String,
    pub population: Option<i32>,
    pub area_sq_km: Option<f64>,
}

#[derive(AsChangeset, Deserialize, Debug, Default)]
#[diesel(table_name = crate::schema::counties)]
pub struct UpdateCountyEntity {
    pub name: Option<String>,
    pub code: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub population: Option<Option<i32>>,
    #[serde(default, deserialize_with = "double_option")]
    pub area_sq_km: Option<Option<f64>>,
}

impl Prepare for CreateCountyEntity {}
impl Prepare for UpdateCountyEntity {}

// Subcounties

#[derive(Queryable, Selectable, Identifiable, Serialize, Debug, Clone, ToSchema)]
#[diesel(table_name = crate::schema::subcounties)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct SubcountyEntity {
    pub id: i32,
    pub county_id: i32,
    pub name: String,
    pub code: String,
}

#[derive(Insertable, Deserialize, Debug)]
#[diesel(table_name = crate::schema::subcounties)]
pub struct CreateSubcountyEntity {
    pub county_id: i32,
    pub name: String,
    pub code: String,
}

#[derive(AsChangeset, Deserialize, Debug, Default)]
#[diesel(table_name = crate::schema::subcounties)]
pub struct UpdateSubcountyEntity {
    pub county_id: Option<i32>,
    pub name: Option<String>,
    pub code: Option<String>,
}

impl Prepare for CreateSubcountyEntity {}
impl Prepare for UpdateSubcountyEntity {}

// Wards

#[derive(Queryable, Selectable, Identifiable, Serialize, Debug, Clone, ToSchema)]
#[diesel(table_name = crate::schema::wards)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct WardEntity {
    pub id: i32,
    pub subcounty_id: i32,
    pub name: String,
    pub code: String,
}

#[derive(Insertable, Deserialize, Debug)]
#[diesel(table_name = crate::schema::wards)]
pub struct CreateWardEntity {
    pub subcounty_id: i32,
    pub name: String,
    pub code: String,
}

#[derive(AsChangeset, Deserialize, Debug, Default)]
#[diesel(table_name = crate::schema::wards)]
pub struct UpdateWardEntity {
    pub subcounty_id: Option<i32>,
    pub name: Option<String>,
    pub code: Option<String>,
}

impl Prepare for CreateWardEntity {}
impl Prepare for UpdateWardEntity {}

// Locations

#[derive(Queryable, Selectable, Identifiable, Serialize, Debug, Clone, ToSchema)]
#[diesel(table_name = crate::schema::locations)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct LocationEntity {
    pub id: i32,
    pub user_id: Uuid,
    pub name: String,
    pub county_id: i32,
    pub subcounty_id: i32,
    pub ward_id: i32,
    pub village: String,
    pub detailed_address: String,
    pub latitude: Option<Decimal>,
    pub longitude: Option<Decimal>,
    pub is_default: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Insertable, Deserialize, Debug)]
#[diesel(table_name = crate::schema::locations)]
pub struct CreateLocationEntity {
    pub user_id: Uuid,
    pub name: String,
    pub county_id: i32,
    pub subcounty_id: i32,
    pub ward_id: i32,
    #[serde(default)]
    pub village: String,
    pub detailed_address: String,
    pub latitude: Option<Decimal>,
    pub longitude: Option<Decimal>,
    pub is_default: Option<bool>,
}

#[derive(AsChangeset, Deserialize, Debug, Default)]
#[diesel(table_name = crate::schema::locations)]
pub struct UpdateLocationEntity {
    pub name: Option<String>,
    pub county_id: Option<i32>,
    pub subcounty_id: Option<i32>,
    pub ward_id: Option<i32>,
    pub village: Option<String>,
    pub detailed_address: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub latitude: Option<Option<Decimal>>,
    #[serde(default, deserialize_with = "double_option")]
    pub longitude: Option<Option<Decimal>>,
    pub is_default: Option<bool>,
}

impl Prepare for CreateLocationEntity {}
impl Prepare for UpdateLocationEntity {}
