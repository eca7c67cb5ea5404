use chrono::{DateTime, Utc};
use diesel::prelude::{AsChangeset, Identifiable, Insertable, Queryable, Selectable};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use super::{Prepare, double_option};
use crate::{
    choices::{DeliveryStatus, ensure_opt},
    core::app_error::AppError,
};

// Delivery partners

#[derive(Queryable, Selectable, Identifiable, Serialize, Debug, Clone, ToSchema)]
#[diesel(table_name = crate::schema::delivery_partners)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct DeliveryPartnerEntity {
    pub id: i32,
    pub name: String,
    pub contact_person: String,
    pub phone_number: String,
    pub email: String,
    pub pricing_model: String,
    pub is_active: bool,
    pub rating: Decimal,
    pub created_at: DateTime<Utc>,
}

#[derive(Insertable, Deserialize, Debug)]
#[diesel(table_name = crate::schema::delivery_partners)]
pub struct CreateDeliveryPartnerEntity {
    pub name: String,
    pub contact_person: String,
    pub phone_number: String,
    pub email: String,
    pub pricing_model: Option<String>,
    pub is_active: Option<bool>,
    pub rating: Option<Decimal>,
}

#[derive(AsChangeset, Deserialize, Debug, Default)]
#[diesel(table_name = crate::schema::delivery_partners)]
pub struct UpdateDeliveryPartnerEntity {
    pub name: Option<String>,
    pub contact_person: Option<String>,
    pub phone_number: Option<String>,
    pub email: Option<String>,
    pub pricing_model: Option<String>,
    pub is_active: Option<bool>,
    pub rating: Option<Decimal>,
}

impl Prepare for CreateDeliveryPartnerEntity {}
impl Prepare for UpdateDeliveryPartnerEntity {}

// Deliveries

#[derive(Queryable, Selectable, Identifiable, Serialize, Debug, Clone, ToSchema)]
#[diesel(table_name = crate::schema::deliveries)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct DeliveryEntity {
    pub id: i32,
    pub order_id: i32,
    pub delivery_partner_id: i32,
    pub driver_name: String,
    pub driver_phone: String,
    pub vehicle_details: String,
    pub pickup_address: String,
    pub delivery_address: String,
    pub status: String,
    pub estimated_delivery_time: DateTime<Utc>,
    pub actual_pickup_time: Option<DateTime<Utc>>,
    pub actual_delivery_time: Option<DateTime<Utc>>,
    pub delivery_notes: String,
    pub recipient_name: String,
    pub delivery_fee: Decimal,
    pub tracking_updates: Value,
    pub created_at: DateTime<Utc>,
}

#[derive(Insertable, Deserialize, Debug)]
#[diesel(table_name = crate::schema::deliveries)]
pub struct CreateDeliveryEntity {
    pub order_id: i32,
    pub delivery_partner_id: i32,
    pub driver_name: Option<String>,
    pub driver_phone: Option<String>,
    pub vehicle_details: Option<String>,
    pub pickup_address: String,
    pub delivery_address: String,
    pub status: Option<String>,
    pub estimated_delivery_time: DateTime<Utc>,
    pub delivery_notes: Option<String>,
    pub recipient_name: Option<String>,
    pub delivery_fee: Decimal,
    pub tracking_updates: Option<Value>,
}

#[derive(AsChangeset, Deserialize, Debug, Default)]
#[diesel(table_name = crate::schema::deliveries)]
pub struct UpdateDeliveryEntity {
    pub delivery_partner_id: Option<i32>,
    pub driver_name: Option<String>,
    pub driver_phone: Option<String>,
    pub vehicle_details: Option<String>,
    pub pickup_address: Option<String>,
    pub delivery_address: Option<String>,
    pub status: Option<String>,
    pub estimated_delivery_time: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "double_option")]
    pub actual_pickup_time: Option<Option<DateTime<Utc>>>,
    #[serde(default, deserialize_with = "double_option")]
    pub actual_delivery_time: Option<Option<DateTime<Utc>>>,
    pub delivery_notes: Option<String>,
    pub recipient_name: Option<String>,
    pub delivery_fee: Option<Decimal>,
    pub tracking_updates: Option<Value>,
}

impl Prepare for CreateDeliveryEntity {
    fn prepare(&mut self) -> Result<(), AppError> {
        ensure_opt::<DeliveryStatus>(self.status.as_ref())
    }
}

impl Prepare for UpdateDeliveryEntity {
    fn prepare(&mut self) -> Result<(), AppError> {
        ensure_opt::<DeliveryStatus>(self.status.as_ref())
    }
}

// Delivery zones

#[derive(Queryable, Selectable, Identifiable, Serialize, Debug, Clone, ToSchema)]
#[diesel(table_name = crate::schema::delivery_zones)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct DeliveryZoneEntity {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub base_delivery_fee: Decimal,
    pub free_delivery_threshold: Option<Decimal>,
    pub estimated_delivery_days: i32,
    pub is_active: bool,
}

#[derive(Insertable, Deserialize, Debug)]
#[diesel(table_name = crate::schema::delivery_zones)]
pub struct CreateDeliveryZoneEntity {
    pub name: String,
    pub description: Option<String>,
    pub base_delivery_fee: Decimal,
    pub free_delivery_threshold: Option<Decimal>,
    pub estimated_delivery_days: Option<i32>,
    pub is_active: Option<bool>,
}

#[derive(AsChangeset, Deserialize, Debug, Default)]
#[diesel(table_name = crate::schema::delivery_zones)]
pub struct UpdateDeliveryZoneEntity {
    pub name: Option<String>,
    pub description: Option<String>,
    pub base_delivery_fee: Option<Decimal>,
    #[serde(default, deserialize_with = "double_option")]
    pub free_delivery_threshold: Option<Option<Decimal>>,
    pub estimated_delivery_days: Option<i32>,
    pub is_active: Option<bool>,
}

impl Prepare for CreateDeliveryZoneEntity {}
impl Prepare for UpdateDeliveryZoneEntity {}
