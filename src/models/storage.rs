use chrono::{DateTime, Utc};
use diesel::prelude::{AsChangeset, Identifiable, Insertable, Queryable, Selectable};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;
use uuid::Uuid;

use super::{Prepare, double_option};
use crate::{
    choices::{BookingStatus, ensure_opt},
    core::app_error::AppError,
};

// Warehouses

/// `capacity` is in metric tons. Rates are optional per billing period.
#[derive(Queryable, Selectable, Identifiable, Serialize, Debug, Clone, ToSchema)]
#[diesel(table_name = crate::schema::warehouses)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct WarehouseEntity {
    pub id: i32,
    pub name: String,
    pub location_id: i32,
    pub manager_id: Uuid,
    pub capacity: Decimal,
    pub storage_types: Value,
    pub facilities: Value,
    pub hourly_rate: Option<Decimal>,
    pub daily_rate: Option<Decimal>,
    pub monthly_rate: Option<Decimal>,
    pub security_features: Value,
    pub certifications: Value,
    pub operating_hours: String,
    pub contact_phone: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Insertable, Deserialize, Debug)]
#[diesel(table_name = crate::schema::warehouses)]
pub struct CreateWarehouseEntity {
    pub name: String,
    pub location_id: i32,
    pub manager_id: Uuid,
    pub capacity: Decimal,
    pub storage_types: Option<Value>,
    pub facilities: Option<Value>,
    pub hourly_rate: Option<Decimal>,
    pub daily_rate: Option<Decimal>,
    pub monthly_rate: Option<Decimal>,
    pub security_features: Option<Value>,
    pub certifications: Option<Value>,
    pub operating_hours: Option<String>,
    pub contact_phone: String,
    pub is_active: Option<bool>,
}

#[derive(AsChangeset, Deserialize, Debug, Default)]
#[diesel(table_name = crate::schema::warehouses)]
pub struct UpdateWarehouseEntity {
    pub name: Option<String>,
    pub location_id: Option<i32>,
    pub manager_id: Option<Uuid>,
    pub capacity: Option<Decimal>,
    pub storage_types: Option<Value>,
    pub facilities: Option<Value>,
    #[serde(default, deserialize_with = "double_option")]
    pub hourly_rate: Option<Option<Decimal>>,
    #[serde(default, deserialize_with = "double_option")]
    pub daily_rate: Option<Option<Decimal>>,
    #[serde(default, deserialize_with = "double_option")]
    pub monthly_rate: Option<Option<Decimal>>,
    pub security_features: Option<Value>,
    pub certifications: Option<Value>,
    pub operating_hours: Option<String>,
    pub contact_phone: Option<String>,
    pub is_active: Option<bool>,
}

impl Prepare for CreateWarehouseEntity {}
impl Prepare for UpdateWarehouseEntity {}

// Storage bookings

#[derive(Queryable, Selectable, Identifiable, Serialize, Debug, Clone, ToSchema)]
#[diesel(table_name = crate::schema::storage_bookings)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct StorageBookingEntity {
    pub id: i32,
    pub booking_number: String,
    pub farmer_id: i32,
    pub warehouse_id: i32,
    pub product_id: i32,
    pub quantity: Decimal,
    pub storage_type: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub status: String,
    pub total_cost: Decimal,
    pub deposit_amount: Decimal,
    pub special_requirements: String,
    pub check_in_date: Option<DateTime<Utc>>,
    pub check_out_date: Option<DateTime<Utc>>,
    pub condition_report: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Insertable, Deserialize, Debug)]
#[diesel(table_name = crate::schema::storage_bookings)]
pub struct CreateStorageBookingEntity {
    pub booking_number: String,
    pub farmer_id: i32,
    pub warehouse_id: i32,
    pub product_id: i32,
    pub quantity: Decimal,
    pub storage_type: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub status: Option<String>,
    pub total_cost: Decimal,
    pub deposit_amount: Option<Decimal>,
    pub special_requirements: Option<String>,
}

#[derive(AsChangeset, Deserialize, Debug, Default)]
#[diesel(table_name = crate::schema::storage_bookings)]
pub struct UpdateStorageBookingEntity {
    pub warehouse_id: Option<i32>,
    pub quantity: Option<Decimal>,
    pub storage_type: Option<String>,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub status: Option<String>,
    pub total_cost: Option<Decimal>,
    pub deposit_amount: Option<Decimal>,
    pub special_requirements: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub check_in_date: Option<Option<DateTime<Utc>>>,
    #[serde(default, deserialize_with = "double_option")]
    pub check_out_date: Option<Option<DateTime<Utc>>>,
    pub condition_report: Option<String>,
}

impl Prepare for CreateStorageBookingEntity {
    fn prepare(&mut self) -> Result<(), AppError> {
        ensure_opt::<BookingStatus>(self.status.as_ref())?;
        if self.end_date <= self.start_date {
            return Err(AppError::BadRequest(
                "Booking end_date must be after start_date".into(),
            ));
        }
        if self.deposit_amount.is_some_and(|deposit| deposit > self.total_cost) {
            return Err(AppError::BadRequest(
                "Deposit cannot exceed the total cost".into(),
            ));
        }
        Ok(())
    }
}

impl Prepare for UpdateStorageBookingEntity {
    fn prepare(&mut self) -> Result<(), AppError> {
        ensure_opt::<BookingStatus>(self.status.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;

    use super::*;

    fn booking() -> CreateStorageBookingEntity {
        let start = Utc::now();
        CreateStorageBookingEntity {
            booking_number: "STB-20250110-0A1B2C3D".into(),
            farmer_id: 1,
            warehouse_id: 1,
            product_id: 1,
            quantity: Decimal::new(125, 1),
            storage_type: "cold storage".into(),
            start_date: start,
            end_date: start + Duration::days(14),
            status: None,
            total_cost: Decimal::new(450_000, 2),
            deposit_amount: Some(Decimal::new(100_000, 2)),
            special_requirements: None,
        }
    }

    #[test]
    fn well_formed_booking_passes() {
        assert!(booking().prepare().is_ok());
    }

    #[test]
    fn booking_period_must_be_positive() {
        let mut backwards = booking();
        backwards.end_date = backwards.start_date - Duration::days(1);
        assert!(backwards.prepare().is_err());
    }

    #[test]
    fn deposit_is_capped_by_total_cost() {
        let mut greedy = booking();
        greedy.deposit_amount = Some(Decimal::new(450_001, 2));
        assert!(greedy.prepare().is_err());
    }
}
