use chrono::{DateTime, Utc};
use diesel::prelude::{AsChangeset, Associations, Identifiable, Insertable, Queryable, Selectable};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;
use uuid::Uuid;

use super::{Prepare, double_option};
use crate::{
    choices::{OrderPaymentStatus, OrderStatus, PaymentStatus, PaymentType, ensure_opt},
    core::app_error::AppError,
};

// Carts

#[derive(Queryable, Selectable, Identifiable, Serialize, Debug, Clone, ToSchema)]
#[diesel(table_name = crate::schema::carts)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct CartEntity {
    pub id: i32,
    pub buyer_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Queryable, Selectable, Identifiable, Associations, Serialize, Debug, Clone, ToSchema)]
#[diesel(belongs_to(CartEntity, foreign_key = cart_id))]
#[diesel(table_name = crate::schema::cart_items)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct CartItemEntity {
    pub id: i32,
    pub cart_id: i32,
    pub product_id: i32,
    pub quantity: Decimal,
    pub unit_price: Decimal,
    pub total_price: Decimal,
    pub notes: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Insertable, Deserialize, Debug)]
#[diesel(table_name = crate::schema::carts)]
pub struct CreateCartEntity {
    pub buyer_id: Uuid,
}

#[derive(Insertable, Deserialize, Debug)]
#[diesel(table_name = crate::schema::cart_items)]
pub struct CreateCartItemEntity {
    pub cart_id: i32,
    pub product_id: i32,
    pub quantity: Decimal,
    pub unit_price: Decimal,
    pub total_price: Decimal,
    pub notes: Option<String>,
}

#[derive(AsChangeset, Deserialize, Debug, Default)]
#[diesel(table_name = crate::schema::carts)]
pub struct UpdateCartEntity {
    pub buyer_id: Option<Uuid>,
}

#[derive(AsChangeset, Deserialize, Debug, Default)]
#[diesel(table_name = crate::schema::cart_items)]
pub struct UpdateCartItemEntity {
    pub quantity: Option<Decimal>,
    pub unit_price: Option<Decimal>,
    pub total_price: Option<Decimal>,
    pub notes: Option<String>,
}

impl Prepare for CreateCartEntity {}
impl Prepare for UpdateCartEntity {}
impl Prepare for CreateCartItemEntity {}
impl Prepare for UpdateCartItemEntity {}

// Orders

#[derive(Queryable, Selectable, Identifiable, Serialize, Debug, Clone, ToSchema)]
#[diesel(table_name = crate::schema::orders)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct OrderEntity {
    pub id: i32,
    pub order_number: String,
    pub buyer_id: Uuid,
    pub farmer_id: i32,
    pub delivery_location_id: i32,
    pub order_date: DateTime<Utc>,
    pub expected_delivery_date: DateTime<Utc>,
    pub status: String,
    pub payment_status: String,
    pub subtotal: Decimal,
    pub delivery_fee: Decimal,
    pub tax_amount: Decimal,
    pub discount_amount: Decimal,
    pub total_amount: Decimal,
    pub special_instructions: String,
    pub tracking_number: String,
    pub delivered_at: Option<DateTime<Utc>>,
    pub cancelled_at: Option<DateTime<Utc>>,
    pub cancellation_reason: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Insertable, Deserialize, Debug)]
#[diesel(table_name = crate::schema::orders)]
pub struct CreateOrderEntity {
    pub order_number: String,
    pub buyer_id: Uuid,
    pub farmer_id: i32,
    pub delivery_location_id: i32,
    pub expected_delivery_date: DateTime<Utc>,
    pub status: Option<String>,
    pub payment_status: Option<String>,
    pub subtotal: Decimal,
    pub delivery_fee: Option<Decimal>,
    pub tax_amount: Option<Decimal>,
    pub discount_amount: Option<Decimal>,
    pub total_amount: Decimal,
    pub special_instructions: Option<String>,
    pub tracking_number: Option<String>,
}

#[derive(AsChangeset, Deserialize, Debug, Default)]
#[diesel(table_name = crate::schema::orders)]
pub struct UpdateOrderEntity {
    pub delivery_location_id: Option<i32>,
    pub expected_delivery_date: Option<DateTime<Utc>>,
    pub status: Option<String>,
    pub payment_status: Option<String>,
    pub subtotal: Option<Decimal>,
    pub delivery_fee: Option<Decimal>,
    pub tax_amount: Option<Decimal>,
    pub discount_amount: Option<Decimal>,
    pub total_amount: Option<Decimal>,
    pub special_instructions: Option<String>,
    pub tracking_number: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub delivered_at: Option<Option<DateTime<Utc>>>,
    #[serde(default, deserialize_with = "double_option")]
    pub cancelled_at: Option<Option<DateTime<Utc>>>,
    pub cancellation_reason: Option<String>,
}

impl Prepare for CreateOrderEntity {
    fn prepare(&mut self) -> Result<(), AppError> {
        ensure_opt::<OrderStatus>(self.status.as_ref())?;
        ensure_opt::<OrderPaymentStatus>(self.payment_status.as_ref())
    }
}

impl Prepare for UpdateOrderEntity {
    fn prepare(&mut self) -> Result<(), AppError> {
        ensure_opt::<OrderStatus>(self.status.as_ref())?;
        ensure_opt::<OrderPaymentStatus>(self.payment_status.as_ref())
    }
}

#[derive(Queryable, Selectable, Identifiable, Associations, Serialize, Debug, Clone, ToSchema)]
#[diesel(belongs_to(OrderEntity, foreign_key = order_id))]
#[diesel(table_name = crate::schema::order_items)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct OrderItemEntity {
    pub id: i32,
    pub order_id: i32,
    pub product_id: i32,
    pub quantity: Decimal,
    pub unit_price: Decimal,
    pub total_price: Decimal,
    pub product_snapshot: Value,
}

#[derive(Insertable, Deserialize, Debug)]
#[diesel(table_name = crate::schema::order_items)]
pub struct CreateOrderItemEntity {
    pub order_id: i32,
    pub product_id: i32,
    pub quantity: Decimal,
    pub unit_price: Decimal,
    pub total_price: Decimal,
    pub product_snapshot: Option<Value>,
}

#[derive(AsChangeset, Deserialize, Debug, Default)]
#[diesel(table_name = crate::schema::order_items)]
pub struct UpdateOrderItemEntity {
    pub quantity: Option<Decimal>,
    pub unit_price: Option<Decimal>,
    pub total_price: Option<Decimal>,
    pub product_snapshot: Option<Value>,
}

impl Prepare for CreateOrderItemEntity {}
impl Prepare for UpdateOrderItemEntity {}

#[derive(Queryable, Selectable, Identifiable, Serialize, Debug, Clone, ToSchema)]
#[diesel(table_name = crate::schema::order_status_history)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct OrderStatusHistoryEntity {
    pub id: i32,
    pub order_id: i32,
    pub previous_status: String,
    pub new_status: String,
    pub changed_by_id: Option<Uuid>,
    pub notes: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Insertable, Deserialize, Debug)]
#[diesel(table_name = crate::schema::order_status_history)]
pub struct CreateOrderStatusHistoryEntity {
    pub order_id: i32,
    pub previous_status: String,
    pub new_status: String,
    pub changed_by_id: Option<Uuid>,
    pub notes: Option<String>,
}

#[derive(AsChangeset, Deserialize, Debug, Default)]
#[diesel(table_name = crate::schema::order_status_history)]
pub struct UpdateOrderStatusHistoryEntity {
    pub notes: Option<String>,
}

impl Prepare for CreateOrderStatusHistoryEntity {
    fn prepare(&mut self) -> Result<(), AppError> {
        ensure_opt::<OrderStatus>(Some(&self.new_status))?;
        if !self.previous_status.is_empty() {
            ensure_opt::<OrderStatus>(Some(&self.previous_status))?;
        }
        Ok(())
    }
}

impl Prepare for UpdateOrderStatusHistoryEntity {}

// Payments

#[derive(Queryable, Selectable, Identifiable, Serialize, Debug, Clone, ToSchema)]
#[diesel(table_name = crate::schema::payment_methods)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct PaymentMethodEntity {
    pub id: i32,
    pub name: String,
    pub code: String,
    pub description: String,
    pub is_active: bool,
    pub processing_fee_percentage: Decimal,
    pub minimum_amount: Decimal,
    pub maximum_amount: Option<Decimal>,
}

#[derive(Insertable, Deserialize, Debug)]
#[diesel(table_name = crate::schema::payment_methods)]
pub struct CreatePaymentMethodEntity {
    pub name: String,
    pub code: String,
    pub description: Option<String>,
    pub is_active: Option<bool>,
    pub processing_fee_percentage: Option<Decimal>,
    pub minimum_amount: Option<Decimal>,
    pub maximum_amount: Option<Decimal>,
}

#[derive(AsChangeset, Deserialize, Debug, Default)]
#[diesel(table_name = crate::schema::payment_methods)]
pub struct UpdatePaymentMethodEntity {
    pub name: Option<String>,
    pub code: Option<String>,
    pub description: Option<String>,
    pub is_active: Option<bool>,
    pub processing_fee_percentage: Option<Decimal>,
    pub minimum_amount: Option<Decimal>,
    #[serde(default, deserialize_with = "double_option")]
    pub maximum_amount: Option<Option<Decimal>>,
}

impl Prepare for CreatePaymentMethodEntity {}
impl Prepare for UpdatePaymentMethodEntity {}

#[derive(Queryable, Selectable, Identifiable, Serialize, Debug, Clone, ToSchema)]
#[diesel(table_name = crate::schema::payments)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct PaymentEntity {
    pub id: i32,
    pub transaction_id: String,
    pub order_id: i32,
    pub payment_method_id: i32,
    pub payment_type: String,
    pub amount: Decimal,
    pub processing_fee: Decimal,
    pub net_amount: Decimal,
    pub status: String,
    pub gateway_reference: String,
    pub gateway_response: Value,
    pub paid_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

#[derive(Insertable, Deserialize, Debug)]
#[diesel(table_name = crate::schema::payments)]
pub struct CreatePaymentEntity {
    pub transaction_id: String,
    pub order_id: i32,
    pub payment_method_id: i32,
    pub payment_type: Option<String>,
    pub amount: Decimal,
    pub processing_fee: Option<Decimal>,
    pub net_amount: Decimal,
    pub status: Option<String>,
    pub gateway_reference: Option<String>,
    pub gateway_response: Option<Value>,
}

#[derive(AsChangeset, Deserialize, Debug, Default)]
#[diesel(table_name = crate::schema::payments)]
pub struct UpdatePaymentEntity {
    pub payment_type: Option<String>,
    pub amount: Option<Decimal>,
    pub processing_fee: Option<Decimal>,
    pub net_amount: Option<Decimal>,
    pub status: Option<String>,
    pub gateway_reference: Option<String>,
    pub gateway_response: Option<Value>,
    #[serde(default, deserialize_with = "double_option")]
    pub paid_at: Option<Option<DateTime<Utc>>>,
}

impl Prepare for CreatePaymentEntity {
    fn prepare(&mut self) -> Result<(), AppError> {
        ensure_opt::<PaymentType>(self.payment_type.as_ref())?;
        ensure_opt::<PaymentStatus>(self.status.as_ref())
    }
}

impl Prepare for UpdatePaymentEntity {
    fn prepare(&mut self) -> Result<(), AppError> {
        ensure_opt::<PaymentType>(self.payment_type.as_ref())?;
        ensure_opt::<PaymentStatus>(self.status.as_ref())
    }
}
