use chrono::{DateTime, NaiveDate, Utc};
use diesel::prelude::{AsChangeset, Identifiable, Insertable, Queryable, Selectable};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use super::{Prepare, double_option};
use crate::{
    choices::{
        AdvisoryType, ConsultationStatus, ConsultationType, InputType, Priority, ensure_opt,
    },
    core::app_error::AppError,
};

// Input categories

#[derive(Queryable, Selectable, Identifiable, Serialize, Debug, Clone, ToSchema)]
#[diesel(table_name = crate::schema::input_categories)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct InputCategoryEntity {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub parent_id: Option<i32>,
    pub is_active: bool,
}

#[derive(Insertable, Deserialize, Debug)]
#[diesel(table_name = crate::schema::input_categories)]
pub struct CreateInputCategoryEntity {
    pub name: String,
    pub description: Option<String>,
    pub parent_id: Option<i32>,
    pub is_active: Option<bool>,
}

#[derive(AsChangeset, Deserialize, Debug, Default)]
#[diesel(table_name = crate::schema::input_categories)]
pub struct UpdateInputCategoryEntity {
    pub name: Option<String>,
    pub description: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub parent_id: Option<Option<i32>>,
    pub is_active: Option<bool>,
}

impl Prepare for CreateInputCategoryEntity {}
impl Prepare for UpdateInputCategoryEntity {}

// Agricultural inputs

#[derive(Queryable, Selectable, Identifiable, Serialize, Debug, Clone, ToSchema)]
#[diesel(table_name = crate::schema::agricultural_inputs)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct AgriculturalInputEntity {
    pub id: i32,
    pub supplier_id: i32,
    pub category_id: i32,
    pub name: String,
    pub brand: String,
    pub input_type: String,
    pub description: String,
    pub specifications: Value,
    pub unit_id: i32,
    pub price_per_unit: Decimal,
    pub minimum_order: Decimal,
    pub stock_quantity: Decimal,
    pub expiry_date: Option<NaiveDate>,
    pub manufacturer: String,
    pub registration_number: String,
    pub safety_instructions: String,
    pub application_instructions: String,
    pub images: Value,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Insertable, Deserialize, Debug)]
#[diesel(table_name = crate::schema::agricultural_inputs)]
pub struct CreateAgriculturalInputEntity {
    pub supplier_id: i32,
    pub category_id: i32,
    pub name: String,
    pub brand: Option<String>,
    pub input_type: String,
    pub description: String,
    pub specifications: Option<Value>,
    pub unit_id: i32,
    pub price_per_unit: Decimal,
    pub minimum_order: Option<Decimal>,
    pub stock_quantity: Option<Decimal>,
    pub expiry_date: Option<NaiveDate>,
    pub manufacturer: Option<String>,
    pub registration_number: Option<String>,
    pub safety_instructions: Option<String>,
    pub application_instructions: Option<String>,
    pub images: Option<Value>,
    pub is_active: Option<bool>,
}

#[derive(AsChangeset, Deserialize, Debug, Default)]
#[diesel(table_name = crate::schema::agricultural_inputs)]
pub struct UpdateAgriculturalInputEntity {
    pub supplier_id: Option<i32>,
    pub category_id: Option<i32>,
    pub name: Option<String>,
    pub brand: Option<String>,
    pub input_type: Option<String>,
    pub description: Option<String>,
    pub specifications: Option<Value>,
    pub unit_id: Option<i32>,
    pub price_per_unit: Option<Decimal>,
    pub minimum_order: Option<Decimal>,
    pub stock_quantity: Option<Decimal>,
    #[serde(default, deserialize_with = "double_option")]
    pub expiry_date: Option<Option<NaiveDate>>,
    pub manufacturer: Option<String>,
    pub registration_number: Option<String>,
    pub safety_instructions: Option<String>,
    pub application_instructions: Option<String>,
    pub images: Option<Value>,
    pub is_active: Option<bool>,
}

impl Prepare for CreateAgriculturalInputEntity {
    fn prepare(&mut self) -> Result<(), AppError> {
        ensure_opt::<InputType>(Some(&self.input_type))
    }
}

impl Prepare for UpdateAgriculturalInputEntity {
    fn prepare(&mut self) -> Result<(), AppError> {
        ensure_opt::<InputType>(self.input_type.as_ref())
    }
}

// Advisories

#[derive(Queryable, Selectable, Identifiable, Serialize, Debug, Clone, ToSchema)]
#[diesel(table_name = crate::schema::advisories)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct AdvisoryEntity {
    pub id: i32,
    pub agent_id: i32,
    pub title: String,
    pub advisory_type: String,
    pub priority: String,
    pub content: String,
    pub valid_from: DateTime<Utc>,
    pub valid_until: Option<DateTime<Utc>>,
    pub attachments: Value,
    pub is_published: bool,
    pub views_count: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Insertable, Deserialize, Debug)]
#[diesel(table_name = crate::schema::advisories)]
pub struct CreateAdvisoryEntity {
    pub agent_id: i32,
    pub title: String,
    pub advisory_type: String,
    pub priority: Option<String>,
    pub content: String,
    pub valid_from: DateTime<Utc>,
    pub valid_until: Option<DateTime<Utc>>,
    pub attachments: Option<Value>,
    pub is_published: Option<bool>,
}

#[derive(AsChangeset, Deserialize, Debug, Default)]
#[diesel(table_name = crate::schema::advisories)]
pub struct UpdateAdvisoryEntity {
    pub agent_id: Option<i32>,
    pub title: Option<String>,
    pub advisory_type: Option<String>,
    pub priority: Option<String>,
    pub content: Option<String>,
    pub valid_from: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "double_option")]
    pub valid_until: Option<Option<DateTime<Utc>>>,
    pub attachments: Option<Value>,
    pub is_published: Option<bool>,
}

impl Prepare for CreateAdvisoryEntity {
    fn prepare(&mut self) -> Result<(), AppError> {
        ensure_opt::<AdvisoryType>(Some(&self.advisory_type))?;
        ensure_opt::<Priority>(self.priority.as_ref())
    }
}

impl Prepare for UpdateAdvisoryEntity {
    fn prepare(&mut self) -> Result<(), AppError> {
        ensure_opt::<AdvisoryType>(self.advisory_type.as_ref())?;
        ensure_opt::<Priority>(self.priority.as_ref())
    }
}

// Consultations

#[derive(Queryable, Selectable, Identifiable, Serialize, Debug, Clone, ToSchema)]
#[diesel(table_name = crate::schema::consultation_requests)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ConsultationRequestEntity {
    pub id: i32,
    pub farmer_id: i32,
    pub agent_id: i32,
    pub subject: String,
    pub description: String,
    pub preferred_date: DateTime<Utc>,
    pub consultation_type: String,
    pub status: String,
    pub scheduled_date: Option<DateTime<Utc>>,
    pub duration_minutes: i32,
    pub consultation_fee: Decimal,
    pub notes: String,
    pub rating: Option<i32>,
    pub feedback: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Insertable, Deserialize, Debug)]
#[diesel(table_name = crate::schema::consultation_requests)]
pub struct CreateConsultationRequestEntity {
    pub farmer_id: i32,
    pub agent_id: i32,
    pub subject: String,
    pub description: String,
    pub preferred_date: DateTime<Utc>,
    pub consultation_type: String,
    pub status: Option<String>,
    pub scheduled_date: Option<DateTime<Utc>>,
    pub duration_minutes: Option<i32>,
    pub consultation_fee: Option<Decimal>,
    pub notes: Option<String>,
}

#[derive(AsChangeset, Deserialize, Debug, Default)]
#[diesel(table_name = crate::schema::consultation_requests)]
pub struct UpdateConsultationRequestEntity {
    pub agent_id: Option<i32>,
    pub subject: Option<String>,
    pub description: Option<String>,
    pub preferred_date: Option<DateTime<Utc>>,
    pub consultation_type: Option<String>,
    pub status: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub scheduled_date: Option<Option<DateTime<Utc>>>,
    pub duration_minutes: Option<i32>,
    pub consultation_fee: Option<Decimal>,
    pub notes: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub rating: Option<Option<i32>>,
    pub feedback: Option<String>,
}

impl Prepare for CreateConsultationRequestEntity {
    fn prepare(&mut self) -> Result<(), AppError> {
        ensure_opt::<ConsultationType>(Some(&self.consultation_type))?;
        ensure_opt::<ConsultationStatus>(self.status.as_ref())
    }
}

impl Prepare for UpdateConsultationRequestEntity {
    fn prepare(&mut self) -> Result<(), AppError> {
        ensure_opt::<ConsultationType>(self.consultation_type.as_ref())?;
        ensure_opt::<ConsultationStatus>(self.status.as_ref())
    }
}
