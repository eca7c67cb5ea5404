use chrono::{DateTime, NaiveDate, Utc};
use diesel::prelude::{AsChangeset, Identifiable, Insertable, Queryable, Selectable};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;
use uuid::Uuid;

use super::{Prepare, double_option};
use crate::{
    choices::{BuyerType, Experience, FarmingType, UserType, ensure_opt},
    core::app_error::AppError,
};

// Users

#[derive(Queryable, Selectable, Identifiable, Serialize, Debug, Clone, ToSchema)]
#[diesel(table_name = crate::schema::users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct UserEntity {
    pub id: Uuid,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub user_type: String,
    pub phone_number: String,
    pub date_of_birth: Option<NaiveDate>,
    pub national_id: Option<String>,
    pub is_verified: bool,
    pub is_active: bool,
    pub is_staff: bool,
    pub is_superuser: bool,
    pub date_joined: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub last_seen: DateTime<Utc>,
}

#[derive(Insertable, Deserialize, Debug)]
#[diesel(table_name = crate::schema::users)]
pub struct CreateUserEntity {
    pub username: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub user_type: Option<String>,
    pub phone_number: String,
    pub date_of_birth: Option<NaiveDate>,
    pub national_id: Option<String>,
    pub is_verified: Option<bool>,
    pub is_active: Option<bool>,
    pub is_staff: Option<bool>,
    pub is_superuser: Option<bool>,
}

#[derive(AsChangeset, Deserialize, Debug, Default)]
#[diesel(table_name = crate::schema::users)]
pub struct UpdateUserEntity {
    pub username: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub user_type: Option<String>,
    pub phone_number: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub date_of_birth: Option<Option<NaiveDate>>,
    #[serde(default, deserialize_with = "double_option")]
    pub national_id: Option<Option<String>>,
    pub is_verified: Option<bool>,
    pub is_active: Option<bool>,
    pub is_staff: Option<bool>,
    pub is_superuser: Option<bool>,
}

impl Prepare for CreateUserEntity {
    fn prepare(&mut self) -> Result<(), AppError> {
        ensure_opt::<UserType>(self.user_type.as_ref())
    }
}

impl Prepare for UpdateUserEntity {
    fn prepare(&mut self) -> Result<(), AppError> {
        ensure_opt::<UserType>(self.user_type.as_ref())
    }
}

// Farmer profiles

#[derive(Queryable, Selectable, Identifiable, Serialize, Debug, Clone, ToSchema)]
#[diesel(table_name = crate::schema::farmer_profiles)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct FarmerProfileEntity {
    pub id: i32,
    pub user_id: Uuid,
    pub farm_name: String,
    pub farming_type: String,
    pub years_of_experience: String,
    pub total_farm_size: Decimal,
    pub farming_methods: Value,
    pub certifications: Value,
    pub bank_account_number: String,
    pub bank_name: String,
    pub mpesa_number: String,
    pub is_cooperative_member: bool,
    pub cooperative_name: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Insertable, Deserialize, Debug)]
#[diesel(table_name = crate::schema::farmer_profiles)]
pub struct CreateFarmerProfileEntity {
    pub user_id: Uuid,
    pub farm_name: String,
    pub farming_type: String,
    pub years_of_experience: String,
    pub total_farm_size: Decimal,
    pub farming_methods: Option<Value>,
    pub certifications: Option<Value>,
    pub bank_account_number: Option<String>,
    pub bank_name: Option<String>,
    pub mpesa_number: Option<String>,
    pub is_cooperative_member: Option<bool>,
    pub cooperative_name: Option<String>,
}

#[derive(AsChangeset, Deserialize, Debug, Default)]
#[diesel(table_name = crate::schema::farmer_profiles)]
pub struct UpdateFarmerProfileEntity {
    pub farm_name: Option<String>,
    pub farming_type: Option<String>,
    pub years_of_experience: Option<String>,
    pub total_farm_size: Option<Decimal>,
    pub farming_methods: Option<Value>,
    pub certifications: Option<Value>,
    pub bank_account_number: Option<String>,
    pub bank_name: Option<String>,
    pub mpesa_number: Option<String>,
    pub is_cooperative_member: Option<bool>,
    pub cooperative_name: Option<String>,
}

impl Prepare for CreateFarmerProfileEntity {
    fn prepare(&mut self) -> Result<(), AppError> {
        ensure_opt::<FarmingType>(Some(&self.farming_type))?;
        ensure_opt::<Experience>(Some(&self.years_of_experience))
    }
}

impl Prepare for UpdateFarmerProfileEntity {
    fn prepare(&mut self) -> Result<(), AppError> {
        ensure_opt::<FarmingType>(self.farming_type.as_ref())?;
        ensure_opt::<Experience>(self.years_of_experience.as_ref())
    }
}

// Buyer profiles

#[derive(Queryable, Selectable, Identifiable, Serialize, Debug, Clone, ToSchema)]
#[diesel(table_name = crate::schema::buyer_profiles)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct BuyerProfileEntity {
    pub id: i32,
    pub user_id: Uuid,
    pub buyer_type: String,
    pub business_name: String,
    pub business_registration: String,
    pub tax_pin: String,
    pub annual_purchase_volume: Option<Decimal>,
    pub preferred_payment_method: String,
    pub credit_limit: Decimal,
    pub delivery_instructions: String,
    pub special_requirements: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Insertable, Deserialize, Debug)]
#[diesel(table_name = crate::schema::buyer_profiles)]
pub struct CreateBuyerProfileEntity {
    pub user_id: Uuid,
    pub buyer_type: String,
    pub business_name: Option<String>,
    pub business_registration: Option<String>,
    pub tax_pin: Option<String>,
    pub annual_purchase_volume: Option<Decimal>,
    pub preferred_payment_method: Option<String>,
    pub credit_limit: Option<Decimal>,
    pub delivery_instructions: Option<String>,
    pub special_requirements: Option<String>,
}

#[derive(AsChangeset, Deserialize, Debug, Default)]
#[diesel(table_name = crate::schema::buyer_profiles)]
pub struct UpdateBuyerProfileEntity {
    pub buyer_type: Option<String>,
    pub business_name: Option<String>,
    pub business_registration: Option<String>,
    pub tax_pin: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub annual_purchase_volume: Option<Option<Decimal>>,
    pub preferred_payment_method: Option<String>,
    pub credit_limit: Option<Decimal>,
    pub delivery_instructions: Option<String>,
    pub special_requirements: Option<String>,
}

impl Prepare for CreateBuyerProfileEntity {
    fn prepare(&mut self) -> Result<(), AppError> {
        ensure_opt::<BuyerType>(Some(&self.buyer_type))
    }
}

impl Prepare for UpdateBuyerProfileEntity {
    fn prepare(&mut self) -> Result<(), AppError> {
        ensure_opt::<BuyerType>(self.buyer_type.as_ref())
    }
}

// Input suppliers

#[derive(Queryable, Selectable, Identifiable, Serialize, Debug, Clone, ToSchema)]
#[diesel(table_name = crate::schema::input_suppliers)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct InputSupplierEntity {
    pub id: i32,
    pub user_id: Uuid,
    pub business_name: String,
    pub license_number: String,
    pub business_registration: String,
    pub delivery_available: bool,
    pub credit_terms_available: bool,
    pub minimum_order_amount: Decimal,
    pub rating: Decimal,
    pub total_sales: Decimal,
    pub is_verified: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Insertable, Deserialize, Debug)]
#[diesel(table_name = crate::schema::input_suppliers)]
pub struct CreateInputSupplierEntity {
    pub user_id: Uuid,
    pub business_name: String,
    pub license_number: Option<String>,
    pub business_registration: Option<String>,
    pub delivery_available: Option<bool>,
    pub credit_terms_available: Option<bool>,
    pub minimum_order_amount: Option<Decimal>,
    pub rating: Option<Decimal>,
    pub total_sales: Option<Decimal>,
    pub is_verified: Option<bool>,
}

#[derive(AsChangeset, Deserialize, Debug, Default)]
#[diesel(table_name = crate::schema::input_suppliers)]
pub struct UpdateInputSupplierEntity {
    pub business_name: Option<String>,
    pub license_number: Option<String>,
    pub business_registration: Option<String>,
    pub delivery_available: Option<bool>,
    pub credit_terms_available: Option<bool>,
    pub minimum_order_amount: Option<Decimal>,
    pub rating: Option<Decimal>,
    pub total_sales: Option<Decimal>,
    pub is_verified: Option<bool>,
}

impl Prepare for CreateInputSupplierEntity {}
impl Prepare for UpdateInputSupplierEntity {}

// Extension agents

#[derive(Queryable, Selectable, Identifiable, Serialize, Debug, Clone, ToSchema)]
#[diesel(table_name = crate::schema::extension_agents)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ExtensionAgentEntity {
    pub id: i32,
    pub user_id: Uuid,
    pub employee_id: String,
    pub specialization: Value,
    pub qualifications: String,
    pub years_of_experience: i32,
    pub contact_hours: String,
    pub languages_spoken: Value,
    pub rating: Decimal,
    pub is_available: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Insertable, Deserialize, Debug)]
#[diesel(table_name = crate::schema::extension_agents)]
pub struct CreateExtensionAgentEntity {
    pub user_id: Uuid,
    pub employee_id: String,
    pub specialization: Option<Value>,
    pub qualifications: String,
    pub years_of_experience: i32,
    pub contact_hours: Option<String>,
    pub languages_spoken: Option<Value>,
    pub rating: Option<Decimal>,
    pub is_available: Option<bool>,
}

#[derive(AsChangeset, Deserialize, Debug, Default)]
#[diesel(table_name = crate::schema::extension_agents)]
pub struct UpdateExtensionAgentEntity {
    pub employee_id: Option<String>,
    pub specialization: Option<Value>,
    pub qualifications: Option<String>,
    pub years_of_experience: Option<i32>,
    pub contact_hours: Option<String>,
    pub languages_spoken: Option<Value>,
    pub rating: Option<Decimal>,
    pub is_available: Option<bool>,
}

impl Prepare for CreateExtensionAgentEntity {}
impl Prepare for UpdateExtensionAgentEntity {}

// User profiles

#[derive(Queryable, Selectable, Identifiable, Serialize, Debug, Clone, ToSchema)]
#[diesel(table_name = crate::schema::user_profiles)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct UserProfileEntity {
    pub id: i32,
    pub user_id: Uuid,
    pub bio: String,
    pub website: String,
    pub facebook_url: String,
    pub twitter_url: String,
    pub linkedin_url: String,
    pub preferred_language: String,
    pub notification_preferences: Value,
    pub privacy_settings: Value,
}

#[derive(Insertable, Deserialize, Debug)]
#[diesel(table_name = crate::schema::user_profiles)]
pub struct CreateUserProfileEntity {
    pub user_id: Uuid,
    pub bio: Option<String>,
    pub website: Option<String>,
    pub facebook_url: Option<String>,
    pub twitter_url: Option<String>,
    pub linkedin_url: Option<String>,
    pub preferred_language: Option<String>,
    pub notification_preferences: Option<Value>,
    pub privacy_settings: Option<Value>,
}

#[derive(AsChangeset, Deserialize, Debug, Default)]
#[diesel(table_name = crate::schema::user_profiles)]
pub struct UpdateUserProfileEntity {
    pub bio: Option<String>,
    pub website: Option<String>,
    pub facebook_url: Option<String>,
    pub twitter_url: Option<String>,
    pub linkedin_url: Option<String>,
    pub preferred_language: Option<String>,
    pub notification_preferences: Option<Value>,
    pub privacy_settings: Option<Value>,
}

impl Prepare for CreateUserProfileEntity {}
impl Prepare for UpdateUserProfileEntity {}
