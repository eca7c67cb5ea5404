use chrono::{DateTime, NaiveDate, Utc};
use diesel::prelude::{AsChangeset, Identifiable, Insertable, Queryable, Selectable};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use super::{Prepare, double_option};
use crate::{
    choices::{ClaimStatus, CoverageType, PolicyStatus, ensure_opt},
    core::app_error::AppError,
};

// Providers

#[derive(Queryable, Selectable, Identifiable, Serialize, Debug, Clone, ToSchema)]
#[diesel(table_name = crate::schema::insurance_providers)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct InsuranceProviderEntity {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub license_number: String,
    pub contact_person: String,
    pub phone_number: String,
    pub email: String,
    pub website: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Insertable, Deserialize, Debug)]
#[diesel(table_name = crate::schema::insurance_providers)]
pub struct CreateInsuranceProviderEntity {
    pub name: String,
    pub description: Option<String>,
    pub license_number: String,
    pub contact_person: String,
    pub phone_number: String,
    pub email: String,
    pub website: Option<String>,
    pub is_active: Option<bool>,
}

#[derive(AsChangeset, Deserialize, Debug, Default)]
#[diesel(table_name = crate::schema::insurance_providers)]
pub struct UpdateInsuranceProviderEntity {
    pub name: Option<String>,
    pub description: Option<String>,
    pub license_number: Option<String>,
    pub contact_person: Option<String>,
    pub phone_number: Option<String>,
    pub email: Option<String>,
    pub website: Option<String>,
    pub is_active: Option<bool>,
}

impl Prepare for CreateInsuranceProviderEntity {}
impl Prepare for UpdateInsuranceProviderEntity {}

// Products

#[derive(Queryable, Selectable, Identifiable, Serialize, Debug, Clone, ToSchema)]
#[diesel(table_name = crate::schema::insurance_products)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct InsuranceProductEntity {
    pub id: i32,
    pub provider_id: i32,
    pub name: String,
    pub coverage_type: String,
    pub description: String,
    pub coverage_percentage: Decimal,
    pub premium_rate: Decimal,
    pub minimum_coverage: Decimal,
    pub maximum_coverage: Decimal,
    pub covered_perils: Value,
    pub exclusions: String,
    pub eligibility_criteria: String,
    pub claim_process: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Insertable, Deserialize, Debug)]
#[diesel(table_name = crate::schema::insurance_products)]
pub struct CreateInsuranceProductEntity {
    pub provider_id: i32,
    pub name: String,
    pub coverage_type: String,
    pub description: String,
    pub coverage_percentage: Option<Decimal>,
    pub premium_rate: Decimal,
    pub minimum_coverage: Decimal,
    pub maximum_coverage: Decimal,
    pub covered_perils: Option<Value>,
    pub exclusions: Option<String>,
    pub eligibility_criteria: String,
    pub claim_process: Option<String>,
    pub is_active: Option<bool>,
}

#[derive(AsChangeset, Deserialize, Debug, Default)]
#[diesel(table_name = crate::schema::insurance_products)]
pub struct UpdateInsuranceProductEntity {
    pub provider_id: Option<i32>,
    pub name: Option<String>,
    pub coverage_type: Option<String>,
    pub description: Option<String>,
    pub coverage_percentage: Option<Decimal>,
    pub premium_rate: Option<Decimal>,
    pub minimum_coverage: Option<Decimal>,
    pub maximum_coverage: Option<Decimal>,
    pub covered_perils: Option<Value>,
    pub exclusions: Option<String>,
    pub eligibility_criteria: Option<String>,
    pub claim_process: Option<String>,
    pub is_active: Option<bool>,
}

impl Prepare for CreateInsuranceProductEntity {
    fn prepare(&mut self) -> Result<(), AppError> {
        ensure_opt::<CoverageType>(Some(&self.coverage_type))
    }
}

impl Prepare for UpdateInsuranceProductEntity {
    fn prepare(&mut self) -> Result<(), AppError> {
        ensure_opt::<CoverageType>(self.coverage_type.as_ref())
    }
}

// Policies

#[derive(Queryable, Selectable, Identifiable, Serialize, Debug, Clone, ToSchema)]
#[diesel(table_name = crate::schema::insurance_policies)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct InsurancePolicyEntity {
    pub id: i32,
    pub policy_number: String,
    pub farmer_id: i32,
    pub product_id: i32,
    pub coverage_amount: Decimal,
    pub premium_amount: Decimal,
    pub policy_start_date: NaiveDate,
    pub policy_end_date: NaiveDate,
    pub status: String,
    pub beneficiaries: Value,
    pub payment_schedule: String,
    pub last_premium_payment: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
}

#[derive(Insertable, Deserialize, Debug)]
#[diesel(table_name = crate::schema::insurance_policies)]
pub struct CreateInsurancePolicyEntity {
    pub policy_number: String,
    pub farmer_id: i32,
    pub product_id: i32,
    pub coverage_amount: Decimal,
    pub premium_amount: Decimal,
    pub policy_start_date: NaiveDate,
    pub policy_end_date: NaiveDate,
    pub status: Option<String>,
    pub beneficiaries: Option<Value>,
    pub payment_schedule: Option<String>,
    pub last_premium_payment: Option<NaiveDate>,
}

#[derive(AsChangeset, Deserialize, Debug, Default)]
#[diesel(table_name = crate::schema::insurance_policies)]
pub struct UpdateInsurancePolicyEntity {
    pub coverage_amount: Option<Decimal>,
    pub premium_amount: Option<Decimal>,
    pub policy_start_date: Option<NaiveDate>,
    pub policy_end_date: Option<NaiveDate>,
    pub status: Option<String>,
    pub beneficiaries: Option<Value>,
    pub payment_schedule: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub last_premium_payment: Option<Option<NaiveDate>>,
}

impl Prepare for CreateInsurancePolicyEntity {
    fn prepare(&mut self) -> Result<(), AppError> {
        ensure_opt::<PolicyStatus>(self.status.as_ref())
    }
}

impl Prepare for UpdateInsurancePolicyEntity {
    fn prepare(&mut self) -> Result<(), AppError> {
        ensure_opt::<PolicyStatus>(self.status.as_ref())
    }
}

// Claims

#[derive(Queryable, Selectable, Identifiable, Serialize, Debug, Clone, ToSchema)]
#[diesel(table_name = crate::schema::insurance_claims)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct InsuranceClaimEntity {
    pub id: i32,
    pub claim_number: String,
    pub policy_id: i32,
    pub incident_date: NaiveDate,
    pub incident_description: String,
    pub claimed_amount: Decimal,
    pub supporting_documents: Value,
    pub status: String,
    pub assessor_assigned: String,
    pub assessment_date: Option<NaiveDate>,
    pub assessment_report: String,
    pub approved_amount: Option<Decimal>,
    pub rejection_reason: String,
    pub payment_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Insertable, Deserialize, Debug)]
#[diesel(table_name = crate::schema::insurance_claims)]
pub struct CreateInsuranceClaimEntity {
    pub claim_number: String,
    pub policy_id: i32,
    pub incident_date: NaiveDate,
    pub incident_description: String,
    pub claimed_amount: Decimal,
    pub supporting_documents: Option<Value>,
    pub status: Option<String>,
    pub assessor_assigned: Option<String>,
}

#[derive(AsChangeset, Deserialize, Debug, Default)]
#[diesel(table_name = crate::schema::insurance_claims)]
pub struct UpdateInsuranceClaimEntity {
    pub incident_date: Option<NaiveDate>,
    pub incident_description: Option<String>,
    pub claimed_amount: Option<Decimal>,
    pub supporting_documents: Option<Value>,
    pub status: Option<String>,
    pub assessor_assigned: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub assessment_date: Option<Option<NaiveDate>>,
    pub assessment_report: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub approved_amount: Option<Option<Decimal>>,
    pub rejection_reason: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub payment_date: Option<Option<NaiveDate>>,
}

impl Prepare for CreateInsuranceClaimEntity {
    fn prepare(&mut self) -> Result<(), AppError> {
        ensure_opt::<ClaimStatus>(self.status.as_ref())
    }
}

impl Prepare for UpdateInsuranceClaimEntity {
    fn prepare(&mut self) -> Result<(), AppError> {
        ensure_opt::<ClaimStatus>(self.status.as_ref())
    }
}
