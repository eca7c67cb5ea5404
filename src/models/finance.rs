use chrono::{DateTime, Utc};
use diesel::prelude::{AsChangeset, Identifiable, Insertable, Queryable, Selectable};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use super::{Prepare, double_option};
use crate::{
    choices::{InstitutionType, LoanApplicationStatus, ensure_opt},
    core::app_error::AppError,
};

// Financial institutions

#[derive(Queryable, Selectable, Identifiable, Serialize, Debug, Clone, ToSchema)]
#[diesel(table_name = crate::schema::financial_institutions)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct FinancialInstitutionEntity {
    pub id: i32,
    pub name: String,
    pub institution_type: String,
    pub description: String,
    pub contact_person: String,
    pub phone_number: String,
    pub email: String,
    pub website: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Insertable, Deserialize, Debug)]
#[diesel(table_name = crate::schema::financial_institutions)]
pub struct CreateFinancialInstitutionEntity {
    pub name: String,
    pub institution_type: String,
    pub description: Option<String>,
    pub contact_person: Option<String>,
    pub phone_number: String,
    pub email: String,
    pub website: Option<String>,
    pub is_active: Option<bool>,
}

#[derive(AsChangeset, Deserialize, Debug, Default)]
#[diesel(table_name = crate::schema::financial_institutions)]
pub struct UpdateFinancialInstitutionEntity {
    pub name: Option<String>,
    pub institution_type: Option<String>,
    pub description: Option<String>,
    pub contact_person: Option<String>,
    pub phone_number: Option<String>,
    pub email: Option<String>,
    pub website: Option<String>,
    pub is_active: Option<bool>,
}

impl Prepare for CreateFinancialInstitutionEntity {
    fn prepare(&mut self) -> Result<(), AppError> {
        ensure_opt::<InstitutionType>(Some(&self.institution_type))
    }
}

impl Prepare for UpdateFinancialInstitutionEntity {
    fn prepare(&mut self) -> Result<(), AppError> {
        ensure_opt::<InstitutionType>(self.institution_type.as_ref())
    }
}

// Loan products

#[derive(Queryable, Selectable, Identifiable, Serialize, Debug, Clone, ToSchema)]
#[diesel(table_name = crate::schema::loan_products)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct LoanProductEntity {
    pub id: i32,
    pub institution_id: i32,
    pub name: String,
    pub description: String,
    pub loan_type: String,
    pub minimum_amount: Decimal,
    pub maximum_amount: Decimal,
    pub interest_rate: Decimal,
    pub repayment_period_months: i32,
    pub processing_fee_percentage: Decimal,
    pub collateral_required: bool,
    pub collateral_types: Value,
    pub eligibility_criteria: String,
    pub required_documents: Value,
    pub application_process: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Insertable, Deserialize, Debug)]
#[diesel(table_name = crate::schema::loan_products)]
pub struct CreateLoanProductEntity {
    pub institution_id: i32,
    pub name: String,
    pub description: String,
    pub loan_type: String,
    pub minimum_amount: Decimal,
    pub maximum_amount: Decimal,
    pub interest_rate: Decimal,
    pub repayment_period_months: i32,
    pub processing_fee_percentage: Option<Decimal>,
    pub collateral_required: Option<bool>,
    pub collateral_types: Option<Value>,
    pub eligibility_criteria: String,
    pub required_documents: Option<Value>,
    pub application_process: Option<String>,
    pub is_active: Option<bool>,
}

#[derive(AsChangeset, Deserialize, Debug, Default)]
#[diesel(table_name = crate::schema::loan_products)]
pub struct UpdateLoanProductEntity {
    pub institution_id: Option<i32>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub loan_type: Option<String>,
    pub minimum_amount: Option<Decimal>,
    pub maximum_amount: Option<Decimal>,
    pub interest_rate: Option<Decimal>,
    pub repayment_period_months: Option<i32>,
    pub processing_fee_percentage: Option<Decimal>,
    pub collateral_required: Option<bool>,
    pub collateral_types: Option<Value>,
    pub eligibility_criteria: Option<String>,
    pub required_documents: Option<Value>,
    pub application_process: Option<String>,
    pub is_active: Option<bool>,
}

impl Prepare for CreateLoanProductEntity {}
impl Prepare for UpdateLoanProductEntity {}

// Loan applications

#[derive(Queryable, Selectable, Identifiable, Serialize, Debug, Clone, ToSchema)]
#[diesel(table_name = crate::schema::loan_applications)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct LoanApplicationEntity {
    pub id: i32,
    pub application_number: String,
    pub farmer_id: i32,
    pub loan_product_id: i32,
    pub requested_amount: Decimal,
    pub loan_purpose: String,
    pub business_plan: String,
    pub collateral_offered: String,
    pub guarantors: Value,
    pub status: String,
    pub submitted_date: Option<DateTime<Utc>>,
    pub review_date: Option<DateTime<Utc>>,
    pub decision_date: Option<DateTime<Utc>>,
    pub approved_amount: Option<Decimal>,
    pub rejection_reason: String,
    pub disbursement_date: Option<DateTime<Utc>>,
    pub documents_uploaded: Value,
    pub officer_notes: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Insertable, Deserialize, Debug)]
#[diesel(table_name = crate::schema::loan_applications)]
pub struct CreateLoanApplicationEntity {
    pub application_number: String,
    pub farmer_id: i32,
    pub loan_product_id: i32,
    pub requested_amount: Decimal,
    pub loan_purpose: String,
    pub business_plan: Option<String>,
    pub collateral_offered: Option<String>,
    pub guarantors: Option<Value>,
    pub status: Option<String>,
    pub submitted_date: Option<DateTime<Utc>>,
    pub documents_uploaded: Option<Value>,
    pub officer_notes: Option<String>,
}

#[derive(AsChangeset, Deserialize, Debug, Default)]
#[diesel(table_name = crate::schema::loan_applications)]
pub struct UpdateLoanApplicationEntity {
    pub requested_amount: Option<Decimal>,
    pub loan_purpose: Option<String>,
    pub business_plan: Option<String>,
    pub collateral_offered: Option<String>,
    pub guarantors: Option<Value>,
    pub status: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub submitted_date: Option<Option<DateTime<Utc>>>,
    #[serde(default, deserialize_with = "double_option")]
    pub review_date: Option<Option<DateTime<Utc>>>,
    #[serde(default, deserialize_with = "double_option")]
    pub decision_date: Option<Option<DateTime<Utc>>>,
    #[serde(default, deserialize_with = "double_option")]
    pub approved_amount: Option<Option<Decimal>>,
    pub rejection_reason: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub disbursement_date: Option<Option<DateTime<Utc>>>,
    pub documents_uploaded: Option<Value>,
    pub officer_notes: Option<String>,
}

impl Prepare for CreateLoanApplicationEntity {
    fn prepare(&mut self) -> Result<(), AppError> {
        ensure_opt::<LoanApplicationStatus>(self.status.as_ref())
    }
}

impl Prepare for UpdateLoanApplicationEntity {
    fn prepare(&mut self) -> Result<(), AppError> {
        ensure_opt::<LoanApplicationStatus>(self.status.as_ref())
    }
}
