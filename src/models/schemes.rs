use chrono::{DateTime, NaiveDate, Utc};
use diesel::prelude::{AsChangeset, Identifiable, Insertable, Queryable, Selectable};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use super::{Prepare, double_option};
use crate::{
    choices::{SchemeApplicationStatus, SchemeType, ensure_opt},
    core::app_error::AppError,
};

#[derive(Queryable, Selectable, Identifiable, Serialize, Debug, Clone, ToSchema)]
#[diesel(table_name = crate::schema::government_schemes)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct GovernmentSchemeEntity {
    pub id: i32,
    pub name: String,
    pub scheme_type: String,
    pub description: String,
    pub implementing_agency: String,
    pub eligibility_criteria: String,
    pub application_process: String,
    pub required_documents: Value,
    pub benefit_amount: Option<Decimal>,
    pub application_deadline: Option<NaiveDate>,
    pub scheme_validity: Option<NaiveDate>,
    pub contact_information: Value,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Insertable, Deserialize, Debug)]
#[diesel(table_name = crate::schema::government_schemes)]
pub struct CreateGovernmentSchemeEntity {
    pub name: String,
    pub scheme_type: String,
    pub description: String,
    pub implementing_agency: String,
    pub eligibility_criteria: String,
    pub application_process: String,
    pub required_documents: Option<Value>,
    pub benefit_amount: Option<Decimal>,
    pub application_deadline: Option<NaiveDate>,
    pub scheme_validity: Option<NaiveDate>,
    pub contact_information: Option<Value>,
    pub is_active: Option<bool>,
}

#[derive(AsChangeset, Deserialize, Debug, Default)]
#[diesel(table_name = crate::schema::government_schemes)]
pub struct UpdateGovernmentSchemeEntity {
    pub name: Option<String>,
    pub scheme_type: Option<String>,
    pub description: Option<String>,
    pub implementing_agency: Option<String>,
    pub eligibility_criteria: Option<String>,
    pub application_process: Option<String>,
    pub required_documents: Option<Value>,
    #[serde(default, deserialize_with = "double_option")]
    pub benefit_amount: Option<Option<Decimal>>,
    #[serde(default, deserialize_with = "double_option")]
    pub application_deadline: Option<Option<NaiveDate>>,
    #[serde(default, deserialize_with = "double_option")]
    pub scheme_validity: Option<Option<NaiveDate>>,
    pub contact_information: Option<Value>,
    pub is_active: Option<bool>,
}

impl Prepare for CreateGovernmentSchemeEntity {
    fn prepare(&mut self) -> Result<(), AppError> {
        ensure_opt::<SchemeType>(Some(&self.scheme_type))
    }
}

impl Prepare for UpdateGovernmentSchemeEntity {
    fn prepare(&mut self) -> Result<(), AppError> {
        ensure_opt::<SchemeType>(self.scheme_type.as_ref())
    }
}

#[derive(Queryable, Selectable, Identifiable, Serialize, Debug, Clone, ToSchema)]
#[diesel(table_name = crate::schema::scheme_applications)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct SchemeApplicationEntity {
    pub id: i32,
    pub application_number: String,
    pub scheme_id: i32,
    pub farmer_id: i32,
    pub application_data: Value,
    pub supporting_documents: Value,
    pub status: String,
    pub submitted_date: Option<DateTime<Utc>>,
    pub review_date: Option<DateTime<Utc>>,
    pub decision_date: Option<DateTime<Utc>>,
    pub approved_amount: Option<Decimal>,
    pub disbursement_date: Option<DateTime<Utc>>,
    pub rejection_reason: String,
    pub officer_comments: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Insertable, Deserialize, Debug)]
#[diesel(table_name = crate::schema::scheme_applications)]
pub struct CreateSchemeApplicationEntity {
    pub application_number: String,
    pub scheme_id: i32,
    pub farmer_id: i32,
    pub application_data: Option<Value>,
    pub supporting_documents: Option<Value>,
    pub status: Option<String>,
    pub submitted_date: Option<DateTime<Utc>>,
}

#[derive(AsChangeset, Deserialize, Debug, Default)]
#[diesel(table_name = crate::schema::scheme_applications)]
pub struct UpdateSchemeApplicationEntity {
    pub application_data: Option<Value>,
    pub supporting_documents: Option<Value>,
    pub status: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub submitted_date: Option<Option<DateTime<Utc>>>,
    #[serde(default, deserialize_with = "double_option")]
    pub review_date: Option<Option<DateTime<Utc>>>,
    #[serde(default, deserialize_with = "double_option")]
    pub decision_date: Option<Option<DateTime<Utc>>>,
    #[serde(default, deserialize_with = "double_option")]
    pub approved_amount: Option<Option<Decimal>>,
    #[serde(default, deserialize_with = "double_option")]
    pub disbursement_date: Option<Option<DateTime<Utc>>>,
    pub rejection_reason: Option<String>,
    pub officer_comments: Option<String>,
}

impl Prepare for CreateSchemeApplicationEntity {
    fn prepare(&mut self) -> Result<(), AppError> {
        ensure_opt::<SchemeApplicationStatus>(self.status.as_ref())
    }
}

impl Prepare for UpdateSchemeApplicationEntity {
    fn prepare(&mut self) -> Result<(), AppError> {
        ensure_opt::<SchemeApplicationStatus>(self.status.as_ref())
    }
}
