use chrono::{DateTime, NaiveDate, Utc};
use diesel::prelude::{AsChangeset, Identifiable, Insertable, Queryable, Selectable};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;
use uuid::Uuid;

use super::{Prepare, double_option};
use crate::{
    choices::{Choice, InspectionStatus, InspectionType, ensure_opt},
    core::app_error::AppError,
};

// Quality standards

#[derive(Queryable, Selectable, Identifiable, Serialize, Debug, Clone, ToSchema)]
#[diesel(table_name = crate::schema::quality_standards)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct QualityStandardEntity {
    pub id: i32,
    pub crop_id: i32,
    pub standard_name: String,
    pub certifying_body: String,
    pub description: String,
    pub requirements: Value,
    pub testing_parameters: Value,
    pub validity_period_months: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Insertable, Deserialize, Debug)]
#[diesel(table_name = crate::schema::quality_standards)]
pub struct CreateQualityStandardEntity {
    pub crop_id: i32,
    pub standard_name: String,
    pub certifying_body: String,
    pub description: String,
    pub requirements: Option<Value>,
    pub testing_parameters: Option<Value>,
    pub validity_period_months: Option<i32>,
    pub is_active: Option<bool>,
}

#[derive(AsChangeset, Deserialize, Debug, Default)]
#[diesel(table_name = crate::schema::quality_standards)]
pub struct UpdateQualityStandardEntity {
    pub crop_id: Option<i32>,
    pub standard_name: Option<String>,
    pub certifying_body: Option<String>,
    pub description: Option<String>,
    pub requirements: Option<Value>,
    pub testing_parameters: Option<Value>,
    pub validity_period_months: Option<i32>,
    pub is_active: Option<bool>,
}

impl Prepare for CreateQualityStandardEntity {}
impl Prepare for UpdateQualityStandardEntity {}

// Quality inspectors

/// Crops and counties an inspector covers live in the
/// `quality_inspector_specializations` and `quality_inspector_service_areas` links.
#[derive(Queryable, Selectable, Identifiable, Serialize, Debug, Clone, ToSchema)]
#[diesel(table_name = crate::schema::quality_inspectors)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct QualityInspectorEntity {
    pub id: i32,
    pub user_id: Uuid,
    pub license_number: String,
    pub certifications: Value,
    pub inspection_fee: Decimal,
    pub rating: Decimal,
    pub is_available: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Insertable, Deserialize, Debug)]
#[diesel(table_name = crate::schema::quality_inspectors)]
pub struct CreateQualityInspectorEntity {
    pub user_id: Uuid,
    pub license_number: String,
    pub certifications: Option<Value>,
    pub inspection_fee: Decimal,
    pub rating: Option<Decimal>,
    pub is_available: Option<bool>,
}

#[derive(AsChangeset, Deserialize, Debug, Default)]
#[diesel(table_name = crate::schema::quality_inspectors)]
pub struct UpdateQualityInspectorEntity {
    pub license_number: Option<String>,
    pub certifications: Option<Value>,
    pub inspection_fee: Option<Decimal>,
    pub rating: Option<Decimal>,
    pub is_available: Option<bool>,
}

impl Prepare for CreateQualityInspectorEntity {}
impl Prepare for UpdateQualityInspectorEntity {}

// Quality inspections

/// `report_document` is a stored file path, if a report was uploaded.
#[derive(Queryable, Selectable, Identifiable, Serialize, Debug, Clone, ToSchema)]
#[diesel(table_name = crate::schema::quality_inspections)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct QualityInspectionEntity {
    pub id: i32,
    pub inspection_number: String,
    pub product_id: i32,
    pub inspector_id: i32,
    pub inspection_type: String,
    pub scheduled_date: DateTime<Utc>,
    pub actual_date: Option<DateTime<Utc>>,
    pub status: String,
    pub inspection_parameters: Value,
    pub test_results: Value,
    pub overall_grade: String,
    pub pass_fail_status: String,
    pub recommendations: String,
    pub certificate_issued: bool,
    pub certificate_number: String,
    pub validity_date: Option<NaiveDate>,
    pub inspection_fee: Decimal,
    pub report_document: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Insertable, Deserialize, Debug)]
#[diesel(table_name = crate::schema::quality_inspections)]
pub struct CreateQualityInspectionEntity {
    pub inspection_number: String,
    pub product_id: i32,
    pub inspector_id: i32,
    pub inspection_type: String,
    pub scheduled_date: DateTime<Utc>,
    pub status: Option<String>,
    pub inspection_parameters: Option<Value>,
    pub inspection_fee: Decimal,
}

#[derive(AsChangeset, Deserialize, Debug, Default)]
#[diesel(table_name = crate::schema::quality_inspections)]
pub struct UpdateQualityInspectionEntity {
    pub inspector_id: Option<i32>,
    pub inspection_type: Option<String>,
    pub scheduled_date: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "double_option")]
    pub actual_date: Option<Option<DateTime<Utc>>>,
    pub status: Option<String>,
    pub inspection_parameters: Option<Value>,
    pub test_results: Option<Value>,
    pub overall_grade: Option<String>,
    pub pass_fail_status: Option<String>,
    pub recommendations: Option<String>,
    pub certificate_issued: Option<bool>,
    pub certificate_number: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub validity_date: Option<Option<NaiveDate>>,
    pub inspection_fee: Option<Decimal>,
    #[serde(default, deserialize_with = "double_option")]
    pub report_document: Option<Option<String>>,
}

impl Prepare for CreateQualityInspectionEntity {
    fn prepare(&mut self) -> Result<(), AppError> {
        ensure_opt::<InspectionType>(Some(&self.inspection_type))?;
        ensure_opt::<InspectionStatus>(self.status.as_ref())
    }
}

impl Prepare for UpdateQualityInspectionEntity {
    fn prepare(&mut self) -> Result<(), AppError> {
        ensure_opt::<InspectionType>(self.inspection_type.as_ref())?;
        ensure_opt::<InspectionStatus>(self.status.as_ref())?;

        if self.certificate_issued == Some(true)
            && self.certificate_number.as_deref().is_none_or(|n| n.trim().is_empty())
        {
            return Err(AppError::BadRequest(
                "An issued certificate needs a certificate_number".into(),
            ));
        }
        let completed = self.status.as_deref() == Some(InspectionStatus::Completed.as_str());
        if completed && self.actual_date.is_none() {
            self.actual_date = Some(Some(Utc::now()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn completing_an_inspection_records_when_it_happened() {
        let mut done: UpdateQualityInspectionEntity =
            serde_json::from_str(r#"{"status": "completed", "overall_grade": "A"}"#).unwrap();
        done.prepare().unwrap();
        assert!(matches!(done.actual_date, Some(Some(_))));
    }

    #[test]
    fn certificates_need_a_number() {
        let mut missing: UpdateQualityInspectionEntity =
            serde_json::from_str(r#"{"certificate_issued": true}"#).unwrap();
        assert!(missing.prepare().is_err());

        let mut issued: UpdateQualityInspectionEntity = serde_json::from_str(
            r#"{"certificate_issued": true, "certificate_number": "KEBS-2025-0042"}"#,
        )
        .unwrap();
        assert!(issued.prepare().is_ok());
    }

    #[test]
    fn unknown_inspection_type_is_rejected() {
        let mut update: UpdateQualityInspectionEntity =
            serde_json::from_str(r#"{"inspection_type": "surprise"}"#).unwrap();
        assert!(update.prepare().is_err());
    }
}
