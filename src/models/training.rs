use chrono::{DateTime, Utc};
use diesel::prelude::{AsChangeset, Identifiable, Insertable, Queryable, Selectable};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use super::{Prepare, double_option};
use crate::{
    choices::{CourseType, DifficultyLevel, EnrollmentStatus, SessionStatus, ensure_opt},
    core::app_error::AppError,
};

// Providers

#[derive(Queryable, Selectable, Identifiable, Serialize, Debug, Clone, ToSchema)]
#[diesel(table_name = crate::schema::training_providers)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TrainingProviderEntity {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub contact_person: String,
    pub phone_number: String,
    pub email: String,
    pub website: String,
    pub specializations: Value,
    pub accreditation: String,
    pub is_verified: bool,
    pub rating: Decimal,
    pub created_at: DateTime<Utc>,
}

#[derive(Insertable, Deserialize, Debug)]
#[diesel(table_name = crate::schema::training_providers)]
pub struct CreateTrainingProviderEntity {
    pub name: String,
    pub description: String,
    pub contact_person: String,
    pub phone_number: String,
    pub email: String,
    pub website: Option<String>,
    pub specializations: Option<Value>,
    pub accreditation: Option<String>,
    pub is_verified: Option<bool>,
    pub rating: Option<Decimal>,
}

#[derive(AsChangeset, Deserialize, Debug, Default)]
#[diesel(table_name = crate::schema::training_providers)]
pub struct UpdateTrainingProviderEntity {
    pub name: Option<String>,
    pub description: Option<String>,
    pub contact_person: Option<String>,
    pub phone_number: Option<String>,
    pub email: Option<String>,
    pub website: Option<String>,
    pub specializations: Option<Value>,
    pub accreditation: Option<String>,
    pub is_verified: Option<bool>,
    pub rating: Option<Decimal>,
}

impl Prepare for CreateTrainingProviderEntity {}
impl Prepare for UpdateTrainingProviderEntity {}

// Courses

#[derive(Queryable, Selectable, Identifiable, Serialize, Debug, Clone, ToSchema)]
#[diesel(table_name = crate::schema::training_courses)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TrainingCourseEntity {
    pub id: i32,
    pub provider_id: i32,
    pub title: String,
    pub description: String,
    pub course_type: String,
    pub difficulty_level: String,
    pub duration_hours: i32,
    pub course_fee: Decimal,
    pub max_participants: i32,
    pub prerequisites: String,
    pub learning_objectives: Value,
    pub curriculum: Value,
    pub certification_offered: bool,
    pub certificate_fee: Decimal,
    pub materials_provided: Value,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Insertable, Deserialize, Debug)]
#[diesel(table_name = crate::schema::training_courses)]
pub struct CreateTrainingCourseEntity {
    pub provider_id: i32,
    pub title: String,
    pub description: String,
    pub course_type: String,
    pub difficulty_level: String,
    pub duration_hours: i32,
    pub course_fee: Option<Decimal>,
    pub max_participants: Option<i32>,
    pub prerequisites: Option<String>,
    pub learning_objectives: Option<Value>,
    pub curriculum: Option<Value>,
    pub certification_offered: Option<bool>,
    pub certificate_fee: Option<Decimal>,
    pub materials_provided: Option<Value>,
    pub is_active: Option<bool>,
}

#[derive(AsChangeset, Deserialize, Debug, Default)]
#[diesel(table_name = crate::schema::training_courses)]
pub struct UpdateTrainingCourseEntity {
    pub provider_id: Option<i32>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub course_type: Option<String>,
    pub difficulty_level: Option<String>,
    pub duration_hours: Option<i32>,
    pub course_fee: Option<Decimal>,
    pub max_participants: Option<i32>,
    pub prerequisites: Option<String>,
    pub learning_objectives: Option<Value>,
    pub curriculum: Option<Value>,
    pub certification_offered: Option<bool>,
    pub certificate_fee: Option<Decimal>,
    pub materials_provided: Option<Value>,
    pub is_active: Option<bool>,
}

impl Prepare for CreateTrainingCourseEntity {
    fn prepare(&mut self) -> Result<(), AppError> {
        ensure_opt::<CourseType>(Some(&self.course_type))?;
        ensure_opt::<DifficultyLevel>(Some(&self.difficulty_level))
    }
}

impl Prepare for UpdateTrainingCourseEntity {
    fn prepare(&mut self) -> Result<(), AppError> {
        ensure_opt::<CourseType>(self.course_type.as_ref())?;
        ensure_opt::<DifficultyLevel>(self.difficulty_level.as_ref())
    }
}

// Sessions

#[derive(Queryable, Selectable, Identifiable, Serialize, Debug, Clone, ToSchema)]
#[diesel(table_name = crate::schema::training_sessions)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TrainingSessionEntity {
    pub id: i32,
    pub course_id: i32,
    pub session_name: String,
    pub instructor: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub location_id: Option<i32>,
    pub online_meeting_link: String,
    pub status: String,
    pub enrolled_count: i32,
    pub completion_rate: Decimal,
    pub average_rating: Decimal,
    pub materials: Value,
    pub created_at: DateTime<Utc>,
}

#[derive(Insertable, Deserialize, Debug)]
#[diesel(table_name = crate::schema::training_sessions)]
pub struct CreateTrainingSessionEntity {
    pub course_id: i32,
    pub session_name: String,
    pub instructor: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub location_id: Option<i32>,
    pub online_meeting_link: Option<String>,
    pub status: Option<String>,
    pub materials: Option<Value>,
}

#[derive(AsChangeset, Deserialize, Debug, Default)]
#[diesel(table_name = crate::schema::training_sessions)]
pub struct UpdateTrainingSessionEntity {
    pub course_id: Option<i32>,
    pub session_name: Option<String>,
    pub instructor: Option<String>,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "double_option")]
    pub location_id: Option<Option<i32>>,
    pub online_meeting_link: Option<String>,
    pub status: Option<String>,
    pub enrolled_count: Option<i32>,
    pub completion_rate: Option<Decimal>,
    pub average_rating: Option<Decimal>,
    pub materials: Option<Value>,
}

fn ensure_session_window(
    start: Option<DateTime<Utc>>,
    end: Option<DateTime<Utc>>,
) -> Result<(), AppError> {
    match (start, end) {
        (Some(start), Some(end)) if end < start => Err(AppError::BadRequest(
            "Session end_date must not be before start_date".into(),
        )),
        _ => Ok(()),
    }
}

impl Prepare for CreateTrainingSessionEntity {
    fn prepare(&mut self) -> Result<(), AppError> {
        ensure_opt::<SessionStatus>(self.status.as_ref())?;
        ensure_session_window(Some(self.start_date), Some(self.end_date))
    }
}

impl Prepare for UpdateTrainingSessionEntity {
    fn prepare(&mut self) -> Result<(), AppError> {
        ensure_opt::<SessionStatus>(self.status.as_ref())?;
        ensure_session_window(self.start_date, self.end_date)
    }
}

// Enrollments

#[derive(Queryable, Selectable, Identifiable, Serialize, Debug, Clone, ToSchema)]
#[diesel(table_name = crate::schema::training_enrollments)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TrainingEnrollmentEntity {
    pub id: i32,
    pub farmer_id: i32,
    pub session_id: i32,
    pub enrollment_date: DateTime<Utc>,
    pub status: String,
    pub progress_percentage: i32,
    pub completion_date: Option<DateTime<Utc>>,
    pub certificate_issued: bool,
    pub certificate_number: String,
    pub final_score: Option<Decimal>,
    pub feedback_rating: Option<i32>,
    pub feedback_comment: String,
}

#[derive(Insertable, Deserialize, Debug)]
#[diesel(table_name = crate::schema::training_enrollments)]
pub struct CreateTrainingEnrollmentEntity {
    pub farmer_id: i32,
    pub session_id: i32,
    pub status: Option<String>,
    pub progress_percentage: Option<i32>,
}

#[derive(AsChangeset, Deserialize, Debug, Default)]
#[diesel(table_name = crate::schema::training_enrollments)]
pub struct UpdateTrainingEnrollmentEntity {
    pub status: Option<String>,
    pub progress_percentage: Option<i32>,
    #[serde(default, deserialize_with = "double_option")]
    pub completion_date: Option<Option<DateTime<Utc>>>,
    pub certificate_issued: Option<bool>,
    pub certificate_number: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub final_score: Option<Option<Decimal>>,
    #[serde(default, deserialize_with = "double_option")]
    pub feedback_rating: Option<Option<i32>>,
    pub feedback_comment: Option<String>,
}

impl Prepare for CreateTrainingEnrollmentEntity {
    fn prepare(&mut self) -> Result<(), AppError> {
        ensure_opt::<EnrollmentStatus>(self.status.as_ref())
    }
}

impl Prepare for UpdateTrainingEnrollmentEntity {
    fn prepare(&mut self) -> Result<(), AppError> {
        ensure_opt::<EnrollmentStatus>(self.status.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;

    use super::*;

    #[test]
    fn sessions_cannot_end_before_they_start() {
        let start = Utc::now();
        let mut update = UpdateTrainingSessionEntity {
            start_date: Some(start),
            end_date: Some(start - Duration::hours(1)),
            ..Default::default()
        };
        assert!(update.prepare().is_err());

        update.end_date = Some(start + Duration::hours(2));
        assert!(update.prepare().is_ok());
    }
}
