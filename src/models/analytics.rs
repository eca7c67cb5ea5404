use chrono::{DateTime, NaiveDate, Utc};
use diesel::prelude::{AsChangeset, Identifiable, Insertable, Queryable, Selectable};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;
use uuid::Uuid;

use super::{Prepare, double_option};
use crate::{
    choices::{ConfigType, ensure_opt},
    core::app_error::AppError,
};

// User activities

#[derive(Queryable, Selectable, Identifiable, Serialize, Debug, Clone, ToSchema)]
#[diesel(table_name = crate::schema::user_activities)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct UserActivityEntity {
    pub id: i32,
    pub user_id: Uuid,
    pub activity_type: String,
    pub description: String,
    pub metadata: Value,
    pub ip_address: Option<String>,
    pub user_agent: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Insertable, Deserialize, Debug)]
#[diesel(table_name = crate::schema::user_activities)]
pub struct CreateUserActivityEntity {
    pub user_id: Uuid,
    pub activity_type: String,
    pub description: String,
    pub metadata: Option<Value>,
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
}

#[derive(AsChangeset, Deserialize, Debug, Default)]
#[diesel(table_name = crate::schema::user_activities)]
pub struct UpdateUserActivityEntity {
    pub activity_type: Option<String>,
    pub description: Option<String>,
    pub metadata: Option<Value>,
    #[serde(default, deserialize_with = "double_option")]
    pub ip_address: Option<Option<String>>,
    pub user_agent: Option<String>,
}

impl Prepare for CreateUserActivityEntity {}
impl Prepare for UpdateUserActivityEntity {}

// System metrics

#[derive(Queryable, Selectable, Identifiable, Serialize, Debug, Clone, ToSchema)]
#[diesel(table_name = crate::schema::system_metrics)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct SystemMetricEntity {
    pub id: i32,
    pub metric_name: String,
    pub metric_value: Decimal,
    pub metric_type: String,
    pub period: String,
    pub date_recorded: NaiveDate,
    pub additional_data: Value,
    pub created_at: DateTime<Utc>,
}

#[derive(Insertable, Deserialize, Debug)]
#[diesel(table_name = crate::schema::system_metrics)]
pub struct CreateSystemMetricEntity {
    pub metric_name: String,
    pub metric_value: Decimal,
    pub metric_type: String,
    pub period: String,
    pub date_recorded: NaiveDate,
    pub additional_data: Option<Value>,
}

#[derive(AsChangeset, Deserialize, Debug, Default)]
#[diesel(table_name = crate::schema::system_metrics)]
pub struct UpdateSystemMetricEntity {
    pub metric_name: Option<String>,
    pub metric_value: Option<Decimal>,
    pub metric_type: Option<String>,
    pub period: Option<String>,
    pub date_recorded: Option<NaiveDate>,
    pub additional_data: Option<Value>,
}

impl Prepare for CreateSystemMetricEntity {}
impl Prepare for UpdateSystemMetricEntity {}

// Audit logs
//
// Written only by the admin layer; there is no update model.

#[derive(Queryable, Selectable, Identifiable, Serialize, Debug, Clone, ToSchema)]
#[diesel(table_name = crate::schema::audit_logs)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct AuditLogEntity {
    pub id: i32,
    pub user_id: Option<Uuid>,
    pub action: String,
    pub object_type: String,
    pub object_id: String,
    pub object_repr: String,
    pub changes: Value,
    pub ip_address: Option<String>,
    pub user_agent: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Insertable, Debug)]
#[diesel(table_name = crate::schema::audit_logs)]
pub struct CreateAuditLogEntity {
    pub user_id: Option<Uuid>,
    pub action: String,
    pub object_type: String,
    pub object_id: String,
    pub object_repr: String,
    pub changes: Value,
    pub ip_address: Option<String>,
    pub user_agent: String,
}

// System configurations

#[derive(Queryable, Selectable, Identifiable, Serialize, Debug, Clone, ToSchema)]
#[diesel(table_name = crate::schema::system_configurations)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct SystemConfigurationEntity {
    pub id: i32,
    pub key: String,
    pub value: String,
    pub config_type: String,
    pub description: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Insertable, Deserialize, Debug)]
#[diesel(table_name = crate::schema::system_configurations)]
pub struct CreateSystemConfigurationEntity {
    pub key: String,
    pub value: String,
    pub config_type: String,
    pub description: Option<String>,
    pub is_active: Option<bool>,
}

#[derive(AsChangeset, Deserialize, Debug, Default)]
#[diesel(table_name = crate::schema::system_configurations)]
pub struct UpdateSystemConfigurationEntity {
    pub key: Option<String>,
    pub value: Option<String>,
    pub config_type: Option<String>,
    pub description: Option<String>,
    pub is_active: Option<bool>,
}

impl Prepare for CreateSystemConfigurationEntity {
    fn prepare(&mut self) -> Result<(), AppError> {
        ensure_opt::<ConfigType>(Some(&self.config_type))
    }
}

impl Prepare for UpdateSystemConfigurationEntity {
    fn prepare(&mut self) -> Result<(), AppError> {
        ensure_opt::<ConfigType>(self.config_type.as_ref())
    }
}
