use chrono::{DateTime, Utc};
use diesel::prelude::{AsChangeset, Identifiable, Insertable, Queryable, Selectable};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::Prepare;
use crate::{
    choices::{Platform, ensure_opt},
    core::app_error::AppError,
};

// Mobile devices

#[derive(Queryable, Selectable, Identifiable, Serialize, Debug, Clone, ToSchema)]
#[diesel(table_name = crate::schema::mobile_devices)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct MobileDeviceEntity {
    pub id: i32,
    pub user_id: Uuid,
    pub device_id: String,
    pub device_type: String,
    pub device_token: String,
    pub app_version: String,
    pub os_version: String,
    pub is_active: bool,
    pub last_seen: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

#[derive(Insertable, Deserialize, Debug)]
#[diesel(table_name = crate::schema::mobile_devices)]
pub struct CreateMobileDeviceEntity {
    pub user_id: Uuid,
    pub device_id: String,
    pub device_type: String,
    pub device_token: String,
    pub app_version: Option<String>,
    pub os_version: Option<String>,
    pub is_active: Option<bool>,
}

/// Every saved change counts as the device being seen.
#[derive(AsChangeset, Deserialize, Debug, Default)]
#[diesel(table_name = crate::schema::mobile_devices)]
pub struct UpdateMobileDeviceEntity {
    pub device_type: Option<String>,
    pub device_token: Option<String>,
    pub app_version: Option<String>,
    pub os_version: Option<String>,
    pub is_active: Option<bool>,
    #[serde(skip)]
    pub last_seen: Option<DateTime<Utc>>,
}

impl Prepare for CreateMobileDeviceEntity {
    fn prepare(&mut self) -> Result<(), AppError> {
        ensure_opt::<Platform>(Some(&self.device_type))
    }
}

impl Prepare for UpdateMobileDeviceEntity {
    fn prepare(&mut self) -> Result<(), AppError> {
        ensure_opt::<Platform>(self.device_type.as_ref())?;
        self.last_seen = Some(Utc::now());
        Ok(())
    }
}

// App versions

#[derive(Queryable, Selectable, Identifiable, Serialize, Debug, Clone, ToSchema)]
#[diesel(table_name = crate::schema::app_versions)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct AppVersionEntity {
    pub id: i32,
    pub platform: String,
    pub version_number: String,
    pub build_number: String,
    pub release_notes: String,
    pub minimum_supported_version: String,
    pub force_update: bool,
    pub download_url: String,
    pub is_active: bool,
    pub release_date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

#[derive(Insertable, Deserialize, Debug)]
#[diesel(table_name = crate::schema::app_versions)]
pub struct CreateAppVersionEntity {
    pub platform: String,
    pub version_number: String,
    pub build_number: String,
    pub release_notes: Option<String>,
    pub minimum_supported_version: Option<String>,
    pub force_update: Option<bool>,
    pub download_url: String,
    pub is_active: Option<bool>,
    pub release_date: DateTime<Utc>,
}

#[derive(AsChangeset, Deserialize, Debug, Default)]
#[diesel(table_name = crate::schema::app_versions)]
pub struct UpdateAppVersionEntity {
    pub build_number: Option<String>,
    pub release_notes: Option<String>,
    pub minimum_supported_version: Option<String>,
    pub force_update: Option<bool>,
    pub download_url: Option<String>,
    pub is_active: Option<bool>,
    pub release_date: Option<DateTime<Utc>>,
}

impl Prepare for CreateAppVersionEntity {
    fn prepare(&mut self) -> Result<(), AppError> {
        ensure_opt::<Platform>(Some(&self.platform))
    }
}

impl Prepare for UpdateAppVersionEntity {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn updating_a_device_marks_it_seen() {
        let mut update: UpdateMobileDeviceEntity =
            serde_json::from_str(r#"{"app_version": "2.4.1"}"#).unwrap();
        let before = Utc::now();
        update.prepare().unwrap();
        assert!(update.last_seen.is_some_and(|seen| seen >= before));
    }

    #[test]
    fn only_android_and_ios_devices_register() {
        let mut device = CreateMobileDeviceEntity {
            user_id: Uuid::new_v4(),
            device_id: "a1b2c3".into(),
            device_type: "symbian".into(),
            device_token: "token".into(),
            app_version: None,
            os_version: None,
            is_active: None,
        };
        assert!(device.prepare().is_err());
        device.device_type = "android".into();
        assert!(device.prepare().is_ok());
    }
}
