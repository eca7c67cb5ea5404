use chrono::{DateTime, NaiveDate, Utc};
use diesel::prelude::{AsChangeset, Identifiable, Insertable, Queryable, Selectable};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;
use uuid::Uuid;

use super::{Prepare, double_option};
use crate::{
    choices::{CooperativeType, MembershipStatus, ensure_opt},
    core::app_error::AppError,
};

#[derive(Queryable, Selectable, Identifiable, Serialize, Debug, Clone, ToSchema)]
#[diesel(table_name = crate::schema::cooperatives)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct CooperativeEntity {
    pub id: i32,
    pub name: String,
    pub registration_number: String,
    pub cooperative_type: String,
    pub description: String,
    pub location_id: i32,
    pub chairman_id: Uuid,
    pub secretary_id: Uuid,
    pub treasurer_id: Uuid,
    pub registration_date: NaiveDate,
    pub member_count: i32,
    pub share_value: Decimal,
    pub services_offered: Value,
    pub contact_phone: String,
    pub contact_email: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Insertable, Deserialize, Debug)]
#[diesel(table_name = crate::schema::cooperatives)]
pub struct CreateCooperativeEntity {
    pub name: String,
    pub registration_number: String,
    pub cooperative_type: String,
    pub description: String,
    pub location_id: i32,
    pub chairman_id: Uuid,
    pub secretary_id: Uuid,
    pub treasurer_id: Uuid,
    pub registration_date: NaiveDate,
    pub member_count: Option<i32>,
    pub share_value: Option<Decimal>,
    pub services_offered: Option<Value>,
    pub contact_phone: String,
    pub contact_email: Option<String>,
    pub is_active: Option<bool>,
}

#[derive(AsChangeset, Deserialize, Debug, Default)]
#[diesel(table_name = crate::schema::cooperatives)]
pub struct UpdateCooperativeEntity {
    pub name: Option<String>,
    pub registration_number: Option<String>,
    pub cooperative_type: Option<String>,
    pub description: Option<String>,
    pub location_id: Option<i32>,
    pub chairman_id: Option<Uuid>,
    pub secretary_id: Option<Uuid>,
    pub treasurer_id: Option<Uuid>,
    pub registration_date: Option<NaiveDate>,
    pub member_count: Option<i32>,
    pub share_value: Option<Decimal>,
    pub services_offered: Option<Value>,
    pub contact_phone: Option<String>,
    pub contact_email: Option<String>,
    pub is_active: Option<bool>,
}

impl Prepare for CreateCooperativeEntity {
    fn prepare(&mut self) -> Result<(), AppError> {
        ensure_opt::<CooperativeType>(Some(&self.cooperative_type))
    }
}

impl Prepare for UpdateCooperativeEntity {
    fn prepare(&mut self) -> Result<(), AppError> {
        ensure_opt::<CooperativeType>(self.cooperative_type.as_ref())
    }
}

#[derive(Queryable, Selectable, Identifiable, Serialize, Debug, Clone, ToSchema)]
#[diesel(table_name = crate::schema::cooperative_memberships)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct CooperativeMembershipEntity {
    pub id: i32,
    pub cooperative_id: i32,
    pub member_id: Uuid,
    pub membership_number: String,
    pub join_date: NaiveDate,
    pub status: String,
    pub shares_owned: i32,
    pub total_contribution: Decimal,
    pub position: String,
    pub monthly_contribution: Decimal,
    pub last_contribution_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
}

#[derive(Insertable, Deserialize, Debug)]
#[diesel(table_name = crate::schema::cooperative_memberships)]
pub struct CreateCooperativeMembershipEntity {
    pub cooperative_id: i32,
    pub member_id: Uuid,
    pub membership_number: String,
    pub join_date: NaiveDate,
    pub status: Option<String>,
    pub shares_owned: Option<i32>,
    pub total_contribution: Option<Decimal>,
    pub position: Option<String>,
    pub monthly_contribution: Option<Decimal>,
    pub last_contribution_date: Option<NaiveDate>,
}

#[derive(AsChangeset, Deserialize, Debug, Default)]
#[diesel(table_name = crate::schema::cooperative_memberships)]
pub struct UpdateCooperativeMembershipEntity {
    pub membership_number: Option<String>,
    pub join_date: Option<NaiveDate>,
    pub status: Option<String>,
    pub shares_owned: Option<i32>,
    pub total_contribution: Option<Decimal>,
    pub position: Option<String>,
    pub monthly_contribution: Option<Decimal>,
    #[serde(default, deserialize_with = "double_option")]
    pub last_contribution_date: Option<Option<NaiveDate>>,
}

impl Prepare for CreateCooperativeMembershipEntity {
    fn prepare(&mut self) -> Result<(), AppError> {
        ensure_opt::<MembershipStatus>(self.status.as_ref())
    }
}

impl Prepare for UpdateCooperativeMembershipEntity {
    fn prepare(&mut self) -> Result<(), AppError> {
        ensure_opt::<MembershipStatus>(self.status.as_ref())
    }
}
