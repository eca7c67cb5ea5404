use chrono::{DateTime, Utc};
use diesel::prelude::{AsChangeset, Identifiable, Insertable, Queryable, Selectable};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;
use uuid::Uuid;

use super::{Prepare, double_option};
use crate::{
    choices::{BillingCycle, Choice, PlanType, SubscriptionStatus, ensure_opt},
    core::app_error::AppError,
};

// Subscription plans

/// `commission_rate` is a percentage taken on sales made under the plan.
#[derive(Queryable, Selectable, Identifiable, Serialize, Debug, Clone, ToSchema)]
#[diesel(table_name = crate::schema::subscription_plans)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct SubscriptionPlanEntity {
    pub id: i32,
    pub name: String,
    pub plan_type: String,
    pub description: String,
    pub price: Decimal,
    pub billing_cycle: String,
    pub features: Value,
    pub max_products: Option<i32>,
    pub max_orders_per_month: Option<i32>,
    pub premium_support: bool,
    pub market_insights: bool,
    pub priority_listing: bool,
    pub commission_rate: Decimal,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Insertable, Deserialize, Debug)]
#[diesel(table_name = crate::schema::subscription_plans)]
pub struct CreateSubscriptionPlanEntity {
    pub name: String,
    pub plan_type: String,
    pub description: String,
    pub price: Decimal,
    pub billing_cycle: String,
    pub features: Option<Value>,
    pub max_products: Option<i32>,
    pub max_orders_per_month: Option<i32>,
    pub premium_support: Option<bool>,
    pub market_insights: Option<bool>,
    pub priority_listing: Option<bool>,
    pub commission_rate: Option<Decimal>,
    pub is_active: Option<bool>,
}

#[derive(AsChangeset, Deserialize, Debug, Default)]
#[diesel(table_name = crate::schema::subscription_plans)]
pub struct UpdateSubscriptionPlanEntity {
    pub name: Option<String>,
    pub plan_type: Option<String>,
    pub description: Option<String>,
    pub price: Option<Decimal>,
    pub billing_cycle: Option<String>,
    pub features: Option<Value>,
    #[serde(default, deserialize_with = "double_option")]
    pub max_products: Option<Option<i32>>,
    #[serde(default, deserialize_with = "double_option")]
    pub max_orders_per_month: Option<Option<i32>>,
    pub premium_support: Option<bool>,
    pub market_insights: Option<bool>,
    pub priority_listing: Option<bool>,
    pub commission_rate: Option<Decimal>,
    pub is_active: Option<bool>,
}

impl Prepare for CreateSubscriptionPlanEntity {
    fn prepare(&mut self) -> Result<(), AppError> {
        ensure_opt::<PlanType>(Some(&self.plan_type))?;
        ensure_opt::<BillingCycle>(Some(&self.billing_cycle))
    }
}

impl Prepare for UpdateSubscriptionPlanEntity {
    fn prepare(&mut self) -> Result<(), AppError> {
        ensure_opt::<PlanType>(self.plan_type.as_ref())?;
        ensure_opt::<BillingCycle>(self.billing_cycle.as_ref())
    }
}

// User subscriptions

#[derive(Queryable, Selectable, Identifiable, Serialize, Debug, Clone, ToSchema)]
#[diesel(table_name = crate::schema::user_subscriptions)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct UserSubscriptionEntity {
    pub id: i32,
    pub user_id: Uuid,
    pub plan_id: i32,
    pub status: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub auto_renew: bool,
    pub payment_method_id: i32,
    pub last_payment_date: Option<DateTime<Utc>>,
    pub next_payment_date: Option<DateTime<Utc>>,
    pub cancellation_date: Option<DateTime<Utc>>,
    pub cancellation_reason: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Insertable, Deserialize, Debug)]
#[diesel(table_name = crate::schema::user_subscriptions)]
pub struct CreateUserSubscriptionEntity {
    pub user_id: Uuid,
    pub plan_id: i32,
    pub status: Option<String>,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub auto_renew: Option<bool>,
    pub payment_method_id: i32,
    pub next_payment_date: Option<DateTime<Utc>>,
}

#[derive(AsChangeset, Deserialize, Debug, Default)]
#[diesel(table_name = crate::schema::user_subscriptions)]
pub struct UpdateUserSubscriptionEntity {
    pub plan_id: Option<i32>,
    pub status: Option<String>,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub auto_renew: Option<bool>,
    pub payment_method_id: Option<i32>,
    #[serde(default, deserialize_with = "double_option")]
    pub last_payment_date: Option<Option<DateTime<Utc>>>,
    #[serde(default, deserialize_with = "double_option")]
    pub next_payment_date: Option<Option<DateTime<Utc>>>,
    #[serde(default, deserialize_with = "double_option")]
    pub cancellation_date: Option<Option<DateTime<Utc>>>,
    pub cancellation_reason: Option<String>,
}

fn ensure_period(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<(), AppError> {
    if end <= start {
        return Err(AppError::BadRequest(
            "Subscription end_date must be after start_date".into(),
        ));
    }
    Ok(())
}

impl Prepare for CreateUserSubscriptionEntity {
    fn prepare(&mut self) -> Result<(), AppError> {
        ensure_opt::<SubscriptionStatus>(self.status.as_ref())?;
        ensure_period(self.start_date, self.end_date)
    }
}

impl Prepare for UpdateUserSubscriptionEntity {
    fn prepare(&mut self) -> Result<(), AppError> {
        ensure_opt::<SubscriptionStatus>(self.status.as_ref())?;
        if let (Some(start), Some(end)) = (self.start_date, self.end_date) {
            ensure_period(start, end)?;
        }
        let cancelled = self.status.as_deref() == Some(SubscriptionStatus::Cancelled.as_str());
        if cancelled && self.cancellation_date.is_none() {
            self.cancellation_date = Some(Some(Utc::now()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;

    use super::*;

    #[test]
    fn subscription_must_end_after_it_starts() {
        let start = Utc::now();
        assert!(ensure_period(start, start + Duration::days(30)).is_ok());
        assert!(ensure_period(start, start).is_err());
    }

    #[test]
    fn cancelling_stamps_the_cancellation_date() {
        let mut cancel: UpdateUserSubscriptionEntity =
            serde_json::from_str(r#"{"status": "cancelled", "cancellation_reason": "Season over"}"#)
                .unwrap();
        cancel.prepare().unwrap();
        assert!(matches!(cancel.cancellation_date, Some(Some(_))));

        let mut renew: UpdateUserSubscriptionEntity =
            serde_json::from_str(r#"{"status": "active"}"#).unwrap();
        renew.prepare().unwrap();
        assert_eq!(renew.cancellation_date, None);
    }

    #[test]
    fn unknown_billing_cycle_is_rejected() {
        let mut plan: UpdateSubscriptionPlanEntity =
            serde_json::from_str(r#"{"billing_cycle": "weekly"}"#).unwrap();
        assert!(plan.prepare().is_err());
    }
}
