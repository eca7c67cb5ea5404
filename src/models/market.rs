use chrono::{DateTime, NaiveDate, Utc};
use diesel::prelude::{AsChangeset, Identifiable, Insertable, Queryable, Selectable};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use super::Prepare;
use crate::{
    choices::{DemandLevel, PriceDirection, ensure_opt},
    core::app_error::AppError,
};

// Market prices

/// A price observation for a crop in a county market. `location_id` points at `counties`.
#[derive(Queryable, Selectable, Identifiable, Serialize, Debug, Clone, ToSchema)]
#[diesel(table_name = crate::schema::market_prices)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct MarketPriceEntity {
    pub id: i32,
    pub crop_id: i32,
    pub location_id: i32,
    pub market_name: String,
    pub price_per_unit: Decimal,
    pub unit_id: i32,
    pub quality_grade: String,
    pub supply_level: String,
    pub demand_level: String,
    pub price_trend: String,
    pub source: String,
    pub date_recorded: NaiveDate,
    pub notes: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Insertable, Deserialize, Debug)]
#[diesel(table_name = crate::schema::market_prices)]
pub struct CreateMarketPriceEntity {
    pub crop_id: i32,
    pub location_id: i32,
    pub market_name: String,
    pub price_per_unit: Decimal,
    pub unit_id: i32,
    pub quality_grade: String,
    pub supply_level: String,
    pub demand_level: String,
    pub price_trend: String,
    pub source: String,
    pub date_recorded: NaiveDate,
    pub notes: Option<String>,
}

#[derive(AsChangeset, Deserialize, Debug, Default)]
#[diesel(table_name = crate::schema::market_prices)]
pub struct UpdateMarketPriceEntity {
    pub crop_id: Option<i32>,
    pub location_id: Option<i32>,
    pub market_name: Option<String>,
    pub price_per_unit: Option<Decimal>,
    pub unit_id: Option<i32>,
    pub quality_grade: Option<String>,
    pub supply_level: Option<String>,
    pub demand_level: Option<String>,
    pub price_trend: Option<String>,
    pub source: Option<String>,
    pub date_recorded: Option<NaiveDate>,
    pub notes: Option<String>,
}

impl Prepare for CreateMarketPriceEntity {}
impl Prepare for UpdateMarketPriceEntity {}

// Crop calendar

/// Planting and harvesting windows of a crop in one county, as month names.
#[derive(Queryable, Selectable, Identifiable, Serialize, Debug, Clone, ToSchema)]
#[diesel(table_name = crate::schema::crop_calendar)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct CropCalendarEntity {
    pub id: i32,
    pub crop_id: i32,
    pub county_id: i32,
    pub planting_season_start: String,
    pub planting_season_end: String,
    pub harvesting_season_start: String,
    pub harvesting_season_end: String,
    pub recommended_varieties: String,
    pub special_notes: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Insertable, Deserialize, Debug)]
#[diesel(table_name = crate::schema::crop_calendar)]
pub struct CreateCropCalendarEntity {
    pub crop_id: i32,
    pub county_id: i32,
    pub planting_season_start: String,
    pub planting_season_end: String,
    pub harvesting_season_start: String,
    pub harvesting_season_end: String,
    pub recommended_varieties: Option<String>,
    pub special_notes: Option<String>,
}

#[derive(AsChangeset, Deserialize, Debug, Default)]
#[diesel(table_name = crate::schema::crop_calendar)]
pub struct UpdateCropCalendarEntity {
    pub crop_id: Option<i32>,
    pub county_id: Option<i32>,
    pub planting_season_start: Option<String>,
    pub planting_season_end: Option<String>,
    pub harvesting_season_start: Option<String>,
    pub harvesting_season_end: Option<String>,
    pub recommended_varieties: Option<String>,
    pub special_notes: Option<String>,
}

impl Prepare for CreateCropCalendarEntity {}
impl Prepare for UpdateCropCalendarEntity {}

// Demand forecasts

/// `location_id` points at `counties`; `forecast_period` is free text such as `Q1 2025`.
#[derive(Queryable, Selectable, Identifiable, Serialize, Debug, Clone, ToSchema)]
#[diesel(table_name = crate::schema::market_demand_forecasts)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct MarketDemandForecastEntity {
    pub id: i32,
    pub crop_id: i32,
    pub location_id: i32,
    pub forecast_period: String,
    pub expected_demand: String,
    pub price_prediction: String,
    pub confidence_level: i32,
    pub factors: Value,
    pub recommendations: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Insertable, Deserialize, Debug)]
#[diesel(table_name = crate::schema::market_demand_forecasts)]
pub struct CreateMarketDemandForecastEntity {
    pub crop_id: i32,
    pub location_id: i32,
    pub forecast_period: String,
    pub expected_demand: String,
    pub price_prediction: String,
    pub confidence_level: i32,
    pub factors: Option<Value>,
    pub recommendations: Option<String>,
}

#[derive(AsChangeset, Deserialize, Debug, Default)]
#[diesel(table_name = crate::schema::market_demand_forecasts)]
pub struct UpdateMarketDemandForecastEntity {
    pub crop_id: Option<i32>,
    pub location_id: Option<i32>,
    pub forecast_period: Option<String>,
    pub expected_demand: Option<String>,
    pub price_prediction: Option<String>,
    pub confidence_level: Option<i32>,
    pub factors: Option<Value>,
    pub recommendations: Option<String>,
}

impl Prepare for CreateMarketDemandForecastEntity {
    fn prepare(&mut self) -> Result<(), AppError> {
        ensure_opt::<DemandLevel>(Some(&self.expected_demand))?;
        ensure_opt::<PriceDirection>(Some(&self.price_prediction))
    }
}

impl Prepare for UpdateMarketDemandForecastEntity {
    fn prepare(&mut self) -> Result<(), AppError> {
        ensure_opt::<DemandLevel>(self.expected_demand.as_ref())?;
        ensure_opt::<PriceDirection>(self.price_prediction.as_ref())
    }
}
