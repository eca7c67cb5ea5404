use chrono::{DateTime, NaiveDate, Utc};
use diesel::prelude::{AsChangeset, Identifiable, Insertable, Queryable, Selectable};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;
use uuid::Uuid;

use super::{Prepare, double_option};
use crate::{
    choices::{ProductQuality, ProductStatus, ensure_opt},
    core::app_error::AppError,
    slug::slugify,
};

fn slugified_name(name: &str) -> Result<String, AppError> {
    let slug = slugify(name);
    if slug.is_empty() {
        return Err(AppError::BadRequest(format!(
            "`{}` does not contain any usable characters",
            name
        )));
    }
    Ok(slug)
}

// Crop categories

#[derive(Queryable, Selectable, Identifiable, Serialize, Debug, Clone, ToSchema)]
#[diesel(table_name = crate::schema::crop_categories)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct CropCategoryEntity {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub parent_id: Option<i32>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Insertable, Deserialize, Debug)]
#[diesel(table_name = crate::schema::crop_categories)]
pub struct CreateCropCategoryEntity {
    pub name: String,
    pub description: Option<String>,
    pub parent_id: Option<i32>,
    pub is_active: Option<bool>,
}

#[derive(AsChangeset, Deserialize, Debug, Default)]
#[diesel(table_name = crate::schema::crop_categories)]
pub struct UpdateCropCategoryEntity {
    pub name: Option<String>,
    pub description: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub parent_id: Option<Option<i32>>,
    pub is_active: Option<bool>,
}

impl Prepare for CreateCropCategoryEntity {
    fn prepare(&mut self) -> Result<(), AppError> {
        self.name = slugified_name(&self.name)?;
        Ok(())
    }
}

impl Prepare for UpdateCropCategoryEntity {
    fn prepare(&mut self) -> Result<(), AppError> {
        if let Some(name) = self.name.as_mut() {
            *name = slugified_name(name)?;
        }
        Ok(())
    }
}

// Crops

#[derive(Queryable, Selectable, Identifiable, Serialize, Debug, Clone, ToSchema)]
#[diesel(table_name = crate::schema::crops)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct CropEntity {
    pub id: i32,
    pub name: String,
    pub scientific_name: String,
    pub category_id: i32,
    pub variety: String,
    pub growing_season: String,
    pub maturity_period_days: Option<i32>,
    pub ideal_temperature_min: Option<f64>,
    pub ideal_temperature_max: Option<f64>,
    pub ideal_rainfall: Option<f64>,
    pub storage_requirements: String,
    pub nutritional_info: Value,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Insertable, Deserialize, Debug)]
#[diesel(table_name = crate::schema::crops)]
pub struct CreateCropEntity {
    pub name: String,
    pub scientific_name: Option<String>,
    pub category_id: i32,
    pub variety: Option<String>,
    pub growing_season: Option<String>,
    pub maturity_period_days: Option<i32>,
    pub ideal_temperature_min: Option<f64>,
    pub ideal_temperature_max: Option<f64>,
    pub ideal_rainfall: Option<f64>,
    pub storage_requirements: Option<String>,
    pub nutritional_info: Option<Value>,
    pub is_active: Option<bool>,
}

#[derive(AsChangeset, Deserialize, Debug, Default)]
#[diesel(table_name = crate::schema::crops)]
pub struct UpdateCropEntity {
    pub name: Option<String>,
    pub scientific_name: Option<String>,
    pub category_id: Option<i32>,
    pub variety: Option<String>,
    pub growing_season: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub maturity_period_days: Option<Option<i32>>,
    #[serde(default, deserialize_with = "double_option")]
    pub ideal_temperature_min: Option<Option<f64>>,
    #[serde(default, deserialize_with = "double_option")]
    pub ideal_temperature_max: Option<Option<f64>>,
    #[serde(default, deserialize_with = "double_option")]
    pub ideal_rainfall: Option<Option<f64>>,
    pub storage_requirements: Option<String>,
    pub nutritional_info: Option<Value>,
    pub is_active: Option<bool>,
}

impl Prepare for CreateCropEntity {
    fn prepare(&mut self) -> Result<(), AppError> {
        self.name = slugified_name(&self.name)?;
        Ok(())
    }
}

impl Prepare for UpdateCropEntity {
    fn prepare(&mut self) -> Result<(), AppError> {
        if let Some(name) = self.name.as_mut() {
            *name = slugified_name(name)?;
        }
        Ok(())
    }
}

// Product units

#[derive(Queryable, Selectable, Identifiable, Serialize, Debug, Clone, ToSchema)]
#[diesel(table_name = crate::schema::product_units)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ProductUnitEntity {
    pub id: i32,
    pub name: String,
    pub abbreviation: String,
    pub base_unit_id: Option<i32>,
    pub conversion_factor: Decimal,
}

#[derive(Insertable, Deserialize, Debug)]
#[diesel(table_name = crate::schema::product_units)]
pub struct CreateProductUnitEntity {
    pub name: String,
    pub abbreviation: String,
    pub base_unit_id: Option<i32>,
    pub conversion_factor: Option<Decimal>,
}

#[derive(AsChangeset, Deserialize, Debug, Default)]
#[diesel(table_name = crate::schema::product_units)]
pub struct UpdateProductUnitEntity {
    pub name: Option<String>,
    pub abbreviation: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub base_unit_id: Option<Option<i32>>,
    pub conversion_factor: Option<Decimal>,
}

impl Prepare for CreateProductUnitEntity {}
impl Prepare for UpdateProductUnitEntity {}

// Products

#[derive(Queryable, Selectable, Identifiable, Serialize, Debug, Clone, ToSchema)]
#[diesel(table_name = crate::schema::products)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ProductEntity {
    pub id: i32,
    pub farmer_id: i32,
    pub crop_id: i32,
    pub farm_id: i32,
    pub name: String,
    pub slug: String,
    pub description: String,
    pub quantity_available: Decimal,
    pub unit_id: i32,
    pub price_per_unit: Decimal,
    pub minimum_order: Decimal,
    pub quality_grade: String,
    pub harvest_date: NaiveDate,
    pub expiry_date: Option<NaiveDate>,
    pub organic_certified: bool,
    pub certification_body: String,
    pub storage_condition: String,
    pub packaging_options: Value,
    pub images: Value,
    pub videos: Value,
    pub status: String,
    pub featured: bool,
    pub views_count: i32,
    pub likes_count: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Insert model for products. An empty or missing `slug` is derived from `name`
/// by the admin create handler.
#[derive(Insertable, Deserialize, Debug)]
#[diesel(table_name = crate::schema::products)]
pub struct CreateProductEntity {
    pub farmer_id: i32,
    pub crop_id: i32,
    pub farm_id: i32,
    pub name: String,
    #[serde(default)]
    pub slug: String,
    pub description: String,
    pub quantity_available: Decimal,
    pub unit_id: i32,
    pub price_per_unit: Decimal,
    pub minimum_order: Option<Decimal>,
    pub quality_grade: Option<String>,
    pub harvest_date: NaiveDate,
    pub expiry_date: Option<NaiveDate>,
    pub organic_certified: Option<bool>,
    pub certification_body: Option<String>,
    pub storage_condition: Option<String>,
    pub packaging_options: Option<Value>,
    pub images: Option<Value>,
    pub videos: Option<Value>,
    pub status: Option<String>,
    pub featured: Option<bool>,
    pub views_count: Option<i32>,
    pub likes_count: Option<i32>,
}

#[derive(AsChangeset, Deserialize, Debug, Default)]
#[diesel(table_name = crate::schema::products)]
pub struct UpdateProductEntity {
    pub farmer_id: Option<i32>,
    pub crop_id: Option<i32>,
    pub farm_id: Option<i32>,
    pub name: Option<String>,
    pub slug: Option<String>,
    pub description: Option<String>,
    pub quantity_available: Option<Decimal>,
    pub unit_id: Option<i32>,
    pub price_per_unit: Option<Decimal>,
    pub minimum_order: Option<Decimal>,
    pub quality_grade: Option<String>,
    pub harvest_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "double_option")]
    pub expiry_date: Option<Option<NaiveDate>>,
    pub organic_certified: Option<bool>,
    pub certification_body: Option<String>,
    pub storage_condition: Option<String>,
    pub packaging_options: Option<Value>,
    pub images: Option<Value>,
    pub videos: Option<Value>,
    pub status: Option<String>,
    pub featured: Option<bool>,
}

impl Prepare for CreateProductEntity {
    fn prepare(&mut self) -> Result<(), AppError> {
        ensure_opt::<ProductQuality>(self.quality_grade.as_ref())?;
        ensure_opt::<ProductStatus>(self.status.as_ref())?;
        self.slug = slugify(&self.slug);
        Ok(())
    }
}

impl Prepare for UpdateProductEntity {
    fn prepare(&mut self) -> Result<(), AppError> {
        ensure_opt::<ProductQuality>(self.quality_grade.as_ref())?;
        ensure_opt::<ProductStatus>(self.status.as_ref())?;
        if let Some(slug) = self.slug.as_mut() {
            *slug = slugify(slug);
        }
        Ok(())
    }
}

// Product reviews

#[derive(Queryable, Selectable, Identifiable, Serialize, Debug, Clone, ToSchema)]
#[diesel(table_name = crate::schema::product_reviews)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ProductReviewEntity {
    pub id: i32,
    pub product_id: i32,
    pub buyer_id: Uuid,
    pub rating: i32,
    pub title: String,
    pub comment: String,
    pub images: Value,
    pub is_verified_purchase: bool,
    pub helpful_votes: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Insertable, Deserialize, Debug)]
#[diesel(table_name = crate::schema::product_reviews)]
pub struct CreateProductReviewEntity {
    pub product_id: i32,
    pub buyer_id: Uuid,
    pub rating: i32,
    #[serde(default)]
    pub title: String,
    pub comment: String,
    pub images: Option<Value>,
    pub is_verified_purchase: Option<bool>,
    pub helpful_votes: Option<i32>,
}

#[derive(AsChangeset, Deserialize, Debug, Default)]
#[diesel(table_name = crate::schema::product_reviews)]
pub struct UpdateProductReviewEntity {
    pub rating: Option<i32>,
    pub title: Option<String>,
    pub comment: Option<String>,
    pub images: Option<Value>,
    pub is_verified_purchase: Option<bool>,
    pub helpful_votes: Option<i32>,
}

fn ensure_rating(rating: i32) -> Result<(), AppError> {
    if !(1..=5).contains(&rating) {
        return Err(AppError::BadRequest(format!(
            "Rating must be between 1 and 5, got {}",
            rating
        )));
    }
    Ok(())
}

impl Prepare for CreateProductReviewEntity {
    fn prepare(&mut self) -> Result<(), AppError> {
        ensure_rating(self.rating)
    }
}

impl Prepare for UpdateProductReviewEntity {
    fn prepare(&mut self) -> Result<(), AppError> {
        self.rating.map_or(Ok(()), ensure_rating)
    }
}

// Wishlists

#[derive(Queryable, Selectable, Identifiable, Serialize, Debug, Clone, ToSchema)]
#[diesel(table_name = crate::schema::wishlists)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct WishlistEntity {
    pub id: i32,
    pub buyer_id: Uuid,
    pub product_id: i32,
    pub created_at: DateTime<Utc>,
}

#[derive(Insertable, Deserialize, Debug)]
#[diesel(table_name = crate::schema::wishlists)]
pub struct CreateWishlistEntity {
    pub buyer_id: Uuid,
    pub product_id: i32,
}

#[derive(AsChangeset, Deserialize, Debug, Default)]
#[diesel(table_name = crate::schema::wishlists)]
pub struct UpdateWishlistEntity {
    pub buyer_id: Option<Uuid>,
    pub product_id: Option<i32>,
}

impl Prepare for CreateWishlistEntity {}
impl Prepare for UpdateWishlistEntity {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crop_names_are_slugified_on_prepare() {
        let mut crop: CreateCropEntity = serde_json::from_value(serde_json::json!({
            "name": "Kale Sukuma Wiki",
            "category_id": 2
        }))
        .unwrap();
        crop.prepare().unwrap();
        assert_eq!(crop.name, "kale-sukuma-wiki");
    }

    #[test]
    fn unusable_category_names_are_rejected() {
        let mut category = UpdateCropCategoryEntity {
            name: Some("!!!".to_string()),
            ..Default::default()
        };
        assert!(matches!(category.prepare(), Err(AppError::BadRequest(_))));
    }

    #[test]
    fn reviews_outside_one_to_five_are_rejected() {
        let mut review = UpdateProductReviewEntity {
            rating: Some(6),
            ..Default::default()
        };
        assert!(review.prepare().is_err());

        review.rating = Some(5);
        assert!(review.prepare().is_ok());
    }

    #[test]
    fn product_status_is_checked() {
        let mut update = UpdateProductEntity {
            status: Some("archived".to_string()),
            ..Default::default()
        };
        assert!(update.prepare().is_err());
    }
}

// Product images

/// `image` holds the stored file path; uploads happen outside this service.
#[derive(Queryable, Selectable, Identifiable, Serialize, Debug, Clone, ToSchema)]
#[diesel(table_name = crate::schema::product_images)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ProductImageEntity {
    pub id: i32,
    pub product_id: i32,
    pub image: String,
    pub caption: String,
    pub is_primary: bool,
    pub sort_order: i32,
    pub created_at: DateTime<Utc>,
}

#[derive(Insertable, Deserialize, Debug)]
#[diesel(table_name = crate::schema::product_images)]
pub struct CreateProductImageEntity {
    pub product_id: i32,
    pub image: String,
    pub caption: Option<String>,
    pub is_primary: Option<bool>,
    pub sort_order: Option<i32>,
}

#[derive(AsChangeset, Deserialize, Debug, Default)]
#[diesel(table_name = crate::schema::product_images)]
pub struct UpdateProductImageEntity {
    pub image: Option<String>,
    pub caption: Option<String>,
    pub is_primary: Option<bool>,
    pub sort_order: Option<i32>,
}

impl Prepare for CreateProductImageEntity {}
impl Prepare for UpdateProductImageEntity {}
