use axum::Router;
use uuid::Uuid;

use crate::{
    admin::{ResourceMeta, query::Timestamp},
    core::app_state::AppState,
    models::{
        CreateCropCalendarEntity, CreateCropCategoryEntity, CreateCropEntity,
        CreateProductImageEntity, CreateProductReviewEntity, CreateProductUnitEntity,
        CreateWishlistEntity, CropCalendarEntity, CropCategoryEntity, CropEntity, FarmEntity,
        ProductEntity, ProductImageEntity, ProductReviewEntity, ProductUnitEntity,
        UpdateCropCalendarEntity, UpdateCropCategoryEntity, UpdateCropEntity,
        UpdateProductImageEntity, UpdateProductReviewEntity, UpdateProductUnitEntity,
        UpdateWishlistEntity, WishlistEntity,
    },
};

admin_resource! {
    table: farms,
    id: i32,
    entity: FarmEntity,
    title: "Farms",
    group: "Farms & catalog",
    display: ["name", "farmer_id", "size", "location_id", "soil_type", "is_active", "created_at"],
    search: [name, description],
    filters: [is_active: bool, soil_type: String, water_source: String, farmer_id: i32, location_id: i32],
    ordering: [created_at, name, size],
    default_order: created_at desc,
    date_field: [created_at: Timestamp],
    price_field: [],
    actions: [
        make_active => is_active = true,
        make_inactive => is_active = false,
    ],
    relations: [],
    write: custom(crate::admin::catalog::create_farm, crate::admin::catalog::update_farm)
}

admin_resource! {
    table: crop_categories,
    id: i32,
    entity: CropCategoryEntity,
    title: "Crop categories",
    group: "Farms & catalog",
    display: ["name", "parent_id", "is_active", "created_at"],
    search: [name, description],
    filters: [is_active: bool, parent_id: i32],
    ordering: [name, created_at],
    default_order: name asc,
    date_field: [],
    price_field: [],
    actions: [
        make_active => is_active = true,
        make_inactive => is_active = false,
    ],
    relations: [],
    write: generic(CreateCropCategoryEntity, UpdateCropCategoryEntity)
}

admin_resource! {
    table: crops,
    id: i32,
    entity: CropEntity,
    title: "Crops",
    group: "Farms & catalog",
    display: ["name", "scientific_name", "category_id", "variety", "maturity_period_days", "is_active"],
    search: [name, scientific_name, variety],
    filters: [category_id: i32, is_active: bool, growing_season: String],
    ordering: [name, created_at, maturity_period_days],
    default_order: name asc,
    date_field: [],
    price_field: [],
    actions: [
        make_active => is_active = true,
        make_inactive => is_active = false,
    ],
    relations: [],
    write: generic(CreateCropEntity, UpdateCropEntity)
}

admin_resource! {
    table: product_units,
    id: i32,
    entity: ProductUnitEntity,
    title: "Product units",
    group: "Farms & catalog",
    display: ["name", "abbreviation", "base_unit_id", "conversion_factor"],
    search: [name, abbreviation],
    filters: [base_unit_id: i32],
    ordering: [name, abbreviation],
    default_order: name asc,
    date_field: [],
    price_field: [],
    actions: [],
    relations: [],
    write: generic(CreateProductUnitEntity, UpdateProductUnitEntity)
}

admin_resource! {
    table: products,
    id: i32,
    entity: ProductEntity,
    title: "Products",
    group: "Farms & catalog",
    display: [
        "name", "farmer_id", "crop_id", "price_per_unit", "quantity_available",
        "quality_grade", "status", "featured", "views_count", "created_at",
    ],
    search: [name, slug, description],
    filters: [
        status: String,
        quality_grade: String,
        featured: bool,
        organic_certified: bool,
        crop_id: i32,
        farmer_id: i32,
        farm_id: i32,
    ],
    ordering: [created_at, name, price_per_unit, quantity_available, views_count, harvest_date],
    default_order: created_at desc,
    date_field: [created_at: Timestamp],
    price_field: [price_per_unit],
    actions: [
        make_active => status = "active",
        make_inactive => status = "inactive",
        mark_as_featured => featured = true,
        remove_featured => featured = false,
    ],
    relations: [],
    write: custom(crate::admin::catalog::create_product, crate::admin::catalog::update_product)
}

admin_resource! {
    table: product_reviews,
    id: i32,
    entity: ProductReviewEntity,
    title: "Product reviews",
    group: "Farms & catalog",
    display: ["title", "product_id", "buyer_id", "rating", "is_verified_purchase", "created_at"],
    search: [title, comment],
    filters: [rating: i32, is_verified_purchase: bool, product_id: i32, buyer_id: Uuid],
    ordering: [created_at, rating, helpful_votes],
    default_order: created_at desc,
    date_field: [created_at: Timestamp],
    price_field: [],
    actions: [],
    relations: [],
    write: generic(CreateProductReviewEntity, UpdateProductReviewEntity)
}

admin_resource! {
    table: wishlists,
    id: i32,
    entity: WishlistEntity,
    title: "Wishlists",
    group: "Farms & catalog",
    display: ["buyer_id", "product_id", "created_at"],
    search: [],
    filters: [buyer_id: Uuid, product_id: i32],
    ordering: [created_at],
    default_order: created_at desc,
    date_field: [created_at: Timestamp],
    price_field: [],
    actions: [],
    relations: [],
    write: generic(CreateWishlistEntity, UpdateWishlistEntity)
}

admin_resource! {
    table: product_images,
    id: i32,
    entity: ProductImageEntity,
    title: "Product images",
    group: "Farms & catalog",
    display: ["product_id", "caption", "is_primary", "sort_order", "image"],
    search: [caption],
    filters: [is_primary: bool, product_id: i32],
    ordering: [sort_order, created_at],
    default_order: sort_order asc,
    date_field: [],
    price_field: [],
    actions: [],
    relations: [],
    write: generic(CreateProductImageEntity, UpdateProductImageEntity)
}

admin_resource! {
    table: crop_calendar,
    id: i32,
    entity: CropCalendarEntity,
    title: "Crop calendar",
    group: "Farms & catalog",
    display: [
        "crop_id", "county_id", "planting_season_start", "planting_season_end",
        "harvesting_season_start", "harvesting_season_end",
    ],
    search: [],
    filters: [county_id: i32, crop_id: i32],
    ordering: [crop_id, county_id, created_at],
    default_order: crop_id asc,
    date_field: [],
    price_field: [],
    actions: [],
    relations: [],
    write: generic(CreateCropCalendarEntity, UpdateCropCalendarEntity)
}

pub const RESOURCES: &[ResourceMeta] = &[
    farms::META,
    crop_categories::META,
    crops::META,
    product_units::META,
    products::META,
    product_reviews::META,
    wishlists::META,
    product_images::META,
    crop_calendar::META,
];

pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(farms::routes())
        .merge(crop_categories::routes())
        .merge(crops::routes())
        .merge(product_units::routes())
        .merge(products::routes())
        .merge(product_reviews::routes())
        .merge(wishlists::routes())
        .merge(product_images::routes())
        .merge(crop_calendar::routes())
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use diesel::{debug_query, pg::Pg};

    use super::*;
    use crate::admin::query::ListParams;

    fn params(pairs: &[(&str, &str)]) -> ListParams {
        let raw: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ListParams::from_query(raw).unwrap()
    }

    fn product_sql(pairs: &[(&str, &str)]) -> String {
        let params = params(pairs);
        let query = products::ordered(products::filtered(&params).unwrap(), &params).unwrap();
        debug_query::<Pg, _>(&query).to_string()
    }

    #[test]
    fn filters_become_equality_clauses() {
        let sql = product_sql(&[("status", "active"), ("featured", "true")]);
        assert!(sql.contains(r#""products"."status" = $"#), "{sql}");
        assert!(sql.contains(r#""products"."featured" = $"#), "{sql}");
        assert!(sql.contains(r#""active""#), "{sql}");
    }

    #[test]
    fn ids_restrict_to_the_selection() {
        let sql = product_sql(&[("ids", "3,5")]);
        assert!(sql.contains(r#""products"."id" = ANY($"#), "{sql}");
        assert!(sql.contains("[3, 5]"), "{sql}");
    }

    #[test]
    fn search_is_an_or_of_ilike_over_search_fields() {
        let sql = product_sql(&[("q", "maize")]);
        assert_eq!(sql.matches("ILIKE").count(), 3, "{sql}");
        assert!(sql.contains(r#""products"."slug" ILIKE"#), "{sql}");
        assert!(sql.contains(" OR "), "{sql}");
        assert!(sql.contains(r#""%maize%""#), "{sql}");
    }

    #[test]
    fn ranges_bound_the_declared_fields() {
        let sql = product_sql(&[("price_range", "100-500"), ("date_range", "week")]);
        assert!(sql.contains(r#""products"."price_per_unit" >= $"#), "{sql}");
        assert!(sql.contains(r#""products"."price_per_unit" < $"#), "{sql}");
        assert!(sql.contains(r#""products"."created_at" >= $"#), "{sql}");

        let open = product_sql(&[("price_range", "1000+")]);
        assert!(!open.contains(r#""products"."price_per_unit" < $"#), "{open}");
    }

    #[test]
    fn ordering_defaults_and_breaks_ties_on_id() {
        let sql = product_sql(&[]);
        assert!(
            sql.contains(r#"ORDER BY "products"."created_at" DESC, "products"."id" ASC"#),
            "{sql}"
        );

        let sql = product_sql(&[("ordering", "price_per_unit")]);
        assert!(
            sql.contains(r#"ORDER BY "products"."price_per_unit" ASC, "products"."id" ASC"#),
            "{sql}"
        );
    }

    #[test]
    fn undeclared_ordering_and_ranges_are_rejected() {
        let bad_order = params(&[("ordering", "-slug")]);
        let query = products::filtered(&bad_order).unwrap();
        assert!(products::ordered(query, &bad_order).is_err());

        assert!(product_units::filtered(&params(&[("date_range", "week")])).is_err());
        assert!(crops::filtered(&params(&[("price_range", "1-2")])).is_err());
        assert!(products::filtered(&params(&[("colour", "green")])).is_err());
    }

    #[test]
    fn bulk_actions_set_the_declared_column() {
        let sql = products::action_sql("make_inactive", &[1, 2]).unwrap();
        assert!(sql.starts_with(r#"UPDATE "products" SET "status" = $1"#), "{sql}");
        assert!(sql.contains(r#""inactive""#), "{sql}");

        let sql = products::action_sql("mark_as_featured", &[1]).unwrap();
        assert!(sql.contains(r#"SET "featured" = $1"#), "{sql}");
        assert!(sql.contains("true"), "{sql}");

        let sql = farms::action_sql("make_inactive", &[4]).unwrap();
        assert!(sql.contains(r#"SET "is_active" = $1"#), "{sql}");

        assert!(products::action_sql("delete_everything", &[1]).is_none());
    }
}
