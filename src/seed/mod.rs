//! Demo data for a fresh database.
//!
//! Every step is get-or-create: rows hitting a unique constraint are skipped,
//! and tables without one are checked before inserting. A failing step is
//! logged and the remaining steps still run.

pub mod data;

use std::collections::{HashMap, HashSet};

use anyhow::{Context, Result};
use chrono::{Duration, NaiveDate, Utc};
use diesel::{ExpressionMethods, QueryDsl};
use diesel_async::{AsyncPgConnection, RunQueryDsl};
use rand::{Rng, SeedableRng, rngs::StdRng, seq::SliceRandom};
use rust_decimal::Decimal;
use serde_json::json;
use uuid::Uuid;

use crate::{
    admin::catalog::{unique_farm_name, unique_product_slug},
    choices::{Choice, ProductStatus, UserType},
    models::{
        CreateBuyerProfileEntity, CreateCountyEntity, CreateCropCategoryEntity, CreateCropEntity,
        CreateDeliveryPartnerEntity, CreateFarmEntity, CreateFarmerProfileEntity,
        CreateLocationEntity, CreateMarketPriceEntity, CreatePaymentMethodEntity,
        CreateProductEntity, CreateProductReviewEntity, CreateProductUnitEntity,
        CreateSubcountyEntity, CreateUserEntity, CreateWardEntity,
    },
    schema::{
        buyer_profiles, counties, crop_categories, crops, delivery_partners, farmer_profiles,
        farms, locations, market_prices, payment_methods, product_reviews, product_units,
        products, subcounties, users, wards,
    },
    slug::slugify,
};

use data::*;

macro_rules! clear_tables {
    ($conn:expr, $($table:ident),+ $(,)?) => {
        $(
            match diesel::delete($table::table).execute($conn).await {
                Ok(count) => tracing::info!("Cleared {} rows from {}", count, stringify!($table)),
                Err(err) => tracing::error!("Failed to clear {}: {}", stringify!($table), err),
            }
        )+
    };
}

fn report(what: &str, result: Result<usize>) {
    match result {
        Ok(count) => tracing::info!("✓ Seeded {} {}", count, what),
        Err(err) => tracing::error!("✗ Failed to seed {}: {:#}", what, err),
    }
}

pub struct Seeder {
    conn: AsyncPgConnection,
    rng: StdRng,
    today: NaiveDate,
}

impl Seeder {
    /// A fixed `rng_seed` reproduces the same data on an empty database.
    pub fn new(conn: AsyncPgConnection, rng_seed: Option<u64>) -> Self {
        let rng = match rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            conn,
            rng,
            today: Utc::now().date_naive(),
        }
    }

    /// Deletes the seeded tables, dependents first.
    pub async fn clear(&mut self) {
        tracing::info!("Clearing existing data...");
        let conn = &mut self.conn;
        clear_tables!(
            conn,
            product_reviews,
            market_prices,
            products,
            farms,
            farmer_profiles,
            buyer_profiles,
            locations,
            users,
            crops,
            crop_categories,
            product_units,
            wards,
            subcounties,
            counties,
            payment_methods,
            delivery_partners,
        );
    }

    pub async fn run(&mut self) {
        tracing::info!("Starting data seeding...");
        report("counties", self.counties().await);
        report("subcounties", self.subcounties().await);
        report("wards", self.wards().await);
        report("users", self.users().await);
        report("locations", self.locations().await);
        report("farmer profiles", self.farmer_profiles().await);
        report("buyer profiles", self.buyer_profiles().await);
        report("farms", self.farms().await);
        report("crop categories", self.crop_categories().await);
        report("crops", self.crops().await);
        report("product units", self.product_units().await);
        report("products", self.products().await);
        report("product reviews", self.product_reviews().await);
        report("market price records", self.market_prices().await);
        report("payment methods", self.payment_methods().await);
        report("delivery partners", self.delivery_partners().await);
        tracing::info!("Finished seeding");
    }

    async fn counties(&mut self) -> Result<usize> {
        let rows: Vec<CreateCountyEntity> = COUNTIES
            .iter()
            .map(|&(name, code, population, area)| CreateCountyEntity {
                name: name.to_string(),
                code: code.to_string(),
                population: Some(population),
                area_sq_km: Some(area),
            })
            .collect();

        diesel::insert_into(counties::table)
            .values(&rows)
            .on_conflict_do_nothing()
            .execute(&mut self.conn)
            .await
            .context("Failed to insert counties")
    }

    async fn subcounties(&mut self) -> Result<usize> {
        let county_ids: HashMap<String, i32> = counties::table
            .select((counties::code, counties::id))
            .load::<(String, i32)>(&mut self.conn)
            .await
            .context("Failed to load counties")?
            .into_iter()
            .collect();

        let rows: Vec<CreateSubcountyEntity> = SUBCOUNTIES
            .iter()
            .filter_map(|&(county_code, name, code)| {
                county_ids
                    .get(county_code)
                    .map(|&county_id| CreateSubcountyEntity {
                        county_id,
                        name: name.to_string(),
                        code: code.to_string(),
                    })
            })
            .collect();

        diesel::insert_into(subcounties::table)
            .values(&rows)
            .on_conflict_do_nothing()
            .execute(&mut self.conn)
            .await
            .context("Failed to insert subcounties")
    }

    async fn wards(&mut self) -> Result<usize> {
        let parents: Vec<(i32, String, String)> = subcounties::table
            .order_by(subcounties::id)
            .select((subcounties::id, subcounties::name, subcounties::code))
            .load(&mut self.conn)
            .await
            .context("Failed to load subcounties")?;

        let mut rows = Vec::new();
        for (subcounty_id, name, code) in parents {
            let count = self.rng.gen_range(2..=3);
            rows.extend((1..=count).map(|n| CreateWardEntity {
                subcounty_id,
                name: format!("{} Ward {}", name, n),
                code: ward_code(&code, n),
            }));
        }

        diesel::insert_into(wards::table)
            .values(&rows)
            .on_conflict_do_nothing()
            .execute(&mut self.conn)
            .await
            .context("Failed to insert wards")
    }

    async fn users(&mut self) -> Result<usize> {
        let rng = &mut self.rng;
        let mut rows = Vec::with_capacity(FARMERS + BUYERS + 1);

        for i in 0..FARMERS {
            let (first, last) = pick_name(rng);
            let username = format!("{}_{}_{}", first.to_lowercase(), last.to_lowercase(), i);
            rows.push(CreateUserEntity {
                email: Some(format!("{}@farm.ke", username)),
                username,
                first_name: Some(first.to_string()),
                last_name: Some(last.to_string()),
                user_type: Some(UserType::Farmer.as_str().to_string()),
                phone_number: phone_number(rng),
                date_of_birth: birth_date(rng, 1970),
                national_id: Some(rng.gen_range(10_000_000..=99_999_999_u32).to_string()),
                is_verified: Some(rng.gen_bool(0.75)),
                is_active: Some(true),
                is_staff: Some(false),
                is_superuser: Some(false),
            });
        }

        for i in 0..BUYERS {
            let (first, last) = pick_name(rng);
            let username = format!("buyer_{}_{}", first.to_lowercase(), i);
            rows.push(CreateUserEntity {
                email: Some(format!("{}@buyer.ke", username)),
                username,
                first_name: Some(first.to_string()),
                last_name: Some(last.to_string()),
                user_type: Some(UserType::Buyer.as_str().to_string()),
                phone_number: phone_number(rng),
                date_of_birth: birth_date(rng, 1975),
                national_id: Some(rng.gen_range(10_000_000..=99_999_999_u32).to_string()),
                is_verified: Some(true),
                is_active: Some(true),
                is_staff: Some(false),
                is_superuser: Some(false),
            });
        }

        rows.push(CreateUserEntity {
            username: "admin".to_string(),
            first_name: Some("Admin".to_string()),
            last_name: Some("User".to_string()),
            email: Some("admin@farm.ke".to_string()),
            user_type: Some(UserType::Admin.as_str().to_string()),
            phone_number: "+254700000000".to_string(),
            date_of_birth: NaiveDate::from_ymd_opt(1980, 1, 1),
            national_id: Some("99999999".to_string()),
            is_verified: Some(true),
            is_active: Some(true),
            is_staff: Some(true),
            is_superuser: Some(true),
        });

        diesel::insert_into(users::table)
            .values(&rows)
            .on_conflict_do_nothing()
            .execute(&mut self.conn)
            .await
            .context("Failed to insert users")
    }

    async fn locations(&mut self) -> Result<usize> {
        let housed: HashSet<Uuid> = locations::table
            .filter(locations::name.eq("Home"))
            .select(locations::user_id)
            .load::<Uuid>(&mut self.conn)
            .await
            .context("Failed to load existing locations")?
            .into_iter()
            .collect();

        let people: Vec<(Uuid, String)> = users::table
            .filter(users::user_type.eq_any([UserType::Farmer.as_str(), UserType::Buyer.as_str()]))
            .order_by(users::username)
            .select((users::id, users::first_name))
            .load(&mut self.conn)
            .await
            .context("Failed to load users")?;

        let places: Vec<(i32, String, i32, i32)> = wards::table
            .inner_join(subcounties::table)
            .order_by(wards::id)
            .select((wards::id, wards::name, subcounties::id, subcounties::county_id))
            .load(&mut self.conn)
            .await
            .context("Failed to load wards")?;

        let rng = &mut self.rng;
        let mut rows = Vec::new();
        for (user_id, first_name) in people {
            if housed.contains(&user_id) {
                continue;
            }
            let Some((ward_id, ward_name, subcounty_id, county_id)) = places.choose(rng) else {
                break;
            };
            rows.push(CreateLocationEntity {
                user_id,
                name: "Home".to_string(),
                county_id: *county_id,
                subcounty_id: *subcounty_id,
                ward_id: *ward_id,
                village: format!("{} Village", first_name),
                detailed_address: format!("Plot {}, {}", rng.gen_range(1..=500), ward_name),
                latitude: Some(Decimal::new(rng.gen_range(-4_500_000..=1_500_000), 6)),
                longitude: Some(Decimal::new(rng.gen_range(33_500_000..=41_500_000), 6)),
                is_default: Some(true),
            });
        }

        if rows.is_empty() {
            return Ok(0);
        }
        diesel::insert_into(locations::table)
            .values(&rows)
            .execute(&mut self.conn)
            .await
            .context("Failed to insert locations")
    }

    async fn farmer_profiles(&mut self) -> Result<usize> {
        let farmers: Vec<(Uuid, String, String, String)> = users::table
            .filter(users::user_type.eq(UserType::Farmer.as_str()))
            .order_by(users::username)
            .select((
                users::id,
                users::first_name,
                users::last_name,
                users::phone_number,
            ))
            .load(&mut self.conn)
            .await
            .context("Failed to load farmers")?;

        let rng = &mut self.rng;
        let rows: Vec<CreateFarmerProfileEntity> = farmers
            .into_iter()
            .map(|(user_id, first, last, phone)| {
                let methods = rng.gen_range(1..=2);
                let certifications = rng.gen_range(0..=2);
                CreateFarmerProfileEntity {
                    user_id,
                    farm_name: format!("{} {} Farm", first, last),
                    farming_type: pick(rng, FARMING_TYPES),
                    years_of_experience: pick(rng, EXPERIENCE_LEVELS),
                    total_farm_size: Decimal::new(rng.gen_range(50..=2_000), 2),
                    farming_methods: Some(json!(sample(rng, FARMING_METHODS, methods))),
                    certifications: Some(json!(sample(rng, CERTIFICATIONS, certifications))),
                    bank_account_number: Some(
                        rng.gen_range(1_000_000_000u64..=9_999_999_999).to_string(),
                    ),
                    bank_name: Some(pick(rng, BANKS)),
                    mpesa_number: Some(phone),
                    is_cooperative_member: Some(rng.gen_bool(0.5)),
                    cooperative_name: None,
                }
            })
            .collect();

        diesel::insert_into(farmer_profiles::table)
            .values(&rows)
            .on_conflict_do_nothing()
            .execute(&mut self.conn)
            .await
            .context("Failed to insert farmer profiles")
    }

    async fn buyer_profiles(&mut self) -> Result<usize> {
        let buyers: Vec<(Uuid, String)> = users::table
            .filter(users::user_type.eq(UserType::Buyer.as_str()))
            .order_by(users::username)
            .select((users::id, users::first_name))
            .load(&mut self.conn)
            .await
            .context("Failed to load buyers")?;

        let rng = &mut self.rng;
        let rows: Vec<CreateBuyerProfileEntity> = buyers
            .into_iter()
            .map(|(user_id, first)| {
                let buyer_type = pick(rng, BUYER_TYPES);
                let business_name = match buyer_type.as_str() {
                    "individual" => String::new(),
                    other => format!("{} {}", first, title_case(other)),
                };
                CreateBuyerProfileEntity {
                    user_id,
                    buyer_type,
                    business_name: Some(business_name),
                    business_registration: None,
                    tax_pin: None,
                    annual_purchase_volume: None,
                    preferred_payment_method: Some(pick(rng, PREFERRED_PAYMENTS)),
                    credit_limit: Some(Decimal::from(rng.gen_range(10_000..=100_000_i64))),
                    delivery_instructions: None,
                    special_requirements: None,
                }
            })
            .collect();

        diesel::insert_into(buyer_profiles::table)
            .values(&rows)
            .on_conflict_do_nothing()
            .execute(&mut self.conn)
            .await
            .context("Failed to insert buyer profiles")
    }

    async fn farms(&mut self) -> Result<usize> {
        let farmers: Vec<(i32, String, String, Uuid)> = farmer_profiles::table
            .inner_join(users::table)
            .order_by(farmer_profiles::id)
            .select((
                farmer_profiles::id,
                farmer_profiles::farm_name,
                users::username,
                users::id,
            ))
            .load(&mut self.conn)
            .await
            .context("Failed to load farmer profiles")?;

        let homes: HashMap<Uuid, (i32, String)> = locations::table
            .inner_join(counties::table)
            .order_by(locations::id.desc())
            .select((locations::user_id, locations::id, counties::name))
            .load::<(Uuid, i32, String)>(&mut self.conn)
            .await
            .context("Failed to load farmer locations")?
            .into_iter()
            .map(|(user_id, location_id, county)| (user_id, (location_id, county)))
            .collect();

        let mut created = 0;
        for (farmer_id, farm_name, username, user_id) in farmers {
            let Some((location_id, county)) = homes.get(&user_id) else {
                tracing::warn!("Farmer {} has no location, skipping farms", username);
                continue;
            };

            let count = self.rng.gen_range(1..=3);
            for n in 1..=count {
                let base = format!("{}-plot-{}-{}", farm_name, n, username);
                let existing: i64 = farms::table
                    .filter(farms::farmer_id.eq(farmer_id))
                    .filter(farms::name.eq(slugify(&base)))
                    .count()
                    .get_result(&mut self.conn)
                    .await
                    .context("Failed to look up farm")?;
                if existing > 0 {
                    continue;
                }

                let name = unique_farm_name(&mut self.conn, &base, None).await?;
                let rng = &mut self.rng;
                let farm = CreateFarmEntity {
                    farmer_id,
                    name,
                    location_id: *location_id,
                    size: Decimal::new(rng.gen_range(50..=1_000), 2),
                    soil_type: Some(pick(rng, SOIL_TYPES)),
                    water_source: Some(pick(rng, WATER_SOURCES)),
                    irrigation_method: Some(pick(rng, IRRIGATION_METHODS)),
                    elevation: Some(rng.gen_range(800..=2_500)),
                    photos: None,
                    description: Some(format!("Quality farm in {}", county)),
                    is_active: Some(true),
                };
                created += diesel::insert_into(farms::table)
                    .values(&farm)
                    .execute(&mut self.conn)
                    .await
                    .context("Failed to insert farm")?;
            }
        }
        Ok(created)
    }

    async fn crop_categories(&mut self) -> Result<usize> {
        let rows: Vec<CreateCropCategoryEntity> = CROP_CATEGORIES
            .iter()
            .map(|&(name, description)| CreateCropCategoryEntity {
                name: name.to_string(),
                description: Some(description.to_string()),
                parent_id: None,
                is_active: Some(true),
            })
            .collect();

        diesel::insert_into(crop_categories::table)
            .values(&rows)
            .on_conflict_do_nothing()
            .execute(&mut self.conn)
            .await
            .context("Failed to insert crop categories")
    }

    async fn crops(&mut self) -> Result<usize> {
        let categories: HashMap<String, i32> = crop_categories::table
            .select((crop_categories::name, crop_categories::id))
            .load::<(String, i32)>(&mut self.conn)
            .await
            .context("Failed to load crop categories")?
            .into_iter()
            .collect();

        let rng = &mut self.rng;
        let rows: Vec<CreateCropEntity> = CROPS
            .iter()
            .filter_map(|&(name, scientific_name, category, maturity)| {
                let category_id = *categories.get(category)?;
                Some(CreateCropEntity {
                    name: name.to_string(),
                    scientific_name: Some(scientific_name.to_string()),
                    category_id,
                    variety: None,
                    growing_season: Some(pick(rng, GROWING_SEASONS)),
                    maturity_period_days: Some(maturity),
                    ideal_temperature_min: None,
                    ideal_temperature_max: None,
                    ideal_rainfall: None,
                    storage_requirements: None,
                    nutritional_info: None,
                    is_active: Some(true),
                })
            })
            .collect();

        diesel::insert_into(crops::table)
            .values(&rows)
            .on_conflict_do_nothing()
            .execute(&mut self.conn)
            .await
            .context("Failed to insert crops")
    }

    async fn product_units(&mut self) -> Result<usize> {
        let rows = PRODUCT_UNITS
            .iter()
            .map(|&(name, abbreviation, factor)| {
                Ok(CreateProductUnitEntity {
                    name: name.to_string(),
                    abbreviation: abbreviation.to_string(),
                    base_unit_id: None,
                    conversion_factor: Some(decimal(factor)?),
                })
            })
            .collect::<Result<Vec<_>>>()?;

        diesel::insert_into(product_units::table)
            .values(&rows)
            .on_conflict_do_nothing()
            .execute(&mut self.conn)
            .await
            .context("Failed to insert product units")
    }

    async fn products(&mut self) -> Result<usize> {
        let farm_rows: Vec<(i32, String, i32, String, String)> = farms::table
            .inner_join(farmer_profiles::table.inner_join(users::table))
            .inner_join(locations::table.inner_join(counties::table))
            .order_by(farms::id)
            .select((
                farms::id,
                farms::name,
                farms::farmer_id,
                users::username,
                counties::name,
            ))
            .load(&mut self.conn)
            .await
            .context("Failed to load farms")?;

        let crop_rows: Vec<(i32, String)> = crops::table
            .order_by(crops::id)
            .select((crops::id, crops::name))
            .load(&mut self.conn)
            .await
            .context("Failed to load crops")?;

        let unit_ids: Vec<i32> = product_units::table
            .order_by(product_units::id)
            .select(product_units::id)
            .load(&mut self.conn)
            .await
            .context("Failed to load product units")?;
        if unit_ids.is_empty() {
            return Ok(0);
        }

        let mut counter = 0;
        let mut created = 0;
        for (farm_id, farm_name, farmer_id, username, county) in farm_rows {
            let count = self.rng.gen_range(3..=8_usize).min(crop_rows.len());
            let chosen: Vec<(i32, String)> = crop_rows
                .choose_multiple(&mut self.rng, count)
                .cloned()
                .collect();

            for (crop_id, crop_name) in chosen {
                let name = format!("{}-{}-{}", crop_name, username, counter);
                counter += 1;

                let existing: i64 = products::table
                    .filter(products::farm_id.eq(farm_id))
                    .filter(products::crop_id.eq(crop_id))
                    .filter(products::name.eq(&name))
                    .count()
                    .get_result(&mut self.conn)
                    .await
                    .context("Failed to look up product")?;
                if existing > 0 {
                    continue;
                }

                let slug = unique_product_slug(&mut self.conn, &name, None).await?;
                let rng = &mut self.rng;
                let harvest_date = self.today - Duration::days(rng.gen_range(1..=60));
                let product = CreateProductEntity {
                    farmer_id,
                    crop_id,
                    farm_id,
                    description: format!("Fresh {} from {} in {}", crop_name, farm_name, county),
                    name,
                    slug,
                    quantity_available: Decimal::from(rng.gen_range(10..=500_i64)),
                    unit_id: unit_ids[rng.gen_range(0..unit_ids.len())],
                    price_per_unit: Decimal::from(rng.gen_range(30..=300_i64)),
                    minimum_order: MINIMUM_ORDERS.choose(rng).map(|&min| Decimal::from(min)),
                    quality_grade: Some(pick(rng, QUALITY_GRADES)),
                    harvest_date,
                    expiry_date: Some(harvest_date + Duration::days(rng.gen_range(30..=180))),
                    organic_certified: Some(rng.gen_bool(0.5)),
                    certification_body: None,
                    storage_condition: None,
                    packaging_options: None,
                    images: None,
                    videos: None,
                    status: Some(pick(rng, PRODUCT_STATUSES)),
                    featured: Some(rng.gen_bool(0.25)),
                    views_count: Some(rng.gen_range(0..=500)),
                    likes_count: None,
                };
                created += diesel::insert_into(products::table)
                    .values(&product)
                    .execute(&mut self.conn)
                    .await
                    .context("Failed to insert product")?;
            }
        }
        Ok(created)
    }

    async fn product_reviews(&mut self) -> Result<usize> {
        let product_ids: Vec<i32> = products::table
            .filter(products::status.eq(ProductStatus::Active.as_str()))
            .order_by(products::id)
            .limit(REVIEWED_PRODUCTS)
            .select(products::id)
            .load(&mut self.conn)
            .await
            .context("Failed to load active products")?;

        let buyer_ids: Vec<Uuid> = users::table
            .filter(users::user_type.eq(UserType::Buyer.as_str()))
            .order_by(users::username)
            .select(users::id)
            .load(&mut self.conn)
            .await
            .context("Failed to load buyers")?;

        let rng = &mut self.rng;
        let mut rows = Vec::new();
        for product_id in product_ids {
            let count = rng.gen_range(0..=5_usize).min(buyer_ids.len());
            let reviewers: Vec<Uuid> = buyer_ids.choose_multiple(rng, count).copied().collect();
            for buyer_id in reviewers {
                let rating = rng.gen_range(3..=5);
                rows.push(CreateProductReviewEntity {
                    product_id,
                    buyer_id,
                    rating,
                    title: format!("{} stars - {}", rating, pick(rng, REVIEW_MOODS)),
                    comment: pick(rng, REVIEW_COMMENTS),
                    images: None,
                    is_verified_purchase: Some(true),
                    helpful_votes: Some(rng.gen_range(0..=20)),
                });
            }
        }

        if rows.is_empty() {
            return Ok(0);
        }
        diesel::insert_into(product_reviews::table)
            .values(&rows)
            .on_conflict_do_nothing()
            .execute(&mut self.conn)
            .await
            .context("Failed to insert product reviews")
    }

    async fn market_prices(&mut self) -> Result<usize> {
        let since = self.today - Duration::days(PRICE_HISTORY_DAYS);

        let recorded: HashSet<(i32, i32, NaiveDate)> = market_prices::table
            .filter(market_prices::date_recorded.ge(since))
            .select((
                market_prices::crop_id,
                market_prices::location_id,
                market_prices::date_recorded,
            ))
            .load::<(i32, i32, NaiveDate)>(&mut self.conn)
            .await
            .context("Failed to load market prices")?
            .into_iter()
            .collect();

        let crop_ids: Vec<i32> = crops::table
            .order_by(crops::id)
            .select(crops::id)
            .load(&mut self.conn)
            .await
            .context("Failed to load crops")?;

        let markets: Vec<(i32, String)> = counties::table
            .order_by(counties::id)
            .select((counties::id, counties::name))
            .load(&mut self.conn)
            .await
            .context("Failed to load counties")?;

        let unit_ids: Vec<i32> = product_units::table
            .select(product_units::id)
            .load(&mut self.conn)
            .await
            .context("Failed to load product units")?;
        if unit_ids.is_empty() {
            return Ok(0);
        }

        let rng = &mut self.rng;
        let mut rows = Vec::new();
        for days_ago in (0..PRICE_HISTORY_DAYS).step_by(PRICE_INTERVAL_DAYS) {
            let date_recorded = self.today - Duration::days(days_ago);
            for &crop_id in &crop_ids {
                let count = COUNTIES_PER_CROP.min(markets.len());
                for (county_id, county) in markets.choose_multiple(rng, count) {
                    if recorded.contains(&(crop_id, *county_id, date_recorded)) {
                        continue;
                    }
                    let base = f64::from(rng.gen_range(40..=200_u32));
                    let cents = (base * 100.0 * rng.gen_range(0.9_f64..1.1)).round() as i64;
                    rows.push(CreateMarketPriceEntity {
                        crop_id,
                        location_id: *county_id,
                        market_name: format!("{} Market", county),
                        price_per_unit: Decimal::new(cents, 2),
                        unit_id: unit_ids[rng.gen_range(0..unit_ids.len())],
                        quality_grade: pick(rng, MARKET_GRADES),
                        supply_level: pick(rng, LEVELS),
                        demand_level: pick(rng, LEVELS),
                        price_trend: pick(rng, PRICE_TRENDS),
                        source: pick(rng, PRICE_SOURCES),
                        date_recorded,
                        notes: None,
                    });
                }
            }
        }

        if rows.is_empty() {
            return Ok(0);
        }
        diesel::insert_into(market_prices::table)
            .values(&rows)
            .execute(&mut self.conn)
            .await
            .context("Failed to insert market prices")
    }

    async fn payment_methods(&mut self) -> Result<usize> {
        let rows = PAYMENT_METHODS
            .iter()
            .map(|&(name, code, description, fee, minimum, maximum)| {
                Ok(CreatePaymentMethodEntity {
                    name: name.to_string(),
                    code: code.to_string(),
                    description: Some(description.to_string()),
                    is_active: Some(true),
                    processing_fee_percentage: Some(decimal(fee)?),
                    minimum_amount: Some(decimal(minimum)?),
                    maximum_amount: maximum.map(decimal).transpose()?,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        diesel::insert_into(payment_methods::table)
            .values(&rows)
            .on_conflict_do_nothing()
            .execute(&mut self.conn)
            .await
            .context("Failed to insert payment methods")
    }

    async fn delivery_partners(&mut self) -> Result<usize> {
        let rows = DELIVERY_PARTNERS
            .iter()
            .map(|&(name, contact, phone, email, pricing, rating)| {
                Ok(CreateDeliveryPartnerEntity {
                    name: name.to_string(),
                    contact_person: contact.to_string(),
                    phone_number: phone.to_string(),
                    email: email.to_string(),
                    pricing_model: Some(pricing.to_string()),
                    is_active: Some(true),
                    rating: Some(decimal(rating)?),
                })
            })
            .collect::<Result<Vec<_>>>()?;

        diesel::insert_into(delivery_partners::table)
            .values(&rows)
            .on_conflict_do_nothing()
            .execute(&mut self.conn)
            .await
            .context("Failed to insert delivery partners")
    }
}

fn decimal(raw: &str) -> Result<Decimal> {
    raw.parse()
        .with_context(|| format!("Invalid decimal literal `{}`", raw))
}

fn ward_code(subcounty_code: &str, n: u32) -> String {
    format!("{}{:02}", subcounty_code, n)
}

fn pick(rng: &mut StdRng, options: &[&str]) -> String {
    options.choose(rng).copied().unwrap_or_default().to_string()
}

fn sample(rng: &mut StdRng, options: &[&str], count: usize) -> Vec<String> {
    options
        .choose_multiple(rng, count)
        .map(|option| option.to_string())
        .collect()
}

fn pick_name(rng: &mut StdRng) -> (&'static str, &'static str) {
    let first = FIRST_NAMES.choose(rng).copied().unwrap_or("John");
    let last = LAST_NAMES.choose(rng).copied().unwrap_or("Mwangi");
    (first, last)
}

fn phone_number(rng: &mut StdRng) -> String {
    format!("+2547{}", rng.gen_range(10_000_000..=99_999_999_u32))
}

fn birth_date(rng: &mut StdRng, earliest_year: i32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(
        rng.gen_range(earliest_year..=2000),
        rng.gen_range(1..=12),
        rng.gen_range(1..=28),
    )
}

fn title_case(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ward_codes_extend_the_subcounty_code() {
        assert_eq!(ward_code("001002", 1), "00100201");
        assert_eq!(ward_code("023005", 3), "02300503");
    }

    #[test]
    fn same_seed_draws_same_values() {
        let mut a = StdRng::seed_from_u64(7);
        let mut b = StdRng::seed_from_u64(7);
        assert_eq!(phone_number(&mut a), phone_number(&mut b));
        assert_eq!(pick_name(&mut a), pick_name(&mut b));
        assert_eq!(birth_date(&mut a, 1970), birth_date(&mut b, 1970));
    }

    #[test]
    fn phone_numbers_are_kenyan_mobiles() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..20 {
            let phone = phone_number(&mut rng);
            assert!(phone.starts_with("+2547"));
            assert_eq!(phone.len(), 13);
        }
    }

    #[test]
    fn samples_never_repeat_an_option() {
        let mut rng = StdRng::seed_from_u64(3);
        let picked = sample(&mut rng, CERTIFICATIONS, 2);
        assert_eq!(picked.len(), 2);
        assert_ne!(picked[0], picked[1]);
    }

    #[test]
    fn buyer_business_names_are_title_cased() {
        assert_eq!(title_case("restaurant"), "Restaurant");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn reference_data_is_consistent() {
        let county_codes: HashSet<&str> = COUNTIES.iter().map(|c| c.1).collect();
        assert!(SUBCOUNTIES.iter().all(|s| county_codes.contains(s.0)));

        let categories: HashSet<&str> = CROP_CATEGORIES.iter().map(|c| c.0).collect();
        assert!(CROPS.iter().all(|c| categories.contains(c.2)));

        for &(.., fee, minimum, maximum) in PAYMENT_METHODS {
            assert!(decimal(fee).unwrap() < Decimal::ONE);
            if let Some(maximum) = maximum {
                assert!(decimal(minimum).unwrap() <= decimal(maximum).unwrap());
            }
        }
    }

    #[test]
    fn seeded_choice_values_are_accepted() {
        use crate::choices::{BuyerType, Experience, FarmingType, ProductQuality, ensure};

        assert!(FARMING_TYPES.iter().all(|v| ensure::<FarmingType>(v).is_ok()));
        assert!(EXPERIENCE_LEVELS.iter().all(|v| ensure::<Experience>(v).is_ok()));
        assert!(BUYER_TYPES.iter().all(|v| ensure::<BuyerType>(v).is_ok()));
        assert!(QUALITY_GRADES.iter().all(|v| ensure::<ProductQuality>(v).is_ok()));
        assert!(PRODUCT_STATUSES.iter().all(|v| ensure::<ProductStatus>(v).is_ok()));
    }
}
