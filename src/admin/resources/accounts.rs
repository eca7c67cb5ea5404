use axum::Router;
use uuid::Uuid;

use crate::{
    admin::{ResourceMeta, query::Timestamp},
    core::app_state::AppState,
    models::{
        BuyerProfileEntity, CreateBuyerProfileEntity, CreateExtensionAgentEntity,
        CreateFarmerProfileEntity, CreateInputSupplierEntity, CreateUserEntity,
        CreateUserProfileEntity, ExtensionAgentEntity, FarmerProfileEntity, InputSupplierEntity,
        UpdateBuyerProfileEntity, UpdateExtensionAgentEntity, UpdateFarmerProfileEntity,
        UpdateInputSupplierEntity, UpdateUserEntity, UpdateUserProfileEntity, UserEntity,
        UserProfileEntity,
    },
};

admin_resource! {
    table: users,
    id: Uuid,
    entity: UserEntity,
    title: "Users",
    group: "Accounts",
    display: ["username", "email", "user_type", "phone_number", "is_verified", "created_at", "last_seen"],
    search: [username, email, phone_number, first_name, last_name],
    filters: [user_type: String, is_verified: bool, is_active: bool, is_staff: bool],
    ordering: [created_at, date_joined, last_seen, username, email],
    default_order: created_at desc,
    date_field: [date_joined: Timestamp],
    price_field: [],
    actions: [
        verify_users => is_verified = true,
        make_active => is_active = true,
        make_inactive => is_active = false,
    ],
    relations: [],
    write: generic(CreateUserEntity, UpdateUserEntity)
}

admin_resource! {
    table: farmer_profiles,
    id: i32,
    entity: FarmerProfileEntity,
    title: "Farmer profiles",
    group: "Accounts",
    display: ["farm_name", "user_id", "farming_type", "years_of_experience", "total_farm_size", "is_cooperative_member"],
    search: [farm_name, cooperative_name],
    filters: [farming_type: String, years_of_experience: String, is_cooperative_member: bool, user_id: Uuid],
    ordering: [created_at, farm_name, total_farm_size],
    default_order: created_at desc,
    date_field: [created_at: Timestamp],
    price_field: [],
    actions: [],
    relations: [],
    write: generic(CreateFarmerProfileEntity, UpdateFarmerProfileEntity)
}

admin_resource! {
    table: buyer_profiles,
    id: i32,
    entity: BuyerProfileEntity,
    title: "Buyer profiles",
    group: "Accounts",
    display: ["business_name", "user_id", "buyer_type", "credit_limit", "created_at"],
    search: [business_name, business_registration, tax_pin],
    filters: [buyer_type: String, user_id: Uuid],
    ordering: [created_at, business_name, credit_limit],
    default_order: created_at desc,
    date_field: [created_at: Timestamp],
    price_field: [],
    actions: [],
    relations: [],
    write: generic(CreateBuyerProfileEntity, UpdateBuyerProfileEntity)
}

admin_resource! {
    table: input_suppliers,
    id: i32,
    entity: InputSupplierEntity,
    title: "Input suppliers",
    group: "Accounts",
    display: ["business_name", "user_id", "is_verified", "rating", "total_sales"],
    search: [business_name, license_number],
    filters: [is_verified: bool, delivery_available: bool, credit_terms_available: bool],
    ordering: [created_at, business_name, rating, total_sales],
    default_order: business_name asc,
    date_field: [created_at: Timestamp],
    price_field: [],
    actions: [verify_users => is_verified = true],
    relations: [
        specialization => input_supplier_specializations(input_supplier_id, input_category_id),
        service_areas => input_supplier_service_areas(input_supplier_id, county_id),
    ],
    write: generic(CreateInputSupplierEntity, UpdateInputSupplierEntity)
}

admin_resource! {
    table: extension_agents,
    id: i32,
    entity: ExtensionAgentEntity,
    title: "Extension agents",
    group: "Accounts",
    display: ["employee_id", "user_id", "years_of_experience", "rating", "is_available"],
    search: [employee_id, qualifications],
    filters: [is_available: bool, years_of_experience: i32],
    ordering: [created_at, employee_id, rating, years_of_experience],
    default_order: employee_id asc,
    date_field: [],
    price_field: [],
    actions: [],
    relations: [service_areas => extension_agent_service_areas(extension_agent_id, county_id)],
    write: generic(CreateExtensionAgentEntity, UpdateExtensionAgentEntity)
}

admin_resource! {
    table: user_profiles,
    id: i32,
    entity: UserProfileEntity,
    title: "User profiles",
    group: "Accounts",
    display: ["user_id", "preferred_language", "website"],
    search: [bio],
    filters: [preferred_language: String],
    ordering: [id, preferred_language],
    default_order: id asc,
    date_field: [],
    price_field: [],
    actions: [],
    relations: [],
    write: generic(CreateUserProfileEntity, UpdateUserProfileEntity)
}

pub const RESOURCES: &[ResourceMeta] = &[
    users::META,
    farmer_profiles::META,
    buyer_profiles::META,
    input_suppliers::META,
    extension_agents::META,
    user_profiles::META,
];

pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(users::routes())
        .merge(farmer_profiles::routes())
        .merge(buyer_profiles::routes())
        .merge(input_suppliers::routes())
        .merge(extension_agents::routes())
        .merge(user_profiles::routes())
}
