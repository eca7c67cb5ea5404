//! Inputs, extension, cooperatives, finance, insurance, training, government schemes
//! and quality assurance.

use axum::Router;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::{
    admin::{ResourceMeta, query::Timestamp},
    core::app_state::AppState,
    models::{
        AdvisoryEntity, AgriculturalInputEntity, ConsultationRequestEntity, CooperativeEntity,
        CooperativeMembershipEntity, CreateAdvisoryEntity, CreateAgriculturalInputEntity,
        CreateConsultationRequestEntity, CreateCooperativeEntity,
        CreateCooperativeMembershipEntity, CreateFinancialInstitutionEntity,
        CreateGovernmentSchemeEntity, CreateInputCategoryEntity, CreateInsuranceClaimEntity,
        CreateInsurancePolicyEntity, CreateInsuranceProductEntity, CreateInsuranceProviderEntity,
        CreateLoanApplicationEntity, CreateLoanProductEntity, CreateQualityInspectionEntity,
        CreateQualityInspectorEntity, CreateQualityStandardEntity, CreateSchemeApplicationEntity,
        CreateTrainingCourseEntity, CreateTrainingEnrollmentEntity, CreateTrainingProviderEntity,
        CreateTrainingSessionEntity, FinancialInstitutionEntity, GovernmentSchemeEntity,
        InputCategoryEntity, InsuranceClaimEntity, InsurancePolicyEntity, InsuranceProductEntity,
        InsuranceProviderEntity, LoanApplicationEntity, LoanProductEntity, QualityInspectionEntity,
        QualityInspectorEntity, QualityStandardEntity, SchemeApplicationEntity,
        TrainingCourseEntity, TrainingEnrollmentEntity, TrainingProviderEntity,
        TrainingSessionEntity, UpdateAdvisoryEntity, UpdateAgriculturalInputEntity,
        UpdateConsultationRequestEntity, UpdateCooperativeEntity,
        UpdateCooperativeMembershipEntity, UpdateFinancialInstitutionEntity,
        UpdateGovernmentSchemeEntity, UpdateInputCategoryEntity, UpdateInsuranceClaimEntity,
        UpdateInsurancePolicyEntity, UpdateInsuranceProductEntity, UpdateInsuranceProviderEntity,
        UpdateLoanApplicationEntity, UpdateLoanProductEntity, UpdateQualityInspectionEntity,
        UpdateQualityInspectorEntity, UpdateQualityStandardEntity, UpdateSchemeApplicationEntity,
        UpdateTrainingCourseEntity, UpdateTrainingEnrollmentEntity, UpdateTrainingProviderEntity,
        UpdateTrainingSessionEntity,
    },
};

// Inputs & extension

admin_resource! {
    table: input_categories,
    id: i32,
    entity: InputCategoryEntity,
    title: "Input categories",
    group: "Inputs & extension",
    display: ["name", "parent_id", "is_active"],
    search: [name, description],
    filters: [is_active: bool, parent_id: i32],
    ordering: [name],
    default_order: name asc,
    date_field: [],
    price_field: [],
    actions: [
        make_active => is_active = true,
        make_inactive => is_active = false,
    ],
    relations: [],
    write: generic(CreateInputCategoryEntity, UpdateInputCategoryEntity)
}

admin_resource! {
    table: agricultural_inputs,
    id: i32,
    entity: AgriculturalInputEntity,
    title: "Agricultural inputs",
    group: "Inputs & extension",
    display: ["name", "supplier_id", "input_type", "brand", "price_per_unit", "stock_quantity", "is_active"],
    search: [name, brand, manufacturer, registration_number],
    filters: [input_type: String, is_active: bool, category_id: i32, supplier_id: i32],
    ordering: [name, price_per_unit, stock_quantity, created_at],
    default_order: name asc,
    date_field: [created_at: Timestamp],
    price_field: [price_per_unit],
    actions: [
        make_active => is_active = true,
        make_inactive => is_active = false,
    ],
    relations: [compatible_crops => agricultural_input_compatible_crops(agricultural_input_id, crop_id)],
    write: generic(CreateAgriculturalInputEntity, UpdateAgriculturalInputEntity)
}

admin_resource! {
    table: advisories,
    id: i32,
    entity: AdvisoryEntity,
    title: "Advisories",
    group: "Inputs & extension",
    display: ["title", "agent_id", "advisory_type", "priority", "is_published", "valid_from", "valid_until"],
    search: [title, content],
    filters: [advisory_type: String, priority: String, is_published: bool, agent_id: i32],
    ordering: [valid_from, created_at, views_count],
    default_order: valid_from desc,
    date_field: [valid_from: Timestamp],
    price_field: [],
    actions: [],
    relations: [
        target_crops => advisory_target_crops(advisory_id, crop_id),
        target_areas => advisory_target_areas(advisory_id, county_id),
    ],
    write: generic(CreateAdvisoryEntity, UpdateAdvisoryEntity)
}

// Cooperatives

admin_resource! {
    table: cooperatives,
    id: i32,
    entity: CooperativeEntity,
    title: "Cooperatives",
    group: "Cooperatives",
    display: ["name", "cooperative_type", "chairman_id", "member_count", "registration_date", "is_active"],
    search: [name, registration_number, description],
    filters: [cooperative_type: String, is_active: bool, location_id: i32],
    ordering: [name, member_count, registration_date],
    default_order: name asc,
    date_field: [registration_date: NaiveDate],
    price_field: [],
    actions: [
        make_active => is_active = true,
        make_inactive => is_active = false,
    ],
    relations: [],
    write: generic(CreateCooperativeEntity, UpdateCooperativeEntity)
}

admin_resource! {
    table: cooperative_memberships,
    id: i32,
    entity: CooperativeMembershipEntity,
    title: "Cooperative memberships",
    group: "Cooperatives",
    display: ["membership_number", "cooperative_id", "member_id", "status", "join_date", "shares_owned"],
    search: [membership_number, position],
    filters: [status: String, cooperative_id: i32, member_id: Uuid],
    ordering: [join_date, shares_owned, total_contribution],
    default_order: join_date desc,
    date_field: [join_date: NaiveDate],
    price_field: [],
    actions: [],
    relations: [],
    write: generic(CreateCooperativeMembershipEntity, UpdateCooperativeMembershipEntity)
}

// Finance

admin_resource! {
    table: financial_institutions,
    id: i32,
    entity: FinancialInstitutionEntity,
    title: "Financial institutions",
    group: "Finance",
    display: ["name", "institution_type", "contact_person", "phone_number", "is_active"],
    search: [name, contact_person, phone_number, email],
    filters: [institution_type: String, is_active: bool],
    ordering: [name, created_at],
    default_order: name asc,
    date_field: [],
    price_field: [],
    actions: [
        make_active => is_active = true,
        make_inactive => is_active = false,
    ],
    relations: [service_areas => financial_institution_service_areas(financial_institution_id, county_id)],
    write: generic(CreateFinancialInstitutionEntity, UpdateFinancialInstitutionEntity)
}

admin_resource! {
    table: loan_products,
    id: i32,
    entity: LoanProductEntity,
    title: "Loan products",
    group: "Finance",
    display: [
        "name", "institution_id", "minimum_amount", "maximum_amount",
        "interest_rate", "repayment_period_months", "is_active",
    ],
    search: [name, loan_type],
    filters: [institution_id: i32, is_active: bool, collateral_required: bool],
    ordering: [name, interest_rate, maximum_amount, created_at],
    default_order: name asc,
    date_field: [],
    price_field: [],
    actions: [
        make_active => is_active = true,
        make_inactive => is_active = false,
    ],
    relations: [],
    write: generic(CreateLoanProductEntity, UpdateLoanProductEntity)
}

admin_resource! {
    table: loan_applications,
    id: i32,
    entity: LoanApplicationEntity,
    title: "Loan applications",
    group: "Finance",
    display: ["application_number", "farmer_id", "loan_product_id", "requested_amount", "status", "submitted_date"],
    search: [application_number, loan_purpose],
    filters: [status: String, farmer_id: i32, loan_product_id: i32],
    ordering: [created_at, submitted_date, requested_amount],
    default_order: created_at desc,
    date_field: [created_at: Timestamp],
    price_field: [],
    actions: [],
    relations: [],
    write: generic(CreateLoanApplicationEntity, UpdateLoanApplicationEntity)
}

// Insurance

admin_resource! {
    table: insurance_providers,
    id: i32,
    entity: InsuranceProviderEntity,
    title: "Insurance providers",
    group: "Insurance",
    display: ["name", "license_number", "contact_person", "phone_number", "is_active"],
    search: [name, license_number, contact_person],
    filters: [is_active: bool],
    ordering: [name, created_at],
    default_order: name asc,
    date_field: [],
    price_field: [],
    actions: [
        make_active => is_active = true,
        make_inactive => is_active = false,
    ],
    relations: [service_areas => insurance_provider_service_areas(insurance_provider_id, county_id)],
    write: generic(CreateInsuranceProviderEntity, UpdateInsuranceProviderEntity)
}

admin_resource! {
    table: insurance_products,
    id: i32,
    entity: InsuranceProductEntity,
    title: "Insurance products",
    group: "Insurance",
    display: ["name", "provider_id", "coverage_type", "coverage_percentage", "premium_rate", "is_active"],
    search: [name, description],
    filters: [coverage_type: String, is_active: bool, provider_id: i32],
    ordering: [name, premium_rate, created_at],
    default_order: name asc,
    date_field: [],
    price_field: [],
    actions: [
        make_active => is_active = true,
        make_inactive => is_active = false,
    ],
    relations: [covered_crops => insurance_product_covered_crops(insurance_product_id, crop_id)],
    write: generic(CreateInsuranceProductEntity, UpdateInsuranceProductEntity)
}

admin_resource! {
    table: insurance_policies,
    id: i32,
    entity: InsurancePolicyEntity,
    title: "Insurance policies",
    group: "Insurance",
    display: [
        "policy_number", "farmer_id", "product_id", "coverage_amount",
        "premium_amount", "status", "policy_start_date", "policy_end_date",
    ],
    search: [policy_number],
    filters: [status: String, farmer_id: i32, product_id: i32],
    ordering: [policy_start_date, policy_end_date, coverage_amount, created_at],
    default_order: policy_start_date desc,
    date_field: [policy_start_date: NaiveDate],
    price_field: [],
    actions: [],
    relations: [covered_farms => insurance_policy_covered_farms(insurance_policy_id, farm_id)],
    write: generic(CreateInsurancePolicyEntity, UpdateInsurancePolicyEntity)
}

admin_resource! {
    table: insurance_claims,
    id: i32,
    entity: InsuranceClaimEntity,
    title: "Insurance claims",
    group: "Insurance",
    display: ["claim_number", "policy_id", "incident_date", "claimed_amount", "status", "approved_amount"],
    search: [claim_number, incident_description],
    filters: [status: String, policy_id: i32],
    ordering: [created_at, incident_date, claimed_amount],
    default_order: created_at desc,
    date_field: [incident_date: NaiveDate],
    price_field: [],
    actions: [],
    relations: [],
    write: generic(CreateInsuranceClaimEntity, UpdateInsuranceClaimEntity)
}

// Training

admin_resource! {
    table: training_providers,
    id: i32,
    entity: TrainingProviderEntity,
    title: "Training providers",
    group: "Training",
    display: ["name", "contact_person", "phone_number", "is_verified", "rating"],
    search: [name, contact_person, phone_number, email],
    filters: [is_verified: bool],
    ordering: [name, rating, created_at],
    default_order: name asc,
    date_field: [],
    price_field: [],
    actions: [],
    relations: [service_areas => training_provider_service_areas(training_provider_id, county_id)],
    write: generic(CreateTrainingProviderEntity, UpdateTrainingProviderEntity)
}

admin_resource! {
    table: training_courses,
    id: i32,
    entity: TrainingCourseEntity,
    title: "Training courses",
    group: "Training",
    display: ["title", "provider_id", "course_type", "difficulty_level", "duration_hours", "course_fee", "is_active"],
    search: [title, description],
    filters: [course_type: String, difficulty_level: String, is_active: bool, provider_id: i32],
    ordering: [title, course_fee, duration_hours, created_at],
    default_order: title asc,
    date_field: [],
    price_field: [course_fee],
    actions: [
        make_active => is_active = true,
        make_inactive => is_active = false,
    ],
    relations: [target_crops => training_course_target_crops(training_course_id, crop_id)],
    write: generic(CreateTrainingCourseEntity, UpdateTrainingCourseEntity)
}

admin_resource! {
    table: training_sessions,
    id: i32,
    entity: TrainingSessionEntity,
    title: "Training sessions",
    group: "Training",
    display: ["session_name", "course_id", "instructor", "start_date", "end_date", "status", "enrolled_count"],
    search: [session_name, instructor],
    filters: [status: String, course_id: i32],
    ordering: [start_date, end_date, enrolled_count],
    default_order: start_date desc,
    date_field: [start_date: Timestamp],
    price_field: [],
    actions: [],
    relations: [],
    write: generic(CreateTrainingSessionEntity, UpdateTrainingSessionEntity)
}

admin_resource! {
    table: training_enrollments,
    id: i32,
    entity: TrainingEnrollmentEntity,
    title: "Training enrollments",
    group: "Training",
    display: ["certificate_number", "farmer_id", "session_id", "status", "progress_percentage", "enrollment_date"],
    search: [certificate_number, feedback_comment],
    filters: [status: String, certificate_issued: bool, farmer_id: i32, session_id: i32],
    ordering: [enrollment_date, progress_percentage],
    default_order: enrollment_date desc,
    date_field: [enrollment_date: Timestamp],
    price_field: [],
    actions: [],
    relations: [],
    write: generic(CreateTrainingEnrollmentEntity, UpdateTrainingEnrollmentEntity)
}

// Government schemes

admin_resource! {
    table: government_schemes,
    id: i32,
    entity: GovernmentSchemeEntity,
    title: "Government schemes",
    group: "Government schemes",
    display: ["name", "scheme_type", "implementing_agency", "benefit_amount", "application_deadline", "is_active"],
    search: [name, implementing_agency, description],
    filters: [scheme_type: String, is_active: bool],
    ordering: [name, application_deadline, created_at],
    default_order: created_at desc,
    date_field: [created_at: Timestamp],
    price_field: [],
    actions: [
        make_active => is_active = true,
        make_inactive => is_active = false,
    ],
    relations: [
        coverage_areas => government_scheme_coverage_areas(government_scheme_id, county_id),
        target_crops => government_scheme_target_crops(government_scheme_id, crop_id),
    ],
    write: generic(CreateGovernmentSchemeEntity, UpdateGovernmentSchemeEntity)
}

admin_resource! {
    table: scheme_applications,
    id: i32,
    entity: SchemeApplicationEntity,
    title: "Scheme applications",
    group: "Government schemes",
    display: ["application_number", "scheme_id", "farmer_id", "status", "submitted_date", "approved_amount"],
    search: [application_number, officer_comments],
    filters: [status: String, scheme_id: i32, farmer_id: i32],
    ordering: [created_at, submitted_date],
    default_order: created_at desc,
    date_field: [created_at: Timestamp],
    price_field: [],
    actions: [],
    relations: [],
    write: generic(CreateSchemeApplicationEntity, UpdateSchemeApplicationEntity)
}

admin_resource! {
    table: consultation_requests,
    id: i32,
    entity: ConsultationRequestEntity,
    title: "Consultation requests",
    group: "Inputs & extension",
    display: [
        "subject", "farmer_id", "agent_id", "consultation_type", "status",
        "preferred_date", "consultation_fee",
    ],
    search: [subject],
    filters: [consultation_type: String, status: String, agent_id: i32, farmer_id: i32],
    ordering: [preferred_date, created_at, consultation_fee],
    default_order: preferred_date desc,
    date_field: [preferred_date: Timestamp],
    price_field: [consultation_fee],
    actions: [],
    relations: [],
    write: generic(CreateConsultationRequestEntity, UpdateConsultationRequestEntity)
}

// Quality assurance

admin_resource! {
    table: quality_standards,
    id: i32,
    entity: QualityStandardEntity,
    title: "Quality standards",
    group: "Quality assurance",
    display: ["standard_name", "crop_id", "certifying_body", "validity_period_months", "is_active"],
    search: [standard_name, certifying_body],
    filters: [certifying_body: String, is_active: bool, crop_id: i32],
    ordering: [standard_name, certifying_body, created_at],
    default_order: standard_name asc,
    date_field: [],
    price_field: [],
    actions: [],
    relations: [],
    write: generic(CreateQualityStandardEntity, UpdateQualityStandardEntity)
}

admin_resource! {
    table: quality_inspectors,
    id: i32,
    entity: QualityInspectorEntity,
    title: "Quality inspectors",
    group: "Quality assurance",
    display: ["license_number", "user_id", "inspection_fee", "rating", "is_available"],
    search: [license_number],
    filters: [is_available: bool, rating: Decimal],
    ordering: [license_number, rating, inspection_fee, created_at],
    default_order: license_number asc,
    date_field: [],
    price_field: [inspection_fee],
    actions: [],
    relations: [
        specialization => quality_inspector_specializations(quality_inspector_id, crop_id),
        service_areas => quality_inspector_service_areas(quality_inspector_id, county_id),
    ],
    write: generic(CreateQualityInspectorEntity, UpdateQualityInspectorEntity)
}

admin_resource! {
    table: quality_inspections,
    id: i32,
    entity: QualityInspectionEntity,
    title: "Quality inspections",
    group: "Quality assurance",
    display: [
        "inspection_number", "product_id", "inspector_id", "inspection_type",
        "status", "overall_grade", "certificate_issued",
    ],
    search: [inspection_number],
    filters: [inspection_type: String, status: String, certificate_issued: bool, inspector_id: i32],
    ordering: [scheduled_date, created_at, inspection_number],
    default_order: scheduled_date desc,
    date_field: [scheduled_date: Timestamp],
    price_field: [],
    actions: [],
    relations: [],
    write: generic(CreateQualityInspectionEntity, UpdateQualityInspectionEntity)
}

pub const RESOURCES: &[ResourceMeta] = &[
    input_categories::META,
    agricultural_inputs::META,
    advisories::META,
    cooperatives::META,
    cooperative_memberships::META,
    financial_institutions::META,
    loan_products::META,
    loan_applications::META,
    insurance_providers::META,
    insurance_products::META,
    insurance_policies::META,
    insurance_claims::META,
    training_providers::META,
    training_courses::META,
    training_sessions::META,
    training_enrollments::META,
    government_schemes::META,
    scheme_applications::META,
    consultation_requests::META,
    quality_standards::META,
    quality_inspectors::META,
    quality_inspections::META,
];

pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(input_categories::routes())
        .merge(agricultural_inputs::routes())
        .merge(advisories::routes())
        .merge(cooperatives::routes())
        .merge(cooperative_memberships::routes())
        .merge(financial_institutions::routes())
        .merge(loan_products::routes())
        .merge(loan_applications::routes())
        .merge(insurance_providers::routes())
        .merge(insurance_products::routes())
        .merge(insurance_policies::routes())
        .merge(insurance_claims::routes())
        .merge(training_providers::routes())
        .merge(training_courses::routes())
        .merge(training_sessions::routes())
        .merge(training_enrollments::routes())
        .merge(government_schemes::routes())
        .merge(scheme_applications::routes())
        .merge(consultation_requests::routes())
        .merge(quality_standards::routes())
        .merge(quality_inspectors::routes())
        .merge(quality_inspections::routes())
}
