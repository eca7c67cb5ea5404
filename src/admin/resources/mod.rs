//! Resource declarations, grouped the way the admin navigation shows them.

use axum::Router;

use crate::{admin::ResourceMeta, core::app_state::AppState};

pub mod accounts;
pub mod analytics;
pub mod catalog;
pub mod commerce;
pub mod content;
pub mod geography;
pub mod logistics;
pub mod platform;
pub mod services;

const GROUPS: &[&[ResourceMeta]] = &[
    accounts::RESOURCES,
    geography::RESOURCES,
    catalog::RESOURCES,
    commerce::RESOURCES,
    logistics::RESOURCES,
    services::RESOURCES,
    content::RESOURCES,
    platform::RESOURCES,
    analytics::RESOURCES,
];

/// Every registered resource in navigation order.
pub fn all() -> impl Iterator<Item = &'static ResourceMeta> {
    GROUPS.iter().flat_map(|group| group.iter())
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(accounts::routes())
        .merge(geography::routes())
        .merge(catalog::routes())
        .merge(commerce::routes())
        .merge(logistics::routes())
        .merge(services::routes())
        .merge(content::routes())
        .merge(platform::routes())
        .merge(analytics::routes())
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    fn find(name: &str) -> Option<&'static ResourceMeta> {
        all().find(|meta| meta.name == name)
    }

    #[test]
    fn every_table_is_registered_once() {
        let names: Vec<_> = all().map(|meta| meta.name).collect();
        let unique: HashSet<_> = names.iter().collect();
        assert_eq!(names.len(), 70);
        assert_eq!(unique.len(), names.len());
    }

    #[test]
    fn default_ordering_is_an_allowed_field() {
        for meta in all() {
            let field = meta.default_ordering.trim_start_matches('-');
            assert!(
                meta.ordering.contains(&field),
                "{} orders by {} by default",
                meta.name,
                field
            );
        }
    }

    #[test]
    fn audit_logs_are_read_only() {
        let audit = find("audit_logs").unwrap();
        assert!(audit.readonly);
        assert!(audit.actions.is_empty());
        assert_eq!(
            all().filter(|meta| meta.readonly).count(),
            1,
            "only the audit trail is read-only"
        );
    }

    #[test]
    fn products_expose_status_and_featured_actions() {
        let products = find("products").unwrap();
        assert_eq!(products.date_hierarchy, Some("created_at"));
        assert_eq!(products.price_field, Some("price_per_unit"));
        for action in ["make_active", "make_inactive", "mark_as_featured", "remove_featured"] {
            assert!(products.actions.contains(&action), "missing {}", action);
        }
    }

    #[test]
    fn many_to_many_links_are_exposed_on_their_owner() {
        let expected = [
            ("delivery_zones", &["counties"][..]),
            ("delivery_partners", &["service_areas"]),
            ("input_suppliers", &["specialization", "service_areas"]),
            ("agricultural_inputs", &["compatible_crops"]),
            ("extension_agents", &["service_areas"]),
            ("advisories", &["target_crops", "target_areas"]),
            ("financial_institutions", &["service_areas"]),
            ("insurance_providers", &["service_areas"]),
            ("insurance_products", &["covered_crops"]),
            ("insurance_policies", &["covered_farms"]),
            ("blog_posts", &["related_crops"]),
            ("quality_inspectors", &["specialization", "service_areas"]),
            ("training_providers", &["service_areas"]),
            ("training_courses", &["target_crops"]),
            ("government_schemes", &["coverage_areas", "target_crops"]),
        ];
        for (name, relations) in expected {
            assert_eq!(find(name).unwrap().relations, relations, "{}", name);
        }
        let links: usize = all().map(|meta| meta.relations.len()).sum();
        assert_eq!(links, 19);
    }

    #[test]
    fn unknown_resource_is_not_found() {
        assert!(find("spaceships").is_none());
    }
}
