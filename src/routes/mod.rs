use chrono::{DateTime, Utc};
use utoipa_axum::router::OpenApiRouter;

use crate::core::app_state::AppState;

pub mod buyers;
pub mod deliveries;
pub mod orders;
pub mod payments;
pub mod products;

/// Every marketplace route, collected into one OpenAPI document.
pub fn routes_with_openapi() -> OpenApiRouter<AppState> {
    buyers::carts::routes_with_openapi()
        .merge(buyers::orders::routes_with_openapi())
        .merge(orders::routes_with_openapi())
        .merge(payments::routes_with_openapi())
        .merge(deliveries::routes_with_openapi())
        .merge(products::routes_with_openapi())
}

/// Builds a human-readable reference such as `ORD-20250110-9F3A61C2`.
pub(crate) fn reference(prefix: &str, at: DateTime<Utc>) -> String {
    let suffix = uuid::Uuid::new_v4().simple().to_string()[..8].to_uppercase();
    format!("{}-{}-{}", prefix, at.format("%Y%m%d"), suffix)
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn reference_has_prefix_date_and_suffix() {
        let at = Utc.with_ymd_and_hms(2025, 1, 10, 9, 30, 0).unwrap();
        let value = reference("ORD", at);
        let parts: Vec<&str> = value.split('-').collect();

        assert_eq!(parts.len(), 3);
        assert_eq!(parts[0], "ORD");
        assert_eq!(parts[1], "20250110");
        assert_eq!(parts[2].len(), 8);
        assert!(parts[2].chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_lowercase()));
    }

    #[test]
    fn references_are_unique() {
        let at = Utc::now();
        assert_ne!(reference("TXN", at), reference("TXN", at));
    }
}
