//! Enumerated values accepted by choice columns.
//!
//! Every enum here mirrors a `CHECK (... IN (...))` constraint in the migrations.
//! Admin inputs are checked against these before touching the database so that a
//! bad value produces a readable 400 instead of a constraint violation.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::core::app_error::AppError;

pub trait Choice: Sized + Copy + 'static {
    /// Field name used in error messages.
    const NAME: &'static str;
    const ALL: &'static [Self];

    fn as_str(&self) -> &'static str;

    fn parse(value: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.as_str() == value)
    }

    fn values() -> Vec<&'static str> {
        Self::ALL.iter().map(|c| c.as_str()).collect()
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct UnknownChoice {
    pub field: &'static str,
    pub value: String,
}

impl std::fmt::Display for UnknownChoice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "`{}` is not a valid {}", self.value, self.field)
    }
}

impl std::error::Error for UnknownChoice {}

macro_rules! choices {
    ($(#[$meta:meta])* $name:ident as $field:literal { $($variant:ident => $wire:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
        pub enum $name {
            $(
                #[serde(rename = $wire)]
                $variant,
            )+
        }

        impl Choice for $name {
            const NAME: &'static str = $field;
            const ALL: &'static [Self] = &[$($name::$variant),+];

            fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $wire),+
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = UnknownChoice;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                <$name as Choice>::parse(s).ok_or_else(|| UnknownChoice {
                    field: $field,
                    value: s.to_string(),
                })
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

/// Rejects `value` unless it is one of `C`'s wire names.
pub fn ensure<C: Choice>(value: &str) -> Result<(), AppError> {
    match C::parse(value) {
        Some(_) => Ok(()),
        None => Err(AppError::BadRequest(format!(
            "`{}` is not a valid {} (expected one of: {})",
            value,
            C::NAME,
            C::values().join(", ")
        ))),
    }
}

pub fn ensure_opt<C: Choice>(value: Option<&String>) -> Result<(), AppError> {
    match value {
        Some(value) => ensure::<C>(value),
        None => Ok(()),
    }
}

// Accounts

choices!(UserType as "user type" {
    Farmer => "farmer",
    Buyer => "buyer",
    Admin => "admin",
    Agent => "agent",
    Supplier => "supplier",
});

choices!(FarmingType as "farming type" {
    Crop => "crop",
    Livestock => "livestock",
    Mixed => "mixed",
    Poultry => "poultry",
    Fish => "fish",
    Horticulture => "horticulture",
});

choices!(Experience as "experience level" {
    Beginner => "beginner",
    Intermediate => "intermediate",
    Experienced => "experienced",
    Expert => "expert",
});

choices!(BuyerType as "buyer type" {
    Individual => "individual",
    Restaurant => "restaurant",
    Hotel => "hotel",
    Retailer => "retailer",
    Wholesaler => "wholesaler",
    Processor => "processor",
    Exporter => "exporter",
    Institution => "institution",
});

// Catalog

choices!(ProductQuality as "quality grade" {
    Premium => "premium",
    GradeA => "grade_a",
    GradeB => "grade_b",
    Standard => "standard",
});

choices!(ProductStatus as "product status" {
    Draft => "draft",
    Active => "active",
    SoldOut => "sold_out",
    Inactive => "inactive",
    Suspended => "suspended",
});

// Commerce

choices!(
    /// Flat order lifecycle. Any value may follow any other.
    OrderStatus as "order status" {
        Pending => "pending",
        Confirmed => "confirmed",
        Processing => "processing",
        Ready => "ready",
        Shipped => "shipped",
        Delivered => "delivered",
        Cancelled => "cancelled",
        Refunded => "refunded",
    }
);

impl OrderStatus {
    /// Statuses a buyer may still cancel from.
    pub const CANCELLABLE: [OrderStatus; 2] = [OrderStatus::Pending, OrderStatus::Confirmed];

    pub fn is_cancellable(&self) -> bool {
        Self::CANCELLABLE.contains(self)
    }

    /// Status a completed payment moves the order to. Only pending orders move.
    pub fn after_payment(&self) -> Option<OrderStatus> {
        (*self == OrderStatus::Pending).then_some(OrderStatus::Confirmed)
    }
}

choices!(OrderPaymentStatus as "order payment status" {
    Pending => "pending",
    Partial => "partial",
    Paid => "paid",
    Refunded => "refunded",
    Failed => "failed",
});

choices!(PaymentType as "payment type" {
    Order => "order",
    Refund => "refund",
    Partial => "partial",
});

choices!(PaymentStatus as "payment status" {
    Pending => "pending",
    Processing => "processing",
    Completed => "completed",
    Failed => "failed",
    Cancelled => "cancelled",
    Refunded => "refunded",
});

choices!(DeliveryStatus as "delivery status" {
    Assigned => "assigned",
    PickedUp => "picked_up",
    InTransit => "in_transit",
    OutForDelivery => "out_for_delivery",
    Delivered => "delivered",
    Failed => "failed",
    Returned => "returned",
});

// Inputs and extension

choices!(InputType as "input type" {
    Seeds => "seeds",
    Fertilizer => "fertilizer",
    Pesticide => "pesticide",
    Herbicide => "herbicide",
    Fungicide => "fungicide",
    Equipment => "equipment",
    Tools => "tools",
    Irrigation => "irrigation",
    Other => "other",
});

choices!(AdvisoryType as "advisory type" {
    Weather => "weather",
    Pest => "pest",
    Disease => "disease",
    Planting => "planting",
    Harvesting => "harvesting",
    Market => "market",
    General => "general",
});

choices!(Priority as "priority" {
    Low => "low",
    Medium => "medium",
    High => "high",
    Urgent => "urgent",
});

// Cooperatives

choices!(CooperativeType as "cooperative type" {
    Primary => "primary",
    Secondary => "secondary",
    Union => "union",
    Sacco => "sacco",
    Group => "group",
});

choices!(MembershipStatus as "membership status" {
    Active => "active",
    Suspended => "suspended",
    Terminated => "terminated",
    Pending => "pending",
});

// Finance and insurance

choices!(InstitutionType as "institution type" {
    Bank => "bank",
    Microfinance => "microfinance",
    Sacco => "sacco",
    Government => "government",
    Ngo => "ngo",
});

choices!(LoanApplicationStatus as "loan application status" {
    Draft => "draft",
    Submitted => "submitted",
    UnderReview => "under_review",
    Approved => "approved",
    Rejected => "rejected",
    Disbursed => "disbursed",
    Cancelled => "cancelled",
});

choices!(CoverageType as "coverage type" {
    Crop => "crop",
    Livestock => "livestock",
    Weather => "weather",
    AreaYield => "area_yield",
    MultiPeril => "multi_peril",
});

choices!(PolicyStatus as "policy status" {
    Active => "active",
    Expired => "expired",
    Cancelled => "cancelled",
    Suspended => "suspended",
    Claimed => "claimed",
});

choices!(ClaimStatus as "claim status" {
    Submitted => "submitted",
    UnderInvestigation => "under_investigation",
    Approved => "approved",
    Rejected => "rejected",
    Paid => "paid",
    Closed => "closed",
});

// Training and schemes

choices!(CourseType as "course type" {
    Online => "online",
    Physical => "physical",
    Hybrid => "hybrid",
});

choices!(DifficultyLevel as "difficulty level" {
    Beginner => "beginner",
    Intermediate => "intermediate",
    Advanced => "advanced",
});

choices!(SessionStatus as "session status" {
    Upcoming => "upcoming",
    Ongoing => "ongoing",
    Completed => "completed",
    Cancelled => "cancelled",
});

choices!(EnrollmentStatus as "enrollment status" {
    Enrolled => "enrolled",
    Completed => "completed",
    Dropped => "dropped",
    Failed => "failed",
});

choices!(SchemeType as "scheme type" {
    Subsidy => "subsidy",
    Loan => "loan",
    Insurance => "insurance",
    Training => "training",
    Equipment => "equipment",
    Input => "input",
    Market => "market",
});

choices!(SchemeApplicationStatus as "scheme application status" {
    Draft => "draft",
    Submitted => "submitted",
    UnderReview => "under_review",
    Approved => "approved",
    Rejected => "rejected",
    Disbursed => "disbursed",
});

// Content, support and audit

choices!(ContentType as "content type" {
    Article => "article",
    Guide => "guide",
    News => "news",
    CaseStudy => "case_study",
    Research => "research",
});

choices!(FaqCategory as "FAQ category" {
    General => "general",
    Farming => "farming",
    Marketplace => "marketplace",
    Payments => "payments",
    Delivery => "delivery",
    Insurance => "insurance",
    Loans => "loans",
    Technical => "technical",
});

choices!(NotificationType as "notification type" {
    Order => "order",
    Payment => "payment",
    Delivery => "delivery",
    Weather => "weather",
    Market => "market",
    Advisory => "advisory",
    System => "system",
    Promotion => "promotion",
});

choices!(TicketCategory as "ticket category" {
    Technical => "technical",
    Account => "account",
    Payment => "payment",
    Order => "order",
    Delivery => "delivery",
    General => "general",
    Complaint => "complaint",
    Suggestion => "suggestion",
});

choices!(TicketStatus as "ticket status" {
    Open => "open",
    InProgress => "in_progress",
    WaitingResponse => "waiting_response",
    Resolved => "resolved",
    Closed => "closed",
});

choices!(AuditAction as "audit action" {
    Create => "create",
    Update => "update",
    Delete => "delete",
    View => "view",
    Export => "export",
    Login => "login",
    Logout => "logout",
});

choices!(ConfigType as "configuration type" {
    General => "general",
    Payment => "payment",
    Notification => "notification",
    Security => "security",
    Integration => "integration",
});

// Market intelligence

choices!(DemandLevel as "expected demand" {
    VeryHigh => "very_high",
    High => "high",
    Medium => "medium",
    Low => "low",
    VeryLow => "very_low",
});

choices!(PriceDirection as "price prediction" {
    Rising => "rising",
    Stable => "stable",
    Falling => "falling",
});

choices!(ConsultationType as "consultation type" {
    Phone => "phone",
    Video => "video",
    Visit => "visit",
    Online => "online",
});

choices!(ConsultationStatus as "consultation status" {
    Pending => "pending",
    Accepted => "accepted",
    Scheduled => "scheduled",
    Completed => "completed",
    Cancelled => "cancelled",
});

// Subscriptions, storage and quality

choices!(PlanType as "plan type" {
    Basic => "basic",
    Premium => "premium",
    Professional => "professional",
    Enterprise => "enterprise",
});

choices!(BillingCycle as "billing cycle" {
    Monthly => "monthly",
    Quarterly => "quarterly",
    Annually => "annually",
});

choices!(SubscriptionStatus as "subscription status" {
    Active => "active",
    Cancelled => "cancelled",
    Expired => "expired",
    Suspended => "suspended",
    Pending => "pending",
});

choices!(BookingStatus as "booking status" {
    Pending => "pending",
    Confirmed => "confirmed",
    Active => "active",
    Completed => "completed",
    Cancelled => "cancelled",
});

choices!(InspectionType as "inspection type" {
    PreHarvest => "pre_harvest",
    PostHarvest => "post_harvest",
    Storage => "storage",
    Export => "export",
    Certification => "certification",
});

choices!(InspectionStatus as "inspection status" {
    Scheduled => "scheduled",
    InProgress => "in_progress",
    Completed => "completed",
    Cancelled => "cancelled",
});

choices!(Platform as "platform" {
    Android => "android",
    Ios => "ios",
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_names_round_trip_through_from_str() {
        for status in OrderStatus::ALL {
            let parsed: OrderStatus = status.as_str().parse().unwrap();
            assert_eq!(&parsed, status);
        }
        assert_eq!(DeliveryStatus::PickedUp.as_str(), "picked_up");
        assert_eq!(ProductQuality::GradeA.to_string(), "grade_a");
    }

    #[test]
    fn only_pending_and_confirmed_orders_are_cancellable() {
        let cancellable: Vec<&str> = OrderStatus::ALL
            .iter()
            .filter(|status| status.is_cancellable())
            .map(|status| status.as_str())
            .collect();
        assert_eq!(cancellable, vec!["pending", "confirmed"]);
    }

    #[test]
    fn payment_confirms_only_pending_orders() {
        assert_eq!(
            OrderStatus::Pending.after_payment(),
            Some(OrderStatus::Confirmed)
        );
        for status in OrderStatus::ALL.iter().filter(|s| **s != OrderStatus::Pending) {
            assert_eq!(status.after_payment(), None, "{status} should not move");
        }
    }

    #[test]
    fn unknown_values_are_rejected_with_the_field_name() {
        let err = "shipped-ish".parse::<OrderStatus>().unwrap_err();
        assert_eq!(err.field, "order status");
        assert_eq!(err.to_string(), "`shipped-ish` is not a valid order status");
    }

    #[test]
    fn ensure_lists_the_allowed_values() {
        assert!(ensure::<PaymentType>("refund").is_ok());

        let err = ensure::<PaymentType>("gift").unwrap_err();
        let AppError::BadRequest(message) = err else {
            panic!("expected a bad request");
        };
        assert!(message.contains("order, refund, partial"));
    }

    #[test]
    fn serde_uses_snake_case_wire_names() {
        let json = serde_json::to_string(&ClaimStatus::UnderInvestigation).unwrap();
        assert_eq!(json, "\"under_investigation\"");

        let status: TicketStatus = serde_json::from_str("\"waiting_response\"").unwrap();
        assert_eq!(status, TicketStatus::WaitingResponse);
    }

    #[test]
    fn demand_forecasts_use_five_levels() {
        assert_eq!(
            DemandLevel::values(),
            vec!["very_high", "high", "medium", "low", "very_low"]
        );
        assert!(ensure::<PriceDirection>("volatile").is_err());
        assert_eq!("ios".parse::<Platform>().unwrap(), Platform::Ios);
    }

    #[test]
    fn missing_optional_values_pass() {
        assert!(ensure_opt::<Priority>(None).is_ok());
        assert!(ensure_opt::<Priority>(Some(&"urgent".to_string())).is_ok());
        assert!(ensure_opt::<Priority>(Some(&"whenever".to_string())).is_err());
    }
}
