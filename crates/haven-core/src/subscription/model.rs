//! Premium products and the stored subscription state.

use chrono::{DateTime, Months, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Plan {
    Monthly,
    Yearly,
}

impl Plan {
    pub fn months(&self) -> u32 {
        match self {
            Plan::Monthly => 1,
            Plan::Yearly => 12,
        }
    }
}

/// A purchasable premium product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub product_id: &'static str,
    pub title: &'static str,
    pub price: &'static str,
    pub currency: &'static str,
    pub description: &'static str,
    pub plan: Plan,
    /// Charge amount in the smallest currency unit.
    pub amount_in_paise: u64,
}

pub const MONTHLY_PRODUCT_ID: &str = "haven_premium_monthly";
pub const YEARLY_PRODUCT_ID: &str = "haven_premium_yearly";

pub const PRODUCTS: &[Product] = &[
    Product {
        product_id: MONTHLY_PRODUCT_ID,
        title: "Monthly Premium",
        price: "₹500",
        currency: "INR",
        description: "Unlimited access for one month",
        plan: Plan::Monthly,
        amount_in_paise: 50_000,
    },
    Product {
        product_id: YEARLY_PRODUCT_ID,
        title: "Yearly Premium",
        price: "₹4,500",
        currency: "INR",
        description: "Unlimited access for one year",
        plan: Plan::Yearly,
        amount_in_paise: 450_000,
    },
];

pub fn find_product(product_id: &str) -> Option<&'static Product> {
    PRODUCTS.iter().find(|p| p.product_id == product_id)
}

pub fn product_for_plan(plan: Plan) -> &'static Product {
    match plan {
        Plan::Monthly => &PRODUCTS[0],
        Plan::Yearly => &PRODUCTS[1],
    }
}

/// Persisted premium flag with plan details.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionState {
    pub is_premium: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plan: Option<Plan>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub started_at: Option<DateTime<Utc>>,
}

impl SubscriptionState {
    pub fn activated(plan: Plan, started_at: DateTime<Utc>) -> Self {
        Self {
            is_premium: true,
            plan: Some(plan),
            started_at: Some(started_at),
        }
    }

    /// Fills in a missing start date and plan for a restored premium flag.
    pub fn backfilled(self, now: DateTime<Utc>) -> Self {
        if !self.is_premium || self.started_at.is_some() {
            return self;
        }
        Self {
            is_premium: true,
            plan: Some(self.plan.unwrap_or(Plan::Monthly)),
            started_at: Some(now),
        }
    }

    /// Start plus one billing period, clamped to the end of shorter months.
    pub fn next_billing_date(&self) -> Option<DateTime<Utc>> {
        if !self.is_premium {
            return None;
        }
        let start = self.started_at?;
        let plan = self.plan.unwrap_or(Plan::Monthly);
        start.checked_add_months(Months::new(plan.months()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_product_lookup() {
        assert_eq!(find_product("haven_premium_yearly").unwrap().amount_in_paise, 450_000);
        assert!(find_product("unknown").is_none());
        assert_eq!(product_for_plan(Plan::Monthly).product_id, MONTHLY_PRODUCT_ID);
    }

    #[test]
    fn test_monthly_billing_clamps_to_month_end() {
        let start = Utc.with_ymd_and_hms(2024, 1, 31, 10, 0, 0).unwrap();
        let state = SubscriptionState::activated(Plan::Monthly, start);
        assert_eq!(
            state.next_billing_date().unwrap(),
            Utc.with_ymd_and_hms(2024, 2, 29, 10, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_yearly_billing_from_leap_day() {
        let start = Utc.with_ymd_and_hms(2024, 2, 29, 0, 0, 0).unwrap();
        let state = SubscriptionState::activated(Plan::Yearly, start);
        assert_eq!(
            state.next_billing_date().unwrap(),
            Utc.with_ymd_and_hms(2025, 2, 28, 0, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_backfill_only_touches_premium_without_start() {
        let now = Utc.with_ymd_and_hms(2024, 5, 1, 0, 0, 0).unwrap();
        let restored = SubscriptionState {
            is_premium: true,
            plan: None,
            started_at: None,
        }
        .backfilled(now);
        assert_eq!(restored, SubscriptionState::activated(Plan::Monthly, now));

        let free = SubscriptionState::default().backfilled(now);
        assert!(!free.is_premium);
        assert!(free.next_billing_date().is_none());
    }
}
