//! Subscription state DTOs.
//!
//! ## Version History
//! - **1.0.0**: Initial schema

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use version_migrate::{FromDomain, IntoDomain, Migrator, Versioned};

use haven_core::subscription::SubscriptionState;

use crate::storage::DocumentSchema;

/// Subscription DTO V1.0.0
#[derive(Debug, Clone, Serialize, Deserialize, Versioned)]
#[versioned(version = "1.0.0")]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionV1_0_0 {
    #[serde(default)]
    pub is_premium: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plan: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub started_at: Option<String>,
}

/// Unreadable plan or start date are left empty; restore backfills them.
impl IntoDomain<SubscriptionState> for SubscriptionV1_0_0 {
    fn into_domain(self) -> SubscriptionState {
        SubscriptionState {
            is_premium: self.is_premium,
            plan: self.plan.and_then(|p| p.parse().ok()),
            started_at: self
                .started_at
                .and_then(|s| DateTime::parse_from_rfc3339(&s).ok())
                .map(|ts| ts.with_timezone(&Utc)),
        }
    }
}

impl FromDomain<SubscriptionState> for SubscriptionV1_0_0 {
    fn from_domain(state: SubscriptionState) -> Self {
        SubscriptionV1_0_0 {
            is_premium: state.is_premium,
            plan: state.plan.map(|p| p.to_string()),
            started_at: state.started_at.map(|ts| ts.to_rfc3339()),
        }
    }
}

/// Creates the Migrator for the subscription document.
pub fn create_subscription_migrator() -> Migrator {
    let mut migrator = Migrator::builder().build();
    let path = Migrator::define(SubscriptionSchema::ENTITY)
        .from::<SubscriptionV1_0_0>()
        .into_with_save::<SubscriptionState>();
    migrator
        .register(path)
        .expect("Failed to register subscription migration path");
    migrator
}

pub struct SubscriptionSchema;

impl DocumentSchema for SubscriptionSchema {
    type Domain = SubscriptionState;
    const ENTITY: &'static str = "subscription";

    fn migrator() -> Migrator {
        create_subscription_migrator()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use haven_core::subscription::Plan;
    use serde_json::json;

    #[test]
    fn test_bad_fields_decode_as_missing() {
        let state: SubscriptionState = create_subscription_migrator()
            .load_flat_from(
                SubscriptionSchema::ENTITY,
                json!({"version": "1.0.0", "isPremium": true, "plan": "weekly", "startedAt": "soon"}),
            )
            .unwrap();
        assert!(state.is_premium);
        assert_eq!(state.plan, None);
        assert_eq!(state.started_at, None);
    }

    #[test]
    fn test_plan_is_lowercase_on_disk() {
        let state = SubscriptionState::activated(Plan::Yearly, Utc::now());
        let json = create_subscription_migrator()
            .save_domain_flat(SubscriptionSchema::ENTITY, &state)
            .unwrap();
        assert!(json.contains("\"plan\":\"yearly\""));
    }
}
