//! Free-tier daily message accounting.

use serde::Serialize;

use super::message::ChatMessage;
use crate::clock::Clock;

/// Snapshot of the user's daily chat allowance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuotaStatus {
    /// User messages sent today.
    pub used: u32,
    /// Daily free allowance.
    pub limit: u32,
    /// Premium users are never limited.
    pub is_premium: bool,
}

impl QuotaStatus {
    /// Counts today's user-authored messages against `limit`.
    pub fn compute(messages: &[ChatMessage], limit: u32, is_premium: bool, clock: &dyn Clock) -> Self {
        let today = clock.today();
        let used = messages
            .iter()
            .filter(|m| m.is_user() && clock.day_of(&m.timestamp) == today)
            .count();

        Self {
            used: u32::try_from(used).unwrap_or(u32::MAX),
            limit,
            is_premium,
        }
    }

    pub fn is_limit_reached(&self) -> bool {
        !self.is_premium && self.used >= self.limit
    }

    /// Free messages left today. `None` for premium users.
    pub fn remaining(&self) -> Option<u32> {
        if self.is_premium {
            None
        } else {
            Some(self.limit.saturating_sub(self.used))
        }
    }
}
