use serde::Deserialize;
use serde_json::Value;

use crate::api::{RequestKind, RequestRecord, Role};

pub const MAX_BADGE_COUNT: u32 = 9;

/// Pending requests per kind, as broadcast on the pending-count channel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct PendingCounts {
    #[serde(default, alias = "officialBusiness", alias = "ob")]
    pub official_business: u32,
    #[serde(default, alias = "travelOrders", alias = "to")]
    pub travel_orders: u32,
    #[serde(default, alias = "passSlips", alias = "ps")]
    pub pass_slips: u32,
}

impl PendingCounts {
    /// Accepts the counts at the top level or nested under `counts`.
    pub fn from_event(data: &Value) -> Result<Self, serde_json::Error> {
        let source = data.get("counts").unwrap_or(data);
        serde_json::from_value(source.clone())
    }

    /// Records the given role still has to act on.
    pub fn from_records(records: &[RequestRecord], role: Role) -> Self {
        let mut counts = Self::default();
        for record in records {
            let actionable = record
                .status()
                .and_then(|status| status.acting_role())
                .is_some_and(|acting| acting == role);
            if actionable {
                *counts.slot_mut(record.kind()) += 1;
            }
        }
        counts
    }

    pub fn get(&self, kind: RequestKind) -> u32 {
        match kind {
            RequestKind::TravelOrder => self.travel_orders,
            RequestKind::OfficialBusiness => self.official_business,
            RequestKind::PassSlip => self.pass_slips,
        }
    }

    fn slot_mut(&mut self, kind: RequestKind) -> &mut u32 {
        match kind {
            RequestKind::TravelOrder => &mut self.travel_orders,
            RequestKind::OfficialBusiness => &mut self.official_business,
            RequestKind::PassSlip => &mut self.pass_slips,
        }
    }

    pub fn total(&self) -> u32 {
        self.official_business
            .saturating_add(self.travel_orders)
            .saturating_add(self.pass_slips)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationItem {
    pub kind: RequestKind,
    pub title: String,
    pub message: String,
}

/// `None` hides the badge.
pub fn badge_label(count: u32) -> Option<String> {
    match count {
        0 => None,
        n if n > MAX_BADGE_COUNT => Some(format!("{}+", MAX_BADGE_COUNT)),
        n => Some(n.to_string()),
    }
}

/// One entry per kind with pending work, in OB, TO, PS order.
pub fn derive_notifications(counts: &PendingCounts) -> Vec<NotificationItem> {
    [
        RequestKind::OfficialBusiness,
        RequestKind::TravelOrder,
        RequestKind::PassSlip,
    ]
    .into_iter()
    .filter_map(|kind| {
        let count = counts.get(kind);
        let label = badge_label(count)?;
        let noun = if count == 1 { "request" } else { "requests" };
        Some(NotificationItem {
            kind,
            title: kind.label().to_string(),
            message: format!("{} pending {} awaiting review", label, noun),
        })
    })
    .collect()
}
