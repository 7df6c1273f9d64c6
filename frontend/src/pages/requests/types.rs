use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::api::{
    HeadPosition, OfficialBusiness, PassSlip, RequestKind, RequestRecord, RequestStatus,
    TravelOrder,
};

/// Requests per requester name, one map per request kind.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequesterCounts {
    pub travel_orders: BTreeMap<String, usize>,
    pub official_business: BTreeMap<String, usize>,
    pub pass_slips: BTreeMap<String, usize>,
}

impl RequesterCounts {
    pub fn for_kind(&self, kind: RequestKind) -> &BTreeMap<String, usize> {
        match kind {
            RequestKind::TravelOrder => &self.travel_orders,
            RequestKind::OfficialBusiness => &self.official_business,
            RequestKind::PassSlip => &self.pass_slips,
        }
    }

    fn for_kind_mut(&mut self, kind: RequestKind) -> &mut BTreeMap<String, usize> {
        match kind {
            RequestKind::TravelOrder => &mut self.travel_orders,
            RequestKind::OfficialBusiness => &mut self.official_business,
            RequestKind::PassSlip => &mut self.pass_slips,
        }
    }

    pub fn tally(records: &[RequestRecord]) -> Self {
        let mut counts = Self::default();
        for record in records {
            let map = counts.for_kind_mut(record.kind());
            for employee in record.employees() {
                let name = employee.name.trim();
                if name.is_empty() {
                    continue;
                }
                *map.entry(name.to_string()).or_insert(0) += 1;
            }
        }
        counts
    }

    /// Highest counts first; ties broken by name.
    pub fn top(&self, kind: RequestKind, limit: usize) -> Vec<(String, usize)> {
        let mut entries: Vec<(String, usize)> = self
            .for_kind(kind)
            .iter()
            .map(|(name, count)| (name.clone(), *count))
            .collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        entries.truncate(limit);
        entries
    }
}

/// Everything the approval views need from one aggregate fetch.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RequestAggregate {
    pub records: Vec<RequestRecord>,
    pub head_positions: Vec<HeadPosition>,
    pub requester_counts: RequesterCounts,
}

impl RequestAggregate {
    /// Travel orders first, then official business, then pass slips, each in source order.
    pub fn assemble(
        travel_orders: Vec<TravelOrder>,
        official_business: Vec<OfficialBusiness>,
        pass_slips: Vec<PassSlip>,
        head_positions: Vec<HeadPosition>,
    ) -> Self {
        let records: Vec<RequestRecord> = travel_orders
            .into_iter()
            .map(RequestRecord::TravelOrder)
            .chain(
                official_business
                    .into_iter()
                    .map(RequestRecord::OfficialBusiness),
            )
            .chain(pass_slips.into_iter().map(RequestRecord::PassSlip))
            .collect();
        let requester_counts = RequesterCounts::tally(&records);
        Self {
            records,
            head_positions,
            requester_counts,
        }
    }

    pub fn find(&self, kind: RequestKind, id: i64) -> Option<&RequestRecord> {
        self.records
            .iter()
            .find(|record| record.kind() == kind && record.id() == id)
    }
}

/// The record an approval action refers to. `id` is `None` when the selection went stale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionTarget {
    pub id: Option<i64>,
    pub kind: RequestKind,
    pub status: Option<RequestStatus>,
}

impl ActionTarget {
    pub fn of(record: &RequestRecord) -> Self {
        Self {
            id: Some(record.id()),
            kind: record.kind(),
            status: record.status(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    Approve,
    Decline { remarks: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestAction {
    pub target: ActionTarget,
    pub decision: Decision,
}
