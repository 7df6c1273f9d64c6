use leptos::*;

use crate::api::{RequestKind, RequestRecord, RequestStatus, Role};

/// Approved and declined records are visible to everyone; pending ones only
/// to the role that acts on them. Records without a recognized status are hidden.
pub fn is_visible_to(status: Option<RequestStatus>, role: Role) -> bool {
    match status {
        Some(RequestStatus::Approved | RequestStatus::Declined) => true,
        Some(RequestStatus::PendingAdmin) => role == Role::Admin,
        Some(RequestStatus::Pending) => role == Role::Evaluator,
        None => false,
    }
}

pub fn visible_for_role(records: &[RequestRecord], role: Role) -> Vec<RequestRecord> {
    records
        .iter()
        .filter(|record| is_visible_to(record.status(), role))
        .cloned()
        .collect()
}

pub fn is_actionable(record: &RequestRecord, role: Role) -> bool {
    record
        .status()
        .and_then(|status| status.acting_role())
        .is_some_and(|acting| acting == role)
}

/// Plain snapshot of the list filters, applied after the role filter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestFilter {
    pub kind: Option<RequestKind>,
    pub status: Option<RequestStatus>,
    pub search: String,
}

impl RequestFilter {
    pub fn matches(&self, record: &RequestRecord) -> bool {
        if self.kind.is_some_and(|kind| record.kind() != kind) {
            return false;
        }
        if self.status.is_some() && record.status() != self.status {
            return false;
        }
        let needle = self.search.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        record.key().to_lowercase().contains(&needle)
            || record.destination().to_lowercase().contains(&needle)
            || record.purpose().to_lowercase().contains(&needle)
            || record
                .requester_names()
                .iter()
                .any(|name| name.to_lowercase().contains(&needle))
    }

    pub fn apply(&self, records: &[RequestRecord]) -> Vec<RequestRecord> {
        records
            .iter()
            .filter(|record| self.matches(record))
            .cloned()
            .collect()
    }
}

#[derive(Clone, Copy)]
pub struct RequestFilterState {
    kind: RwSignal<Option<RequestKind>>,
    status: RwSignal<Option<RequestStatus>>,
    search: RwSignal<String>,
    page: RwSignal<usize>,
}

impl Default for RequestFilterState {
    fn default() -> Self {
        Self {
            kind: create_rw_signal(None),
            status: create_rw_signal(None),
            search: create_rw_signal(String::new()),
            page: create_rw_signal(1),
        }
    }
}

impl RequestFilterState {
    pub fn kind_signal(&self) -> RwSignal<Option<RequestKind>> {
        self.kind
    }

    pub fn status_signal(&self) -> RwSignal<Option<RequestStatus>> {
        self.status
    }

    pub fn search_signal(&self) -> RwSignal<String> {
        self.search
    }

    pub fn page_signal(&self) -> RwSignal<usize> {
        self.page
    }

    /// Changing a filter always returns to the first page.
    pub fn set_kind(&self, kind: Option<RequestKind>) {
        self.kind.set(kind);
        self.page.set(1);
    }

    pub fn set_status(&self, status: Option<RequestStatus>) {
        self.status.set(status);
        self.page.set(1);
    }

    pub fn set_search(&self, search: String) {
        self.search.set(search);
        self.page.set(1);
    }

    pub fn snapshot(&self) -> RequestFilter {
        RequestFilter {
            kind: self.kind.get(),
            status: self.status.get(),
            search: self.search.get(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::records::fixtures::{official_business, pass_slip, travel_order};
    use crate::test_support::ssr::with_runtime;

    fn mixed_records() -> Vec<RequestRecord> {
        vec![
            travel_order(1, "pending"),
            travel_order(2, "pendingAdmin"),
            travel_order(3, "approved"),
            official_business(4, "declined"),
            official_business(5, "pending"),
            pass_slip(6, "pendingAdmin"),
            pass_slip(7, "archived"),
        ]
    }

    fn statuses(records: &[RequestRecord]) -> Vec<Option<RequestStatus>> {
        records.iter().map(|record| record.status()).collect()
    }

    #[test]
    fn non_reviewers_only_see_final_records() {
        for role in [Role::Guard, Role::Unknown] {
            let visible = visible_for_role(&mixed_records(), role);
            assert_eq!(visible.len(), 2);
            assert!(visible
                .iter()
                .all(|record| record.status().is_some_and(|status| status.is_final())));
        }
    }

    #[test]
    fn evaluator_sees_pending_but_not_pending_admin() {
        let visible = visible_for_role(&mixed_records(), Role::Evaluator);
        let statuses = statuses(&visible);
        assert_eq!(
            statuses
                .iter()
                .filter(|s| **s == Some(RequestStatus::Pending))
                .count(),
            2
        );
        assert!(!statuses.contains(&Some(RequestStatus::PendingAdmin)));
    }

    #[test]
    fn admin_sees_pending_admin_but_not_pending() {
        let visible = visible_for_role(&mixed_records(), Role::Admin);
        let statuses = statuses(&visible);
        assert_eq!(
            statuses
                .iter()
                .filter(|s| **s == Some(RequestStatus::PendingAdmin))
                .count(),
            2
        );
        assert!(!statuses.contains(&Some(RequestStatus::Pending)));
    }

    #[test]
    fn unrecognized_status_is_excluded_for_every_role() {
        for role in [Role::Admin, Role::Evaluator, Role::Guard, Role::Unknown] {
            let visible = visible_for_role(&mixed_records(), role);
            assert!(visible.iter().all(|record| record.key() != "PS-7"));
        }
    }

    #[test]
    fn role_filter_is_idempotent() {
        let records = mixed_records();
        for role in [Role::Admin, Role::Evaluator, Role::Guard] {
            let once = visible_for_role(&records, role);
            assert_eq!(once, visible_for_role(&records, role));
            assert_eq!(once, visible_for_role(&once, role));
        }
    }

    #[test]
    fn actionable_follows_acting_role() {
        assert!(is_actionable(&travel_order(1, "pending"), Role::Evaluator));
        assert!(!is_actionable(&travel_order(1, "pending"), Role::Admin));
        assert!(is_actionable(&pass_slip(1, "pendingAdmin"), Role::Admin));
        assert!(!is_actionable(&pass_slip(1, "approved"), Role::Admin));
    }

    #[test]
    fn filter_matches_kind_status_and_search() {
        let records = mixed_records();
        let by_kind = RequestFilter {
            kind: Some(RequestKind::OfficialBusiness),
            ..Default::default()
        };
        assert_eq!(by_kind.apply(&records).len(), 2);

        let by_status = RequestFilter {
            status: Some(RequestStatus::PendingAdmin),
            ..Default::default()
        };
        assert_eq!(by_status.apply(&records).len(), 2);

        let by_name = RequestFilter {
            search: "  pedro ".into(),
            ..Default::default()
        };
        assert_eq!(by_name.apply(&records).len(), 2);

        let by_destination = RequestFilter {
            search: "lapasan".into(),
            kind: Some(RequestKind::TravelOrder),
            ..Default::default()
        };
        assert_eq!(by_destination.apply(&records).len(), 3);
    }

    #[test]
    fn filter_state_resets_page_on_change() {
        with_runtime(|| {
            let state = RequestFilterState::default();
            state.page_signal().set(3);
            state.set_search("bank".into());
            assert_eq!(state.page_signal().get(), 1);
            state.page_signal().set(2);
            state.set_kind(Some(RequestKind::PassSlip));
            assert_eq!(state.page_signal().get(), 1);
            assert_eq!(
                state.snapshot(),
                RequestFilter {
                    kind: Some(RequestKind::PassSlip),
                    status: None,
                    search: "bank".into(),
                }
            );
        });
    }
}
