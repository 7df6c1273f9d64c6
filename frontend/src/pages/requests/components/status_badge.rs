use crate::api::RequestStatus;
use leptos::*;

pub fn status_badge_class(status: Option<RequestStatus>) -> &'static str {
    match status {
        Some(RequestStatus::Pending) => "bg-status-warning-bg text-status-warning-text",
        Some(RequestStatus::PendingAdmin) => "bg-status-info-bg text-status-info-text",
        Some(RequestStatus::Approved) => "bg-status-success-bg text-status-success-text",
        Some(RequestStatus::Declined) => "bg-status-error-bg text-status-error-text",
        None => "bg-surface-muted text-fg-muted",
    }
}

pub fn status_text(status: Option<RequestStatus>) -> &'static str {
    status.map(|status| status.label()).unwrap_or("Unknown")
}

#[component]
pub fn StatusBadge(status: Option<RequestStatus>) -> impl IntoView {
    view! {
        <span class=format!(
            "inline-flex items-center rounded-full px-2.5 py-0.5 text-xs font-medium {}",
            status_badge_class(status)
        )>
            {status_text(status)}
        </span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_every_known_status() {
        assert_eq!(status_text(Some(RequestStatus::Pending)), "Pending");
        assert_eq!(
            status_text(Some(RequestStatus::PendingAdmin)),
            "For Admin Approval"
        );
        assert_eq!(status_text(None), "Unknown");
    }

    #[test]
    fn final_states_use_distinct_colors() {
        assert_ne!(
            status_badge_class(Some(RequestStatus::Approved)),
            status_badge_class(Some(RequestStatus::Declined))
        );
    }
}
