use crate::api::HistoryLogEntry;
use crate::utils::time::format_timestamp;
use leptos::*;

pub const RECENT_HISTORY_LIMIT: usize = 5;

pub fn entry_summary(entry: &HistoryLogEntry) -> String {
    let actor = entry.user.as_deref().unwrap_or("System");
    match entry.description.as_deref().filter(|text| !text.trim().is_empty()) {
        Some(description) => format!("{} {}: {}", actor, entry.action, description),
        None => format!("{} {}", actor, entry.action),
    }
}

/// The latest few history entries, newest first.
#[component]
pub fn RecentHistory(#[prop(into)] entries: Signal<Vec<HistoryLogEntry>>) -> impl IntoView {
    view! {
        <div class="bg-surface-elevated shadow rounded-lg p-4 space-y-2">
            <h3 class="text-sm font-semibold text-fg">{"Recent activity"}</h3>
            <Show
                when=move || !entries.with(Vec::is_empty)
                fallback=|| view! { <p class="text-sm text-fg-muted">{"No activity yet."}</p> }
            >
                <ul class="divide-y divide-border">
                    {move || {
                        entries
                            .get()
                            .into_iter()
                            .take(RECENT_HISTORY_LIMIT)
                            .map(|entry| {
                                view! {
                                    <li class="py-2 text-sm">
                                        <p class="text-fg">{entry_summary(&entry)}</p>
                                        <p class="text-xs text-fg-muted">{format_timestamp(entry.created_at)}</p>
                                    </li>
                                }
                            })
                            .collect_view()
                    }}
                </ul>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn entry(user: Option<&str>, description: Option<&str>) -> HistoryLogEntry {
        HistoryLogEntry {
            id: 1,
            user: user.map(str::to_string),
            action: "approved".into(),
            description: description.map(str::to_string),
            created_at: Utc.with_ymd_and_hms(2025, 3, 2, 1, 0, 0).unwrap(),
        }
    }

    #[test]
    fn summary_names_actor_and_description() {
        assert_eq!(
            entry_summary(&entry(Some("admin"), Some("TO-1"))),
            "admin approved: TO-1"
        );
        assert_eq!(entry_summary(&entry(None, Some("  "))), "System approved");
    }
}
