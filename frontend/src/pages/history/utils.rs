use crate::api::HistoryLogEntry;

/// Case-insensitive match against the actor, action and description.
pub fn matches_query(entry: &HistoryLogEntry, query: &str) -> bool {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    [
        entry.user.as_deref(),
        Some(entry.action.as_str()),
        entry.description.as_deref(),
    ]
    .into_iter()
    .flatten()
    .any(|field| field.to_lowercase().contains(&needle))
}

pub fn filter_entries(entries: &[HistoryLogEntry], query: &str) -> Vec<HistoryLogEntry> {
    entries
        .iter()
        .filter(|entry| matches_query(entry, query))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn entry(id: i64, user: &str, action: &str, description: Option<&str>) -> HistoryLogEntry {
        HistoryLogEntry {
            id,
            user: Some(user.into()),
            action: action.into(),
            description: description.map(str::to_string),
            created_at: Utc.with_ymd_and_hms(2025, 3, 1, 0, 0, 0).unwrap(),
        }
    }

    #[test]
    fn query_matches_any_text_field() {
        let entries = vec![
            entry(1, "admin", "approved", Some("Travel order TO-1")),
            entry(2, "eva", "declined", Some("Pass slip PS-2")),
            entry(3, "admin", "created user", None),
        ];
        let ids = |query| -> Vec<i64> {
            filter_entries(&entries, query).iter().map(|e| e.id).collect()
        };
        assert_eq!(ids("  "), vec![1, 2, 3]);
        assert_eq!(ids("ADMIN"), vec![1, 3]);
        assert_eq!(ids("ps-2"), vec![2]);
        assert!(ids("nothing").is_empty());
    }
}
