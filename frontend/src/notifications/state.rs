use leptos::*;

use super::badge::{badge_label, derive_notifications, NotificationItem, PendingCounts};
use super::protocol::{
    pong_frame, subscribe_frame, PushFrame, CHANNELS, PENDING_CHANNEL, PENDING_EVENT,
    STATUS_CHANNEL, STATUS_EVENT,
};

/// Badge counts and status-change ticks fed by the push channel.
#[derive(Clone, Copy)]
pub struct NotificationState {
    counts: RwSignal<PendingCounts>,
    status_version: RwSignal<u32>,
    connected: RwSignal<bool>,
}

impl NotificationState {
    pub fn new() -> Self {
        Self {
            counts: create_rw_signal(PendingCounts::default()),
            status_version: create_rw_signal(0),
            connected: create_rw_signal(false),
        }
    }

    pub fn counts(&self) -> Signal<PendingCounts> {
        self.counts.into()
    }

    /// Bumped on every travel-order status broadcast; views refetch when it changes.
    pub fn status_version(&self) -> Signal<u32> {
        self.status_version.into()
    }

    pub fn connected(&self) -> Signal<bool> {
        self.connected.into()
    }

    pub fn badge(&self) -> Signal<Option<String>> {
        let counts = self.counts;
        Signal::derive(move || badge_label(counts.with(PendingCounts::total)))
    }

    pub fn items(&self) -> Signal<Vec<NotificationItem>> {
        let counts = self.counts;
        Signal::derive(move || counts.with(derive_notifications))
    }

    /// Replaces the counts wholesale.
    pub fn replace_counts(&self, counts: PendingCounts) {
        self.counts.set(counts);
    }

    pub fn set_disconnected(&self) {
        self.connected.set(false);
    }

    /// Applies one inbound frame and returns the frames to send back.
    pub fn apply_frame(&self, frame: &PushFrame) -> Vec<String> {
        match frame {
            PushFrame::ConnectionEstablished { socket_id } => {
                log::info!("push channel connected (socket {})", socket_id);
                self.connected.set(true);
                CHANNELS.iter().map(|channel| subscribe_frame(channel)).collect()
            }
            PushFrame::SubscriptionSucceeded { channel } => {
                log::debug!("subscribed to {}", channel);
                Vec::new()
            }
            PushFrame::Ping => vec![pong_frame()],
            PushFrame::Error { message } => {
                log::warn!("push channel error: {}", message);
                Vec::new()
            }
            PushFrame::Event {
                channel,
                event,
                data,
            } => {
                if channel == PENDING_CHANNEL && event == PENDING_EVENT {
                    match PendingCounts::from_event(data) {
                        Ok(counts) => self.replace_counts(counts),
                        Err(err) => log::warn!("ignoring malformed pending counts: {}", err),
                    }
                } else if channel == STATUS_CHANNEL && event == STATUS_EVENT {
                    self.status_version
                        .update(|version| *version = version.wrapping_add(1));
                }
                Vec::new()
            }
        }
    }
}

impl Default for NotificationState {
    fn default() -> Self {
        Self::new()
    }
}

pub fn provide_notifications() -> NotificationState {
    let state = NotificationState::new();
    provide_context(state);
    state
}

pub fn use_notifications() -> NotificationState {
    match use_context::<NotificationState>() {
        Some(state) => state,
        None => provide_notifications(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notifications::protocol::parse_frame;
    use crate::test_support::ssr::with_runtime;
    use serde_json::json;

    fn event(channel: &str, event: &str, data: serde_json::Value) -> PushFrame {
        PushFrame::Event {
            channel: channel.into(),
            event: event.into(),
            data,
        }
    }

    #[test]
    fn connection_established_subscribes_to_both_channels() {
        with_runtime(|| {
            let state = NotificationState::new();
            let replies = state.apply_frame(&PushFrame::ConnectionEstablished {
                socket_id: "1.2".into(),
            });
            assert_eq!(replies.len(), 2);
            assert!(replies[0].contains(PENDING_CHANNEL));
            assert!(replies[1].contains(STATUS_CHANNEL));
            assert!(state.connected().get());
        });
    }

    #[test]
    fn pending_event_replaces_counts_wholesale() {
        with_runtime(|| {
            let state = NotificationState::new();
            state.apply_frame(&event(
                PENDING_CHANNEL,
                PENDING_EVENT,
                json!({ "official_business": 4, "travel_orders": 8, "pass_slips": 1 }),
            ));
            assert_eq!(state.badge().get().as_deref(), Some("9+"));
            assert_eq!(state.items().get().len(), 3);

            state.apply_frame(&event(
                PENDING_CHANNEL,
                PENDING_EVENT,
                json!({ "pass_slips": 2 }),
            ));
            let counts = state.counts().get();
            assert_eq!(counts.official_business, 0);
            assert_eq!(counts.travel_orders, 0);
            assert_eq!(state.badge().get().as_deref(), Some("2"));
        });
    }

    #[test]
    fn malformed_counts_keep_previous_state() {
        with_runtime(|| {
            let state = NotificationState::new();
            state.replace_counts(PendingCounts {
                official_business: 1,
                travel_orders: 0,
                pass_slips: 0,
            });
            state.apply_frame(&event(
                PENDING_CHANNEL,
                PENDING_EVENT,
                json!({ "official_business": "many" }),
            ));
            assert_eq!(state.counts().get().official_business, 1);
        });
    }

    #[test]
    fn status_event_bumps_version_and_ping_gets_pong() {
        with_runtime(|| {
            let state = NotificationState::new();
            state.apply_frame(&event(STATUS_CHANNEL, STATUS_EVENT, json!({ "id": 3 })));
            assert_eq!(state.status_version().get(), 1);
            state.apply_frame(&event("other", STATUS_EVENT, json!({})));
            assert_eq!(state.status_version().get(), 1);

            let ping = parse_frame(r#"{"event":"pusher:ping","data":{}}"#).unwrap();
            let replies = state.apply_frame(&ping);
            assert_eq!(replies.len(), 1);
            assert!(replies[0].contains("pusher:pong"));
        });
    }
}
