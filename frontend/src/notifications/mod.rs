//! Pending-count badge and status broadcasts over the push channel.

pub mod badge;
mod listener;
pub mod protocol;
mod state;

pub use badge::{badge_label, derive_notifications, NotificationItem, PendingCounts};
pub use listener::NotificationListener;
pub use state::{provide_notifications, use_notifications, NotificationState};
