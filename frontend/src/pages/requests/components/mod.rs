pub mod detail_modal;
pub mod filter;
pub mod history;
pub mod list;
pub mod status_badge;
