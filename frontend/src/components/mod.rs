pub mod empty_state;
pub mod error;
pub mod guard;
pub mod layout;
pub mod pagination;
pub mod soft_delete_dialog;
pub mod toast;
