pub mod admin_directory;
pub mod admin_users;
pub mod dashboard;
pub mod gate;
pub mod history;
pub mod home;
pub mod login;
pub mod requests;
