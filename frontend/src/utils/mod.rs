pub mod cookies;
pub mod download;
pub mod file;
pub mod time;
