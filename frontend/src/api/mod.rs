mod auth;
pub mod client;
mod directory;
pub mod records;
mod requests;
pub mod types;

pub use client::*;
pub use records::*;
pub use types::*;

#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod test_support;
