//! Authentication module for the setup tool
//!
//! Exchanges a long-lived Platform.sh API token for a short-lived bearer
//! access token used by every project API call.

mod client;
mod exchange;

pub use client::TokenExchanger;
pub use exchange::{GRANT_TYPE_API_TOKEN, bearer_header};
