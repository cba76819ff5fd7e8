//! Platform.sh project API: integration registration and project variables.

mod client;
pub mod types;

pub use client::PlatformClient;
pub use types::{IntegrationPayload, VariablePayload, variable_payloads};
