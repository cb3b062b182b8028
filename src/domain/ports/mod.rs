//! Port definitions for external collaborators.

mod auth_port;
mod generation_port;
mod key_value_port;
mod usage_port;

pub use auth_port::AuthPort;
pub use generation_port::GenerationPort;
pub use key_value_port::KeyValueStore;
pub use usage_port::UsagePort;

#[cfg(test)]
pub mod mocks {
    pub use super::auth_port::mock::MockAuthPort;
    pub use super::generation_port::MockGenerationPort;
    pub use super::key_value_port::mock::DeniedKeyValueStore;
    pub use super::usage_port::mock::MockUsagePort;
}
