/*!
 * Process Registry
 * Tracks spawned worker processes for emergency teardown
 */

mod registry;
mod types;

pub use registry::ProcessRegistry;
pub use types::{RegistryError, RegistryResult};
