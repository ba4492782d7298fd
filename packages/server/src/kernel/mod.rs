//! Kernel module - server infrastructure and dependencies.

pub mod care_api;
pub mod deps;
pub mod test_dependencies;
pub mod traits;

pub use care_api::CareApiClient;
pub use deps::{ServerDeps, TwilioAdapter};
pub use test_dependencies::TestDependencies;
pub use traits::*;
