// Store exports
pub mod profiles;
pub mod seed;

pub use profiles::ProfileStore;
pub use seed::demo_profiles;
