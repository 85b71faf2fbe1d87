pub mod context_free;
pub mod epsilon_free;
pub mod loader;
pub mod nullable;
pub mod types;
