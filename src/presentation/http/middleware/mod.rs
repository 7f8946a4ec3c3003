// src/presentation/http/middleware/mod.rs
pub mod admin_gate;
pub mod rate_limit;

pub use admin_gate::require_admin;
pub use rate_limit::rate_limit_layer;
