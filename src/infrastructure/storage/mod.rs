// src/infrastructure/storage/mod.rs
pub mod local;

pub use local::LocalImageStore;
