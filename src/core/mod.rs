// OrderSift - core/mod.rs
//
// Core business logic layer.
// Must NOT depend on: app, platform, or any filesystem access.

pub mod export;
pub mod filter;
pub mod format;
pub mod input;
pub mod model;
pub mod summary;
