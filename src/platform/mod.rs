// OrderSift - platform/mod.rs
//
// Platform abstraction layer: config directories, config.toml, and
// snapshot files on disk.
// Dependencies: core model types, util, directories crate.
// Must NOT depend on: app.

pub mod config;
pub mod fs;
