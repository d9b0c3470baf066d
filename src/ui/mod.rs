// OrderSift - ui/mod.rs
//
// UI layer: plain-text presentation for the terminal.
// Dependencies: app (state), core (read-only models).
// Must NOT depend on: platform, direct I/O. Renderers return strings.

pub mod summary;
pub mod table;
