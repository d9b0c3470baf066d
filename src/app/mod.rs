// OrderSift - app/mod.rs
//
// Application layer: view state over a loaded snapshot.
// Dependencies: core layer.
// Must NOT depend on: platform specifics.

pub mod state;
