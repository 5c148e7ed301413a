// Library crate: exposes testable modules for integration tests and scripted drivers.
// GUI-specific modules (app, ui, viewport painting) remain in the binary crate.

pub mod command;
pub mod fixtures;
pub mod harness;
pub mod state;
