//! WebAssembly bindings for the lib6809 emulator.
//!
//! This module provides JavaScript-callable interfaces to the 6809 CPU
//! emulator, for running and inspecting 6809 programs in the browser.

#[cfg(feature = "wasm")]
pub mod api;

#[cfg(feature = "wasm")]
pub use api::Emulator6809;
