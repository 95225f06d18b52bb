//! Utility modules for browser-side concerns.
//!
//! Provides:
//! - [`log`] - Browser console logging (no-op off `wasm32`)

pub mod log;
