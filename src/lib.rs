//! Library exports for the pill splitter.
//!
//! Exposes the geometry engine (`draw`), the gesture state machine (`input`)
//! and the configuration types so frontends and tools can share them with the
//! command-line replayer.

pub mod config;
pub mod draw;
pub mod input;
pub mod replay;
pub mod util;

pub use config::Config;
