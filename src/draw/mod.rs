//! Geometry engine: pill definitions, hit-testing and splitting.
//!
//! This module defines the core types manipulated on the surface:
//! - [`Color`]: RGBA color representation and the default palette
//! - [`Pill`]: rounded rectangle with an optional single rounded corner
//! - [`Frame`]: ordered container of committed pills with hit-testing
//! - [`split_at`]: partitions pills around a split point
//! - [`RenderModel`]: presentation snapshot consumed by frontends
//!
//! Everything here is pure: operations take pills in and hand pills back.

pub mod color;
pub mod frame;
pub mod render;
pub mod shape;
pub mod split;

// Re-export commonly used types at module level
pub use color::Color;
pub use frame::{Frame, hit_test};
pub use render::{Crosshair, Cursor, RenderModel, RenderPill};
pub use shape::{CornerMask, Pill, ShapeId};
pub use split::{IdAllocator, SplitSettings, split_at};
