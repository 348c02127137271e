//! Input handling and gesture state machine.
//!
//! This module translates frontend pointer events into pill operations. It
//! owns the committed pill collection and the transient gesture state, and
//! decides whether a press means draw, drag or split.

pub mod events;
pub mod palette;
pub mod state;

// Re-export commonly used types at module level
pub use events::{MouseButton, PointerEvent, PointerEventKind};
pub use palette::ColorPicker;
pub use state::{DrawingState, GestureSettings, InputSettings, InputState};
