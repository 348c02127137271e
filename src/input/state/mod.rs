mod core;
mod mouse;
mod render;

pub use self::core::{
    DEFAULT_CLICK_DISTANCE, DEFAULT_CLICK_TIME, DEFAULT_CORNER_RADIUS, DEFAULT_DRAFT_OPACITY,
    DEFAULT_DRAG_THRESHOLD, DEFAULT_MIN_SHAPE_SIZE, DrawingState, GestureSettings, InputSettings,
    InputState, PressRecord,
};
