//! Reusable reactive hooks

mod cursor;

pub use cursor::{
    use_cursor_tracker, CursorTracker, DocumentStyle, StyleSink, CURSOR_X_PROPERTY,
    CURSOR_Y_PROPERTY,
};
