//! Service layer: window extraction and calendar serialization.

pub mod calendar;
pub mod visibility;

pub use calendar::{render_calendar, write_calendar, CalendarEvent};
pub use visibility::{extract_windows, VisibilityError};
