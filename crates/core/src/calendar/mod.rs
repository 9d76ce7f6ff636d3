//! Calendar module - month grids and month navigation.

mod calendar_builder;
mod calendar_model;

pub use calendar_builder::build_month;
pub use calendar_model::{CalendarDay, CalendarMonth, YearMonth};
