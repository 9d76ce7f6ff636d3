use chrono::{Local, NaiveDate};

/// Today's date on the local clock. The calendar's "today" highlight and the
/// initial view month are derived from it.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}
