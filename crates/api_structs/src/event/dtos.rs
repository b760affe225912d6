// The calendar event DTO lives with the calendar query structs since the
// month and day responses embed it.
pub use crate::calendar::dtos::CalendarEventDTO;
