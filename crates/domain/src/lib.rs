mod assignment;
mod calendar_event;
pub mod date;
mod notification;
mod photographer;
mod shared;
mod submission;

pub use assignment::{Assignment, AssignmentView};
pub use calendar_event::{CalendarEvent, EventType};
pub use notification::{NotificationChannel, NotificationLogEntry, NotificationStatus};
pub use photographer::Photographer;
pub use shared::entity::{Entity, InvalidIDError, ID};
pub use submission::{StatusTransitionError, Submission, SubmissionStatus};
