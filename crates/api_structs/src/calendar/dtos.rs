use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use wildcal_domain::{AssignmentView, CalendarEvent, EventType, ID};

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEventDTO {
    pub id: ID,
    pub date: NaiveDate,
    pub title: String,
    pub event_type: EventType,
    pub region: String,
    pub source: Option<String>,
    pub is_active: bool,
}

impl CalendarEventDTO {
    pub fn new(event: CalendarEvent) -> Self {
        Self {
            id: event.id,
            date: event.date,
            title: event.title,
            event_type: event.event_type,
            region: event.region,
            source: event.source,
            is_active: event.is_active,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentViewDTO {
    pub date: NaiveDate,
    pub submission_id: ID,
    pub image_url: String,
    pub caption: Option<String>,
    pub photographer_name: String,
    pub photographer_handle: Option<String>,
}

impl AssignmentViewDTO {
    pub fn new(view: AssignmentView) -> Self {
        Self {
            date: view.date,
            submission_id: view.submission_id,
            image_url: view.image_url,
            caption: view.caption,
            photographer_name: view.photographer_name,
            photographer_handle: view.photographer_handle,
        }
    }
}
