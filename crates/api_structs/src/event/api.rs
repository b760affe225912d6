use crate::dtos::CalendarEventDTO;
use serde::{Deserialize, Serialize};
use wildcal_domain::{CalendarEvent, EventType, ID};

#[derive(Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEventResponse {
    pub event: CalendarEventDTO,
}

impl CalendarEventResponse {
    pub fn new(event: CalendarEvent) -> Self {
        Self {
            event: CalendarEventDTO::new(event),
        }
    }
}

pub mod create_event {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub date: String,
        pub title: String,
        pub event_type: EventType,
        pub region: Option<String>,
        pub source: Option<String>,
    }

    pub type APIResponse = CalendarEventResponse;
}

pub mod set_event_active {
    use super::*;

    #[derive(Debug, Deserialize)]
    pub struct PathParams {
        pub event_id: ID,
    }

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub active: bool,
    }

    pub type APIResponse = CalendarEventResponse;
}
