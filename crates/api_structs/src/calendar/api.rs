use crate::dtos::{AssignmentViewDTO, CalendarEventDTO};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use wildcal_domain::{AssignmentView, CalendarEvent};

pub mod get_month {
    use super::*;

    #[derive(Debug, Deserialize)]
    pub struct PathParams {
        pub year: i32,
        pub month: u32,
    }

    #[derive(Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub year: i32,
        pub month: u32,
        pub events: Vec<CalendarEventDTO>,
        pub assignments: Vec<AssignmentViewDTO>,
    }

    impl APIResponse {
        pub fn new(
            year: i32,
            month: u32,
            events: Vec<CalendarEvent>,
            assignments: Vec<AssignmentView>,
        ) -> Self {
            Self {
                year,
                month,
                events: events.into_iter().map(CalendarEventDTO::new).collect(),
                assignments: assignments
                    .into_iter()
                    .map(AssignmentViewDTO::new)
                    .collect(),
            }
        }
    }
}

pub mod get_day {
    use super::*;

    #[derive(Debug, Deserialize)]
    pub struct PathParams {
        pub date: String,
    }

    #[derive(Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub date: NaiveDate,
        pub events: Vec<CalendarEventDTO>,
        pub assignment: Option<AssignmentViewDTO>,
    }

    impl APIResponse {
        pub fn new(
            date: NaiveDate,
            events: Vec<CalendarEvent>,
            assignment: Option<AssignmentView>,
        ) -> Self {
            Self {
                date,
                events: events.into_iter().map(CalendarEventDTO::new).collect(),
                assignment: assignment.map(AssignmentViewDTO::new),
            }
        }
    }
}
