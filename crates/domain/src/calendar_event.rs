use crate::shared::entity::{Entity, ID};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

/// A fixed-date observance (public holiday or wildlife day) shown on the
/// calendar alongside the featured photo of the day. Events are curated by
/// seeding or by an admin and are never physically deleted, only
/// deactivated, so historical calendars stay stable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarEvent {
    pub id: ID,
    pub date: NaiveDate,
    pub title: String,
    pub event_type: EventType,
    pub region: String,
    pub source: Option<String>,
    pub is_active: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventType {
    Holiday,
    Wildlife,
    Variable,
}

impl Display for EventType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Holiday => "holiday",
            Self::Wildlife => "wildlife",
            Self::Variable => "variable",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for EventType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "holiday" => Ok(Self::Holiday),
            "wildlife" => Ok(Self::Wildlife),
            "variable" => Ok(Self::Variable),
            _ => Err(()),
        }
    }
}

impl CalendarEvent {
    pub fn new(date: NaiveDate, title: String, event_type: EventType) -> Self {
        Self {
            id: Default::default(),
            date,
            title,
            event_type,
            region: "Global".into(),
            source: None,
            is_active: true,
        }
    }
}

impl Entity for CalendarEvent {
    fn id(&self) -> ID {
        self.id.clone()
    }
}
