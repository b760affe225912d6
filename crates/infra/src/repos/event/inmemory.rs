use super::IEventRepo;
use crate::repos::shared::inmemory_repo::*;
use chrono::NaiveDate;
use wildcal_domain::{CalendarEvent, ID};

pub struct InMemoryEventRepo {
    events: std::sync::Mutex<Vec<CalendarEvent>>,
}

impl InMemoryEventRepo {
    pub fn new() -> Self {
        Self {
            events: std::sync::Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl IEventRepo for InMemoryEventRepo {
    async fn insert(&self, event: &CalendarEvent) -> anyhow::Result<()> {
        insert(event, &self.events);
        Ok(())
    }

    async fn save(&self, event: &CalendarEvent) -> anyhow::Result<()> {
        save(event, &self.events);
        Ok(())
    }

    async fn find(&self, event_id: &ID) -> Option<CalendarEvent> {
        find(event_id, &self.events)
    }

    async fn find_active_in_range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> anyhow::Result<Vec<CalendarEvent>> {
        let res = find_by(&self.events, |event| {
            event.is_active && event.date >= start && event.date <= end
        });
        Ok(res)
    }
}
