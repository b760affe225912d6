use super::IAssignmentRepo;
use crate::repos::shared::inmemory_repo::find_by;
use chrono::NaiveDate;
use wildcal_domain::Assignment;

pub struct InMemoryAssignmentRepo {
    assignments: std::sync::Mutex<Vec<Assignment>>,
}

impl InMemoryAssignmentRepo {
    pub fn new() -> Self {
        Self {
            assignments: std::sync::Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl IAssignmentRepo for InMemoryAssignmentRepo {
    async fn upsert(&self, assignment: &Assignment) -> anyhow::Result<()> {
        let mut assignments = self.assignments.lock().unwrap();
        match assignments.iter_mut().find(|a| a.date == assignment.date) {
            Some(existing) => *existing = assignment.clone(),
            None => assignments.push(assignment.clone()),
        }
        Ok(())
    }

    async fn find_by_date(&self, date: NaiveDate) -> Option<Assignment> {
        find_by(&self.assignments, |assignment| assignment.date == date)
            .into_iter()
            .next()
    }

    async fn find_in_range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> anyhow::Result<Vec<Assignment>> {
        let res = find_by(&self.assignments, |assignment| {
            assignment.date >= start && assignment.date <= end
        });
        Ok(res)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use wildcal_domain::ID;

    #[tokio::test]
    async fn upsert_keeps_one_row_per_date() {
        let repo = InMemoryAssignmentRepo::new();
        let date = NaiveDate::from_ymd_opt(2026, 1, 26).unwrap();

        let mut assignment = Assignment::new(date);
        repo.upsert(&assignment).await.unwrap();

        assignment.submission_id = Some(ID::new());
        assignment.pinned = true;
        repo.upsert(&assignment).await.unwrap();

        let found = repo.find_in_range(date, date).await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0], assignment);
        assert_eq!(repo.find_by_date(date).await, Some(assignment));
    }
}
