use super::ISubmissionRepo;
use crate::repos::shared::inmemory_repo::*;
use wildcal_domain::{Submission, SubmissionStatus, ID};

pub struct InMemorySubmissionRepo {
    submissions: std::sync::Mutex<Vec<Submission>>,
}

impl InMemorySubmissionRepo {
    pub fn new() -> Self {
        Self {
            submissions: std::sync::Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl ISubmissionRepo for InMemorySubmissionRepo {
    async fn insert(&self, submission: &Submission) -> anyhow::Result<()> {
        insert(submission, &self.submissions);
        Ok(())
    }

    async fn save(&self, submission: &Submission) -> anyhow::Result<()> {
        save(submission, &self.submissions);
        Ok(())
    }

    async fn find(&self, submission_id: &ID) -> Option<Submission> {
        find(submission_id, &self.submissions)
    }

    async fn find_by_status(&self, status: SubmissionStatus) -> anyhow::Result<Vec<Submission>> {
        let res = find_by(&self.submissions, |submission| submission.status == status);
        Ok(res)
    }
}
