use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use wildcal_domain::{Assignment, ID};

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentDTO {
    pub date: NaiveDate,
    pub submission_id: Option<ID>,
    pub pinned: bool,
    pub notes: Option<String>,
}

impl AssignmentDTO {
    pub fn new(assignment: Assignment) -> Self {
        Self {
            date: assignment.date,
            submission_id: assignment.submission_id,
            pinned: assignment.pinned,
            notes: assignment.notes,
        }
    }
}
