use crate::shared::entity::ID;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// An `Assignment` binds one calendar date to at most one approved
/// `Submission` to be featured that day. There is at most one row per date,
/// and `submission_id` stays `None` until a submission is pinned to the date.
///
/// The assignment holds a weak reference to its submission: the submission's
/// lifecycle is independent and the link is re-verified at resolution time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assignment {
    pub date: NaiveDate,
    pub submission_id: Option<ID>,
    pub pinned: bool,
    pub notes: Option<String>,
}

impl Assignment {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            submission_id: None,
            pinned: false,
            notes: None,
        }
    }
}

/// The denormalized product of resolving an `Assignment` through its
/// `Submission` to the owning `Photographer`. Only assignments whose
/// submission is approved resolve to a view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssignmentView {
    pub date: NaiveDate,
    pub submission_id: ID,
    pub image_url: String,
    pub caption: Option<String>,
    pub photographer_name: String,
    pub photographer_handle: Option<String>,
}
