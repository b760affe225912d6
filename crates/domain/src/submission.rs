use crate::shared::entity::{Entity, ID};
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;
use thiserror::Error;

/// A photographer's candidate photo awaiting or having received moderation.
/// A `Submission` only ever moves from `Pending` to `Approved` or `Rejected`,
/// never back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Submission {
    pub id: ID,
    pub photographer_id: ID,
    pub image_original_url: String,
    pub image_web_url: String,
    pub caption: Option<String>,
    pub status: SubmissionStatus,
    /// Unix timestamp in millis
    pub created_at: i64,
    /// Unix timestamp in millis, set exactly when the status becomes `Approved`
    pub approved_at: Option<i64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionStatus {
    Pending,
    Approved,
    Rejected,
}

impl Display for SubmissionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for SubmissionStatus {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "approved" => Ok(Self::Approved),
            "rejected" => Ok(Self::Rejected),
            _ => Err(()),
        }
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum StatusTransitionError {
    #[error("Submission has already been moderated and is {0}")]
    AlreadyModerated(SubmissionStatus),
}

impl Submission {
    pub fn new(
        photographer_id: ID,
        image_original_url: String,
        image_web_url: String,
        caption: Option<String>,
        now: i64,
    ) -> Self {
        Self {
            id: Default::default(),
            photographer_id,
            image_original_url,
            image_web_url,
            caption,
            status: SubmissionStatus::Pending,
            created_at: now,
            approved_at: None,
        }
    }

    pub fn approve(&mut self, now: i64) -> Result<(), StatusTransitionError> {
        match self.status {
            SubmissionStatus::Pending => {
                self.status = SubmissionStatus::Approved;
                self.approved_at = Some(now);
                Ok(())
            }
            status => Err(StatusTransitionError::AlreadyModerated(status)),
        }
    }

    pub fn reject(&mut self) -> Result<(), StatusTransitionError> {
        match self.status {
            SubmissionStatus::Pending => {
                self.status = SubmissionStatus::Rejected;
                Ok(())
            }
            status => Err(StatusTransitionError::AlreadyModerated(status)),
        }
    }
}

impl Entity for Submission {
    fn id(&self) -> ID {
        self.id.clone()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn pending_submission() -> Submission {
        Submission::new(
            Default::default(),
            "/uploads/original.jpg".into(),
            "/uploads/web.jpg".into(),
            None,
            100,
        )
    }

    #[test]
    fn it_approves_pending_submission() {
        let mut submission = pending_submission();
        assert!(submission.approve(200).is_ok());
        assert_eq!(submission.status, SubmissionStatus::Approved);
        assert_eq!(submission.approved_at, Some(200));
    }

    #[test]
    fn it_rejects_pending_submission() {
        let mut submission = pending_submission();
        assert!(submission.reject().is_ok());
        assert_eq!(submission.status, SubmissionStatus::Rejected);
        assert_eq!(submission.approved_at, None);
    }

    #[test]
    fn it_does_not_revert_moderated_submission() {
        let mut submission = pending_submission();
        submission.approve(200).unwrap();
        assert_eq!(
            submission.reject(),
            Err(StatusTransitionError::AlreadyModerated(
                SubmissionStatus::Approved
            ))
        );

        let mut submission = pending_submission();
        submission.reject().unwrap();
        assert_eq!(
            submission.approve(300),
            Err(StatusTransitionError::AlreadyModerated(
                SubmissionStatus::Rejected
            ))
        );
        assert_eq!(submission.approved_at, None);
    }
}
