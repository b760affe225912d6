use crate::dtos::SubmissionDTO;
use serde::{Deserialize, Serialize};
use wildcal_domain::{Submission, SubmissionStatus, ID};

#[derive(Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionResponse {
    pub submission: SubmissionDTO,
}

impl SubmissionResponse {
    pub fn new(submission: Submission) -> Self {
        Self {
            submission: SubmissionDTO::new(submission),
        }
    }
}

pub mod create_submission {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub name: String,
        pub email: String,
        pub instagram_handle: Option<String>,
        pub image_original_url: String,
        pub image_web_url: String,
        pub caption: Option<String>,
    }

    pub type APIResponse = SubmissionResponse;
}

pub mod get_submissions {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct QueryParams {
        pub status: Option<SubmissionStatus>,
    }

    #[derive(Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub submissions: Vec<SubmissionDTO>,
    }

    impl APIResponse {
        pub fn new(submissions: Vec<Submission>) -> Self {
            Self {
                submissions: submissions.into_iter().map(SubmissionDTO::new).collect(),
            }
        }
    }
}

pub mod update_submission_status {
    use super::*;

    #[derive(Debug, Deserialize)]
    pub struct PathParams {
        pub submission_id: ID,
    }

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub status: SubmissionStatus,
    }

    pub type APIResponse = SubmissionResponse;
}
