use serde::{Deserialize, Serialize};
use wildcal_domain::{Photographer, Submission, SubmissionStatus, ID};

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionDTO {
    pub id: ID,
    pub photographer_id: ID,
    pub image_original_url: String,
    pub image_web_url: String,
    pub caption: Option<String>,
    pub status: SubmissionStatus,
    pub created_at: i64,
    pub approved_at: Option<i64>,
}

impl SubmissionDTO {
    pub fn new(submission: Submission) -> Self {
        Self {
            id: submission.id,
            photographer_id: submission.photographer_id,
            image_original_url: submission.image_original_url,
            image_web_url: submission.image_web_url,
            caption: submission.caption,
            status: submission.status,
            created_at: submission.created_at,
            approved_at: submission.approved_at,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PhotographerDTO {
    pub id: ID,
    pub name: String,
    pub instagram_handle: Option<String>,
    pub email: String,
}

impl PhotographerDTO {
    pub fn new(photographer: Photographer) -> Self {
        Self {
            id: photographer.id,
            name: photographer.name,
            instagram_handle: photographer.instagram_handle,
            email: photographer.email,
        }
    }
}
