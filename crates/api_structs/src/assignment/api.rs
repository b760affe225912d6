use crate::dtos::AssignmentDTO;
use serde::{Deserialize, Serialize};
use wildcal_domain::{Assignment, ID};

pub mod set_assignment {
    use super::*;

    #[derive(Debug, Deserialize)]
    pub struct PathParams {
        pub date: String,
    }

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        /// `None` clears the featured photo for the date
        pub submission_id: Option<ID>,
        pub pinned: Option<bool>,
        pub notes: Option<String>,
    }

    #[derive(Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub assignment: AssignmentDTO,
    }

    impl APIResponse {
        pub fn new(assignment: Assignment) -> Self {
            Self {
                assignment: AssignmentDTO::new(assignment),
            }
        }
    }
}
