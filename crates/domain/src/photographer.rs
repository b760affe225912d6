use crate::shared::entity::{Entity, ID};
use serde::{Deserialize, Serialize};

/// A `Photographer` is created lazily on the first submission from a given
/// email address. Email is the natural key: a repeat submitter reuses their
/// existing record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Photographer {
    pub id: ID,
    pub name: String,
    pub instagram_handle: Option<String>,
    pub email: String,
}

impl Photographer {
    pub fn new(name: String, email: String, instagram_handle: Option<String>) -> Self {
        Self {
            id: Default::default(),
            name,
            instagram_handle,
            email,
        }
    }
}

impl Entity for Photographer {
    fn id(&self) -> ID {
        self.id.clone()
    }
}
