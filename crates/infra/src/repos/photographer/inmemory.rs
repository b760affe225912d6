use super::IPhotographerRepo;
use crate::repos::shared::inmemory_repo::*;
use wildcal_domain::{Photographer, ID};

pub struct InMemoryPhotographerRepo {
    photographers: std::sync::Mutex<Vec<Photographer>>,
}

impl InMemoryPhotographerRepo {
    pub fn new() -> Self {
        Self {
            photographers: std::sync::Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl IPhotographerRepo for InMemoryPhotographerRepo {
    async fn insert(&self, photographer: &Photographer) -> anyhow::Result<()> {
        insert(photographer, &self.photographers);
        Ok(())
    }

    async fn find(&self, photographer_id: &ID) -> Option<Photographer> {
        find(photographer_id, &self.photographers)
    }

    async fn find_by_email(&self, email: &str) -> Option<Photographer> {
        find_by(&self.photographers, |photographer| {
            photographer.email == email
        })
        .into_iter()
        .next()
    }
}
