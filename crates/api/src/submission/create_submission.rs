use crate::error::WildcalError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use wildcal_api_structs::create_submission::*;
use wildcal_domain::{Photographer, Submission};
use wildcal_infra::WildcalContext;

fn handle_error(e: UseCaseErrors) -> WildcalError {
    match e {
        UseCaseErrors::StorageError => WildcalError::InternalError,
    }
}

pub async fn create_submission_controller(
    body: web::Json<RequestBody>,
    ctx: web::Data<WildcalContext>,
) -> Result<HttpResponse, WildcalError> {
    let body = body.into_inner();
    let usecase = CreateSubmissionUseCase {
        name: body.name,
        email: body.email,
        instagram_handle: body.instagram_handle,
        image_original_url: body.image_original_url,
        image_web_url: body.image_web_url,
        caption: body.caption,
    };

    execute(usecase, &ctx)
        .await
        .map(|submission| HttpResponse::Created().json(APIResponse::new(submission)))
        .map_err(handle_error)
}

#[derive(Debug)]
pub struct CreateSubmissionUseCase {
    pub name: String,
    pub email: String,
    pub instagram_handle: Option<String>,
    pub image_original_url: String,
    pub image_web_url: String,
    pub caption: Option<String>,
}

#[derive(Debug)]
pub enum UseCaseErrors {
    StorageError,
}

#[async_trait::async_trait(?Send)]
impl UseCase for CreateSubmissionUseCase {
    type Response = Submission;

    type Errors = UseCaseErrors;

    async fn execute(&mut self, ctx: &WildcalContext) -> Result<Self::Response, Self::Errors> {
        // Email is the natural key: a repeat submitter reuses their
        // existing photographer record
        let photographer = match ctx.repos.photographers.find_by_email(&self.email).await {
            Some(photographer) => photographer,
            None => {
                let photographer = Photographer::new(
                    self.name.clone(),
                    self.email.clone(),
                    self.instagram_handle.clone(),
                );
                ctx.repos
                    .photographers
                    .insert(&photographer)
                    .await
                    .map_err(|_| UseCaseErrors::StorageError)?;
                photographer
            }
        };

        let submission = Submission::new(
            photographer.id.clone(),
            self.image_original_url.clone(),
            self.image_web_url.clone(),
            self.caption.clone(),
            ctx.sys.get_timestamp_millis(),
        );
        ctx.repos
            .submissions
            .insert(&submission)
            .await
            .map_err(|_| UseCaseErrors::StorageError)?;

        Ok(submission)
    }
}
