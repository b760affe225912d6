use crate::error::WildcalError;
use crate::shared::auth::protect_admin_route;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpRequest, HttpResponse};
use wildcal_api_structs::update_submission_status::*;
use wildcal_domain::{StatusTransitionError, Submission, SubmissionStatus, ID};
use wildcal_infra::WildcalContext;

fn handle_error(e: UseCaseErrors) -> WildcalError {
    match e {
        UseCaseErrors::NotFound(submission_id) => WildcalError::NotFound(format!(
            "The submission with id: {} was not found",
            submission_id
        )),
        UseCaseErrors::InvalidStatus => WildcalError::BadClientData(
            "Submissions can only be moved to the approved or rejected status".into(),
        ),
        UseCaseErrors::AlreadyModerated(status) => WildcalError::Conflict(format!(
            "The submission has already been moderated and is {}",
            status
        )),
        UseCaseErrors::StorageError => WildcalError::InternalError,
    }
}

pub async fn update_submission_status_admin_controller(
    http_req: HttpRequest,
    path_params: web::Path<PathParams>,
    body: web::Json<RequestBody>,
    ctx: web::Data<WildcalContext>,
) -> Result<HttpResponse, WildcalError> {
    protect_admin_route(&http_req, &ctx)?;

    let usecase = UpdateSubmissionStatusUseCase {
        submission_id: path_params.submission_id.clone(),
        status: body.status,
    };

    execute(usecase, &ctx)
        .await
        .map(|submission| HttpResponse::Ok().json(APIResponse::new(submission)))
        .map_err(handle_error)
}

#[derive(Debug)]
pub struct UpdateSubmissionStatusUseCase {
    pub submission_id: ID,
    pub status: SubmissionStatus,
}

#[derive(Debug)]
pub enum UseCaseErrors {
    NotFound(ID),
    InvalidStatus,
    AlreadyModerated(SubmissionStatus),
    StorageError,
}

#[async_trait::async_trait(?Send)]
impl UseCase for UpdateSubmissionStatusUseCase {
    type Response = Submission;

    type Errors = UseCaseErrors;

    async fn execute(&mut self, ctx: &WildcalContext) -> Result<Self::Response, Self::Errors> {
        let mut submission = ctx
            .repos
            .submissions
            .find(&self.submission_id)
            .await
            .ok_or_else(|| UseCaseErrors::NotFound(self.submission_id.clone()))?;

        let res = match self.status {
            SubmissionStatus::Approved => submission.approve(ctx.sys.get_timestamp_millis()),
            SubmissionStatus::Rejected => submission.reject(),
            // A moderated submission never goes back to the queue
            SubmissionStatus::Pending => return Err(UseCaseErrors::InvalidStatus),
        };
        res.map_err(|e| match e {
            StatusTransitionError::AlreadyModerated(status) => {
                UseCaseErrors::AlreadyModerated(status)
            }
        })?;

        ctx.repos
            .submissions
            .save(&submission)
            .await
            .map_err(|_| UseCaseErrors::StorageError)?;

        Ok(submission)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use wildcal_domain::Photographer;

    async fn seed_submission(ctx: &WildcalContext) -> Submission {
        let photographer = Photographer::new("Jane".into(), "jane@example.com".into(), None);
        ctx.repos.photographers.insert(&photographer).await.unwrap();

        let submission = Submission::new(
            photographer.id.clone(),
            "/uploads/original.jpg".into(),
            "/uploads/web.jpg".into(),
            None,
            0,
        );
        ctx.repos.submissions.insert(&submission).await.unwrap();
        submission
    }

    #[actix_web::main]
    #[test]
    async fn it_approves_a_pending_submission() {
        let ctx = WildcalContext::create_inmemory();
        let submission = seed_submission(&ctx).await;

        let mut usecase = UpdateSubmissionStatusUseCase {
            submission_id: submission.id.clone(),
            status: SubmissionStatus::Approved,
        };
        let res = usecase.execute(&ctx).await.unwrap();
        assert_eq!(res.status, SubmissionStatus::Approved);
        assert!(res.approved_at.is_some());

        let stored = ctx.repos.submissions.find(&submission.id).await.unwrap();
        assert_eq!(stored.status, SubmissionStatus::Approved);
    }

    #[actix_web::main]
    #[test]
    async fn it_rejects_a_pending_submission() {
        let ctx = WildcalContext::create_inmemory();
        let submission = seed_submission(&ctx).await;

        let mut usecase = UpdateSubmissionStatusUseCase {
            submission_id: submission.id.clone(),
            status: SubmissionStatus::Rejected,
        };
        let res = usecase.execute(&ctx).await.unwrap();
        assert_eq!(res.status, SubmissionStatus::Rejected);
        assert_eq!(res.approved_at, None);
    }

    #[actix_web::main]
    #[test]
    async fn it_refuses_to_remoderate_a_moderated_submission() {
        let ctx = WildcalContext::create_inmemory();
        let submission = seed_submission(&ctx).await;

        let mut usecase = UpdateSubmissionStatusUseCase {
            submission_id: submission.id.clone(),
            status: SubmissionStatus::Approved,
        };
        usecase.execute(&ctx).await.unwrap();

        let mut usecase = UpdateSubmissionStatusUseCase {
            submission_id: submission.id.clone(),
            status: SubmissionStatus::Rejected,
        };
        assert!(matches!(
            usecase.execute(&ctx).await,
            Err(UseCaseErrors::AlreadyModerated(SubmissionStatus::Approved))
        ));
    }

    #[actix_web::main]
    #[test]
    async fn it_refuses_to_move_a_submission_back_to_pending() {
        let ctx = WildcalContext::create_inmemory();
        let submission = seed_submission(&ctx).await;

        let mut usecase = UpdateSubmissionStatusUseCase {
            submission_id: submission.id.clone(),
            status: SubmissionStatus::Pending,
        };
        assert!(matches!(
            usecase.execute(&ctx).await,
            Err(UseCaseErrors::InvalidStatus)
        ));
    }

    #[actix_web::main]
    #[test]
    async fn it_returns_not_found_for_unknown_submission() {
        let ctx = WildcalContext::create_inmemory();

        let mut usecase = UpdateSubmissionStatusUseCase {
            submission_id: ID::new(),
            status: SubmissionStatus::Approved,
        };
        assert!(matches!(
            usecase.execute(&ctx).await,
            Err(UseCaseErrors::NotFound(_))
        ));
    }
}
