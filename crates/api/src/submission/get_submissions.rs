use crate::error::WildcalError;
use crate::shared::auth::protect_admin_route;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpRequest, HttpResponse};
use wildcal_api_structs::get_submissions::*;
use wildcal_domain::{Submission, SubmissionStatus};
use wildcal_infra::WildcalContext;

fn handle_error(e: UseCaseErrors) -> WildcalError {
    match e {
        UseCaseErrors::StorageError => WildcalError::InternalError,
    }
}

pub async fn get_submissions_admin_controller(
    http_req: HttpRequest,
    query_params: web::Query<QueryParams>,
    ctx: web::Data<WildcalContext>,
) -> Result<HttpResponse, WildcalError> {
    protect_admin_route(&http_req, &ctx)?;

    let usecase = GetSubmissionsUseCase {
        // The moderation queue is the default view
        status: query_params.status.unwrap_or(SubmissionStatus::Pending),
    };

    execute(usecase, &ctx)
        .await
        .map(|submissions| HttpResponse::Ok().json(APIResponse::new(submissions)))
        .map_err(handle_error)
}

#[derive(Debug)]
pub struct GetSubmissionsUseCase {
    pub status: SubmissionStatus,
}

#[derive(Debug)]
pub enum UseCaseErrors {
    StorageError,
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetSubmissionsUseCase {
    type Response = Vec<Submission>;

    type Errors = UseCaseErrors;

    async fn execute(&mut self, ctx: &WildcalContext) -> Result<Self::Response, Self::Errors> {
        ctx.repos
            .submissions
            .find_by_status(self.status)
            .await
            .map_err(|_| UseCaseErrors::StorageError)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use wildcal_domain::{Photographer, Submission};

    #[actix_web::main]
    #[test]
    async fn it_filters_submissions_by_status() {
        let ctx = WildcalContext::create_inmemory();

        let photographer = Photographer::new("Jane".into(), "jane@example.com".into(), None);
        ctx.repos.photographers.insert(&photographer).await.unwrap();

        let pending = Submission::new(
            photographer.id.clone(),
            "/uploads/a.jpg".into(),
            "/uploads/a-web.jpg".into(),
            None,
            0,
        );
        ctx.repos.submissions.insert(&pending).await.unwrap();

        let mut approved = Submission::new(
            photographer.id.clone(),
            "/uploads/b.jpg".into(),
            "/uploads/b-web.jpg".into(),
            None,
            0,
        );
        approved.approve(1).unwrap();
        ctx.repos.submissions.insert(&approved).await.unwrap();

        let mut usecase = GetSubmissionsUseCase {
            status: SubmissionStatus::Pending,
        };
        let res = usecase.execute(&ctx).await.unwrap();
        assert_eq!(res.len(), 1);
        assert_eq!(res[0].id, pending.id);

        let mut usecase = GetSubmissionsUseCase {
            status: SubmissionStatus::Approved,
        };
        let res = usecase.execute(&ctx).await.unwrap();
        assert_eq!(res.len(), 1);
        assert_eq!(res[0].id, approved.id);

        let mut usecase = GetSubmissionsUseCase {
            status: SubmissionStatus::Rejected,
        };
        assert!(usecase.execute(&ctx).await.unwrap().is_empty());
    }
}
