use crate::error::WildcalError;
use crate::shared::auth::protect_admin_route;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpRequest, HttpResponse};
use wildcal_api_structs::set_assignment::*;
use wildcal_domain::{date, Assignment, SubmissionStatus, ID};
use wildcal_infra::WildcalContext;

fn handle_error(e: UseCaseErrors) -> WildcalError {
    match e {
        UseCaseErrors::InvalidDate(msg) => WildcalError::BadClientData(msg),
        UseCaseErrors::SubmissionNotFound(submission_id) => WildcalError::NotFound(format!(
            "The submission with id: {} was not found",
            submission_id
        )),
        UseCaseErrors::SubmissionNotApproved(status) => WildcalError::Conflict(format!(
            "Only approved submissions can be featured, this one is {}",
            status
        )),
        UseCaseErrors::StorageError => WildcalError::InternalError,
    }
}

pub async fn set_assignment_admin_controller(
    http_req: HttpRequest,
    path_params: web::Path<PathParams>,
    body: web::Json<RequestBody>,
    ctx: web::Data<WildcalContext>,
) -> Result<HttpResponse, WildcalError> {
    protect_admin_route(&http_req, &ctx)?;

    let body = body.into_inner();
    let usecase = SetAssignmentUseCase {
        date: path_params.date.clone(),
        submission_id: body.submission_id,
        pinned: body.pinned,
        notes: body.notes,
    };

    execute(usecase, &ctx)
        .await
        .map(|assignment| HttpResponse::Ok().json(APIResponse::new(assignment)))
        .map_err(handle_error)
}

#[derive(Debug)]
pub struct SetAssignmentUseCase {
    pub date: String,
    pub submission_id: Option<ID>,
    pub pinned: Option<bool>,
    pub notes: Option<String>,
}

#[derive(Debug)]
pub enum UseCaseErrors {
    InvalidDate(String),
    SubmissionNotFound(ID),
    SubmissionNotApproved(SubmissionStatus),
    StorageError,
}

#[async_trait::async_trait(?Send)]
impl UseCase for SetAssignmentUseCase {
    type Response = Assignment;

    type Errors = UseCaseErrors;

    async fn execute(&mut self, ctx: &WildcalContext) -> Result<Self::Response, Self::Errors> {
        let day = date::parse_date(&self.date)
            .map_err(|_| UseCaseErrors::InvalidDate(format!("Invalid date: {}", self.date)))?;

        if let Some(submission_id) = &self.submission_id {
            let submission = ctx
                .repos
                .submissions
                .find(submission_id)
                .await
                .ok_or_else(|| UseCaseErrors::SubmissionNotFound(submission_id.clone()))?;
            if submission.status != SubmissionStatus::Approved {
                return Err(UseCaseErrors::SubmissionNotApproved(submission.status));
            }
        }

        let assignment = Assignment {
            date: day,
            submission_id: self.submission_id.clone(),
            pinned: self.pinned.unwrap_or(false),
            notes: self.notes.clone(),
        };

        ctx.repos
            .assignments
            .upsert(&assignment)
            .await
            .map_err(|_| UseCaseErrors::StorageError)?;

        Ok(assignment)
    }
}
