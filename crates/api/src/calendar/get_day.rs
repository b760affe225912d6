use crate::calendar::resolve_assignment::resolve_assignment;
use crate::error::WildcalError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use wildcal_api_structs::get_day::*;
use wildcal_domain::{date, AssignmentView, CalendarEvent};
use wildcal_infra::WildcalContext;

fn handle_error(e: UseCaseErrors) -> WildcalError {
    match e {
        UseCaseErrors::InvalidDate(msg) => WildcalError::BadClientData(msg),
        UseCaseErrors::StorageError => WildcalError::InternalError,
    }
}

pub async fn get_day_controller(
    path_params: web::Path<PathParams>,
    ctx: web::Data<WildcalContext>,
) -> Result<HttpResponse, WildcalError> {
    let usecase = GetDayUseCase {
        date: path_params.date.clone(),
    };

    execute(usecase, &ctx)
        .await
        .map(|res| HttpResponse::Ok().json(APIResponse::new(res.date, res.events, res.assignment)))
        .map_err(handle_error)
}

#[derive(Debug)]
pub struct GetDayUseCase {
    pub date: String,
}

#[derive(Debug)]
pub struct UseCaseRes {
    pub date: chrono::NaiveDate,
    pub events: Vec<CalendarEvent>,
    pub assignment: Option<AssignmentView>,
}

#[derive(Debug)]
pub enum UseCaseErrors {
    InvalidDate(String),
    StorageError,
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetDayUseCase {
    type Response = UseCaseRes;

    type Errors = UseCaseErrors;

    async fn execute(&mut self, ctx: &WildcalContext) -> Result<Self::Response, Self::Errors> {
        let day = date::parse_date(&self.date)
            .map_err(|_| UseCaseErrors::InvalidDate(format!("Invalid date: {}", self.date)))?;

        let events = ctx
            .repos
            .events
            .find_active_in_range(day, day)
            .await
            .map_err(|_| UseCaseErrors::StorageError)?;

        // A date without an assignment row and a row without a pinned
        // submission are both simply "no featured photo" to the caller
        let assignment = match ctx.repos.assignments.find_by_date(day).await {
            Some(assignment) => resolve_assignment(&assignment, ctx).await,
            None => None,
        };

        Ok(UseCaseRes {
            date: day,
            events,
            assignment,
        })
    }
}
