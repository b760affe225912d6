use crate::calendar::resolve_assignment::resolve_assignment;
use crate::error::WildcalError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use wildcal_api_structs::get_month::*;
use wildcal_domain::{date, AssignmentView, CalendarEvent};
use wildcal_infra::WildcalContext;

fn handle_error(e: UseCaseErrors) -> WildcalError {
    match e {
        UseCaseErrors::InvalidMonth(msg) => WildcalError::BadClientData(msg),
        UseCaseErrors::StorageError => WildcalError::InternalError,
    }
}

pub async fn get_month_controller(
    path_params: web::Path<PathParams>,
    ctx: web::Data<WildcalContext>,
) -> Result<HttpResponse, WildcalError> {
    let usecase = GetMonthUseCase {
        year: path_params.year,
        month: path_params.month,
    };

    execute(usecase, &ctx)
        .await
        .map(|res| {
            HttpResponse::Ok().json(APIResponse::new(
                res.year,
                res.month,
                res.events,
                res.assignments,
            ))
        })
        .map_err(handle_error)
}

#[derive(Debug)]
pub struct GetMonthUseCase {
    pub year: i32,
    pub month: u32,
}

#[derive(Debug)]
pub struct UseCaseRes {
    pub year: i32,
    pub month: u32,
    pub events: Vec<CalendarEvent>,
    pub assignments: Vec<AssignmentView>,
}

#[derive(Debug)]
pub enum UseCaseErrors {
    InvalidMonth(String),
    StorageError,
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetMonthUseCase {
    type Response = UseCaseRes;

    type Errors = UseCaseErrors;

    async fn execute(&mut self, ctx: &WildcalContext) -> Result<Self::Response, Self::Errors> {
        let (first, last) = date::month_span(self.year, self.month)
            .map_err(|e| UseCaseErrors::InvalidMonth(e.to_string()))?;

        let events = ctx
            .repos
            .events
            .find_active_in_range(first, last)
            .await
            .map_err(|_| UseCaseErrors::StorageError)?;
        let assignments = ctx
            .repos
            .assignments
            .find_in_range(first, last)
            .await
            .map_err(|_| UseCaseErrors::StorageError)?;

        let mut resolved = Vec::with_capacity(assignments.len());
        for assignment in &assignments {
            if let Some(view) = resolve_assignment(assignment, ctx).await {
                resolved.push(view);
            }
        }

        Ok(UseCaseRes {
            year: self.year,
            month: self.month,
            events,
            assignments: resolved,
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use chrono::NaiveDate;
    use wildcal_domain::{Assignment, CalendarEvent, EventType, Photographer, Submission};

    async fn seed_featured_photo(ctx: &WildcalContext, date: NaiveDate) {
        let photographer = Photographer::new(
            "Jane".into(),
            "jane@example.com".into(),
            Some("@jane".into()),
        );
        ctx.repos.photographers.insert(&photographer).await.unwrap();

        let mut submission = Submission::new(
            photographer.id.clone(),
            "/uploads/original.jpg".into(),
            "/uploads/web.jpg".into(),
            Some("A tiger at dawn".into()),
            0,
        );
        submission.approve(1).unwrap();
        ctx.repos.submissions.insert(&submission).await.unwrap();

        let mut assignment = Assignment::new(date);
        assignment.submission_id = Some(submission.id.clone());
        ctx.repos.assignments.upsert(&assignment).await.unwrap();
    }

    #[actix_web::main]
    #[test]
    async fn it_returns_empty_month_without_data() {
        let ctx = WildcalContext::create_inmemory();
        let mut usecase = GetMonthUseCase {
            year: 2026,
            month: 2,
        };

        let res = usecase.execute(&ctx).await.unwrap();
        assert!(res.events.is_empty());
        assert!(res.assignments.is_empty());
    }

    #[actix_web::main]
    #[test]
    async fn it_rejects_invalid_months() {
        let ctx = WildcalContext::create_inmemory();
        for (year, month) in [(2026, 0), (2026, 13), (10_000, 1), (12, 1)].iter() {
            let mut usecase = GetMonthUseCase {
                year: *year,
                month: *month,
            };
            assert!(usecase.execute(&ctx).await.is_err());
        }
    }

    #[actix_web::main]
    #[test]
    async fn it_honors_calendar_correct_month_boundaries() {
        let ctx = WildcalContext::create_inmemory();

        // 2026 is not a leap year: Feb 28 is in range, Mar 1 is not
        let in_range = CalendarEvent::new(
            NaiveDate::from_ymd_opt(2026, 2, 28).unwrap(),
            "Last of February".into(),
            EventType::Wildlife,
        );
        let out_of_range = CalendarEvent::new(
            NaiveDate::from_ymd_opt(2026, 3, 1).unwrap(),
            "First of March".into(),
            EventType::Wildlife,
        );
        ctx.repos.events.insert(&in_range).await.unwrap();
        ctx.repos.events.insert(&out_of_range).await.unwrap();

        let mut usecase = GetMonthUseCase {
            year: 2026,
            month: 2,
        };
        let res = usecase.execute(&ctx).await.unwrap();
        assert_eq!(res.events.len(), 1);
        assert_eq!(res.events[0].title, "Last of February");
    }

    #[actix_web::main]
    #[test]
    async fn it_includes_leap_day_in_leap_years() {
        let ctx = WildcalContext::create_inmemory();

        let leap_day = NaiveDate::from_ymd_opt(2028, 2, 29).unwrap();
        let event = CalendarEvent::new(leap_day, "Leap day".into(), EventType::Variable);
        ctx.repos.events.insert(&event).await.unwrap();
        seed_featured_photo(&ctx, leap_day).await;

        let mut usecase = GetMonthUseCase {
            year: 2028,
            month: 2,
        };
        let res = usecase.execute(&ctx).await.unwrap();
        assert_eq!(res.events.len(), 1);
        assert_eq!(res.assignments.len(), 1);
        assert_eq!(res.assignments[0].date, leap_day);
    }

    #[actix_web::main]
    #[test]
    async fn it_skips_inactive_events() {
        let ctx = WildcalContext::create_inmemory();

        let mut event = CalendarEvent::new(
            NaiveDate::from_ymd_opt(2026, 7, 29).unwrap(),
            "International Tiger Day".into(),
            EventType::Wildlife,
        );
        event.is_active = false;
        ctx.repos.events.insert(&event).await.unwrap();

        let mut usecase = GetMonthUseCase {
            year: 2026,
            month: 7,
        };
        let res = usecase.execute(&ctx).await.unwrap();
        assert!(res.events.is_empty());
    }

    #[actix_web::main]
    #[test]
    async fn it_resolves_assignments_with_photographer_details() {
        let ctx = WildcalContext::create_inmemory();
        let date = NaiveDate::from_ymd_opt(2026, 1, 26).unwrap();
        seed_featured_photo(&ctx, date).await;

        let mut usecase = GetMonthUseCase {
            year: 2026,
            month: 1,
        };
        let res = usecase.execute(&ctx).await.unwrap();
        assert_eq!(res.assignments.len(), 1);
        assert_eq!(res.assignments[0].photographer_name, "Jane");
        assert_eq!(
            res.assignments[0].photographer_handle,
            Some("@jane".to_string())
        );
        assert_eq!(res.assignments[0].image_url, "/uploads/web.jpg");
    }
}
