use crate::error::WildcalError;
use crate::shared::auth::protect_admin_route;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpRequest, HttpResponse};
use wildcal_api_structs::create_event::*;
use wildcal_domain::{date, CalendarEvent, EventType};
use wildcal_infra::WildcalContext;

fn handle_error(e: UseCaseErrors) -> WildcalError {
    match e {
        UseCaseErrors::InvalidDate(msg) => WildcalError::BadClientData(msg),
        UseCaseErrors::StorageError => WildcalError::InternalError,
    }
}

pub async fn create_event_admin_controller(
    http_req: HttpRequest,
    body: web::Json<RequestBody>,
    ctx: web::Data<WildcalContext>,
) -> Result<HttpResponse, WildcalError> {
    protect_admin_route(&http_req, &ctx)?;

    let body = body.into_inner();
    let usecase = CreateEventUseCase {
        date: body.date,
        title: body.title,
        event_type: body.event_type,
        region: body.region,
        source: body.source,
    };

    execute(usecase, &ctx)
        .await
        .map(|event| HttpResponse::Created().json(APIResponse::new(event)))
        .map_err(handle_error)
}

#[derive(Debug)]
pub struct CreateEventUseCase {
    pub date: String,
    pub title: String,
    pub event_type: EventType,
    pub region: Option<String>,
    pub source: Option<String>,
}

#[derive(Debug)]
pub enum UseCaseErrors {
    InvalidDate(String),
    StorageError,
}

#[async_trait::async_trait(?Send)]
impl UseCase for CreateEventUseCase {
    type Response = CalendarEvent;

    type Errors = UseCaseErrors;

    async fn execute(&mut self, ctx: &WildcalContext) -> Result<Self::Response, Self::Errors> {
        let day = date::parse_date(&self.date)
            .map_err(|_| UseCaseErrors::InvalidDate(format!("Invalid date: {}", self.date)))?;

        let mut event = CalendarEvent::new(day, self.title.clone(), self.event_type);
        if let Some(region) = &self.region {
            event.region = region.clone();
        }
        if let Some(source) = &self.source {
            event.source = Some(source.clone());
        }

        ctx.repos
            .events
            .insert(&event)
            .await
            .map_err(|_| UseCaseErrors::StorageError)?;

        Ok(event)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use chrono::NaiveDate;

    #[actix_web::main]
    #[test]
    async fn it_creates_an_active_event() {
        let ctx = WildcalContext::create_inmemory();

        let mut usecase = CreateEventUseCase {
            date: "2026-07-29".into(),
            title: "International Tiger Day".into(),
            event_type: EventType::Wildlife,
            region: None,
            source: Some("manual".into()),
        };
        let event = usecase.execute(&ctx).await.unwrap();
        assert!(event.is_active);
        assert_eq!(event.region, "Global");

        let day = NaiveDate::from_ymd_opt(2026, 7, 29).unwrap();
        let stored = ctx
            .repos
            .events
            .find_active_in_range(day, day)
            .await
            .unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].title, "International Tiger Day");
    }

    #[actix_web::main]
    #[test]
    async fn it_rejects_invalid_dates() {
        let ctx = WildcalContext::create_inmemory();

        let mut usecase = CreateEventUseCase {
            date: "2026-02-30".into(),
            title: "Nonexistent day".into(),
            event_type: EventType::Variable,
            region: None,
            source: None,
        };
        assert!(matches!(
            usecase.execute(&ctx).await,
            Err(UseCaseErrors::InvalidDate(_))
        ));
    }

    #[actix_web::main]
    #[test]
    async fn it_keeps_a_custom_region() {
        let ctx = WildcalContext::create_inmemory();

        let mut usecase = CreateEventUseCase {
            date: "2026-01-26".into(),
            title: "Republic Day".into(),
            event_type: EventType::Holiday,
            region: Some("IN".into()),
            source: None,
        };
        let event = usecase.execute(&ctx).await.unwrap();
        assert_eq!(event.region, "IN");
    }
}
