use crate::error::WildcalError;
use crate::shared::auth::protect_admin_route;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpRequest, HttpResponse};
use wildcal_api_structs::set_event_active::*;
use wildcal_domain::{CalendarEvent, ID};
use wildcal_infra::WildcalContext;

fn handle_error(e: UseCaseErrors) -> WildcalError {
    match e {
        UseCaseErrors::NotFound(event_id) => {
            WildcalError::NotFound(format!("The event with id: {} was not found", event_id))
        }
        UseCaseErrors::StorageError => WildcalError::InternalError,
    }
}

pub async fn set_event_active_admin_controller(
    http_req: HttpRequest,
    path_params: web::Path<PathParams>,
    body: web::Json<RequestBody>,
    ctx: web::Data<WildcalContext>,
) -> Result<HttpResponse, WildcalError> {
    protect_admin_route(&http_req, &ctx)?;

    let usecase = SetEventActiveUseCase {
        event_id: path_params.event_id.clone(),
        active: body.active,
    };

    execute(usecase, &ctx)
        .await
        .map(|event| HttpResponse::Ok().json(APIResponse::new(event)))
        .map_err(handle_error)
}

#[derive(Debug)]
pub struct SetEventActiveUseCase {
    pub event_id: ID,
    pub active: bool,
}

#[derive(Debug)]
pub enum UseCaseErrors {
    NotFound(ID),
    StorageError,
}

#[async_trait::async_trait(?Send)]
impl UseCase for SetEventActiveUseCase {
    type Response = CalendarEvent;

    type Errors = UseCaseErrors;

    async fn execute(&mut self, ctx: &WildcalContext) -> Result<Self::Response, Self::Errors> {
        let mut event = ctx
            .repos
            .events
            .find(&self.event_id)
            .await
            .ok_or_else(|| UseCaseErrors::NotFound(self.event_id.clone()))?;

        event.is_active = self.active;

        ctx.repos
            .events
            .save(&event)
            .await
            .map_err(|_| UseCaseErrors::StorageError)?;

        Ok(event)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use chrono::NaiveDate;
    use wildcal_domain::EventType;

    #[actix_web::main]
    #[test]
    async fn it_toggles_event_visibility() {
        let ctx = WildcalContext::create_inmemory();
        let day = NaiveDate::from_ymd_opt(2026, 7, 29).unwrap();

        let event = CalendarEvent::new(day, "International Tiger Day".into(), EventType::Wildlife);
        ctx.repos.events.insert(&event).await.unwrap();

        let mut usecase = SetEventActiveUseCase {
            event_id: event.id.clone(),
            active: false,
        };
        let res = usecase.execute(&ctx).await.unwrap();
        assert!(!res.is_active);

        let visible = ctx
            .repos
            .events
            .find_active_in_range(day, day)
            .await
            .unwrap();
        assert!(visible.is_empty());

        let mut usecase = SetEventActiveUseCase {
            event_id: event.id.clone(),
            active: true,
        };
        usecase.execute(&ctx).await.unwrap();

        let visible = ctx
            .repos
            .events
            .find_active_in_range(day, day)
            .await
            .unwrap();
        assert_eq!(visible.len(), 1);
    }

    #[actix_web::main]
    #[test]
    async fn it_returns_not_found_for_unknown_event() {
        let ctx = WildcalContext::create_inmemory();

        let mut usecase = SetEventActiveUseCase {
            event_id: ID::new(),
            active: false,
        };
        assert!(matches!(
            usecase.execute(&ctx).await,
            Err(UseCaseErrors::NotFound(_))
        ));
    }
}
