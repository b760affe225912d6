pub mod send_daily_notifications;

use crate::error::WildcalError;
use crate::shared::auth::protect_admin_route;
use crate::shared::usecase::execute;
use actix_web::{web, HttpRequest, HttpResponse};
use send_daily_notifications::{SendDailyNotificationsUseCase, UseCaseErrors};
use wildcal_api_structs::trigger_notifications::APIResponse;
use wildcal_infra::WildcalContext;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route(
        "/notifications/trigger",
        web::post().to(trigger_notifications_admin_controller),
    );
}

/// Runs the daily notification job on demand for today, outside its schedule.
pub async fn trigger_notifications_admin_controller(
    http_req: HttpRequest,
    ctx: web::Data<WildcalContext>,
) -> Result<HttpResponse, WildcalError> {
    protect_admin_route(&http_req, &ctx)?;

    let usecase = SendDailyNotificationsUseCase {
        date: ctx.sys.get_local_date(),
    };

    execute(usecase, &ctx)
        .await
        .map(|entries| HttpResponse::Ok().json(APIResponse::new(entries)))
        .map_err(|e| match e {
            UseCaseErrors::StorageError => WildcalError::InternalError,
        })
}
