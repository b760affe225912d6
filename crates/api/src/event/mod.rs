mod create_event;
mod set_event_active;

use actix_web::web;
use create_event::create_event_admin_controller;
use set_event_active::set_event_active_admin_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/events", web::post().to(create_event_admin_controller));
    cfg.route(
        "/events/{event_id}/active",
        web::put().to(set_event_active_admin_controller),
    );
}
