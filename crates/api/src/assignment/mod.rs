mod set_assignment;

use actix_web::web;
use set_assignment::set_assignment_admin_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route(
        "/assignments/{date}",
        web::put().to(set_assignment_admin_controller),
    );
}
