mod get_day;
mod get_month;
pub mod resolve_assignment;

use actix_web::web;
use get_day::get_day_controller;
use get_month::get_month_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/calendar/{year}/{month}", web::get().to(get_month_controller));
    cfg.route("/day/{date}", web::get().to(get_day_controller));
}
