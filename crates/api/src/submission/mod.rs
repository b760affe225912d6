mod create_submission;
mod get_submissions;
mod update_submission_status;

use actix_web::web;
use create_submission::create_submission_controller;
use get_submissions::get_submissions_admin_controller;
use update_submission_status::update_submission_status_admin_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/submissions", web::post().to(create_submission_controller));
    cfg.route(
        "/submissions",
        web::get().to(get_submissions_admin_controller),
    );
    cfg.route(
        "/submissions/{submission_id}/status",
        web::put().to(update_submission_status_admin_controller),
    );
}
