mod assignment;
mod calendar;
mod error;
mod event;
mod job_schedulers;
mod notification;
mod shared;
mod status;
mod submission;

use actix_cors::Cors;
use actix_web::{dev::Server, middleware, web, App, HttpServer};
use job_schedulers::start_daily_notification_job;
use std::net::TcpListener;
use tracing_actix_web::TracingLogger;
use wildcal_infra::WildcalContext;

pub fn configure_server_api(cfg: &mut web::ServiceConfig) {
    assignment::configure_routes(cfg);
    calendar::configure_routes(cfg);
    event::configure_routes(cfg);
    notification::configure_routes(cfg);
    status::configure_routes(cfg);
    submission::configure_routes(cfg);
}

pub struct Application {
    server: Server,
    port: u16,
}

impl Application {
    pub async fn new(context: WildcalContext) -> Result<Self, std::io::Error> {
        let (server, port) = Application::configure_server(context.clone()).await?;
        Application::start_job_schedulers(context);

        Ok(Self { server, port })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    fn start_job_schedulers(context: WildcalContext) {
        start_daily_notification_job(context);
    }

    async fn configure_server(context: WildcalContext) -> Result<(Server, u16), std::io::Error> {
        let port = context.config.port;
        let address = format!("0.0.0.0:{}", port);
        let listener = TcpListener::bind(&address)?;
        let port = listener.local_addr()?.port();

        let server = HttpServer::new(move || {
            let ctx = context.clone();

            App::new()
                .wrap(Cors::permissive())
                .wrap(middleware::Compress::default())
                .wrap(TracingLogger::default())
                .app_data(web::Data::new(ctx))
                .service(web::scope("/api/v1").configure(configure_server_api))
        })
        .listen(listener)?
        .workers(4)
        .run();

        Ok((server, port))
    }

    pub async fn start(self) -> Result<(), std::io::Error> {
        self.server.await
    }
}
