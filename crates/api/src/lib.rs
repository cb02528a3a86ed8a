mod auth;
mod birthday;
mod communication;
mod department;
mod employee;
mod error;
mod job_schedulers;
mod shared;
mod status;

use actix_cors::Cors;
use actix_web::{dev::Server, middleware, web, App, HttpServer};
use birthdays_infra::BirthdaysContext;
use error::BirthdaysError;
use job_schedulers::{start_birthday_wishes_job, start_manager_reminders_job};
use std::net::TcpListener;
use tracing::info;
use tracing_actix_web::TracingLogger;

pub use job_schedulers::{send_birthday_wishes, send_manager_reminders, JobReport};

pub fn configure_server_api(cfg: &mut web::ServiceConfig) {
    auth::configure_routes(cfg);
    birthday::configure_routes(cfg);
    communication::configure_routes(cfg);
    department::configure_routes(cfg);
    employee::configure_routes(cfg);
    status::configure_routes(cfg);
}

pub struct Application {
    server: Server,
    port: u16,
}

impl Application {
    pub async fn new(context: BirthdaysContext) -> Result<Self, std::io::Error> {
        let (server, port) = Application::configure_server(context.clone()).await?;
        Application::start_job_schedulers(context);

        Ok(Self { server, port })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    fn start_job_schedulers(context: BirthdaysContext) {
        if !context.config.enable_job_schedulers {
            info!("Job schedulers are disabled");
            return;
        }
        start_birthday_wishes_job(context.clone());
        start_manager_reminders_job(context);
    }

    async fn configure_server(context: BirthdaysContext) -> Result<(Server, u16), std::io::Error> {
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
                .app_data(web::JsonConfig::default().error_handler(|err, _req| {
                    BirthdaysError::BadClientData(err.to_string()).into()
                }))
                .app_data(web::PathConfig::default().error_handler(|err, _req| {
                    BirthdaysError::BadClientData(err.to_string()).into()
                }))
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
