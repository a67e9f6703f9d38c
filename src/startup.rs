use std::net::TcpListener;

use actix_web::dev::Server;
use actix_web::{App, HttpServer, web};
use anyhow::Context;
use tracing_actix_web::TracingLogger;

use crate::configuration::Settings;
use crate::contact_inbox::ContactInbox;
use crate::routes::{contact, health_check, json_config};

pub struct Application {
    port: u16,
    server: Server,
}

impl Application {
    pub async fn build(config: Settings) -> Result<Self, anyhow::Error> {
        let inbox = config
            .email_client
            .inbox()
            .context("Invalid email delivery configuration.")?;

        match &inbox {
            Some(_) => tracing::info!("Contact messages will be delivered by email."),
            None => tracing::info!(
                "Email delivery is not configured. Contact messages will only be logged."
            ),
        }

        let address = format!("{}:{}", config.application.host, config.application.port);
        let listener = TcpListener::bind(&address)
            .with_context(|| format!("Failed to bind {address}."))?;
        let port = listener.local_addr()?.port();
        let server = run(listener, inbox)?;

        Ok(Self { port, server })
    }

    pub fn get_port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> Result<(), std::io::Error> {
        self.server.await
    }
}

pub fn run(listener: TcpListener, inbox: Option<ContactInbox>) -> Result<Server, anyhow::Error> {
    let inbox = web::Data::new(inbox);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .route("/health_check", web::get().to(health_check))
            .service(
                web::resource("/api/contact")
                    .app_data(json_config())
                    .route(web::post().to(contact)),
            )
            .app_data(inbox.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}
