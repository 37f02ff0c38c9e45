use std::net::TcpListener;
use std::sync::Arc;

use actix_web::dev::Server;
use actix_web::{web, App, HttpServer};
use anyhow::Context;
use tracing_actix_web::TracingLogger;

use crate::configuration::{Settings, TransportKind};
use crate::email_client::EmailClient;
use crate::routes::{contact_form, health_check, submit_contact};
use crate::transport::{EmailTransport, SimulatedTransport, SubmissionTransport};

pub struct Application {
    port: u16,
    server: Server,
}

impl Application {
    pub fn build(configuration: Settings) -> Result<Self, anyhow::Error> {
        let transport = build_transport(&configuration)?;

        let address = format!(
            "{}:{}",
            configuration.application.host, configuration.application.port
        );
        let listener = TcpListener::bind(&address)
            .with_context(|| format!("Failed to bind {}", address))?;
        let port = listener.local_addr()?.port();
        tracing::info!(
            business = %configuration.application.business_name,
            transport = ?configuration.transport.kind,
            "Serving the contact form on {}:{}",
            configuration.application.host,
            port
        );

        let server = run(listener, transport)?;
        Ok(Self { port, server })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    /// Runs until the server is stopped; this future only resolves on shutdown.
    pub async fn run_until_stopped(self) -> Result<(), std::io::Error> {
        self.server.await
    }
}

/// Picks the transport the contact form delivers through.
pub fn build_transport(
    configuration: &Settings,
) -> Result<Arc<dyn SubmissionTransport>, anyhow::Error> {
    let transport: Arc<dyn SubmissionTransport> = match configuration.transport.kind {
        TransportKind::Email => {
            let settings = &configuration.email_client;
            let sender = settings
                .sender()
                .context("Invalid sender email address.")?;
            let recipient = settings
                .recipient()
                .context("Invalid recipient email address.")?;
            let email_client = EmailClient::new(
                settings.base_url.clone(),
                sender,
                settings.authorization_token.clone(),
                settings.timeout(),
            )?;
            Arc::new(EmailTransport::new(email_client, recipient))
        }
        TransportKind::Simulated => Arc::new(SimulatedTransport::new(
            configuration.transport.delay(),
            configuration.transport.failure_rate,
        )),
    };
    Ok(transport)
}

pub fn run(
    listener: TcpListener,
    transport: Arc<dyn SubmissionTransport>,
) -> Result<Server, std::io::Error> {
    let transport = web::Data::from(transport);
    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .route("/health_check", web::get().to(health_check))
            .route("/contact", web::get().to(contact_form))
            .route("/contact", web::post().to(submit_contact))
            .app_data(transport.clone())
    })
    .listen(listener)?
    .run();
    Ok(server)
}
