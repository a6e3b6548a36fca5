use crate::completion::build_provider;
use crate::configuration::Settings;
use crate::domain::LocationState;
use crate::geocoding::GeocodingClient;
use crate::pipeline::SignalPipeline;
use crate::routes::{
    complete, forward_geocode, generate, get_location, health_check, reset_location,
    reverse_geocode, set_location,
};
use actix_web::{App, HttpServer, dev::Server, web, web::Data};
use std::net::TcpListener;
use tracing_actix_web::TracingLogger;

pub struct Application {
    port: u16,
    server: Server,
}
impl Application {
    pub async fn build(configuration: Settings) -> Result<Self, anyhow::Error> {
        let pipeline = get_signal_pipeline(&configuration)?;

        let address = format!(
            "{}:{}",
            configuration.application.host, configuration.application.port
        );
        let listener = TcpListener::bind(address)?;
        let port = listener.local_addr()?.port();

        let server = run(listener, pipeline)?;

        Ok(Self { port, server })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> Result<(), std::io::Error> {
        self.server.await
    }
}

/// Wire the clients and the marker into a pipeline from configuration.
pub fn get_signal_pipeline(configuration: &Settings) -> Result<SignalPipeline, anyhow::Error> {
    let provider = build_provider(&configuration.completion)?;
    let geocoder = GeocodingClient::new(
        &configuration.geocoding,
        configuration.municipality.region_qualifier.clone(),
    )?;
    let location = LocationState::new(configuration.municipality.default_location()?);

    Ok(SignalPipeline::new(
        provider,
        geocoder,
        location,
        configuration.municipality.authority.clone(),
        configuration.geocoding.enrich_reports,
    ))
}

pub fn run(listener: TcpListener, pipeline: SignalPipeline) -> Result<Server, anyhow::Error> {
    // A single pipeline, and therefore a single marker, shared by every worker
    let pipeline = Data::new(pipeline);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .route("/health_check", web::get().to(health_check))
            .route("/location", web::get().to(get_location))
            .route("/location", web::put().to(set_location))
            .route("/location/reset", web::post().to(reset_location))
            .route("/geocode", web::post().to(forward_geocode))
            .route("/geocode/reverse", web::get().to(reverse_geocode))
            .route("/reports", web::post().to(generate))
            .route("/api/completion", web::post().to(complete))
            .app_data(pipeline.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}
