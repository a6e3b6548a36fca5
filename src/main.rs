use civic_signal::configuration::get_configuration;
use civic_signal::startup::Application;
use civic_signal::telemetry::{get_subscriber, init_subscriber};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let subscriber = get_subscriber("civic-signal".into(), "info".into(), std::io::stdout);
    init_subscriber(subscriber);

    let configuration = get_configuration().expect("Failed to read configuration.");
    if !configuration.completion.has_usable_api_key() {
        tracing::warn!(
            "No completion API key configured; report generation will be rejected. \
            Set APP_COMPLETION__API_KEY."
        );
    }

    let application = Application::build(configuration).await?;
    application.run_until_stopped().await?;

    Ok(())
}
