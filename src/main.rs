use anyhow::Context;
use tableside::configuration::get_config;
use tableside::startup::Application;
use tableside::telemetry::{get_subscriber, init_subscriber};

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    dotenvy::dotenv().ok();

    let subscriber = get_subscriber("info".into(), std::io::stdout);
    init_subscriber(subscriber);

    let settings = get_config().context("Failed to load configuration")?;
    let application = Application::build(settings)
        .await
        .context("Failed to build application")?;

    application.run_until_stop().await
}
