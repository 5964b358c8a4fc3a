use char_exp_bot::{bot, config, telemetry};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let config = match config::load_from_env() {
        Ok(config) => config,
        Err(e) => {
            telemetry::init("info", "text");
            tracing::error!("Configuration error: {e:#}");
            std::process::exit(1);
        }
    };

    telemetry::init(&config.log_level, &config.log_format);
    config.print_summary();

    if let Err(e) = bot::run(config).await {
        tracing::error!("Bot terminated: {e:#}");
        std::process::exit(1);
    }
}
