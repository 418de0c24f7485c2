use std::process::ExitCode;

use shop_photo_notifier::{Config, ShopNotifier};
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("{}", e);
            return ExitCode::from(e.exit_code());
        }
    };

    let result = match ShopNotifier::new(&config) {
        Ok(notifier) => notifier.run().await,
        Err(e) => Err(e),
    };

    match result {
        Ok(report) => {
            if let Ok(json) = serde_json::to_string(&report) {
                debug!("Run report: {}", json);
            }
            match report.ok() {
                Some(ok) => info!("Telegram API returned ok={}", ok),
                None => info!("Telegram API returned no ok field"),
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{}", e);
            ExitCode::from(e.exit_code())
        }
    }
}
