use crate::config::Settings;
use crate::relay::types::SubscriptionKey;
use crate::relay::{RelayConfig, RelayService};
use crate::{Error, Result};
use tracing::{info, instrument};

/// Main application struct that coordinates all components
pub struct Application {
    settings: Settings,
}

impl Application {
    #[instrument]
    pub fn new() -> Result<Self> {
        let settings = Settings::new()?;
        Ok(Self { settings })
    }

    #[instrument(skip(self))]
    pub async fn run(self) -> Result<()> {
        let subscription_key =
            SubscriptionKey::try_new(self.settings.upstream.subscription_key.clone()).map_err(
                |_| {
                    Error::InvalidConfiguration(
                        "upstream.subscription_key must be set (FACE_RELAY__UPSTREAM__SUBSCRIPTION_KEY)"
                            .to_string(),
                    )
                },
            )?;

        let relay_config = RelayConfig::new(subscription_key);
        let router = RelayService::new(relay_config).into_router();

        let addr = self.settings.listen_address();
        info!("Starting face_relay server on {addr}");

        let listener = tokio::net::TcpListener::bind(&addr).await?;
        axum::serve(listener, router).await?;

        Ok(())
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_application_can_be_created() {
        let app = Application::new().expect("settings should load from defaults");
        assert!(app.settings().application.port > 0);
    }

    #[tokio::test]
    async fn test_run_rejects_missing_subscription_key() {
        // Default settings carry an empty subscription key, which must be
        // rejected before any listener is bound.
        let app = Application::new().unwrap();
        if app.settings().upstream.subscription_key.is_empty() {
            let result = app.run().await;
            assert!(matches!(result, Err(Error::InvalidConfiguration(_))));
        }
    }
}
