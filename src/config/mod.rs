use reqwest::Client;
use std::{env, time::Duration};

pub const DEFAULT_CURRENCIES_URL: &str =
    "https://apiv1.qa.spenmo.com/api/v1/enumeration/currencies";

#[derive(Clone)]
pub struct AppState {
    pub http: Client,
    pub currencies_url: String,
}

pub struct AppConfig {
    pub port: u16,
    pub currencies_url: String,
    /// `None` leaves outbound calls unbounded.
    pub external_timeout_ms: Option<u64>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        let port: u16 = env::var("PORT").unwrap_or_else(|_| "5000".into()).parse()?;
        let currencies_url =
            env::var("CURRENCIES_URL").unwrap_or_else(|_| DEFAULT_CURRENCIES_URL.into());
        let external_timeout_ms: Option<u64> = env::var("EXTERNAL_TIMEOUT_MS")
            .ok()
            .and_then(|s| s.parse().ok());
        Ok(Self { port, currencies_url, external_timeout_ms })
    }

    pub fn build_state(&self) -> Result<AppState, anyhow::Error> {
        let mut builder = Client::builder();
        if let Some(ms) = self.external_timeout_ms {
            builder = builder.timeout(Duration::from_millis(ms));
        }
        let http = builder.build()?;

        Ok(AppState {
            http,
            currencies_url: self.currencies_url.clone(),
        })
    }
}
