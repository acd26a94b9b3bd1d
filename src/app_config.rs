use crate::domain::GeoPoint;
use crate::geo::{Tariff, ViewportDefaults};
use config::{Config, ConfigError};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    api: Api,
    location: Location,
    map: Map,
    pricing: Tariff,
    session: Session,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(config::File::with_name("config").required(true))
            .add_source(config::File::with_name("config_local").required(false))
            .add_source(config::Environment::with_prefix("RIDESHARE").separator("__"))
            .build()?
            .try_deserialize()
    }

    pub fn api(&self) -> &Api {
        &self.api
    }

    pub fn location(&self) -> &Location {
        &self.location
    }

    pub fn map(&self) -> &Map {
        &self.map
    }

    pub fn pricing(&self) -> &Tariff {
        &self.pricing
    }

    pub fn session(&self) -> &Session {
        &self.session
    }
}

#[derive(Debug, Deserialize)]
pub struct Api {
    url: String,
    #[serde(with = "humantime_serde")]
    request_timeout: Duration,
}

impl Api {
    pub fn url(&self) -> &str {
        self.url.trim_end_matches('/')
    }

    pub fn request_timeout(&self) -> Duration {
        self.request_timeout
    }
}

#[derive(Debug, Deserialize)]
pub struct Location {
    #[serde(with = "humantime_serde")]
    timeout: Duration,
    default_point: GeoPoint,
}

impl Location {
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn default_point(&self) -> GeoPoint {
        self.default_point
    }
}

#[derive(Debug, Deserialize)]
pub struct Map {
    latitude_delta: f64,
    aspect_ratio: f64,
    pad_factor: f64,
}

impl Map {
    pub fn viewport_defaults(&self) -> ViewportDefaults {
        ViewportDefaults::for_aspect_ratio(self.latitude_delta, self.aspect_ratio, self.pad_factor)
    }
}

#[derive(Debug, Deserialize)]
pub struct Session {
    token_file: String,
}

impl Session {
    pub fn token_file(&self) -> &Path {
        Path::new(&self.token_file)
    }
}

#[cfg(test)]
pub struct AppConfigBuilder {
    config: AppConfig,
}

#[cfg(test)]
impl AppConfigBuilder {
    pub fn new() -> Self {
        AppConfigBuilder {
            config: AppConfig {
                api: Api {
                    url: "http://localhost:3000/api".to_string(),
                    request_timeout: Duration::from_secs(5),
                },
                location: Location {
                    timeout: Duration::from_secs(10),
                    default_point: GeoPoint::new(37.7749, -122.4194).expect("valid default point"),
                },
                map: Map {
                    latitude_delta: 0.0922,
                    aspect_ratio: 0.5,
                    pad_factor: 1.5,
                },
                pricing: Tariff::new(10.0),
                session: Session {
                    token_file: "token".to_string(),
                },
            },
        }
    }

    pub fn api_url(mut self, url: String) -> Self {
        self.config.api.url = url;
        self
    }

    pub fn build(self) -> AppConfig {
        self.config
    }
}
