use std::path::PathBuf;

use chrono::NaiveDate;
use thiserror::Error;
use tracing::info;

use services::{AppServices, AppServicesError, Clock};

pub const CONTENT_DIR_ENV: &str = "MEDSTUDY_CONTENT_DIR";
pub const TODAY_ENV: &str = "MEDSTUDY_TODAY";

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("{var}={value:?} is not a YYYY-MM-DD date")]
    InvalidToday {
        var: &'static str,
        value: String,
        #[source]
        source: chrono::ParseError,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentSource {
    Embedded,
    Dir(PathBuf),
}

/// Startup settings: command-line flag, then environment, then default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub content: ContentSource,
    pub clock: Clock,
}

impl AppConfig {
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidToday` if `MEDSTUDY_TODAY` is not a date.
    pub fn resolve(content: Option<PathBuf>, today: Option<NaiveDate>) -> Result<Self, ConfigError> {
        Self::resolve_with(content, today, |var| std::env::var(var).ok())
    }

    fn resolve_with(
        content: Option<PathBuf>,
        today: Option<NaiveDate>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let env = |var: &str| env(var).filter(|value| !value.trim().is_empty());

        let content = content
            .or_else(|| env(CONTENT_DIR_ENV).map(PathBuf::from))
            .map_or(ContentSource::Embedded, ContentSource::Dir);

        let today = match today {
            Some(date) => Some(date),
            None => env(TODAY_ENV)
                .map(|value| {
                    value
                        .trim()
                        .parse::<NaiveDate>()
                        .map_err(|source| ConfigError::InvalidToday {
                            var: TODAY_ENV,
                            value,
                            source,
                        })
                })
                .transpose()?,
        };
        let clock = today.map_or(Clock::System, Clock::on_date);

        Ok(Self { content, clock })
    }

    /// # Errors
    ///
    /// Returns `AppServicesError` if the content cannot be loaded.
    pub fn services(&self) -> Result<AppServices, AppServicesError> {
        match &self.content {
            ContentSource::Embedded => {
                info!("using bundled content");
                AppServices::embedded(self.clock)
            }
            ContentSource::Dir(dir) => {
                info!(dir = %dir.display(), "loading content directory");
                AppServices::from_dir(dir, self.clock)
            }
        }
    }
}
