//! Waits for the host page to publish its calendar configuration.
//!
//! The template may inject the configuration after the script starts, so the
//! source is polled a bounded number of times before falling back to
//! [`CalendarConfig::fallback`]. A configuration that is present but cannot
//! be read ends the wait at once with an error. Sleeping is injected: gloo
//! timers in the browser, an immediate future in tests.

use std::future::Future;

use chrono::NaiveDate;
use shared::CalendarConfig;

use crate::error::ConfigError;

pub const CONFIG_POLL_INTERVAL_MS: u32 = 100;
pub const CONFIG_MAX_ATTEMPTS: u32 = 10;

/// Somewhere the configuration may appear
pub trait ConfigSource {
    /// `Ok(None)` while the configuration has not been published (yet)
    fn try_load(&self) -> Result<Option<CalendarConfig>, ConfigError>;
}

impl<F> ConfigSource for F
where
    F: Fn() -> Result<Option<CalendarConfig>, ConfigError>,
{
    fn try_load(&self) -> Result<Option<CalendarConfig>, ConfigError> {
        self()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    pub config: CalendarConfig,
    /// Number of times the source was polled
    pub attempts: u32,
    pub used_fallback: bool,
}

/// Poll `source` until it yields a configuration or the attempt budget runs out
pub async fn resolve_config<S, F, Fut>(
    source: &S,
    today: NaiveDate,
    mut sleep: F,
) -> Result<ResolvedConfig, ConfigError>
where
    S: ConfigSource + ?Sized,
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = ()>,
{
    for attempt in 1..=CONFIG_MAX_ATTEMPTS {
        if let Some(config) = source.try_load()? {
            log::info!("✅ Calendar configuration found on attempt {}", attempt);
            return Ok(ResolvedConfig {
                config,
                attempts: attempt,
                used_fallback: false,
            });
        }

        if attempt < CONFIG_MAX_ATTEMPTS {
            log::debug!("⏳ Waiting for calendar configuration... attempt {}", attempt);
            sleep(CONFIG_POLL_INTERVAL_MS).await;
        }
    }

    let config = CalendarConfig::fallback(today);
    log::warn!(
        "⚠️ Calendar configuration unavailable after {} attempts, using defaults for {}/{}",
        CONFIG_MAX_ATTEMPTS,
        config.current_month,
        config.current_year
    );

    Ok(ResolvedConfig {
        config,
        attempts: CONFIG_MAX_ATTEMPTS,
        used_fallback: true,
    })
}
