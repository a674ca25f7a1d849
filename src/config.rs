use std::env;
use std::fmt::Debug;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use crate::error::{config_error, Error};
use crate::pricing::BASE_RATE;

#[derive(Clone, Debug)]
pub struct Config {
    pub base_rate: f64,
    pub tick_interval: Duration,
    pub seed: Option<u64>,
    pub tiers_path: Option<PathBuf>,
    pub sessions: usize,
    pub cancel_probability: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_rate: BASE_RATE,
            tick_interval: Duration::from_millis(1000),
            seed: None,
            tiers_path: None,
            sessions: 1,
            cancel_probability: 0.3,
        }
    }
}

impl Config {
    /// Reads `SKYTAXI_*` variables, loading a `.env` file first when present.
    #[tracing::instrument(name = "Config::from_env")]
    pub fn from_env() -> Result<Self, Error> {
        dotenv::dotenv().ok();

        let defaults = Self::default();

        let base_rate = parse_var("SKYTAXI_BASE_RATE")?.unwrap_or(defaults.base_rate);
        if !(base_rate > 0.0) {
            return Err(config_error(base_rate));
        }

        let tick_interval = parse_var::<u64>("SKYTAXI_TICK_MILLIS")?
            .map(Duration::from_millis)
            .unwrap_or(defaults.tick_interval);
        if tick_interval.is_zero() {
            return Err(config_error(tick_interval));
        }

        let cancel_probability =
            parse_var("SKYTAXI_CANCEL_PROBABILITY")?.unwrap_or(defaults.cancel_probability);
        if !(0.0..=1.0).contains(&cancel_probability) {
            return Err(config_error(cancel_probability));
        }

        Ok(Self {
            base_rate,
            tick_interval,
            seed: parse_var("SKYTAXI_SEED")?,
            tiers_path: read_var("SKYTAXI_TIERS_PATH")?.map(PathBuf::from),
            sessions: parse_var("SKYTAXI_SESSIONS")?.unwrap_or(defaults.sessions),
            cancel_probability,
        })
    }
}

fn read_var(key: &str) -> Result<Option<String>, Error> {
    match env::var(key) {
        Ok(value) => Ok(Some(value)),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(err) => Err(err.into()),
    }
}

fn parse_var<T>(key: &str) -> Result<Option<T>, Error>
where
    T: FromStr,
    T::Err: Debug,
{
    read_var(key)?
        .map(|value| value.trim().parse::<T>().map_err(config_error))
        .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_booking_flow() {
        let config = Config::default();

        assert_eq!(config.base_rate, 50.0);
        assert_eq!(config.tick_interval, Duration::from_secs(1));
        assert!(config.seed.is_none());
        assert!(config.tiers_path.is_none());
        assert_eq!(config.sessions, 1);
    }

    #[test]
    fn parse_var_reports_garbage() {
        env::set_var("SKYTAXI_TEST_GARBAGE", "fifty");
        let err = parse_var::<f64>("SKYTAXI_TEST_GARBAGE").unwrap_err();
        assert_eq!(err.code, 2);

        env::set_var("SKYTAXI_TEST_NUMBER", " 42 ");
        assert_eq!(parse_var::<u64>("SKYTAXI_TEST_NUMBER").unwrap(), Some(42));

        assert_eq!(parse_var::<u64>("SKYTAXI_TEST_MISSING").unwrap(), None);
    }

    #[test]
    fn zero_tick_is_rejected() {
        env::set_var("SKYTAXI_TICK_MILLIS", "0");
        let result = Config::from_env();
        env::remove_var("SKYTAXI_TICK_MILLIS");

        assert_eq!(result.unwrap_err().code, 2);
    }
}
