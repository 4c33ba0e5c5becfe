use std::env;
use std::time::Duration;

use reqwest::Url;

use super::SystemError;

pub const ENDPOINT_VAR: &str = "USER_DIRECTORY_ENDPOINT";
pub const TIMEOUT_VAR: &str = "USER_DIRECTORY_TIMEOUT_SECS";
pub const CHANNEL_CAPACITY_VAR: &str = "USER_DIRECTORY_CHANNEL_CAPACITY";

pub const DEFAULT_ENDPOINT: &str = "https://jsonplaceholder.typicode.com/users";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_CHANNEL_CAPACITY: usize = 32;

#[derive(Clone, Debug)]
pub struct AppConfig {
    /// Where the remote user listing is fetched from.
    pub endpoint: Url,
    pub request_timeout: Duration,
    /// Mailbox size of every service.
    pub channel_capacity: usize,
}

impl AppConfig {
    /// Reads the process environment. Unset variables take their defaults.
    pub fn from_env() -> Result<Self, SystemError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, SystemError> {
        let endpoint = lookup(ENDPOINT_VAR).unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());
        let endpoint = Url::parse(endpoint.trim()).map_err(|e| SystemError::InvalidUrl {
            name: ENDPOINT_VAR,
            reason: e.to_string(),
        })?;

        let request_timeout = match lookup(TIMEOUT_VAR) {
            Some(raw) => Duration::from_secs(parse_positive(TIMEOUT_VAR, &raw)?),
            None => Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        };
        let channel_capacity = match lookup(CHANNEL_CAPACITY_VAR) {
            Some(raw) => parse_positive(CHANNEL_CAPACITY_VAR, &raw)?,
            None => DEFAULT_CHANNEL_CAPACITY,
        };

        Ok(Self {
            endpoint,
            request_timeout,
            channel_capacity,
        })
    }
}

fn parse_positive<T>(name: &'static str, raw: &str) -> Result<T, SystemError>
where
    T: std::str::FromStr + PartialOrd + Default,
{
    match raw.trim().parse::<T>() {
        Ok(value) if value > T::default() => Ok(value),
        _ => Err(SystemError::InvalidNumber {
            name,
            value: raw.to_string(),
        }),
    }
}
