use std::time::Duration;

use error_stack::ResultExt;
use kernel::prelude::entity::LateFeePolicy;
use kernel::KernelError;

const PORT: &str = "PORT";
const LATE_FEE_POLICY: &str = "LATE_FEE_POLICY";
const REQUEST_TIMEOUT_SECS: &str = "REQUEST_TIMEOUT_SECS";

const DEFAULT_PORT: u16 = 4000;
const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Server settings read from the environment. A `.env` file is honoured.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    pub late_fee_policy: LateFeePolicy,
    pub request_timeout: Duration,
}

impl AppConfig {
    pub fn from_env() -> error_stack::Result<Self, KernelError> {
        let port = optional(PORT)?.unwrap_or(DEFAULT_PORT);
        let late_fee_policy = optional(LATE_FEE_POLICY)?.unwrap_or_default();
        let request_timeout = optional(REQUEST_TIMEOUT_SECS)?
            .map(Duration::from_secs)
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT);
        Ok(Self {
            port,
            late_fee_policy,
            request_timeout,
        })
    }
}

fn optional<T>(key: &'static str) -> error_stack::Result<Option<T>, KernelError>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match dotenvy::var(key) {
        Ok(value) => value
            .parse::<T>()
            .map(Some)
            .change_context_lazy(|| KernelError::Internal)
            .attach_printable_lazy(|| format!("Env {key} has an invalid value: {value}")),
        Err(dotenvy::Error::EnvVar(std::env::VarError::NotPresent)) => Ok(None),
        Err(e) => Err(e)
            .change_context(KernelError::Internal)
            .attach_printable_lazy(|| format!("Env {key} could not be read")),
    }
}
