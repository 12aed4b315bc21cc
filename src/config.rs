use std::env;
use std::time::Duration;

use crate::error::Error;

const DEFAULT_COMPLETION_URL: &str = "https://api.openai.com/v1/chat/completions";
const DEFAULT_MODEL: &str = "gpt-4o-mini";

#[derive(Clone, Debug)]
pub struct Config {
    pub mongodb_uri: String,
    pub mongodb_database: String,
    pub completion_url: String,
    pub completion_token: String,
    pub completion_model: String,
    pub completion_timeout: Option<Duration>,
    pub bind_address: String,
}

impl Config {
    pub fn from_env() -> Result<Config, Error> {
        Ok(Config {
            mongodb_uri: required("MONGODB_URI")?,
            mongodb_database: optional("MONGODB_DATABASE")
                .unwrap_or_else(|| "bloom".to_string()),
            completion_url: optional("COMPLETION_API_URL")
                .unwrap_or_else(|| DEFAULT_COMPLETION_URL.to_string()),
            completion_token: required("COMPLETION_API_TOKEN")?,
            completion_model: optional("COMPLETION_MODEL")
                .unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            completion_timeout: match optional("COMPLETION_TIMEOUT_SECS") {
                Some(secs) => {
                    let secs = secs.parse().map_err(|_| Error::InvalidEnvironmentVariable {
                        name: "COMPLETION_TIMEOUT_SECS",
                    })?;
                    Some(Duration::from_secs(secs))
                }
                None => None,
            },
            bind_address: optional("BIND_ADDRESS").unwrap_or_else(|| "127.0.0.1:8080".to_string()),
        })
    }
}

fn required(name: &'static str) -> Result<String, Error> {
    env::var(name).map_err(|_| Error::MissingEnvironmentVariable { name })
}

fn optional(name: &str) -> Option<String> {
    env::var(name).ok()
}
