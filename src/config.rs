use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the EduPlatform REST API, without a trailing slash.
    pub api_base_url: String,
    /// Where the session document (tokens + cached profile) is persisted.
    pub session_file: PathBuf,
    pub request_timeout_secs: u64,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            api_base_url: env::var("EDUPLATFORM_API_URL")
                .unwrap_or_else(|_| {
                    "https://sophisticated-eden-dr-white004-48b8c072.koyeb.app/api".into()
                })
                .trim_end_matches('/')
                .to_string(),
            session_file: env::var("EDUPLATFORM_SESSION_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|_| default_session_file()),
            request_timeout_secs: env::var("EDUPLATFORM_TIMEOUT_SECS")
                .unwrap_or_else(|_| "30".into())
                .parse()?,
        })
    }
}

fn default_session_file() -> PathBuf {
    match env::var("HOME") {
        Ok(home) if !home.is_empty() => {
            PathBuf::from(home).join(".eduplatform").join("session.json")
        }
        _ => PathBuf::from(".eduplatform-session.json"),
    }
}
