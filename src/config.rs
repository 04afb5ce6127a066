use clap::builder::TypedValueParser as _;
use clap::Parser;
use dotenvy::dotenv;
use log::LevelFilter;
use secrecy::SecretString;

/// Default base URL of the Zoom OAuth token endpoint.
pub const DEFAULT_OAUTH_BASE_URL: &str = "https://zoom.us";

/// Default base URL of the Zoom REST API.
pub const DEFAULT_API_BASE_URL: &str = "https://api.zoom.us/v2";

/// Scheduled meeting length used when no duration is given.
pub const DEFAULT_DURATION_MINUTES: u32 = 60;

#[derive(Clone, Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// The Zoom account ID associated with the Server-to-Server OAuth app
    #[arg(long, env)]
    zoom_account_id: Option<String>,

    /// The client ID of the Server-to-Server OAuth app
    #[arg(long, env)]
    zoom_client_id: Option<String>,

    /// The client secret of the Server-to-Server OAuth app
    #[arg(long, env)]
    zoom_client_secret: Option<String>,

    /// The base URL of the Zoom OAuth token endpoint.
    /// Override in tests to point at a mock server.
    #[arg(long, env, default_value = DEFAULT_OAUTH_BASE_URL)]
    zoom_oauth_base_url: String,

    /// The base URL of the Zoom REST API.
    /// Override in tests to point at a mock server.
    #[arg(long, env, default_value = DEFAULT_API_BASE_URL)]
    zoom_api_base_url: String,

    /// The topic of the meeting to create
    #[arg(long, env = "ZOOM_MEETING_TOPIC")]
    pub topic: Option<String>,

    /// The scheduled start time of the meeting in yyyy-MM-ddTHH:mm:ss local format.
    /// When absent, Zoom applies its own default scheduling.
    #[arg(long, env = "ZOOM_MEETING_START_TIME")]
    pub start_time: Option<String>,

    /// The scheduled meeting length in minutes
    #[arg(long, env = "ZOOM_MEETING_DURATION", default_value_t = DEFAULT_DURATION_MINUTES)]
    pub duration: u32,

    /// Set the log level verbosity threshold (level) to control what gets displayed on console output
    #[arg(
        short,
        long,
        env,
        default_value_t = LevelFilter::Info,
        value_parser = clap::builder::PossibleValuesParser::new(["OFF", "ERROR", "WARN", "INFO", "DEBUG", "TRACE"])
            .map(|s| s.parse::<LevelFilter>().unwrap()),
        )]
    pub log_level_filter: LevelFilter,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    pub fn new() -> Self {
        // Load .env file first
        dotenv().ok();
        // Then parse the command line parameters and flags
        Config::parse()
    }

    /// Returns the Zoom account ID, if configured.
    pub fn zoom_account_id(&self) -> Option<String> {
        self.zoom_account_id.clone()
    }

    /// Returns the Zoom client ID, if configured.
    pub fn zoom_client_id(&self) -> Option<String> {
        self.zoom_client_id.clone()
    }

    /// Returns the Zoom client secret, if configured.
    pub fn zoom_client_secret(&self) -> Option<SecretString> {
        self.zoom_client_secret.clone().map(SecretString::from)
    }

    /// Returns the Zoom OAuth token endpoint base URL.
    pub fn zoom_oauth_base_url(&self) -> &str {
        &self.zoom_oauth_base_url
    }

    /// Returns the Zoom REST API base URL.
    pub fn zoom_api_base_url(&self) -> &str {
        &self.zoom_api_base_url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::parse_from(["zoom-meet"]);
        assert_eq!(config.duration, DEFAULT_DURATION_MINUTES);
        assert_eq!(config.zoom_oauth_base_url(), DEFAULT_OAUTH_BASE_URL);
        assert_eq!(config.zoom_api_base_url(), DEFAULT_API_BASE_URL);
        assert_eq!(config.log_level_filter, LevelFilter::Info);
        assert!(config.topic.is_none());
        assert!(config.start_time.is_none());
    }

    #[test]
    fn test_meeting_parameters_from_flags() {
        let config = Config::parse_from([
            "zoom-meet",
            "--topic",
            "Weekly sync",
            "--start-time",
            "2022-12-17T15:00:00",
            "--duration",
            "30",
        ]);
        assert_eq!(config.topic.as_deref(), Some("Weekly sync"));
        assert_eq!(config.start_time.as_deref(), Some("2022-12-17T15:00:00"));
        assert_eq!(config.duration, 30);
    }

    #[test]
    fn test_credentials_from_flags() {
        use secrecy::ExposeSecret;

        let config = Config::parse_from([
            "zoom-meet",
            "--zoom-account-id",
            "acct_1",
            "--zoom-client-id",
            "abc",
            "--zoom-client-secret",
            "xyz",
        ]);
        assert_eq!(config.zoom_account_id().as_deref(), Some("acct_1"));
        assert_eq!(config.zoom_client_id().as_deref(), Some("abc"));
        assert_eq!(
            config
                .zoom_client_secret()
                .expect("secret should be present")
                .expose_secret(),
            "xyz"
        );
    }
}
