//! Zoom API client for Server-to-Server OAuth and meeting creation.
//!
//! This module provides an HTTP client that authenticates against Zoom's
//! OAuth token endpoint using the account-credentials grant, then creates a
//! scheduled meeting and returns its join URL. Each call to
//! [`ZoomClient::create_meeting`] performs exactly two sequential requests:
//! a token fetch, then the meeting creation that consumes the token. Tokens
//! are never cached across calls.

use base64::engine::general_purpose::STANDARD as BASE64_STANDARD;
use base64::Engine as _;
use log::*;
use reqwest::StatusCode;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use crate::config::{Config, DEFAULT_API_BASE_URL, DEFAULT_DURATION_MINUTES, DEFAULT_OAUTH_BASE_URL};
use crate::error::{
    authentication_error, config_error, meeting_creation_error, Error, ErrorKind, HttpErrorKind,
};

/// Timezone attached to every created meeting.
pub const MEETING_TIMEZONE: &str = "Asia/Tokyo";

/// Server-to-Server OAuth credentials for a Zoom account.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub account_id: String,
    pub client_id: String,
    pub client_secret: SecretString,
}

/// Base URLs for the two Zoom endpoints the client talks to.
/// Defaults to the production hosts; override in tests to point at a mock server.
#[derive(Debug, Clone)]
pub struct ZoomUrls {
    pub oauth_base_url: String,
    pub api_base_url: String,
}

impl Default for ZoomUrls {
    fn default() -> Self {
        Self {
            oauth_base_url: DEFAULT_OAUTH_BASE_URL.to_string(),
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
        }
    }
}

/// OAuth token response from Zoom
#[derive(Debug, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: String,
    #[serde(default)]
    pub expires_in: i64,
    #[serde(default)]
    pub scope: String,
}

/// Request payload for scheduling a meeting
#[derive(Debug, Serialize)]
pub struct MeetingRequest {
    pub topic: Option<String>,
    pub start_time: Option<String>,
    pub duration: u32,
    pub timezone: String,
}

/// Response from creating a meeting
#[derive(Debug, Deserialize)]
pub struct MeetingResponse {
    pub join_url: String,
}

/// Zoom API client for creating scheduled meetings
pub struct ZoomClient {
    client: reqwest::Client,
    credentials: Credentials,
    urls: ZoomUrls,
}

impl ZoomClient {
    /// Create a new Zoom client with the given credentials and endpoint URLs
    pub fn new(credentials: Credentials, urls: ZoomUrls) -> Result<Self, Error> {
        let client = reqwest::Client::builder().use_rustls_tls().build()?;

        Ok(Self {
            client,
            credentials,
            urls,
        })
    }

    /// Create a new Zoom client from application configuration
    pub fn from_config(config: &Config) -> Result<Self, Error> {
        let account_id = config.zoom_account_id().ok_or_else(|| {
            warn!("No Zoom account ID found in config");
            config_error("No Zoom account ID provided")
        })?;
        let client_id = config.zoom_client_id().ok_or_else(|| {
            warn!("No Zoom client ID found in config");
            config_error("No Zoom client ID provided")
        })?;
        let client_secret = config.zoom_client_secret().ok_or_else(|| {
            warn!("No Zoom client secret found in config");
            config_error("No Zoom client secret provided")
        })?;

        Self::new(
            Credentials {
                account_id,
                client_id,
                client_secret,
            },
            ZoomUrls {
                oauth_base_url: config.zoom_oauth_base_url().to_string(),
                api_base_url: config.zoom_api_base_url().to_string(),
            },
        )
    }

    /// Fetch an access token via the account-credentials grant.
    ///
    /// One outbound request, no retries. Any status other than 200 is an
    /// authentication failure.
    async fn fetch_access_token(&self) -> Result<String, Error> {
        let url = format!(
            "{}/oauth/token?grant_type=account_credentials&account_id={}",
            self.urls.oauth_base_url,
            urlencoding::encode(&self.credentials.account_id)
        );

        debug!(
            "Requesting Zoom access token for account {}",
            self.credentials.account_id
        );

        let response = self
            .client
            .post(&url)
            .header(reqwest::header::AUTHORIZATION, self.basic_auth_header()?)
            .send()
            .await
            .map_err(|e| {
                warn!("Failed to send Zoom token request: {e:?}");
                Error {
                    source: Some(Box::new(e)),
                    error_kind: ErrorKind::Http(HttpErrorKind::Network),
                }
            })?;

        let status = response.status();
        if status == StatusCode::OK {
            let tokens: TokenResponse = response.json().await.map_err(|e| {
                warn!("Failed to parse Zoom token response: {e:?}");
                authentication_error("Invalid response from the Zoom OAuth endpoint")
            })?;
            info!("Obtained Zoom access token");
            Ok(tokens.access_token)
        } else {
            let error_text = response.text().await.unwrap_or_default();
            warn!("Zoom token request failed: {} - {}", status, error_text);
            Err(authentication_error(
                "Zoom token endpoint returned a non-200 status",
            ))
        }
    }

    /// Create a scheduled meeting for the authenticated account's user.
    ///
    /// Fetches a fresh access token first; the meeting endpoint is never
    /// contacted when the token fetch fails. `start_time` is forwarded
    /// verbatim in yyyy-MM-ddTHH:mm:ss local format; Zoom performs all
    /// validation of it and of `duration`.
    ///
    /// # Arguments
    ///
    /// * `topic` - Optional meeting subject
    /// * `start_time` - Optional scheduled start time
    /// * `duration` - Meeting length in minutes, 60 when absent
    ///
    /// # Returns
    ///
    /// The join URL of the created meeting.
    pub async fn create_meeting(
        &self,
        topic: Option<String>,
        start_time: Option<String>,
        duration: Option<u32>,
    ) -> Result<String, Error> {
        let access_token = self.fetch_access_token().await?;

        let url = format!("{}/users/me/meetings", self.urls.api_base_url);
        let request = MeetingRequest {
            topic,
            start_time,
            duration: duration.unwrap_or(DEFAULT_DURATION_MINUTES),
            timezone: MEETING_TIMEZONE.to_string(),
        };

        debug!("Creating Zoom meeting: {:?}", request.topic);

        let response = self
            .client
            .post(&url)
            .bearer_auth(&access_token)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                warn!("Failed to send Zoom meeting request: {e:?}");
                Error {
                    source: Some(Box::new(e)),
                    error_kind: ErrorKind::Http(HttpErrorKind::Network),
                }
            })?;

        let status = response.status();
        if status == StatusCode::CREATED {
            let meeting: MeetingResponse = response.json().await.map_err(|e| {
                warn!("Failed to parse Zoom meeting response: {e:?}");
                meeting_creation_error("Invalid response from the Zoom meetings endpoint")
            })?;
            info!("Created Zoom meeting: {}", meeting.join_url);
            Ok(meeting.join_url)
        } else {
            let error_text = response.text().await.unwrap_or_default();
            warn!("Zoom meeting creation failed: {} - {}", status, error_text);
            Err(meeting_creation_error(
                "Zoom meetings endpoint returned a non-201 status",
            ))
        }
    }

    /// Build the HTTP Basic authorization header from the client credentials.
    /// Marked sensitive so it never appears in debug output.
    fn basic_auth_header(&self) -> Result<reqwest::header::HeaderValue, Error> {
        let auth_value = format!(
            "Basic {}",
            basic_credentials(&self.credentials.client_id, &self.credentials.client_secret)
        );
        let mut header = reqwest::header::HeaderValue::from_str(&auth_value).map_err(|e| {
            warn!("Failed to create authorization header value: {e:?}");
            Error {
                source: Some(Box::new(e)),
                error_kind: ErrorKind::Config,
            }
        })?;
        header.set_sensitive(true);

        Ok(header)
    }
}

/// Encode client credentials for HTTP Basic authentication.
/// Authorization headers cannot carry arbitrary symbols, so the
/// `client_id:client_secret` pair is base64 encoded.
fn basic_credentials(client_id: &str, client_secret: &SecretString) -> String {
    BASE64_STANDARD.encode(format!("{}:{}", client_id, client_secret.expose_secret()))
}
