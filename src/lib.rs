//! # zoom-meet
//!
//! Client for Zoom's Server-to-Server OAuth flow:
//! - Access token fetch via the account-credentials grant (HTTP Basic auth)
//! - Scheduled meeting creation returning the meeting's join URL
//!
//! One call to [`ZoomClient::create_meeting`] performs exactly two
//! sequential HTTP requests with no retries, caching, or shared state.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use zoom_meet::{Credentials, ZoomClient, ZoomUrls};
//!
//! let client = ZoomClient::new(credentials, ZoomUrls::default())?;
//! let join_url = client
//!     .create_meeting(Some("Weekly sync".to_string()), None, Some(30))
//!     .await?;
//! ```

pub mod config;
pub mod error;
pub mod gateway;
pub mod logging;

// Re-export commonly used types
pub use error::{Error, ErrorKind};
pub use gateway::zoom::{Credentials, ZoomClient, ZoomUrls};
