//! Application configuration loaded from environment variables.
//!
//! The service-account credential file is not parsed here; the Firestore
//! client picks it up through the standard GCP credential chain
//! (`GOOGLE_APPLICATION_CREDENTIALS`). Startup only verifies that one of
//! the supported connection modes is configured.

use std::env;
use std::path::PathBuf;

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// GCP project ID
    pub gcp_project_id: String,
    /// Server port
    pub port: u16,
    /// Directory of public assets served under `/public`
    pub public_dir: PathBuf,
    /// Directory holding the landing page (`index.html`)
    pub views_dir: PathBuf,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// For local development against the emulator, set
    /// `FIRESTORE_EMULATOR_HOST` instead of a credential file.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        // A credential file is required unless the emulator is in use.
        // The Firestore client reads the file itself; we only check that
        // it is configured so startup fails early with a clear message.
        if env::var("FIRESTORE_EMULATOR_HOST").is_err()
            && env::var("GOOGLE_APPLICATION_CREDENTIALS").is_err()
        {
            return Err(ConfigError::Missing("GOOGLE_APPLICATION_CREDENTIALS"));
        }

        Ok(Self {
            gcp_project_id: env::var("GCP_PROJECT_ID").unwrap_or_else(|_| "local-dev".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .unwrap_or(3000),
            public_dir: env::var("PUBLIC_DIR")
                .unwrap_or_else(|_| "public".to_string())
                .into(),
            views_dir: env::var("VIEWS_DIR")
                .unwrap_or_else(|_| "views".to_string())
                .into(),
        })
    }

    /// Default config for testing only.
    pub fn test_default() -> Self {
        Self {
            gcp_project_id: "test-project".to_string(),
            port: 3000,
            public_dir: "public".into(),
            views_dir: "views".into(),
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),
}
