use axum::http::HeaderValue;
use std::env;
use std::path::PathBuf;

/// Runtime configuration for the upload service
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Directory uploaded files are written to (default: "uploads")
    pub upload_dir: PathBuf,

    /// Port the HTTP listener binds (default: 5000)
    pub port: u16,

    /// Base URL embedded in generated file URLs (default: "http://localhost:5000")
    pub public_base_url: String,

    /// The single origin allowed to make cross-origin calls to /api/*
    /// (default: "http://localhost:3000"). Held pre-parsed so router
    /// construction cannot fail on a malformed value.
    pub allowed_origin: HeaderValue,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            upload_dir: PathBuf::from("uploads"),
            port: 5000,
            public_base_url: "http://localhost:5000".to_string(),
            allowed_origin: HeaderValue::from_static("http://localhost:3000"),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let default = Self::default();

        Self {
            upload_dir: env::var("UPLOAD_DIR")
                .map(PathBuf::from)
                .unwrap_or(default.upload_dir),

            port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(default.port),

            public_base_url: env::var("PUBLIC_BASE_URL")
                .map(|v| v.trim_end_matches('/').to_string())
                .unwrap_or(default.public_base_url),

            allowed_origin: env::var("ALLOWED_ORIGIN")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(default.allowed_origin),
        }
    }

    /// Full public URL for a stored filename
    pub fn public_url_for(&self, filename: &str) -> String {
        format!("{}/uploads/{}", self.public_base_url, filename)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.upload_dir, PathBuf::from("uploads"));
        assert_eq!(config.port, 5000);
        assert_eq!(config.public_base_url, "http://localhost:5000");
        assert_eq!(
            config.allowed_origin,
            HeaderValue::from_static("http://localhost:3000")
        );
    }

    #[test]
    fn test_public_url_for() {
        let config = AppConfig::default();
        assert_eq!(
            config.public_url_for("abc.png"),
            "http://localhost:5000/uploads/abc.png"
        );
    }
}
