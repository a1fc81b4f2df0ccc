/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Idle lifetime of an in-memory wizard session in seconds
    /// (default: `3600`).
    pub session_ttl_secs: u64,
    /// Messaging handoff target (host + destination id).
    pub messaging: MessagingConfig,
    /// Object storage backend configuration.
    pub storage: StorageConfig,
}

/// Where submitted bookings are handed off.
#[derive(Debug, Clone)]
pub struct MessagingConfig {
    /// Deep-link host (default: `wa.me`).
    pub host: String,
    /// Destination identifier on that host (the operator's number).
    pub destination: String,
}

/// Which object storage backend holds uploaded images.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    Local,
    S3,
}

impl StorageBackend {
    fn from_env_value(value: &str) -> Self {
        match value {
            "local" => Self::Local,
            "s3" => Self::S3,
            other => panic!("STORAGE_BACKEND must be 'local' or 's3', got '{other}'"),
        }
    }
}

/// Object storage configuration.
#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub backend: StorageBackend,
    /// Directory for the `local` backend (default: `data/uploads`).
    pub local_path: String,
    /// Public URL prefix the API serves the local directory under
    /// (default: `/uploads`).
    pub local_public_url: String,
    /// Bucket for the `s3` backend. Required when `backend` is `s3`.
    pub s3_bucket: Option<String>,
    /// Optional CDN/base URL for objects in the `s3` backend.
    pub s3_public_url: Option<String>,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                 | Default          |
    /// |-------------------------|------------------|
    /// | `HOST`                  | `0.0.0.0`        |
    /// | `PORT`                  | `3000`           |
    /// | `CORS_ORIGINS`          | `http://localhost:5173` |
    /// | `REQUEST_TIMEOUT_SECS`  | `30`             |
    /// | `SESSION_TTL_SECS`      | `3600`           |
    /// | `MESSAGING_HOST`        | `wa.me`          |
    /// | `MESSAGING_DESTINATION` | `201100434503`   |
    /// | `STORAGE_BACKEND`       | `local`          |
    /// | `UPLOADS_DIR`           | `data/uploads`   |
    /// | `UPLOADS_PUBLIC_URL`    | `/uploads`       |
    /// | `S3_BUCKET`             | (unset)          |
    /// | `S3_PUBLIC_URL`         | (unset)          |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let session_ttl_secs: u64 = std::env::var("SESSION_TTL_SECS")
            .unwrap_or_else(|_| "3600".into())
            .parse()
            .expect("SESSION_TTL_SECS must be a valid u64");

        let messaging = MessagingConfig {
            host: std::env::var("MESSAGING_HOST")
                .unwrap_or_else(|_| mashwar_core::handoff::DEFAULT_MESSAGING_HOST.into()),
            destination: std::env::var("MESSAGING_DESTINATION")
                .unwrap_or_else(|_| "201100434503".into()),
        };

        let backend = StorageBackend::from_env_value(
            &std::env::var("STORAGE_BACKEND").unwrap_or_else(|_| "local".into()),
        );
        let storage = StorageConfig {
            backend,
            local_path: std::env::var("UPLOADS_DIR").unwrap_or_else(|_| "data/uploads".into()),
            local_public_url: std::env::var("UPLOADS_PUBLIC_URL")
                .unwrap_or_else(|_| "/uploads".into()),
            s3_bucket: std::env::var("S3_BUCKET").ok(),
            s3_public_url: std::env::var("S3_PUBLIC_URL").ok(),
        };
        if backend == StorageBackend::S3 && storage.s3_bucket.is_none() {
            panic!("S3_BUCKET must be set when STORAGE_BACKEND is 's3'");
        }

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            session_ttl_secs,
            messaging,
            storage,
        }
    }
}
