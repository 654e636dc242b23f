//! Application configuration management.

use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Object storage configuration.
    pub storage: StorageConfig,
}

/// Object storage configuration.
///
/// Built once at process startup and handed to the upload service by the
/// caller. The service itself never reads the process environment.
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Bucket objects are written to.
    ///
    /// An empty bucket is a fatal misconfiguration surfaced by the upload
    /// service before any attempt is made.
    #[serde(default)]
    pub bucket: String,
    /// Storage region.
    #[serde(default = "default_region")]
    pub region: String,
    /// Custom endpoint for S3-compatible providers (Cloudflare R2, Supabase,
    /// MinIO). When absent, AWS S3 is assumed.
    #[serde(default)]
    pub endpoint: Option<String>,
    /// Access key ID.
    #[serde(default)]
    pub access_key_id: String,
    /// Secret access key.
    #[serde(default)]
    pub secret_access_key: String,
    /// Folder used when the caller does not supply one.
    #[serde(default = "default_folder")]
    pub default_folder: String,
    /// Attempt budget for a single logical upload.
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,
}

fn default_region() -> String {
    StorageConfig::DEFAULT_REGION.to_string()
}

fn default_folder() -> String {
    StorageConfig::DEFAULT_FOLDER.to_string()
}

fn default_max_attempts() -> u32 {
    StorageConfig::DEFAULT_MAX_ATTEMPTS
}

impl StorageConfig {
    /// Default region when none is configured.
    pub const DEFAULT_REGION: &'static str = "us-east-1";
    /// Default folder for uploads without an explicit folder.
    pub const DEFAULT_FOLDER: &'static str = "uploads";
    /// Default attempt budget per logical upload.
    pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;

    /// Create a storage config for a bucket with default settings.
    #[must_use]
    pub fn new(bucket: impl Into<String>) -> Self {
        Self {
            bucket: bucket.into(),
            region: default_region(),
            endpoint: None,
            access_key_id: String::new(),
            secret_access_key: String::new(),
            default_folder: default_folder(),
            max_attempts: default_max_attempts(),
        }
    }

    /// Set the storage region.
    #[must_use]
    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = region.into();
        self
    }

    /// Set a custom endpoint for S3-compatible providers.
    #[must_use]
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// Set the access credentials.
    #[must_use]
    pub fn with_credentials(
        mut self,
        access_key_id: impl Into<String>,
        secret_access_key: impl Into<String>,
    ) -> Self {
        self.access_key_id = access_key_id.into();
        self.secret_access_key = secret_access_key.into();
        self
    }

    /// Set the default folder.
    #[must_use]
    pub fn with_default_folder(mut self, folder: impl Into<String>) -> Self {
        self.default_folder = folder.into();
        self
    }

    /// Set the attempt budget.
    #[must_use]
    pub const fn with_max_attempts(mut self, attempts: u32) -> Self {
        self.max_attempts = attempts;
        self
    }
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenvy::dotenv().ok();

        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(
                config::Environment::with_prefix("BRICKFUND")
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?;

        config.try_deserialize()
    }
}
