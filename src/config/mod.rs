use crate::core::{RecordSchema, Result, RosterError};
use crate::storage::IdStrategy;
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

/// Record manager configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManagerConfig {
    /// Which columns a record carries
    pub schema: RecordSchema,

    /// Rows per page shown initially
    pub page_size: usize,

    /// Choices offered by the rows-per-page control
    pub page_size_options: Vec<usize>,

    /// How long a notification stays visible
    pub notification_ttl: Duration,

    /// How fresh ids are produced
    pub id_strategy: IdStrategy,
}

impl ManagerConfig {
    pub fn new(schema: RecordSchema) -> Self {
        Self {
            schema,
            page_size: 5,
            page_size_options: vec![5, 10, 25],
            notification_ttl: Duration::from_secs(3),
            id_strategy: IdStrategy::default(),
        }
    }

    /// Set the record schema
    pub fn schema(mut self, schema: RecordSchema) -> Self {
        self.schema = schema;
        self
    }

    /// Set the initial page size
    pub fn page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    /// Set the rows-per-page choices
    pub fn page_size_options(mut self, options: Vec<usize>) -> Self {
        self.page_size_options = options;
        self
    }

    /// Set notification time-to-live
    pub fn notification_ttl(mut self, ttl: Duration) -> Self {
        self.notification_ttl = ttl;
        self
    }

    /// Set the id strategy
    pub fn id_strategy(mut self, strategy: IdStrategy) -> Self {
        self.id_strategy = strategy;
        self
    }

    pub fn allows_page_size(&self, size: usize) -> bool {
        self.page_size_options.contains(&size)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.page_size_options.is_empty() {
            return Err(RosterError::Config(
                "page_size_options must not be empty".into(),
            ));
        }

        if self.page_size_options.contains(&0) {
            return Err(RosterError::Config(
                "page_size_options must not contain 0".into(),
            ));
        }

        if self.page_size == 0 {
            return Err(RosterError::Config("page_size must be > 0".into()));
        }

        if !self.allows_page_size(self.page_size) {
            return Err(RosterError::InvalidPageSize(self.page_size));
        }

        if self.notification_ttl.is_zero() {
            return Err(RosterError::Config("notification_ttl must be > 0".into()));
        }

        Ok(())
    }

    /// Parse a JSON document; keys that are absent keep their defaults.
    ///
    /// ```json
    /// { "schema": "minimal", "pageSize": 10, "notificationTtlMs": 5000,
    ///   "idStrategy": { "kind": "timestamp" } }
    /// ```
    pub fn from_json_str(json: &str) -> Result<Self> {
        let file: ConfigFile = serde_json::from_str(json)
            .map_err(|e| RosterError::Config(format!("invalid config: {}", e)))?;
        let config = file.into_config()?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&json)
    }
}

impl Default for ManagerConfig {
    fn default() -> Self {
        Self::new(RecordSchema::default())
    }
}

/// On-disk shape of [`ManagerConfig`]
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct ConfigFile {
    schema: Option<String>,
    page_size: Option<usize>,
    page_size_options: Option<Vec<usize>>,
    notification_ttl_ms: Option<u64>,
    id_strategy: Option<IdStrategy>,
}

impl ConfigFile {
    fn into_config(self) -> Result<ManagerConfig> {
        let mut config = ManagerConfig::default();

        if let Some(schema) = self.schema {
            config = config.schema(schema.parse()?);
        }
        if let Some(options) = self.page_size_options {
            config = config.page_size_options(options);
        }
        if let Some(size) = self.page_size {
            config = config.page_size(size);
        }
        if let Some(ms) = self.notification_ttl_ms {
            config = config.notification_ttl(Duration::from_millis(ms));
        }
        if let Some(strategy) = self.id_strategy {
            config = config.id_strategy(strategy);
        }

        Ok(config)
    }
}
