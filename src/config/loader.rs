// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde::Deserialize;
use std::fs;
use std::net::SocketAddr;
use std::path::Path;

use crate::config::consts::{DEFAULT_LISTEN_ADDR, DEFAULT_MAX_BLOCKING_THREADS};
use crate::errors::ConfigError;

/// Service configuration, typically loaded from a YAML file.
///
/// Every field has a default, so a missing file or an empty mapping both
/// yield a runnable configuration.
///
/// # Example
/// ```yaml
/// listen: "0.0.0.0:8080"
/// worker:
///   max_blocking_threads: 8
/// ```
#[derive(Debug, Deserialize, PartialEq)]
pub struct ServiceConfig {
    /// Address the transport binds, as `host:port`.
    #[serde(default = "default_listen")]
    pub listen: String,
    #[serde(default)]
    pub worker: WorkerOptions,
}

/// Offload-pool options.
#[derive(Debug, Deserialize, PartialEq)]
pub struct WorkerOptions {
    /// Upper bound on blocking-pool threads; defaults to
    /// [`DEFAULT_MAX_BLOCKING_THREADS`].
    pub max_blocking_threads: Option<usize>,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            listen: default_listen(),
            worker: WorkerOptions::default(),
        }
    }
}

impl Default for WorkerOptions {
    fn default() -> Self {
        Self {
            max_blocking_threads: None,
        }
    }
}

fn default_listen() -> String {
    DEFAULT_LISTEN_ADDR.to_string()
}

impl ServiceConfig {
    pub fn listen_addr(&self) -> Result<SocketAddr, ConfigError> {
        self.listen.parse().map_err(|_| ConfigError::Invalid {
            field: "listen",
            reason: format!("'{}' is not a socket address", self.listen),
        })
    }

    pub fn max_blocking_threads(&self) -> usize {
        self.worker
            .max_blocking_threads
            .unwrap_or(DEFAULT_MAX_BLOCKING_THREADS)
    }
}

/// Load configuration from a YAML file without validating it.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<ServiceConfig, ConfigError> {
    let path_display = path.as_ref().display().to_string();
    let contents = fs::read_to_string(&path).map_err(|source| ConfigError::Io {
        path: path_display.clone(),
        source,
    })?;
    serde_yaml::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path_display,
        source,
    })
}

/// Load and validate configuration in one step.
pub fn load_and_validate_config<P: AsRef<Path>>(path: P) -> Result<ServiceConfig, ConfigError> {
    let config = load_config(path)?;
    validate_config(&config)?;
    Ok(config)
}

fn validate_config(config: &ServiceConfig) -> Result<(), ConfigError> {
    config.listen_addr()?;
    if let Some(threads) = config.worker.max_blocking_threads {
        if threads == 0 {
            return Err(ConfigError::Invalid {
                field: "worker.max_blocking_threads",
                reason: "must be at least 1".to_string(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("temp file");
        file.write_all(contents.as_bytes()).expect("write config");
        file
    }

    #[test]
    fn full_config_parses() {
        let file = write_config("listen: \"0.0.0.0:9090\"\nworker:\n  max_blocking_threads: 8\n");
        let config = load_and_validate_config(file.path()).unwrap();
        assert_eq!(config.listen, "0.0.0.0:9090");
        assert_eq!(config.max_blocking_threads(), 8);
    }

    #[test]
    fn omitted_fields_fall_back_to_defaults() {
        let file = write_config("worker: {}\n");
        let config = load_and_validate_config(file.path()).unwrap();
        assert_eq!(config.listen, DEFAULT_LISTEN_ADDR);
        assert_eq!(config.max_blocking_threads(), DEFAULT_MAX_BLOCKING_THREADS);
    }

    #[test]
    fn defaults_are_a_valid_configuration() {
        let config = ServiceConfig::default();
        assert!(validate_config(&config).is_ok());
        assert_eq!(config.listen_addr().unwrap().port(), 8080);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let error = load_config("/definitely/not/here.yaml").unwrap_err();
        assert!(matches!(error, ConfigError::Io { .. }));
    }

    #[test]
    fn garbage_yaml_is_a_parse_error() {
        let file = write_config("listen: [this is: not a string\n");
        let error = load_config(file.path()).unwrap_err();
        assert!(matches!(error, ConfigError::Parse { .. }));
    }

    #[test]
    fn unparseable_listen_address_fails_validation() {
        let file = write_config("listen: \"not-an-address\"\n");
        let error = load_and_validate_config(file.path()).unwrap_err();
        assert!(matches!(
            error,
            ConfigError::Invalid { field: "listen", .. }
        ));
    }

    #[test]
    fn zero_blocking_threads_fails_validation() {
        let file = write_config("worker:\n  max_blocking_threads: 0\n");
        let error = load_and_validate_config(file.path()).unwrap_err();
        assert!(matches!(
            error,
            ConfigError::Invalid {
                field: "worker.max_blocking_threads",
                ..
            }
        ));
    }
}
