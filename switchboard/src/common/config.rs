/*
 * Copyright (c) 2024. Govcraft
 *
 * Licensed under either of
 *   * Apache License, Version 2.0 (the "License");
 *     you may not use this file except in compliance with the License.
 *     You may obtain a copy of the License at http://www.apache.org/licenses/LICENSE-2.0
 *   * MIT license: http://opensource.org/licenses/MIT
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the applicable License for the specific language governing permissions and
 * limitations under that License.
 */

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{error, info};

use crate::agents::Route;
use crate::common::ConfigError;

/// Configuration for a Switchboard system.
///
/// Loaded from TOML. Every section is optional; missing values fall back to the
/// defaults below, which reproduce the reference system (`echoer`, `decider` and a
/// `router` sending `echo.*` to the echoer and `score` to the decider).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SwitchboardConfig {
    /// Tracing and logging configuration
    pub tracing: TracingConfig,
    /// Names of the reference agents
    pub agents: AgentsConfig,
    /// Decision agent configuration
    pub decision: DecisionConfig,
    /// Router mapping, in match order
    pub routes: Vec<Route>,
}

impl Default for SwitchboardConfig {
    fn default() -> Self {
        Self {
            tracing: TracingConfig::default(),
            agents: AgentsConfig::default(),
            decision: DecisionConfig::default(),
            routes: default_routes(),
        }
    }
}

/// Tracing and logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TracingConfig {
    /// Filter directive used when `RUST_LOG` is unset, e.g. `info` or `switchboard=trace`
    pub level: String,
    /// Write logs to this directory instead of stderr
    pub log_directory: Option<String>,
    /// Log file name inside `log_directory`
    pub log_file: String,
    /// Colored output on stderr
    pub ansi: bool,
}

/// Names of the reference agents
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentsConfig {
    /// Echo agent name
    pub echo: String,
    /// Decision agent name
    pub decision: String,
    /// Router agent name
    pub router: String,
}

/// Decision agent configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecisionConfig {
    /// Threshold used when a score carries none
    pub default_threshold: f64,
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            log_directory: None,
            log_file: "switchboard.log".to_string(),
            ansi: true,
        }
    }
}

impl Default for AgentsConfig {
    fn default() -> Self {
        Self {
            echo: "echoer".to_string(),
            decision: "decider".to_string(),
            router: "router".to_string(),
        }
    }
}

impl Default for DecisionConfig {
    fn default() -> Self {
        Self {
            default_threshold: 0.0,
        }
    }
}

fn default_routes() -> Vec<Route> {
    vec![Route::new("echo.", "echoer"), Route::new("score", "decider")]
}

impl SwitchboardConfig {
    /// Load configuration from XDG-compliant locations
    ///
    /// Looks for `switchboard/config.toml` under `$XDG_CONFIG_HOME` (falling back to
    /// `~/.config`) and the XDG config dirs.
    ///
    /// If no configuration file is found, returns the default configuration.
    /// If a configuration file exists but is malformed, logs an error and uses defaults.
    pub fn load() -> Self {
        let (config, outcome) = Self::load_xdg();
        match outcome {
            Ok(Some(path)) => info!("Loaded configuration from: {}", path.display()),
            Ok(None) => info!("No configuration file found, using defaults"),
            Err(e) => error!("{e}"),
        }
        config
    }

    /// Resolve configuration from XDG locations without logging.
    ///
    /// Returns the configuration in effect together with how it was obtained: the
    /// file that was read, `None` when no file exists, or the error that forced a
    /// fallback to defaults. Useful when the outcome must be reported after a
    /// subscriber is installed.
    pub fn load_xdg() -> (Self, Result<Option<PathBuf>, ConfigError>) {
        let path = match xdg::BaseDirectories::with_prefix("switchboard") {
            Ok(dirs) => dirs.find_config_file("config.toml"),
            Err(e) => return (Self::default(), Err(e.into())),
        };
        let Some(path) = path else {
            return (Self::default(), Ok(None));
        };
        match Self::read(&path) {
            Ok(config) => (config, Ok(Some(path))),
            Err(e) => (Self::default(), Err(e)),
        }
    }

    /// Load configuration from an explicit file.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Read`] if the file cannot be read, [`ConfigError::Parse`] if it
    /// is not valid configuration.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        info!("Loading configuration from: {}", path.display());
        Self::read(path)
    }

    fn read(path: &Path) -> Result<Self, ConfigError> {
        let config_str = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&config_str).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Parse configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns the TOML error for malformed input.
    pub fn from_toml(config_str: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(config_str)
    }
}
