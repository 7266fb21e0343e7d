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

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised when the bus or an agent is used incorrectly.
///
/// Every variant signals caller misuse and aborts the operation that raised it
/// without changing bus state. Data-level non-matches (an unknown recipient, an
/// unrecognized topic) are never errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BusError {
    /// An agent name was empty or whitespace-only.
    #[error("agent name must be a non-empty string, got {0:?}")]
    InvalidName(String),

    /// An agent with this name is already registered on the bus.
    #[error("agent name already registered: '{0}'")]
    DuplicateName(String),

    /// The agent is already bound to a bus.
    #[error("agent '{agent}' is already registered on a message bus")]
    AlreadyRegistered {
        /// Name of the agent.
        agent: String,
    },

    /// The agent tried to send before being registered on a bus.
    #[error("agent '{0}' is not registered on a message bus")]
    NotRegistered(String),

    /// The bus the agent was registered on no longer exists.
    #[error("the message bus agent '{0}' was registered on has been dropped")]
    BusDropped(String),
}

/// Errors raised while loading a configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("failed to read configuration file {}: {source}", path.display())]
    Read {
        /// Path that was read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The file was read but is not valid configuration TOML.
    #[error("failed to parse configuration file {}: {source}", path.display())]
    Parse {
        /// Path that was parsed.
        path: PathBuf,
        /// Underlying TOML error.
        #[source]
        source: toml::de::Error,
    },

    /// The XDG base directories could not be resolved.
    #[error("failed to resolve XDG directories: {0}")]
    Xdg(#[from] xdg::BaseDirectoriesError),
}

/// Errors raised while installing the global tracing subscriber.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// The log directory could not be created.
    #[error("could not create log directory {}: {source}", path.display())]
    Directory {
        /// Directory that was requested.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The configured level is not a valid filter directive.
    #[error("invalid tracing filter '{directive}': {message}")]
    Filter {
        /// The rejected directive.
        directive: String,
        /// Parser message.
        message: String,
    },

    /// A global subscriber was already installed.
    #[error("failed to install tracing subscriber: {0}")]
    Subscriber(String),
}
