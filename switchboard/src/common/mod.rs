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

//! Provides the bus, the per-agent core and the ambient pieces around them.
//!
//! # Key Re-exported Components:
//!
//! *   [`MessageBus`]: The central dispatcher owning registry and history.
//! *   [`AgentCore`]: Identity, bus back-reference and inbox embedded in every agent.
//! *   [`SwitchboardApp`] / [`Switchboard`]: Builds and holds the reference system.
//! *   [`BusError`], [`ConfigError`], [`LoggingError`]: Error types.

// --- Public Re-exports ---
pub use agent_core::AgentCore;
pub use errors::{BusError, ConfigError, LoggingError};
pub use launch::{Switchboard, SwitchboardApp};
pub use message_bus::MessageBus;
pub use types::*;

// --- Submodules ---

/// Defines the [`AgentCore`].
mod agent_core;
/// Error types.
mod errors;
/// Defines [`SwitchboardApp`] for building the reference system.
mod launch;
/// Defines the [`MessageBus`].
pub(crate) mod message_bus;
/// Common type aliases.
mod types;

/// TOML configuration loaded from XDG locations or an explicit path.
pub mod config;
/// Tracing subscriber setup.
pub mod logging;
