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

#![forbid(unsafe_code)]
#![forbid(missing_docs)]

//! # Switchboard
//!
//! An in-process, synchronous message bus for a small set of cooperating agents.
//! Agents register on a [`MessageBus`](crate::prelude::MessageBus) under a unique
//! name; the bus delivers each message either to one named recipient or to every
//! registered agent, and agents react by sending new messages back onto the bus.
//!
//! ## Key Concepts
//!
//! - **Messages (`Message`)**: immutable values carrying a sender, a
//!   [`Recipient`](crate::prelude::Recipient), a dot-segmented topic, a JSON payload
//!   and JSON metadata.
//! - **Bus (`MessageBus`)**: owns the agent registry and the append-only delivery
//!   history. Delivery is depth-first: a message sent from inside a reaction is fully
//!   delivered before the reacting agent regains control.
//! - **Agents (`Agent`)**: anything exposing an [`AgentCore`](crate::prelude::AgentCore)
//!   and a `handle` reaction. The `#[switchboard_agent]` attribute wires the core in.
//! - **Reference agents**: [`EchoAgent`](crate::prelude::EchoAgent),
//!   [`DecisionAgent`](crate::prelude::DecisionAgent) and
//!   [`RouterAgent`](crate::prelude::RouterAgent).
//!
//! ## Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use serde_json::json;
//! use switchboard::prelude::*;
//!
//! # fn main() -> Result<(), BusError> {
//! let bus = MessageBus::new();
//! bus.register(Arc::new(EchoAgent::new("echoer")?))?;
//!
//! bus.send(Message::new("tester", "echoer", "echo", payload(json!({"x": 1}))));
//!
//! let history = bus.history();
//! assert_eq!(history.len(), 2);
//! assert_eq!(history[1].topic(), "echo.reply");
//! # Ok(())
//! # }
//! ```

// Lets `#[switchboard_agent]` expand to `::switchboard::...` paths inside this crate too.
extern crate self as switchboard;

/// Bus, agent core, configuration, logging and launch helpers.
pub(crate) mod common;

/// The message value model: messages, recipients, payloads and topics.
pub(crate) mod message;

/// Core traits every agent implements.
pub(crate) mod traits;

/// Reference agents: echo, threshold decision and topic routing.
pub(crate) mod agents;

/// A prelude module for conveniently importing the most commonly used items.
///
/// # Re-exports
///
/// ## Macros (from `switchboard-macro`)
/// *   [`switchboard_macro::switchboard_agent`]: Attribute macro wiring an `AgentCore` field into an agent.
///
/// ## Core Types
/// *   [`crate::common::MessageBus`]: The central dispatcher owning registry and history.
/// *   [`crate::common::AgentCore`]: Per-agent identity, bus back-reference and inbox.
/// *   [`crate::common::SwitchboardApp`]: Builds the reference system from configuration.
/// *   [`crate::common::config::SwitchboardConfig`]: TOML configuration.
/// *   [`crate::common::BusError`]: Errors raised for caller misuse.
/// *   [`crate::message::Message`]: The message value.
/// *   [`crate::message::Recipient`]: Directed or broadcast addressing.
/// *   [`crate::traits::Agent`]: The handler capability.
/// *   [`crate::traits::AgentIdentity`]: Access to an agent's core.
pub mod prelude {
    pub use switchboard_macro::switchboard_agent;

    pub use crate::agents::{
        DecisionAgent, EchoAgent, Route, RouterAgent, DECISION_TOPIC, ECHO_REPLY_TOPIC,
        ECHO_TOPIC, SCORE_TOPIC,
    };
    pub use crate::common::config::{AgentsConfig, DecisionConfig, SwitchboardConfig, TracingConfig};
    pub use crate::common::logging::init_tracing;
    pub use crate::common::{
        AgentCore, AgentRef, BusError, ConfigError, LoggingError, MessageBus, Switchboard,
        SwitchboardApp,
    };
    pub use crate::message::{
        is_reply_topic, payload, topic_in_namespace, Message, Payload, Recipient, REPLY_SUFFIX,
        TOPIC_SEPARATOR,
    };
    pub use crate::traits::{Agent, AgentIdentity};
}
