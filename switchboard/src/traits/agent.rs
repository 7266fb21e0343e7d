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

use crate::common::BusError;
use crate::message::{Message, Payload, Recipient};
use crate::traits::AgentIdentity;

/// The handler capability implemented by every agent.
///
/// Only [`handle`](Self::handle) is usually overridden. The bus calls
/// [`receive`](Self::receive), which records the message in the agent's inbox and
/// then runs `handle`. Reactions emit messages through [`send`](Self::send), which
/// delivers synchronously: by the time `send` returns, everything it triggered has
/// been delivered too.
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
///
/// use switchboard::prelude::*;
///
/// #[switchboard_agent]
/// struct Shouter {
///     core: AgentCore,
/// }
///
/// impl Agent for Shouter {
///     fn handle(&self, message: &Message) -> Result<(), BusError> {
///         if message.topic() == "say" {
///             self.send(Recipient::Broadcast, "say.loud", message.payload().clone())?;
///         }
///         Ok(())
///     }
/// }
///
/// # fn main() -> Result<(), BusError> {
/// let bus = MessageBus::new();
/// bus.register(Arc::new(Shouter { core: AgentCore::new("shouter")? }))?;
/// bus.send(Message::new("tester", "shouter", "say", Payload::new()));
/// assert_eq!(bus.history_len(), 2);
/// # Ok(())
/// # }
/// ```
pub trait Agent: AgentIdentity + Send + Sync + 'static {
    /// The agent's display name, used in logs.
    ///
    /// Defaults to the core's name. The bus registers, addresses and stamps
    /// senders by [`AgentCore::name`](crate::prelude::AgentCore::name) regardless
    /// of any override.
    fn name(&self) -> &str {
        self.core().name()
    }

    /// Entry point used by the bus: records `message` in the inbox, then reacts.
    ///
    /// # Errors
    ///
    /// Propagates any error returned by [`handle`](Self::handle).
    fn receive(&self, message: &Message) -> Result<(), BusError> {
        self.core().record(message);
        self.handle(message)
    }

    /// The agent's reaction logic. Does nothing by default.
    ///
    /// # Errors
    ///
    /// Implementations typically propagate [`send`](Self::send) failures.
    fn handle(&self, _message: &Message) -> Result<(), BusError> {
        Ok(())
    }

    /// One-time setup hook, called by the orchestration right after registration.
    ///
    /// The bus never calls this itself.
    ///
    /// # Errors
    ///
    /// Implementations may fail setup; the default never does.
    fn on_start(&self) -> Result<(), BusError> {
        Ok(())
    }

    /// Sends a new message from this agent.
    ///
    /// # Errors
    ///
    /// [`BusError::NotRegistered`] before registration, [`BusError::BusDropped`] if
    /// the bus is gone.
    fn send(&self, recipient: Recipient, topic: &str, payload: Payload) -> Result<(), BusError> {
        self.core().send(recipient, topic, payload)
    }

    /// Snapshot of everything this agent has received, in receipt order.
    fn inbox(&self) -> Vec<Message> {
        self.core().inbox()
    }
}
