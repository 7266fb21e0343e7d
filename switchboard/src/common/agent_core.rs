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

use std::fmt;
use std::sync::OnceLock;

use parking_lot::Mutex;
use static_assertions::assert_impl_all;
use tracing::trace;

use crate::common::message_bus::WeakBus;
use crate::common::{BusError, MessageBus};
use crate::message::{Message, Payload, Recipient};

/// The state every agent carries: its name, its bus and its inbox.
///
/// Agents embed an `AgentCore` and expose it through
/// [`AgentIdentity`](crate::traits::AgentIdentity), usually via `#[switchboard_agent]`.
/// The name is validated on construction and never changes. The bus back-reference
/// is set exactly once, by [`MessageBus::register`]; it does not keep the bus alive.
pub struct AgentCore {
    name: String,
    bus: OnceLock<WeakBus>,
    inbox: Mutex<Vec<Message>>,
}

impl AgentCore {
    /// Creates a core for an agent called `name`.
    ///
    /// # Errors
    ///
    /// Returns [`BusError::InvalidName`] if `name` is empty or whitespace-only.
    pub fn new(name: impl Into<String>) -> Result<Self, BusError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(BusError::InvalidName(name));
        }
        Ok(Self {
            name,
            bus: OnceLock::new(),
            inbox: Mutex::new(Vec::new()),
        })
    }

    /// The agent's name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns `true` once the agent has been registered on a bus.
    pub fn is_registered(&self) -> bool {
        self.bus.get().is_some()
    }

    /// Returns a snapshot of every message received so far, in receipt order.
    pub fn inbox(&self) -> Vec<Message> {
        self.inbox.lock().clone()
    }

    /// Appends a message to the inbox.
    pub fn record(&self, message: &Message) {
        self.inbox.lock().push(message.clone());
    }

    /// Sends a new message from this agent.
    ///
    /// The call returns after the message and everything it triggers has been delivered.
    ///
    /// # Errors
    ///
    /// * [`BusError::NotRegistered`] before the agent is registered.
    /// * [`BusError::BusDropped`] if the bus no longer exists.
    pub fn send(
        &self,
        recipient: impl Into<Recipient>,
        topic: impl Into<String>,
        payload: Payload,
    ) -> Result<(), BusError> {
        let bus = self.bus()?;
        bus.send(Message::new(self.name.as_str(), recipient, topic, payload));
        Ok(())
    }

    /// Re-sends `message` from this agent to `recipient`, keeping topic, payload and metadata.
    ///
    /// # Errors
    ///
    /// Same as [`send`](Self::send).
    pub fn forward(
        &self,
        recipient: impl Into<Recipient>,
        message: &Message,
    ) -> Result<(), BusError> {
        let bus = self.bus()?;
        let forwarded = message.forwarded(self.name.as_str(), recipient);
        trace!(agent = %self.name, to = %forwarded.recipient(), topic = %forwarded.topic(), "forwarding");
        bus.send(forwarded);
        Ok(())
    }

    pub(crate) fn attach(&self, bus: WeakBus) -> Result<(), BusError> {
        self.bus.set(bus).map_err(|_| BusError::AlreadyRegistered {
            agent: self.name.clone(),
        })
    }

    fn bus(&self) -> Result<MessageBus, BusError> {
        self.bus
            .get()
            .ok_or_else(|| BusError::NotRegistered(self.name.clone()))?
            .upgrade()
            .ok_or_else(|| BusError::BusDropped(self.name.clone()))
    }
}

impl fmt::Debug for AgentCore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AgentCore")
            .field("name", &self.name)
            .field("registered", &self.is_registered())
            .field("inbox_len", &self.inbox.lock().len())
            .finish()
    }
}

assert_impl_all!(AgentCore: Send, Sync);

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::message::payload;

    #[test]
    fn rejects_blank_names() {
        assert_eq!(AgentCore::new("").unwrap_err(), BusError::InvalidName(String::new()));
        assert!(matches!(AgentCore::new("  \t"), Err(BusError::InvalidName(_))));
        assert_eq!(AgentCore::new(" echoer ").unwrap().name(), " echoer ");
    }

    #[test]
    fn send_before_registration_fails() {
        let core = AgentCore::new("loner").unwrap();
        let err = core.send(None::<&str>, "echo", payload(json!({}))).unwrap_err();
        assert_eq!(err, BusError::NotRegistered("loner".to_string()));
    }

    #[test]
    fn send_after_bus_dropped_fails() {
        let core = AgentCore::new("orphan").unwrap();
        let bus = MessageBus::new();
        core.attach(bus.downgrade()).unwrap();
        drop(bus);

        let err = core.send("anyone", "echo", payload(json!({}))).unwrap_err();
        assert_eq!(err, BusError::BusDropped("orphan".to_string()));
    }
}
