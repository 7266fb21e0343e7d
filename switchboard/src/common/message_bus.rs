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

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Weak};

use parking_lot::Mutex;
use static_assertions::assert_impl_all;
use tracing::{debug, error, instrument, trace};

use crate::common::{AgentRef, BusError};
use crate::message::{Message, Recipient};
use crate::traits::Agent;

/// The central switch for message delivery.
///
/// `MessageBus` owns the registry of agents and the append-only history of every
/// message passed to [`send`](Self::send). It is a cheap handle: clones share the
/// same registry and history.
///
/// Registry and history sit behind a single mutex. The lock is released before
/// any agent is invoked, so reactions may call back into the bus; such nested
/// sends complete, depth-first, before the outer `send` returns.
#[derive(Clone, Default)]
pub struct MessageBus {
    state: Arc<Mutex<BusState>>,
}

/// A non-owning back-reference from an agent to the bus it is registered on.
#[derive(Clone)]
pub(crate) struct WeakBus(Weak<Mutex<BusState>>);

#[derive(Default)]
struct BusState {
    /// Agents in registration order; broadcast delivery follows this order.
    registry: Vec<AgentRef>,
    /// Name to position in `registry`.
    index: HashMap<String, usize>,
    history: Vec<Message>,
}

impl BusState {
    fn lookup(&self, name: &str) -> Option<AgentRef> {
        self.index
            .get(name)
            .map(|&position| Arc::clone(&self.registry[position]))
    }
}

impl MessageBus {
    /// Creates an empty bus.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an agent under the name held by its [`AgentCore`](crate::prelude::AgentCore).
    ///
    /// Binds the agent's back-reference to this bus so it can send. The agent's
    /// [`on_start`](Agent::on_start) hook is *not* called; that is left to the
    /// surrounding orchestration.
    ///
    /// # Errors
    ///
    /// * [`BusError::DuplicateName`] if an agent with the same name is registered.
    /// * [`BusError::AlreadyRegistered`] if the agent is already bound to a bus.
    ///
    /// Neither error changes the registry.
    pub fn register<A: Agent>(&self, agent: Arc<A>) -> Result<(), BusError> {
        self.register_agent(agent)
    }

    /// Registers a type-erased agent. See [`register`](Self::register).
    ///
    /// # Errors
    ///
    /// Same as [`register`](Self::register).
    #[instrument(skip_all, fields(agent = %agent.core().name()))]
    pub fn register_agent(&self, agent: AgentRef) -> Result<(), BusError> {
        let mut state = self.state.lock();
        let name = agent.core().name().to_string();
        if state.index.contains_key(&name) {
            return Err(BusError::DuplicateName(name));
        }
        agent.core().attach(self.downgrade())?;

        let position = state.registry.len();
        state.registry.push(agent);
        state.index.insert(name, position);
        debug!(position, "agent registered");
        Ok(())
    }

    /// Records a message in history and delivers it.
    ///
    /// The message is appended to history unconditionally. A directed message is
    /// handed to its recipient if registered and silently dropped otherwise. A
    /// broadcast is handed to every registered agent, in registration order,
    /// including the sender if it is registered.
    ///
    /// A reaction that returns an error is logged; delivery continues with the
    /// next recipient.
    #[instrument(
        level = "trace",
        skip_all,
        fields(sender = %message.sender(), recipient = %message.recipient(), topic = %message.topic())
    )]
    pub fn send(&self, message: Message) {
        let targets: Vec<AgentRef> = {
            let mut state = self.state.lock();
            state.history.push(message.clone());
            match message.recipient() {
                Recipient::Agent(name) => state.lookup(name).into_iter().collect(),
                Recipient::Broadcast => state.registry.clone(),
            }
        };

        if targets.is_empty() {
            if let Recipient::Agent(name) = message.recipient() {
                debug!(recipient = %name, "no agent registered under recipient name, dropping message");
            }
            return;
        }

        for agent in targets {
            trace!(agent = %agent.core().name(), "delivering message");
            if let Err(error) = agent.receive(&message) {
                error!(agent = %agent.core().name(), topic = %message.topic(), %error, "agent reaction failed");
            }
        }
    }

    /// Returns a snapshot of every message sent so far, in call order.
    ///
    /// The returned vector is owned by the caller; changing it has no effect on the bus.
    #[must_use]
    pub fn history(&self) -> Vec<Message> {
        self.state.lock().history.clone()
    }

    /// Number of messages recorded in history.
    #[must_use]
    pub fn history_len(&self) -> usize {
        self.state.lock().history.len()
    }

    /// Names of registered agents, in registration order.
    #[must_use]
    pub fn agent_names(&self) -> Vec<String> {
        self.state
            .lock()
            .registry
            .iter()
            .map(|agent| agent.core().name().to_string())
            .collect()
    }

    /// Returns `true` if an agent is registered under `name`.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.state.lock().index.contains_key(name)
    }

    /// Looks up a registered agent by name.
    #[must_use]
    pub fn agent(&self, name: &str) -> Option<AgentRef> {
        self.state.lock().lookup(name)
    }

    /// Number of registered agents.
    #[must_use]
    pub fn len(&self) -> usize {
        self.state.lock().registry.len()
    }

    /// Returns `true` when no agent is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub(crate) fn downgrade(&self) -> WeakBus {
        WeakBus(Arc::downgrade(&self.state))
    }
}

impl WeakBus {
    pub(crate) fn upgrade(&self) -> Option<MessageBus> {
        self.0.upgrade().map(|state| MessageBus { state })
    }
}

impl fmt::Debug for MessageBus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.lock();
        let agents: Vec<&str> = state.registry.iter().map(|agent| agent.core().name()).collect();
        f.debug_struct("MessageBus")
            .field("agents", &agents)
            .field("history_len", &state.history.len())
            .finish()
    }
}

impl fmt::Debug for WeakBus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("WeakBus")
            .field(&(self.0.strong_count() > 0))
            .finish()
    }
}

assert_impl_all!(MessageBus: Send, Sync, Clone);
