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

use derive_new::new;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::message::TOPIC_SEPARATOR;
use crate::prelude::*;

/// One entry of a router's mapping: topic key to target agent.
///
/// A key ending in the topic separator (`.`) is a prefix: `echo.` matches
/// `echo.hello` and `echo.`, but not `echo`. Any other key matches only the exact topic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, new)]
pub struct Route {
    #[new(into)]
    key: String,
    #[new(into)]
    target: String,
}

impl Route {
    /// The topic key.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Name of the agent matching messages are forwarded to.
    pub fn target(&self) -> &str {
        &self.target
    }

    /// Returns `true` if this route applies to `topic`.
    pub fn matches(&self, topic: &str) -> bool {
        if self.key.ends_with(TOPIC_SEPARATOR) {
            topic.starts_with(&self.key)
        } else {
            topic == self.key
        }
    }
}

/// Forwards messages to other agents by topic.
///
/// Routes are checked in order and the first match wins. The forwarded message
/// keeps its topic, payload and metadata; the router becomes the sender. The
/// router ignores messages it sent itself and any `*.reply` topic, so replies
/// never bounce back through it. Unmatched messages are dropped.
#[switchboard_agent]
pub struct RouterAgent {
    core: AgentCore,
    routes: Vec<Route>,
}

impl RouterAgent {
    /// Creates a router with an ordered list of routes.
    ///
    /// # Errors
    ///
    /// [`BusError::InvalidName`] for an empty or blank name.
    pub fn new(
        name: impl Into<String>,
        routes: impl IntoIterator<Item = Route>,
    ) -> Result<Self, BusError> {
        Ok(Self {
            core: AgentCore::new(name)?,
            routes: routes.into_iter().collect(),
        })
    }

    /// The routes, in match order.
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Returns the target for `topic`, if any route matches.
    pub fn resolve(&self, topic: &str) -> Option<&str> {
        self.routes
            .iter()
            .find(|route| route.matches(topic))
            .map(Route::target)
    }
}

impl Agent for RouterAgent {
    fn handle(&self, message: &Message) -> Result<(), BusError> {
        if message.sender() == self.name() || is_reply_topic(message.topic()) {
            return Ok(());
        }
        let Some(target) = self.resolve(message.topic()) else {
            trace!(agent = %self.name(), topic = %message.topic(), "no route");
            return Ok(());
        };
        self.core().forward(target, message)
    }
}
