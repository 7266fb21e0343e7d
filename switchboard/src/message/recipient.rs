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

use serde::{Deserialize, Serialize};

/// Addressing for a [`Message`](crate::message::Message).
///
/// A message is either directed at one named agent or broadcast to every agent
/// registered on the bus at the time of sending. Modelling this as a sum type
/// keeps the broadcast branch exhaustive wherever the bus resolves targets.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Recipient {
    /// Deliver to the agent registered under this name only.
    Agent(String),
    /// Deliver to every registered agent.
    #[default]
    Broadcast,
}

impl Recipient {
    /// Creates a directed recipient.
    pub fn to(name: impl Into<String>) -> Self {
        Self::Agent(name.into())
    }

    /// Returns `true` for the broadcast marker.
    #[inline]
    pub const fn is_broadcast(&self) -> bool {
        matches!(self, Self::Broadcast)
    }

    /// Returns the target name, or `None` for a broadcast.
    #[inline]
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Agent(name) => Some(name),
            Self::Broadcast => None,
        }
    }
}

impl fmt::Display for Recipient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Agent(name) => f.write_str(name),
            Self::Broadcast => f.write_str("*"),
        }
    }
}

/// Blank names map to [`Recipient::Broadcast`]; no agent can be registered under one.
impl From<&str> for Recipient {
    fn from(name: &str) -> Self {
        Self::from(name.to_string())
    }
}

/// Blank names map to [`Recipient::Broadcast`].
impl From<String> for Recipient {
    fn from(name: String) -> Self {
        if name.trim().is_empty() {
            Self::Broadcast
        } else {
            Self::Agent(name)
        }
    }
}

impl From<&String> for Recipient {
    fn from(name: &String) -> Self {
        Self::from(name.as_str())
    }
}

/// `None` and blank names map to [`Recipient::Broadcast`].
impl<S: Into<String>> From<Option<S>> for Recipient {
    fn from(name: Option<S>) -> Self {
        name.map_or(Self::Broadcast, |name| Self::from(name.into()))
    }
}
