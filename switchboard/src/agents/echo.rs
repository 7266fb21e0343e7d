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

use serde_json::Value;
use tracing::trace;

use crate::prelude::*;

/// Topic namespace the echo agent answers to.
pub const ECHO_TOPIC: &str = "echo";
/// Topic of echo replies.
pub const ECHO_REPLY_TOPIC: &str = "echo.reply";

/// Replies to `echo` and `echo.*` messages.
///
/// The reply goes back to the original sender on `echo.reply`, with the original
/// payload wrapped under the `echo` key. Any other topic is ignored.
#[switchboard_agent]
pub struct EchoAgent {
    core: AgentCore,
}

impl EchoAgent {
    /// Creates an echo agent.
    ///
    /// # Errors
    ///
    /// [`BusError::InvalidName`] for an empty or blank name.
    pub fn new(name: impl Into<String>) -> Result<Self, BusError> {
        Ok(Self {
            core: AgentCore::new(name)?,
        })
    }
}

impl Agent for EchoAgent {
    fn handle(&self, message: &Message) -> Result<(), BusError> {
        if !topic_in_namespace(message.topic(), ECHO_TOPIC) {
            return Ok(());
        }
        trace!(agent = %self.name(), from = %message.sender(), "echoing");
        let mut reply = Payload::new();
        reply.insert("echo".to_string(), Value::Object(message.payload().clone()));
        self.send(Recipient::to(message.sender()), ECHO_REPLY_TOPIC, reply)
    }
}
