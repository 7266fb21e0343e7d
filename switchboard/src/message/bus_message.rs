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
use serde_json::Value;
use static_assertions::assert_impl_all;

use crate::message::{Payload, Recipient};

/// A message travelling over the [`MessageBus`](crate::common::MessageBus).
///
/// Fields are private and exposed through accessors only: once a message has been
/// handed to the bus it is never mutated. Forwarding produces a new `Message`
/// (see [`Message::forwarded`]).
///
/// `meta` is reserved for cross-cutting concerns such as timestamps or priority and
/// is never interpreted by the bus.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    sender: String,
    recipient: Recipient,
    topic: String,
    #[serde(default)]
    payload: Payload,
    #[serde(default)]
    meta: Payload,
}

impl Message {
    /// Creates a message with empty metadata.
    ///
    /// # Arguments
    ///
    /// * `sender`: Name of the agent or external caller producing the message.
    /// * `recipient`: A target name, `None` or [`Recipient::Broadcast`] for broadcast.
    /// * `topic`: Dot-segmented topic, e.g. `echo.request`.
    /// * `payload`: Handler-specific structured content.
    pub fn new(
        sender: impl Into<String>,
        recipient: impl Into<Recipient>,
        topic: impl Into<String>,
        payload: Payload,
    ) -> Self {
        Self {
            sender: sender.into(),
            recipient: recipient.into(),
            topic: topic.into(),
            payload,
            meta: Payload::new(),
        }
    }

    /// Adds a metadata entry. Consumes the message, so it can only be used
    /// while the message is still being built.
    #[must_use]
    pub fn with_meta(mut self, key: impl Into<String>, value: Value) -> Self {
        self.meta.insert(key.into(), value);
        self
    }

    /// Creates a copy of this message re-addressed from `sender` to `recipient`.
    ///
    /// Topic, payload and metadata are carried over unchanged.
    #[must_use]
    pub fn forwarded(&self, sender: impl Into<String>, recipient: impl Into<Recipient>) -> Self {
        Self {
            sender: sender.into(),
            recipient: recipient.into(),
            topic: self.topic.clone(),
            payload: self.payload.clone(),
            meta: self.meta.clone(),
        }
    }

    /// The agent or caller that produced this message.
    #[inline]
    pub fn sender(&self) -> &str {
        &self.sender
    }

    /// Where the message is addressed.
    #[inline]
    pub const fn recipient(&self) -> &Recipient {
        &self.recipient
    }

    /// The message topic.
    #[inline]
    pub fn topic(&self) -> &str {
        &self.topic
    }

    /// The handler-specific payload.
    #[inline]
    pub const fn payload(&self) -> &Payload {
        &self.payload
    }

    /// Cross-cutting metadata.
    #[inline]
    pub const fn meta(&self) -> &Payload {
        &self.meta
    }
}

/// Renders `sender -> recipient [topic] payload`, with `*` for broadcasts.
impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} -> {} [{}] {}",
            self.sender,
            self.recipient,
            self.topic,
            Value::Object(self.payload.clone())
        )
    }
}

assert_impl_all!(Message: Send, Sync, Clone);

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::message::payload;

    #[test]
    fn display_marks_broadcast_with_star() {
        let message = Message::new("router", None::<&str>, "echo", payload(json!({"text": "hello"})));
        assert_eq!(message.to_string(), r#"router -> * [echo] {"text":"hello"}"#);
    }

    #[test]
    fn forwarded_keeps_topic_payload_and_meta() {
        let original = Message::new("tester", "router", "echo.hello", payload(json!({"txt": "hi"})))
            .with_meta("priority", json!(3));
        let forwarded = original.forwarded("router", "echoer");

        assert_eq!(forwarded.sender(), "router");
        assert_eq!(forwarded.recipient(), &Recipient::to("echoer"));
        assert_eq!(forwarded.topic(), original.topic());
        assert_eq!(forwarded.payload(), original.payload());
        assert_eq!(forwarded.meta()["priority"], json!(3));
        assert_eq!(original.sender(), "tester");
    }

    #[test]
    fn serializes_recipient_as_tagged_value() -> anyhow::Result<()> {
        let message = Message::new("a", "b", "t", Payload::new());
        let encoded = serde_json::to_value(&message)?;
        assert_eq!(encoded["recipient"], json!({"agent": "b"}));

        let decoded: Message = serde_json::from_value(encoded)?;
        assert_eq!(decoded, message);
        Ok(())
    }
}
