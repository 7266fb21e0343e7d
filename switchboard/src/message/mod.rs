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

//! Defines the message value model used on the bus.
//!
//! # Key Types
//!
//! *   [`Message`]: An immutable value carrying sender, recipient, topic, payload and metadata.
//! *   [`Recipient`]: Either a named agent or the broadcast marker.
//! *   [`Payload`]: A JSON object used for both payload and metadata.

// --- Public Re-exports ---
pub use bus_message::Message;
pub use payload::{payload, Payload};
pub use recipient::Recipient;
pub use topic::{is_reply_topic, topic_in_namespace, REPLY_SUFFIX, TOPIC_SEPARATOR};

// --- Submodules ---

/// Defines the [`Message`] value.
mod bus_message;
/// Defines [`Payload`] and the [`payload`] constructor helper.
mod payload;
/// Defines the [`Recipient`] addressing sum type.
mod recipient;
/// Topic naming conventions.
mod topic;
