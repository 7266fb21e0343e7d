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
#![allow(dead_code)]

use switchboard::prelude::*;

// Declare the submodules.
pub mod agents;

pub use agents::*;

/// Builds the reference system: `echoer`, `decider`, and a `router` mapping
/// `echo.` to the echoer and `score` to the decider, with every `on_start` run.
pub fn system() -> anyhow::Result<Switchboard> {
    Ok(SwitchboardApp::launch_default()?)
}

/// Messages in `history` on `topic`, in history order.
pub fn on_topic<'a>(history: &'a [Message], topic: &str) -> Vec<&'a Message> {
    history
        .iter()
        .filter(|message| message.topic() == topic)
        .collect()
}

/// Messages in `history` on `topic` addressed to `recipient`, in history order.
pub fn on_topic_to<'a>(history: &'a [Message], topic: &str, recipient: &str) -> Vec<&'a Message> {
    history
        .iter()
        .filter(|message| message.topic() == topic && message.recipient().name() == Some(recipient))
        .collect()
}
