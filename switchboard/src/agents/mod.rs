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

//! Reference agents built on the [`Agent`](crate::traits::Agent) capability.
//!
//! *   [`EchoAgent`]: replies to `echo` / `echo.*` with the original payload.
//! *   [`DecisionAgent`]: accepts or rejects a `score` against a threshold.
//! *   [`RouterAgent`]: forwards messages to other agents by topic key.

pub use decision::{DecisionAgent, DECISION_TOPIC, SCORE_TOPIC};
pub use echo::{EchoAgent, ECHO_REPLY_TOPIC, ECHO_TOPIC};
pub use router::{Route, RouterAgent};

mod decision;
mod echo;
mod router;
