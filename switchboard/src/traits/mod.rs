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

//! Defines the contracts every agent honors so the bus can treat them uniformly.
//!
//! # Key Traits
//!
//! *   [`AgentIdentity`]: Access to the agent's [`AgentCore`](crate::common::AgentCore).
//!     Usually implemented by the `#[switchboard_agent]` attribute.
//! *   [`Agent`]: The handler capability: receive, react, send, introspect.

// --- Public Re-exports ---
pub use agent::Agent;
pub use agent_identity::AgentIdentity;

// --- Submodules ---

/// Defines the [`Agent`] trait.
mod agent;
/// Defines the [`AgentIdentity`] trait.
mod agent_identity;
