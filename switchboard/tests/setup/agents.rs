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

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use switchboard::prelude::*;

/// Records what it receives; reacts to nothing.
#[switchboard_agent]
pub struct Recorder {
    core: AgentCore,
    started: AtomicUsize,
}

impl Recorder {
    pub fn create(name: &str) -> anyhow::Result<Arc<Self>> {
        Ok(Arc::new(Self {
            core: AgentCore::new(name)?,
            started: AtomicUsize::new(0),
        }))
    }

    /// How many times `on_start` ran.
    pub fn starts(&self) -> usize {
        self.started.load(Ordering::SeqCst)
    }
}

impl Agent for Recorder {
    fn on_start(&self) -> Result<(), BusError> {
        self.started.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

/// Fails its reaction to every `fail` message.
#[switchboard_agent]
pub struct Faulty {
    core: AgentCore,
}

impl Faulty {
    pub fn create(name: &str) -> anyhow::Result<Arc<Self>> {
        Ok(Arc::new(Self {
            core: AgentCore::new(name)?,
        }))
    }
}

impl Agent for Faulty {
    fn handle(&self, message: &Message) -> Result<(), BusError> {
        if message.topic() == "fail" {
            return Err(BusError::NotRegistered(format!("{}-downstream", self.name())));
        }
        Ok(())
    }
}
