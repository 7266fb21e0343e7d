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

use std::sync::Arc;

use tracing::{debug, instrument};

use crate::agents::{DecisionAgent, EchoAgent, RouterAgent};
use crate::common::config::SwitchboardConfig;
use crate::common::{AgentRef, BusError, MessageBus};

/// Entry point for building the reference system.
///
/// A marker type, like the bus itself it carries no global state. Use
/// [`SwitchboardApp::launch`] with a loaded [`SwitchboardConfig`], or
/// [`SwitchboardApp::launch_default`].
#[derive(Default, Debug, Clone, Copy)]
pub struct SwitchboardApp;

/// A running reference system: the bus and handles to its three agents.
#[derive(Debug, Clone)]
pub struct Switchboard {
    /// The bus every agent is registered on.
    pub bus: MessageBus,
    /// Replies to `echo` / `echo.*`.
    pub echoer: Arc<EchoAgent>,
    /// Decides on `score`.
    pub decider: Arc<DecisionAgent>,
    /// Forwards by topic.
    pub router: Arc<RouterAgent>,
}

impl SwitchboardApp {
    /// Builds a bus and registers the echo, decision and router agents, in that order.
    ///
    /// Each agent's [`on_start`](crate::traits::Agent::on_start) hook runs right
    /// after its registration succeeds.
    ///
    /// # Errors
    ///
    /// [`BusError::InvalidName`] for a blank configured name,
    /// [`BusError::DuplicateName`] if two configured names collide, or any error
    /// returned by an `on_start` hook.
    #[instrument(skip_all)]
    pub fn launch(config: &SwitchboardConfig) -> Result<Switchboard, BusError> {
        let bus = MessageBus::new();
        let echoer = Arc::new(EchoAgent::new(config.agents.echo.as_str())?);
        let decider = Arc::new(DecisionAgent::with_default_threshold(
            config.agents.decision.as_str(),
            config.decision.default_threshold,
        )?);
        let router = Arc::new(RouterAgent::new(
            config.agents.router.as_str(),
            config.routes.iter().cloned(),
        )?);

        let agents: [AgentRef; 3] = [echoer.clone(), decider.clone(), router.clone()];
        for agent in agents {
            bus.register_agent(agent.clone())?;
            agent.on_start()?;
        }
        debug!(agents = ?bus.agent_names(), "switchboard launched");

        Ok(Switchboard {
            bus,
            echoer,
            decider,
            router,
        })
    }

    /// Builds the reference system with [`SwitchboardConfig::default`].
    ///
    /// # Errors
    ///
    /// Same as [`launch`](Self::launch).
    pub fn launch_default() -> Result<Switchboard, BusError> {
        Self::launch(&SwitchboardConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::AgentIdentity;

    #[test]
    fn colliding_names_fail_launch() {
        let mut config = SwitchboardConfig::default();
        config.agents.router = config.agents.echo.clone();

        let err = SwitchboardApp::launch(&config).unwrap_err();
        assert_eq!(err, BusError::DuplicateName("echoer".to_string()));
    }

    #[test]
    fn registers_in_configured_order() {
        let system = SwitchboardApp::launch_default().unwrap();
        assert_eq!(system.bus.agent_names(), vec!["echoer", "decider", "router"]);
        assert!(system.router.core().is_registered());
    }
}
