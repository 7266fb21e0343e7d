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
use std::io::stdout;

use anyhow::{Context, Result};
use clap::Parser;
use serde_json::json;
use switchboard::prelude::*;
use tracing::{error, info};

use crate::cli::{Cli, Command};
use crate::output::write_history;

mod cli;
mod output;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let (config, origin) = match &cli.config {
        Some(path) => (SwitchboardConfig::load_from(path)?, Ok(Some(path.clone()))),
        None => SwitchboardConfig::load_xdg(),
    };
    let _guard = init_tracing(&config.tracing)?;
    info!("** Switchboard startup **");
    match origin {
        Ok(Some(path)) => info!(path = %path.display(), "configuration loaded"),
        Ok(None) => info!("no configuration file found, using defaults"),
        Err(e) => error!(%e, "configuration rejected, using defaults"),
    }

    let system = SwitchboardApp::launch(&config)?;

    match cli.command.unwrap_or(Command::Demo) {
        Command::Demo => run_demo(&system)?,
        Command::Send {
            topic,
            to,
            from,
            payload: raw,
        } => {
            let value: serde_json::Value =
                serde_json::from_str(&raw).with_context(|| format!("invalid payload JSON: {raw}"))?;
            system.bus.send(Message::new(from, to, topic, payload(value)));
        }
    }

    write_history(&mut stdout().lock(), &system.bus.history(), cli.format)?;
    info!(messages = system.bus.history_len(), "** Switchboard shutdown **");
    Ok(())
}

/// The router stands in for a client: both seeds are broadcast so it can route by topic.
fn run_demo(system: &Switchboard) -> Result<()> {
    system
        .router
        .send(Recipient::Broadcast, "echo", payload(json!({"text": "hello"})))?;
    system.router.send(
        Recipient::Broadcast,
        SCORE_TOPIC,
        payload(json!({"value": 0.72, "threshold": 0.5})),
    )?;
    Ok(())
}
